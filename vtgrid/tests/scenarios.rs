//! End-to-end scenarios: raw byte streams in, screen state and sink
//! notifications out.

use vtgrid::{Attr, Dimensions, KeyEncoding, NullSink, RenderSink, Terminal};

/// Sink that tallies every notification.
#[derive(Debug, Default)]
struct RecordingSink {
    cells: Vec<(usize, usize)>,
    screens: usize,
    cursors: usize,
    bells: usize,
}

impl RenderSink for RecordingSink {
    fn invalidate_cell(&mut self, row: usize, col: usize) {
        self.cells.push((row, col));
    }

    fn invalidate_screen(&mut self) {
        self.screens += 1;
    }

    fn invalidate_cursor(&mut self) {
        self.cursors += 1;
    }

    fn bell(&mut self) {
        self.bells += 1;
    }
}

fn headless(cols: usize, rows: usize) -> Terminal<NullSink> {
    Terminal::new(Dimensions::new(cols, rows), KeyEncoding::Vt100, NullSink).expect("dimensions")
}

#[test]
fn clear_position_write() {
    let mut term = headless(80, 25);
    term.render(b"\x1b[2J\x1b[5;10HHi");

    for row in 0..25 {
        for col in 0..80 {
            let cell = term.screen().cell(row, col);
            match (row, col) {
                (4, 9) => assert_eq!(cell.ch, b'H'),
                (4, 10) => assert_eq!(cell.ch, b'i'),
                _ => assert!(cell.is_blank(), "unexpected content at {},{}", row, col),
            }
            assert_eq!(cell.attr, Attr::default());
        }
    }
    let cursor = term.screen().cursor();
    assert_eq!((cursor.row, cursor.col), (4, 11));
}

#[test]
fn scroll_region_confines_linefeed() {
    let mut term = headless(80, 25);
    // Number every line so the untouched ones can be compared exactly.
    for row in 0..25 {
        term.render(format!("\x1b[{};1Hline{:02}", row + 1, row).as_bytes());
    }
    let below_before: Vec<Vec<u8>> = (5..25)
        .map(|row| term.screen().grid().row(row).iter().map(|c| c.ch).collect())
        .collect();

    // Region rows 0..=4, line feed issued at the region bottom.
    term.render(b"\x1b[1;5r\x1b[5;1H\n");

    let screen = term.screen();
    let row0: Vec<u8> = screen.grid().row(0).iter().map(|c| c.ch).collect();
    assert_eq!(&row0[..6], b"line01");
    assert!(screen.grid().row(4).iter().all(|c| c.is_blank()));

    let below_after: Vec<Vec<u8>> = (5..25)
        .map(|row| screen.grid().row(row).iter().map(|c| c.ch).collect())
        .collect();
    assert_eq!(below_before, below_after);
}

#[test]
fn sgr_is_sticky_per_cell() {
    let mut term = headless(80, 25);
    term.render(b"\x1b[1;31mA\x1b[0mB");

    let first = term.screen().cell(0, 0);
    assert!(first.attr.bold);
    assert_eq!(first.attr.fg, vtgrid::Color::Red);

    let second = term.screen().cell(0, 1);
    assert_eq!(second.attr, Attr::default());

    // The earlier cell keeps the attribute it was written with.
    let first_again = term.screen().cell(0, 0);
    assert!(first_again.attr.bold);
}

#[test]
fn overflowed_sequence_leaves_no_residue() {
    let mut term = headless(80, 25);
    let mut junk = b"\x1b[".to_vec();
    junk.extend(std::iter::repeat(b'7').take(4000));
    term.render(&junk);

    // The engine must accept and fully honor the next real sequence.
    term.render(b"\x1b[2J\x1b[3;3Hok");
    assert_eq!(term.screen().cell(2, 2).ch, b'o');
    assert_eq!(term.screen().cell(2, 3).ch, b'k');
    assert!(term.screen().cell(0, 0).is_blank());
}

#[test]
fn sink_sees_cell_screen_cursor_and_bell() {
    let sink = RecordingSink::default();
    let mut term =
        Terminal::new(Dimensions::new(10, 4), KeyEncoding::Vt100, sink).expect("dimensions");

    term.render(b"ab");
    {
        let sink = term.screen_mut().sink_mut();
        assert_eq!(sink.cells, vec![(0, 0), (0, 1)]);
        // One cursor notification per render call.
        assert_eq!(sink.cursors, 1);
        assert_eq!(sink.screens, 0);
    }

    term.render(b"\x1b[2J");
    assert_eq!(term.screen_mut().sink_mut().screens, 1);

    term.render(b"\x07");
    assert_eq!(term.screen_mut().sink_mut().bells, 1);
}

#[test]
fn scrolling_notifies_full_screen() {
    let sink = RecordingSink::default();
    let mut term =
        Terminal::new(Dimensions::new(10, 3), KeyEncoding::Vt100, sink).expect("dimensions");
    term.render(b"\x1b[3;1H\n");
    assert_eq!(term.screen_mut().sink_mut().screens, 1);
}

#[test]
fn keyboard_round_trip_through_terminal() {
    let mut term = headless(80, 25);
    // Application enables ANSI + application cursor keys, then the user
    // presses Up via its scan code.
    term.render(b"\x1b[?2;1h");
    term.key_event(72, true);
    term.key_event(72, false);
    assert_eq!(term.take_output(), b"\x1bOA");
}

#[test]
fn rxvt_profile_is_selectable_per_instance() {
    let mut term =
        Terminal::new(Dimensions::new(80, 25), KeyEncoding::Rxvt, NullSink).expect("dimensions");
    term.key_event(59, true); // F1
    term.key_event(83, true); // keypad delete resolves to DEL
    assert_eq!(term.take_output(), b"\x1b[11~\x7f");
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(Terminal::new(Dimensions::new(0, 0), KeyEncoding::Vt100, NullSink).is_err());
}
