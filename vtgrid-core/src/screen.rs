//! Terminal screen - grid, cursor, and attribute state plus the operations
//! the protocol engine drives
//!
//! The screen owns the cell grid, the cursor, the sticky attribute, the
//! scrolling region, and the per-instance rendering sink. Every operation
//! clamps caller-supplied coordinates before touching the grid and notifies
//! the sink about exactly what changed.

use crate::cell::{Attr, Cell};
use crate::charset;
use crate::color::Color;
use crate::cursor::{Cursor, SavedState};
use crate::grid::Grid;
use crate::modes::{ModeChanges, Modes};
use crate::sink::RenderSink;
use crate::{Dimensions, Error};

/// The complete screen state of one terminal instance.
#[derive(Debug)]
pub struct Screen<S> {
    grid: Grid,
    cursor: Cursor,
    /// Sticky attribute applied to every subsequent character write.
    attr: Attr,
    default_fg: Color,
    default_bg: Color,
    /// Alternate (line-drawing) charset selected via SO or SGR 11.
    alt_charset: bool,
    /// Scrolling region, inclusive row bounds.
    scroll_min: usize,
    scroll_max: usize,
    /// Region is less than full height.
    scroll_short: bool,
    /// The last write filled the final column; the wrap (or overwrite, when
    /// auto-wrap is off) is deferred until the next character.
    pending_wrap: bool,
    saved: SavedState,
    modes: Modes,
    sink: S,
}

impl<S: RenderSink> Screen<S> {
    /// Create a screen with blank cells and the sink bound for its lifetime.
    pub fn new(dims: Dimensions, sink: S) -> Result<Self, Error> {
        if dims.rows == 0 || dims.cols == 0 {
            return Err(Error::InvalidDimensions {
                cols: dims.cols,
                rows: dims.rows,
            });
        }
        Ok(Self {
            grid: Grid::new(dims),
            cursor: Cursor::default(),
            attr: Attr::default(),
            default_fg: Color::White,
            default_bg: Color::Black,
            alt_charset: false,
            scroll_min: 0,
            scroll_max: dims.rows - 1,
            scroll_short: false,
            pending_wrap: false,
            saved: SavedState::default(),
            modes: Modes::new(),
            sink,
        })
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.grid.cell(row, col)
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn attr(&self) -> Attr {
        self.attr
    }

    pub fn attr_mut(&mut self) -> &mut Attr {
        &mut self.attr
    }

    pub fn set_attr(&mut self, attr: Attr) {
        self.attr = attr;
    }

    pub fn modes(&self) -> &Modes {
        &self.modes
    }

    pub fn modes_mut(&mut self) -> &mut Modes {
        &mut self.modes
    }

    pub fn alt_charset(&self) -> bool {
        self.alt_charset
    }

    pub fn set_alt_charset(&mut self, enabled: bool) {
        self.alt_charset = enabled;
    }

    /// Inclusive scrolling-region bounds.
    pub fn scroll_region(&self) -> (usize, usize) {
        (self.scroll_min, self.scroll_max)
    }

    pub fn scroll_short(&self) -> bool {
        self.scroll_short
    }

    /// Default colors used by SGR 39/49 and by the blank fill of scroll
    /// operations.
    pub fn set_default_colors(&mut self, fg: Color, bg: Color) {
        self.default_fg = fg;
        self.default_bg = bg;
    }

    pub fn default_attr(&self) -> Attr {
        Attr::with_colors(self.default_fg, self.default_bg)
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn bell(&mut self) {
        self.sink.bell();
    }

    fn clamp_cursor(&mut self) {
        self.cursor.clamp(self.grid.rows(), self.grid.cols());
    }

    /// Write one character at the cursor and advance.
    pub fn put_char(&mut self, ch: u8) {
        let cols = self.grid.cols();
        if self.pending_wrap {
            self.pending_wrap = false;
            if self.modes.auto_wrap {
                self.cursor.col = 0;
                self.index();
            }
            // Without auto-wrap the last column is overwritten in place.
        }

        let (row, col) = (self.cursor.row, self.cursor.col);
        // The alternate charset only renders the line-drawing codes; other
        // characters leave the glyph alone but the attribute still follows.
        let write_glyph = !self.alt_charset || charset::is_line_drawing(ch);
        let attr = self.attr;
        let cell = self.grid.cell_mut(row, col);
        if write_glyph {
            cell.ch = ch;
        }
        cell.attr = attr;

        self.sink.invalidate_cell(row, col);

        if col + 1 < cols {
            self.cursor.col = col + 1;
        } else if ch != b' ' {
            // A blank written into the last column does not arm the deferred
            // wrap; the cursor simply stays on the margin.
            self.pending_wrap = true;
        }
    }

    pub fn carriage_return(&mut self) {
        self.cursor.col = 0;
        self.pending_wrap = false;
    }

    pub fn backspace(&mut self) {
        if self.pending_wrap {
            self.pending_wrap = false;
        } else if self.cursor.col > 0 {
            self.cursor.col -= 1;
        }
    }

    /// Advance to the next multiple-of-8 column.
    pub fn tab(&mut self) {
        self.cursor.col = (self.cursor.col + 7) / 8 * 8;
        self.pending_wrap = false;
        self.clamp_cursor();
    }

    /// Line feed. In newline mode this also returns the carriage. A deferred
    /// wrap survives a bare line feed.
    pub fn linefeed(&mut self) {
        if self.modes.newline {
            self.cursor.col = 0;
            self.pending_wrap = false;
        }
        self.index();
    }

    /// Move to the start of the next line, scrolling if needed (NEL).
    pub fn next_line(&mut self) {
        self.cursor.col = 0;
        self.pending_wrap = false;
        self.index();
    }

    /// Move the cursor down one row; past the region bottom it stays there
    /// and the region contents scroll up instead (IND).
    pub fn index(&mut self) {
        self.cursor.row += 1;
        if self.cursor.row <= self.scroll_max {
            return;
        }
        self.cursor.row = self.scroll_max;
        let attr = self.default_attr();
        self.grid
            .shift_lines_up(self.scroll_min, self.scroll_max, 1, attr);
        self.sink.invalidate_screen();
    }

    /// Move the cursor up one row; past the region top it stays there and
    /// the region contents scroll down instead (RI).
    pub fn reverse_index(&mut self) {
        let dest = self.cursor.row as isize - 1;
        if dest >= self.scroll_min as isize {
            self.cursor.row = dest as usize;
            return;
        }
        self.cursor.row = self.scroll_min;
        let attr = self.default_attr();
        self.grid
            .shift_lines_down(self.scroll_min, self.scroll_max, 1, attr);
        self.sink.invalidate_screen();
    }

    /// Save cursor position, attribute, and charset flag (DECSC).
    pub fn save_cursor(&mut self) {
        self.saved.row = self.cursor.row;
        self.saved.col = self.cursor.col;
        self.saved.attr = self.attr;
        self.saved.alt_charset = self.alt_charset;
    }

    /// Restore the DECSC snapshot (DECRC).
    pub fn restore_cursor(&mut self) {
        self.cursor.row = self.saved.row;
        self.cursor.col = self.saved.col;
        self.attr = self.saved.attr;
        self.alt_charset = self.saved.alt_charset;
        self.pending_wrap = false;
    }

    /// Save only the cursor position (CSI s). Shares the slot with DECSC.
    pub fn save_cursor_position(&mut self) {
        self.saved.row = self.cursor.row;
        self.saved.col = self.cursor.col;
    }

    /// Restore only the cursor position (CSI u).
    pub fn restore_cursor_position(&mut self) {
        self.cursor.row = self.saved.row;
        self.cursor.col = self.saved.col;
        self.pending_wrap = false;
    }

    /// Fill the grid with `E`, leaving attributes alone (DECALN).
    pub fn alignment_test(&mut self) {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.cols() {
                self.grid.cell_mut(row, col).ch = b'E';
                self.sink.invalidate_cell(row, col);
            }
        }
    }

    /// Erase display (ED). The erased area is the rectangle spanned by the
    /// range endpoints; partial first and last lines are not special-cased.
    pub fn erase_display(&mut self, mode: u16) {
        let rows = self.grid.rows();
        let cols = self.grid.cols();
        let (start_row, start_col, end_row, end_col) = match mode {
            2 => (0, 0, rows - 1, cols - 1),
            1 => (0, 0, self.cursor.row, self.cursor.col),
            _ => (self.cursor.row, self.cursor.col, rows - 1, cols - 1),
        };
        let attr = self.attr;
        for row in start_row..=end_row {
            self.grid.blank_span(row, start_col, end_col, attr);
        }
        self.sink.invalidate_screen();
    }

    /// Erase in line (EL): 1 = start..=cursor, 2 = whole line, otherwise
    /// cursor..=end.
    pub fn erase_line(&mut self, mode: u16) {
        let cols = self.grid.cols();
        let row = self.cursor.row;
        let (start, end) = match mode {
            1 => (0, self.cursor.col),
            2 => (0, cols - 1),
            _ => (self.cursor.col, cols - 1),
        };
        let attr = self.attr;
        self.grid.blank_span(row, start, end, attr);
        for col in start..=end {
            self.sink.invalidate_cell(row, col);
        }
    }

    /// Blank `n` cells at the cursor in place, no shifting (ECH).
    pub fn erase_chars(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let cols = self.grid.cols();
        let row = self.cursor.row;
        let start = self.cursor.col;
        let end = (start + n - 1).min(cols - 1);
        let attr = self.attr;
        self.grid.blank_span(row, start, end, attr);
        for col in start..=end {
            self.sink.invalidate_cell(row, col);
        }
    }

    /// Insert `n` blanks at the cursor, shifting the row tail right (ICH).
    pub fn insert_chars(&mut self, n: usize) {
        let row = self.cursor.row;
        let col = self.cursor.col;
        let attr = self.attr;
        self.grid.insert_cells(row, col, n, attr);
        for c in col..self.grid.cols() {
            self.sink.invalidate_cell(row, c);
        }
    }

    /// Delete `n` cells at the cursor, shifting the row tail left (DCH).
    pub fn delete_chars(&mut self, n: usize) {
        let row = self.cursor.row;
        let col = self.cursor.col;
        let attr = self.attr;
        self.grid.delete_cells(row, col, n, attr);
        for c in col..self.grid.cols() {
            self.sink.invalidate_cell(row, c);
        }
    }

    /// Insert `n` blank lines at the cursor, pushing lines below it toward
    /// the region bottom; lines pushed past it are dropped (IL).
    pub fn insert_lines(&mut self, n: usize) {
        if self.cursor.row > self.scroll_max {
            return;
        }
        let attr = self.attr;
        self.grid
            .shift_lines_down(self.cursor.row, self.scroll_max, n, attr);
        self.sink.invalidate_screen();
    }

    /// Delete `n` lines at the cursor, pulling lines below it up within the
    /// region; vacated bottom lines are blank-filled (DL).
    pub fn delete_lines(&mut self, n: usize) {
        if self.cursor.row > self.scroll_max {
            return;
        }
        let attr = self.attr;
        self.grid
            .shift_lines_up(self.cursor.row, self.scroll_max, n, attr);
        for row in self.cursor.row..=self.scroll_max {
            for col in 0..self.grid.cols() {
                self.sink.invalidate_cell(row, col);
            }
        }
    }

    /// Set the scrolling region (DECSTBM), 0-based inclusive bounds. A
    /// region whose top exceeds its bottom after clamping is rejected.
    pub fn set_scroll_region(&mut self, top: usize, bottom: usize) {
        let rows = self.grid.rows();
        let top = top.min(rows - 1);
        let bottom = bottom.min(rows - 1);
        if top > bottom {
            log::debug!("rejecting inverted scroll region {}..{}", top, bottom);
            return;
        }
        self.scroll_min = top;
        self.scroll_max = bottom;
        self.scroll_short = top != 0 || bottom != rows - 1;
    }

    /// Move the cursor to an absolute position, clamped.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.cursor.row = row;
        self.cursor.col = col;
        self.pending_wrap = false;
        self.clamp_cursor();
    }

    pub fn cursor_up(&mut self, n: usize) {
        self.cursor.row = self.cursor.row.saturating_sub(n);
        self.pending_wrap = false;
    }

    pub fn cursor_down(&mut self, n: usize) {
        self.cursor.row = self.cursor.row.saturating_add(n);
        self.pending_wrap = false;
        self.clamp_cursor();
    }

    pub fn cursor_left(&mut self, n: usize) {
        self.cursor.col = self.cursor.col.saturating_sub(n);
        self.pending_wrap = false;
    }

    pub fn cursor_right(&mut self, n: usize) {
        self.cursor.col = self.cursor.col.saturating_add(n);
        self.pending_wrap = false;
        self.clamp_cursor();
    }

    pub fn set_col(&mut self, col: usize) {
        self.cursor.col = col;
        self.pending_wrap = false;
        self.clamp_cursor();
    }

    pub fn set_row(&mut self, row: usize) {
        self.cursor.row = row;
        self.pending_wrap = false;
        self.clamp_cursor();
    }

    /// React to mode transitions reported by the set-mode dispatcher. The
    /// side effects fire only on a transition, never because a bit happens
    /// to be set.
    pub fn apply_mode_changes(&mut self, changes: ModeChanges) {
        if changes.column_132 {
            self.cursor = Cursor::default();
            self.pending_wrap = false;
            self.scroll_min = 0;
            self.scroll_max = self.grid.rows() - 1;
            self.scroll_short = false;
            self.erase_all_default();
        }
        if changes.origin {
            self.cursor.col = 0;
            self.cursor.row = if self.modes.origin { self.scroll_min } else { 0 };
            self.pending_wrap = false;
        }
    }

    fn erase_all_default(&mut self) {
        let attr = self.default_attr();
        for row in 0..self.grid.rows() {
            self.grid.blank_row(row, attr);
            for col in 0..self.grid.cols() {
                self.sink.invalidate_cell(row, col);
            }
        }
    }
}
