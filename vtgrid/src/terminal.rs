//! The terminal engine
//!
//! Owns one screen, one parser, and one keyboard resolver, and applies
//! parsed actions to the screen. `render` is the single entry point for
//! application output; `key_event`/`key_press` form the input path. Both are
//! plain synchronous calls that run to completion; the surrounding system
//! serializes access to an instance.

use vtgrid_core::{Color, Dimensions, Error, RenderSink, Screen};
use vtgrid_parser::{Action, CsiAction, EscAction, Params, Parser};

use crate::input::{encode_key, Key, KeyEncoding};
use crate::keymap::KeyboardState;

/// One terminal instance bound to a rendering sink.
#[derive(Debug)]
pub struct Terminal<S> {
    screen: Screen<S>,
    parser: Parser,
    keyboard: KeyboardState,
    encoding: KeyEncoding,
    outbound: Vec<u8>,
}

impl<S: RenderSink> Terminal<S> {
    pub fn new(dims: Dimensions, encoding: KeyEncoding, sink: S) -> Result<Self, Error> {
        Ok(Self {
            screen: Screen::new(dims, sink)?,
            parser: Parser::new(),
            keyboard: KeyboardState::new(),
            encoding,
            outbound: Vec::new(),
        })
    }

    pub fn screen(&self) -> &Screen<S> {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen<S> {
        &mut self.screen
    }

    pub fn encoding(&self) -> KeyEncoding {
        self.encoding
    }

    pub fn set_encoding(&mut self, encoding: KeyEncoding) {
        self.encoding = encoding;
    }

    /// Consume application output bytes, mutating the screen and notifying
    /// the sink. Escape sequences may span calls.
    pub fn render(&mut self, data: &[u8]) {
        for &byte in data {
            if let Some(action) = self.parser.advance(byte) {
                self.apply(action);
            }
        }
        self.screen.sink_mut().invalidate_cursor();
    }

    /// Feed a raw keyboard scan-code event through the resolver and, for a
    /// resolved press, into the encoder.
    pub fn key_event(&mut self, scancode: u8, pressed: bool) {
        if let Some(key) = self.keyboard.process(scancode, pressed) {
            self.key_press(key);
        }
    }

    /// Encode a resolved key press onto the outbound stream.
    pub fn key_press(&mut self, key: Key) {
        let bytes = encode_key(key, self.encoding, self.screen.modes());
        self.outbound.extend_from_slice(&bytes);
    }

    /// Drain the outbound byte stream produced by key presses.
    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.outbound)
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Print(ch) => self.screen.put_char(ch),
            Action::Control(byte) => self.control(byte),
            Action::Esc(esc) => self.escape(esc),
            Action::Csi(csi) => self.csi(csi),
        }
    }

    fn control(&mut self, byte: u8) {
        match byte {
            0x0d => self.screen.carriage_return(),
            0x0a | 0x0b | 0x0c => self.screen.linefeed(),
            0x08 => self.screen.backspace(),
            0x09 => self.screen.tab(),
            0x0e => self.screen.set_alt_charset(true),
            0x0f => self.screen.set_alt_charset(false),
            0x07 => self.screen.bell(),
            _ => log::debug!("unrecognized control byte 0x{:02x}", byte),
        }
    }

    fn escape(&mut self, esc: EscAction) {
        match esc {
            EscAction::Index => self.screen.index(),
            EscAction::ReverseIndex => self.screen.reverse_index(),
            EscAction::NextLine => self.screen.next_line(),
            EscAction::SaveCursor => self.screen.save_cursor(),
            EscAction::RestoreCursor => self.screen.restore_cursor(),
            EscAction::AlignmentTest => self.screen.alignment_test(),
            EscAction::DesignateG0(c) | EscAction::DesignateG1(c) => {
                log::debug!("charset designation 0x{:02x} ignored", c);
            }
        }
    }

    fn csi(&mut self, csi: CsiAction) {
        let p = &csi.params;
        let count = p.get_nonzero_or(0, 1) as usize;
        match csi.final_byte {
            b'm' => self.sgr(&csi.params),
            b'h' => self.dec_set_modes(&csi.params),
            b'l' => self.dec_reset_modes(&csi.params),
            b'J' => self.screen.erase_display(p.raw(0)),
            b'K' => self.screen.erase_line(p.raw(0)),
            b'H' | b'f' => {
                if p.is_empty() {
                    self.screen.move_to(0, 0);
                } else if p.len() >= 2 {
                    let row = p.raw(0).saturating_sub(1) as usize;
                    let col = p.raw(1).saturating_sub(1) as usize;
                    self.screen.move_to(row, col);
                }
                // A single parameter is malformed and moves nothing.
            }
            b'A' => self.screen.cursor_up(count),
            b'B' | b'e' => self.screen.cursor_down(count),
            b'C' | b'a' => self.screen.cursor_right(count),
            b'D' => self.screen.cursor_left(count),
            b'E' => {
                self.screen.cursor_down(count);
                self.screen.set_col(0);
            }
            b'F' => {
                self.screen.cursor_up(count);
                self.screen.set_col(0);
            }
            b'G' | b'`' => self.screen.set_col(p.raw(0).saturating_sub(1) as usize),
            b'd' => self.screen.set_row(p.raw(0).saturating_sub(1) as usize),
            b'@' => self.screen.insert_chars(count),
            b'P' => self.screen.delete_chars(count),
            b'X' => self.screen.erase_chars(count),
            b'L' => self.screen.insert_lines(count),
            b'M' => self.screen.delete_lines(count),
            b'r' => {
                if p.is_empty() {
                    let bottom = self.screen.rows() - 1;
                    self.screen.set_scroll_region(0, bottom);
                } else if p.len() >= 2 {
                    let top = p.raw(0).saturating_sub(1) as usize;
                    let bottom = p.raw(1).saturating_sub(1) as usize;
                    self.screen.set_scroll_region(top, bottom);
                }
                // A single parameter is malformed and changes nothing.
            }
            b's' => self.screen.save_cursor_position(),
            b'u' => self.screen.restore_cursor_position(),
            verb => log::debug!("unrecognized CSI verb 0x{:02x}", verb),
        }
    }

    fn sgr(&mut self, params: &Params) {
        if params.is_empty() {
            let attr = self.screen.default_attr();
            self.screen.set_attr(attr);
            return;
        }
        for param in params.iter() {
            match param {
                0 => {
                    let attr = self.screen.default_attr();
                    self.screen.set_attr(attr);
                }
                1 | 2 | 4 => self.screen.attr_mut().bold = true,
                5 => self.screen.attr_mut().blink = true,
                // 27 sets reverse too; it does not clear it.
                7 | 27 => self.screen.attr_mut().reverse = true,
                8 => self.screen.attr_mut().invisible = true,
                10 => self.screen.set_alt_charset(false),
                11 => self.screen.set_alt_charset(true),
                22 | 24 => self.screen.attr_mut().bold = false,
                25 => self.screen.attr_mut().blink = false,
                28 => self.screen.attr_mut().invisible = false,
                30..=37 => self.screen.attr_mut().fg = Color::from_index((param - 30) as u8),
                40..=47 => self.screen.attr_mut().bg = Color::from_index((param - 40) as u8),
                39 => {
                    let fg = self.screen.default_attr().fg;
                    self.screen.attr_mut().fg = fg;
                }
                49 => {
                    let bg = self.screen.default_attr().bg;
                    self.screen.attr_mut().bg = bg;
                }
                other => log::trace!("ignored SGR parameter {}", other),
            }
        }
    }

    /// DEC set mode. Side effects of COLM and OM fire on the transition
    /// computed from the before/after mode words; COLM always signals a
    /// transition even when the bit is already set.
    fn dec_set_modes(&mut self, params: &Params) {
        if params.is_empty() {
            return;
        }
        let old = *self.screen.modes();
        let mut colm_requested = false;
        for param in params.iter() {
            let modes = self.screen.modes_mut();
            match param {
                1 => modes.cursor_keys = true,
                2 => modes.ansi = true,
                3 => {
                    modes.column_132 = true;
                    colm_requested = true;
                }
                4 => modes.smooth_scroll = true,
                5 => modes.reverse_screen = true,
                6 => modes.origin = true,
                7 => modes.auto_wrap = true,
                8 => modes.auto_repeat = true,
                9 => modes.interlace = true,
                20 => modes.newline = true,
                25 => modes.cursor_invisible = false,
                other => log::debug!("unrecognized DEC set-mode parameter {}", other),
            }
        }
        let mut changes = self.screen.modes().changes_from(&old);
        if colm_requested {
            changes.column_132 = true;
        }
        self.screen.apply_mode_changes(changes);
    }

    /// DEC reset mode. Only parameter 25 is recognized; the hidden cursor is
    /// the rxvt "normal" state. Everything else is consumed and ignored, and
    /// no mode-change side effects fire on the reset side.
    fn dec_reset_modes(&mut self, params: &Params) {
        for param in params.iter() {
            match param {
                25 => self.screen.modes_mut().cursor_invisible = true,
                other => log::debug!("ignored DEC reset-mode parameter {}", other),
            }
        }
    }
}
