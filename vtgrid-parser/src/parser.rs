//! The escape sequence state machine
//!
//! An explicit state enumeration replaces the classic "escape mode flag plus
//! try-to-interpret-after-every-byte" structure, so the cancel-on-overflow
//! and dispatch-on-terminator paths can be exercised independently.
//!
//! Control bytes 1-31 are routed to the caller from any state; ESC, CAN,
//! SUB, and the 8-bit CSI introducer are the only ones the parser consumes
//! itself. NUL is ignored everywhere.

use crate::action::{Action, CsiAction, EscAction};
use crate::params::Params;

/// Accumulator bound for one escape sequence. A sequence reaching this
/// length without a terminator is force-cancelled and dropped.
pub const MAX_ESCAPE_LEN: usize = 128;

/// Parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Plain text.
    Ground,
    /// ESC seen, first sequence byte pending.
    Escape,
    /// ESC # seen, selector byte pending.
    EscapeHash,
    /// ESC ( or ESC ) seen, charset byte pending.
    Designate(u8),
    /// Accumulating a CSI parameter string.
    Csi,
    /// Accumulating an OSC payload (discarded at the terminating BEL).
    Osc,
}

/// The streaming parser.
#[derive(Debug, Clone)]
pub struct Parser {
    state: ParserState,
    buf: Vec<u8>,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            state: ParserState::Ground,
            buf: Vec::with_capacity(MAX_ESCAPE_LEN),
        }
    }

    pub fn state(&self) -> ParserState {
        self.state
    }

    /// Drop any sequence in progress and return to ground.
    pub fn cancel(&mut self) {
        self.state = ParserState::Ground;
        self.buf.clear();
    }

    /// Feed a chunk, invoking `callback` for every completed action.
    /// Sequences may span chunk boundaries.
    pub fn parse<F>(&mut self, data: &[u8], mut callback: F)
    where
        F: FnMut(Action),
    {
        for &byte in data {
            if let Some(action) = self.advance(byte) {
                callback(action);
            }
        }
    }

    /// Feed a chunk and collect the resulting actions.
    pub fn parse_collect(&mut self, data: &[u8]) -> Vec<Action> {
        let mut actions = Vec::new();
        self.parse(data, |action| actions.push(action));
        actions
    }

    /// Advance by one byte.
    pub fn advance(&mut self, byte: u8) -> Option<Action> {
        match byte {
            0x00 => None,
            // ESC starts a sequence, aborting any previous one.
            0x1B => {
                self.enter_escape();
                None
            }
            // CAN and SUB interrupt escape sequences.
            0x18 | 0x1A => {
                self.cancel();
                None
            }
            0x01..=0x1F => self.control(byte),
            // 8-bit CSI, equivalent to ESC [.
            0x9B => {
                self.enter_escape();
                self.state = ParserState::Csi;
                None
            }
            _ => match self.state {
                ParserState::Ground => Some(Action::Print(byte)),
                ParserState::Escape => self.escape(byte),
                ParserState::EscapeHash => self.escape_hash(byte),
                ParserState::Designate(intro) => self.designate(intro, byte),
                ParserState::Csi => self.csi(byte),
                ParserState::Osc => self.osc(byte),
            },
        }
    }

    fn enter_escape(&mut self) {
        self.state = ParserState::Escape;
        self.buf.clear();
    }

    fn control(&mut self, byte: u8) -> Option<Action> {
        // BEL terminates an OSC payload instead of executing.
        if self.state == ParserState::Osc && byte == 0x07 {
            log::trace!("discarding {}-byte OSC payload", self.buf.len());
            self.cancel();
            return None;
        }
        Some(Action::Control(byte))
    }

    fn escape(&mut self, byte: u8) -> Option<Action> {
        let action = match byte {
            b'M' => EscAction::ReverseIndex,
            b'D' => EscAction::Index,
            b'E' => EscAction::NextLine,
            b'7' => EscAction::SaveCursor,
            b'8' => EscAction::RestoreCursor,
            b'#' => {
                self.state = ParserState::EscapeHash;
                return None;
            }
            b'(' | b')' => {
                self.state = ParserState::Designate(byte);
                return None;
            }
            b'[' => {
                self.state = ParserState::Csi;
                return None;
            }
            b']' => {
                self.state = ParserState::Osc;
                return None;
            }
            _ => {
                log::debug!("discarding unrecognized escape 0x{:02x}", byte);
                self.cancel();
                return None;
            }
        };
        self.cancel();
        Some(Action::Esc(action))
    }

    fn escape_hash(&mut self, byte: u8) -> Option<Action> {
        let action = match byte {
            b'8' => Some(Action::Esc(EscAction::AlignmentTest)),
            _ => {
                log::debug!("discarding unrecognized escape # 0x{:02x}", byte);
                None
            }
        };
        self.cancel();
        action
    }

    fn designate(&mut self, intro: u8, byte: u8) -> Option<Action> {
        let action = if intro == b'(' {
            EscAction::DesignateG0(byte)
        } else {
            EscAction::DesignateG1(byte)
        };
        self.cancel();
        Some(Action::Esc(action))
    }

    fn csi(&mut self, byte: u8) -> Option<Action> {
        if is_csi_terminator(byte) {
            let params = Params::parse(&self.buf);
            self.cancel();
            return Some(Action::Csi(CsiAction {
                params,
                final_byte: byte,
            }));
        }
        if self.buf.len() >= MAX_ESCAPE_LEN {
            log::debug!("CSI accumulator overflow, dropping sequence");
            self.cancel();
            return None;
        }
        self.buf.push(byte);
        None
    }

    fn osc(&mut self, byte: u8) -> Option<Action> {
        if self.buf.len() >= MAX_ESCAPE_LEN {
            log::debug!("OSC accumulator overflow, dropping payload");
            self.cancel();
            return None;
        }
        self.buf.push(byte);
        None
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// The byte class that ends a CSI sequence.
fn is_csi_terminator(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'@' || byte == b'`'
}
