//! Terminal actions produced by the parser
//!
//! These carry the semantic meaning of parsed input; applying them to a
//! screen is the terminal's job.

use crate::params::Params;

/// One parsed unit of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print a character at the cursor.
    Print(u8),

    /// Execute a C0 control character (CR, LF, BS, TAB, SO, SI, BEL, ...).
    /// ESC, CAN, SUB, and the 8-bit CSI byte are consumed by the parser
    /// itself and never appear here.
    Control(u8),

    /// A complete non-CSI escape sequence.
    Esc(EscAction),

    /// A complete CSI sequence.
    Csi(CsiAction),
}

/// Non-CSI escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscAction {
    /// ESC D - index: cursor down, scrolling at the region bottom
    Index,
    /// ESC M - reverse index: cursor up, scrolling at the region top
    ReverseIndex,
    /// ESC E - next line
    NextLine,
    /// ESC 7 - save cursor, attribute, and charset (DECSC)
    SaveCursor,
    /// ESC 8 - restore the DECSC snapshot (DECRC)
    RestoreCursor,
    /// ESC # 8 - screen alignment test (DECALN)
    AlignmentTest,
    /// ESC ( C - designate G0; accepted but not implemented
    DesignateG0(u8),
    /// ESC ) C - designate G1; accepted but not implemented
    DesignateG1(u8),
}

/// A CSI sequence: its parameters and final (verb) byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsiAction {
    pub params: Params,
    pub final_byte: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csi_action_params() {
        let csi = CsiAction {
            params: Params::from_slice(&[10, 20]),
            final_byte: b'H',
        };
        assert_eq!(csi.params.raw(0), 10);
        assert_eq!(csi.params.raw(1), 20);
        assert_eq!(csi.params.get_nonzero_or(5, 1), 1);
    }
}
