//! Terminal mode flags
//!
//! The DEC private modes plus LNM, kept as named booleans instead of the
//! packed state word the wire protocol implies. All flags start cleared; in
//! particular auto-wrap is off until the application enables it.

use serde::{Deserialize, Serialize};

/// Mode flags toggled through CSI h/l and consulted across the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modes {
    /// DECCKM (1) - cursor keys send application sequences
    pub cursor_keys: bool,
    /// DECANM (2) - ANSI mode (as opposed to VT52)
    pub ansi: bool,
    /// DECCOLM (3) - 132 column mode
    pub column_132: bool,
    /// DECSCLM (4) - smooth scroll
    pub smooth_scroll: bool,
    /// DECSCNM (5) - reverse screen
    pub reverse_screen: bool,
    /// DECOM (6) - origin mode
    pub origin: bool,
    /// DECAWM (7) - auto wrap at the right margin
    pub auto_wrap: bool,
    /// DECARM (8) - auto repeat
    pub auto_repeat: bool,
    /// DECINLM (9) - interlace
    pub interlace: bool,
    /// LNM (20) - line feed implies carriage return
    pub newline: bool,
    /// Cursor hidden. Reset-mode 25 hides, set-mode 25 shows; a hidden
    /// cursor is the rxvt "normal" state, hence the inverted sense.
    pub cursor_invisible: bool,
}

/// Which mode bits changed in one CSI h dispatch. Side effects fire on a
/// transition, never merely because a bit is currently set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeChanges {
    pub column_132: bool,
    pub origin: bool,
}

impl Modes {
    pub fn new() -> Self {
        Self::default()
    }

    /// The transition set between `old` and `self`, for the mode-change hook.
    pub fn changes_from(&self, old: &Modes) -> ModeChanges {
        ModeChanges {
            column_132: self.column_132 != old.column_132,
            origin: self.origin != old.origin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modes_start_cleared() {
        let modes = Modes::new();
        assert!(!modes.auto_wrap);
        assert!(!modes.ansi);
        assert!(!modes.cursor_invisible);
    }

    #[test]
    fn test_changes_from_detects_transitions() {
        let old = Modes::new();
        let mut new = old;
        new.column_132 = true;

        let changes = new.changes_from(&old);
        assert!(changes.column_132);
        assert!(!changes.origin);
    }

    #[test]
    fn test_changes_from_ignores_steady_state() {
        let mut old = Modes::new();
        old.origin = true;
        let new = old;

        assert_eq!(new.changes_from(&old), ModeChanges::default());
    }
}
