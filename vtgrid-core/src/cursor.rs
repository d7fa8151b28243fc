//! Cursor state and the save/restore snapshot

use serde::{Deserialize, Serialize};

use crate::cell::Attr;

/// Cursor position, 0-indexed. Always within grid bounds after any public
/// screen operation returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    /// Clamp the position into a rows x cols grid.
    pub fn clamp(&mut self, rows: usize, cols: usize) {
        if self.row >= rows {
            self.row = rows - 1;
        }
        if self.col >= cols {
            self.col = cols - 1;
        }
    }
}

/// The single save slot shared by DECSC/DECRC and CSI s/u.
///
/// CSI s/u touch only the position fields; DECSC/DECRC additionally snapshot
/// the current attribute and the alternate-charset flag. There is exactly one
/// slot: a second save overwrites the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedState {
    pub row: usize,
    pub col: usize,
    pub attr: Attr,
    pub alt_charset: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_clamp() {
        let mut cursor = Cursor { row: 30, col: 100 };
        cursor.clamp(25, 80);
        assert_eq!(cursor.row, 24);
        assert_eq!(cursor.col, 79);
    }

    #[test]
    fn test_cursor_clamp_in_bounds_is_noop() {
        let mut cursor = Cursor { row: 3, col: 7 };
        cursor.clamp(25, 80);
        assert_eq!(cursor, Cursor { row: 3, col: 7 });
    }
}
