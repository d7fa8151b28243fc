//! Terminal cell representation
//!
//! Each cell in the grid holds an 8-bit character code and the attributes it
//! was written with. Cells are only ever overwritten, never destroyed.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Attributes that affect how a cell is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attr {
    /// Foreground palette color
    pub fg: Color,
    /// Background palette color
    pub bg: Color,
    /// Bold text (SGR 1)
    pub bold: bool,
    /// Blinking text (SGR 5)
    pub blink: bool,
    /// Reverse video (SGR 7)
    pub reverse: bool,
    /// Invisible text (SGR 8)
    pub invisible: bool,
}

impl Attr {
    /// Attributes with the given colors and no styling flags.
    pub fn with_colors(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            blink: false,
            reverse: false,
            invisible: false,
        }
    }
}

impl Default for Attr {
    fn default() -> Self {
        Self::with_colors(Color::White, Color::Black)
    }
}

/// A single cell in the terminal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The 8-bit character code stored in this cell.
    pub ch: u8,
    /// Display attributes.
    pub attr: Attr,
}

impl Cell {
    /// A space cell carrying the given attributes.
    pub fn blank(attr: Attr) -> Self {
        Self { ch: b' ', attr }
    }

    /// Whether this cell shows nothing (a space).
    pub fn is_blank(&self) -> bool {
        self.ch == b' '
    }

    /// The cell's character for display purposes.
    pub fn glyph(&self) -> char {
        self.ch as char
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Attr::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_is_blank() {
        let cell = Cell::default();
        assert!(cell.is_blank());
        assert_eq!(cell.attr, Attr::default());
    }

    #[test]
    fn test_default_attr_is_white_on_black() {
        let attr = Attr::default();
        assert_eq!(attr.fg, Color::White);
        assert_eq!(attr.bg, Color::Black);
        assert!(!attr.bold && !attr.blink && !attr.reverse && !attr.invisible);
    }

    #[test]
    fn test_blank_keeps_attrs() {
        let mut attr = Attr::with_colors(Color::Red, Color::Blue);
        attr.bold = true;
        let cell = Cell::blank(attr);
        assert!(cell.is_blank());
        assert_eq!(cell.attr.fg, Color::Red);
        assert!(cell.attr.bold);
    }
}
