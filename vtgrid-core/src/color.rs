//! Palette colors for terminal cells
//!
//! The engine only models the eight-entry VT100/ANSI palette addressed by
//! SGR 30-37 and 40-47. How a palette entry maps to pixels (VGA attribute
//! byte, framebuffer RGB, widget theme) is a backend concern.

use serde::{Deserialize, Serialize};

/// One of the eight base palette colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    /// Look up a palette color by its SGR index (0-7). Indices out of range
    /// wrap, so callers can pass a raw 4-bit field without masking first.
    pub fn from_index(index: u8) -> Self {
        match index & 0x7 {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            _ => Color::White,
        }
    }

    /// The SGR index of this color (0-7).
    pub fn index(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
        }
    }
}

/// Pack a foreground/background pair into the classic text-mode layout:
/// background in the high nibble, foreground in the low nibble.
///
/// Backends that program hardware attribute bytes use this directly; others
/// ignore it and read the [`Color`] values themselves.
pub fn color_pair(fg: Color, bg: Color) -> u8 {
    (bg.index() << 4) | fg.index()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_round_trip() {
        for i in 0..8u8 {
            assert_eq!(Color::from_index(i).index(), i);
        }
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Color::from_index(9), Color::Red);
        assert_eq!(Color::from_index(0x17), Color::White);
    }

    #[test]
    fn test_color_pair_packing() {
        assert_eq!(color_pair(Color::White, Color::Black), 0x07);
        assert_eq!(color_pair(Color::Red, Color::Blue), 0x41);
        assert_eq!(color_pair(Color::Black, Color::White), 0x70);
    }
}
