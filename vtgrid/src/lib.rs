//! vtgrid - a reusable VT100/rxvt terminal emulation engine
//!
//! A stateful interpreter of the ANSI/VT100/DEC control-sequence protocol:
//! it turns a raw application byte stream into a mutated character grid plus
//! cursor and attribute state, and encodes logical key events back into the
//! byte sequences a terminal application expects.
//!
//! The engine is rendering-agnostic. A backend (text-mode console,
//! framebuffer console, terminal widget) implements [`RenderSink`] and is
//! told, synchronously, which cells changed; how those cells reach pixels or
//! hardware registers is entirely its business.
//!
//! ```
//! use vtgrid::{Dimensions, KeyEncoding, NullSink, Terminal};
//!
//! let mut term = Terminal::new(Dimensions::default(), KeyEncoding::Vt100, NullSink).unwrap();
//! term.render(b"\x1b[2J\x1b[1;1Hhello");
//! assert_eq!(term.screen().cell(0, 0).ch, b'h');
//! ```
//!
//! Scope: a VT100/rxvt-ish subset. No UTF-8, no 256/true color, no mouse
//! reporting, no alternate screen, no resize; grid dimensions are fixed at
//! construction.

mod input;
mod keymap;
mod terminal;

pub use input::{encode_key, Key, KeyEncoding};
pub use keymap::{KeyboardState, Modifiers};
pub use terminal::Terminal;

pub use vtgrid_core::{
    color_pair, is_line_drawing, line_drawing_glyph, Attr, Cell, Color, Cursor, Dimensions, Error,
    Grid, ModeChanges, Modes, NullSink, RenderSink, SavedState, Screen,
};
pub use vtgrid_parser::{Action, CsiAction, EscAction, Params, Parser, ParserState};
