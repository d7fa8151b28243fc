//! vtgrid-parser - streaming VT100/rxvt escape sequence parser
//!
//! Converts a raw byte stream into semantic terminal actions. The parser
//! handles arbitrary chunk boundaries, never fails, and silently discards
//! malformed, unterminated, or oversized sequences so a client cannot
//! desynchronize it with an unsupported feature.

mod action;
mod params;
mod parser;

pub use action::{Action, CsiAction, EscAction};
pub use params::Params;
pub use parser::{Parser, ParserState, MAX_ESCAPE_LEN};
