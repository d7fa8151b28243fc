//! vtgrid-core - platform-independent terminal screen model
//!
//! This crate provides the data structures and screen operations shared by
//! every vtgrid rendering backend:
//! - The cell grid with per-cell character codes and attributes
//! - Cursor state and the single-slot save/restore snapshot
//! - The scrolling region and mode flags
//! - The [`RenderSink`] trait that backends implement to learn about mutations
//!
//! The model is deterministic: given the same sequence of operations it always
//! produces the same screen state. All coordinates derived from caller input
//! are clamped into grid bounds; no operation here can fail at runtime.

mod cell;
mod charset;
mod color;
mod cursor;
mod grid;
mod modes;
mod screen;
mod sink;

pub use cell::{Attr, Cell};
pub use charset::{is_line_drawing, line_drawing_glyph};
pub use color::{color_pair, Color};
pub use cursor::{Cursor, SavedState};
pub use grid::Grid;
pub use modes::{ModeChanges, Modes};
pub use screen::Screen;
pub use sink::{NullSink, RenderSink};

use thiserror::Error;

/// Terminal dimensions, fixed for the lifetime of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub cols: usize,
    pub rows: usize,
}

impl Dimensions {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { cols: 80, rows: 25 }
    }
}

/// Errors reported at the public construction boundary.
///
/// The protocol engine itself is infallible; malformed input is consumed and
/// discarded rather than reported.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal dimensions must be non-zero (got {cols}x{rows})")]
    InvalidDimensions { cols: usize, rows: usize },
}
