//! The rendering-sink interface
//!
//! The four calls below are the entire contract between the engine and a
//! rendering backend. They fire synchronously inside the mutating call; a
//! sink must not call back into the terminal instance that invoked it.

/// Callback surface a rendering backend implements.
pub trait RenderSink {
    /// Exactly one cell changed.
    fn invalidate_cell(&mut self, row: usize, col: usize);

    /// A full redraw is required. The backend must also reposition any
    /// cursor marker it draws.
    fn invalidate_screen(&mut self);

    /// The cursor moved without content change. The backend erases the old
    /// marker and draws the new one.
    fn invalidate_cursor(&mut self);

    /// The application rang the bell. Advisory; no effect required.
    fn bell(&mut self) {}
}

/// Sink that discards every notification. Useful for headless operation and
/// for tests that only inspect the resulting grid.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn invalidate_cell(&mut self, _row: usize, _col: usize) {}
    fn invalidate_screen(&mut self) {}
    fn invalidate_cursor(&mut self) {}
}
