//! Terminal grid - the fixed rows x cols cell array
//!
//! The grid knows nothing about cursors, modes, or rendering; it provides the
//! raw cell storage plus the row- and line-level primitives the screen builds
//! its operations on. Callers pass pre-clamped coordinates.

use serde::{Deserialize, Serialize};

use crate::cell::{Attr, Cell};
use crate::Dimensions;

/// The cell grid. Row 0 is the top line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    lines: Vec<Vec<Cell>>,
    cols: usize,
    rows: usize,
}

impl Grid {
    /// Create a grid of blank cells with default attributes.
    pub fn new(dims: Dimensions) -> Self {
        let lines = (0..dims.rows)
            .map(|_| vec![Cell::default(); dims.cols])
            .collect();
        Self {
            lines,
            cols: dims.cols,
            rows: dims.rows,
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            cols: self.cols,
            rows: self.rows,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.lines[row][col]
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.lines[row][col]
    }

    /// One full row of cells.
    pub fn row(&self, row: usize) -> &[Cell] {
        &self.lines[row]
    }

    /// Fill a whole row with blanks carrying `attr`.
    pub fn blank_row(&mut self, row: usize, attr: Attr) {
        for cell in &mut self.lines[row] {
            *cell = Cell::blank(attr);
        }
    }

    /// Fill `row` columns `start..=end` (inclusive, pre-clamped) with blanks.
    pub fn blank_span(&mut self, row: usize, start: usize, end: usize, attr: Attr) {
        for cell in &mut self.lines[row][start..=end] {
            *cell = Cell::blank(attr);
        }
    }

    /// Shift the lines in `top..=bottom` up by `n`, blank-filling the vacated
    /// bottom lines with `attr`.
    pub fn shift_lines_up(&mut self, top: usize, bottom: usize, n: usize, attr: Attr) {
        if top > bottom || bottom >= self.rows {
            return;
        }
        let len = bottom - top + 1;
        let n = n.min(len);
        self.lines[top..=bottom].rotate_left(n);
        for row in bottom + 1 - n..=bottom {
            self.blank_row(row, attr);
        }
    }

    /// Shift the lines in `top..=bottom` down by `n`, blank-filling the
    /// vacated top lines with `attr`.
    pub fn shift_lines_down(&mut self, top: usize, bottom: usize, n: usize, attr: Attr) {
        if top > bottom || bottom >= self.rows {
            return;
        }
        let len = bottom - top + 1;
        let n = n.min(len);
        self.lines[top..=bottom].rotate_right(n);
        for row in top..top + n {
            self.blank_row(row, attr);
        }
    }

    /// Insert `n` blank cells at (`row`, `col`), shifting the row tail right.
    /// Cells pushed past the last column are dropped.
    pub fn insert_cells(&mut self, row: usize, col: usize, n: usize, attr: Attr) {
        if col >= self.cols {
            return;
        }
        let n = n.min(self.cols - col);
        if n == 0 {
            return;
        }
        self.lines[row][col..].rotate_right(n);
        self.blank_span(row, col, col + n - 1, attr);
    }

    /// Delete `n` cells at (`row`, `col`), shifting the row tail left and
    /// blank-filling the vacated cells at the end of the row.
    pub fn delete_cells(&mut self, row: usize, col: usize, n: usize, attr: Attr) {
        if col >= self.cols {
            return;
        }
        let n = n.min(self.cols - col);
        if n == 0 {
            return;
        }
        self.lines[row][col..].rotate_left(n);
        self.blank_span(row, self.cols - n, self.cols - 1, attr);
    }
}
