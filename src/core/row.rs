//! A row of cells.

use crate::core::attrs::TextAttributes;
use crate::core::cell::Cell;

/// A single screen row: a fixed-length (at any instant) sequence of cells,
/// plus the flag that records whether this row's content wrapped into the
/// next row due to auto-wrap.
#[derive(Debug, Clone)]
pub struct Row {
    cells: Vec<Cell>,
    /// Set when a printable glyph wrapped off the end of this row into the
    /// next one; used to suppress a hard newline when rows are joined (e.g.
    /// for copy/paste reflow) and cleared whenever the row is freshly
    /// (re)written from column 0 without a wrap.
    pub line_overflow: bool,
}

impl Row {
    #[must_use]
    pub fn blank(width: usize, attrs: TextAttributes) -> Self {
        Self { cells: (0..width).map(|_| Cell::blank(attrs)).collect(), line_overflow: false }
    }

    #[must_use]
    pub fn len(&self) -> usize { self.cells.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.cells.is_empty() }

    #[must_use]
    pub fn cells(&self) -> &[Cell] { &self.cells }

    pub fn cells_mut(&mut self) -> &mut [Cell] { &mut self.cells }

    #[must_use]
    pub fn get(&self, col: usize) -> Option<&Cell> { self.cells.get(col) }

    pub fn get_mut(&mut self, col: usize) -> Option<&mut Cell> { self.cells.get_mut(col) }

    pub fn set(&mut self, col: usize, cell: Cell) {
        if let Some(slot) = self.cells.get_mut(col) { *slot = cell; }
    }

    /// Resize, clipping or padding with blanks carrying `attrs`. Per
    /// spec.md's resize rule, width changes never re-flow content.
    pub fn resize(&mut self, new_width: usize, attrs: TextAttributes) {
        match new_width.cmp(&self.cells.len()) {
            std::cmp::Ordering::Less => self.cells.truncate(new_width),
            std::cmp::Ordering::Greater => {
                self.cells.resize_with(new_width, || Cell::blank(attrs));
            }
            std::cmp::Ordering::Equal => {}
        }
    }

    /// Fill `range` with blanks carrying `attrs`, clamped to this row's
    /// bounds.
    pub fn erase_range(&mut self, range: std::ops::Range<usize>, attrs: TextAttributes) {
        let end = range.end.min(self.cells.len());
        for i in range.start.min(end)..end {
            self.cells[i] = Cell::blank(attrs);
        }
    }

    pub fn fill_blank(&mut self, attrs: TextAttributes) {
        for cell in &mut self.cells { *cell = Cell::blank(attrs); }
    }

    /// If shifting `cols` right would orphan half of a wide cell at the
    /// boundary, blank that half. Called before any insert/delete/erase
    /// primitive that can split a wide cell.
    pub fn blank_orphaned_wide_cell_at(&mut self, col: usize, attrs: TextAttributes) {
        if let Some(cell) = self.cells.get(col) {
            if cell.is_spacer() && col > 0 {
                self.cells[col - 1] = Cell::blank(attrs);
            }
        }
        if let Some(cell) = self.cells.get(col) {
            if cell.is_wide() {
                if let Some(next) = self.cells.get_mut(col + 1) {
                    *next = Cell::blank(attrs);
                }
            }
        }
    }
}
