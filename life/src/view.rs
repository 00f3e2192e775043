// view.rs - What the automaton needs from whatever draws it

use crate::cell::Cell;

/// The two display colors a cell can be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellColor {
    Alive,
    Dead,
}

impl From<bool> for CellColor {
    fn from(alive: bool) -> Self {
        if alive { CellColor::Alive } else { CellColor::Dead }
    }
}

impl From<Cell> for CellColor {
    fn from(cell: Cell) -> Self {
        cell.state().into()
    }
}

/// A drawing surface laid out as a grid of cells.
///
/// The automaton sizes its grid from `columns()` and `rows()` and calls
/// `fill_cell` for every cell whose visible state changes. Mapping a cell to
/// pixels (offsets, padding, cell size) is the view's business.
pub trait View {
    fn columns(&self) -> usize;
    fn rows(&self) -> usize;
    fn fill_cell(&mut self, col: usize, row: usize, color: CellColor);
}

/// A view that draws nothing. Useful for headless runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullView {
    pub columns: usize,
    pub rows: usize,
}

impl View for NullView {
    fn columns(&self) -> usize {
        self.columns
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn fill_cell(&mut self, _col: usize, _row: usize, _color: CellColor) {}
}
