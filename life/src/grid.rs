// grid.rs - Fixed-size toroidal grid of packed cells

use crate::cell::Cell;
use crate::error::{LifeError, Result};

/// Neighbor offsets in visiting order: upper row left to right, then the
/// two side cells, then the lower row left to right.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Wraps `coord` onto `[0, dim)`, so `-1` maps to `dim - 1` and `dim` to `0`.
pub fn wrap(coord: isize, dim: usize) -> usize {
    coord.rem_euclid(dim as isize) as usize
}

/// Row-major grid of `cols × rows` cells, addressed as `y * cols + x`.
/// Neighbor lookups wrap at every edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(LifeError::InvalidDimensions { cols, rows });
        }
        Ok(Self {
            cols,
            rows,
            cells: vec![Cell::DEAD; cols * rows],
        })
    }

    /// `(cols, rows)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cell(&self, x: usize, y: usize) -> Result<Cell> {
        let index = self.index(x, y)?;
        Ok(self.cells[index])
    }

    pub fn set_cell_state(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let index = self.index(x, y)?;
        self.cells[index] = self.cells[index].with_state(alive);
        Ok(())
    }

    pub fn set_cell_next_state(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        let index = self.index(x, y)?;
        self.cells[index] = self.cells[index].with_next_state(alive);
        Ok(())
    }

    /// Visits every cell once, y outer and x inner.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(usize, usize, Cell),
    {
        for (index, &cell) in self.cells.iter().enumerate() {
            visit(index % self.cols, index / self.cols, cell);
        }
    }

    /// Replaces every cell with `transform(x, y, cell)`, in row-major order.
    pub fn map<F>(&mut self, mut transform: F)
    where
        F: FnMut(usize, usize, Cell) -> Cell,
    {
        let cols = self.cols;
        for (index, cell) in self.cells.iter_mut().enumerate() {
            *cell = transform(index % cols, index / cols, *cell);
        }
    }

    /// Commits every cell, reporting `(x, y, old, new)` for each one,
    /// whether or not it changed.
    pub fn commit_all<F>(&mut self, mut visit: F)
    where
        F: FnMut(usize, usize, Cell, Cell),
    {
        let cols = self.cols;
        for (index, cell) in self.cells.iter_mut().enumerate() {
            let old = *cell;
            *cell = old.commit();
            visit(index % cols, index / cols, old, *cell);
        }
    }

    /// Folds `reduce` over the 8 wrapped neighbors of `(x, y)`.
    pub fn reduce_neighbors<A, F>(&self, x: usize, y: usize, reduce: F, init: A) -> Result<A>
    where
        F: FnMut(usize, usize, Cell, A) -> A,
    {
        self.index(x, y)?;
        Ok(self.reduce_neighbors_unchecked(x, y, reduce, init))
    }

    /// The 8 wrapped neighbor coordinates of `(x, y)`, in `reduce_neighbors` order.
    pub fn neighbors(&self, x: usize, y: usize) -> Result<[(usize, usize); 8]> {
        self.index(x, y)?;
        Ok(self.neighbors_unchecked(x, y))
    }

    /// Number of cells whose current state is alive.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.state()).count()
    }

    pub(crate) fn reduce_neighbors_unchecked<A, F>(&self, x: usize, y: usize, mut reduce: F, init: A) -> A
    where
        F: FnMut(usize, usize, Cell, A) -> A,
    {
        self.neighbors_unchecked(x, y)
            .into_iter()
            .fold(init, |acc, (nx, ny)| reduce(nx, ny, self.get_unchecked(nx, ny), acc))
    }

    pub(crate) fn neighbors_unchecked(&self, x: usize, y: usize) -> [(usize, usize); 8] {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| {
            (
                wrap(x as isize + dx, self.cols),
                wrap(y as isize + dy, self.rows),
            )
        })
    }

    pub(crate) fn get_unchecked(&self, x: usize, y: usize) -> Cell {
        self.cells[y * self.cols + x]
    }

    pub(crate) fn set_next_state_unchecked(&mut self, x: usize, y: usize, alive: bool) {
        let index = y * self.cols + x;
        self.cells[index] = self.cells[index].with_next_state(alive);
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.cols || y >= self.rows {
            return Err(LifeError::OutOfRange {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(y * self.cols + x)
    }
}
