// error.rs - Errors raised by the grid model and the automaton

use thiserror::Error;

/// Errors that can occur while building or addressing a grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifeError {
    /// Coordinates outside `[0, cols) × [0, rows)`.
    #[error("coordinates out of range (x = {x}, y = {y}) for a {cols}x{rows} grid")]
    OutOfRange {
        x: usize,
        y: usize,
        cols: usize,
        rows: usize,
    },

    /// A grid needs at least one column and one row.
    #[error("invalid grid dimensions {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },

    /// Rule notation that is not of the form `B<digits>/S<digits>`.
    #[error("invalid rule: {0}")]
    InvalidRule(String),
}

pub type Result<T> = std::result::Result<T, LifeError>;
