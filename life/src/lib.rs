//! Conway's Game of Life on a wrap-around grid.
//!
//! [`Grid`] stores packed [`Cell`]s and provides the two-phase advance
//! primitive (decide next states, then commit). [`GameOfLife`] drives it with
//! a [`Rule`], recomputing only cells within one step of a live cell, and
//! reports state flips to a [`View`].

pub mod automaton;
pub mod cell;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rule;
pub mod view;

pub use automaton::GameOfLife;
pub use cell::Cell;
pub use error::{LifeError, Result};
pub use grid::{Grid, wrap};
pub use patterns::{PATTERNS, Pattern};
pub use rule::{Conway, LifeLike, Rule};
pub use view::{CellColor, NullView, View};
