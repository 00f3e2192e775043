// rule.rs - Transition rules: (alive, live neighbor count) -> next state

use std::fmt;
use std::str::FromStr;

use crate::error::LifeError;

/// Decides a cell's next state from its current state and live neighbor count.
///
/// The automaton only recomputes cells near a live cell, so a rule must keep a
/// dead cell with no live neighbors dead (`next_state(false, 0) == false`).
/// Rules that break this still run, but births in empty regions never happen.
pub trait Rule {
    fn next_state(&self, alive: bool, live_neighbors: u8) -> bool;
}

impl<F> Rule for F
where
    F: Fn(bool, u8) -> bool,
{
    fn next_state(&self, alive: bool, live_neighbors: u8) -> bool {
        self(alive, live_neighbors)
    }
}

/// Standard Conway rules: survive on 2 or 3, birth on exactly 3.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Conway;

impl Rule for Conway {
    fn next_state(&self, alive: bool, live_neighbors: u8) -> bool {
        matches!((alive, live_neighbors), (true, 2) | (true, 3) | (false, 3))
    }
}

/// Birth/survival rule over the 8-cell neighborhood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LifeLike {
    /// Bit `i` set means a dead cell with `i` live neighbors becomes alive.
    pub birth: u16,
    /// Bit `i` set means a live cell with `i` live neighbors survives.
    pub survival: u16,
}

impl LifeLike {
    /// B3/S23
    pub const fn conway() -> Self {
        Self {
            birth: 1 << 3,
            survival: (1 << 2) | (1 << 3),
        }
    }

    /// B36/S23 - known for its replicator pattern
    pub const fn highlife() -> Self {
        Self {
            birth: (1 << 3) | (1 << 6),
            survival: (1 << 2) | (1 << 3),
        }
    }

    /// B2/S - every live cell dies, only birth
    pub const fn seeds() -> Self {
        Self {
            birth: 1 << 2,
            survival: 0,
        }
    }

    /// B3678/S34678 - symmetric under on/off inversion
    pub const fn day_and_night() -> Self {
        Self {
            birth: (1 << 3) | (1 << 6) | (1 << 7) | (1 << 8),
            survival: (1 << 3) | (1 << 4) | (1 << 6) | (1 << 7) | (1 << 8),
        }
    }

    /// B3/S012345678 - cells never die
    pub const fn life_without_death() -> Self {
        Self {
            birth: 1 << 3,
            survival: 0x1FF,
        }
    }
}

impl Default for LifeLike {
    fn default() -> Self {
        Self::conway()
    }
}

impl Rule for LifeLike {
    fn next_state(&self, alive: bool, live_neighbors: u8) -> bool {
        let mask = if alive { self.survival } else { self.birth };
        live_neighbors <= 8 && mask & (1 << live_neighbors) != 0
    }
}

impl FromStr for LifeLike {
    type Err = LifeError;

    /// Parses `B3/S23` notation (case-insensitive, either part may be empty).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LifeError::InvalidRule(s.to_string());
        let (birth, survival) = s.trim().split_once('/').ok_or_else(invalid)?;

        let birth = birth
            .strip_prefix(['B', 'b'])
            .ok_or_else(invalid)?;
        let survival = survival
            .strip_prefix(['S', 's'])
            .ok_or_else(invalid)?;

        Ok(Self {
            birth: neighbor_mask(birth).ok_or_else(invalid)?,
            survival: neighbor_mask(survival).ok_or_else(invalid)?,
        })
    }
}

impl fmt::Display for LifeLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        write_digits(f, self.birth)?;
        write!(f, "/S")?;
        write_digits(f, self.survival)
    }
}

fn neighbor_mask(digits: &str) -> Option<u16> {
    digits.chars().try_fold(0u16, |mask, c| match c.to_digit(10) {
        Some(n) if n <= 8 => Some(mask | (1 << n)),
        _ => None,
    })
}

fn write_digits(f: &mut fmt::Formatter<'_>, mask: u16) -> fmt::Result {
    (0..=8)
        .filter(|n| mask & (1 << n) != 0)
        .try_for_each(|n| write!(f, "{n}"))
}
