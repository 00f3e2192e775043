// cell.rs - Packed per-cell state: current, pending next, updated flag

/// One grid position packed into a byte.
///
/// Bit 0 holds the current state, bit 1 the next state and bit 2 records
/// that the next state has been decided. The next state is meaningless
/// unless the updated bit is set.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cell(u8);

impl Cell {
    const CURRENT: u8 = 1 << 0;
    const NEXT: u8 = 1 << 1;
    const UPDATED: u8 = 1 << 2;

    pub const DEAD: Cell = Cell(0);
    pub const ALIVE: Cell = Cell(Self::CURRENT);

    pub const fn state(self) -> bool {
        self.0 & Self::CURRENT != 0
    }

    pub const fn next_state(self) -> bool {
        self.0 & Self::NEXT != 0
    }

    pub const fn is_updated(self) -> bool {
        self.0 & Self::UPDATED != 0
    }

    /// Sets the current state, leaving the next/updated bits alone.
    pub const fn with_state(self, alive: bool) -> Cell {
        Cell(apply_mask(self.0, Self::CURRENT, alive))
    }

    /// Records the next state and marks the cell as updated.
    pub const fn with_next_state(self, alive: bool) -> Cell {
        Cell(apply_mask(self.0, Self::NEXT, alive) | Self::UPDATED)
    }

    /// Moves the next state into the current position. No-op unless updated.
    pub const fn commit(self) -> Cell {
        if self.is_updated() {
            // With the updated bit gone, the shift drops the old current
            // state and lands the next state in bit 0.
            Cell((self.0 & !Self::UPDATED) >> 1)
        } else {
            self
        }
    }
}

const fn apply_mask(value: u8, mask: u8, set: bool) -> u8 {
    if set { value | mask } else { value & !mask }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        let cell = Cell::default();
        assert_eq!(cell, Cell::DEAD);
        assert!(!cell.state());
        assert!(!cell.next_state());
        assert!(!cell.is_updated());
    }

    #[test]
    fn test_with_state_touches_only_current_bit() {
        let cell = Cell::DEAD.with_next_state(true).with_state(true);
        assert!(cell.state());
        assert!(cell.next_state());
        assert!(cell.is_updated());

        let cell = cell.with_state(false);
        assert!(!cell.state());
        assert!(cell.next_state());
        assert!(cell.is_updated());
    }

    #[test]
    fn test_with_next_state_always_marks_updated() {
        let cell = Cell::ALIVE.with_next_state(false);
        assert!(cell.is_updated());
        assert!(!cell.next_state());
        assert!(cell.state());
    }

    #[test]
    fn test_commit_moves_next_into_current() {
        assert_eq!(Cell::ALIVE.with_next_state(false).commit(), Cell::DEAD);
        assert_eq!(Cell::DEAD.with_next_state(true).commit(), Cell::ALIVE);
        assert_eq!(Cell::ALIVE.with_next_state(true).commit(), Cell::ALIVE);
        assert_eq!(Cell::DEAD.with_next_state(false).commit(), Cell::DEAD);
    }

    #[test]
    fn test_commit_without_update_is_idempotent() {
        for cell in [Cell::DEAD, Cell::ALIVE] {
            let once = cell.commit();
            assert_eq!(once, cell);
            assert_eq!(once.commit().commit(), cell);
        }
    }

    #[test]
    fn test_commit_clears_updated_flag() {
        let cell = Cell::DEAD.with_next_state(true).commit();
        assert!(!cell.is_updated());
        assert!(!cell.next_state());
        assert_eq!(cell, Cell::ALIVE);
    }
}
