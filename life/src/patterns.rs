// patterns.rs - Named seed patterns, as (x, y) offsets from an anchor cell

use crate::grid::wrap;

#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

impl Pattern {
    /// Absolute grid coordinates of the pattern anchored at `(x, y)`,
    /// wrapped onto a `cols × rows` torus.
    pub fn cells_at(&self, x: usize, y: usize, cols: usize, rows: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().map(move |&(dx, dy)| {
            (wrap(x as isize + dx, cols), wrap(y as isize + dy, rows))
        })
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(-1, 0), (0, 0), (1, 0)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, -1), (1, -1), (2, -1), (-1, 0), (0, 0), (1, 0)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (-4, -6), (-3, -6), (-2, -6), (2, -6), (3, -6), (4, -6),
            (-6, -4), (-1, -4), (1, -4), (6, -4),
            (-6, -3), (-1, -3), (1, -3), (6, -3),
            (-6, -2), (-1, -2), (1, -2), (6, -2),
            (-4, -1), (-3, -1), (-2, -1), (2, -1), (3, -1), (4, -1),
            // Bottom half (mirrored)
            (-4, 1), (-3, 1), (-2, 1), (2, 1), (3, 1), (4, 1),
            (-6, 2), (-1, 2), (1, 2), (6, 2),
            (-6, 3), (-1, 3), (1, 3), (6, 3),
            (-6, 4), (-1, 4), (1, 4), (6, 4),
            (-4, 6), (-3, 6), (-2, 6), (2, 6), (3, 6), (4, 6),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 0), (1, 0), (1, -1), (0, 1), (-1, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (-17, 0), (-16, 0), (-17, 1), (-16, 1),
            (-7, 0), (-7, 1), (-7, 2), (-6, -1), (-6, 3), (-5, -2), (-5, 4),
            (-4, -2), (-4, 4), (-3, 1), (-2, -1), (-2, 3), (-1, 0), (-1, 1),
            (-1, 2), (0, 1), (3, -2), (3, -1), (3, 0), (4, -2), (4, -1),
            (4, 0), (5, -3), (5, 1), (7, -4), (7, -3), (7, 1), (7, 2),
            (17, -2), (17, -1), (18, -2), (18, -1),
        ],
    },
];

/// Looks a pattern up by name, ignoring case.
pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(find("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(find("GOSPER GLIDER GUN").map(|p| p.cells.len()), Some(36));
        assert!(find("spaceship").is_none());
    }

    #[test]
    fn test_patterns_have_no_duplicate_cells() {
        for pattern in PATTERNS {
            let distinct: HashSet<_> = pattern.cells.iter().collect();
            assert_eq!(distinct.len(), pattern.cells.len(), "{}", pattern.name);
        }
    }

    #[test]
    fn test_cells_at_wraps() {
        let blinker = find("Blinker").unwrap();
        let cells: Vec<_> = blinker.cells_at(0, 0, 5, 5).collect();
        assert_eq!(cells, vec![(4, 0), (0, 0), (1, 0)]);
    }
}
