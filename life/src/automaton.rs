// automaton.rs - Generation advance with dirty propagation and change reporting

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use crate::cell::Cell;
use crate::error::Result;
use crate::grid::Grid;
use crate::patterns::Pattern;
use crate::rule::{Conway, Rule};
use crate::view::{CellColor, View};

/// Conway's Game of Life bound to one grid, one view and one rule.
///
/// Each advance only recomputes live cells and their immediate neighbors;
/// every other cell is dead with no live neighbor and stays dead, provided
/// the rule keeps `(false, 0)` dead.
pub struct GameOfLife<V: View, R: Rule = Conway> {
    grid: Grid,
    view: V,
    rule: R,
    generation: u64,
}

impl<V: View> GameOfLife<V, Conway> {
    pub fn with_default_rule(view: V) -> Result<Self> {
        Self::new(view, Conway)
    }
}

impl<V: View, R: Rule> GameOfLife<V, R> {
    /// Builds an all-dead grid sized from the view.
    pub fn new(view: V, rule: R) -> Result<Self> {
        let grid = Grid::new(view.columns(), view.rows())?;
        if rule.next_state(false, 0) {
            warn!("rule brings isolated dead cells to life; empty regions will not be recomputed");
        }
        debug!("new {}x{} automaton", grid.cols(), grid.rows());
        Ok(Self {
            grid,
            view,
            rule,
            generation: 0,
        })
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn count_live_neighbors(&self, x: usize, y: usize) -> Result<u8> {
        self.grid.reduce_neighbors(x, y, count_live, 0)
    }

    /// Sets every cell's current state from `seed(x, y)`, row-major.
    pub fn fill<F>(&mut self, mut seed: F)
    where
        F: FnMut(usize, usize) -> bool,
    {
        self.grid.map(|x, y, cell| cell.with_state(seed(x, y)));
    }

    /// Computes and commits the next generation, reporting `(x, y, old, new)`
    /// for every cell.
    pub fn advance<F>(&mut self, on_change: F)
    where
        F: FnMut(usize, usize, Cell, Cell),
    {
        let Self { grid, rule, generation, .. } = self;
        next_generation(grid, rule, generation, on_change);
    }

    pub fn step(&mut self) {
        self.advance(|_, _, _, _| {});
    }

    /// Advances one generation and repaints only cells that flipped.
    pub fn render(&mut self) {
        let Self { grid, view, rule, generation } = self;
        let mut flipped = 0usize;
        next_generation(grid, rule, generation, |x, y, old, new| {
            if old.state() != new.state() {
                view.fill_cell(x, y, new.into());
                flipped += 1;
            }
        });
        debug!("generation {}: {} cells flipped", generation, flipped);
    }

    /// Sets a cell's current state outside the advance cycle and paints it.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<()> {
        self.grid.set_cell_state(x, y, alive)?;
        self.view.fill_cell(x, y, CellColor::from(alive));
        Ok(())
    }

    /// Repaints every cell.
    pub fn draw(&mut self) {
        let view = &mut self.view;
        self.grid.for_each(|x, y, cell| view.fill_cell(x, y, cell.into()));
    }

    /// Kills every cell and restarts the generation count.
    pub fn clear(&mut self) {
        self.fill(|_, _| false);
        self.generation = 0;
        self.draw();
    }

    /// Clears the grid and places `pattern` around its center.
    pub fn seed_pattern(&mut self, pattern: &Pattern) {
        let (cols, rows) = self.grid.dimensions();
        let cells: HashSet<_> = pattern.cells_at(cols / 2, rows / 2, cols, rows).collect();
        self.fill(|x, y| cells.contains(&(x, y)));
        self.generation = 0;
        self.draw();
    }

    /// Seeds each cell alive with probability `density`. Values outside
    /// `[0, 1]` are clamped; NaN seeds nothing.
    pub fn randomize<G: Rng + ?Sized>(&mut self, rng: &mut G, density: f64) {
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self.fill(|_, _| rng.gen_bool(density));
        self.generation = 0;
        self.draw();
    }
}

/// Runs both phases of an advance and bumps the generation counter.
fn next_generation<R, F>(grid: &mut Grid, rule: &R, generation: &mut u64, on_change: F)
where
    R: Rule,
    F: FnMut(usize, usize, Cell, Cell),
{
    recompute(grid, rule);
    grid.commit_all(on_change);
    *generation += 1;
}

/// Decides the next state of every live cell and of each dead neighbor of a
/// live cell, each exactly once. Cells left undecided commit as no-ops.
fn recompute<R: Rule>(grid: &mut Grid, rule: &R) {
    let (cols, rows) = grid.dimensions();
    for y in 0..rows {
        for x in 0..cols {
            let cell = grid.get_unchecked(x, y);
            if !cell.state() || cell.is_updated() {
                continue;
            }
            for (nx, ny) in grid.neighbors_unchecked(x, y) {
                let neighbor = grid.get_unchecked(nx, ny);
                if !neighbor.state() && !neighbor.is_updated() {
                    update_cell(grid, rule, nx, ny);
                }
            }
            update_cell(grid, rule, x, y);
        }
    }
}

fn update_cell<R: Rule>(grid: &mut Grid, rule: &R, x: usize, y: usize) {
    let live_neighbors = grid.reduce_neighbors_unchecked(x, y, count_live, 0);
    let alive = grid.get_unchecked(x, y).state();
    grid.set_next_state_unchecked(x, y, rule.next_state(alive, live_neighbors));
}

fn count_live(_x: usize, _y: usize, cell: Cell, count: u8) -> u8 {
    count + cell.state() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;
    use crate::patterns;
    use crate::view::NullView;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn life(cols: usize, rows: usize) -> GameOfLife<NullView> {
        GameOfLife::with_default_rule(NullView { columns: cols, rows }).unwrap()
    }

    fn live_cells<V: View, R: Rule>(game: &GameOfLife<V, R>) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        game.grid().for_each(|x, y, cell| {
            if cell.state() {
                cells.push((x, y));
            }
        });
        cells
    }

    #[test]
    fn test_grid_sized_from_view() {
        let game = life(8, 5);
        assert_eq!(game.grid().dimensions(), (8, 5));
        assert_eq!(game.generation(), 0);
        assert_eq!(game.population(), 0);
    }

    #[test]
    fn test_empty_view_is_rejected() {
        let result = GameOfLife::with_default_rule(NullView { columns: 0, rows: 3 });
        assert!(matches!(result, Err(LifeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_count_live_neighbors() {
        let mut game = life(5, 5);
        game.fill(|x, y| x <= 2 && y <= 2);
        assert_eq!(game.count_live_neighbors(1, 1).unwrap(), 8);
        assert_eq!(game.count_live_neighbors(0, 0).unwrap(), 3);
        assert_eq!(game.count_live_neighbors(3, 3).unwrap(), 1);
        assert!(game.count_live_neighbors(5, 0).is_err());
    }

    #[test]
    fn test_count_wraps_diagonally() {
        let mut game = life(6, 4);
        game.fill(|x, y| (x, y) == (5, 3));
        assert_eq!(game.count_live_neighbors(0, 0).unwrap(), 1);
    }

    #[test]
    fn test_dead_grid_stays_dead() {
        let mut game = life(6, 6);
        game.fill(|_, _| false);
        let mut flips = 0;
        game.advance(|_, _, old, new| {
            if old.state() != new.state() {
                flips += 1;
            }
        });
        assert_eq!(flips, 0);
        assert_eq!(game.population(), 0);
    }

    #[test]
    fn test_lone_cell_dies() {
        let mut game = life(5, 5);
        game.fill(|x, y| (x, y) == (2, 2));
        let mut flipped = Vec::new();
        game.advance(|x, y, old, new| {
            if old.state() != new.state() {
                flipped.push((x, y));
            }
        });
        assert_eq!(flipped, vec![(2, 2)]);
        assert!(!game.grid().cell(2, 2).unwrap().state());
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut game = life(7, 7);
        game.fill(|x, y| y == 3 && (2..=4).contains(&x));
        game.step();
        assert_eq!(live_cells(&game), vec![(3, 2), (3, 3), (3, 4)]);
        game.step();
        assert_eq!(live_cells(&game), vec![(2, 3), (3, 3), (4, 3)]);
    }

    #[test]
    fn test_no_updated_flag_survives_advance() {
        let mut game = life(9, 9);
        game.seed_pattern(patterns::find("R-pentomino").unwrap());
        for _ in 0..5 {
            game.step();
            game.grid().for_each(|_, _, cell| assert!(!cell.is_updated()));
        }
    }

    #[test]
    fn test_generation_counts_advances() {
        let mut game = life(4, 4);
        for expected in 1..=3 {
            game.step();
            assert_eq!(game.generation(), expected);
        }
    }

    #[test]
    fn test_matches_full_recomputation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut game = life(16, 12);
        game.randomize(&mut rng, 0.35);

        for _ in 0..20 {
            let mut expected = Grid::new(16, 12).unwrap();
            game.grid().for_each(|x, y, cell| {
                let n = game.count_live_neighbors(x, y).unwrap();
                expected
                    .set_cell_state(x, y, Conway.next_state(cell.state(), n))
                    .unwrap();
            });
            game.step();
            assert_eq!(game.grid(), &expected);
        }
    }

    #[test]
    fn test_randomize_resets_generation() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = life(10, 10);
        game.step();
        game.randomize(&mut rng, 1.0);
        assert_eq!(game.generation(), 0);
        assert_eq!(game.population(), 100);
        game.randomize(&mut rng, 0.0);
        assert_eq!(game.population(), 0);
    }

    #[test]
    fn test_randomize_tolerates_bad_density() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut game = life(3, 3);
        game.randomize(&mut rng, f64::NAN);
        assert_eq!(game.population(), 0);
        game.randomize(&mut rng, 7.5);
        assert_eq!(game.population(), 9);
        game.randomize(&mut rng, -1.0);
        assert_eq!(game.population(), 0);
    }

    #[test]
    fn test_birth_from_nothing_is_not_recomputed() {
        // Every dead cell would be born, but with no live cell nothing is
        // ever visited, so the empty grid stays empty.
        let rule = |alive: bool, _n: u8| !alive;
        let mut game = GameOfLife::new(NullView { columns: 5, rows: 5 }, rule).unwrap();
        game.step();
        assert_eq!(game.population(), 0);
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn test_render_counts_generations() {
        let mut game = life(5, 5);
        game.fill(|x, y| y == 2 && (1..=3).contains(&x));
        game.render();
        game.step();
        assert_eq!(game.generation(), 2);
        assert_eq!(live_cells(&game), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_clear_kills_everything() {
        let mut game = life(6, 6);
        game.fill(|x, _| x % 2 == 0);
        game.step();
        game.clear();
        assert_eq!(game.population(), 0);
        assert_eq!(game.generation(), 0);
    }

    #[test]
    fn test_seed_pattern_centers_and_clears() {
        let mut game = life(10, 10);
        game.fill(|_, _| true);
        game.seed_pattern(patterns::find("Block").unwrap());
        assert_eq!(live_cells(&game), vec![(5, 5), (6, 5), (5, 6), (6, 6)]);
    }

    #[test]
    fn test_custom_rule_closure() {
        // Every live cell survives, nothing is born.
        let rule = |alive: bool, _n: u8| alive;
        let mut game = GameOfLife::new(NullView { columns: 5, rows: 5 }, rule).unwrap();
        game.fill(|x, y| x == y);
        game.step();
        assert_eq!(game.population(), 5);
    }
}
