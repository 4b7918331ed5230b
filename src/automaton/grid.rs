//! # Toroidal Grid
//!
//! Fixed-size `rows × columns` board whose edges wrap, so every cell has
//! exactly eight neighbors. Cells are stored row-major in two buffers: the
//! current generation, which is only ever read during a step, and a scratch
//! buffer that receives the next generation. The buffers are swapped once the
//! whole board has been computed, so iteration order never leaks into the
//! result.
//!
//! ## Usage
//!
//! ```rust
//! use lifegrid::automaton::Grid;
//!
//! // Horizontal blinker
//! let mut grid = Grid::from_live_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
//! grid.step();
//! assert_eq!(grid.live_cells(), vec![(1, 2), (2, 2), (3, 2)]);
//! ```

use log::{debug, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{cell::Cell, rules};
use crate::config::GridConfig;
use crate::error::{LifeError, Result};

/// Population changes produced by one call to [`Grid::step`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// Generation number the grid holds after the step
    pub generation: u64,
    /// Cells that went from dead to alive
    pub births: usize,
    /// Cells that went from alive to dead
    pub deaths: usize,
    /// Live cells after the step
    pub live: usize,
}

/// Double-buffered toroidal cell grid
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    columns: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
    generation: u64,
}

impl PartialEq for Grid {
    /// Grids are equal when they hold the same cells; the generation counter
    /// and scratch buffer are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.columns == other.columns && self.current == other.current
    }
}

impl Eq for Grid {}

impl Grid {
    /// Create a grid with every cell seeded independently at random
    ///
    /// Each cell is alive when a uniform draw from `[0, 1)` falls below
    /// `config.alive_probability`. Ages start at 0.
    pub fn initialize(config: &GridConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let current: Vec<Cell> = (0..config.cell_count())
            .map(|_| Cell {
                alive: rng.random::<f64>() < config.alive_probability,
                age: 0,
            })
            .collect();

        let grid = Self::from_cells(config.rows, config.columns, current);
        debug!(
            "Initialized {}x{} grid with {} live cells (p = {}, seed = {:?})",
            grid.rows,
            grid.columns,
            grid.live_count(),
            config.alive_probability,
            config.seed
        );
        Ok(grid)
    }

    /// Create a grid with every cell dead
    pub fn dead(rows: usize, columns: usize) -> Result<Self> {
        GridConfig::new(rows, columns).validate()?;
        Ok(Self::from_cells(rows, columns, vec![Cell::dead(); rows * columns]))
    }

    /// Create a dead grid and bring the listed `(row, col)` cells to life
    pub fn from_live_cells(rows: usize, columns: usize, live: &[(usize, usize)]) -> Result<Self> {
        let mut grid = Self::dead(rows, columns)?;
        for &(row, col) in live {
            grid.set_alive(row, col, true)?;
        }
        Ok(grid)
    }

    fn from_cells(rows: usize, columns: usize, current: Vec<Cell>) -> Self {
        let next = current.clone();
        Self {
            rows,
            columns,
            current,
            next,
            generation: 0,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of steps taken since the grid was created
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All cells of the current generation in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.current
    }

    /// One row of the current generation
    ///
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.columns;
        &self.current[start..start + self.columns]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.columns {
            self.current.get(self.index(row, col))
        } else {
            None
        }
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(|cell| cell.alive)
    }

    /// Set a single cell's state between generations
    ///
    /// A cell brought to life starts at age 0; a cell that is already alive
    /// keeps its age.
    pub fn set_alive(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        if row >= self.rows || col >= self.columns {
            return Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            });
        }

        let index = self.index(row, col);
        let cell = &mut self.current[index];
        match (cell.alive, alive) {
            (false, true) => *cell = Cell::alive(),
            (_, false) => *cell = Cell::dead(),
            (true, true) => {}
        }
        Ok(())
    }

    /// Kill every cell; the generation counter is left untouched
    pub fn clear(&mut self) {
        self.current.fill(Cell::dead());
    }

    pub fn live_count(&self) -> usize {
        self.current.iter().filter(|cell| cell.alive).count()
    }

    /// Coordinates of live cells in row-major order
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.current
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.alive)
            .map(move |(index, _)| (index / columns, index % columns))
    }

    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.iter_live().collect()
    }

    /// Map signed coordinates onto the torus
    pub fn wrap(&self, row: isize, col: isize) -> (usize, usize) {
        (
            row.rem_euclid(self.rows as isize) as usize,
            col.rem_euclid(self.columns as isize) as usize,
        )
    }

    /// Count live cells in the Moore neighborhood of `(row, col)`
    ///
    /// Each axis wraps on its own dimension: row `-1` becomes `rows - 1` and
    /// row `rows` becomes `0`, likewise for columns. On a grid with a
    /// dimension of 1 or 2 the wrapped positions may coincide, and each is
    /// counted once per neighbor slot it fills.
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < self.rows && col < self.columns,
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.rows,
            self.columns
        );

        let up = if row == 0 { self.rows - 1 } else { row - 1 };
        let down = if row + 1 == self.rows { 0 } else { row + 1 };
        let left = if col == 0 { self.columns - 1 } else { col - 1 };
        let right = if col + 1 == self.columns { 0 } else { col + 1 };

        let neighbors = [
            (up, left),
            (up, col),
            (up, right),
            (row, left),
            (row, right),
            (down, left),
            (down, col),
            (down, right),
        ];

        neighbors
            .iter()
            .filter(|&&(r, c)| self.current[self.index(r, c)].alive)
            .count() as u8
    }

    /// Whether `(row, col)` is alive in the next generation
    ///
    /// Reads only the current generation.
    pub fn step_cell(&self, row: usize, col: usize) -> bool {
        let neighbors = self.count_live_neighbors(row, col);
        rules::next_alive(self.current[self.index(row, col)].alive, neighbors)
    }

    /// Advance the whole grid by one generation
    ///
    /// Every next state is computed from the current buffer into the scratch
    /// buffer, then the two are swapped. Ages increment for cells that stay
    /// or become alive and reset to 0 for dead cells.
    pub fn step(&mut self) -> StepSummary {
        let mut summary = StepSummary::default();

        for row in 0..self.rows {
            for col in 0..self.columns {
                let index = self.index(row, col);
                let cell = self.current[index];
                let alive_next = self.step_cell(row, col);

                match (cell.alive, alive_next) {
                    (false, true) => summary.births += 1,
                    (true, false) => summary.deaths += 1,
                    _ => {}
                }
                if alive_next {
                    summary.live += 1;
                }

                self.next[index] = cell.advance(alive_next);
            }
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        summary.generation = self.generation;

        trace!(
            "Generation {}: {} live (+{} / -{})",
            summary.generation,
            summary.live,
            summary.births,
            summary.deaths
        );
        summary
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Grid {
        Grid::from_live_cells(4, 4, &[(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap()
    }

    #[test]
    fn test_initialize_respects_dimensions() {
        let config = GridConfig::new(7, 13).with_seed(1);
        let grid = Grid::initialize(&config).unwrap();
        assert_eq!(grid.rows(), 7);
        assert_eq!(grid.columns(), 13);
        assert_eq!(grid.cells().len(), 91);
        assert_eq!(grid.generation(), 0);
        assert!(grid.cells().iter().all(|cell| cell.age == 0));
    }

    #[test]
    fn test_initialize_is_reproducible_with_seed() {
        let config = GridConfig::default().with_seed(1234);
        let a = Grid::initialize(&config).unwrap();
        let b = Grid::initialize(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_initialize_probability_extremes() {
        let none = Grid::initialize(&GridConfig::new(10, 10).with_alive_probability(0.0)).unwrap();
        assert_eq!(none.live_count(), 0);

        let all = Grid::initialize(&GridConfig::new(10, 10).with_alive_probability(1.0)).unwrap();
        assert_eq!(all.live_count(), 100);
    }

    #[test]
    fn test_initialize_density_is_roughly_probability() {
        let config = GridConfig::new(100, 100).with_seed(99);
        let grid = Grid::initialize(&config).unwrap();
        let density = grid.live_count() as f64 / 10_000.0;
        assert!((0.12..0.18).contains(&density), "density was {density}");
    }

    #[test]
    fn test_initialize_rejects_bad_config() {
        assert!(matches!(
            Grid::initialize(&GridConfig::new(0, 10)),
            Err(LifeError::EmptyGrid { .. })
        ));
        assert!(matches!(
            Grid::initialize(&GridConfig::default().with_alive_probability(2.0)),
            Err(LifeError::InvalidProbability(_))
        ));
    }

    #[test]
    fn test_from_live_cells_out_of_bounds() {
        let err = Grid::from_live_cells(3, 3, &[(3, 0)]).unwrap_err();
        assert_eq!(
            err,
            LifeError::OutOfBounds {
                row: 3,
                col: 0,
                rows: 3,
                columns: 3
            }
        );
    }

    #[test]
    fn test_corner_wraps_to_opposite_corner() {
        let grid = Grid::from_live_cells(5, 5, &[(4, 4)]).unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0), 1);
    }

    #[test]
    fn test_corner_wraps_along_edges() {
        let grid = Grid::from_live_cells(5, 5, &[(4, 0), (0, 4)]).unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0), 2);
    }

    #[test]
    fn test_wrap_is_independent_per_axis() {
        // 3 rows, 6 columns: the column wrap must use the column count
        let grid = Grid::from_live_cells(3, 6, &[(2, 5), (0, 5), (1, 0)]).unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        // Far column 3 is not adjacent to column 0 on a 6-wide torus
        let grid = Grid::from_live_cells(3, 6, &[(0, 3)]).unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_full_neighborhood_excludes_self() {
        let cells: Vec<(usize, usize)> = (0..3)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .collect();
        let grid = Grid::from_live_cells(5, 5, &cells).unwrap();
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_step_cell_reads_current_generation() {
        let grid = Grid::from_live_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        assert!(!grid.step_cell(2, 1)); // one neighbor
        assert!(grid.step_cell(2, 2)); // two neighbors
        assert!(grid.step_cell(1, 2)); // birth
        assert!(!grid.step_cell(0, 0));
    }

    #[test]
    fn test_block_is_still_life() {
        let mut grid = block();
        let before = grid.live_cells();
        let summary = grid.step();
        assert_eq!(grid.live_cells(), before);
        assert_eq!(summary.births, 0);
        assert_eq!(summary.deaths, 0);
        assert_eq!(summary.live, 4);
        grid.step();
        assert_eq!(grid.live_cells(), before);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let horizontal = vec![(2, 1), (2, 2), (2, 3)];
        let vertical = vec![(1, 2), (2, 2), (3, 2)];
        let mut grid = Grid::from_live_cells(5, 5, &horizontal).unwrap();

        let summary = grid.step();
        assert_eq!(grid.live_cells(), vertical);
        assert_eq!(summary.births, 2);
        assert_eq!(summary.deaths, 2);

        grid.step();
        assert_eq!(grid.live_cells(), horizontal);
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn test_blinker_across_the_seam() {
        // Straddles the left/right edge of the torus
        let mut grid = Grid::from_live_cells(5, 5, &[(2, 4), (2, 0), (2, 1)]).unwrap();
        grid.step();
        assert_eq!(grid.live_cells(), vec![(1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn test_glider_circumnavigates_torus() {
        let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
        let mut grid = Grid::from_live_cells(8, 8, &glider).unwrap();
        let start = grid.live_cells();

        // A glider moves one cell diagonally every 4 generations
        for _ in 0..4 {
            grid.step();
        }
        let mut shifted: Vec<(usize, usize)> =
            glider.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        shifted.sort();
        assert_eq!(grid.live_cells(), shifted);

        for _ in 4..32 {
            grid.step();
        }
        assert_eq!(grid.live_cells(), start);
    }

    #[test]
    fn test_step_matches_snapshot_rule() {
        let config = GridConfig::new(12, 17).with_alive_probability(0.4).with_seed(5);
        let mut grid = Grid::initialize(&config).unwrap();
        let snapshot = grid.clone();

        grid.step();

        for row in 0..snapshot.rows() {
            for col in 0..snapshot.columns() {
                let expected = rules::next_alive(
                    snapshot.is_alive(row, col),
                    snapshot.count_live_neighbors(row, col),
                );
                assert_eq!(grid.is_alive(row, col), expected, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_step_is_deterministic() {
        let config = GridConfig::new(20, 30).with_alive_probability(0.3).with_seed(77);
        let mut a = Grid::initialize(&config).unwrap();
        let mut b = a.clone();

        for _ in 0..25 {
            assert_eq!(a.step(), b.step());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_age_tracking() {
        let mut grid = block();
        for k in 1..=3 {
            grid.step();
            assert!(grid.live_cells().iter().all(|&(r, c)| grid.get(r, c).unwrap().age == k));
        }

        // Blinker ends die after one generation and reset to 0
        let mut grid = Grid::from_live_cells(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap();
        grid.step();
        assert_eq!(grid.get(2, 1).unwrap().age, 0);
        assert_eq!(grid.get(2, 2).unwrap().age, 1);
        assert_eq!(grid.get(1, 2).unwrap().age, 1);
        grid.step();
        assert_eq!(grid.get(2, 2).unwrap().age, 2);
        assert_eq!(grid.get(2, 1).unwrap().age, 1);
        assert_eq!(grid.get(1, 2).unwrap().age, 0);
    }

    #[test]
    fn test_set_alive_and_clear() {
        let mut grid = Grid::dead(3, 4).unwrap();
        grid.set_alive(1, 3, true).unwrap();
        assert!(grid.is_alive(1, 3));
        assert_eq!(grid.row(1)[3], Cell::alive());
        assert!(grid.set_alive(1, 4, true).is_err());

        grid.clear();
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_single_cell_grid_neighbors_itself() {
        let grid = Grid::from_live_cells(1, 1, &[(0, 0)]).unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0), 8);
        // Eight neighbors means overpopulation
        assert!(!grid.step_cell(0, 0));
    }

    #[test]
    fn test_two_by_two_counts_each_neighbor_slot() {
        let full = Grid::from_live_cells(2, 2, &[(0, 0), (0, 1), (1, 0), (1, 1)]).unwrap();
        for row in 0..2 {
            for col in 0..2 {
                assert_eq!(full.count_live_neighbors(row, col), 8, "cell ({row}, {col})");
            }
        }

        // The opposite corner fills four slots: up/down times left/right
        let single = Grid::from_live_cells(2, 2, &[(1, 1)]).unwrap();
        assert_eq!(single.count_live_neighbors(0, 0), 4);
        assert_eq!(single.count_live_neighbors(0, 1), 2);
    }

    #[test]
    fn test_grid_constructors_reject_oversized_dimensions() {
        assert!(matches!(
            Grid::dead(usize::MAX / 2 + 1, 2),
            Err(LifeError::GridTooLarge { .. })
        ));
        assert!(matches!(
            Grid::initialize(&GridConfig::new(usize::MAX / 2 + 1, 2)),
            Err(LifeError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_wrap_negative_coordinates() {
        let grid = Grid::dead(4, 6).unwrap();
        assert_eq!(grid.wrap(-1, -1), (3, 5));
        assert_eq!(grid.wrap(4, 6), (0, 0));
        assert_eq!(grid.wrap(9, 13), (1, 1));
    }
}
