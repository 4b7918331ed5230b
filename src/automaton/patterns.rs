//! Classic seed patterns
//!
//! Offsets are `(row, col)` relative to the pattern's top-left corner.
//! Placement wraps around the torus, so a pattern may straddle an edge.

use super::grid::Grid;
use crate::error::Result;

/// Classic Game of Life patterns
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LifePattern {
    Block,
    Blinker,
    Glider,
    Toad,
    Beacon,
}

impl LifePattern {
    pub const ALL: [LifePattern; 5] = [
        LifePattern::Block,
        LifePattern::Blinker,
        LifePattern::Glider,
        LifePattern::Toad,
        LifePattern::Beacon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LifePattern::Block => "Block",
            LifePattern::Blinker => "Blinker",
            LifePattern::Glider => "Glider",
            LifePattern::Toad => "Toad",
            LifePattern::Beacon => "Beacon",
        }
    }

    /// Live cell offsets of the pattern's first phase
    pub fn cells(&self) -> &'static [(isize, isize)] {
        match self {
            LifePattern::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            LifePattern::Blinker => &[(0, 0), (0, 1), (0, 2)],
            LifePattern::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            LifePattern::Toad => &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
            LifePattern::Beacon => &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
        }
    }

    /// Generations until the pattern repeats in place (gliders repeat shifted)
    pub fn period(&self) -> u32 {
        match self {
            LifePattern::Block => 1,
            LifePattern::Blinker | LifePattern::Toad | LifePattern::Beacon => 2,
            LifePattern::Glider => 4,
        }
    }

    /// Bring the pattern to life with its top-left corner at `(row, col)`
    ///
    /// Existing live cells are left alone.
    pub fn place(&self, grid: &mut Grid, row: usize, col: usize) -> Result<()> {
        for &(dr, dc) in self.cells() {
            let (r, c) = grid.wrap(row as isize + dr, col as isize + dc);
            grid.set_alive(r, c, true)?;
        }
        Ok(())
    }
}
