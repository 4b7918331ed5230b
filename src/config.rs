//! # Grid Configuration
//!
//! Startup parameters handed from the host to [`Grid::initialize`](crate::automaton::Grid::initialize).
//! Grid size is a runtime value, so the same binary can drive any number of
//! differently sized boards.
//!
//! ```rust
//! use lifegrid::config::GridConfig;
//!
//! let config = GridConfig::default()
//!     .with_size(64, 32)
//!     .with_alive_probability(0.2)
//!     .with_seed(7);
//! assert!(config.validate().is_ok());
//! ```

use crate::automaton::Cell;
use crate::error::{LifeError, Result};

pub const DEFAULT_ROWS: usize = 50;
pub const DEFAULT_COLUMNS: usize = 50;
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.15;

/// Dimensions and random seeding for a new grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Number of rows (vertical extent)
    pub rows: usize,
    /// Number of columns (horizontal extent)
    pub columns: usize,
    /// Chance that each cell starts alive, drawn independently per cell
    pub alive_probability: f64,
    /// Fixed RNG seed; `None` seeds from the operating system
    pub seed: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            seed: None,
        }
    }
}

impl GridConfig {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, rows: usize, columns: usize) -> Self {
        self.rows = rows;
        self.columns = columns;
        self
    }

    pub fn with_alive_probability(mut self, probability: f64) -> Self {
        self.alive_probability = probability;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of cells the configured grid holds
    ///
    /// Saturates for sizes [`validate`](Self::validate) rejects.
    pub fn cell_count(&self) -> usize {
        self.rows.saturating_mul(self.columns)
    }

    /// Check the preconditions the automaton relies on
    ///
    /// Both dimensions must be at least 1, the cell buffer must be
    /// addressable, and the probability must be a finite value in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(LifeError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }

        let buffer_bytes = self
            .rows
            .checked_mul(self.columns)
            .and_then(|cells| cells.checked_mul(std::mem::size_of::<Cell>()));
        if !buffer_bytes.is_some_and(|bytes| bytes <= isize::MAX as usize) {
            return Err(LifeError::GridTooLarge {
                rows: self.rows,
                columns: self.columns,
            });
        }

        if !(0.0..=1.0).contains(&self.alive_probability) {
            // NaN fails the range check too
            return Err(LifeError::InvalidProbability(self.alive_probability));
        }

        Ok(())
    }
}
