//! # Lifegrid Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut grid = Grid::dead(8, 8)?;
//!     LifePattern::Glider.place(&mut grid, 0, 0)?;
//!
//!     let mut app = LifeApp::with_grid(GridConfig::new(8, 8), grid, QuadBatch::new());
//!     app.run(4)?;
//!     assert_eq!(app.renderer().instance_count(), 5);
//!     Ok(())
//! }
//! ```

// Re-export the automaton core
pub use crate::automaton::{Cell, Grid, LifePattern, StepSummary};
pub use crate::config::GridConfig;
pub use crate::error::LifeError;

// Re-export host and renderer boundary
pub use crate::app::LifeApp;
pub use crate::render::{AgePalette, CellQuad, QuadBatch, QuadLayout, Renderer, TextRenderer};

// Re-export common external dependencies
pub use cgmath::{Vector2, Vector4};
