// src/lib.rs
//! Lifegrid
//!
//! Conway's Game of Life on a toroidal grid. The automaton core is pure and
//! renderer-agnostic; presentation plugs in through the [`render::Renderer`]
//! trait, and [`render::QuadBatch`] stages GPU-ready quads for an external
//! graphics backend.

pub mod app;
pub mod automaton;
pub mod config;
pub mod error;
pub mod prelude;
pub mod render;

// Re-export main types for convenience
pub use app::LifeApp;
pub use automaton::Grid;
pub use config::GridConfig;
pub use error::{LifeError, Result};

/// Creates a host driving a default 50x50 grid through `renderer`
pub fn default<R: render::Renderer>(renderer: R) -> Result<LifeApp<R>> {
    LifeApp::new(GridConfig::default(), renderer)
}
