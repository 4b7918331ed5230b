// src/render/mod.rs
//! Renderer boundary
//!
//! The automaton never touches a window or GPU. Once per frame the host hands
//! a read-only [`Grid`] to a [`Renderer`], which decides how to present it.
//! [`QuadBatch`] turns live cells into GPU-ready quad instances for an
//! external graphics backend; [`TextRenderer`] draws the board as text.

pub mod quad;
pub mod text;

pub use quad::{AgePalette, CellQuad, QuadBatch, QuadLayout};
pub use text::TextRenderer;

use crate::automaton::Grid;

/// Presentation collaborator driven by the host loop
///
/// Implementors receive the grid after each step and must not assume it
/// outlives the call.
pub trait Renderer {
    /// Present one frame
    ///
    /// # Arguments
    /// * `grid` - Read-only view of the current generation
    fn draw(&mut self, grid: &Grid) -> anyhow::Result<()>;

    /// Renderer name for logging
    fn name(&self) -> &str;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn draw(&mut self, grid: &Grid) -> anyhow::Result<()> {
        (**self).draw(grid)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
