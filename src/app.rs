//! # Host Driver
//!
//! [`LifeApp`] owns the grid and a [`Renderer`] and runs the per-frame
//! sequence: advance one generation (unless paused), then present the new
//! generation. Frame pacing is left to whoever calls [`LifeApp::frame`].
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! let config = GridConfig::new(16, 16).with_seed(3);
//! let mut app = LifeApp::new(config, TextRenderer::new()).unwrap();
//! app.run(10).unwrap();
//! assert_eq!(app.grid().generation(), 10);
//! ```

use anyhow::Context;
use log::{debug, warn};

use crate::automaton::{Grid, StepSummary};
use crate::config::GridConfig;
use crate::error::Result;
use crate::render::Renderer;

/// Grid plus renderer, stepped once per frame
pub struct LifeApp<R: Renderer> {
    config: GridConfig,
    grid: Grid,
    renderer: R,
    running: bool,
    frames: u64,
    last_step: Option<StepSummary>,
}

impl<R: Renderer> LifeApp<R> {
    /// Build the initial grid from `config` and attach `renderer`
    pub fn new(config: GridConfig, renderer: R) -> Result<Self> {
        let grid = Grid::initialize(&config)?;
        Ok(Self::with_grid(config, grid, renderer))
    }

    /// Drive an already-built grid, e.g. one seeded from patterns
    ///
    /// `config` is only consulted again by [`reset`](Self::reset).
    pub fn with_grid(config: GridConfig, grid: Grid, renderer: R) -> Self {
        debug!(
            "Attached {} renderer to {}x{} grid",
            renderer.name(),
            grid.rows(),
            grid.columns()
        );
        Self {
            config,
            grid,
            renderer,
            running: true,
            frames: 0,
            last_step: None,
        }
    }

    /// Run one frame: step when running, then draw
    ///
    /// Returns the step summary, or `None` for a paused frame. Renderer
    /// failures are returned to the caller; the grid has still advanced.
    pub fn frame(&mut self) -> anyhow::Result<Option<StepSummary>> {
        let summary = if self.running {
            let summary = self.grid.step();
            self.last_step = Some(summary);
            Some(summary)
        } else {
            None
        };

        self.frames += 1;
        self.draw()?;
        Ok(summary)
    }

    /// Run `frames` frames back to back, stopping at the first renderer error
    pub fn run(&mut self, frames: u64) -> anyhow::Result<()> {
        for _ in 0..frames {
            self.frame()?;
        }
        Ok(())
    }

    /// Draw the current generation without stepping
    pub fn redraw(&mut self) -> anyhow::Result<()> {
        self.draw()
    }

    fn draw(&mut self) -> anyhow::Result<()> {
        if let Err(err) = self.renderer.draw(&self.grid) {
            warn!("{} renderer failed on frame {}: {err:#}", self.renderer.name(), self.frames);
            return Err(err).with_context(|| {
                format!(
                    "drawing generation {} with {} renderer",
                    self.grid.generation(),
                    self.renderer.name()
                )
            });
        }
        Ok(())
    }

    /// Discard the grid and seed a fresh one from the stored config
    ///
    /// With a fixed seed the new grid repeats the first starting state.
    pub fn reset(&mut self) -> Result<()> {
        self.grid = Grid::initialize(&self.config)?;
        self.frames = 0;
        self.last_step = None;
        debug!("Reset grid to generation 0 ({} live cells)", self.grid.live_count());
        Ok(())
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Frames run since creation or the last reset, paused frames included
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_step(&self) -> Option<StepSummary> {
        self.last_step
    }
}
