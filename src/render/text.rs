//! Plain-text renderer
//!
//! Draws one line per row, `#` for live cells and `.` for dead ones.

use log::trace;

use super::Renderer;
use crate::automaton::Grid;

pub struct TextRenderer {
    alive: char,
    dead: char,
    frame: String,
    frames_drawn: u64,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            alive: '#',
            dead: '.',
            frame: String::new(),
            frames_drawn: 0,
        }
    }

    pub fn with_glyphs(mut self, alive: char, dead: char) -> Self {
        self.alive = alive;
        self.dead = dead;
        self
    }

    /// The most recently drawn frame
    pub fn frame(&self) -> &str {
        &self.frame
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, grid: &Grid) -> anyhow::Result<()> {
        let (alive, dead) = (self.alive, self.dead);
        self.frame.clear();
        self.frame.reserve(grid.rows() * (grid.columns() + 1));

        for row in 0..grid.rows() {
            self.frame.extend(
                grid.row(row)
                    .iter()
                    .map(|cell| if cell.alive { alive } else { dead }),
            );
            self.frame.push('\n');
        }

        self.frames_drawn += 1;
        trace!("Generation {}\n{}", grid.generation(), self.frame);
        Ok(())
    }

    fn name(&self) -> &str {
        "text"
    }
}
