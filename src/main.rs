//! Headless host: runs the default grid and prints the final generation.

use anyhow::Context;
use log::info;

use lifegrid::render::TextRenderer;

const FRAMES: u64 = 100;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = lifegrid::default(TextRenderer::new()).context("failed to build grid")?;
    info!(
        "Conway's Game of Life: {}x{} grid, {} live cells",
        app.grid().rows(),
        app.grid().columns(),
        app.grid().live_count()
    );

    let mut births = 0;
    let mut deaths = 0;
    for _ in 0..FRAMES {
        if let Some(summary) = app.frame()? {
            births += summary.births;
            deaths += summary.deaths;
        }
    }

    info!(
        "Generation {}: {} live cells ({} births, {} deaths)",
        app.grid().generation(),
        app.grid().live_count(),
        births,
        deaths
    );
    print!("{}", app.renderer().frame());
    Ok(())
}
