//! Terminal runner (default binary).
//!
//! Loads the shape catalog, builds the engine and hands both to the driver
//! loop with the crossterm frontend.

use std::time::Instant;

use anyhow::Result;

use tui_blocks::config::{parse_args, Config, USAGE};
use tui_blocks::core::GameEngine;
use tui_blocks::driver::{run, RunSummary, Ticker};
use tui_blocks::frontend::TerminalFrontend;
use tui_blocks::term::TerminalRenderer;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    if config.show_help {
        println!("{}", USAGE);
        return Ok(());
    }

    let catalog = config.load_catalog()?;
    eprintln!("[tui-blocks] loaded {} shapes", catalog.len());

    let summary = play(&config, GameEngine::new(catalog, config.engine_config()))?;
    eprintln!(
        "[tui-blocks] {} after {} ticks: {} pieces landed, {} rows burned",
        if summary.game_over { "game over" } else { "quit" },
        summary.ticks,
        summary.pieces_landed,
        summary.rows_burned
    );
    Ok(())
}

fn play(config: &Config, mut engine: GameEngine) -> Result<RunSummary> {
    let mut renderer = TerminalRenderer::new();
    renderer.enter()?;

    let mut frontend = TerminalFrontend::new(renderer);
    let mut ticker = Ticker::new(config.tick_interval(), Instant::now());
    let result = run(&mut engine, &mut frontend, &mut ticker);

    // Always try to restore terminal state.
    let mut renderer = frontend.into_renderer();
    if let Err(e) = renderer.exit() {
        eprintln!("[tui-blocks] failed to restore terminal: {}", e);
    }
    result
}
