//! Driver: connects a frontend to the engine.
//!
//! A frontend is anything that can present a snapshot, wait for a raw key and
//! translate it. The [`run`] loop funnels keys into
//! [`GameEngine::handle_input`] and due ticks into [`GameEngine::tick`] from a
//! single thread, so the engine never sees concurrent calls.

pub mod ticker;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use ticker::Ticker;

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{GameEngine, GameSnapshot};
use crate::types::GameAction;

/// What a translated key asks the driver to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(GameAction),
    Quit,
}

/// A presentation backend with its own key type.
pub trait Frontend {
    type Key;

    /// Show the current state.
    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()>;

    /// Block for at most `timeout` waiting for a key.
    fn wait_key(&mut self, timeout: Duration) -> Result<Option<Self::Key>>;

    /// Map a raw key to a command; unknown keys map to `None`.
    fn translate_key(&self, key: &Self::Key) -> Option<Command>;
}

/// Totals gathered over one [`run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub ticks: u64,
    pub pieces_landed: u64,
    pub rows_burned: u64,
    pub game_over: bool,
}

impl RunSummary {
    fn collect(&mut self, engine: &mut GameEngine) {
        if let Some(event) = engine.take_last_event() {
            self.pieces_landed += 1;
            self.rows_burned += event.rows_burned as u64;
        }
        self.game_over = !engine.is_running();
    }
}

/// Drive the engine until the frontend asks to quit.
///
/// Each iteration presents a snapshot, waits for a key no longer than the
/// time left before the next tick, dispatches it, then applies every due tick.
/// After game over the loop keeps presenting the frozen state until quit.
pub fn run<F: Frontend>(
    engine: &mut GameEngine,
    frontend: &mut F,
    ticker: &mut Ticker,
) -> Result<RunSummary> {
    let mut summary = RunSummary {
        game_over: !engine.is_running(),
        ..RunSummary::default()
    };
    let mut snapshot = engine.snapshot();

    loop {
        engine.snapshot_into(&mut snapshot);
        frontend.present(&snapshot)?;

        let timeout = ticker.until_next(Instant::now());
        if let Some(key) = frontend.wait_key(timeout)? {
            match frontend.translate_key(&key) {
                Some(Command::Quit) => return Ok(summary),
                Some(Command::Play(action)) => {
                    engine.handle_input(action);
                    summary.collect(engine);
                }
                None => {}
            }
        }

        for _ in 0..ticker.take_due(Instant::now()) {
            if !engine.is_running() {
                break;
            }
            engine.tick();
            summary.ticks += 1;
            summary.collect(engine);
        }
    }
}
