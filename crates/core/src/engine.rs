//! Engine module - the game-state controller
//!
//! Owns the field, the active piece, the pre-spawned next piece and the
//! running/game-over state. The driver calls [`GameEngine::tick`] on a fixed
//! schedule and [`GameEngine::handle_input`] on discrete key actions, then reads
//! the state back through accessors or [`GameEngine::snapshot`].

use crate::catalog::PieceCatalog;
use crate::field::Field;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, FIELD_HEIGHT, FIELD_WIDTH};

/// Engine construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub field_width: usize,
    pub field_height: usize,
    pub seed: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            seed: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Running,
    /// Terminal: every later tick or input is a no-op
    GameOver,
}

/// Outcome of one landing, kept until the driver takes it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingEvent {
    pub rows_burned: usize,
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct GameEngine {
    catalog: PieceCatalog,
    rng: SimpleRng,
    field: Field,
    active: Piece,
    next: Piece,
    state: EngineState,
    last_event: Option<LandingEvent>,
}

impl GameEngine {
    /// Start a game on an empty field.
    pub fn new(catalog: PieceCatalog, config: EngineConfig) -> Self {
        let field = Field::new(config.field_width, config.field_height);
        Self::with_field(catalog, field, config.seed)
    }

    /// Start a game on a prepared field.
    ///
    /// If the first piece already collides at its spawn position the engine
    /// starts in [`EngineState::GameOver`].
    pub fn with_field(catalog: PieceCatalog, field: Field, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let active = draw_piece(&catalog, &mut rng);
        let next = draw_piece(&catalog, &mut rng);

        let mut engine = Self {
            catalog,
            rng,
            field,
            active,
            next,
            state: EngineState::Running,
            last_event: None,
        };
        engine.spawn_active();
        engine
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn catalog(&self) -> &PieceCatalog {
        &self.catalog
    }

    /// Apply one discrete input. Blocked moves and rotations are ignored.
    pub fn handle_input(&mut self, action: GameAction) {
        if !self.is_running() {
            return;
        }

        match action {
            GameAction::MoveLeft | GameAction::MoveRight | GameAction::MoveDown => {
                if let Some((dx, dy)) = action.move_vector() {
                    self.active.try_move(&self.field, dx, dy);
                }
            }
            GameAction::Drop => {
                self.active.try_drop(&self.field);
                self.land();
            }
            GameAction::Rotate => {
                self.active.try_rotate(&self.field);
            }
        }
    }

    /// Gravity step: move down one row, landing the piece when blocked.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }

        if !self.active.try_move(&self.field, 0, 1) {
            self.land();
        }
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<LandingEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.field.clone_from(self.field.grid());
        let (x, y) = self.active.position();
        out.field.overlay(self.active.layout(), x, y);
        out.next.clone_from(self.next.layout());
        out.active_position = self.active.position();
        out.active_rotation = self.active.rotation();
        out.game_over = !self.is_running();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::new(self.field.width(), self.field.height());
        self.snapshot_into(&mut s);
        s
    }

    /// Merge the active piece, burn rows, promote the next piece and draw a new one.
    fn land(&mut self) {
        let (x, y) = self.active.position();
        self.field.merge(self.active.layout(), x, y);
        let rows_burned = self.field.update_rows();

        let fresh = draw_piece(&self.catalog, &mut self.rng);
        self.active = std::mem::replace(&mut self.next, fresh);
        self.spawn_active();

        self.last_event = Some(LandingEvent {
            rows_burned,
            game_over: !self.is_running(),
        });
    }

    /// Move the active piece to the respawn position.
    ///
    /// A colliding spawn ends the game; the piece stays recorded where it spawned.
    fn spawn_active(&mut self) {
        let pos = self.field.default_respawn_pos(self.active.width());
        self.active.set_position(pos);
        if self.active.collides(&self.field, 0, 0) {
            self.state = EngineState::GameOver;
        }
    }
}

fn draw_piece(catalog: &PieceCatalog, rng: &mut SimpleRng) -> Piece {
    let shapes = catalog.shapes();
    Piece::new(shapes[rng.next_index(shapes.len())].clone())
}
