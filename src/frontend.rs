//! Terminal frontend: crossterm keys in, framebuffer frames out.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::core::GameSnapshot;
use crate::driver::{Command, Frontend};
use crate::input::{handle_key_event, should_quit};
use crate::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

pub struct TerminalFrontend {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
}

impl TerminalFrontend {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self {
            renderer,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
        }
    }

    /// Give the renderer back so the caller can restore the terminal.
    pub fn into_renderer(self) -> TerminalRenderer {
        self.renderer
    }
}

impl Frontend for TerminalFrontend {
    type Key = KeyEvent;

    fn present(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view.render_into(snapshot, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw(&self.fb)
    }

    fn wait_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            // Held keys repeat; releases carry no action.
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(Some(key)),
            _ => Ok(None),
        }
    }

    fn translate_key(&self, key: &KeyEvent) -> Option<Command> {
        if should_quit(*key) {
            return Some(Command::Quit);
        }
        handle_key_event(*key).map(Command::Play)
    }
}
