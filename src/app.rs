use crossterm::event::{KeyEvent, MouseEvent};
use log::debug;

use crate::game::{AlienInvasion, GameEvent};
use crate::input::{self, KeyTracker};

pub struct App {
    pub should_quit: bool,
    pub game: AlienInvasion,
    keys: KeyTracker,
}

impl App {
    pub fn new(game: AlienInvasion, reports_release: bool) -> Self {
        Self {
            should_quit: false,
            game,
            keys: KeyTracker::new(reports_release),
        }
    }

    pub fn on_tick(&mut self) {
        for ev in self.keys.on_tick() {
            self.dispatch(ev);
        }
        if self.should_quit {
            return;
        }
        self.game.update();
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        for ev in self.keys.on_key(key) {
            self.dispatch(ev);
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if let Some(ev) = input::mouse_event(mouse) {
            self.dispatch(ev);
        }
    }

    /// The playfield is sized once at startup; a resized terminal just clips
    /// or pads the frame.
    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        debug!("Terminal resized to {}x{}, keeping the startup screen", cols, rows);
    }

    fn dispatch(&mut self, ev: GameEvent) {
        self.game.handle_event(ev);
        if self.game.should_quit() {
            self.should_quit = true;
        }
    }
}
