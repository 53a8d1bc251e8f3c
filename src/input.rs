use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use log::debug;

use crate::game::{GameEvent, Key};

/// A held key counts as released once this many ticks pass without a
/// press or repeat for it. Only used when the terminal never reports
/// releases; OS key-repeat refreshes well inside this window.
pub const HOLD_WINDOW: u64 = 4;

/// Turns terminal key events into key-down/key-up pairs.
///
/// Terminals with keyboard enhancement send proper `Press` / `Repeat` /
/// `Release` kinds. Classic terminals send only `Press` (repeats included),
/// so arrows get a synthetic release after [`HOLD_WINDOW`] quiet ticks.
pub struct KeyTracker {
    reports_release: bool,
    tick: u64,
    held: HashMap<Key, u64>,
}

impl KeyTracker {
    pub fn new(reports_release: bool) -> Self {
        Self {
            reports_release,
            tick: 0,
            held: HashMap::new(),
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Vec<GameEvent> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return vec![GameEvent::Quit];
        }
        let Some(mapped) = map_key(key.code) else {
            return Vec::new();
        };

        match key.kind {
            KeyEventKind::Press => {
                let was_held = self.held.insert(mapped, self.tick).is_some();
                match mapped {
                    // OS auto-repeat on a classic terminal: keep the key alive
                    Key::Left | Key::Right if was_held => Vec::new(),
                    _ => vec![GameEvent::KeyDown(mapped)],
                }
            }
            KeyEventKind::Repeat => {
                self.held.insert(mapped, self.tick);
                Vec::new()
            }
            KeyEventKind::Release => {
                self.held.remove(&mapped);
                vec![GameEvent::KeyUp(mapped)]
            }
        }
    }

    /// Advance one tick, releasing arrows that went quiet.
    pub fn on_tick(&mut self) -> Vec<GameEvent> {
        self.tick += 1;
        if self.reports_release {
            return Vec::new();
        }
        let tick = self.tick;
        let mut expired: Vec<Key> = self
            .held
            .iter()
            .filter(|&(_, &last)| tick.saturating_sub(last) > HOLD_WINDOW)
            .map(|(&key, _)| key)
            .collect();
        expired.sort_by_key(|k| *k as u8);

        expired
            .into_iter()
            .map(|key| {
                self.held.remove(&key);
                debug!("Synthesized release for {:?}", key);
                GameEvent::KeyUp(key)
            })
            .collect()
    }
}

fn map_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Key::Q),
        _ => None,
    }
}

/// Any button press becomes a click at the top-left dot of the cell.
pub fn mouse_event(mouse: MouseEvent) -> Option<GameEvent> {
    match mouse.kind {
        MouseEventKind::Down(_) => Some(GameEvent::MouseDown {
            x: mouse.column as i32 * 2,
            y: mouse.row as i32 * 4,
        }),
        _ => None,
    }
}
