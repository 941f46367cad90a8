//! Held-key tracking for terminal environments.
//!
//! Terminals that support the keyboard enhancement protocol report releases;
//! others only send presses and auto-repeats. To cover both, every press or
//! repeat refreshes a per-direction timestamp and a direction that has not
//! been refreshed within `key_release_timeout_ms` counts as released.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEventKind};

use crate::map::movement_direction;
use crate::types::{Direction, HeldKeys, DEFAULT_KEY_RELEASE_TIMEOUT_MS};

/// Tracks which movement directions are currently held.
#[derive(Debug, Clone)]
pub struct HeldKeyTracker {
    /// Last press/repeat per direction, indexed in `Direction::ALL` order
    last_seen: [Option<Instant>; 4],
    key_release_timeout_ms: u32,
}

impl HeldKeyTracker {
    pub fn new() -> Self {
        Self {
            last_seen: [None; 4],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Feed a key event. Returns true if the key is a movement key.
    pub fn handle_key(&mut self, code: KeyCode, kind: KeyEventKind) -> bool {
        let Some(dir) = movement_direction(code) else {
            return false;
        };
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press_at(dir, Instant::now()),
            KeyEventKind::Release => self.release(dir),
        }
        true
    }

    pub fn press_at(&mut self, dir: Direction, now: Instant) {
        self.last_seen[slot(dir)] = Some(now);
    }

    pub fn release(&mut self, dir: Direction) {
        self.last_seen[slot(dir)] = None;
    }

    /// Held set as of `now`, expiring stale directions first.
    pub fn held_at(&mut self, now: Instant) -> HeldKeys {
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        let mut held = HeldKeys::default();
        for dir in Direction::ALL {
            let entry = &mut self.last_seen[slot(dir)];
            let expired = matches!(*entry, Some(t) if now.saturating_duration_since(t) > timeout);
            if expired {
                *entry = None;
            } else if entry.is_some() {
                held.insert(dir);
            }
        }
        held
    }

    pub fn held(&mut self) -> HeldKeys {
        self.held_at(Instant::now())
    }

    /// Forget every held key (e.g. when the terminal loses focus).
    pub fn reset(&mut self) {
        self.last_seen = [None; 4];
    }
}

impl Default for HeldKeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

fn slot(dir: Direction) -> usize {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}
