//! Per-tick queue of discrete events and routing of raw terminal events.

use arrayvec::ArrayVec;
use crossterm::event::{Event, KeyEventKind};

use crate::held::HeldKeyTracker;
use crate::map::{map_key, map_mouse};
use crate::types::{InputEvent, ViewLayout};

/// Discrete events buffered per tick
pub const EVENT_QUEUE_CAPACITY: usize = 64;

/// Bounded, allocation-free FIFO of discrete events, drained once per tick.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: ArrayVec<InputEvent, EVENT_QUEUE_CAPACITY>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event. Returns false (and drops it) when the queue is full.
    ///
    /// `Quit` is never dropped: on a full queue it evicts the oldest other
    /// event instead.
    pub fn push(&mut self, event: InputEvent) -> bool {
        if !self.events.is_full() {
            self.events.push(event);
            return true;
        }
        if event == InputEvent::Quit {
            if let Some(i) = self.events.iter().position(|e| *e != InputEvent::Quit) {
                let evicted = self.events.remove(i);
                log::warn!("input queue full, evicting {:?} for quit", evicted);
                self.events.push(event);
            }
            return true;
        }
        log::warn!("input queue full, dropping {:?}", event);
        false
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every queued event in arrival order.
    pub fn drain(&mut self) -> impl Iterator<Item = InputEvent> + '_ {
        self.events.drain(..)
    }
}

/// What a raw terminal event meant for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// Became a discrete event or a held-key update
    Consumed,
    /// The terminal was resized; the renderer should redraw fully
    Resized,
    /// Nothing to do
    Ignored,
}

/// Route one crossterm event into the held-key tracker or the event queue.
pub fn route_event(
    event: Event,
    held: &mut HeldKeyTracker,
    queue: &mut EventQueue,
    layout: &ViewLayout,
) -> Routed {
    match event {
        Event::Key(key) => {
            if held.handle_key(key.code, key.kind) {
                return Routed::Consumed;
            }
            if key.kind != KeyEventKind::Press {
                return Routed::Ignored;
            }
            match map_key(key) {
                Some(ev) => {
                    queue.push(ev);
                    Routed::Consumed
                }
                None => Routed::Ignored,
            }
        }
        Event::Mouse(mouse) => match map_mouse(mouse, layout) {
            Some(ev) => {
                queue.push(ev);
                Routed::Consumed
            }
            None => Routed::Ignored,
        },
        Event::FocusLost => {
            held.reset();
            Routed::Consumed
        }
        Event::Resize(_, _) => Routed::Resized,
        _ => Routed::Ignored,
    }
}
