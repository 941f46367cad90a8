//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::InputEvent`]s, keeps
//! the per-tick queue of discrete events, and tracks held movement keys
//! (including terminals without key-release events).

pub mod held;
pub mod map;
pub mod queue;

pub use tui_sandbox_types as types;

pub use held::HeldKeyTracker;
pub use map::{map_key, map_mouse, movement_direction, should_quit};
pub use queue::{route_event, EventQueue, Routed, EVENT_QUEUE_CAPACITY};
