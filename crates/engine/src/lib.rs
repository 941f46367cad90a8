//! Engine: input-driven rules on top of `core`.
//!
//! - [`interact`]: place / collect / select / grid-toggle handlers
//! - [`frame`]: the per-tick state machine the binary drives at 60 Hz

pub mod frame;
pub mod interact;

pub use tui_sandbox_core as core;
pub use tui_sandbox_types as types;

pub use frame::FrameLoop;
pub use interact::{collect, place, select_slot, tile_at, toggle_grid};
