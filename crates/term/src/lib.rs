//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It avoids widget toolkits and instead renders into a simple framebuffer
//! that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Let scene code draw in playfield pixels through the [`Canvas`] contract
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per tile)

pub mod canvas;
pub mod fb;
pub mod palette;
pub mod renderer;
pub mod view;

pub use tui_sandbox_core as core;
pub use tui_sandbox_types as types;

pub use canvas::{Canvas, CellCanvas};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{draw_world, SandboxView, Viewport};
