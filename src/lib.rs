//! TUI Sandbox (workspace facade crate).
//!
//! Re-exports the `tui_sandbox::{core,engine,input,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_sandbox_core as core;
pub use tui_sandbox_engine as engine;
pub use tui_sandbox_input as input;
pub use tui_sandbox_term as term;
pub use tui_sandbox_types as types;
