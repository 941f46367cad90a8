//! Core world module - pure, deterministic, and testable
//!
//! This module contains the tile world, the player and every rule that mutates
//! them. It has **zero dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same world
//! - **Testable**: every rule is a plain method on plain data
//! - **Portable**: can run in any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size tile grid with forgiving out-of-bounds access
//! - [`terrain`]: per-cell random terrain generation
//! - [`player`]: avatar movement with all-or-nothing collision
//! - [`inventory`]: five single-item slots
//! - [`health`]: bounded hit points
//! - [`world`]: grid + player, created once per session
//!
//! # Example
//!
//! ```
//! use tui_sandbox_core::World;
//! use tui_sandbox_types::Material;
//!
//! let mut world = World::new(12345);
//! world.move_player(5.0, 0.0);
//!
//! assert_eq!(world.grid.get(-1, -1), Material::Empty);
//! assert_eq!(world.player.selected_material(), Some(Material::Dirt));
//! ```

pub mod grid;
pub mod health;
pub mod inventory;
pub mod player;
pub mod terrain;
pub mod world;

pub use tui_sandbox_types as types;

// Re-export commonly used types for convenience
pub use grid::TileGrid;
pub use health::Health;
pub use inventory::Inventory;
pub use player::{collides, Player, PxRect};
pub use terrain::{generate, generate_seeded};
pub use world::World;
