//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the sandbox.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (world logic, input mapping, terminal rendering).
//!
//! # Playfield Dimensions
//!
//! The world is measured in pixels and carved into square tiles:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 800 | Playfield width in pixels |
//! | `SCREEN_HEIGHT` | 600 | Playfield height in pixels |
//! | `TILE_SIZE` | 32 | Tile edge in pixels |
//! | `GRID_WIDTH` | 25 | Columns of tiles (800 / 32) |
//! | `GRID_HEIGHT` | 18 | Rows of tiles (600 / 32, truncated) |
//!
//! # Terrain Generation
//!
//! Every cell outside the bottom `DIRT_ROWS` rows runs four independent checks,
//! in order, each with its own draw: Stone, Water, Plant, Wood. The first hit
//! wins, so the realised odds are slightly below the nominal chances for every
//! kind after Stone.
//!
//! # Examples
//!
//! ```
//! use tui_sandbox_types::{Direction, HeldKeys, Material, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert!(Material::Stone.is_solid());
//! assert!(!Material::Water.is_solid());
//!
//! let mut held = HeldKeys::default();
//! held.insert(Direction::Left);
//! held.insert(Direction::Up);
//! let order: Vec<_> = held.iter().collect();
//! assert_eq!(order, vec![Direction::Up, Direction::Left]);
//!
//! assert_eq!(GRID_WIDTH, 25);
//! assert_eq!(GRID_HEIGHT, 18);
//! ```

/// Playfield width in pixels
pub const SCREEN_WIDTH: u32 = 800;

/// Playfield height in pixels
pub const SCREEN_HEIGHT: u32 = 600;

/// Edge length of one tile in pixels
pub const TILE_SIZE: u32 = 32;

/// Tiles per row
pub const GRID_WIDTH: u32 = SCREEN_WIDTH / TILE_SIZE;

/// Tiles per column
pub const GRID_HEIGHT: u32 = SCREEN_HEIGHT / TILE_SIZE;

/// Pixels moved per directional move call
pub const PLAYER_SPEED: f32 = 5.0;

/// Number of inventory slots
pub const INVENTORY_SIZE: usize = 5;

/// Starting and maximum health
pub const MAX_HEALTH: u32 = 100;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of bottom rows that are always Dirt
pub const DIRT_ROWS: u32 = 3;

/// Per-cell chance of the Stone check
pub const STONE_CHANCE: f64 = 0.02;

/// Per-cell chance of the Water check (only reached when Stone missed)
pub const WATER_CHANCE: f64 = 0.01;

/// Per-cell chance of the Plant check
pub const PLANT_CHANCE: f64 = 0.03;

/// Per-cell chance of the Wood check
pub const WOOD_CHANCE: f64 = 0.01;

/// Default time after which a held direction without refresh is released
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Terrain and item kinds
///
/// Solidity is a static property of the kind: only Stone blocks movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Material {
    #[default]
    Empty,
    Dirt,
    Stone,
    Water,
    Wood,
    Plant,
}

impl Material {
    /// The collectible kinds, in starting-inventory order.
    pub const ALL: [Material; 5] = [
        Material::Dirt,
        Material::Stone,
        Material::Water,
        Material::Wood,
        Material::Plant,
    ];

    /// Whether this material blocks the player.
    pub fn is_solid(self) -> bool {
        matches!(self, Material::Stone)
    }

    pub fn is_empty(self) -> bool {
        self == Material::Empty
    }

    /// Display name
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_sandbox_types::Material;
    ///
    /// assert_eq!(Material::Dirt.name(), "Dirt");
    /// assert_eq!(Material::Empty.name(), "Empty");
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            Material::Empty => "Empty",
            Material::Dirt => "Dirt",
            Material::Stone => "Stone",
            Material::Water => "Water",
            Material::Wood => "Wood",
            Material::Plant => "Plant",
        }
    }
}

/// Movement directions, in the order the frame loop applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Application order for held movement keys.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Pixel delta for one move call at `PLAYER_SPEED`.
    pub fn delta(self) -> (f32, f32) {
        match self {
            Direction::Up => (0.0, -PLAYER_SPEED),
            Direction::Down => (0.0, PLAYER_SPEED),
            Direction::Left => (-PLAYER_SPEED, 0.0),
            Direction::Right => (PLAYER_SPEED, 0.0),
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Down => 1 << 1,
            Direction::Left => 1 << 2,
            Direction::Right => 1 << 3,
        }
    }
}

/// Snapshot of held movement keys for one tick.
///
/// Opposing directions may both be held; each is applied as its own move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldKeys {
    bits: u8,
}

impl HeldKeys {
    pub fn insert(&mut self, dir: Direction) {
        self.bits |= dir.bit();
    }

    pub fn remove(&mut self, dir: Direction) {
        self.bits &= !dir.bit();
    }

    pub fn contains(&self, dir: Direction) -> bool {
        self.bits & dir.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Held directions in application order (up, down, left, right).
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for HeldKeys {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut held = HeldKeys::default();
        for dir in iter {
            held.insert(dir);
        }
        held
    }
}

/// Discrete input events, drained once per tick.
///
/// Pointer positions are playfield pixels (may lie outside the playfield).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed, Ctrl+C, Esc or `q`
    Quit,
    /// Select inventory slot (0-based)
    SelectSlot(u8),
    /// Flip the grid overlay
    ToggleGrid,
    /// Place the selected material at the pointer
    PrimaryClick { x: f32, y: f32 },
    /// Collect the material under the pointer
    SecondaryClick { x: f32, y: f32 },
}

/// Frame loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Stopped,
}

/// View-only flags toggled from input; never affect the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewOptions {
    pub show_grid: bool,
}

/// Where the playfield sits in the terminal, for mapping pointer cells back to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLayout {
    /// Terminal column of playfield pixel x = 0
    pub origin_col: u16,
    /// Terminal row of playfield pixel y = 0
    pub origin_row: u16,
    pub px_per_col: u32,
    pub px_per_row: u32,
}

impl ViewLayout {
    /// Playfield pixel at the centre of a terminal cell.
    pub fn cell_to_pixel(&self, col: u16, row: u16) -> (f32, f32) {
        let dx = col as i64 - self.origin_col as i64;
        let dy = row as i64 - self.origin_row as i64;
        let x = dx * self.px_per_col as i64 + (self.px_per_col / 2) as i64;
        let y = dy * self.px_per_row as i64 + (self.px_per_row / 2) as i64;
        (x as f32, y as f32)
    }
}

impl Default for ViewLayout {
    fn default() -> Self {
        Self {
            origin_col: 0,
            origin_row: 0,
            px_per_col: TILE_SIZE / 2,
            px_per_row: TILE_SIZE,
        }
    }
}
