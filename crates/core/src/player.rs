//! Player module - avatar position, collision and inventory
//!
//! The player is an axis-aligned box of `TILE_SIZE` x `TILE_SIZE` pixels at a
//! continuous pixel position (top-left corner). Moves are all-or-nothing: the
//! candidate box is clamped to the screen and then rejected outright if it
//! overlaps any solid tile. There is no sliding along one axis.

use crate::grid::TileGrid;
use crate::health::Health;
use crate::inventory::Inventory;
use crate::types::{Material, INVENTORY_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE};

/// Axis-aligned rectangle in playfield pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PxRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl PxRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Inclusive tile range `(x0, y0, x1, y1)` touched by the half-open box
    /// `[x, x + w) x [y, y + h)`.
    pub fn tile_span(&self) -> (i32, i32, i32, i32) {
        let t = TILE_SIZE as f32;
        let x0 = (self.x / t).floor() as i32;
        let y0 = (self.y / t).floor() as i32;
        let x1 = ((self.x + self.w) / t).ceil() as i32 - 1;
        let y1 = ((self.y + self.h) / t).ceil() as i32 - 1;
        (x0, y0, x1.max(x0), y1.max(y0))
    }
}

/// The player avatar
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub health: Health,
    pub inventory: Inventory,
    selected_slot: usize,
}

impl Player {
    /// Create a player at (x, y) with an empty inventory
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: TILE_SIZE as f32,
            height: TILE_SIZE as f32,
            health: Health::default(),
            inventory: Inventory::new(),
            selected_slot: 0,
        }
    }

    /// Create a player holding one of each material
    pub fn with_starter_inventory(x: f32, y: f32) -> Self {
        Self {
            inventory: Inventory::starter(),
            ..Self::new(x, y)
        }
    }

    pub fn bounds(&self) -> PxRect {
        PxRect::new(self.x, self.y, self.width, self.height)
    }

    /// Tiles the current box overlaps, as an inclusive range
    pub fn overlapped_tiles(&self) -> (i32, i32, i32, i32) {
        self.bounds().tile_span()
    }

    /// Try to move by (dx, dy) pixels.
    ///
    /// Returns true if the position changed.
    pub fn move_by(&mut self, dx: f32, dy: f32, grid: &TileGrid) -> bool {
        let max_x = (SCREEN_WIDTH as f32 - self.width).max(0.0);
        let max_y = (SCREEN_HEIGHT as f32 - self.height).max(0.0);
        let new_x = (self.x + dx).clamp(0.0, max_x);
        let new_y = (self.y + dy).clamp(0.0, max_y);

        let candidate = PxRect::new(new_x, new_y, self.width, self.height);
        if collides(&candidate, grid) {
            return false;
        }

        let moved = new_x != self.x || new_y != self.y;
        self.x = new_x;
        self.y = new_y;
        moved
    }

    /// Put `material` into the first free slot; false if the inventory is full
    pub fn add_to_inventory(&mut self, material: Material) -> bool {
        self.inventory.add(material)
    }

    pub fn selected_slot(&self) -> usize {
        self.selected_slot
    }

    /// Select slot `slot`; out-of-range indices are ignored
    pub fn select_slot(&mut self, slot: usize) {
        if slot < INVENTORY_SIZE {
            self.selected_slot = slot;
        }
    }

    pub fn selected_material(&self) -> Option<Material> {
        self.inventory.get(self.selected_slot)
    }

    /// Clear the selected slot and return its content (even if already empty)
    pub fn consume_selected(&mut self) -> Option<Material> {
        self.inventory.take(self.selected_slot)
    }
}

/// Whether any tile under `rect` is solid
pub fn collides(rect: &PxRect, grid: &TileGrid) -> bool {
    let (x0, y0, x1, y1) = rect.tile_span();
    (y0..=y1).any(|ty| (x0..=x1).any(|tx| grid.is_solid_at(tx, ty)))
}
