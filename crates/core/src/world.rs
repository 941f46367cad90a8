//! World module - the tile grid and the player that lives in it
//!
//! A world is generated once from a seed and then only mutated in place by
//! movement and place/collect interactions. It is never resized.

use crate::grid::TileGrid;
use crate::player::Player;
use crate::terrain;
use crate::types::{Material, GRID_HEIGHT, GRID_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Debug, Clone)]
pub struct World {
    pub grid: TileGrid,
    pub player: Player,
    seed: u64,
}

impl World {
    /// Generate a full-size world and spawn the player at the screen centre.
    pub fn new(seed: u64) -> Self {
        let mut grid = TileGrid::new(GRID_WIDTH, GRID_HEIGHT);
        terrain::generate_seeded(&mut grid, seed);

        let player = Player::with_starter_inventory(
            (SCREEN_WIDTH / 2) as f32,
            (SCREEN_HEIGHT / 2) as f32,
        );
        let mut world = Self { grid, player, seed };
        world.clear_spawn();

        log::info!(
            "world ready: seed={} grid={}x{} spawn=({}, {})",
            seed,
            GRID_WIDTH,
            GRID_HEIGHT,
            world.player.x,
            world.player.y
        );
        world
    }

    /// Assemble a world from parts (tests, custom maps).
    pub fn from_parts(grid: TileGrid, player: Player) -> Self {
        Self {
            grid,
            player,
            seed: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Move the player by (dx, dy) against this world's grid.
    pub fn move_player(&mut self, dx: f32, dy: f32) -> bool {
        self.player.move_by(dx, dy, &self.grid)
    }

    /// Turn any solid tiles under the spawn box into Empty so the player is
    /// never created inside stone.
    fn clear_spawn(&mut self) {
        let (x0, y0, x1, y1) = self.player.overlapped_tiles();
        for ty in y0..=y1 {
            for tx in x0..=x1 {
                if self.grid.is_solid_at(tx, ty) {
                    log::debug!("clearing solid tile at spawn ({}, {})", tx, ty);
                    self.grid.set(tx, ty, Material::Empty);
                }
            }
        }
    }
}
