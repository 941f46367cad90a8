//! Terrain module - per-cell random world generation
//!
//! Cells in the bottom `DIRT_ROWS` rows are always Dirt. Every other cell runs
//! a chain of independent checks, each with a fresh draw:
//!
//! 1. `< STONE_CHANCE` → Stone
//! 2. `< WATER_CHANCE` → Water
//! 3. `< PLANT_CHANCE` → Plant
//! 4. `< WOOD_CHANCE`  → Wood
//! 5. otherwise Empty
//!
//! The chain is kept as is: later kinds only see cells the earlier checks
//! passed over, so their realised share is a little under the nominal chance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::grid::TileGrid;
use crate::types::{
    Material, DIRT_ROWS, PLANT_CHANCE, STONE_CHANCE, WATER_CHANCE, WOOD_CHANCE,
};

/// Fill every cell of `grid` in scan order.
pub fn generate<R: Rng + ?Sized>(grid: &mut TileGrid, rng: &mut R) {
    let width = grid.width() as i32;
    let height = grid.height() as i32;
    let dirt_from = height - DIRT_ROWS as i32;

    for y in 0..height {
        for x in 0..width {
            let material = if y >= dirt_from {
                Material::Dirt
            } else {
                sample_cell(rng)
            };
            grid.set(x, y, material);
        }
    }

    log::debug!(
        "generated {}x{} terrain: stone={} water={} plant={} wood={}",
        width,
        height,
        grid.count(Material::Stone),
        grid.count(Material::Water),
        grid.count(Material::Plant),
        grid.count(Material::Wood),
    );
}

/// Generate into `grid` from a reproducible seed.
pub fn generate_seeded(grid: &mut TileGrid, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(grid, &mut rng);
}

fn sample_cell<R: Rng + ?Sized>(rng: &mut R) -> Material {
    if rng.random::<f64>() < STONE_CHANCE {
        Material::Stone
    } else if rng.random::<f64>() < WATER_CHANCE {
        Material::Water
    } else if rng.random::<f64>() < PLANT_CHANCE {
        Material::Plant
    } else if rng.random::<f64>() < WOOD_CHANCE {
        Material::Wood
    } else {
        Material::Empty
    }
}
