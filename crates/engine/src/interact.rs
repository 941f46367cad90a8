//! Interaction layer: one handler per discrete input event.
//!
//! Handlers hold no state of their own. Boundary cases (out-of-range tile,
//! empty slot, full inventory) are silent no-ops reported through the return
//! value.

use crate::core::World;
use crate::types::{Material, ViewOptions, INVENTORY_SIZE, TILE_SIZE};

/// Tile coordinate under a playfield pixel.
///
/// Pixels left of or above the playfield map to negative tiles.
pub fn tile_at(x: f32, y: f32) -> (i32, i32) {
    let t = TILE_SIZE as f32;
    ((x / t).floor() as i32, (y / t).floor() as i32)
}

/// Select inventory slot `slot` (0-based). Returns false if out of range.
pub fn select_slot(world: &mut World, slot: usize) -> bool {
    if slot >= INVENTORY_SIZE {
        return false;
    }
    world.player.select_slot(slot);
    log::debug!("selected slot {}", slot);
    true
}

/// Place the selected material at `(tx, ty)`, overwriting whatever is there.
///
/// The slot is spent whenever it held something, even if the target tile is
/// outside the grid. Returns the placed material.
pub fn place(world: &mut World, tx: i32, ty: i32) -> Option<Material> {
    let material = world.player.consume_selected()?;
    world.grid.set(tx, ty, material);
    log::debug!(
        "placed {} at ({}, {}) from slot {}",
        material.name(),
        tx,
        ty,
        world.player.selected_slot()
    );
    Some(material)
}

/// Pick up the material at `(tx, ty)`.
///
/// The tile is cleared only if the inventory accepted the item. Returns the
/// collected material.
pub fn collect(world: &mut World, tx: i32, ty: i32) -> Option<Material> {
    let material = world.grid.get(tx, ty);
    if material.is_empty() {
        return None;
    }
    if !world.player.add_to_inventory(material) {
        log::debug!(
            "inventory full, left {} at ({}, {})",
            material.name(),
            tx,
            ty
        );
        return None;
    }
    world.grid.set(tx, ty, Material::Empty);
    log::debug!("collected {} at ({}, {})", material.name(), tx, ty);
    Some(material)
}

/// Flip the grid overlay. View-only; the world is not touched.
pub fn toggle_grid(view: &mut ViewOptions) -> bool {
    view.show_grid = !view.show_grid;
    log::debug!("grid overlay {}", if view.show_grid { "on" } else { "off" });
    view.show_grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Inventory, Player, TileGrid};

    fn world_with(slots: [Option<Material>; INVENTORY_SIZE]) -> World {
        let mut player = Player::new(0.0, 0.0);
        player.inventory = Inventory::from_slots(slots);
        World::from_parts(TileGrid::new(8, 8), player)
    }

    #[test]
    fn test_tile_at_floors() {
        assert_eq!(tile_at(0.0, 0.0), (0, 0));
        assert_eq!(tile_at(31.9, 32.0), (0, 1));
        assert_eq!(tile_at(-0.5, 100.0), (-1, 3));
    }

    #[test]
    fn test_place_with_empty_slot_does_nothing() {
        let mut world = world_with([None; INVENTORY_SIZE]);
        world.grid.set(1, 1, Material::Wood);
        assert_eq!(place(&mut world, 1, 1), None);
        assert_eq!(world.grid.get(1, 1), Material::Wood);
    }

    #[test]
    fn test_place_outside_grid_still_spends_item() {
        let mut world = world_with([Some(Material::Stone), None, None, None, None]);
        let before = world.grid.clone();
        assert_eq!(place(&mut world, 40, -2), Some(Material::Stone));
        assert_eq!(world.player.inventory.get(0), None);
        assert_eq!(world.grid, before);
    }

    #[test]
    fn test_collect_empty_tile_is_noop() {
        let mut world = world_with([None; INVENTORY_SIZE]);
        assert_eq!(collect(&mut world, 2, 2), None);
        assert_eq!(world.player.inventory.filled(), 0);
    }

    #[test]
    fn test_select_slot_range() {
        let mut world = world_with([None; INVENTORY_SIZE]);
        assert!(select_slot(&mut world, 4));
        assert_eq!(world.player.selected_slot(), 4);
        assert!(!select_slot(&mut world, 5));
        assert_eq!(world.player.selected_slot(), 4);
    }

    #[test]
    fn test_toggle_grid_flips() {
        let mut view = ViewOptions::default();
        assert!(toggle_grid(&mut view));
        assert!(!toggle_grid(&mut view));
    }
}
