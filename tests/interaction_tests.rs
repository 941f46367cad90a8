//! Place / collect / select behaviour through the engine

use tui_sandbox::core::{Inventory, Player, TileGrid, World};
use tui_sandbox::engine::{collect, place, select_slot, toggle_grid, FrameLoop};
use tui_sandbox::types::{InputEvent, Material, ViewOptions, TILE_SIZE};

fn world_with(slots: [Option<Material>; 5]) -> World {
    let mut player = Player::new(0.0, 0.0);
    player.inventory = Inventory::from_slots(slots);
    World::from_parts(TileGrid::new(10, 10), player)
}

#[test]
fn test_place_dirt_from_slot_zero() {
    let mut world = world_with([Some(Material::Dirt), None, None, None, None]);
    assert_eq!(place(&mut world, 3, 3), Some(Material::Dirt));
    assert_eq!(world.grid.get(3, 3), Material::Dirt);
    assert_eq!(world.player.inventory.get(0), None);
}

#[test]
fn test_place_overwrites_any_prior_tile() {
    for prior in [
        Material::Empty,
        Material::Dirt,
        Material::Stone,
        Material::Water,
        Material::Wood,
        Material::Plant,
    ] {
        let mut world = world_with([None, None, Some(Material::Wood), None, None]);
        select_slot(&mut world, 2);
        world.grid.set(6, 1, prior);

        place(&mut world, 6, 1);
        assert_eq!(world.grid.get(6, 1), Material::Wood, "prior {:?}", prior);
        assert_eq!(world.player.inventory.get(2), None);
    }
}

#[test]
fn test_collect_moves_tile_into_inventory() {
    let mut world = world_with([Some(Material::Dirt), None, None, None, None]);
    world.grid.set(4, 4, Material::Water);

    assert_eq!(collect(&mut world, 4, 4), Some(Material::Water));
    assert_eq!(world.grid.get(4, 4), Material::Empty);
    assert_eq!(world.player.inventory.get(1), Some(Material::Water));
}

#[test]
fn test_collect_with_full_inventory_leaves_tile() {
    let mut world = world_with([Some(Material::Dirt); 5]);
    world.grid.set(2, 7, Material::Stone);
    let inventory_before = world.player.inventory;

    assert_eq!(collect(&mut world, 2, 7), None);
    assert_eq!(world.grid.get(2, 7), Material::Stone);
    assert_eq!(world.player.inventory, inventory_before);
}

#[test]
fn test_collect_out_of_bounds_is_noop() {
    let mut world = world_with([None; 5]);
    assert_eq!(collect(&mut world, -1, 3), None);
    assert_eq!(world.player.inventory.filled(), 0);
}

#[test]
fn test_place_then_collect_round_trip_keeps_item_count() {
    let mut world = world_with([Some(Material::Plant), None, None, None, None]);
    place(&mut world, 0, 9);
    assert_eq!(world.player.inventory.filled(), 0);
    collect(&mut world, 0, 9);
    assert_eq!(world.player.inventory.filled(), 1);
    assert_eq!(world.grid.get(0, 9), Material::Empty);
}

#[test]
fn test_grid_toggle_has_no_world_effect() {
    let world = World::new(5);
    let mut fl = FrameLoop::new(world.clone());
    fl.handle_event(InputEvent::ToggleGrid);
    assert!(fl.view().show_grid);
    assert_eq!(fl.world().grid, world.grid);
    assert_eq!(fl.world().player, world.player);

    let mut opts = ViewOptions::default();
    toggle_grid(&mut opts);
    toggle_grid(&mut opts);
    assert!(!opts.show_grid);
}

#[test]
fn test_clicks_resolve_to_tile_under_pointer() {
    let t = TILE_SIZE as f32;
    let mut fl = FrameLoop::new(world_with([Some(Material::Stone), None, None, None, None]));
    fl.handle_event(InputEvent::PrimaryClick {
        x: 3.0 * t + 1.0,
        y: 5.0 * t + t - 1.0,
    });
    assert_eq!(fl.world().grid.get(3, 5), Material::Stone);

    fl.handle_event(InputEvent::SecondaryClick {
        x: 3.0 * t + t / 2.0,
        y: 5.0 * t,
    });
    assert_eq!(fl.world().grid.get(3, 5), Material::Empty);
    assert_eq!(fl.world().player.inventory.get(0), Some(Material::Stone));
}
