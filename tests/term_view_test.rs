use tui_sandbox::core::{Player, TileGrid, World};
use tui_sandbox::engine::tile_at;
use tui_sandbox::term::palette;
use tui_sandbox::term::{FrameBuffer, SandboxView, Viewport};
use tui_sandbox::types::{Material, ViewOptions};

fn world_with_player_at(x: f32, y: f32) -> World {
    World::from_parts(TileGrid::new(25, 18), Player::with_starter_inventory(x, y))
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let world = world_with_player_at(400.0, 300.0);
    let view = SandboxView::default();

    // With cell_w=2 and cell_h=1:
    // playfield = 800/16 by ceil(600/32) => 50x19, plus border => 52x21
    let fb = view.render(&world, &ViewOptions::default(), Viewport::new(52, 21));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(51, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 20).unwrap().ch, '└');
    assert_eq!(fb.get(51, 20).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_tile_as_two_cells_wide() {
    let mut world = world_with_player_at(400.0, 300.0);
    world.grid.set(0, 17, Material::Dirt);

    let fb = SandboxView::default().render(&world, &ViewOptions::default(), Viewport::new(52, 21));

    // Inside border: (1,1) origin. Each tile is 2 cells wide.
    let dirt = palette::material_color(Material::Dirt);
    assert_eq!(fb.get(1, 18).unwrap().style.bg, dirt);
    assert_eq!(fb.get(2, 18).unwrap().style.bg, dirt);
    assert_eq!(fb.get(3, 18).unwrap().style.bg, palette::BACKGROUND);
    assert_eq!(fb.get(1, 17).unwrap().style.bg, palette::BACKGROUND);
}

#[test]
fn term_view_draws_player_on_top() {
    let mut world = world_with_player_at(64.0, 64.0);
    world.grid.set(2, 2, Material::Water);
    world.grid.set(3, 2, Material::Stone);

    let fb = SandboxView::default().render(&world, &ViewOptions::default(), Viewport::new(52, 21));

    // Player box covers tile (2, 2) => cells (5..=6, 3) after the border offset.
    assert_eq!(fb.get(5, 3).unwrap().style.bg, palette::PLAYER);
    assert_eq!(fb.get(6, 3).unwrap().style.bg, palette::PLAYER);
    // Face is smaller than a cell and lands in the cell holding its centre.
    assert_eq!(fb.get(6, 3).unwrap().ch, '●');
    assert_eq!(
        fb.get(7, 3).unwrap().style.bg,
        palette::material_color(Material::Stone)
    );
}

#[test]
fn term_view_grid_overlay_follows_toggle() {
    let world = world_with_player_at(400.0, 300.0);
    let view = SandboxView::default();

    let off = view.render(&world, &ViewOptions::default(), Viewport::new(52, 21));
    assert_eq!(off.get(1, 1).unwrap().ch, ' ');

    let on = view.render(&world, &ViewOptions { show_grid: true }, Viewport::new(52, 21));
    assert_eq!(on.get(1, 1).unwrap().ch, '[');
    assert_eq!(on.get(2, 1).unwrap().ch, ']');
    assert_eq!(on.get(1, 1).unwrap().style.fg, palette::GRID_LINE);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let world = world_with_player_at(400.0, 300.0);
    let view = SandboxView::default();

    let narrow = screen_text(&view.render(&world, &ViewOptions::default(), Viewport::new(52, 21)));
    assert!(!narrow.contains("INVENTORY"));

    let wide = screen_text(&view.render(&world, &ViewOptions::default(), Viewport::new(90, 24)));
    assert!(wide.contains("INVENTORY"));
    assert!(wide.contains(">1 ["));
    assert!(wide.contains("Dirt"));
    assert!(wide.contains("Health: 100/100"));
    assert!(wide.contains("GRID off"));
    assert!(wide.contains("ESC/Q: Quit"));
}

#[test]
fn term_view_centers_playfield_on_large_viewports() {
    let world = world_with_player_at(400.0, 300.0);
    let view = SandboxView::default();

    // Frame 52x21 + 2 gap + 30 panel = 84 wide; 21 tall.
    let fb = view.render(&world, &ViewOptions::default(), Viewport::new(90, 29));

    // start_x = (90 - 84) / 2 = 3, start_y = (29 - 21) / 2 = 4.
    assert_eq!(fb.get(3, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_layout_maps_clicks_back_to_tiles() {
    let mut world = world_with_player_at(400.0, 300.0);
    world.grid.set(7, 11, Material::Wood);

    let view = SandboxView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let layout = view.render_into(&world, &ViewOptions::default(), Viewport::new(90, 29), &mut fb);

    // Both cells of the tile resolve to the same tile.
    for dc in 0..2 {
        let col = layout.origin_col + 7 * 2 + dc;
        let row = layout.origin_row + 11;
        assert_eq!(
            fb.get(col, row).unwrap().style.bg,
            palette::material_color(Material::Wood)
        );
        let (x, y) = layout.cell_to_pixel(col, row);
        assert_eq!(tile_at(x, y), (7, 11));
    }
}

#[test]
fn term_view_panel_shows_current_health() {
    let mut world = world_with_player_at(400.0, 300.0);
    world.player.health.damage(35);

    let fb = SandboxView::default().render(&world, &ViewOptions::default(), Viewport::new(90, 24));
    let text = screen_text(&fb);
    assert!(text.contains("Health: 65/100"));
}
