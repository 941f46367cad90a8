//! SandboxView: maps the world into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::{Canvas, CellCanvas};
use crate::core::{PxRect, World};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette;
use crate::types::{
    Material, ViewLayout, ViewOptions, GRID_HEIGHT, GRID_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH,
    TILE_SIZE,
};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Side panel width in columns when there is room for it.
const PANEL_WIDTH: u16 = 30;

/// Narrowest panel still worth drawing.
const PANEL_MIN_WIDTH: u16 = 12;

/// Health bar width in cells.
const HEALTH_BAR_CELLS: u16 = 20;

const CONTROLS: [&str; 7] = [
    "Controls:",
    "WASD/Arrows: Move",
    "1-5: Select slot",
    "Left-click: Place",
    "Right-click: Collect",
    "G: Toggle grid",
    "ESC/Q: Quit",
];

/// A lightweight terminal renderer for the sandbox.
pub struct SandboxView {
    /// Terminal columns per tile.
    cell_w: u16,
    /// Terminal rows per tile.
    cell_h: u16,
}

impl Default for SandboxView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl SandboxView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn px_per_col(&self) -> u32 {
        TILE_SIZE / self.cell_w as u32
    }

    fn px_per_row(&self) -> u32 {
        TILE_SIZE / self.cell_h as u32
    }

    /// Playfield size in cells (partial trailing rows/cols are shown).
    pub fn field_size(&self) -> (u16, u16) {
        let cols = SCREEN_WIDTH.div_ceil(self.px_per_col());
        let rows = SCREEN_HEIGHT.div_ceil(self.px_per_row());
        (cols as u16, rows as u16)
    }

    /// Where the playfield lands for a given viewport.
    pub fn layout(&self, viewport: Viewport) -> ViewLayout {
        let (cols, rows) = self.field_size();
        let frame_w = cols + 2;
        let frame_h = rows + 2;
        let with_panel = frame_w + 2 + PANEL_WIDTH;

        let start_x = if viewport.width >= with_panel {
            (viewport.width - with_panel) / 2
        } else {
            viewport.width.saturating_sub(frame_w) / 2
        };
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        ViewLayout {
            origin_col: start_x + 1,
            origin_row: start_y + 1,
            px_per_col: self.px_per_col(),
            px_per_row: self.px_per_row(),
        }
    }

    /// Render the world into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport. Returns the layout used, for mapping pointer input.
    pub fn render_into(
        &self,
        world: &World,
        options: &ViewOptions,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> ViewLayout {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let layout = self.layout(viewport);
        let (cols, rows) = self.field_size();
        let start_x = layout.origin_col - 1;
        let start_y = layout.origin_row - 1;
        let frame_w = cols + 2;
        let frame_h = rows + 2;

        draw_border(
            fb,
            start_x,
            start_y,
            frame_w,
            frame_h,
            CellStyle::new(palette::BORDER, palette::BACKGROUND),
        );

        {
            let mut canvas = CellCanvas::new(fb, layout, cols, rows);
            draw_world(&mut canvas, world, options);
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x < viewport.width && viewport.width - panel_x >= PANEL_MIN_WIDTH {
            draw_side_panel(fb, world, options, viewport, panel_x, start_y);
        }

        layout
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, world: &World, options: &ViewOptions, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(world, options, viewport, &mut fb);
        fb
    }
}

/// Draw tiles, the optional grid overlay and the player through `canvas`.
pub fn draw_world<C: Canvas>(canvas: &mut C, world: &World, options: &ViewOptions) {
    let t = TILE_SIZE as f32;
    canvas.fill_rect(
        PxRect::new(0.0, 0.0, SCREEN_WIDTH as f32, SCREEN_HEIGHT as f32),
        palette::BACKGROUND,
    );

    for (x, y, material) in world.grid.iter() {
        if material != Material::Empty {
            canvas.fill_rect(
                PxRect::new(x as f32 * t, y as f32 * t, t, t),
                palette::material_color(material),
            );
        }
    }

    if options.show_grid {
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                canvas.stroke_rect(
                    PxRect::new(x as f32 * t, y as f32 * t, t, t),
                    palette::GRID_LINE,
                );
            }
        }
    }

    let p = &world.player;
    canvas.fill_rect(p.bounds(), palette::PLAYER);
    canvas.fill_circle(p.x + p.width / 2.0, p.y + p.height / 3.0, 5.0, palette::PLAYER_FACE);
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_side_panel(
    fb: &mut FrameBuffer,
    world: &World,
    options: &ViewOptions,
    viewport: Viewport,
    panel_x: u16,
    start_y: u16,
) {
    let label = CellStyle::new(palette::TEXT, palette::BACKGROUND).bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), palette::BACKGROUND);
    let selected = CellStyle::new(palette::SELECTED, palette::BACKGROUND).bold();

    let mut y = start_y;
    fb.put_str(panel_x, y, "INVENTORY", label);
    y = y.saturating_add(1);

    let player = &world.player;
    for (i, slot) in player.inventory.slots().iter().enumerate() {
        let is_selected = i == player.selected_slot();
        let style = if is_selected { selected } else { value };
        fb.put_char(panel_x, y, if is_selected { '>' } else { ' ' }, style);
        fb.put_char(panel_x + 1, y, char::from(b'1' + i as u8), style);

        let swatch = slot.map(palette::material_color).unwrap_or(palette::SLOT);
        fb.put_char(panel_x + 3, y, '[', style);
        fb.paint(panel_x + 4, y, swatch);
        fb.paint(panel_x + 5, y, swatch);
        fb.put_char(panel_x + 6, y, ']', style);
        fb.put_str(panel_x + 8, y, slot.map(Material::name).unwrap_or("-"), style);
        y = y.saturating_add(1);
    }
    y = y.saturating_add(1);

    fb.put_str(panel_x, y, "HEALTH", label);
    y = y.saturating_add(1);
    let health = player.health;
    let filled = (health.fraction() * HEALTH_BAR_CELLS as f32).round() as u16;
    for i in 0..HEALTH_BAR_CELLS {
        let color = if i < filled {
            palette::HEALTH_FULL
        } else {
            palette::HEALTH_EMPTY
        };
        fb.paint(panel_x + i, y, color);
    }
    y = y.saturating_add(1);
    fb.put_str(panel_x, y, "Health: ", value);
    let mut x = panel_x + 8;
    x += fb.put_u32(x, y, health.current(), value);
    fb.put_char(x, y, '/', value);
    fb.put_u32(x + 1, y, health.max(), value);
    y = y.saturating_add(2);

    fb.put_str(panel_x, y, "GRID", label);
    fb.put_str(panel_x + 5, y, if options.show_grid { "on" } else { "off" }, value);
    y = y.saturating_add(2);

    for line in CONTROLS {
        if y >= viewport.height {
            break;
        }
        fb.put_str(panel_x, y, line, value);
        y = y.saturating_add(1);
    }
}
