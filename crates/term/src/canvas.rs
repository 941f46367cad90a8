//! Pixel-space drawing contract and its terminal implementation.
//!
//! Scene code draws in playfield pixels through [`Canvas`]; [`CellCanvas`]
//! maps those pixels onto framebuffer cells. A cell is covered by a shape when
//! the pixel at the cell centre is inside it.

use crate::core::PxRect;
use crate::fb::{FrameBuffer, Rgb};
use crate::types::ViewLayout;

/// The drawing operations the scene needs.
pub trait Canvas {
    /// Solid rectangle.
    fn fill_rect(&mut self, rect: PxRect, color: Rgb);
    /// Rectangle outline; interior untouched.
    fn stroke_rect(&mut self, rect: PxRect, color: Rgb);
    /// Solid circle centred at (cx, cy).
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb);
    /// Text with its top-left at (x, y).
    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb);
}

/// [`Canvas`] over a clipped region of a [`FrameBuffer`].
pub struct CellCanvas<'a> {
    fb: &'a mut FrameBuffer,
    layout: ViewLayout,
    cols: u16,
    rows: u16,
}

impl<'a> CellCanvas<'a> {
    /// Canvas whose pixel origin sits at `layout.origin_*`, clipped to
    /// `cols` x `rows` cells.
    pub fn new(fb: &'a mut FrameBuffer, layout: ViewLayout, cols: u16, rows: u16) -> Self {
        Self {
            fb,
            layout,
            cols,
            rows,
        }
    }

    /// Inclusive cell range `(c0, r0, c1, r1)` covered by `rect`, clipped.
    fn span(&self, rect: PxRect) -> Option<(u16, u16, u16, u16)> {
        let (c0, c1) = covered(rect.x, rect.w, self.layout.px_per_col as f32, self.cols)?;
        let (r0, r1) = covered(rect.y, rect.h, self.layout.px_per_row as f32, self.rows)?;
        Some((c0, r0, c1, r1))
    }

    fn cell_of(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let c = (x / self.layout.px_per_col as f32).floor();
        let r = (y / self.layout.px_per_row as f32).floor();
        if c < 0.0 || r < 0.0 || c >= self.cols as f32 || r >= self.rows as f32 {
            return None;
        }
        Some((c as u16, r as u16))
    }

    fn paint(&mut self, c: u16, r: u16, bg: Rgb) {
        self.fb
            .paint(self.layout.origin_col + c, self.layout.origin_row + r, bg);
    }

    fn glyph(&mut self, c: u16, r: u16, ch: char, fg: Rgb) {
        self.fb
            .put_glyph(self.layout.origin_col + c, self.layout.origin_row + r, ch, fg);
    }
}

/// Cells along one axis whose centre lies in `[start, start + len)`.
fn covered(start: f32, len: f32, px_per_cell: f32, cells: u16) -> Option<(u16, u16)> {
    if cells == 0 || len <= 0.0 {
        return None;
    }
    let half = px_per_cell / 2.0;
    let first = ((start - half) / px_per_cell).ceil().max(0.0);
    let last = (((start + len - half) / px_per_cell).ceil() - 1.0).min(cells as f32 - 1.0);
    if last < first {
        return None;
    }
    Some((first as u16, last as u16))
}

impl Canvas for CellCanvas<'_> {
    fn fill_rect(&mut self, rect: PxRect, color: Rgb) {
        let Some((c0, r0, c1, r1)) = self.span(rect) else {
            return;
        };
        for r in r0..=r1 {
            for c in c0..=c1 {
                self.paint(c, r, color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: PxRect, color: Rgb) {
        let Some((c0, r0, c1, r1)) = self.span(rect) else {
            return;
        };
        if r0 == r1 {
            if c0 == c1 {
                self.glyph(c0, r0, '□', color);
            } else {
                self.glyph(c0, r0, '[', color);
                self.glyph(c1, r0, ']', color);
            }
            return;
        }
        for c in c0..=c1 {
            self.glyph(c, r0, '─', color);
            self.glyph(c, r1, '─', color);
        }
        for r in r0..=r1 {
            self.glyph(c0, r, '│', color);
            self.glyph(c1, r, '│', color);
        }
        self.glyph(c0, r0, '┌', color);
        self.glyph(c1, r0, '┐', color);
        self.glyph(c0, r1, '└', color);
        self.glyph(c1, r1, '┘', color);
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        let bounds = PxRect::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0);
        let mut hit = false;
        if let Some((c0, r0, c1, r1)) = self.span(bounds) {
            let ppc = self.layout.px_per_col as f32;
            let ppr = self.layout.px_per_row as f32;
            for r in r0..=r1 {
                for c in c0..=c1 {
                    let px = c as f32 * ppc + ppc / 2.0;
                    let py = r as f32 * ppr + ppr / 2.0;
                    if (px - cx).powi(2) + (py - cy).powi(2) <= radius * radius {
                        self.glyph(c, r, '●', color);
                        hit = true;
                    }
                }
            }
        }
        // Circles smaller than a cell still show up in the cell holding the centre.
        if !hit {
            if let Some((c, r)) = self.cell_of(cx, cy) {
                self.glyph(c, r, '●', color);
            }
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb) {
        let Some((c, r)) = self.cell_of(x, y) else {
            return;
        };
        for (i, ch) in text.chars().enumerate() {
            let col = c as usize + i;
            if col >= self.cols as usize {
                break;
            }
            self.glyph(col as u16, r, ch, color);
        }
    }
}
