use image::{Rgba, RgbaImage};

use crate::compose::glyphs::{GLYPH_GAP, GLYPH_H, GLYPH_W, digit_pixel, text_width};
use crate::foundation::core::{CellSize, Rgba8};

/// Overlay toggles for a composition request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Outline every used cell.
    pub grid_lines: bool,
    /// Label every used cell with its zero-based position in the window.
    pub frame_indices: bool,
    /// Blit frames at source size instead of fitting them into the cell.
    pub preserve_source_scale: bool,
}

/// Colours and metrics used when overlays are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub grid_color: Rgba8,
    pub grid_thickness: u32,
    pub label_color: Rgba8,
    pub label_backing: Rgba8,
    /// Distance of the label box from the cell's top-left corner.
    pub label_inset: u32,
    /// Glyph pixel scale; `0` picks one from the cell height.
    pub label_scale: u32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            grid_color: [0, 255, 255, 255],
            grid_thickness: 2,
            label_color: [255, 255, 255, 255],
            label_backing: [0, 0, 0, 160],
            label_inset: 4,
            label_scale: 0,
        }
    }
}

impl OverlayStyle {
    fn scale_for(&self, cell: CellSize) -> u32 {
        if self.label_scale > 0 {
            return self.label_scale;
        }
        (cell.height / 64).max(1)
    }
}

/// Pixel rectangle of one cell inside the atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CellRect {
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) size: CellSize,
}

impl CellRect {
    fn right(self) -> u32 {
        self.x + self.size.width
    }

    fn bottom(self) -> u32 {
        self.y + self.size.height
    }
}

/// Outline `rect` on `layer`, drawn inward so neighbouring cells are never touched.
pub(crate) fn draw_cell_outline(layer: &mut RgbaImage, rect: CellRect, style: &OverlayStyle) {
    let t = style.grid_thickness;
    if t == 0 {
        return;
    }
    let (right, bottom) = (rect.right().min(layer.width()), rect.bottom().min(layer.height()));
    for y in rect.y..bottom {
        for x in rect.x..right {
            let edge = x < rect.x + t
                || y < rect.y + t
                || x >= rect.right().saturating_sub(t)
                || y >= rect.bottom().saturating_sub(t);
            if edge {
                layer.put_pixel(x, y, Rgba(style.grid_color));
            }
        }
    }
}

/// Draw `index` as a label on a backing box at the top-left of `rect`, clipped to the cell.
pub(crate) fn draw_index_label(
    layer: &mut RgbaImage,
    rect: CellRect,
    index: u32,
    style: &OverlayStyle,
) {
    let text = index.to_string();
    let s = style.scale_for(rect.size);
    let pad = s;
    let box_w = text_width(&text) * s + 2 * pad;
    let box_h = GLYPH_H * s + 2 * pad;
    let bx = rect.x + style.label_inset;
    let by = rect.y + style.label_inset;
    let clip_r = rect.right().min(layer.width());
    let clip_b = rect.bottom().min(layer.height());

    for y in by..(by + box_h).min(clip_b) {
        for x in bx..(bx + box_w).min(clip_r) {
            layer.put_pixel(x, y, Rgba(style.label_backing));
        }
    }

    let advance = (GLYPH_W + GLYPH_GAP) * s;
    for (i, ch) in text.chars().enumerate() {
        let gx = bx + pad + i as u32 * advance;
        let gy = by + pad;
        for py in 0..GLYPH_H * s {
            for px in 0..GLYPH_W * s {
                let (x, y) = (gx + px, gy + py);
                if x >= clip_r || y >= clip_b {
                    continue;
                }
                if digit_pixel(ch, px / s, py / s) {
                    layer.put_pixel(x, y, Rgba(style.label_color));
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/overlay.rs"]
mod tests;
