use std::borrow::Cow;

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::compose::overlay::CellRect;
use crate::foundation::core::CellSize;
use crate::foundation::math::{premultiply, unpremultiply};

/// Largest size with the source aspect ratio that fits inside `cell` (at least 1x1).
pub(crate) fn fit_size(src: (u32, u32), cell: CellSize) -> (u32, u32) {
    let (sw, sh) = (u64::from(src.0), u64::from(src.1));
    let (cw, ch) = (u64::from(cell.width), u64::from(cell.height));
    if sw == 0 || sh == 0 {
        return (0, 0);
    }
    // Compare sw/sh against cw/ch without floats.
    let (w, h) = if sw * ch >= sh * cw {
        (cw, sh * cw / sw)
    } else {
        (sw * ch / sh, ch)
    };
    (w.max(1) as u32, h.max(1) as u32)
}

/// Scale `img` to fit `cell`, or borrow it unchanged when no scaling is needed or wanted.
///
/// Resampling runs on premultiplied pixels so transparent edges do not pick up colour from
/// fully transparent neighbours.
pub(crate) fn fit_into_cell(img: &RgbaImage, cell: CellSize, preserve: bool) -> Cow<'_, RgbaImage> {
    if preserve {
        return Cow::Borrowed(img);
    }
    let (w, h) = fit_size(img.dimensions(), cell);
    if (w, h) == img.dimensions() {
        return Cow::Borrowed(img);
    }

    let mut premul = img.clone();
    for px in premul.pixels_mut() {
        px.0 = premultiply(px.0);
    }
    let mut scaled = imageops::resize(&premul, w, h, FilterType::Lanczos3);
    for px in scaled.pixels_mut() {
        px.0 = unpremultiply(px.0);
    }
    Cow::Owned(scaled)
}

/// Copy `img` centered in `rect` (floor offsets). Anything outside the cell is cropped.
pub(crate) fn blit_centered(layer: &mut RgbaImage, img: &RgbaImage, rect: CellRect) {
    let off_x = (i64::from(rect.size.width) - i64::from(img.width())).div_euclid(2);
    let off_y = (i64::from(rect.size.height) - i64::from(img.height())).div_euclid(2);

    let right = i64::from(rect.x + rect.size.width).min(i64::from(layer.width()));
    let bottom = i64::from(rect.y + rect.size.height).min(i64::from(layer.height()));

    for (sx, sy, px) in img.enumerate_pixels() {
        let x = i64::from(rect.x) + off_x + i64::from(sx);
        let y = i64::from(rect.y) + off_y + i64::from(sy);
        if x < i64::from(rect.x) || y < i64::from(rect.y) || x >= right || y >= bottom {
            continue;
        }
        layer.put_pixel(x as u32, y as u32, *px);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/blit.rs"]
mod tests;
