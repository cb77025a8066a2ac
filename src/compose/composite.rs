use image::RgbaImage;

use crate::foundation::core::Rgba8;
use crate::foundation::math::{mul_div255_u8, premultiply, unpremultiply};

/// Source-over for straight-alpha pixels.
///
/// Fully transparent sources leave `dst` untouched and opaque sources (or transparent
/// destinations) replace it, so frame pixels never drift through a premultiply round trip.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 || dst[3] == 0 {
        return src;
    }
    unpremultiply(over_premul(premultiply(dst), premultiply(src)))
}

fn over_premul(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let inv = 255u16 - u16::from(src[3]);
    std::array::from_fn(|i| src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv)))
}

/// Composite `layer` over `dst`. Both must have the same dimensions.
pub(crate) fn over_layer(dst: &mut RgbaImage, layer: &RgbaImage) {
    debug_assert_eq!(dst.dimensions(), layer.dimensions());
    for (d, s) in dst.pixels_mut().zip(layer.pixels()) {
        d.0 = over(d.0, s.0);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/composite.rs"]
mod tests;
