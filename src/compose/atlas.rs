use image::RgbaImage;

use crate::foundation::core::{AtlasSize, Rgba8};
use crate::foundation::fingerprint::{Fingerprint, StableHasher};

/// A finished sprite sheet: straight-alpha RGBA8, row-major, tightly packed.
///
/// Every composition produces a new `AtlasImage`; nothing mutates one after it is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AtlasImage {
    image: RgbaImage,
}

impl AtlasImage {
    pub(crate) fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> AtlasSize {
        AtlasSize {
            width: self.width(),
            height: self.height(),
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Raw RGBA8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_rgba_image(self) -> RgbaImage {
        self.image
    }

    /// Stable content hash over dimensions and pixels.
    pub fn fingerprint(&self) -> Fingerprint {
        let mut h = StableHasher::new();
        h.write_u32(self.width());
        h.write_u32(self.height());
        h.write_bytes(self.as_raw());
        h.finish()
    }
}
