/// Straight (non-premultiplied) RGBA8 colour.
pub type Rgba8 = [u8; 4];

/// Pixel size of one grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CellSize {
    pub width: u32,
    pub height: u32,
}

impl CellSize {
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Pixel size of a whole atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct AtlasSize {
    pub width: u32,
    pub height: u32,
}

impl AtlasSize {
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Length of a tightly packed RGBA8 buffer of this size.
    pub fn rgba_len(self) -> usize {
        (self.width as usize)
            .saturating_mul(self.height as usize)
            .saturating_mul(4)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
