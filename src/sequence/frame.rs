use std::sync::Arc;

use image::RgbaImage;

/// One source frame.
///
/// A frame is either decoded pixels (straight-alpha RGBA8, shared and immutable) or a record of
/// why decoding failed. Failed frames keep their slot in the sequence so that indices, and
/// therefore grid cells, stay stable; the compositor skips them and reports a warning.
#[derive(Clone, Debug)]
pub struct Frame {
    label: String,
    content: FrameContent,
}

#[derive(Clone, Debug)]
enum FrameContent {
    Decoded(Arc<RgbaImage>),
    Failed(String),
}

impl Frame {
    /// Wrap decoded pixels. Images with a zero dimension become failed frames.
    pub fn decoded(label: impl Into<String>, image: RgbaImage) -> Self {
        let label = label.into();
        if image.width() == 0 || image.height() == 0 {
            return Self::failed(label, "image has a zero dimension");
        }
        Self {
            label,
            content: FrameContent::Decoded(Arc::new(image)),
        }
    }

    /// Build a frame from a tightly packed straight-alpha RGBA8 buffer.
    pub fn from_rgba8(label: impl Into<String>, width: u32, height: u32, data: Vec<u8>) -> Self {
        let label = label.into();
        match RgbaImage::from_raw(width, height, data) {
            Some(img) => Self::decoded(label, img),
            None => Self::failed(label, "rgba8 buffer length does not match dimensions"),
        }
    }

    /// Record a frame that could not be decoded.
    pub fn failed(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: FrameContent::Failed(reason.into()),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn image(&self) -> Option<&RgbaImage> {
        match &self.content {
            FrameContent::Decoded(img) => Some(img.as_ref()),
            FrameContent::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.content {
            FrameContent::Decoded(_) => None,
            FrameContent::Failed(reason) => Some(reason),
        }
    }

    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.image().map(|img| img.dimensions())
    }

    pub fn is_decoded(&self) -> bool {
        matches!(self.content, FrameContent::Decoded(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/frame.rs"]
mod tests;
