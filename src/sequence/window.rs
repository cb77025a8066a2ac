use std::ops::Range;

use crate::foundation::error::RangeError;
use crate::sequence::frame::Frame;

/// Ordered frames plus a half-open `[start, end)` selection window.
///
/// Frame order is whatever the importer supplied; nothing here re-sorts. The window always
/// satisfies `start <= end <= len()`.
#[derive(Clone, Debug, Default)]
pub struct FrameSequence {
    frames: Vec<Frame>,
    start: usize,
    end: usize,
}

impl FrameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of `frames` with the whole sequence selected.
    pub fn from_frames(frames: Vec<Frame>) -> Self {
        let end = frames.len();
        Self {
            frames,
            start: 0,
            end,
        }
    }

    /// Append a frame. A window that ended at the old tail grows to include it.
    pub fn push(&mut self, frame: Frame) {
        let follows_tail = self.end == self.frames.len();
        self.frames.push(frame);
        if follows_tail {
            self.end = self.frames.len();
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Select `[start, end)`.
    ///
    /// An inverted request is rejected. Out-of-range bounds are clamped into `0..=len()` so a
    /// stale index from the host never panics.
    pub fn set_window(&mut self, start: i64, end: i64) -> Result<(), RangeError> {
        if start > end {
            return Err(RangeError::Inverted { start, end });
        }
        let len = self.frames.len();
        let clamp = |v: i64| -> usize { usize::try_from(v.max(0)).unwrap_or(usize::MAX).min(len) };
        let (s, e) = (clamp(start), clamp(end));
        if s as i64 != start || e as i64 != end {
            tracing::warn!(start, end, len, clamped_start = s, clamped_end = e, "window clamped");
        }
        self.start = s;
        self.end = e;
        Ok(())
    }

    pub fn window(&self) -> &[Frame] {
        &self.frames[self.start..self.end]
    }

    pub fn window_range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn window_len(&self) -> usize {
        self.end - self.start
    }
}

impl FromIterator<Frame> for FrameSequence {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self::from_frames(iter.into_iter().collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/window.rs"]
mod tests;
