use std::ops::Range;
use std::time::Duration;

use crate::grid::cell::{Cell, cell_of};
use crate::metadata::codec::SheetMetadata;

/// Looping frame counter for previews and the reference behaviour of generated scripts.
///
/// Each tick advances `current_frame` by one and wraps back to the window start once it reaches
/// the (exclusive) window end. Ticks are O(1); the clock never triggers a recomposition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackClock {
    window: Range<u32>,
    frame_rate: u32,
    current_frame: u32,
    carry: Duration,
}

impl PlaybackClock {
    pub fn new(window: Range<u32>, frame_rate: u32) -> Self {
        let window = normalize_window(window);
        Self {
            current_frame: window.start,
            window,
            frame_rate: clamp_rate(frame_rate),
            carry: Duration::ZERO,
        }
    }

    /// The clock a playback script runs after decoding `meta`: frames `0..frame_count`.
    pub fn for_sheet(meta: &SheetMetadata) -> Self {
        Self::new(0..meta.frame_count, meta.frame_rate)
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// Position inside the window, i.e. the index into the exported sheet.
    pub fn sheet_frame(&self) -> u32 {
        self.current_frame - self.window.start
    }

    /// Cell of the current frame on a `rows x columns` sheet.
    pub fn current_cell(&self, rows: u32, columns: u32) -> Cell {
        cell_of(self.sheet_frame(), rows, columns)
    }

    pub fn window(&self) -> Range<u32> {
        self.window.clone()
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    /// Whole milliseconds between ticks (`1000 / frame_rate`).
    pub fn interval(&self) -> Duration {
        Duration::from_millis(u64::from(1000 / self.frame_rate))
    }

    /// Advance one frame, looping at the window end.
    pub fn tick(&mut self) -> u32 {
        if self.window.is_empty() {
            self.current_frame = self.window.start;
            return self.current_frame;
        }
        self.current_frame += 1;
        if self.current_frame >= self.window.end {
            self.current_frame = self.window.start;
        }
        self.current_frame
    }

    /// Feed host time; performs every tick that became due and returns how many ran.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let interval = self.interval();
        if interval.is_zero() {
            // Rates above 1000 fps tick once per call.
            self.tick();
            return 1;
        }
        self.carry += elapsed;
        let mut ticks = 0;
        while self.carry >= interval {
            self.carry -= interval;
            self.tick();
            ticks += 1;
        }
        ticks
    }

    pub fn set_frame_rate(&mut self, frame_rate: u32) {
        self.frame_rate = clamp_rate(frame_rate);
    }

    /// Replace the window, restarting from its start if the counter falls outside it.
    pub fn set_window(&mut self, window: Range<u32>) {
        self.window = normalize_window(window);
        if !self.window.contains(&self.current_frame) {
            self.current_frame = self.window.start;
        }
    }

    /// Jump back to the window start.
    pub fn reset(&mut self) {
        self.current_frame = self.window.start;
        self.carry = Duration::ZERO;
    }
}

fn clamp_rate(frame_rate: u32) -> u32 {
    if frame_rate == 0 {
        tracing::warn!("frame rate of 0 clamped to 1");
        return 1;
    }
    frame_rate
}

fn normalize_window(window: Range<u32>) -> Range<u32> {
    if window.start > window.end {
        return window.start..window.start;
    }
    window
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
