use std::fmt;

use image::RgbaImage;

use crate::compose::atlas::AtlasImage;
use crate::compose::blit::{blit_centered, fit_into_cell};
use crate::compose::composite::over_layer;
use crate::compose::overlay::{
    CellRect, OverlaySettings, OverlayStyle, draw_cell_outline, draw_index_label,
};
use crate::foundation::error::CompositeError;
use crate::grid::cell::cell_of;
use crate::grid::resolve::{ResolvedGrid, resolve};
use crate::grid::spec::{GridSpec, SizingMode};
use crate::sequence::frame::Frame;

/// Non-fatal problems found while composing. The atlas is still produced.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CompositeWarning {
    /// The frame at `index` (window-relative) had no pixels; its cell was left transparent.
    FrameUnreadable {
        index: u32,
        label: String,
        reason: String,
    },
    /// The window holds more frames than the grid has cells; the tail was not drawn.
    Truncated { capacity: u64, dropped: u64 },
}

impl fmt::Display for CompositeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameUnreadable {
                index,
                label,
                reason,
            } => write!(f, "frame {index} ('{label}') skipped: {reason}"),
            Self::Truncated { capacity, dropped } => write!(
                f,
                "{dropped} frame(s) beyond the grid capacity of {capacity} were not drawn"
            ),
        }
    }
}

/// Output of one composition request.
#[derive(Clone, Debug)]
pub struct Composite {
    pub atlas: AtlasImage,
    pub grid: ResolvedGrid,
    /// Frames that were assigned a cell (decoded or not).
    pub frames_considered: u32,
    pub warnings: Vec<CompositeWarning>,
}

impl Composite {
    pub fn failed_frames(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, CompositeWarning::FrameUnreadable { .. }))
            .count()
    }

    /// `"N of M frames failed"` when any frame was skipped.
    pub fn failure_summary(&self) -> Option<String> {
        let failed = self.failed_frames();
        (failed > 0).then(|| format!("{failed} of {} frames failed", self.frames_considered))
    }
}

/// Compose `window` into an atlas with the default [`OverlayStyle`].
pub fn compose(
    window: &[Frame],
    grid: &GridSpec,
    overlays: OverlaySettings,
) -> Result<Composite, CompositeError> {
    compose_styled(window, grid, overlays, &OverlayStyle::default())
}

/// Compose `window` into an atlas.
///
/// Layers, bottom to top: frames, grid outlines, index labels. Frame `i` of the window lands in
/// `cell_of(i, rows, columns)`; frames past the grid capacity are reported, not wrapped over
/// earlier cells. Under [`SizingMode::OriginalScale`] frames are always blitted at source size.
pub fn compose_styled(
    window: &[Frame],
    grid: &GridSpec,
    overlays: OverlaySettings,
    style: &OverlayStyle,
) -> Result<Composite, CompositeError> {
    compose_with_cancel(window, grid, overlays, style, || false)
}

/// [`compose_styled`] that polls `cancelled` between frames and gives up with
/// [`CompositeError::Superseded`].
#[tracing::instrument(skip(window, style, cancelled), fields(frames = window.len()))]
pub fn compose_with_cancel(
    window: &[Frame],
    grid: &GridSpec,
    overlays: OverlaySettings,
    style: &OverlayStyle,
    cancelled: impl Fn() -> bool,
) -> Result<Composite, CompositeError> {
    let resolved = resolve(window, grid)?;
    let (rows, columns) = (resolved.rows, resolved.columns);
    let capacity = resolved.capacity();

    let used = (window.len() as u64).min(capacity) as usize;
    let mut warnings = Vec::new();
    if (window.len() as u64) > capacity {
        let dropped = window.len() as u64 - capacity;
        tracing::warn!(capacity, dropped, "window exceeds grid capacity");
        warnings.push(CompositeWarning::Truncated { capacity, dropped });
    }

    // Original-scale cells already hold the largest frame, so nothing is ever resampled.
    let keep_source_size =
        overlays.preserve_source_scale || grid.sizing == SizingMode::OriginalScale;

    let mut frames = RgbaImage::new(resolved.atlas.width, resolved.atlas.height);
    let mut placed = Vec::with_capacity(used);

    for (i, frame) in window.iter().take(used).enumerate() {
        if cancelled() {
            return Err(CompositeError::Superseded);
        }
        let index = i as u32;
        let Some(img) = frame.image() else {
            let reason = frame.failure().unwrap_or("no pixels").to_owned();
            tracing::warn!(index, label = frame.label(), %reason, "frame skipped");
            warnings.push(CompositeWarning::FrameUnreadable {
                index,
                label: frame.label().to_owned(),
                reason,
            });
            continue;
        };

        let (x, y) = resolved.cell_origin(cell_of(index, rows, columns));
        let rect = CellRect {
            x,
            y,
            size: resolved.cell,
        };
        let fitted = fit_into_cell(img, resolved.cell, keep_source_size);
        blit_centered(&mut frames, &fitted, rect);
        placed.push((index, rect));
    }

    if overlays.grid_lines {
        let mut outlines = RgbaImage::new(resolved.atlas.width, resolved.atlas.height);
        for &(_, rect) in &placed {
            draw_cell_outline(&mut outlines, rect, style);
        }
        over_layer(&mut frames, &outlines);
    }

    if overlays.frame_indices {
        let mut labels = RgbaImage::new(resolved.atlas.width, resolved.atlas.height);
        for &(index, rect) in &placed {
            draw_index_label(&mut labels, rect, index, style);
        }
        over_layer(&mut frames, &labels);
    }

    tracing::debug!(
        placed = placed.len(),
        warnings = warnings.len(),
        "composition finished"
    );

    Ok(Composite {
        atlas: AtlasImage::from_image(frames),
        grid: resolved,
        frames_considered: used as u32,
        warnings,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
