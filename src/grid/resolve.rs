use crate::foundation::core::{AtlasSize, CellSize};
use crate::foundation::error::GridError;
use crate::grid::cell::Cell;
use crate::grid::spec::{GridSpec, SizingMode};
use crate::sequence::frame::Frame;

/// Pixel geometry of a grid over a concrete window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedGrid {
    pub rows: u32,
    pub columns: u32,
    pub atlas: AtlasSize,
    pub cell: CellSize,
}

impl ResolvedGrid {
    pub fn capacity(&self) -> u64 {
        u64::from(self.rows) * u64::from(self.columns)
    }

    /// Top-left pixel of `cell` in the atlas.
    pub fn cell_origin(&self, cell: Cell) -> (u32, u32) {
        (cell.column * self.cell.width, cell.row * self.cell.height)
    }
}

/// Resolve atlas and cell sizes for `window` under `grid`.
///
/// `Fixed` divides the requested atlas with floor division and leaves the remainder as unused
/// right/bottom margin. `OriginalScale` sizes cells to the largest decoded frame in the window;
/// the resulting atlas is not capped.
#[tracing::instrument(skip(window), fields(frames = window.len()))]
pub fn resolve(window: &[Frame], grid: &GridSpec) -> Result<ResolvedGrid, GridError> {
    resolve_with_max_frame(grid, max_frame_size(window))
}

/// Same as [`resolve`] for callers that already know the largest frame size.
pub fn resolve_with_max_frame(
    grid: &GridSpec,
    max_frame: (u32, u32),
) -> Result<ResolvedGrid, GridError> {
    let grid = grid.clamped();
    let (rows, columns) = (grid.rows, grid.columns);

    let (atlas, cell) = match grid.sizing {
        SizingMode::Fixed { width, height } => {
            let cell = CellSize {
                width: width / columns,
                height: height / rows,
            };
            (AtlasSize { width, height }, cell)
        }
        SizingMode::OriginalScale => {
            let cell = CellSize {
                width: max_frame.0,
                height: max_frame.1,
            };
            let atlas = AtlasSize {
                width: cell.width.saturating_mul(columns),
                height: cell.height.saturating_mul(rows),
            };
            (atlas, cell)
        }
    };

    if cell.is_empty() {
        return Err(GridError::DegenerateGrid {
            rows,
            columns,
            atlas_width: atlas.width,
            atlas_height: atlas.height,
        });
    }

    tracing::debug!(
        rows,
        columns,
        atlas_w = atlas.width,
        atlas_h = atlas.height,
        cell_w = cell.width,
        cell_h = cell.height,
        "grid resolved"
    );

    Ok(ResolvedGrid {
        rows,
        columns,
        atlas,
        cell,
    })
}

/// Largest width and largest height over the decoded frames (independently).
pub fn max_frame_size(window: &[Frame]) -> (u32, u32) {
    window
        .iter()
        .filter_map(Frame::dimensions)
        .fold((0, 0), |(mw, mh), (w, h)| (mw.max(w), mh.max(h)))
}

#[cfg(test)]
#[path = "../../tests/unit/grid/resolve.rs"]
mod tests;
