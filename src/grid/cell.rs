//! The frame-to-cell mapping shared by the compositor and every playback runtime.
//!
//! ```text
//! cell_index = frame_index mod (rows * columns)
//! row        = cell_index / columns
//! column     = cell_index mod columns
//! ```
//!
//! Row-major, zero-based, floor division. Indices past the last cell wrap, which is what makes
//! looped playback work. Runtime ports are checked against [`crate::conformance`].

use kurbo::Rect;

/// Zero-based grid coordinate.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Cell {
    pub row: u32,
    pub column: u32,
}

/// Map a frame index onto a `rows x columns` grid. Zero rows/columns are treated as one.
pub fn cell_of(frame_index: u32, rows: u32, columns: u32) -> Cell {
    let rows = u64::from(rows.max(1));
    let columns = u64::from(columns.max(1));
    let cell_index = u64::from(frame_index) % (rows * columns);
    Cell {
        row: (cell_index / columns) as u32,
        column: (cell_index % columns) as u32,
    }
}

/// Normalized texture sub-rectangle for `frame_index`, origin at the top-left.
///
/// The offset is `(column / columns, row / rows)` and the size is `(1 / columns, 1 / rows)`:
/// the render-side form of [`cell_of`].
pub fn uv_rect(frame_index: u32, rows: u32, columns: u32) -> Rect {
    let cell = cell_of(frame_index, rows, columns);
    let cols = f64::from(columns.max(1));
    let rows = f64::from(rows.max(1));
    let u0 = f64::from(cell.column) / cols;
    let v0 = f64::from(cell.row) / rows;
    Rect::new(u0, v0, u0 + 1.0 / cols, v0 + 1.0 / rows)
}

#[cfg(test)]
#[path = "../../tests/unit/grid/cell.rs"]
mod tests;
