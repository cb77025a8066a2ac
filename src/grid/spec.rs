/// How atlas and cell pixel sizes are chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SizingMode {
    /// The atlas is exactly `width x height`; frames are fitted into the cells.
    Fixed { width: u32, height: u32 },
    /// Cells take the largest source frame size so nothing is downsampled.
    OriginalScale,
}

impl Default for SizingMode {
    fn default() -> Self {
        Self::Fixed {
            width: 2048,
            height: 2048,
        }
    }
}

/// User-authored grid layout.
///
/// Rows and columns are part of the artifact-name contract, so they are never derived from the
/// frame count. Zero is clamped to one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct GridSpec {
    pub rows: u32,
    pub columns: u32,
    #[serde(default)]
    pub sizing: SizingMode,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: 8,
            columns: 8,
            sizing: SizingMode::default(),
        }
    }
}

impl GridSpec {
    pub fn new(rows: u32, columns: u32, sizing: SizingMode) -> Self {
        Self {
            rows,
            columns,
            sizing,
        }
        .clamped()
    }

    pub fn fixed(rows: u32, columns: u32, width: u32, height: u32) -> Self {
        Self::new(rows, columns, SizingMode::Fixed { width, height })
    }

    pub fn original_scale(rows: u32, columns: u32) -> Self {
        Self::new(rows, columns, SizingMode::OriginalScale)
    }

    /// Copy with rows/columns raised to at least one, warning when a clamp happens.
    pub fn clamped(self) -> Self {
        Self {
            rows: clamp_axis("rows", self.rows),
            columns: clamp_axis("columns", self.columns),
            sizing: self.sizing,
        }
    }

    /// Number of cells in the grid.
    pub fn capacity(&self) -> u64 {
        u64::from(self.rows.max(1)) * u64::from(self.columns.max(1))
    }
}

fn clamp_axis(axis: &'static str, v: u32) -> u32 {
    if v == 0 {
        tracing::warn!(axis, "grid {axis} of 0 clamped to 1");
        return 1;
    }
    v
}

#[cfg(test)]
#[path = "../../tests/unit/grid/spec.rs"]
mod tests;
