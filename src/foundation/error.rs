/// Crate-level result alias.
pub type CellsheetResult<T> = Result<T, CellsheetError>;

/// Invalid selection window on a [`crate::FrameSequence`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The requested start lies after the requested end.
    #[error("window start {start} is after window end {end}")]
    Inverted {
        /// Requested start.
        start: i64,
        /// Requested end.
        end: i64,
    },
}

/// A grid that cannot produce a non-empty cell.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// After clamping rows/columns to 1 the cell still has a zero dimension.
    #[error(
        "degenerate grid: {rows}x{columns} over a {atlas_width}x{atlas_height} atlas leaves a zero-sized cell"
    )]
    DegenerateGrid {
        /// Effective row count.
        rows: u32,
        /// Effective column count.
        columns: u32,
        /// Atlas width the cells were derived from.
        atlas_width: u32,
        /// Atlas height the cells were derived from.
        atlas_height: u32,
    },
}

/// Metadata that cannot be written into an artifact name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The sheet name is empty or contains the field separator.
    #[error("invalid sheet name '{name}': {reason}")]
    InvalidSheetName {
        /// Offending name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

/// An artifact name that does not carry well-formed sheet metadata.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Splitting on the separator did not yield exactly six fields.
    #[error("expected 6 '_'-separated fields, found {found}")]
    FieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// A numeric field is not a plain unsigned decimal that fits in `u32`.
    #[error("field '{field}' is not a number: '{value}'")]
    NotANumber {
        /// Field name, e.g. `rows`.
        field: &'static str,
        /// Raw field text.
        value: String,
    },
}

/// Hard failures of a composition request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositeError {
    /// Grid resolution failed.
    #[error(transparent)]
    Grid(#[from] GridError),
    /// A newer request replaced this one before it finished.
    #[error("composition superseded by a newer request")]
    Superseded,
}

/// Umbrella error for callers that mix several stages.
#[derive(thiserror::Error, Debug)]
pub enum CellsheetError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Composite(#[from] CompositeError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CellsheetError {
    /// Build a [`CellsheetError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
