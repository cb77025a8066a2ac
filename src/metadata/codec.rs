//! Sheet metadata carried in the artifact file name.
//!
//! ```text
//! <sheet_name>_<sequence_number>_<rows>_<columns>_<frame_count>_<frame_rate>.<ext>
//! ```
//!
//! Six `_`-separated fields, in this order, are the whole protocol between the exporter and the
//! playback scripts. The sequence number is zero-padded to three digits on encode; decode takes
//! any width. Numeric fields are unsigned decimal with no sign.

use std::path::Path;

use crate::foundation::error::{DecodeError, EncodeError};
use crate::grid::spec::GridSpec;

/// Field separator of the artifact name.
pub const SEPARATOR: char = '_';

const FIELD_COUNT: usize = 6;

/// The record serialized into an atlas file name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SheetMetadata {
    pub sheet_name: String,
    pub sequence_number: u32,
    pub rows: u32,
    pub columns: u32,
    pub frame_count: u32,
    pub frame_rate: u32,
}

impl SheetMetadata {
    /// Metadata for exporting `frame_count` frames laid out on `grid`.
    pub fn for_export(
        sheet_name: impl Into<String>,
        sequence_number: u32,
        grid: &GridSpec,
        frame_count: u32,
        frame_rate: u32,
    ) -> Self {
        let grid = grid.clamped();
        Self {
            sheet_name: sheet_name.into(),
            sequence_number,
            rows: grid.rows,
            columns: grid.columns,
            frame_count,
            frame_rate,
        }
    }

    /// Encode into the artifact name (without extension).
    pub fn encode(&self) -> Result<String, EncodeError> {
        encode(self)
    }

    /// File name with `extension` appended, e.g. `Fireball_000_8_8_64_24.png`.
    pub fn file_name(&self, extension: &str) -> Result<String, EncodeError> {
        Ok(format!("{}.{extension}", encode(self)?))
    }
}

/// Encode `meta`. Sheet names that are empty or contain [`SEPARATOR`] are rejected since they
/// could not be decoded back unambiguously.
pub fn encode(meta: &SheetMetadata) -> Result<String, EncodeError> {
    validate_sheet_name(&meta.sheet_name)?;
    Ok(format!(
        "{}_{:03}_{}_{}_{}_{}",
        meta.sheet_name,
        meta.sequence_number,
        meta.rows,
        meta.columns,
        meta.frame_count,
        meta.frame_rate
    ))
}

pub fn validate_sheet_name(name: &str) -> Result<(), EncodeError> {
    let reason = if name.is_empty() {
        "sheet name is empty"
    } else if name.contains(SEPARATOR) {
        "sheet name contains the '_' field separator"
    } else {
        return Ok(());
    };
    Err(EncodeError::InvalidSheetName {
        name: name.to_owned(),
        reason,
    })
}

/// Decode an artifact name (no extension).
pub fn decode(name: &str) -> Result<SheetMetadata, DecodeError> {
    let fields: Vec<&str> = name.split(SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(DecodeError::FieldCount {
            found: fields.len(),
        });
    }

    Ok(SheetMetadata {
        sheet_name: fields[0].to_owned(),
        sequence_number: parse_field("sequence_number", fields[1])?,
        rows: parse_field("rows", fields[2])?,
        columns: parse_field("columns", fields[3])?,
        frame_count: parse_field("frame_count", fields[4])?,
        frame_rate: parse_field("frame_rate", fields[5])?,
    })
}

/// Decode the file stem of `path`, ignoring directory and extension.
pub fn decode_path(path: &Path) -> Result<SheetMetadata, DecodeError> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    decode(&stem)
}

fn parse_field(field: &'static str, value: &str) -> Result<u32, DecodeError> {
    let not_a_number = || DecodeError::NotANumber {
        field,
        value: value.to_owned(),
    };
    // `u32::from_str` accepts a leading '+', which the protocol does not.
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_a_number());
    }
    value.parse().map_err(|_| not_a_number())
}

#[cfg(test)]
#[path = "../../tests/unit/metadata/codec.rs"]
mod tests;
