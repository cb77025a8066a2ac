use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::compose::overlay::{OverlaySettings, OverlayStyle};
use crate::foundation::error::{CellsheetError, CellsheetResult};
use crate::grid::resolve::resolve_with_max_frame;
use crate::grid::spec::{GridSpec, SizingMode};
use crate::metadata::codec::{SheetMetadata, validate_sheet_name};
use crate::script::lsl::LslOptions;

/// Everything a pack run needs besides the frames themselves.
///
/// Loaded from JSON; every field is optional and falls back to its default. Command-line flags
/// are applied on top of a loaded config.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PackConfig {
    pub grid: GridSpec,
    pub overlays: OverlaySettings,
    pub style: OverlayStyle,
    /// Playback rate written into the artifact name.
    pub frame_rate: u32,
    pub sheet_name: String,
    pub sequence_number: u32,
    pub script: LslOptions,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            grid: GridSpec::default(),
            overlays: OverlaySettings::default(),
            style: OverlayStyle::default(),
            frame_rate: 30,
            sheet_name: "SheetName".to_owned(),
            sequence_number: 0,
            script: LslOptions::default(),
        }
    }
}

impl PackConfig {
    pub fn from_reader<R: std::io::Read>(r: R) -> CellsheetResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CellsheetError::validation(format!("parse pack config JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> CellsheetResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CellsheetError::validation(format!("open pack config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Reject settings that could only fail later: an unencodable sheet name, a zero frame
    /// rate, or a fixed atlas too small for one pixel per cell.
    pub fn validate(&self) -> CellsheetResult<()> {
        if self.frame_rate == 0 {
            return Err(CellsheetError::validation("frame_rate must be > 0"));
        }
        validate_sheet_name(&self.sheet_name)?;
        if let SizingMode::Fixed { .. } = self.grid.sizing {
            resolve_with_max_frame(&self.grid, (0, 0))?;
        }
        Ok(())
    }

    /// Metadata for an export of `frame_count` frames under this config.
    pub fn metadata(&self, frame_count: u32) -> SheetMetadata {
        SheetMetadata::for_export(
            self.sheet_name.clone(),
            self.sequence_number,
            &self.grid,
            frame_count,
            self.frame_rate,
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
