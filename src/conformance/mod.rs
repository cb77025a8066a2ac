//! Conformance vectors for runtime ports of the frame-cell protocol.
//!
//! Every playback script re-implements [`crate::cell_of`] and the artifact-name decoder in its
//! own language. This module produces a fixed set of inputs with the answers this crate gives,
//! serialized as JSON, so each port can be checked against one canonical table instead of its
//! own derivation.

use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use crate::foundation::error::{CellsheetError, CellsheetResult, DecodeError};
use crate::grid::cell::{cell_of, uv_rect};
use crate::metadata::codec::{SheetMetadata, decode};

/// Bumped whenever vector semantics change.
pub const SUITE_VERSION: u32 = 1;

const FORMULA: &str = "cell = frame_index mod (rows * columns); row = cell / columns; column = cell mod columns";

/// Expected mapping for one `(frame_index, rows, columns)` input.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CellVector {
    pub frame_index: u32,
    pub rows: u32,
    pub columns: u32,
    pub row: u32,
    pub column: u32,
    /// Top-left of the normalized UV sub-rectangle.
    pub u: f64,
    pub v: f64,
    pub u_size: f64,
    pub v_size: f64,
}

/// What decoding an artifact name must produce.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum NameOutcome {
    Decoded { metadata: SheetMetadata },
    FieldCount { found: usize },
    NotANumber { field: String },
}

impl From<Result<SheetMetadata, DecodeError>> for NameOutcome {
    fn from(r: Result<SheetMetadata, DecodeError>) -> Self {
        match r {
            Ok(metadata) => Self::Decoded { metadata },
            Err(DecodeError::FieldCount { found }) => Self::FieldCount { found },
            Err(DecodeError::NotANumber { field, .. }) => Self::NotANumber {
                field: field.to_owned(),
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NameVector {
    pub name: String,
    #[serde(flatten)]
    pub expect: NameOutcome,
}

/// A complete, versioned vector table.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConformanceSuite {
    pub version: u32,
    pub formula: String,
    pub cells: Vec<CellVector>,
    pub names: Vec<NameVector>,
}

impl ConformanceSuite {
    pub fn from_reader<R: Read>(r: R) -> CellsheetResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| CellsheetError::validation(format!("parse conformance JSON: {e}")))
    }

    pub fn from_path(path: impl AsRef<Path>) -> CellsheetResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            CellsheetError::validation(format!(
                "open conformance JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> CellsheetResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CellsheetError::validation(format!("serialize conformance JSON: {e}")))
    }

    /// Check every vector against this crate. Returns one line per mismatch.
    pub fn verify(&self) -> Vec<String> {
        let mut mismatches = Vec::new();
        for v in &self.cells {
            let expected = cell_vector(v.frame_index, v.rows, v.columns);
            if &expected != v {
                mismatches.push(format!(
                    "cell {}@{}x{}: table says ({}, {}), crate says ({}, {})",
                    v.frame_index, v.rows, v.columns, v.row, v.column, expected.row, expected.column
                ));
            }
        }
        for v in &self.names {
            let got = NameOutcome::from(decode(&v.name));
            if got != v.expect {
                mismatches.push(format!(
                    "name '{}': table says {:?}, crate says {got:?}",
                    v.name, v.expect
                ));
            }
        }
        mismatches
    }
}

/// Build the canonical suite.
pub fn conformance_suite() -> ConformanceSuite {
    const GRIDS: [(u32, u32); 8] = [(1, 1), (1, 8), (8, 1), (2, 3), (3, 2), (4, 4), (8, 8), (5, 7)];

    let mut cells = Vec::new();
    for (rows, columns) in GRIDS {
        let period = rows * columns;
        let indices: BTreeSet<u32> = [
            0,
            1,
            columns - 1,
            columns,
            period - 1,
            period,
            period + 1,
            2 * period + 3,
            1000,
        ]
        .into_iter()
        .collect();
        for i in indices {
            cells.push(cell_vector(i, rows, columns));
        }
    }

    let names = [
        "Fireball_000_8_8_64_24",
        "Fireball_7_4_4_16_12",
        "Smoke_00012_2_3_6_30",
        "Fireball_000_8_8_64",
        "Fire_ball_000_8_8_64_24",
        "Fireball_000_eight_8_64_24",
        "Fireball_000_8_+8_64_24",
        "Fireball_000_8_8_64_",
    ]
    .into_iter()
    .map(|name| NameVector {
        name: name.to_owned(),
        expect: decode(name).into(),
    })
    .collect();

    ConformanceSuite {
        version: SUITE_VERSION,
        formula: FORMULA.to_owned(),
        cells,
        names,
    }
}

fn cell_vector(frame_index: u32, rows: u32, columns: u32) -> CellVector {
    let cell = cell_of(frame_index, rows, columns);
    let uv = uv_rect(frame_index, rows, columns);
    CellVector {
        frame_index,
        rows,
        columns,
        row: cell.row,
        column: cell.column,
        u: uv.x0,
        v: uv.y0,
        // Exact reciprocals; `uv.width()` would carry the subtraction's rounding.
        u_size: 1.0 / f64::from(columns.max(1)),
        v_size: 1.0 / f64::from(rows.max(1)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/conformance/mod.rs"]
mod tests;
