use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        CellsheetError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        DecodeError::FieldCount { found: 3 }
            .to_string()
            .contains("found 3")
    );
    assert!(
        DecodeError::NotANumber {
            field: "rows",
            value: "x8".to_owned(),
        }
        .to_string()
        .contains("'rows'")
    );
}

#[test]
fn stage_errors_convert_into_umbrella() {
    let err: CellsheetError = RangeError::Inverted { start: 4, end: 2 }.into();
    assert!(matches!(err, CellsheetError::Range(_)));

    let err: CellsheetError = CompositeError::from(GridError::DegenerateGrid {
        rows: 4,
        columns: 4,
        atlas_width: 2,
        atlas_height: 2,
    })
    .into();
    assert!(err.to_string().contains("degenerate grid"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = CellsheetError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
