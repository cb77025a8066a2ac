use super::*;

#[test]
fn empty_when_any_dimension_is_zero() {
    assert!(CellSize { width: 0, height: 4 }.is_empty());
    assert!(CellSize { width: 4, height: 0 }.is_empty());
    assert!(!CellSize { width: 1, height: 1 }.is_empty());
    assert!(AtlasSize { width: 0, height: 0 }.is_empty());
}

#[test]
fn rgba_len_is_four_bytes_per_pixel() {
    let size = AtlasSize {
        width: 3,
        height: 5,
    };
    assert_eq!(size.rgba_len(), 60);
}
