use super::*;

#[test]
fn mul_div255_rounds_to_nearest() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(100, 128), 50);
    assert_eq!(mul_div255_u8(0, 200), 0);
}

#[test]
fn premultiply_opaque_is_identity_and_transparent_is_zero() {
    assert_eq!(premultiply([10, 20, 30, 255]), [10, 20, 30, 255]);
    assert_eq!(premultiply([10, 20, 30, 0]), [0, 0, 0, 0]);
}

#[test]
fn unpremultiply_inverts_premultiply_for_opaque() {
    assert_eq!(unpremultiply(premultiply([1, 2, 3, 255])), [1, 2, 3, 255]);
    assert_eq!(unpremultiply([0, 0, 0, 0]), [0, 0, 0, 0]);
}

#[test]
fn unpremultiply_scales_by_alpha() {
    // 64/128 of full intensity.
    assert_eq!(unpremultiply([64, 0, 128, 128]), [128, 0, 255, 128]);
}
