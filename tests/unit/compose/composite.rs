use super::*;

#[test]
fn transparent_src_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn opaque_src_replaces_dst() {
    assert_eq!(over([0, 0, 0, 255], [255, 0, 0, 255]), [255, 0, 0, 255]);
}

#[test]
fn transparent_dst_takes_src_exactly() {
    let src = [100, 110, 120, 200];
    assert_eq!(over([0, 0, 0, 0], src), src);
}

#[test]
fn half_alpha_over_opaque_blends() {
    let out = over([0, 0, 0, 255], [255, 255, 255, 128]);
    assert_eq!(out[3], 255);
    assert!((126..=130).contains(&out[0]));
    assert_eq!(out[0], out[1]);
    assert_eq!(out[1], out[2]);
}

#[test]
fn over_layer_keeps_pixels_under_transparent_layer() {
    let mut dst = RgbaImage::from_pixel(2, 1, image::Rgba([9, 8, 7, 100]));
    let mut layer = RgbaImage::new(2, 1);
    layer.put_pixel(1, 0, image::Rgba([0, 255, 255, 255]));
    over_layer(&mut dst, &layer);
    assert_eq!(dst.get_pixel(0, 0).0, [9, 8, 7, 100]);
    assert_eq!(dst.get_pixel(1, 0).0, [0, 255, 255, 255]);
}
