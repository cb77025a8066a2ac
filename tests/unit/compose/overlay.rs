use super::*;

fn rect(x: u32, y: u32, w: u32, h: u32) -> CellRect {
    CellRect {
        x,
        y,
        size: CellSize {
            width: w,
            height: h,
        },
    }
}

#[test]
fn outline_stays_inside_its_cell() {
    let mut layer = RgbaImage::new(20, 10);
    let style = OverlayStyle {
        grid_thickness: 1,
        ..OverlayStyle::default()
    };
    draw_cell_outline(&mut layer, rect(10, 0, 10, 10), &style);

    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(layer.get_pixel(x, y).0[3], 0, "left cell touched at {x},{y}");
        }
    }
    assert_eq!(layer.get_pixel(10, 5).0, style.grid_color);
    assert_eq!(layer.get_pixel(19, 5).0, style.grid_color);
    assert_eq!(layer.get_pixel(15, 0).0, style.grid_color);
    assert_eq!(layer.get_pixel(15, 9).0, style.grid_color);
    assert_eq!(layer.get_pixel(15, 5).0[3], 0);
}

#[test]
fn zero_thickness_draws_nothing() {
    let mut layer = RgbaImage::new(4, 4);
    let style = OverlayStyle {
        grid_thickness: 0,
        ..OverlayStyle::default()
    };
    draw_cell_outline(&mut layer, rect(0, 0, 4, 4), &style);
    assert!(layer.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn label_draws_backing_and_digit_at_inset() {
    let mut layer = RgbaImage::new(32, 32);
    let style = OverlayStyle {
        label_inset: 2,
        label_scale: 1,
        ..OverlayStyle::default()
    };
    draw_index_label(&mut layer, rect(0, 0, 32, 32), 7, &style);

    // backing starts at the inset
    assert_eq!(layer.get_pixel(2, 2).0, style.label_backing);
    assert_eq!(layer.get_pixel(1, 1).0[3], 0);
    // '7' top row is solid; glyph origin is inset + padding
    assert_eq!(layer.get_pixel(3, 3).0, style.label_color);
    assert_eq!(layer.get_pixel(5, 3).0, style.label_color);
    // second row of '7' only has its right column set
    assert_eq!(layer.get_pixel(3, 4).0, style.label_backing);
    assert_eq!(layer.get_pixel(5, 4).0, style.label_color);
}

#[test]
fn label_is_clipped_to_small_cells() {
    let mut layer = RgbaImage::new(12, 6);
    let style = OverlayStyle {
        label_inset: 1,
        label_scale: 2,
        ..OverlayStyle::default()
    };
    draw_index_label(&mut layer, rect(0, 0, 6, 6), 88, &style);
    for y in 0..6 {
        for x in 6..12 {
            assert_eq!(layer.get_pixel(x, y).0[3], 0);
        }
    }
}

#[test]
fn automatic_label_scale_grows_with_cell_height() {
    let style = OverlayStyle::default();
    assert_eq!(style.scale_for(CellSize { width: 32, height: 32 }), 1);
    assert_eq!(style.scale_for(CellSize { width: 256, height: 256 }), 4);
}
