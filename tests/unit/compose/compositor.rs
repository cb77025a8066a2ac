use super::*;
use image::Rgba;

fn solid(label: &str, w: u32, h: u32, rgba: [u8; 4]) -> Frame {
    Frame::decoded(label, RgbaImage::from_pixel(w, h, Rgba(rgba)))
}

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

#[test]
fn original_scale_scenario_centers_without_rescaling() {
    let window = [
        solid("a", 100, 50, RED),
        solid("b", 80, 80, GREEN),
        solid("c", 120, 40, BLUE),
    ];
    let out = compose(
        &window,
        &GridSpec::original_scale(1, 3),
        OverlaySettings {
            preserve_source_scale: true,
            ..OverlaySettings::default()
        },
    )
    .unwrap();

    assert_eq!((out.atlas.width(), out.atlas.height()), (360, 80));
    assert_eq!(out.grid.cell.width, 120);
    assert_eq!(out.grid.cell.height, 80);
    assert!(out.warnings.is_empty());

    // a: 100x50 in 120x80 -> offset (10, 15)
    assert_eq!(out.atlas.pixel(10, 15), Some(RED));
    assert_eq!(out.atlas.pixel(109, 64), Some(RED));
    assert_eq!(out.atlas.pixel(9, 15).unwrap()[3], 0);
    assert_eq!(out.atlas.pixel(110, 15).unwrap()[3], 0);
    assert_eq!(out.atlas.pixel(10, 14).unwrap()[3], 0);
    assert_eq!(out.atlas.pixel(10, 65).unwrap()[3], 0);

    // b: 80x80 -> offset (20, 0) within the second cell
    assert_eq!(out.atlas.pixel(120 + 20, 0), Some(GREEN));
    assert_eq!(out.atlas.pixel(120 + 99, 79), Some(GREEN));
    assert_eq!(out.atlas.pixel(120 + 19, 40).unwrap()[3], 0);

    // c: 120x40 -> offset (0, 20) within the third cell
    assert_eq!(out.atlas.pixel(240, 20), Some(BLUE));
    assert_eq!(out.atlas.pixel(359, 59), Some(BLUE));
    assert_eq!(out.atlas.pixel(240, 19).unwrap()[3], 0);
}

#[test]
fn original_scale_never_resamples_smaller_frames() {
    let window = [
        solid("a", 100, 50, RED),
        solid("b", 80, 80, GREEN),
        solid("c", 120, 40, BLUE),
    ];
    let out = compose(
        &window,
        &GridSpec::original_scale(1, 3),
        OverlaySettings::default(),
    )
    .unwrap();
    assert_eq!((out.atlas.width(), out.atlas.height()), (360, 80));

    // Footprint of frame a within the first cell: exactly its 100x50 source at (10, 15).
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (u32::MAX, u32::MAX, 0, 0);
    for y in 0..80 {
        for x in 0..120 {
            if out.atlas.pixel(x, y).unwrap()[3] != 0 {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }
    }
    assert_eq!((min_x, min_y), (10, 15));
    assert_eq!((max_x - min_x + 1, max_y - min_y + 1), (100, 50));
    assert_eq!(out.atlas.pixel(10, 15), Some(RED));

    // b: 80x80 unscaled at (20, 0) in the second cell
    assert_eq!(out.atlas.pixel(120 + 20, 0), Some(GREEN));
    assert_eq!(out.atlas.pixel(120 + 19, 40).unwrap()[3], 0);
    assert_eq!(out.atlas.pixel(120 + 100, 40).unwrap()[3], 0);
}

#[test]
fn original_scale_without_preserve_flag_still_keeps_frames_that_fit() {
    // The largest frame defines the cell, so the widest frame fits exactly.
    let window = [solid("a", 100, 50, RED), solid("c", 120, 40, BLUE)];
    let out = compose(
        &window,
        &GridSpec::original_scale(1, 2),
        OverlaySettings::default(),
    )
    .unwrap();
    assert_eq!(out.grid.cell.width, 120);
    assert_eq!(out.grid.cell.height, 50);
    // c is 120x40 and fits the 120x50 cell unscaled: offset (0, 5)
    assert_eq!(out.atlas.pixel(120, 5), Some(BLUE));
    assert_eq!(out.atlas.pixel(120, 4).unwrap()[3], 0);
}

#[test]
fn fixed_mode_fits_with_aspect_and_leaves_margin_transparent() {
    let window = [solid("wide", 40, 20, RED)];
    let out = compose(
        &window,
        &GridSpec::fixed(2, 2, 21, 21),
        OverlaySettings::default(),
    )
    .unwrap();
    // cell 10x10, frame fitted to 10x5, offset (0, 2)
    assert_eq!(out.atlas.size().width, 21);
    assert_eq!(out.atlas.pixel(0, 2), Some(RED));
    assert_eq!(out.atlas.pixel(9, 6), Some(RED));
    assert_eq!(out.atlas.pixel(0, 1).unwrap()[3], 0);
    assert_eq!(out.atlas.pixel(0, 7).unwrap()[3], 0);
    // margin column and unused cells are transparent
    assert_eq!(out.atlas.pixel(20, 2).unwrap()[3], 0);
    assert_eq!(out.atlas.pixel(15, 15).unwrap()[3], 0);
}

#[test]
fn frames_land_in_row_major_cells() {
    let window: Vec<_> = (0..6u8)
        .map(|i| solid(&i.to_string(), 4, 4, [i * 40, 0, 0, 255]))
        .collect();
    let out = compose(
        &window,
        &GridSpec::fixed(2, 3, 12, 8),
        OverlaySettings::default(),
    )
    .unwrap();
    for i in 0..6u32 {
        let c = cell_of(i, 2, 3);
        let px = out.atlas.pixel(c.column * 4 + 1, c.row * 4 + 1).unwrap();
        assert_eq!(px, [(i * 40) as u8, 0, 0, 255], "frame {i}");
    }
}

#[test]
fn failed_frames_leave_cells_transparent_and_are_reported() {
    let window = [
        solid("ok", 4, 4, RED),
        Frame::failed("broken.png", "bad header"),
        solid("ok2", 4, 4, GREEN),
    ];
    let out = compose(
        &window,
        &GridSpec::fixed(1, 3, 12, 4),
        OverlaySettings {
            grid_lines: true,
            frame_indices: true,
            ..OverlaySettings::default()
        },
    )
    .unwrap();

    for y in 0..4 {
        for x in 4..8 {
            assert_eq!(out.atlas.pixel(x, y).unwrap()[3], 0);
        }
    }
    assert_eq!(out.failed_frames(), 1);
    assert_eq!(out.failure_summary().as_deref(), Some("1 of 3 frames failed"));
    assert_eq!(
        out.warnings,
        vec![CompositeWarning::FrameUnreadable {
            index: 1,
            label: "broken.png".to_owned(),
            reason: "bad header".to_owned(),
        }]
    );
}

#[test]
fn frames_beyond_capacity_are_truncated_not_wrapped() {
    let window = [
        solid("0", 2, 2, RED),
        solid("1", 2, 2, GREEN),
        solid("2", 2, 2, BLUE),
    ];
    let out = compose(
        &window,
        &GridSpec::fixed(1, 2, 4, 2),
        OverlaySettings::default(),
    )
    .unwrap();
    assert_eq!(out.atlas.pixel(0, 0), Some(RED));
    assert_eq!(out.atlas.pixel(2, 0), Some(GREEN));
    assert_eq!(out.frames_considered, 2);
    assert_eq!(
        out.warnings,
        vec![CompositeWarning::Truncated {
            capacity: 2,
            dropped: 1
        }]
    );
    assert_eq!(out.failure_summary(), None);
}

#[test]
fn grid_lines_sit_above_frames_and_labels_above_grid_lines() {
    let style = OverlayStyle {
        grid_thickness: 1,
        label_inset: 0,
        label_scale: 1,
        label_backing: [0, 0, 0, 255],
        ..OverlayStyle::default()
    };
    let window = [solid("0", 16, 16, RED)];
    let out = compose_styled(
        &window,
        &GridSpec::fixed(1, 1, 16, 16),
        OverlaySettings {
            grid_lines: true,
            frame_indices: true,
            ..OverlaySettings::default()
        },
        &style,
    )
    .unwrap();
    // top-left pixel is covered by the label backing, which is composited last
    assert_eq!(out.atlas.pixel(0, 0), Some([0, 0, 0, 255]));
    // right edge shows the outline over the frame
    assert_eq!(out.atlas.pixel(15, 8), Some(style.grid_color));
    // interior still shows the frame
    assert_eq!(out.atlas.pixel(10, 10), Some(RED));
}

#[test]
fn unused_cells_get_no_overlays() {
    let window = [solid("0", 4, 4, RED)];
    let out = compose(
        &window,
        &GridSpec::fixed(1, 2, 8, 4),
        OverlaySettings {
            grid_lines: true,
            frame_indices: true,
            ..OverlaySettings::default()
        },
    )
    .unwrap();
    for y in 0..4 {
        for x in 4..8 {
            assert_eq!(out.atlas.pixel(x, y).unwrap()[3], 0);
        }
    }
}

#[test]
fn composing_twice_is_byte_identical() {
    let window: Vec<_> = (0..5u8)
        .map(|i| solid(&i.to_string(), 7 + u32::from(i), 5, [i * 50, 100, 200, 180]))
        .collect();
    let grid = GridSpec::fixed(2, 3, 96, 64);
    let overlays = OverlaySettings {
        grid_lines: true,
        frame_indices: true,
        preserve_source_scale: false,
    };
    let a = compose(&window, &grid, overlays).unwrap();
    let b = compose(&window, &grid, overlays).unwrap();
    assert_eq!(a.atlas.as_raw(), b.atlas.as_raw());
    assert_eq!(a.atlas.fingerprint(), b.atlas.fingerprint());
}

#[test]
fn degenerate_grid_is_a_hard_error() {
    let err = compose(
        &[solid("0", 4, 4, RED)],
        &GridSpec::fixed(4, 4, 2, 2),
        OverlaySettings::default(),
    )
    .unwrap_err();
    assert!(matches!(err, CompositeError::Grid(_)));
}

#[test]
fn cancellation_is_observed_between_frames() {
    let window = [solid("0", 2, 2, RED), solid("1", 2, 2, GREEN)];
    let err = compose_with_cancel(
        &window,
        &GridSpec::fixed(1, 2, 4, 2),
        OverlaySettings::default(),
        &OverlayStyle::default(),
        || true,
    )
    .unwrap_err();
    assert_eq!(err, CompositeError::Superseded);
}

#[test]
fn empty_window_yields_transparent_atlas() {
    let out = compose(&[], &GridSpec::fixed(2, 2, 8, 8), OverlaySettings::default()).unwrap();
    assert!(out.atlas.as_raw().iter().all(|&b| b == 0));
    assert_eq!(out.frames_considered, 0);
}
