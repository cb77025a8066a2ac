use super::*;

fn seq(n: usize) -> FrameSequence {
    (0..n)
        .map(|i| Frame::decoded(format!("{i}.png"), image::RgbaImage::new(2, 2)))
        .collect()
}

#[test]
fn fresh_sequence_selects_everything() {
    let s = seq(5);
    assert_eq!(s.window_range(), 0..5);
    assert_eq!(s.window().len(), 5);
}

#[test]
fn set_window_selects_half_open_range() {
    let mut s = seq(10);
    s.set_window(2, 5).unwrap();
    let labels: Vec<_> = s.window().iter().map(Frame::label).collect();
    assert_eq!(labels, ["2.png", "3.png", "4.png"]);
}

#[test]
fn out_of_range_window_is_clamped_not_rejected() {
    let mut s = seq(20);
    s.set_window(-5, 10_000).unwrap();
    assert_eq!(s.window_range(), 0..20);
    assert_eq!(s.window().len(), 20);
    assert_eq!(s.window()[0].label(), "0.png");
    assert_eq!(s.window()[19].label(), "19.png");
}

#[test]
fn window_entirely_past_the_end_is_empty() {
    let mut s = seq(4);
    s.set_window(7, 9).unwrap();
    assert_eq!(s.window_range(), 4..4);
    assert!(s.window().is_empty());
}

#[test]
fn inverted_window_is_an_error_and_keeps_previous_selection() {
    let mut s = seq(6);
    s.set_window(1, 3).unwrap();
    let err = s.set_window(4, 2).unwrap_err();
    assert_eq!(err, RangeError::Inverted { start: 4, end: 2 });
    assert_eq!(s.window_range(), 1..3);
}

#[test]
fn push_extends_a_tail_window_only() {
    let mut s = FrameSequence::new();
    s.push(Frame::failed("a", "x"));
    s.push(Frame::failed("b", "x"));
    assert_eq!(s.window_range(), 0..2);

    s.set_window(0, 1).unwrap();
    s.push(Frame::failed("c", "x"));
    assert_eq!(s.window_range(), 0..1);
    assert_eq!(s.len(), 3);
}
