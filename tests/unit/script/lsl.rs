use super::*;

#[test]
fn sides_follow_columns_and_rows() {
    let s = lsl_script(&LslOptions::default());
    assert!(s.contains("sideX = columns;"));
    assert!(s.contains("sideY = rows;"));
    assert!(s.contains("length = (float) frame_count;"));
    assert!(s.contains("speed = (float) frame_rate;"));
}

#[test]
fn name_fields_are_read_at_codec_positions() {
    let s = lsl_script(&LslOptions::default());
    assert!(s.contains("[\"_\"]"));
    assert!(s.contains("llGetListLength(data) != 6"));
    assert!(s.contains("integer rows = (integer) llList2String(data, 2);"));
    assert!(s.contains("integer columns = (integer) llList2String(data, 3);"));
    assert!(s.contains("integer frame_count = (integer) llList2String(data, 4);"));
    assert!(s.contains("integer frame_rate = (integer) llList2String(data, 5);"));
}

#[test]
fn defaults_animate_all_faces_of_link_two_looping() {
    let s = lsl_script(&LslOptions::default());
    assert!(s.contains("integer link_number = 2;"));
    assert!(s.contains("integer face = ALL_SIDES;"));
    assert!(s.contains("list effects = [LOOP];"));
}

#[test]
fn options_are_substituted() {
    let s = lsl_script(&LslOptions {
        link_number: -1,
        face: Some(3),
        effects: vec![LslEffect::Loop, LslEffect::PingPong],
    });
    assert!(s.contains("integer link_number = -1;"));
    assert!(s.contains("integer face = 3;"));
    assert!(s.contains("list effects = [LOOP, PING_PONG];"));
}

#[test]
fn braces_balance() {
    let s = lsl_script(&LslOptions::default());
    let open = s.matches('{').count();
    let close = s.matches('}').count();
    assert_eq!(open, close);
    assert!(!s.contains("{{"));
}
