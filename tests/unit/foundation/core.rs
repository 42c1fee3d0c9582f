use super::*;

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(4)).is_err());
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(5)).is_ok());
}

#[test]
fn frame_range_contains_is_half_open() {
    let r = FrameRange::new(FrameIndex(10), FrameIndex(20)).unwrap();
    assert!(!r.contains(FrameIndex(9)));
    assert!(r.contains(FrameIndex(10)));
    assert!(r.contains(FrameIndex(19)));
    assert!(!r.contains(FrameIndex(20)));
    assert_eq!(r.len_frames(), 10);
}

#[test]
fn frame_range_clamp_handles_empty_ranges() {
    let r = FrameRange::new(FrameIndex(7), FrameIndex(7)).unwrap();
    assert_eq!(r.clamp(FrameIndex(100)), FrameIndex(7));

    let r = FrameRange::new(FrameIndex(5), FrameIndex(10)).unwrap();
    assert_eq!(r.clamp(FrameIndex(0)), FrameIndex(5));
    assert_eq!(r.clamp(FrameIndex(100)), FrameIndex(9));
}

#[test]
fn fps_rejects_zero_components() {
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(0, 1).is_err());
}

#[test]
fn millis_to_frames_matches_scene_timing() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.millis_to_frames(500.0), 15);
    assert_eq!(fps.millis_to_frames(300.0), 9);
    assert_eq!(fps.millis_to_frames(0.0), 0);
    assert_eq!(fps.millis_to_frames(-100.0), 0);
    // Round-to-nearest, not floor: 49ms at 30fps is closer to 1 frame.
    assert_eq!(fps.millis_to_frames(49.0), 1);
}

#[test]
fn frames_to_millis_inverts_whole_frames() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.frames_to_millis(15), 500.0);
    assert_eq!(fps.frames_to_secs(30), 1.0);
}
