use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
}

#[test]
fn frame_range_clamp_and_shift() {
    let r = FrameRange::new(FrameIndex(10), FrameIndex(20)).unwrap();
    assert_eq!(r.clamp(FrameIndex(3)), FrameIndex(10));
    assert_eq!(r.clamp(FrameIndex(25)), FrameIndex(19));
    assert_eq!(r.shift(-15).start, FrameIndex(0));
    assert_eq!(r.shift(5).end, FrameIndex(25));
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn whole_secs_to_frames_is_exact_at_30fps() {
    let fps = Fps::new(30, 1).unwrap();
    for secs in [0u32, 1, 15, 45, 295] {
        assert_eq!(fps.whole_secs_to_frames(secs), u64::from(secs) * 30);
    }
}

#[test]
fn secs_to_frames_round_picks_nearest() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.secs_to_frames_round(9.5), 285);
    assert_eq!(fps.secs_to_frames_round(0.49 / 30.0), 0);
}

#[test]
fn premul_scales_channels_by_alpha() {
    assert_eq!(Rgba8::rgb(10, 20, 30).to_premul(), [10, 20, 30, 255]);
    assert_eq!(Rgba8::rgba(255, 255, 255, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::rgb(200, 100, 0).with_alpha(0.5).a, 128);
}
