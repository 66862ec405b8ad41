use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn markview_windows_tile_without_gap_or_overlap() {
    let s = Schedule::markview().unwrap();
    assert_eq!(s.entries.len(), 9);
    assert_eq!(s.entries[0].slide.start, FrameIndex(0));
    for pair in s.entries.windows(2) {
        assert_eq!(pair[0].slide.end, pair[1].slide.start);
        assert!(!pair[0].slide.is_empty());
    }
}

#[test]
fn markview_outro_placement_matches_measured_clips() {
    let s = Schedule::markview().unwrap();
    let outro = s.get("outro").unwrap();
    assert!((outro.audio_start_secs - 195.0).abs() < 1e-9);
    assert_eq!(outro.audio_start, FrameIndex(5850));
    assert_eq!(outro.slide.end, FrameIndex(6087));
    assert!(s.end_frame().0 <= 6150);
}

#[test]
fn audio_starts_align_with_slide_starts() {
    let s = Schedule::markview().unwrap();
    assert_eq!(s.get("stats").unwrap().audio_start, FrameIndex(285));
    assert_eq!(s.get("firstPrompt").unwrap().audio_start, FrameIndex(561));
    for e in &s.entries {
        assert_eq!(e.audio_start, e.slide.start);
    }
}

#[test]
fn rounding_goes_to_nearest_frame() {
    // 0.51 s at 30 fps is 15.3 frames; 1.02 s is 30.6 frames.
    let s = Schedule::back_to_back(&[("a", 0.51), ("b", 0.0)], fps30(), 0.0, 0.51).unwrap();
    assert_eq!(s.entries[0].slide.end, FrameIndex(15));
    assert_eq!(s.entries[1].slide.start, FrameIndex(15));
    assert_eq!(s.entries[1].slide.end, FrameIndex(31));
    let s = Schedule::back_to_back(&[("a", 1.02)], fps30(), 0.0, 0.0).unwrap();
    assert_eq!(s.end_frame(), FrameIndex(31));
}

#[test]
fn invalid_inputs_are_rejected() {
    let empty: [(&str, f64); 0] = [];
    assert!(Schedule::back_to_back(&empty, fps30(), 0.5, 2.0).is_err());
    assert!(Schedule::back_to_back(&[("a", -1.0)], fps30(), 0.5, 2.0).is_err());
    assert!(Schedule::back_to_back(&[("a", f64::NAN)], fps30(), 0.5, 2.0).is_err());
    assert!(Schedule::back_to_back(&[("a", 1.0)], fps30(), -0.5, 2.0).is_err());
}

#[test]
fn schedule_serializes_names_and_ranges() {
    let s = Schedule::markview().unwrap();
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["entries"][0]["name"], "title");
    assert_eq!(json["entries"][0]["slide"]["start"], 0);
    assert_eq!(json["fps"]["num"], 30);
}
