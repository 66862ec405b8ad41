use super::*;

fn markview() -> Composition {
    Composition::markview(&Schedule::markview().unwrap()).unwrap()
}

#[test]
fn markview_has_nine_slides_and_clips() {
    let comp = markview();
    assert_eq!(comp.duration, MARKVIEW_DURATION_FRAMES);
    assert_eq!(comp.canvas, MARKVIEW_CANVAS);
    assert_eq!(comp.fps, Fps::new(30, 1).unwrap());
    let slides: Vec<SlideKind> = comp.sequences.iter().map(|s| s.slide).collect();
    assert_eq!(slides, SlideKind::ALL.to_vec());
    assert_eq!(comp.audio.len(), 9);

    let title = &comp.audio[0];
    assert_eq!(title.file, "title.mp3");
    assert_eq!(title.start, FrameIndex(0));
    assert_eq!(title.duration_frames, 270);
    assert_eq!(title.range().end, FrameIndex(270));
}

#[test]
fn frames_past_the_outro_have_no_slide() {
    let comp = markview();
    assert_eq!(comp.sequence_at(FrameIndex(0)).unwrap().slide, SlideKind::Title);
    assert_eq!(
        comp.sequence_at(FrameIndex(6086)).unwrap().slide,
        SlideKind::Outro
    );
    assert!(comp.sequence_at(FrameIndex(6087)).is_none());
    assert!(comp.sequence_at(FrameIndex(6149)).is_none());
}

#[test]
fn long_schedules_extend_the_duration() {
    let schedule = Schedule::back_to_back(
        &[("title", 100.0), ("outro", 150.0)],
        Fps::new(30, 1).unwrap(),
        0.5,
        2.0,
    )
    .unwrap();
    let comp = Composition::markview(&schedule).unwrap();
    assert_eq!(comp.duration, schedule.end_frame().0);
    assert!(comp.duration > MARKVIEW_DURATION_FRAMES);
}

#[test]
fn unknown_section_names_are_rejected() {
    let schedule =
        Schedule::back_to_back(&[("intro", 3.0)], Fps::new(30, 1).unwrap(), 0.5, 2.0).unwrap();
    let err = Composition::markview(&schedule).unwrap_err();
    assert!(err.to_string().contains("intro"));
}

#[test]
fn validate_rejects_overlap_and_overrun() {
    let mut comp = markview();
    comp.sequences[1].range.start = FrameIndex(10);
    assert!(comp.validate().is_err());

    let mut comp = markview();
    comp.sequences[8].range.end = FrameIndex(comp.duration + 1);
    assert!(comp.validate().is_err());

    let mut comp = markview();
    comp.audio[0].start = FrameIndex(comp.duration);
    assert!(comp.validate().is_err());

    let mut comp = markview();
    comp.duration = 0;
    assert!(comp.validate().is_err());
}

#[test]
fn json_uses_camel_case_and_reloads() {
    let comp = markview();
    let json = comp.to_json_pretty().unwrap();
    assert!(json.contains("\"durationFrames\": 270"));
    assert!(json.contains("\"slide\": \"firstPrompt\""));
    let back = Composition::from_reader(json.as_bytes()).unwrap();
    assert_eq!(back, comp);
}

#[test]
fn invalid_json_is_a_serde_error() {
    let err = Composition::from_reader("{\"fps\":".as_bytes()).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}
