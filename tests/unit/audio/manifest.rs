use super::*;
use crate::foundation::core::FrameIndex;
use crate::timeline::schedule::Schedule;

fn markview() -> Composition {
    Composition::markview(&Schedule::markview().unwrap()).unwrap()
}

fn one_second_pcm() -> AudioPcm {
    AudioPcm {
        sample_rate: 48_000,
        channels: 2,
        interleaved_f32: vec![0.1; 48_000 * 2],
    }
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn missing_clips_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("stats.mp3"), b"x").unwrap();
    let comp = markview();
    let mut decoded = Vec::new();
    let m = build_audio_manifest(&comp, dir.path(), range(0, 600), |p| {
        decoded.push(p.to_path_buf());
        Ok(one_second_pcm())
    })
    .unwrap();
    assert_eq!(decoded, vec![dir.path().join("stats.mp3")]);
    assert_eq!(m.segments.len(), 1);
    assert_eq!(m.segments[0].name, "stats");
    // stats starts at frame 285 = 9.5 s.
    assert_eq!(m.segments[0].timeline_start_sample, 456_000);
    assert_eq!(m.total_samples, 960_000);
}

#[test]
fn range_starting_mid_clip_enters_the_source_late() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("title.mp3"), b"x").unwrap();
    let comp = markview();
    let m = build_audio_manifest(&comp, dir.path(), range(15, 45), |_| Ok(one_second_pcm()))
        .unwrap();
    assert_eq!(m.segments.len(), 1);
    assert_eq!(m.segments[0].timeline_start_sample, 0);
    assert!((m.segments[0].source_start_sec - 0.5).abs() < 1e-9);
}

#[test]
fn clips_already_finished_before_the_range_are_dropped() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("title.mp3"), b"x").unwrap();
    let comp = markview();
    // One second of title audio is long over by frame 100.
    let m = build_audio_manifest(&comp, dir.path(), range(100, 200), |_| {
        Ok(one_second_pcm())
    })
    .unwrap();
    assert!(m.segments.is_empty());
}

#[test]
fn decode_errors_propagate() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("title.mp3"), b"x").unwrap();
    let comp = markview();
    let err = build_audio_manifest(&comp, dir.path(), range(0, 10), |_| {
        Err(ReelError::evaluation("boom"))
    })
    .unwrap_err();
    assert!(err.to_string().contains("boom"));
}

#[test]
fn invalid_ranges_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let comp = markview();
    assert!(
        build_audio_manifest(&comp, dir.path(), range(5, 5), |_| Ok(one_second_pcm()))
            .is_err()
    );
    let past_end = range(0, comp.duration + 1);
    assert!(
        build_audio_manifest(&comp, dir.path(), past_end, |_| Ok(one_second_pcm())).is_err()
    );
}
