use super::*;
use std::sync::Arc;

fn manifest(total: u64, segments: Vec<AudioSegment>) -> AudioManifest {
    AudioManifest {
        sample_rate: 48_000,
        channels: 2,
        total_samples: total,
        segments,
    }
}

fn segment(start: u64, source_start_sec: f64, data: Vec<f32>, channels: u16) -> AudioSegment {
    AudioSegment {
        name: "clip".to_string(),
        timeline_start_sample: start,
        timeline_end_sample: u64::MAX,
        source_start_sec,
        volume: 1.0,
        source_sample_rate: 48_000,
        source_channels: channels,
        source_interleaved_f32: Arc::new(data),
    }
}

#[test]
fn frame_to_sample_uses_rational_fps() {
    // 30000/1001 ~ 29.97
    let fps = Fps {
        num: 30_000,
        den: 1001,
    };
    assert_eq!(frame_to_sample(0, fps, 48_000), 0);
    assert_eq!(frame_to_sample(30_000, fps, 48_000), 48_048_000);
    assert_eq!(frame_to_sample(1, Fps { num: 30, den: 1 }, 48_000), 1600);
}

#[test]
fn clip_is_placed_at_its_start_and_stops_when_exhausted() {
    let m = manifest(100, vec![segment(10, 0.0, vec![0.5; 20 * 2], 2)]);
    let out = mix_manifest(&m);
    assert_eq!(out.len(), 200);
    assert_eq!(out[2 * 9], 0.0);
    assert_eq!(out[2 * 10], 0.5);
    assert_eq!(out[2 * 29 + 1], 0.5);
    assert_eq!(out[2 * 30], 0.0);
}

#[test]
fn source_offset_skips_into_the_clip() {
    let mut data = vec![0.0f32; 48_000 * 2];
    for (i, s) in data.iter_mut().enumerate() {
        *s = if i / 2 >= 24_000 { 0.75 } else { 0.1 };
    }
    let m = manifest(10, vec![segment(0, 0.5, data, 2)]);
    let out = mix_manifest(&m);
    assert!(out.iter().all(|&s| (s - 0.75).abs() < 1e-6));
}

#[test]
fn mono_sources_are_duplicated_and_sums_clamped() {
    let m = manifest(
        4,
        vec![
            segment(0, 0.0, vec![0.8; 4], 1),
            segment(0, 0.0, vec![0.8; 4], 1),
        ],
    );
    let out = mix_manifest(&m);
    assert_eq!(out, vec![1.0; 8]);
}

#[test]
fn f32le_file_has_four_bytes_per_sample() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("mix.f32le");
    write_mix_to_f32le_file(&[0.0, 1.0, -1.0], &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 12);
    assert_eq!(&bytes[4..8], &1.0f32.to_le_bytes());
}
