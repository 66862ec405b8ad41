use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::{Canvas, Fps, Rgba8};

fn backdrop_only(duration: u64) -> Composition {
    Composition {
        fps: Fps::new(30, 1).unwrap(),
        canvas: Canvas {
            width: 8,
            height: 6,
        },
        duration,
        background: Rgba8::rgb(12, 34, 56),
        sequences: Vec::new(),
        audio: Vec::new(),
    }
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn render_frame_paints_the_background() {
    let comp = backdrop_only(4);
    let mut r = CpuRenderer::new(&CpuRendererOpts::default()).unwrap();
    let frame = render_frame(&comp, FrameIndex(2), &mut r).unwrap();
    assert_eq!((frame.width, frame.height), (8, 6));
    assert_eq!(frame.pixel(7, 5), Some([12, 34, 56, 255]));
}

#[test]
fn render_frame_rejects_frames_past_the_end() {
    let comp = backdrop_only(4);
    let mut r = CpuRenderer::new(&CpuRendererOpts::default()).unwrap();
    assert!(render_frame(&comp, FrameIndex(4), &mut r).is_err());
}

#[test]
fn sequential_range_pushes_frames_in_order() {
    let comp = backdrop_only(10);
    let mut sink = InMemorySink::new();
    let stats = render_range(
        &comp,
        range(2, 7),
        &CpuRendererOpts::default(),
        &RenderThreading {
            chunk_size: 2,
            ..RenderThreading::default()
        },
        &mut sink,
        None,
    )
    .unwrap();

    assert_eq!(
        stats,
        RenderStats {
            frames_total: 5,
            frames_rendered: 5
        }
    );
    let cfg = sink.config().unwrap();
    assert_eq!((cfg.width, cfg.height, cfg.fps), (8, 6, comp.fps));
    assert!(cfg.audio.is_none());
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![2, 3, 4, 5, 6]);
    assert!(sink.is_finished());
}

#[test]
fn parallel_matches_sequential() {
    let comp = backdrop_only(9);
    let opts = CpuRendererOpts::default();

    let mut seq = InMemorySink::new();
    render_range(
        &comp,
        comp.range(),
        &opts,
        &RenderThreading::default(),
        &mut seq,
        None,
    )
    .unwrap();

    let mut par = InMemorySink::new();
    let stats = render_range(
        &comp,
        comp.range(),
        &opts,
        &RenderThreading {
            parallel: true,
            chunk_size: 4,
            threads: Some(2),
        },
        &mut par,
        None,
    )
    .unwrap();

    assert_eq!(stats.frames_rendered, 9);
    assert_eq!(seq.frames(), par.frames());
}

#[test]
fn audio_config_reaches_the_sink() {
    let comp = backdrop_only(2);
    let audio = AudioInputConfig {
        path: PathBuf::from("mix.f32le"),
        sample_rate: 48_000,
        channels: 2,
    };
    let mut sink = InMemorySink::new();
    render_range(
        &comp,
        comp.range(),
        &CpuRendererOpts::default(),
        &RenderThreading::default(),
        &mut sink,
        Some(audio.clone()),
    )
    .unwrap();
    assert_eq!(sink.config().unwrap().audio, Some(audio));
}

#[test]
fn invalid_ranges_and_threads_are_rejected() {
    let comp = backdrop_only(5);
    let opts = CpuRendererOpts::default();
    let mut sink = InMemorySink::new();
    let t = RenderThreading::default();
    assert!(render_range(&comp, range(3, 3), &opts, &t, &mut sink, None).is_err());
    assert!(render_range(&comp, range(0, 6), &opts, &t, &mut sink, None).is_err());

    let zero_threads = RenderThreading {
        parallel: true,
        threads: Some(0),
        ..RenderThreading::default()
    };
    let err = render_range(&comp, range(0, 5), &opts, &zero_threads, &mut sink, None).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
    assert!(sink.frames().is_empty());
}

#[test]
fn zero_chunk_size_still_progresses() {
    assert_eq!(normalized_chunk_size(0), 1);
    assert_eq!(normalized_chunk_size(64), 64);
}

#[test]
fn temp_file_guard_removes_its_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mix.f32le");
    std::fs::write(&path, b"x").unwrap();
    drop(TempFileGuard(Some(path.clone())));
    assert!(!path.exists());
}
