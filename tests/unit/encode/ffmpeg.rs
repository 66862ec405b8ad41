use super::*;
use crate::encode::sink::AudioInputConfig;
use crate::foundation::core::Fps;

fn cfg(width: u32, height: u32) -> SinkConfig {
    SinkConfig {
        width,
        height,
        fps: Fps::new(30, 1).unwrap(),
        audio: None,
    }
}

fn strings(args: &[OsString]) -> Vec<String> {
    args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
}

#[test]
fn flatten_transparent_pixel_yields_background() {
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg(&mut dst, &[0, 0, 0, 0], Rgba8::rgb(10, 20, 30)).unwrap();
    assert_eq!(dst, vec![10, 20, 30, 255]);
}

#[test]
fn flatten_opaque_pixel_is_unchanged() {
    let mut dst = vec![0u8; 4];
    flatten_premul_over_bg(&mut dst, &[1, 2, 3, 255], Rgba8::rgb(10, 20, 30)).unwrap();
    assert_eq!(dst, vec![1, 2, 3, 255]);
}

#[test]
fn flatten_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    assert!(flatten_premul_over_bg(&mut dst, &[0, 0, 0, 0], Rgba8::rgb(0, 0, 0)).is_err());
}

#[test]
fn silent_output_disables_audio() {
    let opts = FfmpegSinkOpts::new("/tmp/out.mp4");
    let args = strings(&ffmpeg_args(&opts, &cfg(1920, 1080)).unwrap());
    assert_eq!(args[0], "-y");
    assert!(args.windows(2).any(|w| w == ["-s", "1920x1080"]));
    assert!(args.windows(2).any(|w| w == ["-r", "30/1"]));
    assert!(args.contains(&"-an".to_string()));
    assert!(!args.contains(&"aac".to_string()));
    assert_eq!(args.last().unwrap(), "/tmp/out.mp4");
}

#[test]
fn audio_track_is_a_second_input() {
    let opts = FfmpegSinkOpts {
        overwrite: false,
        ..FfmpegSinkOpts::new("out.mp4")
    };
    let mut c = cfg(64, 36);
    c.audio = Some(AudioInputConfig {
        path: PathBuf::from("mix.f32le"),
        sample_rate: 48_000,
        channels: 2,
    });
    let args = strings(&ffmpeg_args(&opts, &c).unwrap());
    assert_eq!(args[0], "-n");
    assert!(args.windows(2).any(|w| w == ["-i", "mix.f32le"]));
    assert!(args.windows(2).any(|w| w == ["-ar", "48000"]));
    assert!(args.windows(2).any(|w| w == ["-c:a", "aac"]));
    assert!(args.contains(&"-shortest".to_string()));
    assert!(!args.contains(&"-an".to_string()));
}

#[test]
fn odd_dimensions_are_rejected() {
    let opts = FfmpegSinkOpts::new("out.mp4");
    let err = ffmpeg_args(&opts, &cfg(1921, 1080)).unwrap_err();
    assert!(matches!(err, ReelError::Validation(_)));
    assert!(ffmpeg_args(&opts, &cfg(0, 2)).is_err());
}

#[test]
fn push_before_begin_fails() {
    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new("out.mp4"));
    let frame = FrameRGBA {
        width: 2,
        height: 2,
        data: vec![0; 16],
        premultiplied: true,
    };
    assert!(sink.push_frame(FrameIndex(0), &frame).is_err());
    assert!(sink.end().is_err());
}
