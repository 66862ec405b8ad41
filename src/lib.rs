//! markview-reel turns a narrated markdown transcript into the markview.app presentation video.
//!
//! The pipeline has two halves:
//!
//! - Voiceover: [`parse_transcript`] splits the transcript into sections and
//!   [`generate_voiceover`] synthesizes one clip per section through a [`Synthesizer`].
//! - Video: a [`Schedule`] places clips and slides on the frame timeline, a [`Composition`]
//!   ties them together, [`Evaluator`] resolves any frame to a display list, and
//!   [`render_range`] rasterizes a range into a [`FrameSink`] such as [`FfmpegSink`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod assets;
pub(crate) mod audio;
/// Frame sinks.
pub mod encode;
pub(crate) mod eval;
/// Rasterization and range rendering.
pub mod render;
/// Slides, display lists and the composition.
pub mod scene;
pub(crate) mod script;
pub(crate) mod timeline;
pub(crate) mod voiceover;

pub use crate::foundation::core::{
    Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8, Vec2,
};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interp::{
    Extrapolate, InterpolateOpts, SpringConfig, blink, interpolate, spring,
};
pub use crate::assets::media::{
    AudioPcm, MIX_SAMPLE_RATE, decode_audio_f32_stereo, probe_duration_secs,
};
pub use crate::audio::prepare_audio_mix;
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{AudioInputConfig, FrameSink, InMemorySink, SinkConfig};
pub use crate::eval::evaluator::{ActiveAudio, ActiveSlide, EvaluatedFrame, Evaluator};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::{CpuRenderer, CpuRendererOpts};
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, RenderToMp4Opts, render_frame, render_range, render_to_mp4,
};
pub use crate::scene::composition::{
    AudioCue, Composition, MARKVIEW_CANVAS, MARKVIEW_DURATION_FRAMES, Sequence,
};
pub use crate::scene::draw::{DisplayList, Node, NodeKind, TextAlign, TextStyle};
pub use crate::scene::slides::{SlideCtx, SlideKind};
pub use crate::script::sections::{SECTION_TABLE, SectionSpec};
pub use crate::script::transcript::{Section, TranscriptParse, parse_transcript};
pub use crate::timeline::probe::probe_durations;
pub use crate::timeline::schedule::{
    AUDIO_GAP_SECS, OUTRO_TAIL_SECS, Schedule, ScheduleEntry, VOICEOVER_DURATIONS,
};
pub use crate::voiceover::config::{
    API_KEY_ENV, DEFAULT_MODEL_ID, DEFAULT_OUTPUT_DIR, DEFAULT_TRANSCRIPT_PATH, DEFAULT_VOICE_ID,
    VoiceSettings, VoiceoverConfig,
};
pub use crate::voiceover::generate::{GenerateOpts, VoiceoverReport, generate_voiceover};
pub use crate::voiceover::metadata::{SectionMetadata, VoiceoverMetadata, audio_file_name};
pub use crate::voiceover::synth::{ElevenLabsSynthesizer, Synthesizer};
