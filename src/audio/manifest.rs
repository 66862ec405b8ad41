use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::assets::media::{self, AudioPcm};
use crate::audio::mix::frame_to_sample;
use crate::foundation::core::FrameRange;
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::composition::Composition;

/// One scheduled clip contribution in output sample space.
#[derive(Clone, Debug)]
pub(crate) struct AudioSegment {
    pub(crate) name: String,
    pub(crate) timeline_start_sample: u64,
    pub(crate) timeline_end_sample: u64,
    /// Offset into the source where playback begins.
    pub(crate) source_start_sec: f64,
    pub(crate) volume: f32,
    pub(crate) source_sample_rate: u32,
    pub(crate) source_channels: u16,
    pub(crate) source_interleaved_f32: Arc<Vec<f32>>,
}

/// Audio mixing plan for a timeline frame range.
#[derive(Clone, Debug)]
pub(crate) struct AudioManifest {
    pub(crate) sample_rate: u32,
    pub(crate) channels: u16,
    pub(crate) total_samples: u64,
    pub(crate) segments: Vec<AudioSegment>,
}

#[derive(Clone, Debug)]
struct CachedPcm {
    sample_rate: u32,
    channels: u16,
    duration_secs: f64,
    data: Arc<Vec<f32>>,
}

/// Build the mixing plan for `range` using `decode` to load clip files.
///
/// A clip plays from its cue until its source runs out; clips that start before `range` are
/// entered mid-way. Missing files are skipped with a warning so a partially generated voiceover
/// still renders.
pub(crate) fn build_audio_manifest(
    comp: &Composition,
    audio_dir: &Path,
    range: FrameRange,
    mut decode: impl FnMut(&Path) -> ReelResult<AudioPcm>,
) -> ReelResult<AudioManifest> {
    if range.is_empty() {
        return Err(ReelError::validation(
            "audio manifest range must be non-empty",
        ));
    }
    if range.end.0 > comp.duration {
        return Err(ReelError::validation(
            "audio manifest range must be within composition duration",
        ));
    }

    let sample_rate = media::MIX_SAMPLE_RATE;
    let total_samples = frame_to_sample(range.len_frames(), comp.fps, sample_rate);
    let mut cache: HashMap<String, CachedPcm> = HashMap::new();
    let mut segments = Vec::new();

    for cue in &comp.audio {
        if cue.start.0 >= range.end.0 {
            continue;
        }
        let path = audio_dir.join(&cue.file);
        if !path.exists() {
            tracing::warn!(clip = %cue.name, path = %path.display(), "audio clip missing, skipping");
            continue;
        }

        let pcm = match cache.get(&cue.file) {
            Some(pcm) => pcm.clone(),
            None => {
                let decoded = decode(&path)?;
                let pcm = CachedPcm {
                    sample_rate: decoded.sample_rate,
                    channels: decoded.channels,
                    duration_secs: decoded.duration_secs(),
                    data: Arc::new(decoded.interleaved_f32),
                };
                cache.insert(cue.file.clone(), pcm.clone());
                pcm
            }
        };
        if pcm.data.is_empty() || pcm.channels == 0 || pcm.sample_rate == 0 {
            continue;
        }

        let skipped_frames = range.start.0.saturating_sub(cue.start.0);
        let source_start_sec = comp.fps.frames_to_secs(skipped_frames);
        if source_start_sec >= pcm.duration_secs {
            continue;
        }
        let timeline_start_sample = frame_to_sample(
            cue.start.0.saturating_sub(range.start.0),
            comp.fps,
            sample_rate,
        );

        tracing::debug!(clip = %cue.name, timeline_start_sample, source_start_sec, "audio segment");
        segments.push(AudioSegment {
            name: cue.name.clone(),
            timeline_start_sample,
            timeline_end_sample: total_samples,
            source_start_sec,
            volume: 1.0,
            source_sample_rate: pcm.sample_rate,
            source_channels: pcm.channels,
            source_interleaved_f32: pcm.data,
        });
    }

    Ok(AudioManifest {
        sample_rate,
        channels: 2,
        total_samples,
        segments,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/audio/manifest.rs"]
mod tests;
