//! Voiceover mixdown for the encoder.

pub(crate) mod manifest;
pub(crate) mod mix;

use std::path::Path;

use crate::assets::media::{self, AudioPcm};
use crate::encode::sink::AudioInputConfig;
use crate::foundation::core::FrameRange;
use crate::foundation::error::ReelResult;
use crate::scene::composition::Composition;

/// Mix the composition's voiceover clips for `range` into a raw `f32le` file at `out_path`.
///
/// Clips are looked up in `audio_dir` by file name. Returns `None` when no clip contributes, in
/// which case nothing is written and the video should be encoded silent.
#[tracing::instrument(skip(comp))]
pub fn prepare_audio_mix(
    comp: &Composition,
    audio_dir: &Path,
    range: FrameRange,
    out_path: &Path,
) -> ReelResult<Option<AudioInputConfig>> {
    prepare_audio_mix_with(comp, audio_dir, range, out_path, |path| {
        media::decode_audio_f32_stereo(path, media::MIX_SAMPLE_RATE)
    })
}

/// [`prepare_audio_mix`] with a custom clip decoder.
pub(crate) fn prepare_audio_mix_with(
    comp: &Composition,
    audio_dir: &Path,
    range: FrameRange,
    out_path: &Path,
    decode: impl FnMut(&Path) -> ReelResult<AudioPcm>,
) -> ReelResult<Option<AudioInputConfig>> {
    let manifest = manifest::build_audio_manifest(comp, audio_dir, range, decode)?;
    write_manifest(&manifest, out_path)
}

fn write_manifest(
    manifest: &manifest::AudioManifest,
    out_path: &Path,
) -> ReelResult<Option<AudioInputConfig>> {
    if manifest.segments.is_empty() {
        tracing::warn!("no voiceover clips found, video will be silent");
        return Ok(None);
    }
    let samples = mix::mix_manifest(manifest);
    mix::write_mix_to_f32le_file(&samples, out_path)?;
    tracing::info!(
        clips = manifest.segments.len(),
        path = %out_path.display(),
        "wrote audio mix"
    );
    Ok(Some(AudioInputConfig {
        path: out_path.to_path_buf(),
        sample_rate: manifest.sample_rate,
        channels: manifest.channels,
    }))
}
