use std::path::Path;

use crate::assets::media::probe_duration_secs;
use crate::foundation::error::ReelResult;
use crate::timeline::schedule::VOICEOVER_DURATIONS;
use crate::voiceover::metadata::audio_file_name;

/// Measure each voiceover clip under `audio_dir`, falling back to the built-in length.
///
/// Missing files and probe failures are not errors; the clip keeps its
/// [`VOICEOVER_DURATIONS`] value.
pub fn probe_durations(audio_dir: &Path) -> Vec<(String, f64)> {
    probe_with(audio_dir, probe_duration_secs)
}

fn probe_with(
    audio_dir: &Path,
    probe: impl Fn(&Path) -> ReelResult<f64>,
) -> Vec<(String, f64)> {
    VOICEOVER_DURATIONS
        .iter()
        .map(|&(name, fallback)| {
            let path = audio_dir.join(audio_file_name(name));
            if !path.is_file() {
                tracing::debug!(clip = name, fallback, "no audio file; using built-in duration");
                return (name.to_string(), fallback);
            }
            match probe(&path) {
                Ok(secs) => {
                    tracing::debug!(clip = name, secs, "probed clip duration");
                    (name.to_string(), secs)
                }
                Err(err) => {
                    tracing::warn!(clip = name, error = %err, fallback, "probe failed; using built-in duration");
                    (name.to_string(), fallback)
                }
            }
        })
        .collect()
}
