use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};
use crate::script::transcript::Section;

/// Timing of one generated clip, in frames.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMetadata {
    /// Canonical section name.
    pub name: String,
    /// Audio file name inside the output directory.
    pub file: String,
    /// Nominal start frame.
    pub start_frame: u64,
    /// Nominal duration in frames.
    pub duration_frames: u64,
}

/// Contents of `metadata.json`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceoverMetadata {
    /// Voice used for every clip.
    pub voice: String,
    /// RFC 3339 generation timestamp.
    pub generated_at: String,
    /// One entry per parsed section, sorted by start.
    pub sections: Vec<SectionMetadata>,
}

impl VoiceoverMetadata {
    /// Build metadata for `sections`; frame values are `seconds × fps` exactly.
    pub fn build(voice: &str, sections: &[Section], fps: Fps) -> Self {
        let generated_at =
            chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        Self {
            voice: voice.to_string(),
            generated_at,
            sections: sections
                .iter()
                .map(|s| SectionMetadata {
                    name: s.name.clone(),
                    file: audio_file_name(&s.name),
                    start_frame: fps.whole_secs_to_frames(s.start_secs),
                    duration_frames: fps.whole_secs_to_frames(s.duration_secs),
                })
                .collect(),
        }
    }

    /// Write pretty-printed JSON to `path`.
    pub fn write(&self, path: &Path) -> ReelResult<()> {
        let json = serde_json::to_string_pretty(self)
            .with_context(|| "serialize voiceover metadata")?;
        std::fs::write(path, json)
            .with_context(|| format!("write metadata '{}'", path.display()))?;
        Ok(())
    }

    /// Read a metadata file written by [`VoiceoverMetadata::write`].
    pub fn read(path: &Path) -> ReelResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read metadata '{}'", path.display()))?;
        let meta = serde_json::from_slice(&bytes)
            .map_err(|e| ReelError::serde(format!("invalid metadata json: {e}")))?;
        Ok(meta)
    }
}

/// Audio file name for a section.
pub fn audio_file_name(section: &str) -> String {
    format!("{section}.mp3")
}

#[cfg(test)]
#[path = "../../tests/unit/voiceover/metadata.rs"]
mod tests;
