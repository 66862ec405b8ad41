use std::path::PathBuf;

use anyhow::Context as _;

use crate::foundation::core::Fps;
use crate::foundation::error::{ReelError, ReelResult};
use crate::script::transcript::{Section, parse_transcript};
use crate::voiceover::config::VoiceoverConfig;
use crate::voiceover::metadata::{VoiceoverMetadata, audio_file_name};
use crate::voiceover::synth::Synthesizer;

/// Outcome of a [`generate_voiceover`] run.
#[derive(Clone, Debug)]
pub struct VoiceoverReport {
    /// Every section parsed from the transcript, sorted by start.
    pub sections: Vec<Section>,
    /// Audio files written, in section order.
    pub written: Vec<PathBuf>,
    /// Sections whose synthesis failed, with the error message.
    pub failed: Vec<(String, String)>,
    /// Location of `metadata.json`.
    pub metadata_path: PathBuf,
    /// Narration characters across all sections.
    pub total_chars: usize,
}

impl VoiceoverReport {
    /// Return `true` when every section produced audio.
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Options that do not belong in [`VoiceoverConfig`].
#[derive(Clone, Copy, Debug)]
pub struct GenerateOpts {
    /// Frame rate used for metadata frame values.
    pub fps: Fps,
    /// Parse and report without calling the synthesizer or writing files.
    pub dry_run: bool,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            fps: Fps { num: 30, den: 1 },
            dry_run: false,
        }
    }
}

/// Turn the transcript into per-section audio files plus `metadata.json`.
///
/// Fails fast when the transcript is missing or the output directory cannot be created. A
/// synthesis failure is logged and recorded in the report; remaining sections still run.
/// `metadata.json` lists every parsed section regardless of synthesis outcome.
#[tracing::instrument(skip_all, fields(transcript = %cfg.transcript_path.display()))]
pub fn generate_voiceover(
    cfg: &VoiceoverConfig,
    synth: &dyn Synthesizer,
    opts: GenerateOpts,
) -> ReelResult<VoiceoverReport> {
    if !cfg.transcript_path.is_file() {
        return Err(ReelError::MissingInput(cfg.transcript_path.clone()));
    }
    let content = std::fs::read_to_string(&cfg.transcript_path)
        .with_context(|| format!("read transcript '{}'", cfg.transcript_path.display()))?;

    let parsed = parse_transcript(&content);
    let total_chars = parsed.total_chars();
    tracing::info!(
        sections = parsed.sections.len(),
        total_chars,
        "parsed transcript"
    );

    let metadata_path = cfg.metadata_path();
    let mut report = VoiceoverReport {
        sections: parsed.sections,
        written: Vec::new(),
        failed: Vec::new(),
        metadata_path,
        total_chars,
    };

    if opts.dry_run {
        for s in &report.sections {
            tracing::info!(section = %s.name, chars = s.text.chars().count(), "dry run");
        }
        return Ok(report);
    }

    std::fs::create_dir_all(&cfg.output_dir)
        .with_context(|| format!("create output dir '{}'", cfg.output_dir.display()))?;

    for section in &report.sections {
        tracing::info!(section = %section.name, chars = section.text.chars().count(), "synthesizing");
        let out_path = cfg.output_dir.join(audio_file_name(&section.name));
        let result = synth
            .synthesize(&section.name, &section.text)
            .and_then(|bytes| {
                std::fs::write(&out_path, &bytes)
                    .with_context(|| format!("write audio '{}'", out_path.display()))?;
                Ok(bytes.len())
            });
        match result {
            Ok(bytes) => {
                tracing::info!(section = %section.name, bytes, path = %out_path.display(), "saved");
                report.written.push(out_path);
            }
            Err(err) => {
                tracing::error!(section = %section.name, error = %err, "synthesis failed");
                report.failed.push((section.name.clone(), err.to_string()));
            }
        }
    }

    let meta = VoiceoverMetadata::build(synth.voice_id(), &report.sections, opts.fps);
    meta.write(&report.metadata_path)?;
    tracing::info!(
        written = report.written.len(),
        failed = report.failed.len(),
        metadata = %report.metadata_path.display(),
        "voiceover generation finished"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "../../tests/unit/voiceover/generate.rs"]
mod tests;
