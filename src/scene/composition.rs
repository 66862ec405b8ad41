use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Rgba8};
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::slides::SlideKind;
use crate::timeline::schedule::Schedule;
use crate::voiceover::metadata::audio_file_name;

/// Nominal length of the presentation: 205 s at 30 fps.
pub const MARKVIEW_DURATION_FRAMES: u64 = 6150;
/// Output resolution.
pub const MARKVIEW_CANVAS: Canvas = Canvas {
    width: 1920,
    height: 1080,
};

/// A slide shown over a window of the timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sequence {
    /// Slide drawn during `range`.
    pub slide: SlideKind,
    /// Timeline frames; the slide sees local frame `f - range.start`.
    pub range: FrameRange,
}

/// A voiceover clip placed on the timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioCue {
    /// Section name.
    pub name: String,
    /// File name relative to the audio directory.
    pub file: String,
    /// First frame of playback.
    pub start: FrameIndex,
    /// Expected clip length in frames.
    pub duration_frames: u64,
}

impl AudioCue {
    /// Frames during which the clip plays.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: self.start,
            end: FrameIndex(self.start.0.saturating_add(self.duration_frames)),
        }
    }
}

/// The complete video: slides and voiceover on one timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Total length in frames.
    pub duration: u64,
    /// Color behind every slide, also shown where no slide is active.
    pub background: Rgba8,
    /// Slides in timeline order.
    pub sequences: Vec<Sequence>,
    /// Voiceover clips in timeline order.
    pub audio: Vec<AudioCue>,
}

impl Composition {
    /// Build the markview.app presentation from a clip schedule.
    ///
    /// Every schedule entry must name a slide. The duration is the nominal 6150 frames, extended
    /// when the schedule runs longer.
    pub fn markview(schedule: &Schedule) -> ReelResult<Self> {
        let mut sequences = Vec::with_capacity(schedule.entries.len());
        let mut audio = Vec::with_capacity(schedule.entries.len());
        for entry in &schedule.entries {
            let slide = SlideKind::from_name(&entry.name).ok_or_else(|| {
                ReelError::validation(format!("no slide named '{}'", entry.name))
            })?;
            sequences.push(Sequence {
                slide,
                range: entry.slide,
            });
            audio.push(AudioCue {
                name: entry.name.clone(),
                file: audio_file_name(&entry.name),
                start: entry.audio_start,
                duration_frames: schedule.fps.secs_to_frames_round(entry.audio_duration_secs),
            });
        }

        let comp = Self {
            fps: schedule.fps,
            canvas: MARKVIEW_CANVAS,
            duration: MARKVIEW_DURATION_FRAMES.max(schedule.end_frame().0),
            background: Rgba8::rgb(0x0a, 0x0a, 0x0a),
            sequences,
            audio,
        };
        comp.validate()?;
        Ok(comp)
    }

    /// Check structural invariants.
    ///
    /// Slide windows must be non-empty, ordered, non-overlapping and inside the duration; clips
    /// must start inside the duration.
    pub fn validate(&self) -> ReelResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ReelError::validation("canvas width/height must be > 0"));
        }
        if self.duration == 0 {
            return Err(ReelError::validation("composition duration must be > 0"));
        }

        let mut prev_end = 0u64;
        for seq in &self.sequences {
            let r = seq.range;
            if r.start.0 > r.end.0 || r.is_empty() {
                return Err(ReelError::validation(format!(
                    "sequence '{}' has an empty or inverted range",
                    seq.slide.name()
                )));
            }
            if r.start.0 < prev_end {
                return Err(ReelError::validation(format!(
                    "sequence '{}' overlaps the previous one",
                    seq.slide.name()
                )));
            }
            if r.end.0 > self.duration {
                return Err(ReelError::validation(format!(
                    "sequence '{}' ends after the composition",
                    seq.slide.name()
                )));
            }
            prev_end = r.end.0;
        }

        for cue in &self.audio {
            if cue.file.trim().is_empty() {
                return Err(ReelError::validation(format!(
                    "audio cue '{}' has no file",
                    cue.name
                )));
            }
            if cue.start.0 >= self.duration {
                return Err(ReelError::validation(format!(
                    "audio cue '{}' starts after the composition",
                    cue.name
                )));
            }
        }
        Ok(())
    }

    /// Whole timeline as a range.
    pub fn range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration),
        }
    }

    /// Sequence visible at `frame`, if any.
    pub fn sequence_at(&self, frame: FrameIndex) -> Option<&Sequence> {
        self.sequences.iter().find(|s| s.range.contains(frame))
    }

    /// Parse and validate a composition from JSON.
    pub fn from_reader<R: std::io::Read>(r: R) -> ReelResult<Self> {
        let comp: Self = serde_json::from_reader(r)
            .map_err(|e| ReelError::serde(format!("parse composition JSON: {e}")))?;
        comp.validate()?;
        Ok(comp)
    }

    /// Parse and validate a composition JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ReelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ReelError::validation(format!("open composition JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty JSON representation.
    pub fn to_json_pretty(&self) -> ReelResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReelError::serde(format!("serialize composition: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composition.rs"]
mod tests;
