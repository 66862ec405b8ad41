use crate::foundation::core::{FrameIndex, FrameRange, Fps};
use crate::foundation::error::{ReelError, ReelResult};

/// Measured voiceover clip lengths in seconds, in presentation order.
pub const VOICEOVER_DURATIONS: [(&str, f64); 9] = [
    ("title", 9.0),
    ("stats", 8.7),
    ("firstPrompt", 31.2),
    ("iteration", 38.6),
    ("difficulties", 30.9),
    ("features", 42.0),
    ("publish", 14.6),
    ("lessons", 16.0),
    ("outro", 5.9),
];

/// Silence between consecutive clips.
pub const AUDIO_GAP_SECS: f64 = 0.5;
/// Extra screen time after the last clip.
pub const OUTRO_TAIL_SECS: f64 = 2.0;

/// Placement of one section on the video timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleEntry {
    /// Section name, also the audio file stem.
    pub name: String,
    /// Clip start in seconds.
    pub audio_start_secs: f64,
    /// Clip length in seconds.
    pub audio_duration_secs: f64,
    /// Frame at which the clip starts.
    pub audio_start: FrameIndex,
    /// Frames during which the slide is visible.
    pub slide: FrameRange,
}

/// Back-to-back layout of voiceover clips and the slides that accompany them.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Schedule {
    /// Timeline frame rate.
    pub fps: Fps,
    /// Entries in presentation order.
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Lay clips out one after another with `gap_secs` of silence between them.
    ///
    /// Slide `i` covers its clip plus the following gap; the last slide covers its clip plus
    /// `tail_secs`. Boundaries are rounded to the nearest frame once, so adjacent slide ranges
    /// share their boundary frame and never overlap.
    pub fn back_to_back<S: AsRef<str>>(
        durations: &[(S, f64)],
        fps: Fps,
        gap_secs: f64,
        tail_secs: f64,
    ) -> ReelResult<Self> {
        if durations.is_empty() {
            return Err(ReelError::validation("schedule needs at least one clip"));
        }
        for v in [gap_secs, tail_secs] {
            if !v.is_finite() || v < 0.0 {
                return Err(ReelError::validation(
                    "schedule gap and tail must be finite and >= 0",
                ));
            }
        }
        for (name, d) in durations {
            if !d.is_finite() || *d < 0.0 {
                return Err(ReelError::validation(format!(
                    "clip '{}' has invalid duration {d}",
                    name.as_ref()
                )));
            }
        }

        let mut starts = Vec::with_capacity(durations.len());
        let mut cursor = 0.0;
        for (_, d) in durations {
            starts.push(cursor);
            cursor += d + gap_secs;
        }
        let last = durations.len() - 1;
        let end_secs = starts[last] + durations[last].1 + tail_secs;

        let to_frame = |secs: f64| FrameIndex(fps.secs_to_frames_round(secs));
        let mut entries = Vec::with_capacity(durations.len());
        for (i, (name, d)) in durations.iter().enumerate() {
            let start = to_frame(starts[i]);
            let end = if i == last {
                to_frame(end_secs)
            } else {
                to_frame(starts[i + 1])
            };
            entries.push(ScheduleEntry {
                name: name.as_ref().to_string(),
                audio_start_secs: starts[i],
                audio_duration_secs: *d,
                audio_start: start,
                slide: FrameRange::new(start, end)?,
            });
        }
        Ok(Self { fps, entries })
    }

    /// The presentation's layout built from [`VOICEOVER_DURATIONS`] at 30 fps.
    pub fn markview() -> ReelResult<Self> {
        Self::back_to_back(
            &VOICEOVER_DURATIONS,
            Fps::new(30, 1)?,
            AUDIO_GAP_SECS,
            OUTRO_TAIL_SECS,
        )
    }

    /// Entry for a section name.
    pub fn get(&self, name: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// First frame after the last slide.
    pub fn end_frame(&self) -> FrameIndex {
        self.entries
            .last()
            .map(|e| e.slide.end)
            .unwrap_or(FrameIndex(0))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/schedule.rs"]
mod tests;
