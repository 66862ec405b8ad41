use std::path::Path;

use crate::foundation::error::{ReelError, ReelResult};

/// Sample rate every clip is decoded to before mixing.
pub const MIX_SAMPLE_RATE: u32 = 48_000;

/// Interleaved PCM samples.
#[derive(Clone, Debug, Default)]
pub struct AudioPcm {
    /// Samples per second per channel.
    pub sample_rate: u32,
    /// Channel count of `interleaved_f32`.
    pub channels: u16,
    /// Interleaved samples in `[-1, 1]`.
    pub interleaved_f32: Vec<f32>,
}

impl AudioPcm {
    /// Number of sample frames (one sample per channel).
    pub fn frames(&self) -> usize {
        if self.channels == 0 {
            0
        } else {
            self.interleaved_f32.len() / usize::from(self.channels)
        }
    }

    /// Length in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            0.0
        } else {
            self.frames() as f64 / f64::from(self.sample_rate)
        }
    }
}

/// Measure the container duration of a media file with `ffprobe`.
pub fn probe_duration_secs(path: &Path) -> ReelResult<f64> {
    let out = std::process::Command::new("ffprobe")
        .args(["-v", "error", "-print_format", "json", "-show_format"])
        .arg(path)
        .output()
        .map_err(|e| ReelError::evaluation(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(ReelError::evaluation(format!(
            "ffprobe failed for '{}': {}",
            path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }
    parse_probe_duration(&out.stdout)
}

fn parse_probe_duration(json: &[u8]) -> ReelResult<f64> {
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        format: Option<ProbeFormat>,
    }

    let parsed: ProbeOut = serde_json::from_slice(json)
        .map_err(|e| ReelError::evaluation(format!("ffprobe json parse failed: {e}")))?;
    parsed
        .format
        .and_then(|f| f.duration)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|d| d.is_finite() && *d >= 0.0)
        .ok_or_else(|| ReelError::evaluation("ffprobe reported no duration"))
}

/// Decode any audio file to interleaved stereo `f32` at `sample_rate` with `ffmpeg`.
pub fn decode_audio_f32_stereo(path: &Path, sample_rate: u32) -> ReelResult<AudioPcm> {
    let out = std::process::Command::new("ffmpeg")
        .args(["-v", "error", "-i"])
        .arg(path)
        .args([
            "-vn",
            "-f",
            "f32le",
            "-acodec",
            "pcm_f32le",
            "-ac",
            "2",
            "-ar",
            &sample_rate.to_string(),
            "pipe:1",
        ])
        .output()
        .map_err(|e| ReelError::evaluation(format!("failed to run ffmpeg for audio decode: {e}")))?;

    if !out.status.success() {
        return Err(ReelError::evaluation(format!(
            "ffmpeg audio decode failed for '{}': {}",
            path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    Ok(AudioPcm {
        sample_rate,
        channels: 2,
        interleaved_f32: f32le_samples(&out.stdout)?,
    })
}

fn f32le_samples(bytes: &[u8]) -> ReelResult<Vec<f32>> {
    if !bytes.len().is_multiple_of(4) {
        return Err(ReelError::evaluation(
            "decoded audio byte length is not aligned to f32 samples",
        ));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}
