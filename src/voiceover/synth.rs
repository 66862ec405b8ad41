use std::time::Duration;

use crate::foundation::error::{ReelError, ReelResult};
use crate::voiceover::config::{VoiceSettings, VoiceoverConfig};

const API_BASE: &str = "https://api.elevenlabs.io/v1";

/// Text-to-speech backend.
///
/// Calls are made one at a time; implementations need not be thread-safe.
pub trait Synthesizer {
    /// Identifier of the voice recorded in the metadata file.
    fn voice_id(&self) -> &str;

    /// Synthesize `text` for section `section` and return encoded audio bytes (MP3).
    fn synthesize(&self, section: &str, text: &str) -> ReelResult<Vec<u8>>;
}

#[derive(serde::Serialize)]
struct SpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

/// ElevenLabs HTTP text-to-speech client.
pub struct ElevenLabsSynthesizer {
    client: reqwest::blocking::Client,
    api_key: String,
    voice_id: String,
    model_id: String,
    voice_settings: VoiceSettings,
}

impl ElevenLabsSynthesizer {
    /// Create a client from a validated config.
    pub fn new(cfg: &VoiceoverConfig) -> ReelResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| ReelError::config(format!("failed to build http client: {e}")))?;
        Ok(Self {
            client,
            api_key: cfg.api_key.clone(),
            voice_id: cfg.voice_id.clone(),
            model_id: cfg.model_id.clone(),
            voice_settings: cfg.voice_settings,
        })
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/text-to-speech/{}", self.voice_id)
    }
}

impl Synthesizer for ElevenLabsSynthesizer {
    fn voice_id(&self) -> &str {
        &self.voice_id
    }

    fn synthesize(&self, section: &str, text: &str) -> ReelResult<Vec<u8>> {
        let body = SpeechRequest {
            text,
            model_id: &self.model_id,
            voice_settings: self.voice_settings,
        };
        let resp = self
            .client
            .post(self.endpoint())
            .header("xi-api-key", &self.api_key)
            .header(reqwest::header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .map_err(|e| ReelError::synthesis(section, format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().unwrap_or_default();
            return Err(ReelError::synthesis(
                section,
                format!("http {status}: {}", detail.trim()),
            ));
        }

        let bytes = resp
            .bytes()
            .map_err(|e| ReelError::synthesis(section, format!("failed to read audio: {e}")))?;
        if bytes.is_empty() {
            return Err(ReelError::synthesis(section, "empty audio response"));
        }
        Ok(bytes.to_vec())
    }
}
