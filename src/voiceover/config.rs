use std::path::{Path, PathBuf};

use crate::foundation::error::{ReelError, ReelResult};

/// Default narrator voice.
pub const DEFAULT_VOICE_ID: &str = "s3TPKV1kjDlVtZbl4Ksh";
/// Default synthesis model.
pub const DEFAULT_MODEL_ID: &str = "eleven_multilingual_v2";
/// Default transcript location, relative to the working directory.
pub const DEFAULT_TRANSCRIPT_PATH: &str = "../voiceover.md";
/// Default audio output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "public/audio";
/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";
/// Dotenv files consulted for the API key, highest precedence first.
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

/// Voice tuning sent with every synthesis request.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VoiceSettings {
    /// Delivery consistency, `[0, 1]`.
    pub stability: f32,
    /// Adherence to the reference voice, `[0, 1]`.
    pub similarity_boost: f32,
    /// Style exaggeration, `[0, 1]`.
    pub style: f32,
    /// Boost similarity to the original speaker.
    pub use_speaker_boost: bool,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
            style: 0.3,
            use_speaker_boost: true,
        }
    }
}

/// Inputs of a voiceover generation run.
#[derive(Clone, Debug)]
pub struct VoiceoverConfig {
    /// API credential. Never logged.
    pub api_key: String,
    /// Voice identifier.
    pub voice_id: String,
    /// Model identifier.
    pub model_id: String,
    /// Voice tuning.
    pub voice_settings: VoiceSettings,
    /// Markdown transcript to read.
    pub transcript_path: PathBuf,
    /// Directory receiving `<section>.mp3` and `metadata.json`.
    pub output_dir: PathBuf,
}

impl VoiceoverConfig {
    /// Build a config with defaults for everything but the key.
    ///
    /// A missing or blank key is a fatal [`ReelError::Config`].
    pub fn new(api_key: Option<String>) -> ReelResult<Self> {
        let api_key = api_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                ReelError::config(format!(
                    "{API_KEY_ENV} not found in environment; set it or pass --api-key"
                ))
            })?;
        Ok(Self::with_key(api_key))
    }

    /// Config without a credential, for dry runs that never reach the API.
    pub fn for_dry_run() -> Self {
        Self::with_key(String::new())
    }

    fn with_key(api_key: String) -> Self {
        Self {
            api_key,
            voice_id: DEFAULT_VOICE_ID.to_string(),
            model_id: DEFAULT_MODEL_ID.to_string(),
            voice_settings: VoiceSettings::default(),
            transcript_path: PathBuf::from(DEFAULT_TRANSCRIPT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }

    /// Build a config reading the key from [`API_KEY_ENV`].
    pub fn from_env() -> ReelResult<Self> {
        Self::new(std::env::var(API_KEY_ENV).ok())
    }

    /// Look up [`API_KEY_ENV`] in the [`ENV_FILES`] under `dir` without touching the process
    /// environment. `.env.local` wins over `.env`; absent files are ignored.
    pub fn key_from_env_files(dir: &Path) -> ReelResult<Option<String>> {
        for name in ENV_FILES {
            let path = dir.join(name);
            if !path.is_file() {
                continue;
            }
            let entries = dotenvy::from_path_iter(&path)
                .map_err(|e| ReelError::config(format!("read '{}': {e}", path.display())))?;
            for entry in entries {
                let (key, value) = entry
                    .map_err(|e| ReelError::config(format!("parse '{}': {e}", path.display())))?;
                if key == API_KEY_ENV && !value.trim().is_empty() {
                    tracing::debug!(file = %path.display(), "api key loaded from env file");
                    return Ok(Some(value));
                }
            }
        }
        Ok(None)
    }

    /// Path of the metadata file inside the output directory.
    pub fn metadata_path(&self) -> PathBuf {
        self.output_dir.join("metadata.json")
    }
}
