use std::path::PathBuf;

/// Convenience result type used across the crate.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by library APIs.
///
/// Two kinds matter operationally: fatal errors ([`ReelError::is_fatal`]) abort a run, while
/// [`ReelError::Synthesis`] is reported per section and the run continues.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid user-provided or composition data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing or unusable configuration (credentials, settings).
    #[error("configuration error: {0}")]
    Config(String),

    /// A required input file does not exist.
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Errors while sampling animation parameters.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while evaluating or rendering timeline state for a frame.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Speech synthesis failed for one section.
    #[error("synthesis error for section '{section}': {message}")]
    Synthesis {
        /// Canonical section name.
        section: String,
        /// Failure detail.
        message: String,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ReelError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`ReelError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ReelError::Synthesis`] value.
    pub fn synthesis(section: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Synthesis {
            section: section.into(),
            message: msg.into(),
        }
    }

    /// Build a [`ReelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for errors that must halt a whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::MissingInput(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
