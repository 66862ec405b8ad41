//! Transcript-to-speech generation.
//!
//! Sections are synthesized one at a time through a [`synth::Synthesizer`]; the HTTP backend is
//! the only networked piece of the crate.

pub(crate) mod config;
pub(crate) mod generate;
pub(crate) mod metadata;
pub(crate) mod synth;
