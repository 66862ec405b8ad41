//! Voiceover transcript segmentation.

pub(crate) mod sections;
pub(crate) mod transcript;
