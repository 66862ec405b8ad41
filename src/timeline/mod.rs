//! Alignment of voiceover clips and slides on the frame timeline.

pub(crate) mod probe;
pub(crate) mod schedule;
