//! Frame sinks.
//!
//! Sinks consume rendered frames in timeline order; `render_range` drives them.

/// MP4 output through the system `ffmpeg`.
pub mod ffmpeg;
/// Sink trait and the in-memory sink.
pub mod sink;
