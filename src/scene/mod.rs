//! Presentation content: the composition timeline, the slides and the display list they draw into.

/// Timed sequences, audio cues and the markview presentation.
pub mod composition;
/// Display list primitives.
pub mod draw;
pub mod slides;
