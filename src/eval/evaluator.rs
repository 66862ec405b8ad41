use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::composition::Composition;
use crate::scene::draw::{DisplayList, Node};
use crate::scene::slides::{SlideCtx, SlideKind};

/// Everything visible and audible at one timeline frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EvaluatedFrame {
    /// Timeline frame.
    pub frame: FrameIndex,
    /// Slides drawn into `nodes`, in paint order.
    pub slides: Vec<ActiveSlide>,
    /// Clips playing at this frame.
    pub audio: Vec<ActiveAudio>,
    /// Paint-ordered primitives, starting with the background.
    pub nodes: Vec<Node>,
}

/// A slide active at the evaluated frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ActiveSlide {
    /// Slide identity.
    pub slide: SlideKind,
    /// Frame relative to the start of the slide's window.
    pub local_frame: u64,
}

/// A voiceover clip playing at the evaluated frame.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ActiveAudio {
    /// Section name.
    pub name: String,
    /// Clip file name.
    pub file: String,
    /// Frame relative to the clip start.
    pub local_frame: u64,
}

/// Maps a composition and a frame to an [`EvaluatedFrame`].
///
/// Holds no state; frames can be evaluated in any order and from any thread.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate `frame`, which must lie in `[0, comp.duration)`.
    #[tracing::instrument(skip(comp))]
    pub fn eval_frame(comp: &Composition, frame: FrameIndex) -> ReelResult<EvaluatedFrame> {
        if frame.0 >= comp.duration {
            return Err(ReelError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, comp.duration
            )));
        }

        let mut dl = DisplayList::new();
        dl.rect(comp.canvas.rect(), comp.background);

        let mut slides = Vec::new();
        for seq in comp.sequences.iter().filter(|s| s.range.contains(frame)) {
            let local_frame = frame.0 - seq.range.start.0;
            let ctx = SlideCtx {
                frame: local_frame,
                fps: comp.fps,
                canvas: comp.canvas,
            };
            seq.slide.draw(&ctx, &mut dl);
            slides.push(ActiveSlide {
                slide: seq.slide,
                local_frame,
            });
        }

        let audio = comp
            .audio
            .iter()
            .filter(|cue| cue.range().contains(frame))
            .map(|cue| ActiveAudio {
                name: cue.name.clone(),
                file: cue.file.clone(),
                local_frame: frame.0 - cue.start.0,
            })
            .collect();

        Ok(EvaluatedFrame {
            frame,
            slides,
            audio,
            nodes: dl.into_nodes(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
