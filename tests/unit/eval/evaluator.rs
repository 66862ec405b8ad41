use super::*;
use crate::foundation::core::FrameRange;
use crate::scene::draw::NodeKind;
use crate::timeline::schedule::Schedule;

fn markview() -> Composition {
    Composition::markview(&Schedule::markview().unwrap()).unwrap()
}

#[test]
fn first_frame_shows_title_and_its_clip() {
    let comp = markview();
    let ev = Evaluator::eval_frame(&comp, FrameIndex(0)).unwrap();
    assert_eq!(
        ev.slides,
        vec![ActiveSlide {
            slide: SlideKind::Title,
            local_frame: 0
        }]
    );
    assert_eq!(ev.audio.len(), 1);
    assert_eq!(ev.audio[0].file, "title.mp3");
    match &ev.nodes[0].kind {
        NodeKind::Rect { rect, fill, .. } => {
            assert_eq!(*rect, comp.canvas.rect());
            assert_eq!(*fill, comp.background);
        }
        other => panic!("expected background rect, got {other:?}"),
    }
}

#[test]
fn local_frames_are_relative_to_the_window() {
    let comp = markview();
    let stats = comp.sequences[1].range;
    let ev = Evaluator::eval_frame(&comp, FrameIndex(stats.start.0 + 12)).unwrap();
    assert_eq!(ev.slides[0].slide, SlideKind::Stats);
    assert_eq!(ev.slides[0].local_frame, 12);
    assert_eq!(ev.audio[0].name, "stats");
    assert_eq!(ev.audio[0].local_frame, 12);
}

#[test]
fn gap_between_clips_has_no_audio() {
    let comp = markview();
    // Title clip is 270 frames; its slide runs through the 0.5 s gap.
    let ev = Evaluator::eval_frame(&comp, FrameIndex(275)).unwrap();
    assert_eq!(ev.slides[0].slide, SlideKind::Title);
    assert!(ev.audio.is_empty());
}

#[test]
fn tail_after_last_slide_is_background_only() {
    let comp = markview();
    let ev = Evaluator::eval_frame(&comp, FrameIndex(comp.duration - 1)).unwrap();
    assert!(ev.slides.is_empty());
    assert!(ev.audio.is_empty());
    assert_eq!(ev.nodes.len(), 1);
}

#[test]
fn out_of_range_frames_are_rejected() {
    let comp = markview();
    let err = Evaluator::eval_frame(&comp, FrameIndex(comp.duration)).unwrap_err();
    assert!(matches!(err, ReelError::Evaluation(_)));
}

#[test]
fn evaluation_is_order_independent() {
    let comp = markview();
    let frames = [4000u64, 10, 2500, 10, 4000];
    let evs: Vec<_> = frames
        .iter()
        .map(|&f| Evaluator::eval_frame(&comp, FrameIndex(f)).unwrap())
        .collect();
    assert_eq!(evs[1], evs[3]);
    assert_eq!(evs[0], evs[4]);
}

#[test]
fn overlapping_windows_paint_in_sequence_order() {
    let mut comp = markview();
    comp.sequences = vec![
        crate::scene::composition::Sequence {
            slide: SlideKind::Title,
            range: FrameRange::new(FrameIndex(0), FrameIndex(100)).unwrap(),
        },
        crate::scene::composition::Sequence {
            slide: SlideKind::Outro,
            range: FrameRange::new(FrameIndex(0), FrameIndex(100)).unwrap(),
        },
    ];
    let ev = Evaluator::eval_frame(&comp, FrameIndex(50)).unwrap();
    let kinds: Vec<SlideKind> = ev.slides.iter().map(|s| s.slide).collect();
    assert_eq!(kinds, vec![SlideKind::Title, SlideKind::Outro]);
}
