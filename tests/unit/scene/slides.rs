use super::*;
use crate::scene::draw::NodeKind;
use crate::script::sections::SECTION_TABLE;

fn ctx(frame: u64) -> SlideCtx {
    SlideCtx {
        frame,
        fps: Fps { num: 30, den: 1 },
        canvas: Canvas {
            width: 1920,
            height: 1080,
        },
    }
}

fn draw(kind: SlideKind, frame: u64) -> DisplayList {
    let mut dl = DisplayList::new();
    kind.draw(&ctx(frame), &mut dl);
    dl
}

fn texts(dl: &DisplayList) -> Vec<&str> {
    dl.nodes()
        .iter()
        .filter_map(|n| match &n.kind {
            NodeKind::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn slide_names_follow_the_section_table() {
    let names: Vec<&str> = SlideKind::ALL.iter().map(|k| k.name()).collect();
    let table: Vec<&str> = SECTION_TABLE.iter().map(|s| s.name).collect();
    assert_eq!(names, table);
    for kind in SlideKind::ALL {
        assert_eq!(SlideKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(SlideKind::from_name("intro"), None);
}

#[test]
fn slide_kind_serializes_as_section_name() {
    let json = serde_json::to_string(&SlideKind::FirstPrompt).unwrap();
    assert_eq!(json, "\"firstPrompt\"");
    let back: SlideKind = serde_json::from_str(&json).unwrap();
    assert_eq!(back, SlideKind::FirstPrompt);
}

#[test]
fn every_slide_is_deterministic_and_paints_a_background() {
    for kind in SlideKind::ALL {
        for frame in [0, 1, 45, 300, 900, 2500] {
            let a = draw(kind, frame);
            let b = draw(kind, frame);
            assert_eq!(a.nodes(), b.nodes(), "{} at {frame}", kind.name());
            assert!(!a.is_empty(), "{} at {frame}", kind.name());
            assert!(
                matches!(a.nodes()[0].kind, NodeKind::Rect { .. }),
                "{} must start with a backdrop",
                kind.name()
            );
        }
    }
}

#[test]
fn node_opacities_stay_in_unit_range() {
    for kind in SlideKind::ALL {
        for frame in (0..1200).step_by(37) {
            for node in draw(kind, frame).nodes() {
                assert!(
                    node.opacity > 0.0 && node.opacity <= 1.0,
                    "{} at {frame}: {}",
                    kind.name(),
                    node.opacity
                );
            }
        }
    }
}

#[test]
fn title_fades_in_its_subtitle() {
    let early = draw(SlideKind::Title, 0);
    assert!(!texts(&early).contains(&"Built entirely with AI prompts"));
    let later = draw(SlideKind::Title, 90);
    assert!(texts(&later).contains(&"Built entirely with AI prompts"));
    assert!(texts(&later).contains(&"markview.app"));
}

#[test]
fn typed_prefix_respects_char_boundaries() {
    assert_eq!(typed_prefix("❯ go", 0), "");
    assert_eq!(typed_prefix("❯ go", 1), "❯");
    assert_eq!(typed_prefix("❯ go", 3), "❯ g");
    assert_eq!(typed_prefix("❯ go", 99), "❯ go");
}

#[test]
fn typed_chars_clamps_both_ends() {
    assert_eq!(typed_chars(&ctx(0), 30.0, 120.0, 25), 0);
    assert_eq!(typed_chars(&ctx(75), 30.0, 120.0, 25), 12);
    assert_eq!(typed_chars(&ctx(120), 30.0, 120.0, 25), 25);
    assert_eq!(typed_chars(&ctx(5000), 30.0, 120.0, 25), 25);
}

#[test]
fn publish_command_is_typed_progressively() {
    let mid = draw(SlideKind::Publish, 75);
    assert!(
        texts(&mid)
            .iter()
            .any(|t| t.starts_with("Publish this") && !t.starts_with("Publish this application."))
    );
    let done = draw(SlideKind::Publish, 200);
    assert!(texts(&done).contains(&"Publish this application."));
    assert!(texts(&done).contains(&"https://markview.app"));
}

#[test]
fn iteration_phase_advances_and_caps() {
    assert_eq!(iteration::phase_index(0.0), 0);
    assert_eq!(iteration::phase_index(599.0), 0);
    assert_eq!(iteration::phase_index(600.0), 1);
    assert_eq!(iteration::phase_index(1200.0), 2);
    assert_eq!(iteration::phase_index(1800.0), 2);
    assert_eq!(iteration::phase_index(5000.0), 2);
    assert_eq!(iteration::phase_index(-10.0), 0);
}

#[test]
fn counters_reach_their_targets() {
    assert_eq!(stats::counter_value(-5.0, 108), 0);
    assert_eq!(stats::counter_value(0.0, 108), 0);
    assert_eq!(stats::counter_value(1000.0, 108), 108);
    let mid = stats::counter_value(22.5, 108);
    assert!(mid > 0 && mid < 108);
}

#[test]
fn outro_glow_pulses_between_bounds() {
    for f in 0..200 {
        let v = outro::glow_pulse(f64::from(f));
        assert!((0.6..=1.0).contains(&v));
    }
}

#[test]
fn mono_width_counts_chars_not_bytes() {
    assert!((mono_width("ab", 10.0) - 12.0).abs() < 1e-9);
    assert_eq!(mono_width("❯✓", 10.0), mono_width("ab", 10.0));
}
