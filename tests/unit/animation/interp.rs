use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn interpolate_maps_linearly_inside_range() {
    let v = interpolate(45.0, (30.0, 60.0), (0.0, 1.0), InterpolateOpts::default());
    assert!((v - 0.5).abs() < 1e-12);
}

#[test]
fn interpolate_extends_by_default_and_clamps_on_request() {
    let extended = interpolate(90.0, (30.0, 60.0), (0.0, 1.0), InterpolateOpts::default());
    assert!((extended - 2.0).abs() < 1e-12);

    let clamped = interpolate(90.0, (30.0, 60.0), (0.0, 1.0), InterpolateOpts::clamp_right());
    assert_eq!(clamped, 1.0);

    let left_extended = interpolate(0.0, (30.0, 60.0), (0.0, 1.0), InterpolateOpts::clamp_right());
    assert!((left_extended + 1.0).abs() < 1e-12);

    let left_clamped = interpolate(0.0, (30.0, 60.0), (0.0, 1.0), InterpolateOpts::clamp());
    assert_eq!(left_clamped, 0.0);
}

#[test]
fn interpolate_supports_descending_outputs() {
    let v = interpolate(300.0, (250.0, 350.0), (1.0, 0.0), InterpolateOpts::clamp());
    assert!((v - 0.5).abs() < 1e-12);
}

#[test]
fn interpolate_applies_easing_inside_range_only() {
    let opts = InterpolateOpts {
        ease: Ease::InQuad,
        ..InterpolateOpts::clamp()
    };
    let v = interpolate(0.5, (0.0, 1.0), (0.0, 10.0), opts);
    assert!((v - 2.5).abs() < 1e-12);
}

#[test]
fn interpolate_degenerate_range_steps() {
    let opts = InterpolateOpts::default();
    assert_eq!(interpolate(4.0, (5.0, 5.0), (0.0, 1.0), opts), 0.0);
    assert_eq!(interpolate(5.0, (5.0, 5.0), (0.0, 1.0), opts), 1.0);
}

#[test]
fn spring_starts_at_zero_and_settles_at_one() {
    let cfg = SpringConfig::new(15.0, 80.0);
    assert_eq!(spring(-10.0, fps30(), cfg), 0.0);
    assert_eq!(spring(0.0, fps30(), cfg), 0.0);
    let settled = spring(300.0, fps30(), cfg);
    assert!((settled - 1.0).abs() < 1e-4, "settled={settled}");
}

#[test]
fn underdamped_spring_overshoots() {
    let cfg = SpringConfig::new(5.0, 100.0);
    let peak = (0..90)
        .map(|f| spring(f as f64, fps30(), cfg))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0, "peak={peak}");
}

#[test]
fn critically_and_over_damped_springs_are_monotone() {
    for cfg in [SpringConfig::new(20.0, 100.0), SpringConfig::new(40.0, 100.0)] {
        let mut prev = 0.0;
        for f in 0..120 {
            let v = spring(f as f64, fps30(), cfg);
            assert!(v + 1e-12 >= prev, "frame {f}: {v} < {prev}");
            assert!(v <= 1.0 + 1e-12);
            prev = v;
        }
    }
}

#[test]
fn ease_endpoints_are_fixed() {
    for ease in [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
    ] {
        assert_eq!(ease.apply(0.0), 0.0);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn blink_toggles() {
    assert!(!blink(0.0));
    assert!(blink(2.0));
    assert!(!blink(12.0));
}
