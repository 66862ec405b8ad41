use crate::animation::interp::{InterpolateOpts, interpolate};
use crate::foundation::core::{Point, Rect, Rgba8};
use crate::scene::draw::{DisplayList, TextStyle};
use crate::scene::slides::{
    BLUE, GRAY_66, GRAY_88, ORANGE, PURPLE, SlideCtx, TEAL, WHITE, backdrop, bordered_box,
};

struct Stat {
    value: u32,
    label: &'static str,
    delay: f64,
    color: Rgba8,
}

const STATS: [Stat; 4] = [
    Stat {
        value: 108,
        label: "PROMPTS",
        delay: 15.0,
        color: TEAL,
    },
    Stat {
        value: 75,
        label: "VERSIONS",
        delay: 30.0,
        color: PURPLE,
    },
    Stat {
        value: 3,
        label: "ROLLBACKS",
        delay: 45.0,
        color: ORANGE,
    },
    Stat {
        value: 1,
        label: "LIVE APP",
        delay: 60.0,
        color: BLUE,
    },
];

const BOX_W: f64 = 340.0;
const BOX_H: f64 = 280.0;
const BOX_GAP: f64 = 50.0;
const BOX_CENTER_Y: f64 = 545.0;
/// Frames the counter takes to reach its final value.
const COUNT_FRAMES: f64 = 45.0;

pub(super) fn draw(ctx: &SlideCtx, dl: &mut DisplayList) {
    let c = ctx.center();
    backdrop(dl, ctx.canvas, Rgba8::rgb(0x0d, 0x0d, 0x0d), None);

    dl.fade(ctx.ramp((0.0, 20.0), (0.0, 1.0)), |dl| {
        dl.text(
            "The Numbers",
            Point::new(c.x, 255.0),
            TextStyle::new(56.0, WHITE).centered(),
        );
    });

    let row_w = 4.0 * BOX_W + 3.0 * BOX_GAP;
    let left = c.x - row_w / 2.0;
    for (i, stat) in STATS.iter().enumerate() {
        let cx = left + i as f64 * (BOX_W + BOX_GAP) + BOX_W / 2.0;
        stat_box(ctx, dl, stat, Point::new(cx, BOX_CENTER_Y));
    }

    dl.fade(ctx.ramp((90.0, 120.0), (0.0, 1.0)), |dl| {
        dl.text(
            "All in a single Bolt.new session",
            Point::new(c.x, 785.0),
            TextStyle::new(32.0, GRAY_66).centered(),
        );
    });
}

fn stat_box(ctx: &SlideCtx, dl: &mut DisplayList, stat: &Stat, center: Point) {
    let counter = counter_value(ctx.f() - stat.delay, stat.value);
    dl.scale_about(ctx.spring(stat.delay, 12.0, 100.0), center, |dl| {
        let rect = Rect::from_center_size(center, (BOX_W, BOX_H));
        bordered_box(
            dl,
            rect,
            24.0,
            2.0,
            stat.color.with_alpha(0.2),
            Rgba8::rgb(0x14, 0x14, 0x14),
        );
        dl.text(
            counter.to_string(),
            Point::new(center.x, center.y - 110.0),
            TextStyle::new(120.0, stat.color).centered(),
        );
        dl.text(
            stat.label,
            Point::new(center.x, center.y + 50.0),
            TextStyle::new(28.0, GRAY_88).centered(),
        );
    });
}

/// Count-up value `local` frames after the box appears.
pub(super) fn counter_value(local: f64, target: u32) -> u32 {
    let v = interpolate(
        local,
        (0.0, COUNT_FRAMES),
        (0.0, f64::from(target)),
        InterpolateOpts::clamp(),
    );
    v.round() as u32
}
