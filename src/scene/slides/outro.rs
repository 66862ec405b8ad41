use crate::foundation::core::{Point, Rect, Rgba8};
use crate::scene::draw::{DisplayList, TextStyle};
use crate::scene::slides::title::powered_by_badge;
use crate::scene::slides::{
    BG, BLUE, GRAY_33, GRAY_66, GRAY_88, PURPLE, SlideCtx, TEAL, backdrop, glow,
};

const STATS: [(&str, &str, Rgba8); 3] = [
    ("108", "prompts", TEAL),
    ("75", "versions", PURPLE),
    ("1", "live app", BLUE),
];
const COLUMN_W: f64 = 90.0;
const COLUMN_GAP: f64 = 50.0;

/// Opacity of the pulsing glow at local frame `frame`.
pub(super) fn glow_pulse(frame: f64) -> f64 {
    (frame * 0.1).sin() * 0.2 + 0.8
}

pub(super) fn draw(ctx: &SlideCtx, dl: &mut DisplayList) {
    let c = ctx.center();
    backdrop(dl, ctx.canvas, BG, Some(Rgba8::rgb(0x1a, 0x1a, 0x2e)));
    dl.fade(glow_pulse(ctx.f()), |dl| glow(dl, c, 300.0, TEAL, 0.2));

    dl.scale_about(ctx.spring(0.0, 12.0, 100.0), c, |dl| {
        dl.text(
            "markview.app",
            Point::new(c.x, 325.0),
            TextStyle::new(100.0, TEAL).centered(),
        );
        dl.text(
            "Try it yourself",
            Point::new(c.x, 475.0),
            TextStyle::new(36.0, GRAY_88).centered(),
        );

        let row_top = 579.0;
        let step = COLUMN_W + 2.0 * COLUMN_GAP + 2.0;
        for (i, &(value, label, color)) in STATS.iter().enumerate() {
            let cx = c.x + (i as f64 - 1.0) * step;
            dl.text(
                value,
                Point::new(cx, row_top),
                TextStyle::new(48.0, color).centered(),
            );
            dl.text(
                label,
                Point::new(cx, row_top + 58.0),
                TextStyle::new(18.0, GRAY_66).centered(),
            );
            if i + 1 < STATS.len() {
                let x = cx + step / 2.0;
                dl.rect(Rect::new(x - 1.0, row_top, x + 1.0, row_top + 60.0), GRAY_33);
            }
        }

        dl.fade(0.7, |dl| {
            powered_by_badge(dl, Point::new(c.x, row_top + 160.0), "Built with");
        });
    });
}
