use crate::foundation::core::{Affine, Point, Rect, Rgba8, Vec2};
use crate::scene::draw::{DisplayList, TextStyle};
use crate::scene::slides::{
    BG, GRAY_55, GRAY_66, GRAY_A0, SlideCtx, TEAL, WHITE, backdrop, bordered_box, glow,
    mono_width,
};

const TITLE_TOP: f64 = 345.0;
const SUBTITLE_TOP: f64 = 545.0;
const BADGE_CENTER_Y: f64 = 695.0;

pub(super) fn draw(ctx: &SlideCtx, dl: &mut DisplayList) {
    let c = ctx.center();
    backdrop(dl, ctx.canvas, BG, Some(Rgba8::rgb(0x1a, 0x1a, 0x2e)));

    let glow_opacity = ctx.ramp((0.0, 90.0), (0.0, 0.6));
    dl.fade(glow_opacity, |dl| glow(dl, c, 400.0, TEAL, 0.15));

    let title_in = ctx.spring(0.0, 15.0, 80.0);
    let dy = 100.0 * (1.0 - title_in);
    dl.group(title_in, Affine::translate(Vec2::new(0.0, dy)), |dl| {
        dl.text(
            "markview.app",
            Point::new(c.x, TITLE_TOP),
            TextStyle::new(140.0, TEAL).centered(),
        );
    });

    dl.fade(ctx.ramp((30.0, 60.0), (0.0, 1.0)), |dl| {
        dl.text(
            "Built entirely with AI prompts",
            Point::new(c.x, SUBTITLE_TOP),
            TextStyle::new(42.0, GRAY_A0).centered(),
        );
    });

    let badge_center = Point::new(c.x, BADGE_CENTER_Y);
    dl.scale_about(ctx.spring(60.0, 12.0, 100.0), badge_center, |dl| {
        powered_by_badge(dl, badge_center, "Powered by");
    });

    dl.fade(ctx.ramp((90.0, 120.0), (0.0, 0.6)), |dl| {
        dl.text(
            "THE 5-MINUTE JOURNEY",
            Point::new(c.x, f64::from(ctx.canvas.height) - 110.0),
            TextStyle::new(24.0, GRAY_55).centered(),
        );
    });
}

/// "<lead> bolt .new" pill centered on `center`; shared with the outro.
pub(super) fn powered_by_badge(dl: &mut DisplayList, center: Point, lead: &str) {
    const GAP: f64 = 16.0;
    let lead_w = mono_width(lead, 28.0);
    let bolt_w = mono_width("bolt", 36.0);
    let tld_w = mono_width(".new", 28.0);
    let content_w = lead_w + GAP + bolt_w + GAP + tld_w;

    let rect = Rect::new(
        center.x - content_w / 2.0 - 32.0,
        center.y - 40.0,
        center.x + content_w / 2.0 + 32.0,
        center.y + 40.0,
    );
    bordered_box(
        dl,
        rect,
        16.0,
        1.0,
        Rgba8::rgba(255, 255, 255, 26),
        Rgba8::rgba(255, 255, 255, 13),
    );

    let mut x = center.x - content_w / 2.0;
    dl.text(lead, Point::new(x, center.y - 17.0), TextStyle::new(28.0, GRAY_66));
    x += lead_w + GAP;
    dl.text("bolt", Point::new(x, center.y - 22.0), TextStyle::new(36.0, WHITE));
    x += bolt_w + GAP;
    dl.text(".new", Point::new(x, center.y - 17.0), TextStyle::new(28.0, GRAY_66));
}
