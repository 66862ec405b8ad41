use crate::animation::interp::{InterpolateOpts, blink, interpolate};
use crate::foundation::core::{Affine, Point, Rect, Rgba8, Vec2};
use crate::scene::draw::{DisplayList, TextStyle};
use crate::scene::slides::{
    BLUE, GRAY_88, ORANGE, PURPLE, SlideCtx, TEAL, TEXT, backdrop, bordered_box, glow,
    mono_width, terminal_window, typed_chars, typed_prefix,
};

const COMMAND: &str = "Publish this application.";
const CONFETTI: usize = 20;
const CONFETTI_COLORS: [Rgba8; 4] = [TEAL, PURPLE, ORANGE, BLUE];
const CONFETTI_SIZE: f64 = 12.0;

pub(super) fn draw(ctx: &SlideCtx, dl: &mut DisplayList) {
    let c = ctx.center();
    backdrop(
        dl,
        ctx.canvas,
        Rgba8::rgb(0x0a, 0x0a, 0x0a),
        Some(Rgba8::rgb(0x0a, 0x1a, 0x0a)),
    );

    let response = ctx.ramp((150.0, 180.0), (0.0, 1.0));
    dl.fade(response, |dl| glow(dl, c, 400.0, TEAL, 0.15));

    confetti(ctx, dl);

    let terminal_in = ctx.spring(0.0, 12.0, 80.0);
    dl.fade(terminal_in, |dl| {
        dl.text(
            "The Publish Moment",
            Point::new(c.x, 276.0),
            TextStyle::new(48.0, TEAL).centered(),
        );
    });

    let window = Rect::new(c.x - 500.0, 386.0, c.x + 500.0, 666.0);
    dl.scale_about(terminal_in, window.center(), |dl| {
        let content = terminal_window(dl, window, None);
        let shown = typed_chars(ctx, 30.0, 120.0, COMMAND.chars().count());
        let mut line = typed_prefix(COMMAND, shown).to_string();
        if shown < COMMAND.chars().count() && blink(ctx.f()) {
            line.push('_');
        }
        let indent = mono_width("❯ ", 28.0);
        dl.text("❯", Point::new(content.x0, content.y0), TextStyle::new(28.0, TEAL));
        dl.text(
            line,
            Point::new(content.x0 + indent, content.y0),
            TextStyle::new(28.0, TEXT),
        );

        dl.fade(response, |dl| {
            let y = content.y0 + 64.0;
            dl.text(
                "Your site has been successfully published!",
                Point::new(content.x0, y),
                TextStyle::new(24.0, GRAY_88),
            );
            let lead = "You can view it at: ";
            dl.text(lead, Point::new(content.x0, y + 44.0), TextStyle::new(28.0, TEXT));
            dl.text(
                "https://markview.app",
                Point::new(content.x0 + mono_width(lead, 28.0), y + 44.0),
                TextStyle::new(28.0, TEAL),
            );
        });
    });

    let badge = Rect::new(c.x - 230.0, 716.0, c.x + 230.0, 820.0);
    dl.scale_about(ctx.spring(200.0, 10.0, 100.0), badge.center(), |dl| {
        bordered_box(dl, badge, 16.0, 2.0, TEAL.with_alpha(0.4), TEAL.with_alpha(0.1));
        dl.text(
            "Version 75 • LIVE",
            Point::new(badge.center().x, badge.y0 + 20.0),
            TextStyle::new(28.0, TEAL).centered(),
        );
        dl.text(
            "One line to production",
            Point::new(badge.center().x, badge.y0 + 59.0),
            TextStyle::new(20.0, GRAY_88).centered(),
        );
    });
}

/// Falling confetti that fades out over frames 250..350.
fn confetti(ctx: &SlideCtx, dl: &mut DisplayList) {
    let w = f64::from(ctx.canvas.width);
    let h = f64::from(ctx.canvas.height);
    let fade = interpolate(
        ctx.f(),
        (250.0, 350.0),
        (1.0, 0.0),
        InterpolateOpts::clamp(),
    );
    let half = CONFETTI_SIZE / 2.0;
    for i in 0..CONFETTI {
        let fi = i as f64;
        let left = w * (10.0 + ((i * 4) % 80) as f64) / 100.0;
        let top = h * (20.0 + fi.sin() * 30.0) / 100.0;
        let center = Vec2::new(left + half, top + half + (ctx.f() - 250.0));
        let angle = (ctx.f() * 3.0 + fi * 30.0).to_radians();
        let alpha = if i % 3 == 0 { 1.0 } else { 0.6 };
        let color = CONFETTI_COLORS[i % CONFETTI_COLORS.len()];
        let t = Affine::translate(center) * Affine::rotate(angle);
        dl.group(fade * alpha, t, |dl| {
            if i % 2 == 0 {
                dl.circle(Point::ORIGIN, half, color);
            } else {
                dl.rect(Rect::new(-half, -half, half, half), color);
            }
        });
    }
}
