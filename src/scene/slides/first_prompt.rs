use crate::animation::interp::blink;
use crate::foundation::core::{Affine, Point, Rect, Rgba8, Vec2};
use crate::scene::draw::{DisplayList, TextStyle};
use crate::scene::slides::{
    SlideCtx, TEAL, TEXT, backdrop, bordered_box, mono_width, terminal_window, typed_chars,
    typed_prefix,
};

/// The opening prompt, verbatim including its typos and line breaks.
pub(crate) const FIRST_PROMPT: &str = "create a georgious web app, named markview,
that renders a markdown pdf, separate pages by ---,
and allowing to use the left/right arrows to go to
the next/previous page, and keys up/down pgup/pgdn
to show page overflow if its below the fold.
It used terminal fonts. Is specialized in showing
beautifully code on the page. The code doesn't wrap.
But the other presentation texst flows nicely and wraps.
Make it simple and beautiful. The app should really
look like a terminal (maybe like gemini-cli).
If the user press w, the app goes in light mode,
else in dark mode. The user can drop a markdown file
to view the UI";

const TYPE_START: f64 = 30.0;
const TYPE_END: f64 = 600.0;
const PROMPT_SIZE: f64 = 26.0;

pub(super) fn draw(ctx: &SlideCtx, dl: &mut DisplayList) {
    let c = ctx.center();
    backdrop(dl, ctx.canvas, Rgba8::rgb(0x14, 0x14, 0x14), None);

    let title_in = ctx.spring(0.0, 15.0, 80.0);
    let dy = -50.0 * (1.0 - title_in);
    dl.group(title_in, Affine::translate(Vec2::new(0.0, dy)), |dl| {
        dl.text(
            "PROMPT #1 — The Vision",
            Point::new(c.x, 92.0),
            TextStyle::new(48.0, TEAL).centered(),
        );
    });

    let window = Rect::new(c.x - 700.0, 202.0, c.x + 700.0, 867.0);
    let content = terminal_window(dl, window, Some("bolt.new — prompt"));

    let total = FIRST_PROMPT.chars().count();
    let shown = typed_chars(ctx, TYPE_START, TYPE_END, total);
    let mut body = typed_prefix(FIRST_PROMPT, shown).to_string();
    if blink(ctx.f()) {
        body.push('_');
    }
    let style = TextStyle::new(PROMPT_SIZE as f32, TEXT).line_height(1.6);
    dl.text("❯", Point::new(content.x0, content.y0), style.with_color(TEAL));
    let indent = mono_width("❯ ", PROMPT_SIZE);
    dl.text(
        body,
        Point::new(content.x0 + indent, content.y0),
        style.wrap((content.width() - indent) as f32),
    );

    dl.fade(ctx.ramp((650.0, 700.0), (0.0, 1.0)), |dl| {
        let label = "One prompt. The entire vision.";
        let w = mono_width("✓ ", 28.0) + mono_width(label, 24.0) + 60.0;
        let rect = Rect::new(c.x - w / 2.0, 917.0, c.x + w / 2.0, 987.0);
        bordered_box(dl, rect, 12.0, 1.0, TEAL.with_alpha(0.3), TEAL.with_alpha(0.1));
        dl.text(
            "✓",
            Point::new(rect.x0 + 30.0, rect.y0 + 18.0),
            TextStyle::new(28.0, TEAL),
        );
        dl.text(
            label,
            Point::new(rect.x0 + 30.0 + mono_width("✓ ", 28.0), rect.y0 + 21.0),
            TextStyle::new(24.0, TEAL),
        );
    });
}
