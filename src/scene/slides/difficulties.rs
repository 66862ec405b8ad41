use crate::foundation::core::{Point, Rect, Rgba8, Vec2};
use crate::scene::draw::{DisplayList, TextStyle};
use crate::scene::slides::{
    BG, GRAY_88, GRAY_A0, ORANGE, SlideCtx, TEAL, TEXT, backdrop, bordered_box, glow,
};

struct Difficulty {
    title: &'static str,
    description: &'static str,
    quote: Option<&'static str>,
    delay: f64,
}

const DIFFICULTIES: [Difficulty; 3] = [
    Difficulty {
        title: "When It Just Didn't Work",
        description: "Sometimes the AI needed multiple attempts to get things right.",
        quote: Some("Nope, still doesn't work"),
        delay: 30.0,
    },
    Difficulty {
        title: "The Rollbacks",
        description: "3 times I had to restore to a previous version when changes broke existing features.",
        quote: None,
        delay: 90.0,
    },
    Difficulty {
        title: "Persistent Bugs",
        description: "Line spacing issues required multiple fix iterations before getting it right.",
        quote: None,
        delay: 150.0,
    },
];

const LEFT: f64 = 80.0;
const CARDS_TOP: f64 = 265.0;
const CARD_H: f64 = 400.0;
const CARD_GAP: f64 = 30.0;
/// Frames after a card appears during which it shakes.
const SHAKE_FRAMES: f64 = 20.0;

pub(super) fn draw(ctx: &SlideCtx, dl: &mut DisplayList) {
    let width = f64::from(ctx.canvas.width);
    let height = f64::from(ctx.canvas.height);
    backdrop(dl, ctx.canvas, BG, Some(Rgba8::rgb(0x1a, 0x0a, 0x0a)));
    glow(dl, ctx.center(), 500.0, ORANGE, 0.08);

    dl.fade(ctx.ramp((0.0, 20.0), (0.0, 1.0)), |dl| {
        dl.text(
            "The Difficulties",
            Point::new(LEFT, 80.0),
            TextStyle::new(56.0, ORANGE),
        );
        dl.text(
            "Because it wasn't all smooth sailing",
            Point::new(LEFT, 165.0),
            TextStyle::new(28.0, GRAY_88),
        );
    });

    let card_w = (width - 2.0 * LEFT - 2.0 * CARD_GAP) / 3.0;
    for (i, d) in DIFFICULTIES.iter().enumerate() {
        let x0 = LEFT + i as f64 * (card_w + CARD_GAP);
        let rect = Rect::new(x0, CARDS_TOP, x0 + card_w, CARDS_TOP + CARD_H);
        let local = ctx.f() - d.delay;
        let shake = if local < SHAKE_FRAMES {
            2.0 * (local * 0.5).sin()
        } else {
            0.0
        };
        dl.scale_about(ctx.spring(d.delay, 12.0, 80.0), rect.center(), |dl| {
            dl.translate(Vec2::new(shake, 0.0), |dl| difficulty_card(dl, d, rect));
        });
    }

    dl.fade(ctx.ramp((800.0, 900.0), (0.0, 1.0)), |dl| {
        let rect = Rect::new(LEFT, height - 250.0, width - LEFT, height - 80.0);
        bordered_box(dl, rect, 16.0, 1.0, TEAL.with_alpha(0.2), TEAL.with_alpha(0.05));
        dl.text(
            "The Takeaway",
            Point::new(rect.x0 + 30.0, rect.y0 + 30.0),
            TextStyle::new(24.0, TEAL),
        );
        dl.text(
            "Each failure taught Bolt more context. The AI learned from its mistakes. \
             Version history is your friend — don't fear the rollback.",
            Point::new(rect.x0 + 30.0, rect.y0 + 70.0),
            TextStyle::new(22.0, TEXT)
                .line_height(1.6)
                .wrap((rect.width() - 60.0) as f32),
        );
    });
}

fn difficulty_card(dl: &mut DisplayList, d: &Difficulty, rect: Rect) {
    bordered_box(dl, rect, 20.0, 1.0, ORANGE.with_alpha(0.2), ORANGE.with_alpha(0.05));
    let inner_w = (rect.width() - 70.0) as f32;
    dl.text(
        d.title,
        Point::new(rect.x0 + 35.0, rect.y0 + 35.0),
        TextStyle::new(28.0, ORANGE).wrap(inner_w),
    );
    dl.text(
        d.description,
        Point::new(rect.x0 + 35.0, rect.y0 + 90.0),
        TextStyle::new(20.0, GRAY_A0).line_height(1.5).wrap(inner_w),
    );
    if let Some(quote) = d.quote {
        let q = Rect::new(rect.x0 + 35.0, rect.y0 + 200.0, rect.x1 - 35.0, rect.y0 + 255.0);
        dl.rounded_rect(q, 10.0, Rgba8::rgba(0, 0, 0, 77));
        dl.rect(Rect::new(q.x0, q.y0, q.x0 + 3.0, q.y1), ORANGE);
        dl.text(
            format!("\"{quote}\""),
            Point::new(q.x0 + 15.0, q.y0 + 16.0),
            TextStyle::new(18.0, TEXT),
        );
    }
}
