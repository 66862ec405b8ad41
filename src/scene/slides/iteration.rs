use crate::animation::interp::{InterpolateOpts, interpolate};
use crate::foundation::core::{Affine, Point, Rect, Rgba8, Vec2};
use crate::scene::draw::{DisplayList, TextStyle};
use crate::scene::slides::{
    BLUE, GRAY_33, GRAY_66, GRAY_88, ORANGE, PURPLE, SlideCtx, TEAL, TEXT, WHITE, backdrop,
    bordered_box, mono_width,
};

struct Card {
    title: &'static str,
    prompt: &'static str,
    response: &'static str,
    color: Rgba8,
}

struct Phase {
    title: &'static str,
    cards: [Card; 2],
}

const PHASES: [Phase; 3] = [
    Phase {
        title: "Syntax Highlighting",
        cards: [
            Card {
                title: "The Request",
                prompt: "Create a code viewer that supports syntax highlighting with colors",
                response: "Added highlight.js with multi-language support",
                color: TEAL,
            },
            Card {
                title: "The Refinement",
                prompt: "Make it look like VS Code dark theme. The green isn't very readable.",
                response: "Updated to VS Code Dark+ color palette",
                color: PURPLE,
            },
        ],
    },
    Phase {
        title: "Fixing Issues",
        cards: [
            Card {
                title: "The Bug",
                prompt: "There is still extra space between each line, like you're adding an extra line",
                response: "Fixed line-height and removed extra whitespace",
                color: ORANGE,
            },
            Card {
                title: "More Polish",
                prompt: "Include line numbers if displaying multi-line code blocks",
                response: "Added line numbers with proper alignment",
                color: BLUE,
            },
        ],
    },
    Phase {
        title: "Grid View Feature",
        cards: [
            Card {
                title: "Major Feature",
                prompt: "Display all pages in a grid layout with keyboard navigation",
                response: "Built thumbnail grid with arrow keys, Enter, and Escape",
                color: TEAL,
            },
            Card {
                title: "State Management",
                prompt: "Remember the last highlighted position when reopening the grid",
                response: "Added persistent state for grid selection",
                color: PURPLE,
            },
        ],
    },
];

/// Frames over which all three phases are spread.
const PHASE_SPAN: f64 = 1800.0;
const LEFT: f64 = 80.0;
const CARDS_TOP: f64 = 310.0;
const CARD_H: f64 = 311.0;
const CARD_GAP: f64 = 25.0;

/// Index of the phase shown at local frame `frame`, in `0..3`.
pub(super) fn phase_index(frame: f64) -> usize {
    let raw = interpolate(
        frame,
        (0.0, PHASE_SPAN),
        (0.0, PHASES.len() as f64),
        InterpolateOpts::clamp(),
    );
    (raw.floor().max(0.0) as usize).min(PHASES.len() - 1)
}

pub(super) fn draw(ctx: &SlideCtx, dl: &mut DisplayList) {
    let right = f64::from(ctx.canvas.width) - LEFT;
    backdrop(dl, ctx.canvas, Rgba8::rgb(0x0d, 0x0d, 0x0d), None);

    dl.fade(ctx.ramp((0.0, 20.0), (0.0, 1.0)), |dl| {
        dl.text(
            "The Iteration Phase",
            Point::new(LEFT, 80.0),
            TextStyle::new(48.0, WHITE),
        );
        dl.text(
            "Refining through conversation",
            Point::new(LEFT, 148.0),
            TextStyle::new(28.0, GRAY_66),
        );
    });

    let idx = phase_index(ctx.f());
    let phase = &PHASES[idx];

    let badge = format!("Phase {} of {}", idx + 1, PHASES.len());
    let badge_w = mono_width(&badge, 20.0) + 32.0;
    let badge_rect = Rect::new(LEFT, 230.0, LEFT + badge_w, 270.0);
    bordered_box(dl, badge_rect, 8.0, 1.0, TEAL.with_alpha(0.3), TEAL.with_alpha(0.1));
    dl.text(
        badge,
        Point::new(LEFT + 16.0, 238.0),
        TextStyle::new(20.0, TEAL),
    );
    dl.text(
        phase.title,
        Point::new(badge_rect.x1 + 20.0, 228.0),
        TextStyle::new(36.0, WHITE),
    );

    for (i, card) in phase.cards.iter().enumerate() {
        let top = CARDS_TOP + i as f64 * (CARD_H + CARD_GAP);
        let slide_in = ctx.spring(30.0 + i as f64 * 45.0, 15.0, 80.0);
        let dx = 100.0 * (1.0 - slide_in);
        dl.group(slide_in, Affine::translate(Vec2::new(dx, 0.0)), |dl| {
            prompt_card(dl, card, Rect::new(LEFT, top, right, top + CARD_H));
        });
    }

    let dot_y = f64::from(ctx.canvas.height) - 86.0;
    let cx = ctx.center().x;
    for i in 0..PHASES.len() {
        let x = cx + (i as f64 - 1.0) * 27.0;
        let color = if i <= idx { TEAL } else { GRAY_33 };
        dl.circle(Point::new(x, dot_y), 6.0, color);
    }
}

fn prompt_card(dl: &mut DisplayList, card: &Card, rect: Rect) {
    bordered_box(
        dl,
        rect,
        16.0,
        1.0,
        card.color.with_alpha(0.27),
        Rgba8::rgb(0x11, 0x11, 0x11),
    );
    dl.rect(Rect::new(rect.x0, rect.y0, rect.x0 + 4.0, rect.y1), card.color);

    let inner_w = rect.width() - 60.0;
    dl.text(
        card.title,
        Point::new(rect.x0 + 30.0, rect.y0 + 30.0),
        TextStyle::new(24.0, card.color),
    );
    let quote = Rect::new(rect.x0 + 30.0, rect.y0 + 75.0, rect.x1 - 30.0, rect.y0 + 165.0);
    dl.rounded_rect(quote, 8.0, Rgba8::rgba(0, 0, 0, 77));
    dl.text(
        format!("\"{}\"", card.prompt),
        Point::new(quote.x0 + 15.0, quote.y0 + 15.0),
        TextStyle::new(20.0, TEXT)
            .line_height(1.5)
            .wrap((inner_w - 30.0) as f32),
    );
    dl.text(
        format!("→ {}", card.response),
        Point::new(rect.x0 + 30.0, quote.y1 + 15.0),
        TextStyle::new(18.0, GRAY_88),
    );
}
