use crate::animation::interp::{InterpolateOpts, interpolate};
use crate::foundation::core::{Affine, Point, Rect, Rgba8, Vec2};
use crate::scene::draw::{DisplayList, TextAlign, TextStyle};
use crate::scene::slides::{
    BLUE, GRAY_66, GRAY_A0, ORANGE, PURPLE, SlideCtx, TEAL, TEXT, WHITE, backdrop, bordered_box,
    mono_width,
};

const FEATURES: [(&str, Rgba8); 12] = [
    ("Markdown → Presentation", TEAL),
    ("Terminal-style UI", PURPLE),
    ("Full Keyboard Navigation", BLUE),
    ("Dark/Light/Blue Themes", ORANGE),
    ("VS Code Syntax Highlighting", TEAL),
    ("Grid View Overview", PURPLE),
    ("Drag & Drop Files/Folders/ZIPs", BLUE),
    ("Image Support", ORANGE),
    ("PDF Export", TEAL),
    ("AI-Powered Creation", PURPLE),
    ("100% Client-side (Privacy)", BLUE),
    ("Works Offline", ORANGE),
];

const COLUMNS: usize = 3;
const LEFT: f64 = 80.0;
const GRID_TOP: f64 = 255.0;
const GRID_BOTTOM: f64 = 818.0;
const GRID_GAP: f64 = 15.0;
/// Stagger between consecutive feature entrances, in frames.
const STAGGER: f64 = 8.0;

pub(super) fn draw(ctx: &SlideCtx, dl: &mut DisplayList) {
    let width = f64::from(ctx.canvas.width);
    let height = f64::from(ctx.canvas.height);
    backdrop(dl, ctx.canvas, Rgba8::rgb(0x0b, 0x0d, 0x12), None);

    dl.fade(ctx.ramp((0.0, 20.0), (0.0, 1.0)), |dl| {
        dl.text(
            "Major Features Delivered",
            Point::new(LEFT, 80.0),
            TextStyle::new(56.0, WHITE),
        );
        dl.text(
            "Each one built through natural language prompts",
            Point::new(LEFT, 165.0),
            TextStyle::new(28.0, GRAY_66),
        );
    });

    let rows = FEATURES.len().div_ceil(COLUMNS);
    let cell_w = (width - 2.0 * LEFT - (COLUMNS - 1) as f64 * GRID_GAP) / COLUMNS as f64;
    let cell_h = (GRID_BOTTOM - GRID_TOP - (rows - 1) as f64 * GRID_GAP) / rows as f64;
    for (i, &(name, color)) in FEATURES.iter().enumerate() {
        let col = (i % COLUMNS) as f64;
        let row = (i / COLUMNS) as f64;
        let x0 = LEFT + col * (cell_w + GRID_GAP);
        let y0 = GRID_TOP + row * (cell_h + GRID_GAP);
        let rect = Rect::new(x0, y0, x0 + cell_w, y0 + cell_h);

        let delay = i as f64 * STAGGER;
        let slide_in = ctx.spring(delay, 15.0, 100.0);
        let check = interpolate(
            ctx.f() - delay - 15.0,
            (0.0, 10.0),
            (0.0, 1.0),
            InterpolateOpts::clamp(),
        );
        let dx = -50.0 * (1.0 - slide_in);
        dl.group(slide_in, Affine::translate(Vec2::new(dx, 0.0)), |dl| {
            feature_item(dl, name, color, check, rect);
        });
    }

    dl.fade(ctx.ramp((600.0, 700.0), (0.0, 1.0)), |dl| {
        let rect = Rect::new(LEFT, GRID_BOTTOM + 40.0, width - LEFT, height - 80.0);
        bordered_box(
            dl,
            rect,
            16.0,
            1.0,
            BLUE.with_alpha(0.3),
            BLUE.with_alpha(0.1),
        );
        dl.text(
            "Major Architecture Shift",
            Point::new(rect.x0 + 30.0, rect.y0 + 30.0),
            TextStyle::new(24.0, BLUE),
        );
        let lead = "One detailed prompt transformed the entire backend to run ";
        let highlight = "100% client-side";
        let body = TextStyle::new(20.0, GRAY_A0);
        let y = rect.y0 + 70.0;
        let mut x = rect.x0 + 30.0;
        dl.text(lead, Point::new(x, y), body);
        x += mono_width(lead, 20.0);
        dl.text(highlight, Point::new(x, y), body.with_color(PURPLE));
        x += mono_width(highlight, 20.0);
        dl.text(
            ". Your data never leaves your browser.",
            Point::new(x, y),
            body,
        );
    });
}

fn feature_item(dl: &mut DisplayList, name: &str, color: Rgba8, check: f64, rect: Rect) {
    bordered_box(
        dl,
        rect,
        12.0,
        1.0,
        color.with_alpha(0.13),
        Rgba8::rgba(255, 255, 255, 5),
    );
    let cy = rect.center().y;
    dl.text(
        name,
        Point::new(rect.x0 + 25.0, cy - 13.0),
        TextStyle::new(22.0, TEXT),
    );
    dl.fade(check, |dl| {
        dl.text(
            "✓",
            Point::new(rect.x1 - 25.0, cy - 17.0),
            TextStyle {
                align: TextAlign::Right,
                ..TextStyle::new(28.0, color)
            },
        );
    });
}
