use crate::foundation::core::{Affine, Point, Rect, Rgba8, Vec2};
use crate::scene::draw::{DisplayList, TextStyle};
use crate::scene::slides::{BLUE, GRAY_88, ORANGE, PURPLE, SlideCtx, TEAL, WHITE, backdrop};

struct Lesson {
    number: &'static str,
    title: &'static str,
    description: &'static str,
    color: Rgba8,
}

const LESSONS: [Lesson; 5] = [
    Lesson {
        number: "01",
        title: "Start with vision, iterate with specifics",
        description: "First prompt captures the dream, later prompts fix the details",
        color: TEAL,
    },
    Lesson {
        number: "02",
        title: "Don't fear rollbacks",
        description: "Version history is your safety net",
        color: PURPLE,
    },
    Lesson {
        number: "03",
        title: "Be conversational but precise",
        description: "\"Nope, still doesn't work\" — AI understands frustration",
        color: ORANGE,
    },
    Lesson {
        number: "04",
        title: "Leverage detailed prompts",
        description: "Role-playing prompts (\"You are a senior developer...\") yield better results",
        color: BLUE,
    },
    Lesson {
        number: "05",
        title: "Ship early, ship often",
        description: "Multiple publishes refined the product iteratively",
        color: TEAL,
    },
];

const LEFT: f64 = 80.0;
const LIST_TOP: f64 = 200.0;
const ROW_H: f64 = 111.0;
const ROW_GAP: f64 = 5.0;
const STAGGER: f64 = 25.0;

pub(super) fn draw(ctx: &SlideCtx, dl: &mut DisplayList) {
    let right = f64::from(ctx.canvas.width) - LEFT;
    backdrop(dl, ctx.canvas, Rgba8::rgb(0x0d, 0x0d, 0x0d), None);

    dl.fade(ctx.ramp((0.0, 20.0), (0.0, 1.0)), |dl| {
        dl.text(
            "Key Lessons Learned",
            Point::new(LEFT, 80.0),
            TextStyle::new(56.0, WHITE),
        );
    });

    for (i, lesson) in LESSONS.iter().enumerate() {
        let top = LIST_TOP + i as f64 * (ROW_H + ROW_GAP);
        let slide_in = ctx.spring(i as f64 * STAGGER, 15.0, 80.0);
        let dy = 30.0 * (1.0 - slide_in);
        dl.group(slide_in, Affine::translate(Vec2::new(0.0, dy)), |dl| {
            dl.fade(0.8, |dl| {
                dl.text(
                    lesson.number,
                    Point::new(LEFT, top + 20.0),
                    TextStyle::new(48.0, lesson.color),
                );
            });
            dl.text(
                lesson.title,
                Point::new(LEFT + 105.0, top + 20.0),
                TextStyle::new(28.0, WHITE),
            );
            dl.text(
                lesson.description,
                Point::new(LEFT + 105.0, top + 62.0),
                TextStyle::new(20.0, GRAY_88),
            );
            dl.rect(
                Rect::new(LEFT, top + ROW_H - 1.0, right, top + ROW_H),
                Rgba8::rgb(0x22, 0x22, 0x22),
            );
        });
    }
}
