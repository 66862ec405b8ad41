//! The nine slides of the presentation.
//!
//! Every slide is a pure function of [`SlideCtx`]: the same local frame always yields the same
//! display list. Layout is fixed for a 1920x1080 canvas and assumes a monospace font, so inline
//! runs are positioned with [`mono_width`] instead of measured glyph advances.

mod difficulties;
mod features;
mod first_prompt;
mod iteration;
mod lessons;
mod outro;
mod publish;
mod stats;
mod title;

use crate::animation::interp::{InterpolateOpts, SpringConfig, interpolate, spring};
use crate::foundation::core::{Canvas, Fps, Point, Rect, Rgba8};
use crate::scene::draw::{DisplayList, TextStyle};

/// Identity of a slide; serialized names match the voiceover section names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SlideKind {
    /// Opening title card.
    Title,
    /// Headline numbers.
    Stats,
    /// The first prompt typed into a terminal.
    FirstPrompt,
    /// Three phases of prompt refinement.
    Iteration,
    /// What went wrong.
    Difficulties,
    /// Feature grid.
    Features,
    /// The publish command.
    Publish,
    /// Lessons learned.
    Lessons,
    /// Closing card.
    Outro,
}

impl SlideKind {
    /// All slides in presentation order.
    pub const ALL: [SlideKind; 9] = [
        SlideKind::Title,
        SlideKind::Stats,
        SlideKind::FirstPrompt,
        SlideKind::Iteration,
        SlideKind::Difficulties,
        SlideKind::Features,
        SlideKind::Publish,
        SlideKind::Lessons,
        SlideKind::Outro,
    ];

    /// Canonical name, identical to the voiceover section name.
    pub fn name(self) -> &'static str {
        match self {
            SlideKind::Title => "title",
            SlideKind::Stats => "stats",
            SlideKind::FirstPrompt => "firstPrompt",
            SlideKind::Iteration => "iteration",
            SlideKind::Difficulties => "difficulties",
            SlideKind::Features => "features",
            SlideKind::Publish => "publish",
            SlideKind::Lessons => "lessons",
            SlideKind::Outro => "outro",
        }
    }

    /// Parse a canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// Append this slide's content at `ctx` to `dl`.
    pub fn draw(self, ctx: &SlideCtx, dl: &mut DisplayList) {
        match self {
            SlideKind::Title => title::draw(ctx, dl),
            SlideKind::Stats => stats::draw(ctx, dl),
            SlideKind::FirstPrompt => first_prompt::draw(ctx, dl),
            SlideKind::Iteration => iteration::draw(ctx, dl),
            SlideKind::Difficulties => difficulties::draw(ctx, dl),
            SlideKind::Features => features::draw(ctx, dl),
            SlideKind::Publish => publish::draw(ctx, dl),
            SlideKind::Lessons => lessons::draw(ctx, dl),
            SlideKind::Outro => outro::draw(ctx, dl),
        }
    }
}

/// Per-frame inputs of a slide.
#[derive(Clone, Copy, Debug)]
pub struct SlideCtx {
    /// Frame relative to the slide's first frame.
    pub frame: u64,
    /// Timeline frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
}

impl SlideCtx {
    /// Local frame as `f64`.
    pub fn f(&self) -> f64 {
        self.frame as f64
    }

    /// Spring progress started `delay` frames into the slide.
    pub fn spring(&self, delay: f64, damping: f64, stiffness: f64) -> f64 {
        spring(
            self.f() - delay,
            self.fps,
            SpringConfig::new(damping, stiffness),
        )
    }

    /// Linear ramp from `from` to `to` over frames `[start, end]`, clamped after `end`.
    pub fn ramp(&self, (start, end): (f64, f64), (from, to): (f64, f64)) -> f64 {
        interpolate(
            self.f(),
            (start, end),
            (from, to),
            InterpolateOpts::clamp_right(),
        )
    }

    /// Canvas center.
    pub fn center(&self) -> Point {
        self.canvas.center()
    }
}

pub(crate) const BG: Rgba8 = Rgba8::rgb(0x0a, 0x0a, 0x0a);
pub(crate) const TEAL: Rgba8 = Rgba8::rgb(0x00, 0xd4, 0xaa);
pub(crate) const PURPLE: Rgba8 = Rgba8::rgb(0xa8, 0x55, 0xf7);
pub(crate) const ORANGE: Rgba8 = Rgba8::rgb(0xf9, 0x73, 0x16);
pub(crate) const BLUE: Rgba8 = Rgba8::rgb(0x3b, 0x82, 0xf6);
pub(crate) const WHITE: Rgba8 = Rgba8::rgb(0xff, 0xff, 0xff);
pub(crate) const TEXT: Rgba8 = Rgba8::rgb(0xe5, 0xe5, 0xe5);
pub(crate) const GRAY_A0: Rgba8 = Rgba8::rgb(0xa0, 0xa0, 0xa0);
pub(crate) const GRAY_88: Rgba8 = Rgba8::rgb(0x88, 0x88, 0x88);
pub(crate) const GRAY_66: Rgba8 = Rgba8::rgb(0x66, 0x66, 0x66);
pub(crate) const GRAY_55: Rgba8 = Rgba8::rgb(0x55, 0x55, 0x55);
pub(crate) const GRAY_33: Rgba8 = Rgba8::rgb(0x33, 0x33, 0x33);
pub(crate) const TERMINAL_BG: Rgba8 = Rgba8::rgb(0x1e, 0x1e, 0x1e);
pub(crate) const TERMINAL_BAR: Rgba8 = Rgba8::rgb(0x2d, 0x2d, 0x2d);

/// Advance of one monospace glyph, as a fraction of the font size.
const MONO_ADVANCE_EM: f64 = 0.6;

/// Approximate width of `text` in a monospace font at `size_px`.
pub(crate) fn mono_width(text: &str, size_px: f64) -> f64 {
    text.chars().count() as f64 * size_px * MONO_ADVANCE_EM
}

/// Fill the whole canvas with `base` and lay a soft `tint` glow across the middle.
pub(crate) fn backdrop(dl: &mut DisplayList, canvas: Canvas, base: Rgba8, tint: Option<Rgba8>) {
    dl.rect(canvas.rect(), base);
    if let Some(tint) = tint {
        let r = f64::from(canvas.width.max(canvas.height)) * 0.6;
        glow(dl, canvas.center(), r, tint, 0.8);
    }
}

/// Radial falloff approximated by concentric translucent circles.
pub(crate) fn glow(dl: &mut DisplayList, center: Point, radius: f64, color: Rgba8, strength: f64) {
    const RINGS: usize = 6;
    let per_ring = (strength / RINGS as f64).clamp(0.0, 1.0);
    for i in 0..RINGS {
        let r = radius * (1.0 - i as f64 / RINGS as f64);
        dl.circle(center, r, color.with_alpha(per_ring));
    }
}

/// Rounded box with a thin border.
///
/// An opaque `fill` is drawn inset over a border-colored shape. A translucent fill would let
/// that shape show through, so the border is drawn as four straight edge strips instead.
pub(crate) fn bordered_box(
    dl: &mut DisplayList,
    rect: Rect,
    radius: f64,
    border_px: f64,
    border: Rgba8,
    fill: Rgba8,
) {
    if fill.a == u8::MAX {
        dl.rounded_rect(rect, radius, border);
        dl.rounded_rect(
            rect.inset(-border_px),
            (radius - border_px).max(0.0),
            fill,
        );
        return;
    }
    dl.rounded_rect(rect, radius, fill);
    let (x0, y0, x1, y1) = (rect.x0, rect.y0, rect.x1, rect.y1);
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    dl.rect(Rect::new(x0 + r, y0, x1 - r, y0 + border_px), border);
    dl.rect(Rect::new(x0 + r, y1 - border_px, x1 - r, y1), border);
    dl.rect(Rect::new(x0, y0 + r, x0 + border_px, y1 - r), border);
    dl.rect(Rect::new(x1 - border_px, y0 + r, x1, y1 - r), border);
}

/// Terminal window frame with traffic-light buttons; returns the content area.
pub(crate) fn terminal_window(dl: &mut DisplayList, rect: Rect, caption: Option<&str>) -> Rect {
    const BAR_H: f64 = 44.0;
    bordered_box(dl, rect, 16.0, 1.0, GRAY_33, TERMINAL_BG);
    dl.rect(
        Rect::new(rect.x0 + 1.0, rect.y0 + 8.0, rect.x1 - 1.0, rect.y0 + BAR_H),
        TERMINAL_BAR,
    );
    dl.rounded_rect(
        Rect::new(rect.x0 + 1.0, rect.y0 + 1.0, rect.x1 - 1.0, rect.y0 + 24.0),
        15.0,
        TERMINAL_BAR,
    );
    dl.rect(
        Rect::new(rect.x0 + 1.0, rect.y0 + BAR_H, rect.x1 - 1.0, rect.y0 + BAR_H + 1.0),
        GRAY_33,
    );

    let cy = rect.y0 + BAR_H / 2.0;
    let buttons = [
        Rgba8::rgb(0xff, 0x5f, 0x57),
        Rgba8::rgb(0xfe, 0xbc, 0x2e),
        Rgba8::rgb(0x28, 0xc8, 0x40),
    ];
    for (i, c) in buttons.into_iter().enumerate() {
        dl.circle(Point::new(rect.x0 + 27.0 + 24.0 * i as f64, cy), 7.0, c);
    }
    if let Some(caption) = caption {
        dl.text(
            caption,
            Point::new(rect.x0 + 102.0, cy - 10.0),
            TextStyle::new(16.0, GRAY_88),
        );
    }

    Rect::new(rect.x0 + 40.0, rect.y0 + BAR_H + 40.0, rect.x1 - 40.0, rect.y1 - 40.0)
}

/// `count` characters of `text`, never splitting a UTF-8 sequence.
pub(crate) fn typed_prefix(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Number of characters revealed by a typing effect over frames `[start, end]`.
pub(crate) fn typed_chars(ctx: &SlideCtx, start: f64, end: f64, total: usize) -> usize {
    ctx.ramp((start, end), (0.0, total as f64)).floor().max(0.0) as usize
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/slides.rs"]
mod tests;
