use std::borrow::Cow;

use crate::foundation::error::{ReelError, ReelResult};
use crate::scene::draw::TextStyle;

/// RGBA8 brush color used by Parley text layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

/// Parley layout state bound to one registered font family.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_name: String,
}

impl TextLayoutEngine {
    /// Register `font_bytes` and use its first family for every layout.
    pub(crate) fn new(font_bytes: &[u8]) -> ReelResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            ReelError::validation("no font families registered from font bytes")
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ReelError::validation("registered font family has no name"))?
            .to_string();

        tracing::debug!(family = %family_name, "registered text font");
        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
        })
    }

    /// Family name used for layouts.
    pub(crate) fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Shape and lay out `text` with `style`. Lines start at x = 0; alignment is applied by the
    /// caller per line.
    pub(crate) fn layout(
        &mut self,
        text: &str,
        style: &TextStyle,
    ) -> ReelResult<parley::Layout<TextBrushRgba8>> {
        if !style.size_px.is_finite() || style.size_px <= 0.0 {
            return Err(ReelError::validation(
                "text size_px must be finite and > 0",
            ));
        }
        if !style.line_height.is_finite() || style.line_height <= 0.0 {
            return Err(ReelError::validation(
                "text line_height must be finite and > 0",
            ));
        }

        let brush = TextBrushRgba8 {
            r: style.color.r,
            g: style.color.g,
            b: style.color.b,
            a: style.color.a,
        };
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.size_px));
        builder.push_default(parley::style::StyleProperty::LineHeight(
            parley::style::LineHeight::FontSizeRelative(style.line_height),
        ));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        match style.max_width_px {
            Some(w) if w.is_finite() && w > 0.0 => {
                layout.break_all_lines(Some(w));
                layout.align(
                    Some(w),
                    parley::Alignment::Start,
                    parley::AlignmentOptions::default(),
                );
            }
            _ => layout.break_all_lines(None),
        }
        Ok(layout)
    }
}
