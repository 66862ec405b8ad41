use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context as _;
use kurbo::Shape;

use crate::eval::evaluator::EvaluatedFrame;
use crate::foundation::core::{Affine, Canvas, Rgba8, Vec2};
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::backend::FrameRGBA;
use crate::render::text::{TextBrushRgba8, TextLayoutEngine};
use crate::scene::draw::{Node, NodeKind, TextAlign, TextStyle};

/// Layouts kept before the cache is dropped and rebuilt.
const LAYOUT_CACHE_MAX: usize = 2048;

/// Options shared by every [`CpuRenderer`] of a render; cheap to clone into workers.
#[derive(Clone, Debug, Default)]
pub struct CpuRendererOpts {
    /// Font file bytes used for all text. Text nodes fail to render without one.
    pub font: Option<Arc<Vec<u8>>>,
}

impl CpuRendererOpts {
    /// Options with the font read from `path`.
    pub fn with_font_file(path: &Path) -> ReelResult<Self> {
        if !path.is_file() {
            return Err(ReelError::MissingInput(path.to_path_buf()));
        }
        let bytes = std::fs::read(path)
            .with_context(|| format!("read font file '{}'", path.display()))?;
        Ok(Self {
            font: Some(Arc::new(bytes)),
        })
    }
}

struct LoadedFont {
    engine: TextLayoutEngine,
    data: vello_cpu::peniko::FontData,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct LayoutKey {
    text: String,
    size_bits: u32,
    line_height_bits: u32,
    max_width_bits: Option<u32>,
    brush: [u8; 4],
}

impl LayoutKey {
    fn new(text: &str, style: &TextStyle) -> Self {
        Self {
            text: text.to_string(),
            size_bits: style.size_px.to_bits(),
            line_height_bits: style.line_height.to_bits(),
            max_width_bits: style.max_width_px.map(f32::to_bits),
            brush: [style.color.r, style.color.g, style.color.b, style.color.a],
        }
    }
}

/// Rasterizes evaluated frames with `vello_cpu`.
pub struct CpuRenderer {
    font: Option<LoadedFont>,
    layouts: HashMap<LayoutKey, Arc<parley::Layout<TextBrushRgba8>>>,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuRenderer {
    /// Create a renderer, registering the configured font if any.
    pub fn new(opts: &CpuRendererOpts) -> ReelResult<Self> {
        let font = match &opts.font {
            Some(bytes) => {
                let engine = TextLayoutEngine::new(bytes)?;
                tracing::debug!(family = engine.family_name(), "cpu renderer font ready");
                let data = vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                    0,
                );
                Some(LoadedFont { engine, data })
            }
            None => None,
        };
        Ok(Self {
            font,
            layouts: HashMap::new(),
            ctx: None,
        })
    }

    /// Rasterize `frame` onto a transparent `canvas`-sized target.
    pub fn render(&mut self, canvas: Canvas, frame: &EvaluatedFrame) -> ReelResult<FrameRGBA> {
        let width = u16::try_from(canvas.width)
            .map_err(|_| ReelError::validation("canvas width exceeds u16"))?;
        let height = u16::try_from(canvas.height)
            .map_err(|_| ReelError::validation("canvas height exceeds u16"))?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let drawn = frame
            .nodes
            .iter()
            .try_for_each(|node| self.draw_node(node, &mut ctx));
        let out = drawn.map(|()| {
            let mut pixmap = vello_cpu::Pixmap::new(width, height);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            FrameRGBA {
                width: canvas.width,
                height: canvas.height,
                data: pixmap.data_as_u8_slice().to_vec(),
                premultiplied: true,
            }
        });
        self.ctx = Some(ctx);
        out
    }

    fn draw_node(&mut self, node: &Node, ctx: &mut vello_cpu::RenderContext) -> ReelResult<()> {
        let opacity = node.opacity.clamp(0.0, 1.0) as f32;
        if opacity <= 0.0 {
            return Ok(());
        }
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(affine_to_cpu(node.transform));
        if opacity < 1.0 {
            ctx.push_opacity_layer(opacity);
        }
        let drawn = match &node.kind {
            NodeKind::Rect { rect, radius, fill } => {
                ctx.set_paint(paint(*fill));
                if *radius > 0.0 {
                    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
                    ctx.fill_path(&shape_to_cpu(&rect.to_rounded_rect(r)));
                } else {
                    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                        rect.x0, rect.y0, rect.x1, rect.y1,
                    ));
                }
                Ok(())
            }
            NodeKind::Circle {
                center,
                radius,
                fill,
            } => {
                ctx.set_paint(paint(*fill));
                ctx.fill_path(&shape_to_cpu(&kurbo::Circle::new(*center, *radius)));
                Ok(())
            }
            NodeKind::Text {
                text,
                origin,
                style,
            } => self.draw_text(text, node.transform, origin.to_vec2(), style, ctx),
        };
        if opacity < 1.0 {
            ctx.pop_layer();
        }
        drawn
    }

    fn draw_text(
        &mut self,
        text: &str,
        transform: Affine,
        origin: Vec2,
        style: &TextStyle,
        ctx: &mut vello_cpu::RenderContext,
    ) -> ReelResult<()> {
        let layout = self.layout_for(text, style)?;
        let Some(font) = self.font.as_ref() else {
            return Err(ReelError::validation(
                "text rendering requires a font file (pass --font)",
            ));
        };

        for line in layout.lines() {
            let advance = f64::from(line.metrics().advance);
            let dx = match style.align {
                TextAlign::Left => 0.0,
                TextAlign::Center => -advance / 2.0,
                TextAlign::Right => -advance,
            };
            let line_tr = transform * Affine::translate(origin + Vec2::new(dx, 0.0));
            ctx.set_transform(affine_to_cpu(line_tr));
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(paint(Rgba8::rgba(brush.r, brush.g, brush.b, brush.a)));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font.data)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    fn layout_for(
        &mut self,
        text: &str,
        style: &TextStyle,
    ) -> ReelResult<Arc<parley::Layout<TextBrushRgba8>>> {
        let key = LayoutKey::new(text, style);
        if let Some(layout) = self.layouts.get(&key) {
            return Ok(layout.clone());
        }
        let Some(font) = self.font.as_mut() else {
            return Err(ReelError::validation(
                "text rendering requires a font file (pass --font)",
            ));
        };
        let layout = Arc::new(font.engine.layout(text, style)?);
        if self.layouts.len() >= LAYOUT_CACHE_MAX {
            self.layouts.clear();
        }
        self.layouts.insert(key, layout.clone());
        Ok(layout)
    }
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn shape_to_cpu(shape: &impl Shape) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in shape.path_elements(0.1) {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
