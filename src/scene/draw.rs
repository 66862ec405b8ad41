use crate::foundation::core::{Affine, Point, Rect, Rgba8, Vec2};

/// Horizontal anchoring of a text node relative to its origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Origin is the left edge of the text box.
    #[default]
    Left,
    /// Origin is the horizontal center.
    Center,
    /// Origin is the right edge.
    Right,
}

/// Text styling for a [`NodeKind::Text`] node.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    /// Font size in pixels.
    pub size_px: f32,
    /// Fill color.
    pub color: Rgba8,
    /// Anchoring relative to the node origin.
    pub align: TextAlign,
    /// Wrap width; `None` lays out a single line per paragraph.
    pub max_width_px: Option<f32>,
    /// Line height as a multiple of `size_px`.
    pub line_height: f32,
}

impl TextStyle {
    /// Left-aligned, unwrapped text.
    pub fn new(size_px: f32, color: Rgba8) -> Self {
        Self {
            size_px,
            color,
            align: TextAlign::Left,
            max_width_px: None,
            line_height: 1.2,
        }
    }

    /// Same style centered on the origin.
    pub fn centered(self) -> Self {
        Self {
            align: TextAlign::Center,
            ..self
        }
    }

    /// Same style in another color.
    pub fn with_color(self, color: Rgba8) -> Self {
        Self { color, ..self }
    }

    /// Same style with line height `lh` (relative to the font size).
    pub fn line_height(self, lh: f32) -> Self {
        Self {
            line_height: lh,
            ..self
        }
    }

    /// Same style wrapped at `width` pixels.
    pub fn wrap(self, width: f32) -> Self {
        Self {
            max_width_px: Some(width),
            ..self
        }
    }
}

/// Drawable primitive.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Filled rectangle with optional corner radius.
    Rect {
        /// Local-space bounds.
        rect: Rect,
        /// Corner radius in pixels.
        radius: f64,
        /// Fill color.
        fill: Rgba8,
    },
    /// Filled circle.
    Circle {
        /// Local-space center.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Fill color.
        fill: Rgba8,
    },
    /// Text whose top edge sits at `origin.y`.
    Text {
        /// UTF-8 text; `\n` starts a new line.
        text: String,
        /// Anchor point; see [`TextAlign`].
        origin: Point,
        /// Styling.
        style: TextStyle,
    },
}

/// One primitive with its accumulated opacity and transform.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Node {
    /// Primitive.
    pub kind: NodeKind,
    /// Effective opacity in `[0, 1]`.
    pub opacity: f64,
    /// Local-to-canvas transform.
    pub transform: Affine,
}

#[derive(Clone, Copy, Debug)]
struct GroupState {
    opacity: f64,
    transform: Affine,
}

/// Flat, painter-ordered list of primitives built by slide drawing code.
///
/// Groups multiply opacity and compose transforms; the stored nodes carry the final values so a
/// renderer never needs to track nesting. Fully transparent nodes are dropped at insertion.
#[derive(Clone, Debug)]
pub struct DisplayList {
    nodes: Vec<Node>,
    stack: Vec<GroupState>,
    current: GroupState,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayList {
    /// Empty list with identity state.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            stack: Vec::new(),
            current: GroupState {
                opacity: 1.0,
                transform: Affine::IDENTITY,
            },
        }
    }

    /// Nodes in paint order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Consume the list, returning its nodes.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Return `true` when nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Draw `f` with `opacity` multiplied in and `transform` applied inside the current one.
    pub fn group(&mut self, opacity: f64, transform: Affine, f: impl FnOnce(&mut Self)) {
        self.stack.push(self.current);
        self.current = GroupState {
            opacity: self.current.opacity * clamp_opacity(opacity),
            transform: self.current.transform * transform,
        };
        f(self);
        if let Some(prev) = self.stack.pop() {
            self.current = prev;
        }
    }

    /// Group with opacity only.
    pub fn fade(&mut self, opacity: f64, f: impl FnOnce(&mut Self)) {
        self.group(opacity, Affine::IDENTITY, f);
    }

    /// Group translated by `offset`.
    pub fn translate(&mut self, offset: Vec2, f: impl FnOnce(&mut Self)) {
        self.group(1.0, Affine::translate(offset), f);
    }

    /// Group scaled by `s` about `center`; a non-positive scale draws nothing.
    pub fn scale_about(&mut self, s: f64, center: Point, f: impl FnOnce(&mut Self)) {
        if s.is_nan() || s <= 0.0 {
            return;
        }
        let t = Affine::translate(center.to_vec2())
            * Affine::scale(s)
            * Affine::translate(-center.to_vec2());
        self.group(1.0, t, f);
    }

    /// Filled rectangle.
    pub fn rect(&mut self, rect: Rect, fill: Rgba8) {
        self.rounded_rect(rect, 0.0, fill);
    }

    /// Filled rectangle with rounded corners.
    pub fn rounded_rect(&mut self, rect: Rect, radius: f64, fill: Rgba8) {
        self.push(NodeKind::Rect {
            rect,
            radius: radius.max(0.0),
            fill,
        });
    }

    /// Filled circle.
    pub fn circle(&mut self, center: Point, radius: f64, fill: Rgba8) {
        if radius <= 0.0 {
            return;
        }
        self.push(NodeKind::Circle {
            center,
            radius,
            fill,
        });
    }

    /// Text anchored at `origin`.
    pub fn text(&mut self, text: impl Into<String>, origin: Point, style: TextStyle) {
        let text = text.into();
        if text.trim().is_empty() {
            return;
        }
        self.push(NodeKind::Text {
            text,
            origin,
            style,
        });
    }

    fn push(&mut self, kind: NodeKind) {
        let alpha = match &kind {
            NodeKind::Rect { fill, .. } | NodeKind::Circle { fill, .. } => fill.a,
            NodeKind::Text { style, .. } => style.color.a,
        };
        if self.current.opacity <= 0.0 || alpha == 0 {
            return;
        }
        self.nodes.push(Node {
            kind,
            opacity: self.current.opacity,
            transform: self.current.transform,
        });
    }
}

// Negative or NaN opacity renders as fully transparent.
fn clamp_opacity(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/draw.rs"]
mod tests;
