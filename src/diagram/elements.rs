//! Diagram assembly: layout nodes and edges to drawable elements.
//!
//! Output order is fixed: one rectangle + label pair per node in layout
//! order, then one arrow per edge in edge order. Element ids are UUID v5
//! digests of what the element depicts and where, so assembling the same
//! input twice yields equal output.

use serde::Serialize;
use uuid::Uuid;

use super::ast::ReferenceEdge;
use super::layout::{LayoutNode, Point};

const STROKE_COLOR: &str = "#334155";
const BACKGROUND_COLOR: &str = "#e2e8f0";
const STROKE_WIDTH: f64 = 2.0;

const LABEL_PADDING: f64 = 10.0;
const LABEL_FONT_SIZE: f64 = 16.0;
const LABEL_LINE_HEIGHT: f64 = 1.25;
// Average glyph advance as a fraction of font size.
const LABEL_CHAR_WIDTH: f64 = LABEL_FONT_SIZE * 0.6;

const ELEMENT_NAMESPACE: Uuid = Uuid::from_u128(0x6c0d_e5b0_a1f4_4c1e_9a57_d1a9_2b3c_4e5f);

// =============================================================================
// ELEMENT TYPES
// =============================================================================

/// A renderer-facing primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DrawableElement {
    Rectangle(Rectangle),
    Text(TextLabel),
    Arrow(Arrow),
}

impl DrawableElement {
    #[must_use]
    pub fn id(&self) -> Uuid {
        match self {
            Self::Rectangle(r) => r.id,
            Self::Text(t) => t.id,
            Self::Arrow(a) => a.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rectangle {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub stroke_color: String,
    pub background_color: String,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Middle,
}

/// Text box. `text` is already wrapped to `width`; lines are `\n`-separated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLabel {
    pub id: Uuid,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    #[serde(rename = "textAlign")]
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    pub stroke_color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Arrowhead {
    Arrow,
}

/// Connector anchored at `(x, y)`. `points` are relative to the anchor, so
/// the geometry needs nothing else to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Arrow {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    /// Bounding box of `points`.
    pub width: f64,
    pub height: f64,
    pub points: Vec<[f64; 2]>,
    pub start_arrowhead: Option<Arrowhead>,
    pub end_arrowhead: Option<Arrowhead>,
    pub stroke_color: String,
}

// =============================================================================
// ASSEMBLY
// =============================================================================

/// Turn laid-out nodes and inferred edges into one ordered element list.
///
/// Edge endpoints index `nodes`. The result has `2 * nodes.len() +
/// edges.len()` elements.
#[must_use]
pub fn assemble(nodes: &[LayoutNode<'_>], edges: &[ReferenceEdge]) -> Vec<DrawableElement> {
    let mut elements = Vec::with_capacity(nodes.len() * 2 + edges.len());

    for node in nodes {
        elements.push(DrawableElement::Rectangle(make_rect(node)));
        elements.push(DrawableElement::Text(make_label(node)));
    }

    for edge in edges {
        let (Some(source), Some(target)) = (nodes.get(edge.from), nodes.get(edge.to)) else {
            tracing::warn!(
                from = edge.from,
                to = edge.to,
                nodes = nodes.len(),
                "edge endpoint outside layout; skipped"
            );
            continue;
        };
        elements.push(DrawableElement::Arrow(make_arrow(source, target)));
    }

    elements
}

// ---- helpers ----

fn make_rect(node: &LayoutNode<'_>) -> Rectangle {
    Rectangle {
        id: element_id(&format!("rect|{}", node_key(node))),
        x: node.top_left.x,
        y: node.top_left.y,
        width: node.size.width,
        height: node.size.height,
        stroke_color: STROKE_COLOR.into(),
        background_color: BACKGROUND_COLOR.into(),
        stroke_width: STROKE_WIDTH,
    }
}

fn make_label(node: &LayoutNode<'_>) -> TextLabel {
    let width = node.size.width - 2.0 * LABEL_PADDING;
    let lines = wrap_label(&node.symbol.label(), width);
    #[allow(clippy::cast_precision_loss)]
    let height = lines.len() as f64 * LABEL_FONT_SIZE * LABEL_LINE_HEIGHT;

    TextLabel {
        id: element_id(&format!("label|{}", node_key(node))),
        text: lines.join("\n"),
        x: node.top_left.x + LABEL_PADDING,
        y: node.center.y - height / 2.0,
        width,
        height,
        font_size: LABEL_FONT_SIZE,
        horizontal_align: HorizontalAlign::Center,
        vertical_align: VerticalAlign::Middle,
        stroke_color: STROKE_COLOR.into(),
    }
}

fn make_arrow(source: &LayoutNode<'_>, target: &LayoutNode<'_>) -> Arrow {
    let Point { x, y } = source.center;
    let dx = target.center.x - x;
    let dy = target.center.y - y;

    Arrow {
        id: element_id(&format!("arrow|{}|{}", node_key(source), node_key(target))),
        x,
        y,
        width: dx.abs(),
        height: dy.abs(),
        points: vec![[0.0, 0.0], [dx, dy]],
        start_arrowhead: None,
        end_arrowhead: Some(Arrowhead::Arrow),
        stroke_color: STROKE_COLOR.into(),
    }
}

fn node_key(node: &LayoutNode<'_>) -> String {
    format!("{}:{}@{},{}", node.symbol.name, node.symbol.kind, node.top_left.x, node.top_left.y)
}

fn element_id(key: &str) -> Uuid {
    Uuid::new_v5(&ELEMENT_NAMESPACE, key.as_bytes())
}

/// Greedy word wrap to `max_width`, estimating glyph width from font size.
/// Words longer than a line are split.
#[must_use]
pub fn wrap_label(text: &str, max_width: f64) -> Vec<String> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let max_chars = ((max_width / LABEL_CHAR_WIDTH).floor() as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        if current_len > 0 && current_len + 1 + chars.len() <= max_chars {
            current.push(' ');
            current.extend(&chars);
            current_len += 1 + chars.len();
            continue;
        }
        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
        }

        while chars.len() > max_chars {
            let rest = chars.split_off(max_chars);
            lines.push(chars.iter().collect());
            chars = rest;
        }
        current_len = chars.len();
        current = chars.into_iter().collect();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "elements_test.rs"]
mod tests;
