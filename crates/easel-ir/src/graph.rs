//! Scene-graph dialect conversion.
//!
//! This dialect already carries final coordinates and typed nodes, so
//! no layout mapping happens here; the work is wrapping, rebasing and
//! paint normalization.

use anyhow::{Context, Result};
use easel_scene::{
    Canvas, Color, FontName, Paint, SceneNode, TextAlignHorizontal, TextAlignVertical,
};
use serde_json::Value;

use crate::color::parse_color_value;
use crate::font::FontResolver;
use crate::input::{GraphNode, GraphPaint};

pub const DEFAULT_CANVAS_WIDTH: f64 = 1440.0;
pub const DEFAULT_CANVAS_HEIGHT: f64 = 900.0;

const ROOT_NAME: &str = "Imported Layout";

/// Channel offset applied to background paints so imported blocks stay
/// visible against a plain canvas.
const BACKGROUND_DARKEN: f64 = 0.3;

const DEFAULT_NODE_SIZE: f64 = 100.0;
const DEFAULT_FONT_SIZE: f64 = 16.0;

pub fn convert(value: &Value, canvas: &mut dyn Canvas, fonts: &mut FontResolver) -> Result<SceneNode> {
    // Canvas envelope: wrap every child in a default-sized root frame.
    if value.get("type").and_then(Value::as_str) == Some("CANVAS")
        && value.get("children").is_some_and(Value::is_array)
    {
        let children: Vec<GraphNode> = serde_json::from_value(value["children"].clone())
            .context("malformed canvas children")?;
        let mut root = canvas.create_frame().context("creating import root")?;
        root.name = value
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(ROOT_NAME)
            .to_string();
        root.fills = Some(Vec::new());
        root.resize(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT);
        for child in &children {
            let node = process_node(child, canvas, fonts)?;
            root.append_child(node);
        }
        return Ok(SceneNode::Frame(root));
    }

    // Frame list: rebase everything onto the union bounding box.
    if let Some(frames_value) = value.get("frames").filter(|v| v.is_array()) {
        let frames: Vec<GraphNode> =
            serde_json::from_value(frames_value.clone()).context("malformed frames array")?;
        let mut root = canvas.create_frame().context("creating import root")?;
        root.name = ROOT_NAME.to_string();
        root.fills = Some(Vec::new());

        let mut processed = Vec::with_capacity(frames.len());
        for frame_data in &frames {
            let mut frame = process_node(frame_data, canvas, fonts)?;
            // Top-level frame fills are cleared so nested content stays
            // visible.
            if let Some(inner) = frame.as_frame_mut() {
                inner.fills = Some(Vec::new());
            }
            processed.push(frame);
        }

        if let Some((min_x, min_y, max_x, max_y)) = union_bounds(&processed) {
            root.x = min_x;
            root.y = min_y;
            root.resize(max_x - min_x, max_y - min_y);
            for mut frame in processed {
                let (x, y) = frame.position();
                frame.set_position(x - min_x, y - min_y);
                root.append_child(frame);
            }
        } else {
            root.resize(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT);
            for frame in processed {
                root.append_child(frame);
            }
        }
        return Ok(SceneNode::Frame(root));
    }

    // Single node.
    let node: GraphNode =
        serde_json::from_value(value.clone()).context("malformed scene-graph node")?;
    process_node(&node, canvas, fonts)
}

fn union_bounds(nodes: &[SceneNode]) -> Option<(f64, f64, f64, f64)> {
    let mut result: Option<(f64, f64, f64, f64)> = None;
    for node in nodes {
        let (x, y, width, height) = node.bounds();
        result = Some(match result {
            None => (x, y, x + width, y + height),
            Some((min_x, min_y, max_x, max_y)) => (
                min_x.min(x),
                min_y.min(y),
                max_x.max(x + width),
                max_y.max(y + height),
            ),
        });
    }
    result
}

fn process_node(
    node: &GraphNode,
    canvas: &mut dyn Canvas,
    fonts: &mut FontResolver,
) -> Result<SceneNode> {
    let mut scene_node = match node.kind.as_str() {
        "RECTANGLE" => {
            let mut rect = canvas.create_rectangle().context("creating rectangle")?;
            rect.corner_radius = node.corner_radius.filter(|r| *r > 0.0);
            SceneNode::Rectangle(rect)
        }
        "TEXT" => SceneNode::Text(create_text(node, canvas, fonts)?),
        // FRAME, GROUP, COMPONENT and anything unknown become frames.
        _ => SceneNode::Frame(canvas.create_frame().context("creating frame")?),
    };

    if let Some(name) = &node.name {
        match &mut scene_node {
            SceneNode::Frame(frame) => frame.name = name.clone(),
            SceneNode::Rectangle(rect) => rect.name = name.clone(),
            SceneNode::Text(text) => text.name = name.clone(),
        }
    }

    // Coordinates in this dialect are already final.
    scene_node.set_position(node.x.unwrap_or(0.0), node.y.unwrap_or(0.0));

    // Text nodes are never explicitly resized; a fixed box would clip
    // against their auto-resize behavior.
    let width = node.width.unwrap_or(DEFAULT_NODE_SIZE);
    let height = node.height.unwrap_or(DEFAULT_NODE_SIZE);
    match &mut scene_node {
        SceneNode::Frame(frame) => frame.resize(width, height),
        SceneNode::Rectangle(rect) => rect.resize(width, height),
        SceneNode::Text(_) => {}
    }

    if !matches!(scene_node, SceneNode::Text(_)) {
        if let Some(background) = &node.background_color {
            let color = parse_color_value(background).darkened(BACKGROUND_DARKEN);
            set_fills(&mut scene_node, vec![Paint::solid(color)]);
        }
        if let Some(paints) = &node.fills {
            let fills = solid_fills(paints, true);
            if !fills.is_empty() {
                set_fills(&mut scene_node, fills);
            }
        }
    }

    if let SceneNode::Frame(frame) = &mut scene_node {
        for child in &node.children {
            let child_node = process_node(child, canvas, fonts)?;
            frame.append_child(child_node);
        }
    }

    Ok(scene_node)
}

fn create_text(
    node: &GraphNode,
    canvas: &mut dyn Canvas,
    fonts: &mut FontResolver,
) -> Result<easel_scene::TextNode> {
    let mut text = canvas.create_text().context("creating text node")?;

    let Some(content) = node.text_content() else {
        return Ok(text);
    };

    let font_name = node.font_name.as_ref();
    let style = node.style.as_ref();
    let family = font_name
        .and_then(|f| f.family.as_deref())
        .or_else(|| style.and_then(|s| s.font_family.as_deref()))
        .unwrap_or("Inter");
    let mut font_style = font_name
        .and_then(|f| f.style.as_deref())
        .unwrap_or("Regular");
    if let Some(weight) = style.and_then(|s| s.font_weight) {
        // This dialect's weight map has no Light bucket.
        font_style = if weight >= 700.0 {
            "Bold"
        } else if weight >= 500.0 {
            "Medium"
        } else {
            "Regular"
        };
    }

    text.font = fonts.resolve(
        canvas,
        FontName::new(family, font_style),
        FontName::fallback(),
    )?;
    text.characters = content.to_string();

    text.font_size = Some(
        node.font_size
            .or_else(|| style.and_then(|s| s.font_size))
            .unwrap_or(DEFAULT_FONT_SIZE),
    );
    if let Some(line_height) = style.and_then(|s| s.line_height_px) {
        text.line_height = Some(line_height);
    }

    if let Some(paints) = style.and_then(|s| s.fills.as_ref()) {
        let fills = solid_fills(paints, false);
        if !fills.is_empty() {
            text.fills = Some(fills);
        }
    }
    if let Some(paints) = &node.fills {
        let fills = solid_fills(paints, false);
        if !fills.is_empty() {
            text.fills = Some(fills);
        }
    }

    text.align_horizontal = match node.text_align_horizontal.as_deref() {
        Some("LEFT") => Some(TextAlignHorizontal::Left),
        Some("CENTER") => Some(TextAlignHorizontal::Center),
        Some("RIGHT") => Some(TextAlignHorizontal::Right),
        Some("JUSTIFIED") => Some(TextAlignHorizontal::Justified),
        _ => None,
    };
    text.align_vertical = match node.text_align_vertical.as_deref() {
        Some("TOP") => Some(TextAlignVertical::Top),
        Some("CENTER") => Some(TextAlignVertical::Center),
        Some("BOTTOM") => Some(TextAlignVertical::Bottom),
        _ => None,
    };

    Ok(text)
}

/// Keeps solid paints; image paints become a flat gray placeholder when
/// `image_placeholders` is set and are dropped otherwise.
fn solid_fills(paints: &[GraphPaint], image_placeholders: bool) -> Vec<Paint> {
    let mut fills = Vec::new();
    for paint in paints {
        match paint.kind.as_str() {
            "SOLID" => {
                if let Some(color) = &paint.color {
                    fills.push(Paint::solid(parse_color_value(color)));
                }
            }
            "IMAGE" if image_placeholders => {
                fills.push(Paint::solid(Color::gray(0.8)));
            }
            _ => {}
        }
    }
    fills
}

fn set_fills(node: &mut SceneNode, fills: Vec<Paint>) {
    match node {
        SceneNode::Frame(frame) => frame.fills = Some(fills),
        SceneNode::Rectangle(rect) => rect.fills = Some(fills),
        SceneNode::Text(text) => text.fills = Some(fills),
    }
}
