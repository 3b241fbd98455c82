//! Semantic-dialect conversion: captured layout trees to scene nodes.
//!
//! Each input node is handled by one creation strategy selected from
//! its tag. Strategies own the node's intrinsic properties; positioning
//! and opacity are applied afterwards, uniformly, by the walk itself.

use anyhow::{Context, Result, bail};
use easel_scene::{
    Canvas, Color, EdgeInsets, Effect, FontName, Paint, SceneNode, TextAlignHorizontal,
    TextAutoResize, TextDecoration, Vector,
};
use serde_json::Value;
use tracing::debug;

use crate::color::parse_color;
use crate::dimension::{DEFAULT_DIMENSION, parse_positive};
use crate::font::{FontResolver, font_style_for_weight, sanitize_font_family};
use crate::input::SemanticNode;
use crate::layout::auto_layout;
use crate::options::ConversionOptions;
use crate::style::StyleMap;

const VIEWPORT_WIDTH: f64 = 1440.0;
const VIEWPORT_HEIGHT: f64 = 900.0;

pub(crate) struct CreateContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub fonts: &'a mut FontResolver,
    pub options: &'a ConversionOptions,
}

/// One creation strategy per output category.
trait NodeCreator {
    fn create(&self, node: &SemanticNode, ctx: &mut CreateContext<'_>) -> Result<SceneNode>;

    /// Whether an unsized root of this category spans the capture
    /// viewport.
    fn spans_viewport(&self) -> bool {
        false
    }
}

fn creator_for(tag: &str) -> &'static dyn NodeCreator {
    match tag {
        "text" => &TextCreator,
        "img" => &ImageCreator,
        "input" | "textarea" | "select" | "button" => &InputCreator,
        _ => &ContainerCreator,
    }
}

pub fn convert(
    value: &Value,
    canvas: &mut dyn Canvas,
    fonts: &mut FontResolver,
    options: &ConversionOptions,
) -> Result<SceneNode> {
    let root: SemanticNode =
        serde_json::from_value(value.clone()).context("malformed layout capture tree")?;
    let mut ctx = CreateContext {
        canvas,
        fonts,
        options,
    };
    match process_node(&root, None, &mut ctx)? {
        Some(node) => Ok(node),
        None => bail!("input tree has no visible content"),
    }
}

/// Depth-first pre-order walk. The root keeps its own absolute origin;
/// every other node is positioned relative to its input parent's
/// absolute rectangle as captured.
fn process_node(
    node: &SemanticNode,
    parent_origin: Option<(f64, f64)>,
    ctx: &mut CreateContext<'_>,
) -> Result<Option<SceneNode>> {
    if node.styles.is_hidden() {
        debug!(tag = %node.tag, "dropping hidden subtree");
        return Ok(None);
    }

    let creator = creator_for(&node.tag);
    let mut scene_node = creator.create(node, ctx)?;

    // The outermost container stands in for the capture viewport:
    // unsized roots span 1440x900, and a root without a captured
    // background stays white rather than unfilled.
    if parent_origin.is_none()
        && creator.spans_viewport()
        && let Some(frame) = scene_node.as_frame_mut()
    {
        frame.resize(
            node.position.absolute.width(VIEWPORT_WIDTH),
            node.position.absolute.height(VIEWPORT_HEIGHT),
        );
        if frame.fills.is_none() {
            frame.fills = Some(vec![Paint::solid(Color::WHITE)]);
        }
    }

    let origin = node.absolute_origin();
    let (x, y) = match parent_origin {
        Some((parent_x, parent_y)) => (origin.0 - parent_x, origin.1 - parent_y),
        None => origin,
    };
    scene_node.set_position(x, y);

    if let Some(opacity) = node.styles.number("opacity")
        && (0.0..=1.0).contains(&opacity)
    {
        scene_node.set_opacity(opacity);
    }

    // Children of non-container outputs are lost by design of the
    // output model; only frames recurse.
    if let Some(frame) = scene_node.as_frame_mut() {
        for child in &node.children {
            if let Some(child_node) = process_node(child, Some(origin), ctx)? {
                frame.append_child(child_node);
            }
        }
    }

    Ok(Some(scene_node))
}

struct TextCreator;

impl NodeCreator for TextCreator {
    fn create(&self, node: &SemanticNode, ctx: &mut CreateContext<'_>) -> Result<SceneNode> {
        let mut text = ctx.canvas.create_text().context("creating text node")?;

        let default_family =
            sanitize_font_family(ctx.options.default_font_family.as_deref(), "Inter");
        let requested_family = sanitize_font_family(node.styles.get("fontFamily"), &default_family);
        let weight_style = font_style_for_weight(node.styles.get("fontWeight"));

        // The font must be resolved before characters are assigned;
        // the host treats the reverse order as undefined.
        text.font = ctx.fonts.resolve(
            ctx.canvas,
            FontName::new(requested_family, weight_style),
            FontName::new(default_family, "Regular"),
        )?;

        let raw = node
            .text
            .as_deref()
            .or(node.placeholder.as_deref())
            .unwrap_or("");

        if ctx.options.preserve_text_styles {
            if let Some(size) = node.styles.get("fontSize").and_then(parse_positive) {
                text.font_size = Some(size);
            }
            if let Some(line_height) = node.styles.get("lineHeight").and_then(parse_positive) {
                text.line_height = Some(line_height);
            }
            if let Some(spacing) = node.styles.number("letterSpacing") {
                text.letter_spacing = Some(spacing);
            }
            text.align_horizontal = match node.styles.get("textAlign") {
                Some("center") => Some(TextAlignHorizontal::Center),
                Some("right") => Some(TextAlignHorizontal::Right),
                Some("justify") => Some(TextAlignHorizontal::Justified),
                _ => None,
            };
            if let Some(decoration) = node.styles.get("textDecoration") {
                if decoration.contains("underline") {
                    text.decoration = Some(TextDecoration::Underline);
                } else if decoration.contains("line-through") {
                    text.decoration = Some(TextDecoration::Strikethrough);
                }
            }
            if ctx.options.preserve_colors
                && let Some(color) = node.styles.get("color")
            {
                text.fills = Some(vec![Paint::solid(parse_color(color))]);
            }
            text.characters = apply_text_transform(raw, node.styles.get("textTransform"));
            if node.styles.get("textShadow").is_some()
                && let Some(effect) = shadow_effect(&node.styles)
            {
                text.effects = vec![effect];
            }
        } else {
            text.characters = raw.to_string();
        }

        // Wide or wrapping text keeps its captured width and grows
        // vertically; everything else hugs its content on both axes.
        let width = node.position.absolute.width(200.0);
        if width > 800.0 || node.styles.get("whiteSpace") == Some("normal") {
            text.auto_resize = TextAutoResize::Height;
            text.resize(width, 100.0);
        } else {
            text.auto_resize = TextAutoResize::WidthAndHeight;
        }

        Ok(SceneNode::Text(text))
    }
}

struct ImageCreator;

impl NodeCreator for ImageCreator {
    fn create(&self, node: &SemanticNode, ctx: &mut CreateContext<'_>) -> Result<SceneNode> {
        let mut rect = ctx
            .canvas
            .create_rectangle()
            .context("creating image placeholder")?;
        rect.name = match node.alt.as_deref() {
            Some(alt) => format!("img ({alt})"),
            None => "img".to_string(),
        };
        rect.resize(
            node.position.absolute.width(DEFAULT_DIMENSION),
            node.position.absolute.height(DEFAULT_DIMENSION),
        );

        // No image bytes are fetched; a bordered neutral block flags
        // the placeholder.
        rect.fills = Some(vec![Paint::solid(Color::gray(0.85))]);
        rect.strokes = vec![Paint::solid(Color::gray(0.7))];
        rect.stroke_weight = Some(1.0);

        if let Some(radius) = node.styles.get("borderRadius").and_then(parse_positive) {
            rect.corner_radius = Some(radius);
        }

        Ok(SceneNode::Rectangle(rect))
    }
}

struct InputCreator;

impl NodeCreator for InputCreator {
    fn create(&self, node: &SemanticNode, ctx: &mut CreateContext<'_>) -> Result<SceneNode> {
        let mut frame = ctx
            .canvas
            .create_frame()
            .context("creating input placeholder")?;
        let input_type = node.styles.get("type").unwrap_or(&node.tag);
        frame.name = format!("input[type={input_type}]");
        frame.resize(
            node.position.absolute.width(DEFAULT_DIMENSION),
            node.position.absolute.height(40.0),
        );

        frame.fills = Some(vec![Paint::solid(Color::WHITE)]);
        frame.strokes = vec![Paint::solid(Color::gray(0.8))];
        frame.stroke_weight = Some(1.0);
        apply_border_styles(
            &node.styles,
            &mut frame.strokes,
            &mut frame.stroke_weight,
            &mut frame.corner_radius,
        );
        frame.padding = EdgeInsets {
            top: 8.0,
            right: 12.0,
            bottom: 8.0,
            left: 12.0,
        };

        if node.placeholder.is_some() || node.text.is_some() {
            let mut label = ctx.canvas.create_text().context("creating input label")?;
            let font = FontName::fallback();
            ctx.canvas
                .load_font(&font)
                .context("loading input label font")?;
            label.font = font;
            label.characters = node
                .placeholder
                .clone()
                .or_else(|| node.text.clone())
                .unwrap_or_default();
            label.font_size = Some(14.0);
            label.fills = Some(vec![Paint::solid(Color::gray(0.6))]);
            frame.append_child(SceneNode::Text(label));
        }

        Ok(SceneNode::Frame(frame))
    }
}

struct ContainerCreator;

impl NodeCreator for ContainerCreator {
    fn spans_viewport(&self) -> bool {
        true
    }

    fn create(&self, node: &SemanticNode, ctx: &mut CreateContext<'_>) -> Result<SceneNode> {
        let mut frame = ctx.canvas.create_frame().context("creating container")?;
        frame.name = container_name(node);
        frame.resize(
            node.position.absolute.width(DEFAULT_DIMENSION),
            node.position.absolute.height(DEFAULT_DIMENSION),
        );

        if ctx.options.preserve_colors {
            if let Some(background) = node.styles.get("backgroundColor") {
                if background == "transparent" || background == "rgba(0,0,0,0)" {
                    // Explicit no-fill, distinct from "never set".
                    frame.fills = Some(Vec::new());
                } else {
                    frame.fills = Some(vec![Paint::solid(parse_color(background))]);
                }
            }
            apply_border_styles(
                &node.styles,
                &mut frame.strokes,
                &mut frame.stroke_weight,
                &mut frame.corner_radius,
            );
            if let Some(effect) = shadow_effect(&node.styles) {
                frame.effects = vec![effect];
            }
        }

        // Single shorthand value only; per-side padding is not parsed.
        if let Some(padding) = node.styles.get("padding").and_then(parse_positive) {
            frame.padding = EdgeInsets::uniform(padding);
        }

        if ctx.options.use_auto_layout {
            frame.auto_layout = auto_layout(&node.styles);
        }

        Ok(SceneNode::Frame(frame))
    }
}

fn container_name(node: &SemanticNode) -> String {
    let tag = if node.tag.is_empty() { "div" } else { &node.tag };
    let mut name = tag.to_string();
    if let Some(id) = &node.id {
        name.push('#');
        name.push_str(id);
    }
    for class in &node.classes {
        name.push('.');
        name.push_str(class);
    }
    name
}

fn apply_text_transform(content: &str, transform: Option<&str>) -> String {
    match transform {
        Some("uppercase") => content.to_uppercase(),
        Some("lowercase") => content.to_lowercase(),
        Some("capitalize") => capitalize_words(content),
        _ => content.to_string(),
    }
}

// First letter of every word run, like CSS capitalize.
fn capitalize_words(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut prev_is_word = false;
    for ch in content.chars() {
        let is_word = ch.is_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_word = is_word;
    }
    out
}

/// Replaces the default stroke with the styled border when a positive
/// width is present. `border` shorthands contribute their leading
/// width.
fn apply_border_styles(
    styles: &StyleMap,
    strokes: &mut Vec<Paint>,
    stroke_weight: &mut Option<f64>,
    corner_radius: &mut Option<f64>,
) {
    let width = styles.dimension(&["borderWidth", "border"], 0.0);
    if width <= 0.0 {
        return;
    }
    let color = styles.get("borderColor").unwrap_or("#000000");
    *strokes = vec![Paint::solid(parse_color(color))];
    *stroke_weight = Some(width);
    if let Some(radius) = styles.get("borderRadius").and_then(parse_positive) {
        *corner_radius = Some(radius);
    }
}

/// Parses `boxShadow` of the form `Xpx Ypx Bpx Spx <color>` into a
/// drop shadow at a fixed 0.25 alpha. The spread component is dropped.
fn shadow_effect(styles: &StyleMap) -> Option<Effect> {
    let value = styles.get("boxShadow")?;
    let mut parts = value.split_whitespace();
    let mut lengths = [0.0f64; 4];
    for slot in &mut lengths {
        let token = parts.next()?;
        *slot = token.strip_suffix("px")?.parse().ok()?;
    }
    let color_text = parts.collect::<Vec<_>>().join(" ");
    if color_text.is_empty() {
        return None;
    }
    Some(Effect::DropShadow {
        color: parse_color(&color_text).with_alpha(0.25),
        offset: Vector {
            x: lengths[0],
            y: lengths[1],
        },
        radius: lengths[2],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_name_combines_tag_id_and_classes() {
        let node: SemanticNode = serde_json::from_str(
            r#"{"type": "section", "id": "hero", "classes": ["wide", "dark"]}"#,
        )
        .unwrap();
        assert_eq!(container_name(&node), "section#hero.wide.dark");

        let bare: SemanticNode = serde_json::from_str("{}").unwrap();
        assert_eq!(container_name(&bare), "div");
    }

    #[test]
    fn capitalize_uppercases_each_word_start() {
        assert_eq!(capitalize_words("hello there, world"), "Hello There, World");
        assert_eq!(capitalize_words("a1 b2"), "A1 B2");
        assert_eq!(capitalize_words(""), "");
    }

    #[test]
    fn shadow_effect_parses_four_lengths_and_color() {
        let mut styles = StyleMap::new();
        styles.insert("boxShadow", "0px 4px 8px 0px rgba(0, 0, 0, 0.5)");
        let Some(Effect::DropShadow {
            color,
            offset,
            radius,
        }) = shadow_effect(&styles)
        else {
            panic!("expected a drop shadow");
        };
        assert_eq!(offset, Vector { x: 0.0, y: 4.0 });
        assert_eq!(radius, 8.0);
        assert_eq!(color.a, Some(0.25));
    }

    #[test]
    fn shadow_effect_rejects_short_forms() {
        let mut styles = StyleMap::new();
        styles.insert("boxShadow", "0px 4px 8px red");
        assert!(shadow_effect(&styles).is_none());
    }

    #[test]
    fn border_styles_need_positive_width() {
        let mut strokes = vec![Paint::solid(Color::gray(0.8))];
        let mut weight = Some(1.0);
        let mut corner = None;

        let mut styles = StyleMap::new();
        styles.insert("borderColor", "#ff0000");
        apply_border_styles(&styles, &mut strokes, &mut weight, &mut corner);
        assert_eq!(strokes[0].color(), Color::gray(0.8));

        styles.insert("border", "2px solid red");
        styles.insert("borderRadius", "4px");
        apply_border_styles(&styles, &mut strokes, &mut weight, &mut corner);
        assert_eq!(strokes[0].color(), Color::new(1.0, 0.0, 0.0));
        assert_eq!(weight, Some(2.0));
        assert_eq!(corner, Some(4.0));
    }
}
