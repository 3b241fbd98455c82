//! Wire types for the two input dialects.

use serde::Deserialize;
use serde_json::Value;

use crate::dimension::parse_dimension;
use crate::style::StyleMap;

/// A number that may arrive as a JSON number or a unit-suffixed string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl Scalar {
    /// JSON numbers pass through untouched, sign and zero included;
    /// strings go through the dimension parser with its `<= 0` clamp.
    pub fn to_dimension(&self, default: f64) -> f64 {
        match self {
            Scalar::Number(value) => *value,
            Scalar::Text(text) => parse_dimension(text, default),
        }
    }
}

/// Viewport-relative geometry captured for a semantic node. Both the
/// `x`/`y` and the `left`/`top` spellings occur in the wild, sometimes
/// together; `x`/`y` win when both are present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AbsoluteRect {
    pub x: Option<Scalar>,
    pub y: Option<Scalar>,
    pub left: Option<Scalar>,
    pub top: Option<Scalar>,
    pub width: Option<Scalar>,
    pub height: Option<Scalar>,
}

impl AbsoluteRect {
    pub fn width(&self, default: f64) -> f64 {
        dimension_or(&self.width, default)
    }

    pub fn height(&self, default: f64) -> f64 {
        dimension_or(&self.height, default)
    }
}

fn dimension_or(value: &Option<Scalar>, default: f64) -> f64 {
    value.as_ref().map_or(default, |v| v.to_dimension(default))
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Position {
    pub absolute: AbsoluteRect,
}

/// One element snapshot from the capture collaborator (dialect A).
/// Geometry is viewport-relative at capture time; the converter turns
/// it into parent-relative coordinates while walking the tree.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SemanticNode {
    #[serde(rename = "type")]
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub styles: StyleMap,
    pub position: Position,
    pub text: Option<String>,
    pub placeholder: Option<String>,
    pub alt: Option<String>,
    pub children: Vec<SemanticNode>,
}

impl SemanticNode {
    /// Absolute origin with the capture fallbacks: rect `x`/`left`,
    /// then `styles.left`, then `styles.marginLeft` (and the `top`
    /// counterparts), each defaulting to 0.
    pub fn absolute_origin(&self) -> (f64, f64) {
        let rect = &self.position.absolute;
        let x = match rect.x.as_ref().or(rect.left.as_ref()) {
            Some(value) => value.to_dimension(0.0),
            None => self.styles.dimension(&["left", "marginLeft"], 0.0),
        };
        let y = match rect.y.as_ref().or(rect.top.as_ref()) {
            Some(value) => value.to_dimension(0.0),
            None => self.styles.dimension(&["top", "marginTop"], 0.0),
        };
        (x, y)
    }
}

/// One node of a scene-graph document (dialect B). Coordinates are
/// already final; unknown node types degrade to frames.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphNode {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub background_color: Option<Value>,
    pub corner_radius: Option<f64>,
    pub fills: Option<Vec<GraphPaint>>,
    pub characters: Option<String>,
    pub text: Option<String>,
    pub font_name: Option<GraphFontName>,
    pub font_size: Option<f64>,
    pub text_align_horizontal: Option<String>,
    pub text_align_vertical: Option<String>,
    pub style: Option<GraphTextStyle>,
    pub children: Vec<GraphNode>,
}

impl GraphNode {
    /// Text content, preferring `characters` over `text`.
    pub fn text_content(&self) -> Option<&str> {
        self.characters
            .as_deref()
            .or(self.text.as_deref())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphPaint {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub color: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GraphFontName {
    pub family: Option<String>,
    pub style: Option<String>,
}

/// Typography block some scene-graph exporters attach to text nodes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphTextStyle {
    pub font_family: Option<String>,
    pub font_weight: Option<f64>,
    pub font_size: Option<f64>,
    pub line_height_px: Option<f64>,
    pub fills: Option<Vec<GraphPaint>>,
}
