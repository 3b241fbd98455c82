use serde::{Deserialize, Serialize};

use crate::paint::{Effect, FontName, Paint};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl EdgeInsets {
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayoutMode {
    Horizontal,
    Vertical,
}

/// Main-axis alignment. Absence means the host default (start/min).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PrimaryAxisAlign {
    Center,
    Max,
    SpaceBetween,
}

/// Cross-axis alignment. Absence means the host default (start/min).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounterAxisAlign {
    Center,
    Max,
}

/// Auto-layout configuration for a container node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoLayout {
    pub mode: LayoutMode,
    #[serde(default)]
    pub item_spacing: f64,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_axis_align: Option<PrimaryAxisAlign>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_axis_align: Option<CounterAxisAlign>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignHorizontal {
    Left,
    Center,
    Right,
    Justified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAlignVertical {
    Top,
    Center,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextDecoration {
    Underline,
    Strikethrough,
}

/// How a text node tracks its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextAutoResize {
    /// Fixed width, height follows the content.
    Height,
    /// Both axes follow the content.
    WidthAndHeight,
}

impl Default for TextAutoResize {
    fn default() -> Self {
        TextAutoResize::WidthAndHeight
    }
}

/// Container node. The only output category that may hold children.
///
/// `fills: None` means "never set" (host default paint applies);
/// `fills: Some(vec![])` is the explicit no-fill state used for
/// transparent backgrounds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameNode {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "EdgeInsets::is_zero")]
    pub padding: EdgeInsets,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_layout: Option<AutoLayout>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneNode>,
}

impl FrameNode {
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn append_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }
}

/// Leaf rectangle, used for image placeholders and plain shapes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RectangleNode {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strokes: Vec<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl RectangleNode {
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }
}

/// Text leaf. The `font` must be resolved (loaded through the canvas)
/// before `characters` is assigned; the converter's font resolver
/// guarantees that ordering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextNode {
    pub name: String,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    pub characters: String,
    pub font: FontName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_horizontal: Option<TextAlignHorizontal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_vertical: Option<TextAlignVertical>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decoration: Option<TextDecoration>,
    pub auto_resize: TextAutoResize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Paint>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub effects: Vec<Effect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl TextNode {
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = Some(width);
        self.height = Some(height);
    }
}

/// One node of the output tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SceneNode {
    Frame(FrameNode),
    Rectangle(RectangleNode),
    Text(TextNode),
}

impl SceneNode {
    pub fn name(&self) -> &str {
        match self {
            SceneNode::Frame(node) => &node.name,
            SceneNode::Rectangle(node) => &node.name,
            SceneNode::Text(node) => &node.name,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        match self {
            SceneNode::Frame(node) => (node.x, node.y),
            SceneNode::Rectangle(node) => (node.x, node.y),
            SceneNode::Text(node) => (node.x, node.y),
        }
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        match self {
            SceneNode::Frame(node) => {
                node.x = x;
                node.y = y;
            }
            SceneNode::Rectangle(node) => {
                node.x = x;
                node.y = y;
            }
            SceneNode::Text(node) => {
                node.x = x;
                node.y = y;
            }
        }
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        match self {
            SceneNode::Frame(node) => node.opacity = Some(opacity),
            SceneNode::Rectangle(node) => node.opacity = Some(opacity),
            SceneNode::Text(node) => node.opacity = Some(opacity),
        }
    }

    /// Whether this output category may hold children.
    pub fn supports_children(&self) -> bool {
        matches!(self, SceneNode::Frame(_))
    }

    pub fn as_frame(&self) -> Option<&FrameNode> {
        match self {
            SceneNode::Frame(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_frame_mut(&mut self) -> Option<&mut FrameNode> {
        match self {
            SceneNode::Frame(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            SceneNode::Text(node) => Some(node),
            _ => None,
        }
    }

    /// Bounding box as `(x, y, width, height)`. Text nodes without an
    /// explicit size report zero extents; they size themselves to
    /// content on the host.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        match self {
            SceneNode::Frame(node) => (node.x, node.y, node.width, node.height),
            SceneNode::Rectangle(node) => (node.x, node.y, node.width, node.height),
            SceneNode::Text(node) => (
                node.x,
                node.y,
                node.width.unwrap_or(0.0),
                node.height.unwrap_or(0.0),
            ),
        }
    }
}
