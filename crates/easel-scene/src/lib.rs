//! Scene-graph node model and host-canvas contract for Easel.
//!
//! The converter in `easel-ir` builds trees of these nodes and hands the
//! finished root to a [`Canvas`]. The canvas owns node creation, font
//! loading and tree insertion; everything else is plain data.

pub mod canvas;
pub mod node;
pub mod paint;

pub use canvas::{Canvas, Document};
pub use node::{
    AutoLayout, CounterAxisAlign, EdgeInsets, FrameNode, LayoutMode, PrimaryAxisAlign,
    RectangleNode, SceneNode, TextAlignHorizontal, TextAlignVertical, TextAutoResize,
    TextDecoration, TextNode,
};
pub use paint::{Color, Effect, FontName, Paint, Vector};
