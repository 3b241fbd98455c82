use anyhow::{Result, bail};
use tracing::debug;

use crate::node::{FrameNode, RectangleNode, SceneNode, TextNode};
use crate::paint::FontName;

/// Host-canvas capability the converter builds against.
///
/// The host owns node construction, font loading and root insertion.
/// Fonts must be loaded through [`Canvas::load_font`] before any text
/// node using them receives characters; the converter enforces that
/// ordering, the canvas only reports success or failure.
pub trait Canvas {
    fn create_frame(&mut self) -> Result<FrameNode>;
    fn create_rectangle(&mut self) -> Result<RectangleNode>;
    fn create_text(&mut self) -> Result<TextNode>;

    /// Resolves a family/style pair against the host's font service.
    fn load_font(&mut self, font: &FontName) -> Result<()>;

    /// Takes ownership of a finished root node.
    fn insert(&mut self, node: SceneNode) -> Result<()>;
}

/// In-memory canvas used by tests and the snapshot tool.
///
/// By default every font load succeeds. [`Document::with_fonts`] builds
/// a restrictive canvas that only resolves the listed pairs, which is
/// how fallback behavior gets exercised.
#[derive(Debug, Default)]
pub struct Document {
    roots: Vec<SceneNode>,
    fonts: Option<Vec<FontName>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fonts(fonts: Vec<FontName>) -> Self {
        Self {
            roots: Vec::new(),
            fonts: Some(fonts),
        }
    }

    pub fn roots(&self) -> &[SceneNode] {
        &self.roots
    }

    pub fn into_roots(self) -> Vec<SceneNode> {
        self.roots
    }
}

impl Canvas for Document {
    fn create_frame(&mut self) -> Result<FrameNode> {
        Ok(FrameNode::default())
    }

    fn create_rectangle(&mut self) -> Result<RectangleNode> {
        Ok(RectangleNode::default())
    }

    fn create_text(&mut self) -> Result<TextNode> {
        Ok(TextNode::default())
    }

    fn load_font(&mut self, font: &FontName) -> Result<()> {
        match &self.fonts {
            None => Ok(()),
            Some(available) if available.contains(font) => Ok(()),
            Some(_) => bail!("font not available: {} {}", font.family, font.style),
        }
    }

    fn insert(&mut self, node: SceneNode) -> Result<()> {
        debug!(name = node.name(), "inserting root node");
        self.roots.push(node);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_document_loads_any_font() {
        let mut doc = Document::new();
        assert!(doc.load_font(&FontName::new("Comic Sans MS", "Bold")).is_ok());
    }

    #[test]
    fn restrictive_document_rejects_unlisted_fonts() {
        let mut doc = Document::with_fonts(vec![FontName::fallback()]);
        assert!(doc.load_font(&FontName::fallback()).is_ok());
        assert!(doc.load_font(&FontName::new("Roboto", "Regular")).is_err());
    }

    #[test]
    fn inserted_roots_are_retained_in_order() {
        let mut doc = Document::new();
        let mut first = FrameNode::default();
        first.name = "a".to_string();
        let mut second = FrameNode::default();
        second.name = "b".to_string();
        doc.insert(SceneNode::Frame(first)).unwrap();
        doc.insert(SceneNode::Frame(second)).unwrap();
        let names: Vec<_> = doc.roots().iter().map(|n| n.name()).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
