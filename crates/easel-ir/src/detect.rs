//! Input dialect classification.

use serde_json::Value;

/// Which converter handles the document. Decided once at the root; the
/// two dialects never mix within one conversion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Scene-graph export: final coordinates, typed nodes.
    SceneGraph,
    /// Captured semantic layout: tag labels plus computed styles.
    Semantic,
}

const GRAPH_TYPE_TAGS: [&str; 5] = ["CANVAS", "FRAME", "RECTANGLE", "TEXT", "IMAGE"];

pub fn detect(value: &Value) -> Dialect {
    let has_frames = value.get("frames").is_some_and(Value::is_array);
    let has_graph_tag = value
        .get("type")
        .and_then(Value::as_str)
        .is_some_and(|tag| GRAPH_TYPE_TAGS.contains(&tag));
    if has_frames || has_graph_tag {
        Dialect::SceneGraph
    } else {
        Dialect::Semantic
    }
}
