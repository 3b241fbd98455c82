//! Layout import pipeline.
//!
//! Converts a JSON layout document into scene nodes for a host
//! [`Canvas`]. Two input dialects are accepted and auto-detected at the
//! root: captured semantic layouts (tag labels plus computed styles)
//! and scene-graph exports (typed nodes with final coordinates).
//!
//! The converter is a pure function of `(document, options)` given the
//! canvas capability; recoverable conditions (unknown colors, bad
//! dimensions, missing fonts) degrade to documented defaults, and only
//! invalid input or canvas primitive failures surface as errors.

pub mod color;
pub mod detect;
pub mod dimension;
pub mod font;
pub mod graph;
pub mod input;
pub mod layout;
pub mod options;
pub mod semantic;
pub mod style;

pub use detect::Dialect;
pub use options::ConversionOptions;

use anyhow::{Context, Result, bail};
use easel_scene::{Canvas, SceneNode};
use serde_json::Value;
use tracing::info;

/// Converts a parsed layout document into a scene-node tree.
///
/// Fails before any node is created when the input is missing, and
/// propagates canvas primitive failures; nodes already built stay with
/// the canvas, there is no rollback.
pub fn convert(
    value: &Value,
    canvas: &mut dyn Canvas,
    options: &ConversionOptions,
) -> Result<SceneNode> {
    if value.is_null() {
        bail!("no input data to convert");
    }
    let mut fonts = font::FontResolver::new();
    let dialect = detect::detect(value);
    info!(?dialect, "converting layout document");
    match dialect {
        Dialect::SceneGraph => graph::convert(value, canvas, &mut fonts),
        Dialect::Semantic => semantic::convert(value, canvas, &mut fonts, options),
    }
}

/// Parses `input` as JSON and converts it.
pub fn convert_str(
    input: &str,
    canvas: &mut dyn Canvas,
    options: &ConversionOptions,
) -> Result<SceneNode> {
    let value: Value = serde_json::from_str(input).context("invalid JSON input")?;
    convert(&value, canvas, options)
}

/// Converts and hands the finished root tree to the canvas.
pub fn convert_into(
    value: &Value,
    canvas: &mut dyn Canvas,
    options: &ConversionOptions,
) -> Result<()> {
    let root = convert(value, canvas, options)?;
    canvas.insert(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_scene::Document;

    #[test]
    fn null_input_is_rejected_before_any_output() {
        let mut canvas = Document::new();
        let err = convert(
            &Value::Null,
            &mut canvas,
            &ConversionOptions::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("no input data"));
        assert!(canvas.roots().is_empty());
    }

    #[test]
    fn invalid_json_is_rejected() {
        let mut canvas = Document::new();
        let result = convert_str("not json", &mut canvas, &ConversionOptions::default());
        assert!(result.is_err());
    }
}
