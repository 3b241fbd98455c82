//! Easel: JSON layout import for scene-graph canvases.
//!
//! The heavy lifting lives in the member crates; this crate re-exports
//! the conversion entry points and bridges the TOML configuration into
//! runtime types.

pub use easel_config::EaselConfig;
pub use easel_ir::{ConversionOptions, Dialect, convert, convert_into, convert_str};
pub use easel_scene::{Canvas, Document, FontName, SceneNode};

/// Conversion options derived from a loaded configuration.
pub fn options_from_config(config: &EaselConfig) -> ConversionOptions {
    let conversion = &config.conversion;
    ConversionOptions {
        preserve_colors: conversion.preserve_colors,
        preserve_text_styles: conversion.preserve_text_styles,
        use_auto_layout: conversion.use_auto_layout,
        flatten_divs: conversion.flatten_divs,
        extract_components: conversion.extract_components,
        default_font_family: conversion.default_font_family.clone(),
    }
}

/// In-memory canvas honoring the configured font list. An empty list
/// means every font load succeeds.
pub fn document_from_config(config: &EaselConfig) -> Document {
    if config.fonts.available.is_empty() {
        Document::new()
    } else {
        Document::with_fonts(
            config
                .fonts
                .available
                .iter()
                .map(|entry| FontName::new(entry.family.clone(), entry.style.clone()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_fields_map_onto_options() {
        let mut config = EaselConfig::default();
        config.conversion.preserve_colors = false;
        config.conversion.default_font_family = Some("Karla".to_string());

        let options = options_from_config(&config);
        assert!(!options.preserve_colors);
        assert!(options.use_auto_layout);
        assert_eq!(options.default_font_family.as_deref(), Some("Karla"));
    }

    #[test]
    fn configured_fonts_restrict_the_document() {
        let mut config = EaselConfig::default();
        config.fonts.available.push(easel_config::FontEntry {
            family: "Inter".to_string(),
            style: "Regular".to_string(),
        });

        let mut doc = document_from_config(&config);
        assert!(doc.load_font(&FontName::fallback()).is_ok());
        assert!(doc.load_font(&FontName::new("Futura", "Bold")).is_err());
    }

    #[test]
    fn end_to_end_import_inserts_one_root() {
        let value = serde_json::json!({
            "type": "div",
            "position": {"absolute": {"width": 10, "height": 10}}
        });
        let mut doc = Document::new();
        convert_into(&value, &mut doc, &ConversionOptions::default()).unwrap();
        assert_eq!(doc.roots().len(), 1);
        assert_eq!(doc.roots()[0].name(), "div");
    }
}
