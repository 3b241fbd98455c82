//! Font family/style derivation and host resolution.

use std::collections::HashMap;

use anyhow::Result;
use easel_scene::{Canvas, FontName};
use tracing::warn;

use crate::dimension::parse_number;

/// First comma-separated entry of a CSS font-family list, quotes
/// stripped. Empty input yields `fallback`.
pub fn sanitize_font_family(value: Option<&str>, fallback: &str) -> String {
    let Some(value) = value else {
        return fallback.to_string();
    };
    let first = value
        .split(',')
        .next()
        .map(str::trim)
        .map(|entry| entry.trim_matches(|c| c == '\'' || c == '"'))
        .unwrap_or("");
    if first.is_empty() {
        fallback.to_string()
    } else {
        first.to_string()
    }
}

/// Maps a CSS font-weight onto the common style names: `>= 700` Bold,
/// `>= 500` Medium, `<= 300` Light, otherwise Regular. Non-numeric
/// weights are Regular.
pub fn font_style_for_weight(weight: Option<&str>) -> &'static str {
    let Some(weight) = weight.and_then(parse_number) else {
        return "Regular";
    };
    if weight >= 700.0 {
        "Bold"
    } else if weight >= 500.0 {
        "Medium"
    } else if weight <= 300.0 {
        "Light"
    } else {
        "Regular"
    }
}

/// Resolves requested font pairs against the host font service.
///
/// State is scoped to one conversion: repeated requests for the same
/// pair hit the cache instead of the host. A failed load falls back to
/// the supplied pair, which the host is expected to always have; if
/// even the fallback fails to load, that error propagates and aborts
/// the conversion.
#[derive(Debug, Default)]
pub struct FontResolver {
    resolved: HashMap<FontName, FontName>,
}

impl FontResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(
        &mut self,
        canvas: &mut dyn Canvas,
        requested: FontName,
        fallback: FontName,
    ) -> Result<FontName> {
        if let Some(found) = self.resolved.get(&requested) {
            return Ok(found.clone());
        }
        let applied = match canvas.load_font(&requested) {
            Ok(()) => requested.clone(),
            Err(err) => {
                warn!(
                    family = %requested.family,
                    style = %requested.style,
                    fallback_family = %fallback.family,
                    fallback_style = %fallback.style,
                    error = %err,
                    "font load failed, using fallback"
                );
                canvas.load_font(&fallback)?;
                fallback
            }
        };
        self.resolved.insert(requested, applied.clone());
        Ok(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_scene::Document;

    #[test]
    fn first_family_entry_wins_and_quotes_are_stripped() {
        assert_eq!(
            sanitize_font_family(Some("'Helvetica Neue', Arial, sans-serif"), "Inter"),
            "Helvetica Neue"
        );
        assert_eq!(sanitize_font_family(Some("Roboto"), "Inter"), "Roboto");
        assert_eq!(sanitize_font_family(Some(""), "Inter"), "Inter");
        assert_eq!(sanitize_font_family(None, "Inter"), "Inter");
    }

    #[test]
    fn weight_thresholds() {
        assert_eq!(font_style_for_weight(Some("700")), "Bold");
        assert_eq!(font_style_for_weight(Some("800")), "Bold");
        assert_eq!(font_style_for_weight(Some("500")), "Medium");
        assert_eq!(font_style_for_weight(Some("300")), "Light");
        assert_eq!(font_style_for_weight(Some("400")), "Regular");
        assert_eq!(font_style_for_weight(Some("bold")), "Regular");
        assert_eq!(font_style_for_weight(None), "Regular");
    }

    #[test]
    fn unavailable_font_falls_back() {
        let mut canvas = Document::with_fonts(vec![FontName::fallback()]);
        let mut resolver = FontResolver::new();
        let applied = resolver
            .resolve(
                &mut canvas,
                FontName::new("Papyrus", "Bold"),
                FontName::fallback(),
            )
            .unwrap();
        assert_eq!(applied, FontName::fallback());
    }

    #[test]
    fn cache_returns_prior_resolution() {
        let mut canvas = Document::with_fonts(vec![FontName::fallback()]);
        let mut resolver = FontResolver::new();
        let requested = FontName::new("Papyrus", "Bold");
        let first = resolver
            .resolve(&mut canvas, requested.clone(), FontName::fallback())
            .unwrap();
        // Second resolve of the same pair must not touch the host again.
        let mut empty = Document::with_fonts(vec![]);
        let second = resolver
            .resolve(&mut empty, requested, FontName::fallback())
            .unwrap();
        assert_eq!(first, second);
    }
}
