use serde::{Deserialize, Serialize};

/// Conversion knobs. A partial JSON object merges over the defaults, so
/// stored settings from older versions keep working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversionOptions {
    /// Carry background/text/border colors into the output.
    pub preserve_colors: bool,
    /// Carry font size, line height, alignment and decoration.
    pub preserve_text_styles: bool,
    /// Map flexbox containers to auto-layout.
    pub use_auto_layout: bool,
    /// Accepted from stored settings; currently has no effect on output.
    pub flatten_divs: bool,
    /// Accepted from stored settings; currently has no effect on output.
    pub extract_components: bool,
    /// Family used when a node does not name one. `None` means "Inter".
    pub default_font_family: Option<String>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            preserve_colors: true,
            preserve_text_styles: true,
            use_auto_layout: true,
            flatten_divs: false,
            extract_components: false,
            default_font_family: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_merges_over_defaults() {
        let options: ConversionOptions =
            serde_json::from_str(r#"{"preserveColors": false}"#).unwrap();
        assert!(!options.preserve_colors);
        assert!(options.preserve_text_styles);
        assert!(options.use_auto_layout);
        assert!(options.default_font_family.is_none());
    }
}
