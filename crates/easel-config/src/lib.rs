//! Easel configuration system
//!
//! This crate provides centralized configuration management for Easel,
//! loading settings from `easel.toml` as an alternative to environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for Easel
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EaselConfig {
    /// Conversion behavior settings
    pub conversion: ConversionConfig,
    /// Font service settings
    pub fonts: FontsConfig,
}

/// Conversion behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Carry background/text/border colors into the output
    pub preserve_colors: bool,
    /// Carry font size, line height, alignment and decoration
    pub preserve_text_styles: bool,
    /// Map flexbox containers to auto-layout
    pub use_auto_layout: bool,
    /// Accepted from stored settings; currently has no effect
    pub flatten_divs: bool,
    /// Accepted from stored settings; currently has no effect
    pub extract_components: bool,
    /// Family used when a node does not name one
    pub default_font_family: Option<String>,
}

/// Font service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    /// Font pairs the in-memory canvas treats as loadable; empty means
    /// every load succeeds
    pub available: Vec<FontEntry>,
}

/// One loadable family/style pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontEntry {
    pub family: String,
    pub style: String,
}

impl Default for ConversionConfig {
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

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            available: Vec::new(),
        }
    }
}

impl EaselConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the easel.toml configuration file
    ///
    /// # Returns
    /// * `Ok(EaselConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (easel.toml in the
    /// current directory) or return default configuration if file
    /// doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("easel.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file
    /// values. This allows for temporary overrides without modifying
    /// the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("EASEL_PRESERVE_COLORS") {
            self.conversion.preserve_colors = parse_bool(&val);
        }
        if let Ok(val) = std::env::var("EASEL_PRESERVE_TEXT_STYLES") {
            self.conversion.preserve_text_styles = parse_bool(&val);
        }
        if let Ok(val) = std::env::var("EASEL_USE_AUTO_LAYOUT") {
            self.conversion.use_auto_layout = parse_bool(&val);
        }
        if let Ok(val) = std::env::var("EASEL_FLATTEN_DIVS") {
            self.conversion.flatten_divs = parse_bool(&val);
        }
        if let Ok(val) = std::env::var("EASEL_EXTRACT_COMPONENTS") {
            self.conversion.extract_components = parse_bool(&val);
        }
        if let Ok(family) = std::env::var("EASEL_DEFAULT_FONT_FAMILY") {
            self.conversion.default_font_family = Some(family);
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from easel.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

fn parse_bool(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}
