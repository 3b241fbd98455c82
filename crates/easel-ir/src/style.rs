//! Access to the captured computed-style snapshot of a node.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dimension::{parse_dimension, parse_number};

/// Computed-style snapshot keyed by camelCase property name.
///
/// The capture side omits values that are not meaningfully set
/// (`"none"`, `"normal"`, `"auto"`, `"static"`, transparent black,
/// empty strings), so an absent key means "apply your own default",
/// never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// First key that is present, in argument order.
    pub fn first_of<'a>(&'a self, keys: &[&str]) -> Option<&'a str> {
        keys.iter().find_map(|key| self.get(key))
    }

    /// Dimension-parsed value of the first present key, or `default`
    /// when none is present or the value is unusable.
    pub fn dimension(&self, keys: &[&str], default: f64) -> f64 {
        self.first_of(keys)
            .map_or(default, |value| parse_dimension(value, default))
    }

    /// Signed numeric value of `key`, if it parses at all.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(parse_number)
    }

    /// Whether the element was invisible at capture time.
    pub fn is_hidden(&self) -> bool {
        self.get("display") == Some("none") || self.get("visibility") == Some("hidden")
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles(pairs: &[(&str, &str)]) -> StyleMap {
        let mut map = StyleMap::new();
        for (key, value) in pairs {
            map.insert(*key, *value);
        }
        map
    }

    #[test]
    fn hidden_detection_covers_both_properties() {
        assert!(styles(&[("display", "none")]).is_hidden());
        assert!(styles(&[("visibility", "hidden")]).is_hidden());
        assert!(!styles(&[("display", "flex")]).is_hidden());
        assert!(!StyleMap::new().is_hidden());
    }

    #[test]
    fn absent_keys_use_the_caller_default() {
        let map = styles(&[("padding", "12px")]);
        assert_eq!(map.dimension(&["padding"], 0.0), 12.0);
        assert_eq!(map.dimension(&["margin", "padding"], 0.0), 12.0);
        assert_eq!(map.dimension(&["margin"], 0.0), 0.0);
    }

    #[test]
    fn first_of_respects_argument_order() {
        let map = styles(&[("gridGap", "4px"), ("gap", "8px")]);
        assert_eq!(map.first_of(&["gap", "gridGap"]), Some("8px"));
        assert_eq!(map.first_of(&["rowGap", "gridGap"]), Some("4px"));
        assert_eq!(map.first_of(&["rowGap"]), None);
    }
}
