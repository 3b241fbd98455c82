//! Flexbox to auto-layout mapping.

use easel_scene::{AutoLayout, CounterAxisAlign, LayoutMode, PrimaryAxisAlign};

use crate::style::StyleMap;

/// Derives an auto-layout configuration from flexbox styles.
///
/// Pure function of the style map: non-flex containers map to `None`,
/// and remapping an already-mapped container yields the same result.
/// Wrap, grow/shrink and grid templates are not translated.
pub fn auto_layout(styles: &StyleMap) -> Option<AutoLayout> {
    let display = styles.get("display")?;
    if display != "flex" && display != "inline-flex" {
        return None;
    }

    let mode = if styles.get("flexDirection") == Some("column") {
        LayoutMode::Vertical
    } else {
        LayoutMode::Horizontal
    };

    let gap = styles.dimension(&["gap", "gridGap"], 0.0);

    let primary_axis_align = match styles.get("justifyContent") {
        Some("center") => Some(PrimaryAxisAlign::Center),
        Some("flex-end") | Some("end") => Some(PrimaryAxisAlign::Max),
        Some("space-between") => Some(PrimaryAxisAlign::SpaceBetween),
        _ => None,
    };
    let counter_axis_align = match styles.get("alignItems") {
        Some("center") => Some(CounterAxisAlign::Center),
        Some("flex-end") | Some("end") => Some(CounterAxisAlign::Max),
        _ => None,
    };

    Some(AutoLayout {
        mode,
        item_spacing: gap,
        primary_axis_align,
        counter_axis_align,
    })
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
    fn non_flex_display_maps_to_none() {
        assert!(auto_layout(&styles(&[("display", "block")])).is_none());
        assert!(auto_layout(&StyleMap::new()).is_none());
    }

    #[test]
    fn column_direction_maps_to_vertical() {
        let layout = auto_layout(&styles(&[
            ("display", "flex"),
            ("flexDirection", "column"),
        ]))
        .unwrap();
        assert_eq!(layout.mode, LayoutMode::Vertical);

        let layout = auto_layout(&styles(&[("display", "inline-flex")])).unwrap();
        assert_eq!(layout.mode, LayoutMode::Horizontal);
    }

    #[test]
    fn gap_falls_back_to_grid_gap() {
        let layout = auto_layout(&styles(&[("display", "flex"), ("gridGap", "6px")])).unwrap();
        assert_eq!(layout.item_spacing, 6.0);
    }

    #[test]
    fn alignment_keywords_map_to_axis_aligns() {
        let layout = auto_layout(&styles(&[
            ("display", "flex"),
            ("justifyContent", "space-between"),
            ("alignItems", "flex-end"),
        ]))
        .unwrap();
        assert_eq!(layout.primary_axis_align, Some(PrimaryAxisAlign::SpaceBetween));
        assert_eq!(layout.counter_axis_align, Some(CounterAxisAlign::Max));
    }

    #[test]
    fn mapping_is_idempotent() {
        let input = styles(&[
            ("display", "flex"),
            ("flexDirection", "column"),
            ("gap", "8"),
            ("justifyContent", "center"),
        ]);
        let first = auto_layout(&input).unwrap();
        let second = auto_layout(&input).unwrap();
        assert_eq!(first, second);
    }
}
