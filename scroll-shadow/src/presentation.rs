//! Style output for a scroll shadow host.

use std::collections::BTreeMap;

use crate::geometry::{non_negative, Edge, Orientation, OverflowState};

/// Custom property carrying the shadow size.
pub const SIZE_PROPERTY: &str = "--scroll-shadow-size";

/// Style declarations or attributes, keyed by name.
pub type StyleMap = BTreeMap<String, String>;

/// Everything a host needs to draw the shadows.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleFragment {
    /// Inline style: the size property merged beneath caller overrides.
    pub style: StyleMap,
    /// `data-*` attributes: orientation plus one flag per overflowing edge.
    pub data: StyleMap,
    /// The raw state, for hosts that prefer their own encoding.
    pub state: OverflowState,
    pub orientation: Orientation,
}

impl StyleFragment {
    /// Inline style as CSS text, e.g. `--scroll-shadow-size: 40px`.
    pub fn css_text(&self) -> String {
        self.style
            .iter()
            .map(|(key, value)| format!("{key}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }
}

/// Maps an overflow state onto style output.
pub struct ShadowStyle;

impl ShadowStyle {
    /// Build the style fragment.
    ///
    /// `overrides` are the caller's inline styles and win over
    /// [`SIZE_PROPERTY`] when they name it too.
    pub fn build(
        state: OverflowState,
        size: f64,
        orientation: Orientation,
        overrides: &StyleMap,
    ) -> StyleFragment {
        let mut style = StyleMap::new();
        style.insert(SIZE_PROPERTY.to_string(), format!("{}px", non_negative(size)));
        style.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));

        let state = state.restricted_to(orientation);
        let mut data = StyleMap::new();
        data.insert("data-orientation".to_string(), orientation.as_str().to_string());
        for edge in state.iter() {
            data.insert(edge_attribute(edge), "true".to_string());
        }
        if state.contains(Edge::Top) && state.contains(Edge::Bottom) {
            data.insert("data-top-bottom-scroll".to_string(), "true".to_string());
        }
        if state.contains(Edge::Left) && state.contains(Edge::Right) {
            data.insert("data-left-right-scroll".to_string(), "true".to_string());
        }

        StyleFragment {
            style,
            data,
            state,
            orientation,
        }
    }
}

/// Attribute flagging overflow on one edge, e.g. `data-top-scroll`.
pub fn edge_attribute(edge: Edge) -> String {
    format!("data-{}-scroll", edge.as_str())
}
