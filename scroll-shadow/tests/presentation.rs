use scroll_shadow::{Edge, Orientation, OverflowState, ShadowStyle, StyleMap, SIZE_PROPERTY};

fn overrides(pairs: &[(&str, &str)]) -> StyleMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_size_property_in_pixels() {
    let fragment = ShadowStyle::build(
        OverflowState::EMPTY,
        40.0,
        Orientation::Vertical,
        &StyleMap::new(),
    );
    assert_eq!(fragment.style.get(SIZE_PROPERTY).map(String::as_str), Some("40px"));
    assert_eq!(fragment.css_text(), "--scroll-shadow-size: 40px");
}

#[test]
fn test_fractional_size_keeps_precision() {
    let fragment = ShadowStyle::build(
        OverflowState::EMPTY,
        12.5,
        Orientation::Vertical,
        &StyleMap::new(),
    );
    assert_eq!(fragment.style.get(SIZE_PROPERTY).map(String::as_str), Some("12.5px"));
}

#[test]
fn test_caller_overrides_win() {
    let fragment = ShadowStyle::build(
        OverflowState::EMPTY,
        40.0,
        Orientation::Vertical,
        &overrides(&[(SIZE_PROPERTY, "8px"), ("max-height", "300px")]),
    );
    assert_eq!(fragment.style.get(SIZE_PROPERTY).map(String::as_str), Some("8px"));
    assert_eq!(fragment.style.get("max-height").map(String::as_str), Some("300px"));
}

#[test]
fn test_negative_size_is_clamped() {
    let fragment = ShadowStyle::build(
        OverflowState::EMPTY,
        -5.0,
        Orientation::Vertical,
        &StyleMap::new(),
    );
    assert_eq!(fragment.style.get(SIZE_PROPERTY).map(String::as_str), Some("0px"));
}

#[test]
fn test_orientation_attribute() {
    let fragment = ShadowStyle::build(
        OverflowState::EMPTY,
        40.0,
        Orientation::Both,
        &StyleMap::new(),
    );
    assert_eq!(fragment.data.get("data-orientation").map(String::as_str), Some("both"));
    assert_eq!(fragment.data.len(), 1);
}

#[test]
fn test_one_flag_per_edge() {
    let state = OverflowState::from_edges([Edge::Bottom]);
    let fragment = ShadowStyle::build(state, 40.0, Orientation::Vertical, &StyleMap::new());

    assert!(fragment.has_attribute("data-bottom-scroll"));
    assert!(!fragment.has_attribute("data-top-scroll"));
    assert!(!fragment.has_attribute("data-top-bottom-scroll"));
}

#[test]
fn test_both_edges_of_axis_add_combined_flag() {
    let state = OverflowState::from_edges([Edge::Top, Edge::Bottom, Edge::Left]);
    let fragment = ShadowStyle::build(state, 40.0, Orientation::Both, &StyleMap::new());

    assert!(fragment.has_attribute("data-top-scroll"));
    assert!(fragment.has_attribute("data-bottom-scroll"));
    assert!(fragment.has_attribute("data-top-bottom-scroll"));
    assert!(fragment.has_attribute("data-left-scroll"));
    assert!(!fragment.has_attribute("data-left-right-scroll"));
}

#[test]
fn test_edges_outside_orientation_are_dropped() {
    let state = OverflowState::from_edges([Edge::Top, Edge::Right]);
    let fragment = ShadowStyle::build(state, 40.0, Orientation::Horizontal, &StyleMap::new());

    assert!(fragment.has_attribute("data-right-scroll"));
    assert!(!fragment.has_attribute("data-top-scroll"));
    assert_eq!(fragment.state, OverflowState::from_edges([Edge::Right]));
}
