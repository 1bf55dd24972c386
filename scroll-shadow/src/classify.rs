use crate::geometry::{non_negative, Edge, Orientation, OverflowState, ScrollGeometry};

/// Derive which edges hide content from one geometry sample.
///
/// `offset` is a dead zone in pixels: an edge only counts once the hidden part
/// is strictly larger than the offset, so a scroll position sitting exactly on
/// the bound never flips the edge. An axis whose content fits its viewport
/// never reports overflow, whatever the offset.
pub fn classify(geometry: ScrollGeometry, offset: f64, orientation: Orientation) -> OverflowState {
    let g = geometry.sanitized();
    let offset = non_negative(offset);
    let mut state = OverflowState::EMPTY;

    if orientation.includes_vertical() && g.overflows_vertically() {
        let (start, end) = axis(g.scroll_top, g.client_height, g.scroll_height, offset);
        if start {
            state = state.with(Edge::Top);
        }
        if end {
            state = state.with(Edge::Bottom);
        }
    }

    if orientation.includes_horizontal() && g.overflows_horizontally() {
        let (start, end) = axis(g.scroll_left, g.client_width, g.scroll_width, offset);
        if start {
            state = state.with(Edge::Left);
        }
        if end {
            state = state.with(Edge::Right);
        }
    }

    state
}

fn axis(position: f64, client: f64, extent: f64, offset: f64) -> (bool, bool) {
    (position > offset, position + client < extent - offset)
}
