use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Scroll measurements of one element, sampled at one instant.
///
/// All values are non-negative. The zeroed geometry is what an element
/// without a layout reports and it never classifies as overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollGeometry {
    pub scroll_top: f64,
    pub scroll_left: f64,
    pub scroll_height: f64,
    pub scroll_width: f64,
    pub client_height: f64,
    pub client_width: f64,
}

impl ScrollGeometry {
    /// Vertical-only geometry: scroll position, content height, viewport height.
    pub const fn vertical(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_left: 0.0,
            scroll_height,
            scroll_width: 0.0,
            client_height,
            client_width: 0.0,
        }
    }

    /// Horizontal-only geometry: scroll position, content width, viewport width.
    pub const fn horizontal(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            scroll_top: 0.0,
            scroll_left,
            scroll_height: 0.0,
            scroll_width,
            client_height: 0.0,
            client_width,
        }
    }

    /// Replace negative and non-finite measurements with zero.
    pub fn sanitized(self) -> Self {
        Self {
            scroll_top: non_negative(self.scroll_top),
            scroll_left: non_negative(self.scroll_left),
            scroll_height: non_negative(self.scroll_height),
            scroll_width: non_negative(self.scroll_width),
            client_height: non_negative(self.client_height),
            client_width: non_negative(self.client_width),
        }
    }

    pub fn overflows_vertically(&self) -> bool {
        self.scroll_height > self.client_height
    }

    pub fn overflows_horizontally(&self) -> bool {
        self.scroll_width > self.client_width
    }
}

pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Which axes take part in overflow detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
    Both,
}

impl Orientation {
    pub const fn includes_vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }

    pub const fn includes_horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown orientation '{0}', expected vertical, horizontal or both")]
pub struct ParseOrientationError(pub String);

impl FromStr for Orientation {
    type Err = ParseOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            "both" => Ok(Self::Both),
            _ => Err(ParseOrientationError(s.to_string())),
        }
    }
}

/// One side of a scrollable viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Whether this edge can be reported under the given orientation.
    pub const fn allowed_by(self, orientation: Orientation) -> bool {
        match self {
            Self::Top | Self::Bottom => orientation.includes_vertical(),
            Self::Left | Self::Right => orientation.includes_horizontal(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The set of edges that currently hide content.
///
/// A value type: the watcher replaces it wholesale and consumers only ever see
/// copies. Equality is set equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OverflowState {
    top: bool,
    bottom: bool,
    left: bool,
    right: bool,
}

impl OverflowState {
    pub const EMPTY: OverflowState = OverflowState {
        top: false,
        bottom: false,
        left: false,
        right: false,
    };

    pub fn from_edges(edges: impl IntoIterator<Item = Edge>) -> Self {
        edges.into_iter().fold(Self::EMPTY, Self::with)
    }

    /// Copy of this state with `edge` added.
    pub const fn with(mut self, edge: Edge) -> Self {
        match edge {
            Edge::Top => self.top = true,
            Edge::Bottom => self.bottom = true,
            Edge::Left => self.left = true,
            Edge::Right => self.right = true,
        }
        self
    }

    pub const fn contains(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
            Edge::Right => self.right,
        }
    }

    pub const fn is_empty(&self) -> bool {
        !(self.top || self.bottom || self.left || self.right)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        Edge::ALL.into_iter().filter(|edge| self.contains(*edge))
    }

    pub const fn has_vertical(&self) -> bool {
        self.top || self.bottom
    }

    pub const fn has_horizontal(&self) -> bool {
        self.left || self.right
    }

    /// True when every edge of `self` is also in `other`.
    pub fn is_subset(&self, other: &OverflowState) -> bool {
        self.iter().all(|edge| other.contains(edge))
    }

    /// Drop edges that the orientation does not allow.
    pub fn restricted_to(self, orientation: Orientation) -> Self {
        Self::from_edges(self.iter().filter(|edge| edge.allowed_by(orientation)))
    }
}

impl FromIterator<Edge> for OverflowState {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self::from_edges(iter)
    }
}

impl fmt::Display for OverflowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, edge) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(edge.as_str())?;
        }
        f.write_str("}")
    }
}
