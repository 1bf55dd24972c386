//! Per-instance shadow configuration.

use crate::geometry::{non_negative, Orientation};

/// Default shadow size in pixels.
pub const DEFAULT_SIZE: f64 = 40.0;

/// Configuration owned by the caller of a scroll shadow.
///
/// Negative or non-finite sizes and offsets have no meaning for a shadow and
/// are clamped to zero instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowConfig {
    /// Shadow size in pixels.
    pub size: f64,
    /// Dead zone in pixels before an edge counts as overflowing.
    pub offset: f64,
    /// When false no observers are attached and the state stays empty.
    pub enabled: bool,
    /// Axes that take part in overflow detection.
    pub orientation: Orientation,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            offset: 0.0,
            enabled: true,
            orientation: Orientation::Vertical,
        }
    }
}

impl ShadowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shadow size in pixels.
    pub fn size(mut self, size: f64) -> Self {
        self.size = clamp("size", size);
        self
    }

    /// Set the scroll offset that must be exceeded before a shadow shows.
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = clamp("offset", offset);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Copy with any out-of-range field clamped.
    ///
    /// Fields are public, so the watcher normalizes every config it receives.
    pub fn normalized(self) -> Self {
        Self {
            size: clamp("size", self.size),
            offset: clamp("offset", self.offset),
            ..self
        }
    }
}

fn clamp(field: &str, value: f64) -> f64 {
    let clamped = non_negative(value);
    if clamped != value {
        log::debug!("[shadow] clamping {field} {value} to {clamped}");
    }
    clamped
}
