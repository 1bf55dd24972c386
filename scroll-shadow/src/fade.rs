//! Fade gradients for hosts that paint shadows cell by cell.

use palette::{IntoColor, Oklab, Srgb};

use crate::geometry::{Edge, OverflowState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Blend `from` towards `to` in Oklab; `amount` 0 is `from`, 1 is `to`.
pub fn mix(from: Rgb, to: Rgb, amount: f32) -> Rgb {
    let t = amount.clamp(0.0, 1.0);
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }
    let a = to_oklab(from);
    let b = to_oklab(to);
    from_oklab(Oklab::new(
        a.l + (b.l - a.l) * t,
        a.a + (b.a - a.a) * t,
        a.b + (b.b - a.b) * t,
    ))
}

/// Colors for a shadow `steps` cells deep.
///
/// Index 0 is the cell on the edge and is closest to `shadow`; the ramp fades
/// towards `surface` moving inwards.
pub fn fade_ramp(steps: u16, surface: Rgb, shadow: Rgb) -> Vec<Rgb> {
    (0..steps)
        .map(|i| mix(surface, shadow, 1.0 - f32::from(i) / f32::from(steps)))
        .collect()
}

/// Shadow strength at cell `(x, y)` of a `viewport` (width, height).
///
/// Only edges in `state` cast a shadow. Each reaches `size` cells inwards and
/// fades linearly; overlapping shadows take the strongest.
pub fn shade(state: OverflowState, viewport: (u16, u16), size: u16, x: u16, y: u16) -> f32 {
    let (width, height) = viewport;
    if size == 0 || x >= width || y >= height {
        return 0.0;
    }

    state
        .iter()
        .map(|edge| {
            let distance = match edge {
                Edge::Top => y,
                Edge::Bottom => height - 1 - y,
                Edge::Left => x,
                Edge::Right => width - 1 - x,
            };
            if distance < size {
                1.0 - f32::from(distance) / f32::from(size)
            } else {
                0.0
            }
        })
        .fold(0.0, f32::max)
}

fn to_oklab(color: Rgb) -> Oklab {
    Srgb::new(color.r, color.g, color.b)
        .into_format::<f32>()
        .into_color()
}

fn from_oklab(lab: Oklab) -> Rgb {
    let srgb: Srgb = lab.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();
    Rgb::new(r, g, b)
}
