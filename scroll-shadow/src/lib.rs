pub mod classify;
pub mod config;
pub mod element;
pub mod error;
pub mod fade;
pub mod geometry;
pub mod presentation;
pub mod sampler;
pub mod terminal;
pub mod watcher;

pub use classify::classify;
pub use config::ShadowConfig;
pub use element::ScrollElement;
pub use error::ObserveError;
pub use fade::{fade_ramp, shade, Rgb};
pub use geometry::{Edge, Orientation, OverflowState, ParseOrientationError, ScrollGeometry};
pub use presentation::{ShadowStyle, StyleFragment, StyleMap, SIZE_PROPERTY};
pub use sampler::{sample, ScrollHost};
pub use terminal::{apply_event, apply_event_with, Chrome};
pub use watcher::{
    ChangeSource, Coalesce, FrameScheduler, Listener, OverflowWatcher, Phase, Subscription,
};
