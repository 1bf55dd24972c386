use std::rc::Weak;

use crate::error::ObserveError;
use crate::geometry::ScrollGeometry;
use crate::watcher::{ChangeSource, Listener, Subscription};

/// A scrollable element the watcher can measure and observe.
pub trait ScrollHost {
    /// Current scroll geometry, or `None` while the element has no layout.
    fn geometry(&self) -> Option<ScrollGeometry>;

    /// Register `listener` for one kind of change.
    ///
    /// The listener stays registered until the returned subscription is
    /// dropped or detached.
    fn observe(&self, source: ChangeSource, listener: Listener) -> Result<Subscription, ObserveError>;
}

/// Read the host's geometry.
///
/// A host that is gone or not laid out yet reads as the zeroed geometry,
/// which classifies as "no overflow".
pub fn sample<H: ScrollHost + ?Sized>(host: &Weak<H>) -> ScrollGeometry {
    try_sample(host).unwrap_or_default()
}

/// Like [`sample`], but tells "no layout yet" apart from a real measurement.
pub(crate) fn try_sample<H: ScrollHost + ?Sized>(host: &Weak<H>) -> Option<ScrollGeometry> {
    host.upgrade()?.geometry().map(ScrollGeometry::sanitized)
}
