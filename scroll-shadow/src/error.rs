use thiserror::Error;

use crate::watcher::ChangeSource;

/// Failure to attach a listener to a change source.
///
/// Always recoverable: the watcher falls back to static shadows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserveError {
    /// The host has no way to report this kind of change.
    #[error("{0} changes cannot be observed on this host")]
    Unsupported(ChangeSource),
}
