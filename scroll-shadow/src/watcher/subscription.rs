use std::fmt;
use std::rc::Rc;

/// Kinds of host changes that can alter overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeSource {
    /// Scroll position moved.
    Scroll,
    /// Viewport was resized.
    Resize,
    /// Content was added, removed or changed size.
    Mutation,
}

impl ChangeSource {
    pub const ALL: [ChangeSource; 3] = [Self::Scroll, Self::Resize, Self::Mutation];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::Mutation => "mutation",
        }
    }
}

impl fmt::Display for ChangeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Callback a host invokes when an observed change happens.
pub type Listener = Rc<dyn Fn(ChangeSource)>;

/// Guard for one registered listener.
///
/// Dropping the guard unregisters the listener, so a listener never outlives
/// the subscription that owns it, whichever way the owner goes away.
pub struct Subscription {
    source: ChangeSource,
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a guard that runs `release` exactly once when detached or dropped.
    pub fn new(source: ChangeSource, release: impl FnOnce() + 'static) -> Self {
        Self {
            source,
            release: Some(Box::new(release)),
        }
    }

    pub fn source(&self) -> ChangeSource {
        self.source
    }

    /// Unregister the listener now.
    pub fn detach(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            log::trace!("[shadow] releasing {} subscription", self.source);
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("source", &self.source)
            .field("active", &self.release.is_some())
            .finish()
    }
}
