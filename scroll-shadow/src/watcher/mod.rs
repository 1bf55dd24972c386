//! Overflow watcher: keeps an [`OverflowState`] in sync with a scroll host.
//!
//! The watcher is an explicit lifecycle object. `mount` attaches listeners to
//! the host's scroll, resize and mutation sources and publishes the current
//! state right away. Notifications mark a recompute as pending; `tick` (or the
//! notification itself, in [`Coalesce::Immediate`] mode) samples the host,
//! classifies the geometry and publishes only when the edge set changed.
//! Disabling, unmounting or dropping the watcher releases every listener and
//! cancels any pending recompute.

mod scheduler;
mod subscription;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub use scheduler::FrameScheduler;
pub use subscription::{ChangeSource, Listener, Subscription};

use crate::classify::classify;
use crate::config::ShadowConfig;
use crate::geometry::OverflowState;
use crate::presentation::{ShadowStyle, StyleFragment, StyleMap};
use crate::sampler::{try_sample, ScrollHost};

/// Observable phase of a watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Shadows are off: no listeners, empty state.
    Disabled,
    /// Listening, nothing pending.
    Idle,
    /// A recompute is pending for the next tick.
    Scheduled,
    /// The host could not be observed; state only changes on `refresh`.
    Static,
}

/// When notifications are turned into recomputes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Coalesce {
    /// Merge notifications until the next [`OverflowWatcher::tick`].
    #[default]
    Frame,
    /// Recompute inside the notification itself.
    Immediate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Disabled,
    Observing,
    Static,
}

type Handler = Rc<dyn Fn(OverflowState)>;
type Handlers = Rc<RefCell<Vec<Handler>>>;

struct Core<H: ?Sized> {
    host: Option<Weak<H>>,
    config: ShadowConfig,
    mode: Mode,
    published: OverflowState,
    subscriptions: Vec<Subscription>,
    // First sample found no layout; keep retrying each tick until one shows up.
    awaiting_layout: bool,
}

impl<H: ScrollHost + ?Sized> Core<H> {
    fn recompute(&mut self, scheduler: &FrameScheduler) -> Option<OverflowState> {
        if self.mode == Mode::Disabled {
            return None;
        }
        let Some(host) = &self.host else {
            return self.publish(OverflowState::EMPTY);
        };

        match try_sample(host) {
            Some(geometry) => {
                self.awaiting_layout = false;
                let next = classify(geometry, self.config.offset, self.config.orientation);
                self.publish(next)
            }
            None => {
                if self.awaiting_layout && host.strong_count() > 0 {
                    log::trace!("[shadow] host has no layout yet, retrying next tick");
                    scheduler.schedule();
                }
                self.publish(OverflowState::EMPTY)
            }
        }
    }

    fn publish(&mut self, next: OverflowState) -> Option<OverflowState> {
        if next == self.published {
            return None;
        }
        log::debug!("[shadow] overflow {} -> {}", self.published, next);
        self.published = next;
        Some(next)
    }

    fn release(&mut self) {
        if !self.subscriptions.is_empty() {
            log::debug!(
                "[shadow] detaching {} subscription(s)",
                self.subscriptions.len()
            );
        }
        self.subscriptions.clear();
        self.awaiting_layout = false;
    }
}

/// Watches one scroll host and publishes which of its edges hide content.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use scroll_shadow::{Edge, OverflowWatcher, ScrollElement, ShadowConfig};
///
/// let element = Rc::new(ScrollElement::new(80.0, 500.0).with_content(80.0, 1000.0));
/// let mut watcher = OverflowWatcher::new(ShadowConfig::default());
/// watcher.mount(&element);
/// assert!(watcher.state().contains(Edge::Bottom));
///
/// element.scroll_to(0.0, 500.0);
/// watcher.tick();
/// assert!(watcher.state().contains(Edge::Top));
/// assert!(!watcher.state().contains(Edge::Bottom));
/// ```
pub struct OverflowWatcher<H: ScrollHost + ?Sized + 'static> {
    core: Rc<RefCell<Core<H>>>,
    scheduler: FrameScheduler,
    handlers: Handlers,
    coalesce: Coalesce,
}

impl<H: ScrollHost + ?Sized + 'static> OverflowWatcher<H> {
    pub fn new(config: ShadowConfig) -> Self {
        let config = config.normalized();
        Self {
            core: Rc::new(RefCell::new(Core {
                host: None,
                config,
                mode: if config.enabled {
                    Mode::Observing
                } else {
                    Mode::Disabled
                },
                published: OverflowState::EMPTY,
                subscriptions: Vec::new(),
                awaiting_layout: false,
            })),
            scheduler: FrameScheduler::new(),
            handlers: Rc::new(RefCell::new(Vec::new())),
            coalesce: Coalesce::default(),
        }
    }

    /// Choose how notifications are coalesced. Applies to the next attach.
    pub fn with_coalesce(mut self, coalesce: Coalesce) -> Self {
        self.coalesce = coalesce;
        self
    }

    /// Start watching `host`.
    ///
    /// The watcher only keeps a weak reference; the caller keeps the host
    /// alive. Mounting the host already watched does nothing. Mounting another
    /// host moves the listeners over and publishes only if the state differs.
    pub fn mount(&mut self, host: &Rc<H>) {
        let next = Rc::downgrade(host);
        let same = self
            .core
            .borrow()
            .host
            .as_ref()
            .is_some_and(|current| Weak::ptr_eq(current, &next));
        if same {
            log::trace!("[shadow] host already mounted");
            return;
        }

        self.scheduler.cancel();
        let enabled = {
            let mut core = self.core.borrow_mut();
            core.release();
            core.host = Some(next);
            if core.mode == Mode::Static {
                core.mode = Mode::Observing;
            }
            core.config.enabled
        };
        if enabled {
            self.attach();
        }
    }

    /// Stop watching the current host and release every listener.
    pub fn unmount(&mut self) {
        self.scheduler.cancel();
        let published = {
            let mut core = self.core.borrow_mut();
            core.release();
            core.host = None;
            if core.mode == Mode::Static {
                core.mode = Mode::Observing;
            }
            core.publish(OverflowState::EMPTY)
        };
        self.emit(published);
    }

    /// Apply a new configuration, as when the owner re-renders with new values.
    pub fn update(&mut self, config: ShadowConfig) {
        let config = config.normalized();
        let previous = std::mem::replace(&mut self.core.borrow_mut().config, config);

        match (previous.enabled, config.enabled) {
            (true, false) => self.disable(),
            (false, true) => self.enable(),
            (true, true)
                if previous.offset != config.offset
                    || previous.orientation != config.orientation =>
            {
                self.refresh();
            }
            _ => {}
        }
    }

    /// Turn shadows on or off, keeping the rest of the configuration.
    pub fn set_enabled(&mut self, enabled: bool) {
        let config = self.config().enabled(enabled);
        self.update(config);
    }

    /// Run the pending recompute, if any.
    ///
    /// Returns the newly published state when it changed.
    pub fn tick(&mut self) -> Option<OverflowState> {
        let coalesced = self.scheduler.take()?;
        log::trace!("[shadow] tick flushing {coalesced} notification(s)");
        let published = self.core.borrow_mut().recompute(&self.scheduler);
        self.emit(published)
    }

    /// Recompute now, dropping any pending request.
    pub fn refresh(&mut self) -> Option<OverflowState> {
        self.scheduler.cancel();
        let published = self.core.borrow_mut().recompute(&self.scheduler);
        self.emit(published)
    }

    /// Register a callback for every published change.
    ///
    /// Callbacks run after the watcher's internal state is released, so they
    /// may read the watcher.
    pub fn on_change(&self, handler: impl Fn(OverflowState) + 'static) {
        self.handlers.borrow_mut().push(Rc::new(handler));
    }

    /// Last published state.
    pub fn state(&self) -> OverflowState {
        self.core.borrow().published
    }

    pub fn phase(&self) -> Phase {
        let mode = self.core.borrow().mode;
        match mode {
            Mode::Disabled => Phase::Disabled,
            Mode::Static => Phase::Static,
            Mode::Observing if self.scheduler.is_pending() => Phase::Scheduled,
            Mode::Observing => Phase::Idle,
        }
    }

    pub fn config(&self) -> ShadowConfig {
        self.core.borrow().config
    }

    pub fn is_mounted(&self) -> bool {
        self.core.borrow().host.is_some()
    }

    /// Number of listeners currently registered on the host.
    pub fn subscription_count(&self) -> usize {
        self.core.borrow().subscriptions.len()
    }

    /// Presentation output for the current state and configuration.
    pub fn style(&self, overrides: &StyleMap) -> StyleFragment {
        let core = self.core.borrow();
        ShadowStyle::build(
            core.published,
            core.config.size,
            core.config.orientation,
            overrides,
        )
    }

    fn enable(&mut self) {
        self.core.borrow_mut().mode = Mode::Observing;
        if self.is_mounted() {
            self.attach();
        }
    }

    fn disable(&mut self) {
        self.scheduler.cancel();
        let published = {
            let mut core = self.core.borrow_mut();
            core.release();
            core.mode = Mode::Disabled;
            core.publish(OverflowState::EMPTY)
        };
        self.emit(published);
    }

    fn attach(&mut self) {
        let host = self.core.borrow().host.as_ref().and_then(Weak::upgrade);
        let Some(host) = host else {
            log::debug!("[shadow] host unavailable, nothing to observe");
            let published = {
                let mut core = self.core.borrow_mut();
                core.mode = Mode::Static;
                core.publish(OverflowState::EMPTY)
            };
            self.emit(published);
            return;
        };

        let listener = self.listener();
        let mut subscriptions = Vec::with_capacity(ChangeSource::ALL.len());
        let mut mode = Mode::Observing;
        for source in ChangeSource::ALL {
            match host.observe(source, listener.clone()) {
                Ok(subscription) => subscriptions.push(subscription),
                Err(err) => {
                    log::warn!("[shadow] {err}; shadows will not update on their own");
                    subscriptions.clear();
                    mode = Mode::Static;
                    break;
                }
            }
        }
        drop(host);

        self.scheduler.cancel();
        let published = {
            let mut core = self.core.borrow_mut();
            core.release();
            core.subscriptions = subscriptions;
            core.mode = mode;
            core.awaiting_layout = true;
            core.recompute(&self.scheduler)
        };
        self.emit(published);
    }

    fn listener(&self) -> Listener {
        let core = Rc::downgrade(&self.core);
        let handlers = Rc::downgrade(&self.handlers);
        let scheduler = self.scheduler.clone();
        let coalesce = self.coalesce;

        Rc::new(move |source: ChangeSource| {
            let merged = !scheduler.schedule();
            log::trace!("[shadow] {source} notification (merged: {merged})");
            if coalesce != Coalesce::Immediate {
                return;
            }
            let (Some(core), Some(handlers)) = (core.upgrade(), handlers.upgrade()) else {
                return;
            };
            // A notification raised while the watcher is busy stays pending
            // for the next tick.
            let published = match core.try_borrow_mut() {
                Ok(mut core) => match scheduler.take() {
                    Some(_) => core.recompute(&scheduler),
                    None => None,
                },
                Err(_) => None,
            };
            if let Some(state) = published {
                emit_to(&handlers, state);
            }
        })
    }

    fn emit(&self, published: Option<OverflowState>) -> Option<OverflowState> {
        let state = published?;
        emit_to(&self.handlers, state);
        Some(state)
    }
}

impl<H: ScrollHost + ?Sized + 'static> Drop for OverflowWatcher<H> {
    fn drop(&mut self) {
        self.scheduler.cancel();
        if let Ok(mut core) = self.core.try_borrow_mut() {
            core.release();
            core.host = None;
        }
    }
}

fn emit_to(handlers: &Handlers, state: OverflowState) {
    let handlers: Vec<Handler> = handlers.borrow().clone();
    for handler in handlers {
        handler(state);
    }
}
