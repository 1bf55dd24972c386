//! In-memory scrollable element.
//!
//! Holds a viewport, a content size and a scroll offset clamped to the
//! scrollable range, and tells registered listeners when any of them change.
//! Terminal hosts drive it from input events; tests drive it directly.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use crate::error::ObserveError;
use crate::geometry::{non_negative, ScrollGeometry};
use crate::sampler::ScrollHost;
use crate::watcher::{ChangeSource, Listener, Subscription};

#[derive(Debug, Clone, Copy, Default)]
struct ElementLayout {
    offset_x: f64,
    offset_y: f64,
    viewport: (f64, f64),
    content: (f64, f64),
    attached: bool,
}

impl ElementLayout {
    fn max_offset(&self) -> (f64, f64) {
        (
            (self.content.0 - self.viewport.0).max(0.0),
            (self.content.1 - self.viewport.1).max(0.0),
        )
    }

    /// Pull the offsets back into range after a size change.
    fn clamp(&mut self) {
        let (max_x, max_y) = self.max_offset();
        self.offset_x = self.offset_x.clamp(0.0, max_x);
        self.offset_y = self.offset_y.clamp(0.0, max_y);
    }
}

/// Requested offset on one axis. `+inf` means the far end.
fn scroll_coordinate(requested: f64, max: f64) -> f64 {
    if requested == f64::INFINITY {
        max
    } else {
        non_negative(requested)
    }
}

struct Registered {
    id: u64,
    source: ChangeSource,
    listener: Listener,
}

/// A scroll container with observable geometry.
pub struct ScrollElement {
    layout: RefCell<ElementLayout>,
    listeners: Rc<RefCell<Vec<Registered>>>,
    next_id: Cell<u64>,
    unsupported: RefCell<HashSet<ChangeSource>>,
}

impl ScrollElement {
    /// Create an element laid out with the given viewport and content that
    /// exactly fills it.
    pub fn new(width: f64, height: f64) -> Self {
        let viewport = (non_negative(width), non_negative(height));
        Self {
            layout: RefCell::new(ElementLayout {
                viewport,
                content: viewport,
                attached: true,
                ..Default::default()
            }),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
            unsupported: RefCell::new(HashSet::new()),
        }
    }

    pub fn with_content(self, width: f64, height: f64) -> Self {
        {
            let mut layout = self.layout.borrow_mut();
            layout.content = (non_negative(width), non_negative(height));
            layout.clamp();
        }
        self
    }

    /// Start without a layout, as a node that is not in the tree yet.
    pub fn detached(self) -> Self {
        self.layout.borrow_mut().attached = false;
        self
    }

    /// Refuse listeners for `source`, as a host lacking that observer API.
    pub fn unsupported(self, source: ChangeSource) -> Self {
        self.unsupported.borrow_mut().insert(source);
        self
    }

    pub fn scroll_offset(&self) -> (f64, f64) {
        let layout = self.layout.borrow();
        (layout.offset_x, layout.offset_y)
    }

    pub fn viewport(&self) -> (f64, f64) {
        self.layout.borrow().viewport
    }

    pub fn content_size(&self) -> (f64, f64) {
        self.layout.borrow().content
    }

    pub fn is_attached(&self) -> bool {
        self.layout.borrow().attached
    }

    /// Scroll to an absolute position, clamped to the scrollable range.
    /// Returns true if the offset changed.
    pub fn scroll_to(&self, x: f64, y: f64) -> bool {
        let changed = {
            let mut layout = self.layout.borrow_mut();
            let before = (layout.offset_x, layout.offset_y);
            let (max_x, max_y) = layout.max_offset();
            layout.offset_x = scroll_coordinate(x, max_x);
            layout.offset_y = scroll_coordinate(y, max_y);
            layout.clamp();
            before != (layout.offset_x, layout.offset_y)
        };
        if changed {
            self.notify(ChangeSource::Scroll);
        }
        changed
    }

    /// Scroll by a delta. Returns true if the offset changed.
    pub fn scroll_by(&self, dx: f64, dy: f64) -> bool {
        let (x, y) = self.scroll_offset();
        self.scroll_to(x + dx, y + dy)
    }

    pub fn scroll_to_top(&self) -> bool {
        let (x, _) = self.scroll_offset();
        self.scroll_to(x, 0.0)
    }

    pub fn scroll_to_bottom(&self) -> bool {
        let (x, _) = self.scroll_offset();
        let (_, max_y) = self.layout.borrow().max_offset();
        self.scroll_to(x, max_y)
    }

    /// Change the viewport size.
    pub fn resize(&self, width: f64, height: f64) {
        let changed = {
            let mut layout = self.layout.borrow_mut();
            let viewport = (non_negative(width), non_negative(height));
            let changed = layout.viewport != viewport;
            layout.viewport = viewport;
            layout.clamp();
            changed
        };
        if changed {
            self.notify(ChangeSource::Resize);
        }
    }

    /// Change the content size, as when children are added or removed.
    pub fn set_content(&self, width: f64, height: f64) {
        let changed = {
            let mut layout = self.layout.borrow_mut();
            let content = (non_negative(width), non_negative(height));
            let changed = layout.content != content;
            layout.content = content;
            layout.clamp();
            changed
        };
        if changed {
            self.notify(ChangeSource::Mutation);
        }
    }

    /// Put the element into a live layout.
    pub fn attach_layout(&self) {
        if !self.layout.replace_with(|l| ElementLayout { attached: true, ..*l }).attached {
            self.notify(ChangeSource::Resize);
        }
    }

    /// Take the element out of the layout; it then reports no geometry.
    pub fn detach_layout(&self) {
        if self.layout.replace_with(|l| ElementLayout { attached: false, ..*l }).attached {
            self.notify(ChangeSource::Resize);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn listener_count_for(&self, source: ChangeSource) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|r| r.source == source)
            .count()
    }

    fn notify(&self, source: ChangeSource) {
        // Clone out first: a listener may unsubscribe while it runs.
        let targets: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .filter(|r| r.source == source)
            .map(|r| r.listener.clone())
            .collect();
        for listener in targets {
            listener(source);
        }
    }
}

impl ScrollHost for ScrollElement {
    fn geometry(&self) -> Option<ScrollGeometry> {
        let layout = self.layout.borrow();
        if !layout.attached {
            return None;
        }
        Some(ScrollGeometry {
            scroll_top: layout.offset_y,
            scroll_left: layout.offset_x,
            scroll_height: layout.content.1.max(layout.viewport.1),
            scroll_width: layout.content.0.max(layout.viewport.0),
            client_height: layout.viewport.1,
            client_width: layout.viewport.0,
        })
    }

    fn observe(&self, source: ChangeSource, listener: Listener) -> Result<Subscription, ObserveError> {
        if self.unsupported.borrow().contains(&source) {
            return Err(ObserveError::Unsupported(source));
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push(Registered {
            id,
            source,
            listener,
        });

        let listeners = Rc::downgrade(&self.listeners);
        Ok(Subscription::new(source, move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|r| r.id != id);
            }
        }))
    }
}
