//! Pointer position broadcast
//!
//! The shell publishes pointer moves here; pages that care subscribe on
//! mount. A [`PointerSubscription`] unregisters itself when dropped, so a
//! page that is torn down can never be written to again.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Pointer position in viewport px
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

type Slot = Rc<Cell<Option<PointerPosition>>>;
type Listeners = RefCell<Vec<(u64, Slot)>>;

/// Single-threaded pointer event bus
#[derive(Debug, Default)]
pub struct PointerBus {
    listeners: Rc<Listeners>,
    next_id: Cell<u64>,
}

impl PointerBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener; it stays registered until the subscription drops
    pub fn subscribe(&self) -> PointerSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let slot: Slot = Rc::new(Cell::new(None));
        self.listeners.borrow_mut().push((id, Rc::clone(&slot)));
        tracing::debug!("pointer listener {} registered", id);

        PointerSubscription {
            id,
            slot,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Deliver a pointer position to every listener
    pub fn publish(&self, position: PointerPosition) {
        for (_, slot) in self.listeners.borrow().iter() {
            slot.set(Some(position));
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Registration on a [`PointerBus`]
#[derive(Debug)]
pub struct PointerSubscription {
    id: u64,
    slot: Slot,
    listeners: Weak<Listeners>,
}

impl PointerSubscription {
    /// Last position delivered, if any
    pub fn latest(&self) -> Option<PointerPosition> {
        self.slot.get()
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
            tracing::debug!("pointer listener {} released", self.id);
        }
    }
}
