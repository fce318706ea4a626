//! Scoped outside-click listeners
//!
//! A `DismissRegistry` plays the role of the document-wide click listener
//! table. Each open menu holds one `DismissGuard`; the host only routes
//! clicks to a widget while its guard is alive.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Identifies one attached listener within a registry
pub type ListenerId = u64;

#[derive(Debug, Default)]
struct Listeners {
    next_id: ListenerId,
    active: BTreeSet<ListenerId>,
}

/// Shared table of attached outside-click listeners
///
/// Cloning yields another handle to the same table. Single-threaded by
/// construction: all event callbacks run on the UI thread.
#[derive(Debug, Clone, Default)]
pub struct DismissRegistry {
    inner: Rc<RefCell<Listeners>>,
}

impl DismissRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new listener; it stays attached until the guard is dropped
    pub fn acquire(&self) -> DismissGuard {
        let mut listeners = self.inner.borrow_mut();
        listeners.next_id = listeners.next_id.wrapping_add(1);
        let id = listeners.next_id;
        listeners.active.insert(id);
        log::debug!("Attached outside-click listener {}", id);

        DismissGuard {
            id,
            registry: Rc::clone(&self.inner),
        }
    }

    /// Whether any listener is attached
    pub fn is_listening(&self) -> bool {
        !self.inner.borrow().active.is_empty()
    }

    pub fn active_listeners(&self) -> usize {
        self.inner.borrow().active.len()
    }

    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.inner.borrow().active.contains(&id)
    }
}

/// An attached outside-click listener; detaches on drop
#[derive(Debug)]
pub struct DismissGuard {
    id: ListenerId,
    registry: Rc<RefCell<Listeners>>,
}

impl DismissGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for DismissGuard {
    fn drop(&mut self) {
        if self.registry.borrow_mut().active.remove(&self.id) {
            log::debug!("Detached outside-click listener {}", self.id);
        }
    }
}

#[cfg(test)]
#[path = "dismiss_tests.rs"]
mod dismiss_tests;
