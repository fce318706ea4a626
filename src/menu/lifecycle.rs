//! Menu state transitions

use super::dismiss::{DismissGuard, DismissRegistry};

/// Whether the suggestion menu is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Open/closed state plus the listener held while open
#[derive(Debug)]
pub struct MenuLifecycle {
    state: MenuState,
    registry: DismissRegistry,
    guard: Option<DismissGuard>,
}

impl MenuLifecycle {
    pub fn new(registry: DismissRegistry) -> Self {
        Self {
            state: MenuState::Closed,
            registry,
            guard: None,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Whether this menu currently holds an outside-click listener
    pub fn is_listening(&self) -> bool {
        self.guard.is_some()
    }

    pub fn registry(&self) -> &DismissRegistry {
        &self.registry
    }

    /// Enter `Open`, attaching the listener once per open session
    ///
    /// Returns `true` if the menu was closed before.
    pub fn open(&mut self) -> bool {
        if self.guard.is_none() {
            self.guard = Some(self.registry.acquire());
        }

        let opened = self.state == MenuState::Closed;
        self.state = MenuState::Open;
        if opened {
            log::debug!("Menu opened");
        }
        opened
    }

    /// Enter `Closed`, detaching the listener
    ///
    /// Returns `true` if the menu was open before.
    pub fn close(&mut self) -> bool {
        self.guard = None;

        let closed = self.state == MenuState::Open;
        self.state = MenuState::Closed;
        if closed {
            log::debug!("Menu closed");
        }
        closed
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod lifecycle_tests;
