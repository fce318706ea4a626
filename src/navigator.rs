//! Active-item cursor over a suggestion list
//!
//! The active index is an `Option<usize>` where `None` means nothing is
//! active. Navigation wraps at both ends and an unset cursor enters from the
//! opposite edge: Down goes to the first item, Up goes to the last.

/// Move the cursor one item up, wrapping to the last item
///
/// Returns `None` when `count` is zero. The controller never navigates an
/// empty list, so that case only guards against misuse.
pub fn move_up(current: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    match current {
        Some(index) if index > 0 && index < count => Some(index - 1),
        _ => Some(count - 1),
    }
}

/// Move the cursor one item down, wrapping to the first item
pub fn move_down(current: Option<usize>, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    match current {
        Some(index) if index + 1 < count => Some(index + 1),
        _ => Some(0),
    }
}

/// One flag per item, set only for the active one
pub fn highlight_marks(active: Option<usize>, count: usize) -> impl Iterator<Item = bool> {
    (0..count).map(move |i| active == Some(i))
}

/// Stateful wrapper around the navigation functions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionNavigator {
    active: Option<usize>,
}

impl SelectionNavigator {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn up(&mut self, count: usize) -> Option<usize> {
        self.active = move_up(self.active, count);
        self.active
    }

    pub fn down(&mut self, count: usize) -> Option<usize> {
        self.active = move_down(self.active, count);
        self.active
    }

    /// Point the cursor at `index`; an index past the end deactivates
    pub fn set(&mut self, index: usize, count: usize) -> Option<usize> {
        self.active = (index < count).then_some(index);
        self.active
    }

    pub fn reset(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod navigator_tests;
