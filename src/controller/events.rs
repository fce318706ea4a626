//! Platform-neutral events delivered to the controller

/// Keys the controller reacts to while the menu is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Enter,
    Escape,
    Other,
}

/// What the host should do with a key after the controller saw it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not handled; apply the input field's default behavior
    Passthrough,
    /// Handled, default behavior left alone (Escape)
    Consumed,
    /// Handled, default behavior must be suppressed (Up/Down/Enter)
    Suppressed,
}

impl KeyOutcome {
    pub fn is_handled(self) -> bool {
        self != KeyOutcome::Passthrough
    }

    pub fn prevents_default(self) -> bool {
        self == KeyOutcome::Suppressed
    }
}

/// Where a pointer click landed, as resolved by the host's hit-testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the input field
    Input,
    /// Anywhere inside the menu, items and chrome alike
    Menu,
    Outside,
}
