//! Result of offering an input event to a component.
//!
//! The host routes key events to the focused component; the return value
//! tells it whether to bubble the event up to its own global handlers.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component.
    Yes,
    /// Event was not handled, should bubble up.
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}
