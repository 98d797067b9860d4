//! The delegation protocol between a chip and its container.
//!
//! A `TokenView` never edits the token list it belongs to. Instead it emits
//! one of three fire-and-forget notifications and lets the container act:
//!
//! - delete request: remove the token; an attached replacement string means
//!   the user typed over the selected chip and the text should seed the
//!   sibling entry field
//! - selection request: the chip was activated; deselect every other chip,
//!   call `set_selected(true)` on this one and grant it focus (the view never
//!   self-selects — the container alone enforces single selection)
//! - focus release: focus left the chip; move it somewhere useful
//!
//! Notifications identify the emitting view by [`TokenViewId`]. They fire
//! while that view is mutably borrowed by the event being handled, so a
//! delegate must not call back into it synchronously; record the request and
//! respond once the event handler has returned.
//!
//! The view holds its delegate as a `Weak` reference. The container owns
//! every participant; an absent or dropped delegate turns each emission into
//! a silent no-op.

use std::cell::RefCell;
use std::rc::Weak;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-unique identity of a `TokenView`, carried in delegate
/// notifications in place of a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenViewId(u64);

impl TokenViewId {
    pub(crate) fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Implemented by the container owning the token collection.
pub trait TokenViewDelegate {
    /// A capturing chip received a keystroke. `replacement_text` is the
    /// literal typed character for a printable key, `None` for backspace.
    fn token_view_did_request_delete(&mut self, view: TokenViewId, replacement_text: Option<String>);

    /// An unselected chip was activated (tapped/clicked).
    fn token_view_did_request_selection(&mut self, view: TokenViewId);

    /// The chip lost input focus.
    fn token_view_did_release_focus(&mut self, view: TokenViewId);
}

/// Non-owning handle a view keeps to its delegate.
pub type DelegateRef = Weak<RefCell<dyn TokenViewDelegate>>;
