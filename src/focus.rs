//! Focus host binding and the tab chain.
//!
//! Every focusable unit in the field — each chip and the sibling entry field
//! — implements [`TabResponder`]. The container decides who holds focus and
//! notifies units through `focus_gained`/`focus_lost`; no platform focus
//! system leaks into the components.
//!
//! Units are linked into a doubly-linked tab chain of weak references. The
//! container alone builds and repairs the chain; a unit only follows its own
//! `next`/`previous` link when the user navigates. A dangling link is a
//! silent no-op, never a panic.

use std::cell::RefCell;
use std::rc::Weak;

/// Direction of a tab-key navigation command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

/// A focusable unit the container can hand keyboard focus to.
pub trait TabResponder {
    fn focus_gained(&mut self);
    fn focus_lost(&mut self);
    fn is_focused(&self) -> bool;
}

/// Non-owning link to a neighbor in the tab chain.
pub type TabLink = Weak<RefCell<dyn TabResponder>>;
