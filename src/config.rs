//! Pass-through configuration carried by every chip.
//!
//! Both enums are opaque to the chip's own state machine: the container and
//! its entry field read them to pick display and validation behavior, the
//! `TokenView` only stores them.

/// What kind of content the surrounding field collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenInputType {
    #[default]
    Freeform,
    Email,
    Name,
}

/// Keyboard chrome preference forwarded to the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardAppearance {
    #[default]
    Default,
    Light,
    Dark,
}
