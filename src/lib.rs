//! A selectable token chip for multi-token input fields in terminal UIs.
//!
//! `tokenchip` provides the single-chip half of an email-style token field:
//! the [`TokenView`] state machine, the delegate protocol it reports user
//! intent through, and the tab-chain focus binding. The container owning the
//! full token list implements [`TokenViewDelegate`], performs hit-testing,
//! routes `crossterm` key events to the focused unit, and reacts to the
//! three notifications a chip emits: delete request, selection request, and
//! focus release.
//!
//! ```ignore
//! let mut chip = TokenView::new(Token::new("alice@example.com"), None);
//! chip.set_delegate(Rc::downgrade(&container) as DelegateRef);
//! // Container accepts the selection request a click produces:
//! chip.set_selected(true);
//! chip.focus_gained();
//! // Any keystroke now becomes a delete request on the container.
//! ```

pub mod config;
pub mod delegate;
pub mod event;
pub mod focus;
pub mod theme;
pub mod token;
pub mod view;

pub use config::{KeyboardAppearance, TokenInputType};
pub use delegate::{DelegateRef, TokenViewDelegate, TokenViewId};
pub use event::Handled;
pub use focus::{TabDirection, TabLink, TabResponder};
pub use theme::Theme;
pub use token::Token;
pub use view::TokenView;
