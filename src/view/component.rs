//! The chip component and its state machine.
//!
//! A `TokenView` is a closed capsule: it never inserts text into itself and
//! never edits the collection it belongs to. It moves between three states —
//! unselected, selected, and selected-with-focus (capturing) — and reports
//! every user intent to its container through the delegate protocol:
//!
//! - while capturing, every accepted keystroke becomes exactly one delete
//!   request ("select the token, then any key deletes it and may seed a
//!   replacement text field")
//! - a click on an unselected chip becomes a selection request; the view
//!   does not self-select
//! - externally triggered focus loss becomes a focus-release request
//!
//! Selection is commanded by the container via `set_selected`; focus arrives
//! through the `TabResponder` binding. Capture is active only while both
//! hold at once.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    prelude::Widget,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use tracing::{debug, trace};

use super::render;
use crate::config::{KeyboardAppearance, TokenInputType};
use crate::delegate::{DelegateRef, TokenViewDelegate, TokenViewId};
use crate::event::Handled;
use crate::focus::{TabDirection, TabLink, TabResponder};
use crate::theme::Theme;
use crate::token::Token;

pub struct TokenView {
    token: Token,
    id: TokenViewId,
    selected: bool,
    focused: bool,
    hide_unselected_comma: bool,
    token_input_type: TokenInputType,
    keyboard_appearance: KeyboardAppearance,
    base_style: Style,
    theme: Theme,
    delegate: Option<DelegateRef>,
    next_tab: Option<TabLink>,
    previous_tab: Option<TabLink>,
}

impl TokenView {
    /// Create a view permanently bound to `token`. `style` stands in for the
    /// construction-time font; `None` uses the terminal default.
    pub fn new(token: Token, style: Option<Style>) -> Self {
        Self {
            token,
            id: TokenViewId::next(),
            selected: false,
            focused: false,
            hide_unselected_comma: false,
            token_input_type: TokenInputType::default(),
            keyboard_appearance: KeyboardAppearance::default(),
            base_style: style.unwrap_or_default(),
            theme: Theme::default(),
            delegate: None,
            next_tab: None,
            previous_tab: None,
        }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn id(&self) -> TokenViewId {
        self.id
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Keyboard events are routed into the chip only while it is both
    /// selected and focused.
    pub fn is_capturing(&self) -> bool {
        self.selected && self.focused
    }

    pub fn hide_unselected_comma(&self) -> bool {
        self.hide_unselected_comma
    }

    pub fn token_input_type(&self) -> TokenInputType {
        self.token_input_type
    }

    pub fn keyboard_appearance(&self) -> KeyboardAppearance {
        self.keyboard_appearance
    }

    pub fn tint_color(&self) -> Color {
        self.theme.tint
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.set_selected_animated(selected, false);
    }

    /// Selection command from the container. Never grants or removes focus;
    /// `animated` is accepted for call-site parity with hosts that fade the
    /// highlight — a cell terminal repaints instantly, so it is a hint only.
    pub fn set_selected_animated(&mut self, selected: bool, animated: bool) {
        trace!(id = ?self.id, selected, animated, "selection changed");
        self.selected = selected;
    }

    pub fn set_hide_unselected_comma(&mut self, hide: bool) {
        self.hide_unselected_comma = hide;
    }

    pub fn set_token_input_type(&mut self, input_type: TokenInputType) {
        self.token_input_type = input_type;
    }

    pub fn set_keyboard_appearance(&mut self, appearance: KeyboardAppearance) {
        self.keyboard_appearance = appearance;
    }

    /// Canonical tint mutator. `None` restores the theme default.
    pub fn set_tint_color(&mut self, tint: Option<Color>) {
        self.theme.tint = tint.unwrap_or_else(|| Theme::default().tint);
    }

    pub fn set_delegate(&mut self, delegate: DelegateRef) {
        self.delegate = Some(delegate);
    }

    pub fn set_next_tab(&mut self, link: Option<TabLink>) {
        self.next_tab = link;
    }

    pub fn set_previous_tab(&mut self, link: Option<TabLink>) {
        self.previous_tab = link;
    }

    /// Offer a key event to the chip.
    ///
    /// Tab and BackTab navigate the chain whenever the chip is focused.
    /// While capturing, a printable key or Backspace/Delete is translated
    /// into exactly one delete request. Everything else bubbles up.
    pub fn handle_key(&mut self, key: KeyEvent) -> Handled {
        if key.kind == KeyEventKind::Release || !self.focused {
            return Handled::No;
        }

        match key.code {
            KeyCode::Tab => {
                self.yield_focus(TabDirection::Forward);
                Handled::Yes
            }
            KeyCode::BackTab => {
                self.yield_focus(TabDirection::Backward);
                Handled::Yes
            }
            _ if !self.selected => Handled::No,
            KeyCode::Backspace | KeyCode::Delete => {
                debug!(id = ?self.id, "delete requested (backspace)");
                self.notify(|delegate, id| delegate.token_view_did_request_delete(id, None));
                Handled::Yes
            }
            KeyCode::Char(c) if !has_command_modifier(key.modifiers) => {
                debug!(id = ?self.id, replacement = %c, "delete requested (typed over)");
                self.notify(|delegate, id| {
                    delegate.token_view_did_request_delete(id, Some(c.to_string()))
                });
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    /// Activation gesture from the container's hit-testing. An unselected
    /// chip asks its container for selection and waits for `set_selected`;
    /// it never selects itself.
    pub fn handle_click(&mut self) -> Handled {
        if self.selected {
            return Handled::No;
        }
        debug!(id = ?self.id, "selection requested");
        self.notify(|delegate, id| delegate.token_view_did_request_selection(id));
        Handled::Yes
    }

    /// Column width of the chip as currently rendered, for row layout.
    pub fn display_width(&self) -> u16 {
        render::chip_width(self.token.display_text(), self.shows_comma())
    }

    /// Draw the chip into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let line = render::chip_line(
            self.token.display_text(),
            self.selected,
            self.is_capturing(),
            self.shows_comma(),
            self.base_style,
            &self.theme,
            area.width,
        );
        Paragraph::new(line).render(area, frame.buffer_mut());
    }

    fn shows_comma(&self) -> bool {
        !self.selected && !self.hide_unselected_comma
    }

    /// Hand focus to the linked neighbor. Self-initiated, so no
    /// focus-release request is emitted; a missing or dropped link keeps
    /// focus where it is.
    fn yield_focus(&mut self, direction: TabDirection) {
        let link = match direction {
            TabDirection::Forward => &self.next_tab,
            TabDirection::Backward => &self.previous_tab,
        };
        let Some(neighbor) = link.as_ref().and_then(|link| link.upgrade()) else {
            return;
        };
        trace!(id = ?self.id, ?direction, "yielding focus");
        self.focused = false;
        neighbor.borrow_mut().focus_gained();
    }

    fn notify(&self, f: impl FnOnce(&mut dyn TokenViewDelegate, TokenViewId)) {
        let Some(delegate) = self.delegate.as_ref().and_then(|d| d.upgrade()) else {
            return;
        };
        f(&mut *delegate.borrow_mut(), self.id);
    }
}

fn has_command_modifier(modifiers: KeyModifiers) -> bool {
    modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}

impl TabResponder for TokenView {
    fn focus_gained(&mut self) {
        trace!(id = ?self.id, "focus gained");
        self.focused = true;
    }

    fn focus_lost(&mut self) {
        if !self.focused {
            return;
        }
        trace!(id = ?self.id, "focus lost");
        self.focused = false;
        self.notify(|delegate, id| delegate.token_view_did_release_focus(id));
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}
