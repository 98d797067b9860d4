//! Pure rendering helpers for a single chip.
//!
//! Everything here is a function of plain state so it can be tested without
//! a terminal: the stateful side lives in `view::component`.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Separator drawn after an unselected chip.
pub const COMMA_SEPARATOR: &str = ", ";

/// Marker appended when the token text does not fit its area.
const ELLIPSIS: &str = "…";

/// Column width of a chip: token text plus the separator when shown.
pub fn chip_width(text: &str, show_comma: bool) -> u16 {
    let mut width = text.width();
    if show_comma {
        width += COMMA_SEPARATOR.width();
    }
    width.min(u16::MAX as usize) as u16
}

/// Styled spans for one chip.
///
/// Unselected chips render the token text in the tint color, followed by a
/// dimmed comma separator when `show_comma`. Selected chips render on a
/// tint-colored background with no separator; capturing adds bold so the
/// user can see which chip will absorb the next keystroke.
pub fn chip_line(
    text: &str,
    selected: bool,
    capturing: bool,
    show_comma: bool,
    base_style: Style,
    theme: &Theme,
    max_width: u16,
) -> Line<'static> {
    let mut spans = Vec::new();

    if selected {
        let mut style = base_style.fg(theme.selected_text).bg(theme.tint);
        if capturing {
            style = style.add_modifier(Modifier::BOLD);
        }
        let text = truncate_to_width(text, max_width as usize);
        spans.push(Span::styled(text, style));
    } else {
        let comma_width = if show_comma {
            COMMA_SEPARATOR.width()
        } else {
            0
        };
        let budget = (max_width as usize).saturating_sub(comma_width);
        let text = truncate_to_width(text, budget);
        spans.push(Span::styled(text, base_style.fg(theme.tint)));
        if show_comma {
            spans.push(Span::styled(
                COMMA_SEPARATOR.to_string(),
                base_style.fg(theme.comma),
            ));
        }
    }

    Line::from(spans)
}

/// Truncate `text` to at most `max_cols` terminal columns, cutting on a
/// grapheme boundary and ending with an ellipsis when anything was dropped.
pub fn truncate_to_width(text: &str, max_cols: usize) -> String {
    if text.width() <= max_cols {
        return text.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }

    let budget = max_cols - ELLIPSIS.width();
    let mut used = 0;
    let mut out = String::new();
    for grapheme in text.graphemes(true) {
        let grapheme_width = grapheme.width();
        if used + grapheme_width > budget {
            break;
        }
        out.push_str(grapheme);
        used += grapheme_width;
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn build(text: &str, selected: bool, show_comma: bool, max_width: u16) -> Line<'static> {
        chip_line(
            text,
            selected,
            false,
            show_comma,
            Style::default(),
            &Theme::default(),
            max_width,
        )
    }

    #[test]
    fn test_unselected_chip_has_comma_separator() {
        let line = build("alice@example.com", false, true, 40);
        assert_eq!(line_text(&line), "alice@example.com, ");
        assert_eq!(line.spans.len(), 2);
    }

    #[test]
    fn test_hidden_comma_omits_separator() {
        let line = build("alice@example.com", false, false, 40);
        assert_eq!(line_text(&line), "alice@example.com");
        assert_eq!(line.spans.len(), 1);
    }

    #[test]
    fn test_selected_chip_has_no_separator() {
        let line = build("alice@example.com", true, true, 40);
        assert_eq!(line_text(&line), "alice@example.com");
        assert_eq!(line.spans.len(), 1);
    }

    #[test]
    fn test_capturing_chip_is_bold() {
        let line = chip_line("a", true, true, false, Style::default(), &Theme::default(), 10);
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_truncate_passthrough_when_it_fits() {
        assert_eq!(truncate_to_width("hello", 5), "hello");
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_ends_with_ellipsis() {
        assert_eq!(truncate_to_width("alice@example.com", 8), "alice@e…");
    }

    #[test]
    fn test_truncate_cjk_on_grapheme_boundary() {
        // Each CJK character is two columns wide; a budget of 5 leaves room
        // for two of them plus the one-column ellipsis.
        assert_eq!(truncate_to_width("你好世界", 5), "你好…");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("hello", 0), "");
    }

    #[test]
    fn test_chip_width_counts_separator() {
        assert_eq!(chip_width("abc", false), 3);
        assert_eq!(chip_width("abc", true), 5);
        assert_eq!(chip_width("你好", false), 4);
    }
}
