use ratatui::style::Color;

/// Default chip colors.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Accent color: unselected text, selected background.
    pub tint: Color,
    /// Text color while the chip is selected.
    pub selected_text: Color,
    /// Separator comma after an unselected chip.
    pub comma: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            tint: Color::Rgb(0, 122, 255),      // #007AFF
            selected_text: Color::White,
            comma: Color::Rgb(100, 110, 150),   // #646E96 dimmed
        }
    }
}
