use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{BorderType, Borders},
};

/// Colors the field borrows from the surrounding application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub error: Color,
    pub on_surface: Color,
    /// Applied to secondary text such as helper captions.
    pub medium_emphasis: Modifier,
    pub disabled_emphasis: Modifier,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            error: Color::Red,
            on_surface: Color::White,
            medium_emphasis: Modifier::DIM,
            disabled_emphasis: Modifier::DIM,
        }
    }
}

impl Theme {
    /// Style of the caption strip. Errors take the theme's error color; the
    /// helper keeps the field's text color at medium emphasis.
    pub fn caption_style(&self, base: Style, is_error: bool) -> Style {
        if is_error {
            base.fg(self.error)
        } else {
            base.add_modifier(self.medium_emphasis)
        }
    }
}

/// State-dependent colors of the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldColors {
    pub text: Color,
    pub disabled_text: Color,
    pub background: Color,
    pub cursor: Color,
    pub error_cursor: Color,
    pub focused_indicator: Color,
    pub unfocused_indicator: Color,
    pub disabled_indicator: Color,
    pub error_indicator: Color,
    pub leading_icon: Color,
    pub trailing_icon: Color,
    pub error_trailing_icon: Color,
    pub focused_label: Color,
    pub unfocused_label: Color,
    pub error_label: Color,
    pub placeholder: Color,
}

impl Default for FieldColors {
    fn default() -> Self {
        Self::from_theme(&Theme::default())
    }
}

impl FieldColors {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            text: theme.on_surface,
            disabled_text: Color::DarkGray,
            background: Color::Reset,
            cursor: theme.primary,
            error_cursor: theme.error,
            focused_indicator: theme.primary,
            unfocused_indicator: Color::Gray,
            disabled_indicator: Color::DarkGray,
            error_indicator: theme.error,
            leading_icon: Color::Gray,
            trailing_icon: Color::Gray,
            error_trailing_icon: theme.error,
            focused_label: theme.primary,
            unfocused_label: Color::Gray,
            error_label: theme.error,
            placeholder: Color::DarkGray,
        }
    }

    pub fn text_color(&self, enabled: bool) -> Color {
        if enabled {
            self.text
        } else {
            self.disabled_text
        }
    }

    pub fn cursor_color(&self, is_error: bool) -> Color {
        if is_error {
            self.error_cursor
        } else {
            self.cursor
        }
    }

    pub fn indicator_color(&self, enabled: bool, is_error: bool, focused: bool) -> Color {
        if !enabled {
            self.disabled_indicator
        } else if is_error {
            self.error_indicator
        } else if focused {
            self.focused_indicator
        } else {
            self.unfocused_indicator
        }
    }

    pub fn label_color(&self, enabled: bool, is_error: bool, focused: bool) -> Color {
        if !enabled {
            self.disabled_text
        } else if is_error {
            self.error_label
        } else if focused {
            self.focused_label
        } else {
            self.unfocused_label
        }
    }

    pub fn leading_icon_color(&self, enabled: bool) -> Color {
        if enabled {
            self.leading_icon
        } else {
            self.disabled_text
        }
    }

    pub fn trailing_icon_color(&self, enabled: bool, is_error: bool) -> Color {
        if !enabled {
            self.disabled_text
        } else if is_error {
            self.error_trailing_icon
        } else {
            self.trailing_icon
        }
    }
}

/// Outline of the input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldShape {
    #[default]
    Rounded,
    Square,
    /// Only the bottom indicator line, like a filled field.
    Underlined,
}

impl FieldShape {
    pub fn borders(self) -> Borders {
        match self {
            FieldShape::Rounded | FieldShape::Square => Borders::ALL,
            FieldShape::Underlined => Borders::BOTTOM,
        }
    }

    pub fn border_type(self) -> BorderType {
        match self {
            FieldShape::Rounded => BorderType::Rounded,
            FieldShape::Square | FieldShape::Underlined => BorderType::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_state_wins_over_focus() {
        let colors = FieldColors::default();
        assert_eq!(colors.indicator_color(true, true, true), Color::Red);
        assert_eq!(colors.indicator_color(true, false, true), Color::Cyan);
        assert_eq!(colors.indicator_color(false, true, true), Color::DarkGray);
    }

    #[test]
    fn caption_style_dims_helper_and_colors_error() {
        let theme = Theme::default();
        let base = Style::default().fg(Color::White);
        assert_eq!(theme.caption_style(base, true).fg, Some(Color::Red));
        let helper = theme.caption_style(base, false);
        assert_eq!(helper.fg, Some(Color::White));
        assert!(helper.add_modifier.contains(Modifier::DIM));
    }
}
