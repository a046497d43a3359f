use ratatui::style::Style;

use crate::{
    input::{
        InputBehavior, InteractionSource, KeyboardActions, KeyboardOptions, VisualTransformation,
    },
    slot::Slot,
    theme::{FieldColors, FieldShape, Theme},
};

/// Display and behavior parameters shared by [`TextField`](crate::TextField)
/// and [`StringField`](crate::StringField).
#[derive(Debug, Clone)]
pub struct FieldOptions {
    pub enabled: bool,
    pub read_only: bool,
    pub text_style: Style,
    pub label: Option<Slot>,
    pub placeholder: Option<Slot>,
    pub leading_icon: Option<Slot>,
    pub trailing_icon: Option<Slot>,
    pub error_icon: Option<Slot>,
    pub helper_message: Option<Slot>,
    pub error_message: Option<Slot>,
    pub is_error: bool,
    pub visual_transformation: VisualTransformation,
    pub keyboard_options: KeyboardOptions,
    pub keyboard_actions: KeyboardActions,
    pub single_line: bool,
    pub max_lines: usize,
    pub interaction_source: Option<InteractionSource>,
    pub shape: FieldShape,
    pub colors: FieldColors,
    pub theme: Theme,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            read_only: false,
            text_style: Style::default(),
            label: None,
            placeholder: None,
            leading_icon: None,
            trailing_icon: None,
            error_icon: None,
            helper_message: None,
            error_message: None,
            is_error: false,
            visual_transformation: VisualTransformation::None,
            keyboard_options: KeyboardOptions::default(),
            keyboard_actions: KeyboardActions::default(),
            single_line: false,
            max_lines: usize::MAX,
            interaction_source: None,
            shape: FieldShape::default(),
            colors: FieldColors::default(),
            theme: Theme::default(),
        }
    }
}

impl FieldOptions {
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    pub fn with_label(mut self, label: Slot) -> Self {
        self.label = Some(label);
        self
    }

    pub fn with_placeholder(mut self, placeholder: Slot) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_leading_icon(mut self, icon: Slot) -> Self {
        self.leading_icon = Some(icon);
        self
    }

    pub fn with_trailing_icon(mut self, icon: Slot) -> Self {
        self.trailing_icon = Some(icon);
        self
    }

    pub fn with_error_icon(mut self, icon: Slot) -> Self {
        self.error_icon = Some(icon);
        self
    }

    pub fn with_helper_message(mut self, message: Slot) -> Self {
        self.helper_message = Some(message);
        self
    }

    pub fn with_error_message(mut self, message: Slot) -> Self {
        self.error_message = Some(message);
        self
    }

    pub fn with_error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    pub fn with_visual_transformation(mut self, transformation: VisualTransformation) -> Self {
        self.visual_transformation = transformation;
        self
    }

    pub fn with_keyboard_options(mut self, options: KeyboardOptions) -> Self {
        self.keyboard_options = options;
        self
    }

    pub fn with_keyboard_actions(mut self, actions: KeyboardActions) -> Self {
        self.keyboard_actions = actions;
        self
    }

    pub fn with_single_line(mut self, single_line: bool) -> Self {
        self.single_line = single_line;
        self
    }

    /// Caps the rows the input box shows. Zero is treated as one.
    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn with_interaction_source(mut self, source: InteractionSource) -> Self {
        self.interaction_source = Some(source);
        self
    }

    pub fn with_shape(mut self, shape: FieldShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_colors(mut self, colors: FieldColors) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn is_focused(&self) -> bool {
        self.interaction_source
            .as_ref()
            .is_some_and(InteractionSource::is_focused)
    }

    /// The trailing slot to draw: the error icon replaces the trailing icon
    /// while the field is in error.
    pub fn effective_trailing_icon(&self) -> Option<&Slot> {
        if self.is_error {
            self.error_icon.as_ref()
        } else {
            self.trailing_icon.as_ref()
        }
    }

    /// The caption slot to draw for the current error state.
    pub fn effective_caption(&self) -> Option<&Slot> {
        if self.is_error {
            self.error_message.as_ref()
        } else {
            self.helper_message.as_ref()
        }
    }

    pub fn visible_lines(&self) -> usize {
        if self.single_line {
            1
        } else {
            self.max_lines.max(1)
        }
    }

    pub fn input_behavior(&self) -> InputBehavior {
        InputBehavior {
            enabled: self.enabled,
            read_only: self.read_only,
            single_line: self.single_line,
            keyboard_options: self.keyboard_options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_state_swaps_trailing_icon_and_caption() {
        let options = FieldOptions::default()
            .with_trailing_icon(Slot::icon("@"))
            .with_error_icon(Slot::icon("!"))
            .with_helper_message(Slot::text("helper"))
            .with_error_message(Slot::text("error"));
        let style = Style::default();

        let icon = options.effective_trailing_icon().expect("trailing");
        assert_eq!(icon.render(style).to_string(), "@");
        let caption = options.effective_caption().expect("helper");
        assert_eq!(caption.render(style).to_string(), "helper");

        let options = options.with_error(true);
        let icon = options.effective_trailing_icon().expect("error icon");
        assert_eq!(icon.render(style).to_string(), "!");
        let caption = options.effective_caption().expect("error");
        assert_eq!(caption.render(style).to_string(), "error");
    }

    #[test]
    fn error_without_message_shows_no_caption() {
        let options = FieldOptions::default()
            .with_helper_message(Slot::text("helper"))
            .with_error(true);
        assert!(options.effective_caption().is_none());
    }

    #[test]
    fn single_line_overrides_max_lines() {
        let options = FieldOptions::default().with_max_lines(5);
        assert_eq!(options.visible_lines(), 5);
        assert_eq!(options.with_single_line(true).visible_lines(), 1);
        assert_eq!(FieldOptions::default().with_max_lines(0).visible_lines(), 1);
    }
}
