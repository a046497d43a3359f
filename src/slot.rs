use std::{borrow::Cow, fmt, rc::Rc};

use ratatui::{style::Style, text::Line};

/// An optional piece of field content: label, icon, or caption message.
///
/// The closure receives the ambient style the field computed for that
/// position (caption color, icon color, label color) and returns the line
/// to draw. A field with no slot draws nothing there.
#[derive(Clone)]
pub struct Slot(Rc<dyn Fn(Style) -> Line<'static>>);

impl Slot {
    pub fn new(render: impl Fn(Style) -> Line<'static> + 'static) -> Self {
        Self(Rc::new(render))
    }

    /// Plain text drawn in the ambient style.
    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        let text: Cow<'static, str> = text.into();
        Self::new(move |style| Line::styled(text.clone(), style))
    }

    /// A glyph used as an icon. Same as [`Slot::text`], kept separate so
    /// call sites read the way they are meant.
    pub fn icon(glyph: impl Into<Cow<'static, str>>) -> Self {
        Self::text(glyph)
    }

    pub fn render(&self, style: Style) -> Line<'static> {
        (self.0)(style)
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Slot(..)")
    }
}

pub(crate) fn render_optional(slot: Option<&Slot>, style: Style) -> Option<Line<'static>> {
    slot.map(|slot| slot.render(style))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Modifier};

    #[test]
    fn text_slot_uses_ambient_style() {
        let slot = Slot::text("hint");
        let style = Style::default().fg(Color::Red).add_modifier(Modifier::DIM);
        let line = slot.render(style);
        assert_eq!(line.to_string(), "hint");
        assert_eq!(line.style, style);
    }

    #[test]
    fn absent_slot_renders_nothing() {
        assert!(render_optional(None, Style::default()).is_none());
    }
}
