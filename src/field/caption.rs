use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::{options::FieldOptions, slot::render_optional};

/// Rows reserved beneath the input box, whether or not a message shows.
pub const CAPTION_HEIGHT: u16 = 1;
pub const CAPTION_PADDING_START: u16 = 2;
pub const CAPTION_PADDING_END: u16 = 1;

pub(crate) fn caption_style(options: &FieldOptions) -> Style {
    let ambient = Style::default().fg(options.theme.on_surface);
    options.theme.caption_style(ambient, options.is_error)
}

/// Draws the helper or error message into `area`. An absent message leaves
/// the strip blank; its rows stay reserved either way.
pub(crate) fn render_caption(options: &FieldOptions, area: Rect, buf: &mut Buffer) {
    let padding = CAPTION_PADDING_START + CAPTION_PADDING_END;
    if area.is_empty() || area.width <= padding {
        return;
    }
    let Some(line) = render_optional(options.effective_caption(), caption_style(options)) else {
        return;
    };
    let x = area.x + CAPTION_PADDING_START;
    buf.set_line(x, area.y, &line, area.width - padding);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::Slot;
    use ratatui::style::{Color, Modifier};

    #[test]
    fn helper_caption_is_dimmed_and_padded() {
        let options = FieldOptions::default().with_helper_message(Slot::text("hi"));
        let area = Rect::new(0, 0, 10, CAPTION_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_caption(&options, area, &mut buf);
        assert_eq!(buf[(2, 0)].symbol(), "h");
        assert_eq!(buf[(3, 0)].symbol(), "i");
        assert!(buf[(2, 0)].modifier.contains(Modifier::DIM));
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }

    #[test]
    fn error_caption_uses_theme_error_color() {
        let options = FieldOptions::default()
            .with_error_message(Slot::text("bad"))
            .with_error(true);
        let area = Rect::new(0, 0, 10, CAPTION_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_caption(&options, area, &mut buf);
        assert_eq!(buf[(2, 0)].fg, Color::Red);
        assert!(!buf[(2, 0)].modifier.contains(Modifier::DIM));
    }

    #[test]
    fn long_caption_stops_before_end_padding() {
        let options = FieldOptions::default().with_helper_message(Slot::text("abcdefghij"));
        let area = Rect::new(0, 0, 8, CAPTION_HEIGHT);
        let mut buf = Buffer::empty(area);
        render_caption(&options, area, &mut buf);
        assert_eq!(buf[(6, 0)].symbol(), "e");
        assert_eq!(buf[(7, 0)].symbol(), " ");
    }
}
