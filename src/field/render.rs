use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::{options::FieldOptions, slot::render_optional, value::FieldValue};

/// Where the parts of the input box land inside its area.
pub(crate) struct BoxGeometry {
    pub text_area: Rect,
    pub leading: Option<(Rect, Line<'static>)>,
    pub trailing: Option<(Rect, Line<'static>)>,
}

/// The scrolled window onto the displayed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Viewport {
    pub first_line: usize,
    pub skip_chars: usize,
    pub cursor: Position,
}

pub(crate) fn input_block(options: &FieldOptions) -> Block<'static> {
    let focused = options.is_focused();
    let colors = &options.colors;
    let indicator = colors.indicator_color(options.enabled, options.is_error, focused);
    let mut block = Block::default()
        .borders(options.shape.borders())
        .border_type(options.shape.border_type())
        .border_style(Style::default().fg(indicator))
        .style(Style::default().bg(colors.background));
    let label_style =
        Style::default().fg(colors.label_color(options.enabled, options.is_error, focused));
    if let Some(label) = render_optional(options.label.as_ref(), label_style) {
        block = block.title(label);
    }
    block
}

pub(crate) fn geometry(options: &FieldOptions, area: Rect) -> BoxGeometry {
    let mut text_area = input_block(options).inner(area);
    let rows = u16::try_from(options.visible_lines()).unwrap_or(u16::MAX);
    text_area.height = text_area.height.min(rows);

    let leading_style =
        Style::default().fg(options.colors.leading_icon_color(options.enabled));
    let leading = render_optional(options.leading_icon.as_ref(), leading_style).map(|line| {
        let width = (line.width() as u16).min(text_area.width);
        let rect = Rect::new(text_area.x, text_area.y, width, text_area.height.min(1));
        let used = width.saturating_add(1).min(text_area.width);
        text_area.x += used;
        text_area.width -= used;
        (rect, line)
    });

    let trailing_style = Style::default().fg(
        options
            .colors
            .trailing_icon_color(options.enabled, options.is_error),
    );
    let trailing =
        render_optional(options.effective_trailing_icon(), trailing_style).map(|line| {
            let width = (line.width() as u16).min(text_area.width);
            let x = text_area.right().saturating_sub(width);
            let rect = Rect::new(x, text_area.y, width, text_area.height.min(1));
            text_area.width -= width.saturating_add(1).min(text_area.width);
            (rect, line)
        });

    BoxGeometry {
        text_area,
        leading,
        trailing,
    }
}

fn text_style(options: &FieldOptions) -> Style {
    let style = options
        .text_style
        .fg(options.colors.text_color(options.enabled));
    if options.enabled {
        style
    } else {
        style.add_modifier(options.theme.disabled_emphasis)
    }
}

/// Splits `text` into lines, pairing each with the char offset it starts at.
fn lines_with_offsets(text: &str) -> Vec<(usize, Vec<char>)> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        let len = chars.len();
        lines.push((offset, chars));
        offset += len + 1;
    }
    lines
}

fn chars_width(chars: &[char]) -> usize {
    chars.iter().map(|ch| ch.width().unwrap_or(0)).sum()
}

pub(crate) fn viewport(value: &FieldValue, text_area: Rect) -> Viewport {
    let lines = lines_with_offsets(&value.text);
    let cursor = value.cursor().min(value.char_len());
    let (cursor_line, cursor_col) = lines
        .iter()
        .enumerate()
        .find(|(_, (start, chars))| cursor >= *start && cursor <= start + chars.len())
        .map(|(idx, (start, _))| (idx, cursor - start))
        .unwrap_or((0, 0));

    let rows = (text_area.height as usize).max(1);
    let first_line = (cursor_line + 1).saturating_sub(rows);

    let width = (text_area.width as usize).max(1);
    let line_chars = &lines[cursor_line].1;
    let mut skip_chars = 0;
    while skip_chars < cursor_col && chars_width(&line_chars[skip_chars..cursor_col]) >= width {
        skip_chars += 1;
    }
    let column = chars_width(&line_chars[skip_chars..cursor_col]);

    Viewport {
        first_line,
        skip_chars,
        cursor: Position::new(
            text_area.x + column as u16,
            text_area.y + (cursor_line - first_line) as u16,
        ),
    }
}

/// The value as drawn: transformed, and folded onto one row for single-line
/// fields. Char offsets match `value` one to one.
fn displayed_value(value: &FieldValue, options: &FieldOptions) -> FieldValue {
    let mut text = options.visual_transformation.apply(&value.text);
    if options.single_line {
        text = text.replace('\n', " ");
    }
    FieldValue {
        text,
        selection: value.selection,
        composition: value.composition,
    }
}

/// Renders the input box and returns where the terminal cursor belongs when
/// the field is focused.
pub(crate) fn render_input_box(
    value: &FieldValue,
    options: &FieldOptions,
    area: Rect,
    buf: &mut Buffer,
) -> Option<Position> {
    if area.is_empty() {
        return None;
    }
    input_block(options).render(area, buf);
    let geometry = geometry(options, area);

    if let Some((rect, line)) = &geometry.leading {
        buf.set_line(rect.x, rect.y, line, rect.width);
    }
    if let Some((rect, line)) = &geometry.trailing {
        buf.set_line(rect.x, rect.y, line, rect.width);
    }

    let text_area = geometry.text_area;
    if text_area.is_empty() {
        return None;
    }

    let focused = options.is_focused();
    if value.text.is_empty() {
        if focused || options.label.is_none() {
            let style = Style::default().fg(options.colors.placeholder);
            if let Some(line) = render_optional(options.placeholder.as_ref(), style) {
                buf.set_line(text_area.x, text_area.y, &line, text_area.width);
            }
        }
        return render_cursor(options, text_area.as_position(), text_area, buf);
    }

    let shown = displayed_value(value, options);
    let view = viewport(&shown, text_area);
    let base = text_style(options);

    let lines = lines_with_offsets(&shown.text);
    for (row, (start, chars)) in lines
        .iter()
        .skip(view.first_line)
        .take(text_area.height as usize)
        .enumerate()
    {
        let y = text_area.y + row as u16;
        let mut x = text_area.x;
        for (idx, ch) in chars.iter().enumerate().skip(view.skip_chars) {
            let width = ch.width().unwrap_or(0) as u16;
            if x + width > text_area.right() {
                break;
            }
            let offset = start + idx;
            let mut style = base;
            if focused && shown.selection.contains(offset) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if shown
                .composition
                .is_some_and(|range| range.contains(offset))
            {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            let mut symbol = [0u8; 4];
            buf.set_stringn(x, y, ch.encode_utf8(&mut symbol), width as usize, style);
            x += width;
        }
    }

    render_cursor(options, view.cursor, text_area, buf)
}

fn render_cursor(
    options: &FieldOptions,
    cursor: Position,
    text_area: Rect,
    buf: &mut Buffer,
) -> Option<Position> {
    if !options.is_focused() || !options.enabled || !text_area.contains(cursor) {
        return None;
    }
    let color = options.colors.cursor_color(options.is_error);
    buf[cursor].set_style(Style::default().bg(color));
    Some(cursor)
}

/// The cursor cell for `value` inside an input box drawn at `area`, or
/// `None` when the field is unfocused or disabled.
pub(crate) fn cursor_position(
    value: &FieldValue,
    options: &FieldOptions,
    area: Rect,
) -> Option<Position> {
    if area.is_empty() || !options.is_focused() || !options.enabled {
        return None;
    }
    let text_area = geometry(options, area).text_area;
    if text_area.is_empty() {
        return None;
    }
    let cursor = if value.text.is_empty() {
        text_area.as_position()
    } else {
        viewport(&displayed_value(value, options), text_area).cursor
    };
    text_area.contains(cursor).then_some(cursor)
}

/// Rows the text needs, before the `max_lines` cap.
pub(crate) fn text_rows(value: &FieldValue) -> usize {
    value.text.split('\n').count().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TextRange;

    #[test]
    fn viewport_scrolls_to_keep_cursor_visible() {
        let value = FieldValue::new("abcdefghij").with_cursor_at_end();
        let area = Rect::new(0, 0, 4, 1);
        let view = viewport(&value, area);
        assert_eq!(view.skip_chars, 7);
        assert_eq!(view.cursor, Position::new(3, 0));
    }

    #[test]
    fn viewport_scrolls_lines_to_cursor() {
        let value = FieldValue::new("a\nb\nc\nd").with_selection(TextRange::cursor(6));
        let area = Rect::new(0, 0, 10, 2);
        let view = viewport(&value, area);
        assert_eq!(view.first_line, 2);
        assert_eq!(view.cursor, Position::new(0, 1));
    }

    #[test]
    fn text_area_never_exceeds_visible_lines() {
        let options = FieldOptions::default().with_max_lines(2);
        let area = Rect::new(0, 0, 20, 9);
        assert_eq!(geometry(&options, area).text_area.height, 2);
        let single = FieldOptions::default().with_single_line(true);
        assert_eq!(geometry(&single, area).text_area.height, 1);
    }

    #[test]
    fn single_line_folds_line_breaks_into_spaces() {
        let options = FieldOptions::default().with_single_line(true);
        let value = FieldValue::new("ab\ncd").with_cursor_at_end();
        let shown = displayed_value(&value, &options);
        assert_eq!(shown.text, "ab cd");
        assert_eq!(shown.selection, value.selection);
    }

    #[test]
    fn viewport_handles_wide_chars() {
        let value = FieldValue::new("日本語").with_cursor_at_end();
        let area = Rect::new(0, 0, 5, 1);
        let view = viewport(&value, area);
        assert_eq!(view.skip_chars, 1);
        assert_eq!(view.cursor, Position::new(4, 0));
    }
}
