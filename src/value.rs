use serde::{Deserialize, Serialize};

/// A range of char offsets into a field's text.
///
/// `start` is the anchor and `end` the moving edge, so a selection made
/// backwards has `start > end`. A collapsed range is a plain cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub const fn cursor(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    pub const fn collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn min(&self) -> usize {
        self.start.min(self.end)
    }

    pub fn max(&self) -> usize {
        self.start.max(self.end)
    }

    pub fn len(&self) -> usize {
        self.max() - self.min()
    }

    pub fn is_empty(&self) -> bool {
        self.collapsed()
    }

    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.min() && offset < self.max()
    }

    /// Clamps both edges into `0..=len`, keeping the direction.
    pub fn coerce_in(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}

/// Text content together with the selection and IME composition range.
///
/// Values are produced by the input primitive on every keystroke. The field
/// widgets only forward them; they never build edits of their own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FieldValue {
    pub text: String,
    pub selection: TextRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<TextRange>,
}

impl FieldValue {
    /// A value with the cursor at offset zero.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: TextRange::cursor(0),
            composition: None,
        }
    }

    pub fn with_selection(mut self, selection: TextRange) -> Self {
        self.selection = selection.coerce_in(self.char_len());
        self
    }

    pub fn with_composition(mut self, composition: Option<TextRange>) -> Self {
        let len = self.char_len();
        self.composition = composition.map(|range| range.coerce_in(len));
        self
    }

    pub fn with_cursor_at_end(self) -> Self {
        let len = self.char_len();
        self.with_selection(TextRange::cursor(len))
    }

    /// Copies this value with `text` swapped in. Selection and composition
    /// are kept, clamped to the new length.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            selection: self.selection.coerce_in(len),
            composition: self.composition.map(|range| range.coerce_in(len)),
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn cursor(&self) -> usize {
        self.selection.end
    }

    pub fn selected_text(&self) -> &str {
        let start = byte_index(&self.text, self.selection.min());
        let end = byte_index(&self.text, self.selection.max());
        &self.text[start..end]
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Byte index of the char at `char_offset`, or `text.len()` past the end.
pub(crate) fn byte_index(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}
