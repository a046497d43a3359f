use std::{fmt, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardType {
    #[default]
    Text,
    Ascii,
    Number,
    Decimal,
    Phone,
    Email,
    Uri,
    Password,
}

impl KeyboardType {
    pub fn accepts(self, ch: char) -> bool {
        match self {
            KeyboardType::Number => ch.is_ascii_digit(),
            KeyboardType::Decimal => ch.is_ascii_digit() || matches!(ch, '.' | ',' | '-'),
            KeyboardType::Phone => ch.is_ascii_digit() || "+-()*# ".contains(ch),
            KeyboardType::Ascii => ch.is_ascii(),
            KeyboardType::Text | KeyboardType::Email | KeyboardType::Uri | KeyboardType::Password => {
                true
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capitalization {
    #[default]
    None,
    Characters,
    Words,
    Sentences,
}

/// What Enter does in a single-line field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImeAction {
    #[default]
    Done,
    Go,
    Next,
    Previous,
    Search,
    Send,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardOptions {
    pub keyboard_type: KeyboardType,
    pub capitalization: Capitalization,
    pub ime_action: ImeAction,
}

impl KeyboardOptions {
    pub fn with_keyboard_type(mut self, keyboard_type: KeyboardType) -> Self {
        self.keyboard_type = keyboard_type;
        self
    }

    pub fn with_capitalization(mut self, capitalization: Capitalization) -> Self {
        self.capitalization = capitalization;
        self
    }

    pub fn with_ime_action(mut self, ime_action: ImeAction) -> Self {
        self.ime_action = ime_action;
        self
    }

    /// Filters and cases `text` as it would be typed at a position whose
    /// preceding text is `before`.
    pub(crate) fn shape_input(&self, before: &str, text: &str) -> String {
        let mut previous = before.chars().next_back();
        let mut sentence_end = before.trim_end().chars().next_back();
        let mut shaped = String::with_capacity(text.len());
        for ch in text.chars() {
            if !self.keyboard_type.accepts(ch) && ch != '\n' {
                continue;
            }
            let upper = match self.capitalization {
                Capitalization::None => false,
                Capitalization::Characters => true,
                Capitalization::Words => previous.is_none_or(char::is_whitespace),
                Capitalization::Sentences => {
                    previous.is_none_or(char::is_whitespace)
                        && sentence_end.is_none_or(|end| matches!(end, '.' | '!' | '?'))
                }
            };
            if upper {
                shaped.extend(ch.to_uppercase());
            } else {
                shaped.push(ch);
            }
            previous = Some(ch);
            if !ch.is_whitespace() {
                sentence_end = Some(ch);
            }
        }
        shaped
    }
}

pub type ActionHandler = Rc<dyn Fn()>;

/// Handlers for IME actions. An action without a handler falls back to its
/// default: `Done` drops focus, the rest do nothing.
#[derive(Clone, Default)]
pub struct KeyboardActions {
    pub on_done: Option<ActionHandler>,
    pub on_go: Option<ActionHandler>,
    pub on_next: Option<ActionHandler>,
    pub on_previous: Option<ActionHandler>,
    pub on_search: Option<ActionHandler>,
    pub on_send: Option<ActionHandler>,
}

impl KeyboardActions {
    pub fn on_done(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_done = Some(Rc::new(handler));
        self
    }

    pub fn on_go(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_go = Some(Rc::new(handler));
        self
    }

    pub fn on_next(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_next = Some(Rc::new(handler));
        self
    }

    pub fn on_previous(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_previous = Some(Rc::new(handler));
        self
    }

    pub fn on_search(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_search = Some(Rc::new(handler));
        self
    }

    pub fn on_send(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_send = Some(Rc::new(handler));
        self
    }

    pub fn handler(&self, action: ImeAction) -> Option<&ActionHandler> {
        match action {
            ImeAction::Done => self.on_done.as_ref(),
            ImeAction::Go => self.on_go.as_ref(),
            ImeAction::Next => self.on_next.as_ref(),
            ImeAction::Previous => self.on_previous.as_ref(),
            ImeAction::Search => self.on_search.as_ref(),
            ImeAction::Send => self.on_send.as_ref(),
        }
    }
}

impl fmt::Debug for KeyboardActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardActions")
            .field("on_done", &self.on_done.is_some())
            .field("on_go", &self.on_go.is_some())
            .field("on_next", &self.on_next.is_some())
            .field("on_previous", &self.on_previous.is_some())
            .field("on_search", &self.on_search.is_some())
            .field("on_send", &self.on_send.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_keyboard_drops_letters() {
        let options = KeyboardOptions::default().with_keyboard_type(KeyboardType::Number);
        assert_eq!(options.shape_input("", "a1b2"), "12");
    }

    #[test]
    fn word_capitalization_follows_whitespace() {
        let options = KeyboardOptions::default().with_capitalization(Capitalization::Words);
        assert_eq!(options.shape_input("", "hello world"), "Hello World");
        assert_eq!(options.shape_input("ab", "c"), "c");
    }

    #[test]
    fn sentence_capitalization_waits_for_terminator() {
        let options = KeyboardOptions::default().with_capitalization(Capitalization::Sentences);
        assert_eq!(options.shape_input("", "one. two three"), "One. Two three");
        assert_eq!(options.shape_input("done.", " next"), " Next");
    }
}
