//! Ready-made field configurations and a terminal runtime that shows them.

mod app;
mod options;
mod session;
mod status;

use crate::{
    input::{ImeAction, KeyboardOptions},
    options::FieldOptions,
    slot::Slot,
};

pub use app::{PreviewApp, PreviewReport, PreviewResult};
pub use options::PreviewOptions;

pub const ACCOUNT_ICON: &str = "◉";
pub const ERROR_ICON: &str = "⚠";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    /// Empty value-driven field with a helper message.
    DayHelper,
    /// Value-driven field forced into the error state.
    DayError,
    /// String-driven field whose error state follows its text.
    DayString,
}

impl Preview {
    pub const ALL: [Preview; 3] = [Preview::DayHelper, Preview::DayError, Preview::DayString];

    pub fn title(self) -> &'static str {
        match self {
            Preview::DayHelper => "Day · Helper",
            Preview::DayError => "Day · Error",
            Preview::DayString => "Day · String",
        }
    }

    pub fn is_string_driven(self) -> bool {
        matches!(self, Preview::DayString)
    }

    /// Error state before any user toggle. The string preview rejects
    /// whitespace.
    pub fn base_error(self, text: &str) -> bool {
        match self {
            Preview::DayHelper => false,
            Preview::DayError => true,
            Preview::DayString => text.chars().any(char::is_whitespace),
        }
    }

    pub fn options(self) -> FieldOptions {
        let options = FieldOptions::default().with_error_icon(Slot::icon(ERROR_ICON));
        match self {
            Preview::DayHelper => options
                .with_trailing_icon(Slot::icon(ACCOUNT_ICON))
                .with_helper_message(Slot::text("This is an helper!")),
            Preview::DayError => options
                .with_error_message(Slot::text("This is an error!"))
                .with_error(true),
            Preview::DayString => options
                .with_label(Slot::text("Username"))
                .with_placeholder(Slot::text("letters, digits, dashes"))
                .with_trailing_icon(Slot::icon(ACCOUNT_ICON))
                .with_helper_message(Slot::text("Pick a handle without spaces"))
                .with_error_message(Slot::text("Whitespace is not allowed"))
                .with_keyboard_options(KeyboardOptions::default().with_ime_action(ImeAction::Done)),
        }
    }
}

impl std::str::FromStr for Preview {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "helper" => Ok(Preview::DayHelper),
            "error" => Ok(Preview::DayError),
            "string" => Ok(Preview::DayString),
            other => Err(format!("unknown preview '{other}'")),
        }
    }
}
