#![deny(rust_2018_idioms)]
//! A `ratatui` text field that keeps a caption strip beneath its input box.
//!
//! The strip shows a helper message, or the error message while the field is
//! in error, in which case the error icon also replaces the trailing icon.
//! [`TextField`] is driven by a [`FieldValue`] (text plus selection);
//! [`StringField`] by a plain string, retaining the selection itself.

mod field;
pub mod input;
mod options;
#[cfg(feature = "preview")]
pub mod preview;
mod slot;
mod theme;
mod value;

pub use field::{
    CAPTION_HEIGHT, CAPTION_PADDING_END, CAPTION_PADDING_START, FieldEvent, FieldLayout,
    StringField, StringFieldState, TextField,
};
pub use options::FieldOptions;
pub use slot::Slot;
pub use theme::{FieldColors, FieldShape, Theme};
pub use value::{FieldValue, TextRange};

pub mod prelude {
    pub use super::input::{
        ImeAction, InteractionSource, KeyboardActions, KeyboardOptions, VisualTransformation,
    };
    pub use super::{
        FieldEvent, FieldOptions, FieldValue, Slot, StringField, StringFieldState, TextField,
        TextRange,
    };
}
