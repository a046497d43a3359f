/// How the field displays its text. Transformations map chars one to one,
/// so cursor and selection offsets apply unchanged to the displayed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualTransformation {
    #[default]
    None,
    Password {
        mask: char,
    },
}

impl VisualTransformation {
    pub const fn password() -> Self {
        VisualTransformation::Password { mask: '•' }
    }

    pub fn apply(&self, text: &str) -> String {
        match self {
            VisualTransformation::None => text.to_string(),
            VisualTransformation::Password { mask } => text
                .chars()
                .map(|ch| if ch == '\n' { ch } else { *mask })
                .collect(),
        }
    }
}
