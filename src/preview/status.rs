#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
}

pub const READY_STATUS: &str = "Ready. Type to edit, Ctrl+E toggles the error state.";

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            message: READY_STATUS.to_string(),
        }
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ready(&mut self) {
        self.message = READY_STATUS.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn error_toggled(&mut self, label: &str, is_error: bool) {
        let state = if is_error { "on" } else { "off" };
        self.message = format!("{label}: error state {state}");
    }

    pub fn action(&mut self, label: &str, action: &str) {
        self.message = format!("{label}: {action}");
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
