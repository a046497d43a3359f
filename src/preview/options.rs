use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PreviewOptions {
    pub tick_rate: Duration,
    pub password: bool,
    pub single_line: bool,
    pub show_help: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            password: false,
            single_line: false,
            show_help: true,
        }
    }
}

impl PreviewOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Masks the string preview with a password transformation.
    pub fn with_password(mut self, password: bool) -> Self {
        self.password = password;
        self
    }

    /// Makes every preview single-line; Enter then moves to the next one.
    pub fn with_single_line(mut self, single_line: bool) -> Self {
        self.single_line = single_line;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }
}
