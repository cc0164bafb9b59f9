use std::io::{self, Write};

/// The popup's UI surface: two inputs, one output region and a blocking
/// notification. Implementations decide what "display" means.
pub trait PopupView: Send + Sync {
    fn input_text(&self) -> String;

    fn selected_language(&self) -> String;

    fn show_translation(&self, translation: &str);

    fn alert(&self, message: &str);
}

/// Fixed inputs, translation on stdout, alerts on stderr.
pub struct ConsoleView {
    text: String,
    language: String,
}

impl ConsoleView {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
        }
    }
}

impl PopupView for ConsoleView {
    fn input_text(&self) -> String {
        self.text.clone()
    }

    fn selected_language(&self) -> String {
        self.language.clone()
    }

    fn show_translation(&self, translation: &str) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", translation) {
            tracing::warn!(error = %e, "failed to write translation to stdout");
        }
    }

    fn alert(&self, message: &str) {
        let mut stderr = io::stderr().lock();
        if let Err(e) = writeln!(stderr, "{}", message) {
            tracing::warn!(error = %e, "failed to write alert to stderr");
        }
    }
}
