use std::sync::Mutex;

/// Destination for user-facing status text.
///
/// The service UI has two reporting conventions: a status line whose
/// text is overwritten on every report, and a task log that accumulates
/// entries. Both live behind this trait so each handler flow is written
/// once.
pub trait StatusSink: Send + Sync {
    fn report(&self, message: &str);
}

/// Overwrite sink: keeps only the most recent report.
#[derive(Debug, Default)]
pub struct StatusLine {
    text: Mutex<String>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.text.lock().unwrap().clone()
    }
}

impl StatusSink for StatusLine {
    fn report(&self, message: &str) {
        *self.text.lock().unwrap() = message.to_string();
    }
}

/// Append sink: accumulates every report in order.
#[derive(Debug, Default)]
pub struct StatusLog {
    entries: Mutex<Vec<String>>,
}

impl StatusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }
}

impl StatusSink for StatusLog {
    fn report(&self, message: &str) {
        self.entries.lock().unwrap().push(message.to_string());
    }
}
