use crate::controller::ClientSession;

/// Command object that knows how to deliver itself to a session.
pub trait RemoteCommand {
    /// Execute the command against the given session.
    fn execute(&self, session: &mut dyn ClientSession);
}

/// Command object carrying a plain text command line.
///
/// Delivered verbatim: no prefix or normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCommand {
    text: String,
}

impl TextCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Return the command text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl RemoteCommand for TextCommand {
    fn execute(&self, session: &mut dyn ClientSession) {
        session.handle_input(self.text.as_bytes());
    }
}
