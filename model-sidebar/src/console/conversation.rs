use std::time::{SystemTime, UNIX_EPOCH};

/// Placeholder shown when the conversation is still empty.
pub const EMPTY_CONVERSATION: &str = "No commands have been sent yet.";

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Command,
    Response,
}

/// One entry of the console conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: SystemTime,
}

impl Message {
    pub fn command(content: impl Into<String>) -> Self {
        Self::new(MessageKind::Command, content)
    }

    pub fn response(content: impl Into<String>) -> Self {
        Self::new(MessageKind::Response, content)
    }

    fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            timestamp: SystemTime::now(),
        }
    }

    fn icon(&self) -> &'static str {
        match self.kind {
            MessageKind::Command => "➤",
            MessageKind::Response => "←",
        }
    }

    /// `HH:MM` of the timestamp, in UTC.
    pub fn time_label(&self) -> String {
        let seconds = self
            .timestamp
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
            % SECONDS_PER_DAY;
        format!("{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60)
    }
}

/// Insertion-ordered console conversation. It has no capacity bound and is
/// never trimmed.
#[derive(Debug, Default)]
pub struct ConversationLog {
    messages: Vec<Message>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Render the conversation as display lines.
    pub fn transcript(&self) -> Vec<String> {
        if self.messages.is_empty() {
            return vec![String::from(EMPTY_CONVERSATION)];
        }

        self.messages
            .iter()
            .map(|message| {
                format!(
                    "{} {} [{}]",
                    message.icon(),
                    message.content,
                    message.time_label()
                )
            })
            .collect()
    }
}
