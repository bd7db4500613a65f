//! Raw command console: history, normalization, dispatch and conversation.

mod conversation;
mod history;
mod reply;

pub use self::conversation::{
    ConversationLog, EMPTY_CONVERSATION, Message, MessageKind,
};
pub use self::history::{CommandHistory, HISTORY_CAPACITY, HistoryDirection};
pub use self::reply::CommandReply;

use model_sidebar_remote::RemoteController;

use crate::deck::UNO_DISPATCH_PREFIX;

/// Hint shown on input focus once there is history to browse.
pub const HISTORY_HINT: &str = "Use ↑ ↓ keys to navigate command history";

const UNO_COMMAND_PREFIX: &str = ".uno:";

/// Keys the console input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleKey {
    Enter,
    ArrowUp,
    ArrowDown,
}

/// A command accepted by the console and handed to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedCommand {
    /// Command as logged in the conversation.
    pub normalized: String,
    /// Line sent over the command channel.
    pub wire: String,
}

/// Command console state owned by one sidebar instance.
#[derive(Debug)]
pub struct CommandConsole {
    history: CommandHistory,
    log: ConversationLog,
    draft: String,
    placeholder_response: String,
}

impl CommandConsole {
    pub fn new(placeholder_response: impl Into<String>) -> Self {
        Self {
            history: CommandHistory::new(),
            log: ConversationLog::new(),
            draft: String::new(),
            placeholder_response: placeholder_response.into(),
        }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Current contents of the input field.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn history_hint(&self) -> Option<&'static str> {
        (!self.history.is_empty()).then_some(HISTORY_HINT)
    }

    /// React to a key pressed in the input field.
    pub fn handle_key(
        &mut self,
        key: ConsoleKey,
        remote: &mut dyn RemoteController,
    ) -> Option<DispatchedCommand> {
        match key {
            ConsoleKey::Enter => self.submit(remote),
            ConsoleKey::ArrowUp => {
                self.navigate_history(HistoryDirection::Older);
                None
            },
            ConsoleKey::ArrowDown => {
                self.navigate_history(HistoryDirection::Newer);
                None
            },
        }
    }

    /// Execute the current draft.
    pub fn submit(
        &mut self,
        remote: &mut dyn RemoteController,
    ) -> Option<DispatchedCommand> {
        let raw = self.draft.clone();
        self.execute_command(&raw, remote)
    }

    /// Record, log and dispatch a console command. Blank input is ignored.
    pub fn execute_command(
        &mut self,
        raw: &str,
        remote: &mut dyn RemoteController,
    ) -> Option<DispatchedCommand> {
        let command = raw.trim();
        if command.is_empty() {
            return None;
        }

        self.history.record(command);
        self.history.reset_cursor();

        let normalized = normalize_command(command);
        self.log.push(Message::command(normalized.as_str()));
        // Stand-in until the backend reply is correlated with the command.
        self.log
            .push(Message::response(self.placeholder_response.as_str()));

        let wire = dispatch_line(&normalized);
        if !remote.send_command(&wire) {
            log::debug!("console command not handed over: {wire}");
        }
        log::info!("ModelSidebar: Command sent: {normalized}");

        self.draft.clear();
        Some(DispatchedCommand { normalized, wire })
    }

    /// Replace the draft with the neighbouring history entry.
    pub fn navigate_history(&mut self, direction: HistoryDirection) {
        if let Some(draft) = self.history.navigate(direction) {
            self.draft = draft.to_string();
        }
    }

    /// Append a backend response to the conversation.
    pub fn add_response(&mut self, content: impl Into<String>) {
        self.log.push(Message::response(content));
    }
}

/// Prefix bare command names with `.uno:`.
pub fn normalize_command(command: &str) -> String {
    if command.starts_with(UNO_DISPATCH_PREFIX)
        || command.starts_with(UNO_COMMAND_PREFIX)
    {
        command.to_string()
    } else {
        format!("{UNO_COMMAND_PREFIX}{command}")
    }
}

/// Wire form of a normalized command.
pub fn dispatch_line(normalized: &str) -> String {
    if normalized.starts_with(UNO_COMMAND_PREFIX) {
        format!("{UNO_DISPATCH_PREFIX}{normalized}")
    } else {
        normalized.to_string()
    }
}
