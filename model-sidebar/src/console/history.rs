use std::collections::VecDeque;

/// Maximum number of distinct commands remembered by the console.
pub const HISTORY_CAPACITY: usize = 50;

/// Direction of a history navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Towards older entries (arrow up).
    Older,
    /// Towards newer entries and finally the empty draft (arrow down).
    Newer,
}

/// Bounded list of distinct commands with a navigation cursor.
///
/// The cursor ranges over `0..=len`; `len` is the empty-draft position.
#[derive(Debug, Default)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    index: usize,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Current cursor position.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn contains(&self, command: &str) -> bool {
        self.entries.iter().any(|entry| entry == command)
    }

    /// Entries from oldest to newest.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Append `command` unless it is already present anywhere in the
    /// history. Existing entries keep their position. Returns whether the
    /// command was added.
    pub fn record(&mut self, command: &str) -> bool {
        if self.contains(command) {
            return false;
        }
        self.entries.push_back(command.to_string());
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        true
    }

    /// Move the cursor to the empty-draft position.
    pub fn reset_cursor(&mut self) {
        self.index = self.entries.len();
    }

    /// Step the cursor, clamped to `0..=len`, and return the draft text for
    /// the new position. Returns `None` when the history is empty.
    pub fn navigate(&mut self, direction: HistoryDirection) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        self.index = match direction {
            HistoryDirection::Older => self.index.saturating_sub(1),
            HistoryDirection::Newer => self.index + 1,
        }
        .min(self.entries.len());

        Some(self.entries.get(self.index).map_or("", String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandHistory, HISTORY_CAPACITY, HistoryDirection};

    fn history_with(commands: &[&str]) -> CommandHistory {
        let mut history = CommandHistory::new();
        for command in commands {
            history.record(command);
        }
        history.reset_cursor();
        history
    }

    #[test]
    fn given_capacity_plus_one_commands_when_recorded_then_oldest_is_evicted() {
        let mut history = CommandHistory::new();

        for index in 0..=HISTORY_CAPACITY {
            history.record(&format!("Command{index}"));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert!(!history.contains("Command0"));
        assert!(history.contains(&format!("Command{HISTORY_CAPACITY}")));
    }

    #[test]
    fn given_known_command_when_recorded_again_then_position_is_unchanged() {
        let mut history = history_with(&["Bold", "Italic"]);

        assert!(!history.record("Bold"));

        let entries: Vec<&str> = history.entries().collect();
        assert_eq!(entries, vec!["Bold", "Italic"]);
    }

    #[test]
    fn given_empty_history_when_navigated_then_nothing_happens() {
        let mut history = CommandHistory::new();

        assert_eq!(history.navigate(HistoryDirection::Older), None);
        assert_eq!(history.index(), 0);
    }

    #[test]
    fn given_cursor_at_oldest_when_navigated_older_then_it_is_clamped() {
        let mut history = history_with(&["Bold", "Italic"]);

        assert_eq!(history.navigate(HistoryDirection::Older), Some("Italic"));
        assert_eq!(history.navigate(HistoryDirection::Older), Some("Bold"));
        assert_eq!(history.navigate(HistoryDirection::Older), Some("Bold"));
        assert_eq!(history.index(), 0);
    }

    #[test]
    fn given_cursor_at_draft_when_navigated_newer_then_draft_stays_empty() {
        let mut history = history_with(&["Bold", "Italic"]);

        assert_eq!(history.navigate(HistoryDirection::Newer), Some(""));
        assert_eq!(history.navigate(HistoryDirection::Newer), Some(""));
        assert_eq!(history.index(), history.len());
    }

    #[test]
    fn given_mixed_steps_when_navigated_then_cursor_stays_in_bounds() {
        let mut history = history_with(&["A", "B", "C"]);
        let steps = [
            HistoryDirection::Older,
            HistoryDirection::Older,
            HistoryDirection::Older,
            HistoryDirection::Older,
            HistoryDirection::Newer,
            HistoryDirection::Newer,
            HistoryDirection::Newer,
            HistoryDirection::Newer,
            HistoryDirection::Older,
        ];

        for step in steps {
            history.navigate(step);
            assert!(history.index() <= history.len());
        }
        assert_eq!(history.index(), 2);
    }
}
