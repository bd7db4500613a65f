use std::io::Write;

use model_sidebar::{
    ActionData, EditorHost, JsonPreferences, MemoryPreferences,
    PanelDescriptor, PreferenceStore, WidgetBuilder, WidgetNode,
};
use model_sidebar_remote::ClientSession;

/// Session printing every outbound command line to stdout.
pub(crate) struct StdoutSession;

impl ClientSession for StdoutSession {
    fn handle_input(&mut self, buffer: &[u8]) {
        let line = String::from_utf8_lossy(buffer);
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = writeln!(stdout, "-> {line}") {
            log::warn!("failed to print outbound command: {err}");
        }
    }
}

/// Builder reporting what would be rendered.
pub(crate) struct TraceBuilder {
    window_id: String,
}

impl TraceBuilder {
    pub(crate) fn new() -> Self {
        Self {
            window_id: String::new(),
        }
    }
}

impl WidgetBuilder for TraceBuilder {
    fn set_window_id(&mut self, id: &str) {
        self.window_id = id.to_string();
    }

    fn clear_content(&mut self) {
        log::debug!("window {}: content cleared", self.window_id);
    }

    fn build(&mut self, descriptor: &PanelDescriptor) {
        let decks: Vec<&str> = descriptor
            .children
            .iter()
            .flatten()
            .map(|deck| deck.id.as_str())
            .collect();
        println!("build window {}: decks [{}]", self.window_id, decks.join(", "));
        match serde_json::to_string(descriptor) {
            Ok(tree) => log::debug!("window {}: {tree}", self.window_id),
            Err(err) => log::warn!("failed to encode built panel: {err}"),
        }
    }

    fn update_widget(&mut self, control: Option<&WidgetNode>) {
        match control {
            Some(control) => println!(
                "update window {}: {} ({})",
                self.window_id, control.id, control.kind
            ),
            None => println!("update window {}: empty", self.window_id),
        }
    }

    fn execute_action(&mut self, action: &ActionData) {
        println!(
            "action window {}: {} on {}",
            self.window_id, action.action_type, action.control_id
        );
    }
}

/// Editor surroundings configured from the command line.
pub(crate) struct CliHost {
    disabled: bool,
    read_only: bool,
    editor_focused: bool,
}

impl CliHost {
    pub(crate) fn new(disabled: bool, read_only: bool) -> Self {
        Self {
            disabled,
            read_only,
            editor_focused: false,
        }
    }
}

impl EditorHost for CliHost {
    fn is_sidebar_disabled(&self) -> bool {
        self.disabled
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn editor_has_focus(&self) -> bool {
        self.editor_focused
    }

    fn focus_editor(&mut self) {
        log::debug!("focus returned to editor");
        self.editor_focused = true;
    }

    fn recompute_layout(&mut self) {
        log::debug!("layout recomputed");
    }
}

/// Preference store selected on the command line.
pub(crate) enum CliPreferences {
    Memory(MemoryPreferences),
    File(JsonPreferences),
}

impl PreferenceStore for CliPreferences {
    fn get(&self, key: &str) -> bool {
        match self {
            CliPreferences::Memory(store) => store.get(key),
            CliPreferences::File(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: bool) {
        match self {
            CliPreferences::Memory(store) => store.set(key, value),
            CliPreferences::File(store) => store.set(key, value),
        }
    }
}
