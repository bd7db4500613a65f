//! Client-side controller for the model sidebar.
//!
//! The sidebar mirrors the backend editor's property and navigation decks
//! and adds a raw UNO command console. This crate holds the parts with real
//! state:
//! - [`DeckSelector`] keeps the requested deck in sync with the deck the
//!   backend reports as primary;
//! - [`UpdateRouter`] decides which backend updates and actions reach the
//!   [`WidgetBuilder`];
//! - [`CommandConsole`] owns the bounded command history, normalizes and
//!   dispatches commands, and keeps the conversation log;
//! - [`SidebarController`] ties them together and drives visibility.
//!
//! Rendering is left to a [`WidgetBuilder`] implementation, editor
//! surroundings to an [`EditorHost`], persistence to a [`PreferenceStore`]
//! and outbound commands to a
//! [`RemoteController`](model_sidebar_remote::RemoteController).
//!
//! Everything runs on one thread: each event is handled to completion
//! before the next one, and nothing blocks.

mod builder;
mod console;
mod controller;
mod deck;
mod error;
mod event;
mod host;
mod options;
mod preferences;
mod router;
mod selector;
mod widget;

#[cfg(test)]
mod testing;

pub use builder::WidgetBuilder;
pub use console::{
    CommandConsole, CommandHistory, CommandReply, ConsoleKey,
    ConversationLog, DispatchedCommand, EMPTY_CONVERSATION, HISTORY_CAPACITY,
    HISTORY_HINT, HistoryDirection, Message, MessageKind, dispatch_line,
    normalize_command,
};
pub use controller::{SidebarController, SidebarTab, SidebarVisibility};
pub use deck::{
    DeckId, SHOW_SIDEBAR_PREF, UNO_DISPATCH_PREFIX, command_for_deck,
};
pub use error::{PreferencesError, SidebarError};
pub use event::{
    ACTION_EVENT, ActionData, ActionEvent, BackendEvent, PANEL_DESCRIPTOR_EVENT,
    PanelDescriptor, UPDATE_EVENT, UpdateEvent,
};
pub use host::EditorHost;
pub use options::SidebarOptions;
pub use preferences::{
    JsonPreferences, MemoryPreferences, PreferenceStore, PreferencesLoadStatus,
};
pub use router::{ActionRoute, IgnoreReason, UpdateRoute, UpdateRouter};
pub use selector::{DeckSelector, Reconciliation};
pub use widget::{
    DECK_TYPE, TREE_LIST_BOX_TYPE, WidgetNode, mark_navigator_tree_view,
};

pub use model_sidebar_remote as remote;
