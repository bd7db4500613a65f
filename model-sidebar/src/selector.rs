//! Reconciles the deck the user asked for with the deck the backend shows.

use model_sidebar_remote::RemoteController;

use crate::deck::{DeckId, UNO_DISPATCH_PREFIX, command_for_deck};

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// No target was set; the target was explicitly cleared.
    Cleared,
    /// The target deck is already the primary one.
    InSync,
    /// The target deck command was sent again.
    Reissued,
}

/// Tracks the target deck independently of backend state.
///
/// The target is always one of the registry decks, so its command is always
/// a [`DeckId::command`] value.
#[derive(Debug, Default)]
pub struct DeckSelector {
    target: Option<DeckId>,
}

impl DeckSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the deck command the sidebar is trying to show.
    pub fn target(&self) -> Option<&'static str> {
        self.target.map(DeckId::command)
    }

    pub fn target_deck(&self) -> Option<DeckId> {
        self.target
    }

    /// Remember the desired deck without contacting the backend.
    pub fn set_target(&mut self, deck: Option<DeckId>) {
        self.target = deck;
    }

    /// Ask the backend to show `deck` and make it the target. `None` clears
    /// the target without sending anything.
    pub fn change_deck(
        &mut self,
        deck: Option<DeckId>,
        remote: &mut dyn RemoteController,
    ) {
        if let Some(deck) = deck {
            let line = format!("{UNO_DISPATCH_PREFIX}{}", deck.command());
            if !remote.send_command(&line) {
                log::debug!("deck command not handed over: {line}");
            }
        }
        self.set_target(deck);
    }

    /// Reconcile the target with the deck the backend reports as primary.
    ///
    /// `is_target_active` is the backend state cache's view of the target
    /// command, when one is available.
    pub fn reconcile(
        &mut self,
        current_deck_id: &str,
        is_target_active: Option<bool>,
        remote: &mut dyn RemoteController,
    ) -> Reconciliation {
        let Some(target) = self.target else {
            self.change_deck(None, remote);
            return Reconciliation::Cleared;
        };

        let active = is_target_active.unwrap_or(false)
            || target.command() == command_for_deck(current_deck_id);
        if active {
            return Reconciliation::InSync;
        }

        log::debug!(
            "deck target {} not active (current {current_deck_id}), reissuing",
            target.command()
        );
        self.change_deck(Some(target), remote);
        Reconciliation::Reissued
    }
}
