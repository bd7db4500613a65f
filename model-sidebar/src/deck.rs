//! Static mapping between sidebar decks and their activation commands.

/// Wire prefix of every UNO command dispatched to the backend.
pub const UNO_DISPATCH_PREFIX: &str = "uno ";

/// Preference key remembering whether the sidebar was last shown.
pub const SHOW_SIDEBAR_PREF: &str = "ShowModelSidebar";

/// Decks the backend can render in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckId {
    Property,
    SlideTransition,
    CustomAnimation,
    MasterPages,
    Navigator,
    StyleList,
    A11yCheck,
}

impl DeckId {
    /// Every known deck, in preference-reset order.
    pub const ALL: [DeckId; 7] = [
        DeckId::Property,
        DeckId::SlideTransition,
        DeckId::CustomAnimation,
        DeckId::MasterPages,
        DeckId::Navigator,
        DeckId::StyleList,
        DeckId::A11yCheck,
    ];

    /// Parse a backend deck identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|deck| deck.id() == id)
    }

    /// Backend identifier, also used as the deck's preference key.
    pub fn id(self) -> &'static str {
        match self {
            DeckId::Property => "PropertyDeck",
            DeckId::SlideTransition => "SdSlideTransitionDeck",
            DeckId::CustomAnimation => "SdCustomAnimationDeck",
            DeckId::MasterPages => "SdMasterPagesDeck",
            DeckId::Navigator => "NavigatorDeck",
            DeckId::StyleList => "StyleListDeck",
            DeckId::A11yCheck => "A11yCheckDeck",
        }
    }

    /// UNO command that makes this deck the primary one.
    pub fn command(self) -> &'static str {
        match self {
            DeckId::Property => ".uno:ModelSidebarDeck.PropertyDeck",
            DeckId::SlideTransition => ".uno:SlideChangeWindow",
            DeckId::CustomAnimation => ".uno:CustomAnimation",
            DeckId::MasterPages => ".uno:MasterSlidesPanel",
            DeckId::Navigator => ".uno:Navigator",
            DeckId::StyleList => ".uno:ModelSidebarDeck.StyleListDeck",
            DeckId::A11yCheck => ".uno:ModelSidebarDeck.A11yCheckDeck",
        }
    }
}

/// Return the activation command for a backend deck id, or `""` when the id
/// is unknown.
pub fn command_for_deck(deck_id: &str) -> &'static str {
    DeckId::from_id(deck_id).map(DeckId::command).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::command_for_deck;

    #[test]
    fn given_known_deck_ids_when_looked_up_then_literal_commands_are_returned()
    {
        let expected = [
            ("PropertyDeck", ".uno:ModelSidebarDeck.PropertyDeck"),
            ("SdSlideTransitionDeck", ".uno:SlideChangeWindow"),
            ("SdCustomAnimationDeck", ".uno:CustomAnimation"),
            ("SdMasterPagesDeck", ".uno:MasterSlidesPanel"),
            ("NavigatorDeck", ".uno:Navigator"),
            ("StyleListDeck", ".uno:ModelSidebarDeck.StyleListDeck"),
            ("A11yCheckDeck", ".uno:ModelSidebarDeck.A11yCheckDeck"),
        ];

        for (deck_id, command) in expected {
            assert_eq!(command_for_deck(deck_id), command, "{deck_id}");
        }
    }

    #[test]
    fn given_unknown_deck_id_when_looked_up_then_empty_command_is_returned() {
        assert_eq!(command_for_deck("GalleryDeck"), "");
        assert_eq!(command_for_deck(""), "");
    }
}
