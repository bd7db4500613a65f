//! Sidebar lifecycle: event subscription, visibility and preferences.

mod state;

pub use state::{SidebarTab, SidebarVisibility};

use model_sidebar_remote::RemoteController;
use serde_json::Value;

use crate::builder::WidgetBuilder;
use crate::console::{
    CommandConsole, CommandReply, ConsoleKey, DispatchedCommand,
};
use crate::deck::{DeckId, SHOW_SIDEBAR_PREF};
use crate::event::{BackendEvent, PanelDescriptor};
use crate::host::EditorHost;
use crate::options::SidebarOptions;
use crate::preferences::PreferenceStore;
use crate::router::UpdateRouter;
use crate::selector::DeckSelector;
use crate::widget::{WidgetNode, mark_first_tree_list_box};
use state::SidebarState;

const NAVIGATOR_DECK_PREFIX: &str = "Navigator";
const INACTIVE_STATE: &str = "false";

/// Client-side controller of one model sidebar instance.
///
/// All events are handled to completion, one at a time. Outgoing commands
/// are fire-and-forget.
pub struct SidebarController<R, B, P, H> {
    options: SidebarOptions,
    remote: R,
    builder: B,
    preferences: P,
    host: H,
    selector: DeckSelector,
    console: CommandConsole,
    router: UpdateRouter,
    state: SidebarState,
}

impl<R, B, P, H> SidebarController<R, B, P, H>
where
    R: RemoteController,
    B: WidgetBuilder,
    P: PreferenceStore,
    H: EditorHost,
{
    pub fn new(
        options: SidebarOptions,
        remote: R,
        builder: B,
        preferences: P,
        host: H,
    ) -> Self {
        let console =
            CommandConsole::new(options.placeholder_response.as_str());
        let router = UpdateRouter::new(options.namespace.as_str());
        Self {
            options,
            remote,
            builder,
            preferences,
            host,
            selector: DeckSelector::new(),
            console,
            router,
            state: SidebarState::new(),
        }
    }

    pub fn options(&self) -> &SidebarOptions {
        &self.options
    }

    pub fn visibility(&self) -> SidebarVisibility {
        self.state.visibility()
    }

    pub fn is_visible(&self) -> bool {
        self.state.visibility() == SidebarVisibility::Visible
    }

    pub fn active_tab(&self) -> SidebarTab {
        self.state.tab()
    }

    /// Deck command the sidebar is trying to show.
    pub fn target_deck(&self) -> Option<&'static str> {
        self.selector.target()
    }

    pub fn console(&self) -> &CommandConsole {
        &self.console
    }

    pub fn remote(&self) -> &R {
        &self.remote
    }

    /// Outbound channel, for commands that bypass the console.
    pub fn remote_mut(&mut self) -> &mut R {
        &mut self.remote
    }

    pub fn builder(&self) -> &B {
        &self.builder
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Whether the sidebar was showing when the document was last open.
    pub fn should_show_on_load(&self) -> bool {
        self.preferences.get(SHOW_SIDEBAR_PREF)
    }

    /// Deck remembered as the current one for this document type.
    pub fn preferred_deck(&self) -> Option<DeckId> {
        DeckId::ALL
            .into_iter()
            .find(|deck| self.preferences.get(deck.id()))
    }

    /// Decode and handle a named backend message. Undecodable messages are
    /// dropped.
    pub fn handle_message(&mut self, name: &str, payload: &str) {
        match BackendEvent::from_message(name, payload) {
            Ok(event) => self.handle_event(event),
            Err(err) => log::debug!("dropped backend message {name}: {err}"),
        }
    }

    pub fn handle_event(&mut self, event: BackendEvent) {
        if !self.state.is_attached() {
            return;
        }

        match event {
            BackendEvent::PanelDescriptor(descriptor) => {
                if descriptor.jsontype.as_deref()
                    != Some(self.router.namespace())
                {
                    return;
                }
                self.handle_panel_descriptor(descriptor);
            },
            BackendEvent::Update(event) => {
                self.router.dispatch_update(
                    event,
                    self.selector.target(),
                    &mut self.builder,
                );
            },
            BackendEvent::Action(event) => {
                self.router.dispatch_action(event, &mut self.builder);
            },
        }
    }

    /// Hide the sidebar, on backend request or from the close button.
    pub fn close(&mut self) {
        self.state.hide();
        self.host.recompute_layout();

        if !self.host.editor_has_focus() {
            self.host.focus_editor();
        }

        self.preferences.set(SHOW_SIDEBAR_PREF, false);
    }

    /// Ask the backend for `deck`; `None` only clears the target.
    pub fn change_deck(&mut self, deck: Option<DeckId>) {
        self.selector.change_deck(deck, &mut self.remote);
    }

    /// Remember `deck` as the target without contacting the backend.
    pub fn set_target_deck(&mut self, deck: DeckId) {
        self.selector.set_target(Some(deck));
    }

    pub fn select_tab(&mut self, tab: SidebarTab) {
        self.state.select_tab(tab);
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.console.set_draft(draft);
    }

    /// Handle a key pressed in the console input.
    pub fn handle_key(&mut self, key: ConsoleKey) -> Option<DispatchedCommand> {
        let dispatched = self.console.handle_key(key, &mut self.remote);
        self.after_dispatch(dispatched)
    }

    /// Execute a console command directly, bypassing the draft.
    pub fn execute_command(&mut self, raw: &str) -> Option<DispatchedCommand> {
        let dispatched = self.console.execute_command(raw, &mut self.remote);
        self.after_dispatch(dispatched)
    }

    pub fn history_hint(&self) -> Option<&'static str> {
        self.console.history_hint()
    }

    /// Log a backend reply to a console command. Returns whether `value` was
    /// recognized as one.
    pub fn handle_command_reply(&mut self, value: &Value) -> bool {
        match CommandReply::from_json(value) {
            Some(reply) => {
                self.console.add_response(reply.format());
                true
            },
            None => false,
        }
    }

    /// Stop handling backend events.
    pub fn detach(&mut self) {
        self.state.detach();
    }

    fn after_dispatch(
        &mut self,
        dispatched: Option<DispatchedCommand>,
    ) -> Option<DispatchedCommand> {
        if dispatched.is_some() {
            self.state.select_tab(SidebarTab::Commands);
        }
        dispatched
    }

    fn handle_panel_descriptor(&mut self, mut descriptor: PanelDescriptor) {
        self.builder.set_window_id(&descriptor.id);
        self.builder.clear_content();

        if descriptor.is_close()
            || self.host.is_sidebar_disabled()
            || self.host.is_read_only()
        {
            self.close();
            return;
        }

        let Some(children) = descriptor.children.take() else {
            return;
        };

        let mut decks: Vec<WidgetNode> = children
            .into_iter()
            .filter(|child| child.is_deck() && child.is_visible())
            .collect();
        if decks.is_empty() {
            self.close();
            return;
        }

        if decks
            .iter()
            .any(|deck| deck.id.starts_with(NAVIGATOR_DECK_PREFIX))
        {
            mark_first_tree_list_box(&mut decks);
        }

        self.host.recompute_layout();

        let current = decks[0].id.clone();
        if !current.is_empty() {
            self.mark_current_deck(&current);
            let target_active = self.target_state();
            self.selector
                .reconcile(&current, target_active, &mut self.remote);
        }

        descriptor.children = Some(decks);
        self.builder.build(&descriptor);
        self.state.show();
        self.preferences.set(SHOW_SIDEBAR_PREF, true);
    }

    fn mark_current_deck(&mut self, current: &str) {
        for deck in DeckId::ALL {
            self.preferences.set(deck.id(), false);
        }
        match DeckId::from_id(current) {
            Some(deck) => self.preferences.set(deck.id(), true),
            None => log::debug!("unknown current deck: {current}"),
        }
    }

    fn target_state(&self) -> Option<bool> {
        let target = self.selector.target()?;
        self.host
            .command_state(target)
            .map(|value| !value.is_empty() && value != INACTIVE_STATE)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{SidebarController, SidebarTab, SidebarVisibility};
    use crate::console::{ConsoleKey, MessageKind};
    use crate::deck::DeckId;
    use crate::event::{BackendEvent, PanelDescriptor};
    use crate::options::SidebarOptions;
    use crate::preferences::{MemoryPreferences, PreferenceStore};
    use crate::testing::{
        BuilderCall, FakeHost, RecordingBuilder, RecordingRemote,
    };
    use crate::widget::WidgetNode;

    type TestController = SidebarController<
        RecordingRemote,
        RecordingBuilder,
        MemoryPreferences,
        FakeHost,
    >;

    fn controller() -> TestController {
        SidebarController::new(
            SidebarOptions::default(),
            RecordingRemote::default(),
            RecordingBuilder::default(),
            MemoryPreferences::new(),
            FakeHost::default(),
        )
    }

    fn descriptor(children: Vec<WidgetNode>) -> BackendEvent {
        BackendEvent::PanelDescriptor(PanelDescriptor {
            jsontype: Some(String::from("ModelSidebar")),
            id: String::from("17"),
            children: Some(children),
            ..PanelDescriptor::default()
        })
    }

    #[test]
    fn given_new_controller_when_created_then_sidebar_is_hidden_on_content_tab()
    {
        let controller = controller();

        assert_eq!(controller.visibility(), SidebarVisibility::Hidden);
        assert_eq!(controller.active_tab(), SidebarTab::Content);
        assert_eq!(controller.target_deck(), None);
    }

    #[test]
    fn given_property_deck_descriptor_when_handled_then_sidebar_becomes_visible()
    {
        let mut controller = controller();

        controller.handle_event(descriptor(vec![
            WidgetNode::new("PropertyDeck", "deck"),
            WidgetNode::new("NavigatorDeck", "deck"),
        ]));

        assert!(controller.is_visible());
        assert!(controller.preferences().get("ShowModelSidebar"));
        assert!(controller.preferences().get("PropertyDeck"));
        assert!(!controller.preferences().get("NavigatorDeck"));
        assert_eq!(controller.preferred_deck(), Some(DeckId::Property));
        assert_eq!(controller.host().layout_recomputes, 1);
        let calls = &controller.builder().calls;
        assert_eq!(calls[0], BuilderCall::WindowId(String::from("17")));
        assert_eq!(calls[1], BuilderCall::Clear);
        assert!(matches!(calls[2], BuilderCall::Build(_)));
    }

    #[test]
    fn given_navigator_then_property_descriptor_when_handled_then_only_property_flag_is_set()
     {
        let mut controller = controller();
        controller.handle_event(descriptor(vec![WidgetNode::new(
            "NavigatorDeck",
            "deck",
        )]));
        assert!(controller.preferences().get("NavigatorDeck"));

        controller.handle_event(descriptor(vec![WidgetNode::new(
            "PropertyDeck",
            "deck",
        )]));

        assert!(!controller.preferences().get("NavigatorDeck"));
        assert!(controller.preferences().get("PropertyDeck"));
        let marked: Vec<DeckId> = DeckId::ALL
            .into_iter()
            .filter(|deck| controller.preferences().get(deck.id()))
            .collect();
        assert_eq!(marked, vec![DeckId::Property]);
    }

    #[test]
    fn given_descriptor_outside_namespace_when_handled_then_builder_is_untouched()
     {
        let mut controller = controller();
        let foreign = BackendEvent::PanelDescriptor(PanelDescriptor {
            jsontype: Some(String::from("Other")),
            id: String::from("17"),
            children: Some(vec![WidgetNode::new("PropertyDeck", "deck")]),
            ..PanelDescriptor::default()
        });
        let untagged = BackendEvent::PanelDescriptor(PanelDescriptor {
            jsontype: None,
            id: String::from("17"),
            children: Some(vec![WidgetNode::new("PropertyDeck", "deck")]),
            ..PanelDescriptor::default()
        });

        controller.handle_event(foreign);
        controller.handle_event(untagged);
        controller.handle_message(
            "modelsidebar",
            r#"{"id": 17, "children": [{"id": "PropertyDeck", "type": "deck"}]}"#,
        );

        assert_eq!(controller.visibility(), SidebarVisibility::Hidden);
        assert!(controller.builder().calls.is_empty());
        assert_eq!(controller.host().layout_recomputes, 0);
        assert!(!controller.preferences().get("ShowModelSidebar"));
    }

    #[test]
    fn given_only_hidden_decks_when_handled_then_sidebar_closes() {
        let mut controller = controller();
        controller.handle_event(descriptor(vec![WidgetNode::new(
            "PropertyDeck",
            "deck",
        )]));
        let mut hidden = WidgetNode::new("PropertyDeck", "deck");
        hidden.visible = Some(false);

        controller.handle_event(descriptor(vec![
            hidden,
            WidgetNode::new("titlebar", "container"),
        ]));

        assert_eq!(controller.visibility(), SidebarVisibility::Hidden);
        assert!(!controller.preferences().get("ShowModelSidebar"));
        assert_eq!(controller.host().focus_requests, 1);
    }

    #[test]
    fn given_read_only_document_when_descriptor_handled_then_sidebar_closes() {
        let mut controller = controller();
        controller.host_mut().read_only = true;
        controller.host_mut().editor_focused = true;

        controller.handle_event(descriptor(vec![WidgetNode::new(
            "PropertyDeck",
            "deck",
        )]));

        assert!(!controller.is_visible());
        assert_eq!(controller.host().focus_requests, 0);
        assert!(
            !controller
                .builder()
                .calls
                .iter()
                .any(|call| matches!(call, BuilderCall::Build(_)))
        );
    }

    #[test]
    fn given_sidebar_disabled_when_descriptor_handled_then_sidebar_closes() {
        let mut controller = controller();
        controller.host_mut().disabled = true;

        controller.handle_event(descriptor(vec![WidgetNode::new(
            "PropertyDeck",
            "deck",
        )]));

        assert!(!controller.is_visible());
        assert!(!controller.preferences().get("PropertyDeck"));
        assert_eq!(controller.host().focus_requests, 1);
    }

    #[test]
    fn given_navigator_target_and_stale_deck_when_handled_then_target_is_reissued()
     {
        let mut controller = controller();
        controller.set_target_deck(DeckId::Navigator);

        controller.handle_event(descriptor(vec![WidgetNode::new(
            "PropertyDeck",
            "deck",
        )]));

        assert_eq!(
            controller.remote().sent,
            vec![String::from("uno .uno:Navigator")]
        );
    }

    #[test]
    fn given_state_cache_marks_target_active_when_handled_then_nothing_is_sent()
    {
        let mut controller = controller();
        controller.set_target_deck(DeckId::Navigator);
        controller
            .host_mut()
            .command_states
            .push((String::from(".uno:Navigator"), String::from("true")));

        controller.handle_event(descriptor(vec![WidgetNode::new(
            "PropertyDeck",
            "deck",
        )]));

        assert!(controller.remote().sent.is_empty());
    }

    #[test]
    fn given_navigator_deck_descriptor_when_handled_then_tree_is_not_draggable()
    {
        let mut controller = controller();
        let deck = WidgetNode::new("NavigatorDeck", "deck").with_child(
            WidgetNode::new("NavigatorPanel", "panel")
                .with_child(WidgetNode::new("contenttree", "treelistbox")),
        );

        controller.handle_event(descriptor(vec![deck]));

        let built = controller
            .builder()
            .calls
            .iter()
            .find_map(|call| match call {
                BuilderCall::Build(descriptor) => Some(descriptor.clone()),
                _ => None,
            })
            .expect("descriptor should be built");
        let decks = built.children.expect("filtered decks");
        assert_eq!(decks[0].children[0].children[0].draggable, Some(false));
    }

    #[test]
    fn given_console_command_when_entered_then_commands_tab_is_selected() {
        let mut controller = controller();
        controller.set_draft("Bold");

        let dispatched = controller.handle_key(ConsoleKey::Enter);

        assert_eq!(
            dispatched.map(|command| command.wire),
            Some(String::from("uno .uno:Bold"))
        );
        assert_eq!(controller.active_tab(), SidebarTab::Commands);
    }

    #[test]
    fn given_command_reply_when_handled_then_response_is_logged() {
        let mut controller = controller();
        controller.execute_command("Bold");

        let handled = controller
            .handle_command_reply(&json!({"command": "reply", "success": true}));

        assert!(handled);
        let messages = controller.console().log().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].kind, MessageKind::Response);
        assert_eq!(messages[2].content, "✓ Command executed successfully");
    }

    #[test]
    fn given_detached_controller_when_event_arrives_then_it_is_ignored() {
        let mut controller = controller();
        controller.detach();

        controller.handle_event(descriptor(vec![WidgetNode::new(
            "PropertyDeck",
            "deck",
        )]));

        assert!(!controller.is_visible());
        assert!(controller.builder().calls.is_empty());
    }
}
