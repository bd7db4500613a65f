//! Decides which backend updates and actions reach the widget builder.

use crate::builder::WidgetBuilder;
use crate::deck::DeckId;
use crate::event::{ActionData, ActionEvent, UpdateEvent};
use crate::widget::{WidgetNode, mark_navigator_tree_view};

/// Control whose updates carry nothing actionable.
const NOISY_UPDATE_CONTROL: &str = "addonimage";

/// Containers shared by every panel. They only change through full updates,
/// so their action echoes are dropped.
const STRUCTURAL_CONTROLS: [&str; 4] =
    ["contents", "Panel", "titlebar", "addonimage"];

/// Why an event did not reach the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    ForeignNamespace,
    NoisyControl,
    StructuralControl,
    MissingData,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateRoute {
    Ignored(IgnoreReason),
    /// Content-area re-render with the (possibly patched) control tree.
    Forward(Option<WidgetNode>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActionRoute {
    Ignored(IgnoreReason),
    Forward(ActionData),
}

/// Filters update and action events for one sidebar namespace.
#[derive(Debug, Clone)]
pub struct UpdateRouter {
    namespace: String,
}

impl UpdateRouter {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Route an update event. `target_deck` is the deck command the sidebar
    /// is currently targeting.
    pub fn route_update(
        &self,
        event: UpdateEvent,
        target_deck: Option<&str>,
    ) -> UpdateRoute {
        if event.jsontype.as_deref() != Some(self.namespace.as_str()) {
            return UpdateRoute::Ignored(IgnoreReason::ForeignNamespace);
        }

        let mut control = event.control;
        if let Some(node) = control.as_ref() {
            if node.id == NOISY_UPDATE_CONTROL {
                log::debug!("Ignored update for control: {}", node.id);
                return UpdateRoute::Ignored(IgnoreReason::NoisyControl);
            }
        }

        if target_deck == Some(DeckId::Navigator.command()) {
            if let Some(patched) =
                control.as_ref().and_then(mark_navigator_tree_view)
            {
                control = Some(patched);
            }
        }

        UpdateRoute::Forward(control)
    }

    /// Route an action event.
    pub fn route_action(&self, event: ActionEvent) -> ActionRoute {
        if event.jsontype.as_deref() != Some(self.namespace.as_str()) {
            return ActionRoute::Ignored(IgnoreReason::ForeignNamespace);
        }

        let Some(data) = event.data else {
            return ActionRoute::Ignored(IgnoreReason::MissingData);
        };

        if STRUCTURAL_CONTROLS.contains(&data.control_id.as_str()) {
            log::debug!(
                "Ignored action: {} for control: {}",
                data.action_type,
                data.control_id
            );
            return ActionRoute::Ignored(IgnoreReason::StructuralControl);
        }

        ActionRoute::Forward(data)
    }

    /// Route an update and hand it to the builder. Returns whether the
    /// builder was called.
    pub fn dispatch_update(
        &self,
        event: UpdateEvent,
        target_deck: Option<&str>,
        builder: &mut dyn WidgetBuilder,
    ) -> bool {
        match self.route_update(event, target_deck) {
            UpdateRoute::Forward(control) => {
                builder.clear_content();
                builder.update_widget(control.as_ref());
                true
            },
            UpdateRoute::Ignored(_) => false,
        }
    }

    /// Route an action and hand it to the builder. Returns whether the
    /// builder was called.
    pub fn dispatch_action(
        &self,
        event: ActionEvent,
        builder: &mut dyn WidgetBuilder,
    ) -> bool {
        match self.route_action(event) {
            ActionRoute::Forward(data) => {
                builder.execute_action(&data);
                true
            },
            ActionRoute::Ignored(_) => false,
        }
    }
}
