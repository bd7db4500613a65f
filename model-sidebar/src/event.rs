//! Inbound backend events consumed by the sidebar.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SidebarError;
use crate::widget::{WidgetNode, lenient_id};

/// Backend event name carrying a full panel descriptor.
pub const PANEL_DESCRIPTOR_EVENT: &str = "modelsidebar";
/// Backend event name carrying a widget update.
pub const UPDATE_EVENT: &str = "jsdialogupdate";
/// Backend event name carrying a widget action.
pub const ACTION_EVENT: &str = "jsdialogaction";

const CLOSE_ACTION: &str = "close";

/// Full description of the sidebar panel and its decks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsontype: Option<String>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<WidgetNode>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PanelDescriptor {
    /// Return whether the backend asks the sidebar to close.
    pub fn is_close(&self) -> bool {
        self.action.as_deref() == Some(CLOSE_ACTION)
    }
}

/// Replacement widget tree for the content area.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateEvent {
    #[serde(default)]
    pub jsontype: Option<String>,
    #[serde(default)]
    pub control: Option<WidgetNode>,
}

/// Targeted action against one control of the content tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionEvent {
    #[serde(default)]
    pub jsontype: Option<String>,
    #[serde(default)]
    pub data: Option<ActionData>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ActionData {
    #[serde(default, deserialize_with = "lenient_id")]
    pub control_id: String,
    #[serde(default)]
    pub action_type: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Closed set of backend events routed through the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    PanelDescriptor(PanelDescriptor),
    Update(UpdateEvent),
    Action(ActionEvent),
}

impl BackendEvent {
    /// Decode a named backend message.
    pub fn from_message(name: &str, payload: &str) -> Result<Self, SidebarError> {
        let event = match name {
            PANEL_DESCRIPTOR_EVENT => {
                BackendEvent::PanelDescriptor(serde_json::from_str(payload)?)
            },
            UPDATE_EVENT => BackendEvent::Update(serde_json::from_str(payload)?),
            ACTION_EVENT => BackendEvent::Action(serde_json::from_str(payload)?),
            other => return Err(SidebarError::UnknownEvent(other.to_string())),
        };
        Ok(event)
    }

    /// Namespace tag carried by the event.
    pub fn jsontype(&self) -> Option<&str> {
        match self {
            BackendEvent::PanelDescriptor(event) => event.jsontype.as_deref(),
            BackendEvent::Update(event) => event.jsontype.as_deref(),
            BackendEvent::Action(event) => event.jsontype.as_deref(),
        }
    }

    pub fn is_in_namespace(&self, namespace: &str) -> bool {
        self.jsontype() == Some(namespace)
    }
}
