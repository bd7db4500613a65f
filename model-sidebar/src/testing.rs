//! Recording fakes for the sidebar collaborators.

use model_sidebar_remote::{RemoteCommand, RemoteController};

use crate::builder::WidgetBuilder;
use crate::event::{ActionData, PanelDescriptor};
use crate::host::EditorHost;
use crate::widget::WidgetNode;

#[derive(Debug, Default)]
pub(crate) struct RecordingRemote {
    pub(crate) sent: Vec<String>,
}

impl RemoteController for RecordingRemote {
    fn send_command(&mut self, command: &str) -> bool {
        self.sent.push(command.to_string());
        true
    }

    fn send_command_object(&mut self, _command: Box<dyn RemoteCommand>) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum BuilderCall {
    WindowId(String),
    Clear,
    Build(PanelDescriptor),
    Update(Option<WidgetNode>),
    Action(ActionData),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingBuilder {
    pub(crate) calls: Vec<BuilderCall>,
}

impl WidgetBuilder for RecordingBuilder {
    fn set_window_id(&mut self, id: &str) {
        self.calls.push(BuilderCall::WindowId(id.to_string()));
    }

    fn clear_content(&mut self) {
        self.calls.push(BuilderCall::Clear);
    }

    fn build(&mut self, descriptor: &PanelDescriptor) {
        self.calls.push(BuilderCall::Build(descriptor.clone()));
    }

    fn update_widget(&mut self, control: Option<&WidgetNode>) {
        self.calls.push(BuilderCall::Update(control.cloned()));
    }

    fn execute_action(&mut self, action: &ActionData) {
        self.calls.push(BuilderCall::Action(action.clone()));
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    pub(crate) disabled: bool,
    pub(crate) read_only: bool,
    pub(crate) editor_focused: bool,
    pub(crate) focus_requests: usize,
    pub(crate) layout_recomputes: usize,
    pub(crate) command_states: Vec<(String, String)>,
}

impl EditorHost for FakeHost {
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
        self.focus_requests += 1;
        self.editor_focused = true;
    }

    fn recompute_layout(&mut self) {
        self.layout_recomputes += 1;
    }

    fn command_state(&self, command: &str) -> Option<String> {
        self.command_states
            .iter()
            .find(|(key, _)| key == command)
            .map(|(_, value)| value.clone())
    }
}
