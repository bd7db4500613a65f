use crate::event::{ActionData, PanelDescriptor};
use crate::widget::WidgetNode;

/// Widget builder rendering backend trees into the sidebar content area.
///
/// The sidebar only decides what reaches the builder; how widgets are
/// created, updated and styled is up to the implementation. The header and
/// tab chrome are never handed over.
pub trait WidgetBuilder {
    /// Associate following calls with a backend window.
    fn set_window_id(&mut self, id: &str);

    /// Remove everything from the content area.
    fn clear_content(&mut self);

    /// Build the content area from a full panel descriptor.
    fn build(&mut self, descriptor: &PanelDescriptor);

    /// Re-render the content area from an updated control tree.
    fn update_widget(&mut self, control: Option<&WidgetNode>);

    /// Apply a targeted action to the existing content tree.
    fn execute_action(&mut self, action: &ActionData);
}
