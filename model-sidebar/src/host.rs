/// Editor surroundings the sidebar reads from and acts upon.
pub trait EditorHost {
    /// Global switch disabling the sidebar for the current file.
    fn is_sidebar_disabled(&self) -> bool;

    fn is_read_only(&self) -> bool;

    fn editor_has_focus(&self) -> bool;

    /// Give input focus back to the editing surface.
    fn focus_editor(&mut self);

    /// Recompute the sidebar's maximum size from the document area.
    fn recompute_layout(&mut self);

    /// Last state value the backend reported for a UNO command, if any.
    fn command_state(&self, _command: &str) -> Option<String> {
        None
    }
}
