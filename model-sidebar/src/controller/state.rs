/// Sidebar visibility, driven only by backend events and user close.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarVisibility {
    #[default]
    Hidden,
    Visible,
}

/// Tabs of the sidebar body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarTab {
    /// Backend-rendered deck content.
    #[default]
    Content,
    /// Command console conversation.
    Commands,
}

#[derive(Debug, Default)]
pub(super) struct SidebarState {
    visibility: SidebarVisibility,
    tab: SidebarTab,
    attached: bool,
}

impl SidebarState {
    pub(super) fn new() -> Self {
        Self {
            attached: true,
            ..Self::default()
        }
    }

    pub(super) fn visibility(&self) -> SidebarVisibility {
        self.visibility
    }

    pub(super) fn tab(&self) -> SidebarTab {
        self.tab
    }

    pub(super) fn is_attached(&self) -> bool {
        self.attached
    }

    pub(super) fn show(&mut self) {
        self.visibility = SidebarVisibility::Visible;
    }

    pub(super) fn hide(&mut self) {
        self.visibility = SidebarVisibility::Hidden;
    }

    pub(super) fn select_tab(&mut self, tab: SidebarTab) {
        self.tab = tab;
    }

    pub(super) fn detach(&mut self) {
        self.attached = false;
    }
}
