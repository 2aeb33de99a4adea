//! Project detail modal.

use folio_core::{Project, ProjectCatalog, ProjectId};

/// Page events that can close the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// Escape key pressed anywhere.
    Escape,
    /// Click on the dimmed backdrop around the dialog.
    BackdropClick,
    /// Click inside the dialog itself.
    ContentClick,
}

/// Which project, if any, is shown in the modal.
#[derive(Debug)]
pub struct ProjectModal {
    catalog: ProjectCatalog,
    open: Option<ProjectId>,
}

impl ProjectModal {
    pub fn new(catalog: ProjectCatalog) -> Self {
        Self {
            catalog,
            open: None,
        }
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    /// Open the modal on a project. Unknown ids leave the modal unchanged.
    pub fn open(&mut self, id: &ProjectId) -> Option<&Project> {
        if self.catalog.get(id).is_none() {
            tracing::warn!("No project '{}' to show", id.as_ref());
            return None;
        }
        self.open = Some(id.clone());
        self.current()
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Route a page event. Returns true if the modal closed.
    pub fn handle(&mut self, event: ModalEvent) -> bool {
        match event {
            ModalEvent::Escape | ModalEvent::BackdropClick if self.is_open() => {
                self.close();
                true
            }
            _ => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Page scrolling is locked while the modal is open.
    pub fn body_scroll_locked(&self) -> bool {
        self.is_open()
    }

    pub fn current(&self) -> Option<&Project> {
        self.open.as_ref().and_then(|id| self.catalog.get(id))
    }

    /// Plain-text body of the open modal.
    pub fn render(&self) -> Option<String> {
        self.current().map(Project::render_detail)
    }
}
