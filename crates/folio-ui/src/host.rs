//! Host surface abstraction.
//!
//! The page's DOM is an external collaborator. The interaction model only
//! needs three things from it: the viewport size, an element's bounding
//! box, and a way to write inline styles. The `Surface` trait captures
//! exactly that, so the model can run against a browser binding, the
//! in-memory [`MemoryStage`](crate::stage::MemoryStage), or a mock.

use folio_core::{ElementId, Rect, Size, StylePatch};

/// Layout queries and style writes against the host page.
#[cfg_attr(test, mockall::automock)]
pub trait Surface {
    /// Visible viewport size (`innerWidth`, `innerHeight`).
    fn viewport(&self) -> Size;

    /// Bounding box of an element relative to the viewport.
    ///
    /// `None` if the element does not exist or is not laid out.
    fn bounding_box(&self, id: &ElementId) -> Option<Rect>;

    /// Apply inline style overrides to an element.
    fn apply(&mut self, id: &ElementId, patch: &StylePatch);
}
