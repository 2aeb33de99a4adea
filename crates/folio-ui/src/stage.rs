//! In-memory host surface.
//!
//! `MemoryStage` lays out floating elements the way the page's stylesheet
//! does (anchored to the viewport's bottom-right corner) and applies inline
//! overrides on top. It stands in for the browser in the `folio` binary and
//! in tests.

use std::collections::HashMap;

use folio_core::{Cursor, ElementId, FloatingSpec, Offset, Rect, Size, StageConfig, StylePatch};

use crate::host::Surface;

/// Computed style of a floating element on the stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageElement {
    pub id: ElementId,
    pub size: Size,
    /// Stylesheet anchoring.
    pub css_right: f64,
    pub css_bottom: f64,
    /// Inline overrides; `None` means no inline value.
    pub left: Option<Offset>,
    pub top: Option<Offset>,
    pub right: Option<Offset>,
    pub bottom: Option<Offset>,
    pub cursor: Cursor,
    pub z_index: i32,
    pub scale: f64,
}

impl StageElement {
    fn from_spec(spec: &FloatingSpec) -> Self {
        Self {
            id: ElementId::from(spec.id.as_str()),
            size: Size::new(spec.width, spec.height),
            css_right: spec.right,
            css_bottom: spec.bottom,
            left: None,
            top: None,
            right: None,
            bottom: None,
            cursor: Cursor::Move,
            z_index: -1,
            scale: 1.0,
        }
    }

    /// Resolve one axis: an inline start offset wins, then an inline end
    /// offset, then the stylesheet end offset. `auto` on both sides falls
    /// back to the start edge.
    fn resolve_axis(
        start: Option<Offset>,
        end: Option<Offset>,
        css_end: f64,
        viewport: f64,
        extent: f64,
    ) -> f64 {
        match (start, end) {
            (Some(Offset::Px(v)), _) => v,
            (_, Some(Offset::Px(v))) => viewport - v - extent,
            (_, Some(Offset::Auto)) => 0.0,
            _ => viewport - css_end - extent,
        }
    }

    fn bounding_box(&self, viewport: Size) -> Rect {
        Rect::new(
            Self::resolve_axis(
                self.left,
                self.right,
                self.css_right,
                viewport.width,
                self.size.width,
            ),
            Self::resolve_axis(
                self.top,
                self.bottom,
                self.css_bottom,
                viewport.height,
                self.size.height,
            ),
            self.size.width,
            self.size.height,
        )
    }

    fn apply(&mut self, patch: &StylePatch) {
        fn set(slot: &mut Option<Offset>, value: Option<Offset>) {
            match value {
                Some(Offset::Cleared) => *slot = None,
                Some(v) => *slot = Some(v),
                None => {}
            }
        }

        set(&mut self.left, patch.left);
        set(&mut self.top, patch.top);
        set(&mut self.right, patch.right);
        set(&mut self.bottom, patch.bottom);
        if let Some(cursor) = patch.cursor {
            self.cursor = cursor;
        }
        if let Some(z_index) = patch.z_index {
            self.z_index = z_index;
        }
        if let Some(scale) = patch.scale {
            self.scale = scale;
        }
    }
}

/// A viewport with floating elements and text slots.
#[derive(Debug, Clone)]
pub struct MemoryStage {
    viewport: Size,
    elements: Vec<StageElement>,
    texts: HashMap<ElementId, String>,
}

impl MemoryStage {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            elements: Vec::new(),
            texts: HashMap::new(),
        }
    }

    /// Build a stage from configuration.
    pub fn from_config(config: &StageConfig) -> Self {
        let mut stage = Self::new(Size::new(config.viewport_width, config.viewport_height));
        for spec in &config.floating {
            stage.add_floating(spec);
        }
        stage
    }

    /// Add a floating element. Replaces an element with the same id.
    pub fn add_floating(&mut self, spec: &FloatingSpec) {
        let element = StageElement::from_spec(spec);
        match self.elements.iter_mut().find(|e| e.id == element.id) {
            Some(existing) => *existing = element,
            None => self.elements.push(element),
        }
    }

    pub fn element(&self, id: &ElementId) -> Option<&StageElement> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn elements(&self) -> impl Iterator<Item = &StageElement> {
        self.elements.iter()
    }

    /// Simulate a window resize. Callers notify the drag controller.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Replace the text content of an element.
    pub fn set_text(&mut self, id: &ElementId, text: &str) {
        match self.texts.get_mut(id) {
            Some(slot) => {
                slot.clear();
                slot.push_str(text);
            }
            None => {
                self.texts.insert(id.clone(), text.to_string());
            }
        }
    }

    pub fn text(&self, id: &ElementId) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }
}

impl Surface for MemoryStage {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn bounding_box(&self, id: &ElementId) -> Option<Rect> {
        self.element(id).map(|e| e.bounding_box(self.viewport))
    }

    fn apply(&mut self, id: &ElementId, patch: &StylePatch) {
        match self.elements.iter_mut().find(|e| &e.id == id) {
            Some(element) => element.apply(patch),
            None => tracing::warn!("Style patch for unknown element '{}'", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::Point;

    fn stage() -> MemoryStage {
        let mut stage = MemoryStage::new(Size::new(800.0, 600.0));
        stage.add_floating(&FloatingSpec::new("badge", 100.0, 50.0, 20.0, 30.0));
        stage
    }

    #[test]
    fn test_stylesheet_anchor() {
        let stage = stage();
        let rect = stage.bounding_box(&ElementId::from("badge")).unwrap();
        assert_eq!(rect, Rect::new(680.0, 520.0, 100.0, 50.0));
    }

    #[test]
    fn test_inline_overrides_and_clear() {
        let mut stage = stage();
        let id = ElementId::from("badge");

        stage.apply(&id, &StylePatch::absolute(10.0, 15.0));
        assert_eq!(
            stage.bounding_box(&id).unwrap().top_left(),
            Point::new(10.0, 15.0)
        );

        stage.apply(&id, &StylePatch::reset_position());
        assert_eq!(
            stage.bounding_box(&id).unwrap().top_left(),
            Point::new(680.0, 520.0)
        );
    }

    #[test]
    fn test_anchor_follows_viewport() {
        let mut stage = stage();
        stage.set_viewport(Size::new(400.0, 300.0));
        let rect = stage.bounding_box(&ElementId::from("badge")).unwrap();
        assert_eq!(rect.top_left(), Point::new(280.0, 220.0));
    }

    #[test]
    fn test_unknown_element() {
        let mut stage = stage();
        let ghost = ElementId::from("ghost");
        assert!(stage.bounding_box(&ghost).is_none());
        // Applying to a missing element is ignored
        stage.apply(&ghost, &StylePatch::absolute(1.0, 1.0));
    }

    #[test]
    fn test_text_slots() {
        let mut stage = stage();
        let id = ElementId::from("typed-text");
        assert_eq!(stage.text(&id), None);
        stage.set_text(&id, "Ru");
        stage.set_text(&id, "Rus");
        assert_eq!(stage.text(&id), Some("Rus"));
    }

    #[test]
    fn test_from_config() {
        let stage = MemoryStage::from_config(&StageConfig::default());
        assert_eq!(stage.elements().count(), 3);
        assert_eq!(stage.viewport(), Size::new(1280.0, 800.0));
    }
}
