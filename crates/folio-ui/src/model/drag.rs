//! Drag controller for floating decorative elements.
//!
//! Floating elements start anchored by the stylesheet (to the right/bottom
//! of the hero section). Dragging one pins it by its top-left corner and
//! keeps it fully inside the viewport. After the viewport shrinks, any
//! element that no longer fits is handed back to the stylesheet.
//!
//! The controller owns the single [`DragSession`]: at most one gesture is
//! active across all elements at a time.

use folio_core::{
    Cursor, DragConfig, DragError, ElementId, Point, PointerEvent, StylePatch,
};

use crate::host::Surface;

// =============================================================================
// Element State
// =============================================================================

/// How a floating element is positioned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Anchor {
    /// Positioned by the stylesheet; no inline offsets.
    #[default]
    Stylesheet,
    /// Pinned by inline `left`/`top` after being dragged.
    Absolute { left: f64, top: f64 },
}

/// A draggable element tracked by the controller.
#[derive(Debug, Clone)]
pub struct FloatingElement {
    pub id: ElementId,
    pub anchor: Anchor,
    /// Pointer is over the element.
    pub hovered: bool,
}

impl FloatingElement {
    fn new(id: ElementId) -> Self {
        Self {
            id,
            anchor: Anchor::Stylesheet,
            hovered: false,
        }
    }
}

/// An in-progress gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    target: ElementId,
    grab_offset: Point,
}

impl DragSession {
    /// Element being dragged.
    pub fn target(&self) -> &ElementId {
        &self.target
    }

    /// Pointer position relative to the element's top-left corner at
    /// gesture start. Fixed for the whole gesture.
    pub fn grab_offset(&self) -> Point {
        self.grab_offset
    }
}

/// Whether the host should suppress the browser's default handling
/// (scrolling, text selection) of the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    PreventDefault,
}

// =============================================================================
// Drag Controller
// =============================================================================

/// Tracks floating elements and the active drag gesture.
#[derive(Debug)]
pub struct DragController {
    config: DragConfig,
    /// Elements in registration (document) order.
    elements: Vec<FloatingElement>,
    session: Option<DragSession>,
}

impl DragController {
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            elements: Vec::new(),
            session: None,
        }
    }

    /// Start tracking a floating element. Registering twice is a no-op.
    pub fn register(&mut self, id: impl Into<ElementId>) {
        let id = id.into();
        if self.index_of(&id).is_none() {
            tracing::debug!("Registered floating element '{}'", id);
            self.elements.push(FloatingElement::new(id));
        }
    }

    pub fn element(&self, id: &ElementId) -> Option<&FloatingElement> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn elements(&self) -> &[FloatingElement] {
        &self.elements
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    fn index_of(&self, id: &ElementId) -> Option<usize> {
        self.elements.iter().position(|e| &e.id == id)
    }

    fn is_drag_target(&self, id: &ElementId) -> bool {
        self.session.as_ref().is_some_and(|s| &s.target == id)
    }

    // -------------------------------------------------------------------------
    // Gesture Handlers
    // -------------------------------------------------------------------------

    /// Pointer went down (`mousedown` / `touchstart`) on a floating element.
    ///
    /// If a previous gesture never received its end event, it is ended
    /// first so the stale target gets its resting style back.
    pub fn on_gesture_start(
        &mut self,
        surface: &mut impl Surface,
        id: &ElementId,
        event: &PointerEvent,
    ) -> Result<Propagation, DragError> {
        if self.index_of(id).is_none() {
            return Err(DragError::UnknownElement(id.clone()));
        }
        let Some(pointer) = event.position() else {
            tracing::debug!("Ignoring gesture start on '{}' without touch points", id);
            return Ok(Propagation::Continue);
        };
        let rect = surface
            .bounding_box(id)
            .ok_or_else(|| DragError::Unmeasured(id.clone()))?;

        if let Some(stale) = self.session.take() {
            tracing::warn!(
                "Gesture on '{}' never ended; releasing it before starting on '{}'",
                stale.target,
                id
            );
            self.release(surface, stale);
        }

        let grab_offset = pointer - rect.top_left();
        let patch = StylePatch::default()
            .with_cursor(Cursor::Grabbing)
            .with_z_index(self.config.lifted_z_index)
            .with_scale(self.config.hover_scale);
        surface.apply(id, &patch);

        tracing::debug!(
            "Drag started on '{}' (grab offset {:.1}, {:.1})",
            id,
            grab_offset.x,
            grab_offset.y
        );
        self.session = Some(DragSession {
            target: id.clone(),
            grab_offset,
        });

        Ok(Propagation::PreventDefault)
    }

    /// Pointer moved (`mousemove` / `touchmove`) anywhere on the page.
    ///
    /// The target is pinned by its top-left corner from here on; there is
    /// no way back to stylesheet anchoring except a resize reset.
    pub fn on_gesture_move(
        &mut self,
        surface: &mut impl Surface,
        event: &PointerEvent,
    ) -> Propagation {
        let Some(session) = self.session.as_ref() else {
            return Propagation::Continue;
        };
        let Some(pointer) = event.position() else {
            return Propagation::Continue;
        };
        let Some(rect) = surface.bounding_box(&session.target) else {
            tracing::warn!("Drag target '{}' lost its bounding box", session.target);
            return Propagation::Continue;
        };

        let viewport = surface.viewport();
        let origin = rect.clamp_origin(pointer - session.grab_offset, viewport);
        let target = session.target.clone();

        surface.apply(&target, &StylePatch::absolute(origin.x, origin.y));
        if let Some(index) = self.index_of(&target) {
            self.elements[index].anchor = Anchor::Absolute {
                left: origin.x,
                top: origin.y,
            };
        }

        Propagation::PreventDefault
    }

    /// Pointer released (`mouseup` / `touchend`).
    pub fn on_gesture_end(&mut self, surface: &mut impl Surface) -> Propagation {
        if let Some(session) = self.session.take() {
            tracing::debug!("Drag ended on '{}'", session.target);
            self.release(surface, session);
        }
        Propagation::Continue
    }

    /// Restore the resting style of a session's target.
    ///
    /// Ending a drag also ends any hover scale, even if the pointer is
    /// still over the element.
    fn release(&mut self, surface: &mut impl Surface, session: DragSession) {
        if let Some(index) = self.index_of(&session.target) {
            self.elements[index].hovered = false;
        }
        let patch = StylePatch::default()
            .with_cursor(Cursor::Move)
            .with_z_index(self.config.resting_z_index)
            .with_scale(1.0);
        surface.apply(&session.target, &patch);
    }

    // -------------------------------------------------------------------------
    // Hover
    // -------------------------------------------------------------------------

    /// Pointer entered a floating element.
    ///
    /// The element is scaled while hovered or dragged; the two states
    /// compose rather than overwrite each other.
    pub fn on_hover_enter(
        &mut self,
        surface: &mut impl Surface,
        id: &ElementId,
    ) -> Result<(), DragError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| DragError::UnknownElement(id.clone()))?;
        let was_scaled = self.elements[index].hovered || self.is_drag_target(id);
        self.elements[index].hovered = true;

        if !was_scaled {
            surface.apply(id, &StylePatch::default().with_scale(self.config.hover_scale));
        }
        Ok(())
    }

    /// Pointer left a floating element.
    ///
    /// Leaving during a drag keeps the scale until the gesture ends.
    pub fn on_hover_leave(
        &mut self,
        surface: &mut impl Surface,
        id: &ElementId,
    ) -> Result<(), DragError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| DragError::UnknownElement(id.clone()))?;
        let was_hovered = self.elements[index].hovered;
        self.elements[index].hovered = false;

        if was_hovered && !self.is_drag_target(id) {
            surface.apply(id, &StylePatch::default().with_scale(1.0));
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Resize
    // -------------------------------------------------------------------------

    /// Viewport was resized.
    ///
    /// Any element spilling past the right or bottom edge loses its inline
    /// offsets and returns to its stylesheet position. Returns the number
    /// of elements reset.
    pub fn on_viewport_resize(&mut self, surface: &mut impl Surface) -> usize {
        let viewport = surface.viewport();
        let mut reset = 0;

        for element in &mut self.elements {
            let Some(rect) = surface.bounding_box(&element.id) else {
                tracing::debug!("Skipping unmeasured element '{}' on resize", element.id);
                continue;
            };
            if rect.overflows(viewport) {
                surface.apply(&element.id, &StylePatch::reset_position());
                element.anchor = Anchor::Stylesheet;
                reset += 1;
            }
        }

        if reset > 0 {
            tracing::debug!(
                "Viewport resized to {}x{}; reset {} floating element(s)",
                viewport.width,
                viewport.height,
                reset
            );
        }
        reset
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MockSurface;
    use crate::stage::MemoryStage;
    use folio_core::{FloatingSpec, Offset, Rect, Size};
    use mockall::predicate::eq;

    /// 800x600 viewport with one 100x100 element whose top-left is (480, 480).
    fn stage() -> (MemoryStage, DragController, ElementId) {
        let mut stage = MemoryStage::new(Size::new(800.0, 600.0));
        stage.add_floating(&FloatingSpec::new("badge", 100.0, 100.0, 220.0, 20.0));

        let mut controller = DragController::new(DragConfig::default());
        controller.register("badge");
        (stage, controller, ElementId::from("badge"))
    }

    fn position(stage: &MemoryStage, id: &ElementId) -> Point {
        stage.bounding_box(id).unwrap().top_left()
    }

    #[test]
    fn test_drag_to_position() {
        let (mut stage, mut controller, id) = stage();
        assert_eq!(position(&stage, &id), Point::new(480.0, 480.0));

        let start = controller
            .on_gesture_start(&mut stage, &id, &PointerEvent::mouse(500.0, 500.0))
            .unwrap();
        assert_eq!(start, Propagation::PreventDefault);
        assert_eq!(
            controller.session().unwrap().grab_offset(),
            Point::new(20.0, 20.0)
        );

        let moved = controller.on_gesture_move(&mut stage, &PointerEvent::mouse(50.0, 50.0));
        assert_eq!(moved, Propagation::PreventDefault);
        assert_eq!(position(&stage, &id), Point::new(30.0, 30.0));
        assert_eq!(
            controller.element(&id).unwrap().anchor,
            Anchor::Absolute {
                left: 30.0,
                top: 30.0
            }
        );
    }

    #[test]
    fn test_drag_clamps_to_origin() {
        let (mut stage, mut controller, id) = stage();
        controller
            .on_gesture_start(&mut stage, &id, &PointerEvent::mouse(500.0, 500.0))
            .unwrap();

        controller.on_gesture_move(&mut stage, &PointerEvent::mouse(-100.0, -100.0));
        assert_eq!(position(&stage, &id), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_drag_clamps_to_far_edges() {
        let (mut stage, mut controller, id) = stage();
        controller
            .on_gesture_start(&mut stage, &id, &PointerEvent::mouse(500.0, 500.0))
            .unwrap();

        controller.on_gesture_move(&mut stage, &PointerEvent::mouse(5000.0, 5000.0));
        assert_eq!(position(&stage, &id), Point::new(700.0, 500.0));
    }

    #[test]
    fn test_element_wider_than_viewport_pins_to_left_edge() {
        let mut stage = MemoryStage::new(Size::new(800.0, 600.0));
        stage.add_floating(&FloatingSpec::new("banner", 900.0, 100.0, 0.0, 20.0));
        let mut controller = DragController::new(DragConfig::default());
        controller.register("banner");
        let id = ElementId::from("banner");
        assert_eq!(position(&stage, &id), Point::new(-100.0, 480.0));

        controller
            .on_gesture_start(&mut stage, &id, &PointerEvent::mouse(50.0, 500.0))
            .unwrap();
        controller.on_gesture_move(&mut stage, &PointerEvent::mouse(400.0, 300.0));
        assert_eq!(position(&stage, &id), Point::new(0.0, 280.0));

        controller.on_gesture_move(&mut stage, &PointerEvent::mouse(-300.0, 5000.0));
        assert_eq!(position(&stage, &id), Point::new(0.0, 500.0));
    }

    #[test]
    fn test_position_stays_in_bounds_for_any_path() {
        let (mut stage, mut controller, id) = stage();
        controller
            .on_gesture_start(&mut stage, &id, &PointerEvent::mouse(530.0, 510.0))
            .unwrap();
        let offset = controller.session().unwrap().grab_offset();

        for i in -40..40 {
            let x = f64::from(i) * 37.0;
            let y = f64::from(i * i) * 3.0 - 900.0;
            controller.on_gesture_move(&mut stage, &PointerEvent::mouse(x, y));

            let pos = position(&stage, &id);
            assert!((0.0..=700.0).contains(&pos.x), "x out of bounds: {}", pos.x);
            assert!((0.0..=500.0).contains(&pos.y), "y out of bounds: {}", pos.y);
            // The grab offset never drifts during a gesture
            assert_eq!(controller.session().unwrap().grab_offset(), offset);
        }
    }

    #[test]
    fn test_touch_drag() {
        let (mut stage, mut controller, id) = stage();
        controller
            .on_gesture_start(&mut stage, &id, &PointerEvent::touch(490.0, 495.0))
            .unwrap();
        controller.on_gesture_move(&mut stage, &PointerEvent::touch(110.0, 215.0));
        assert_eq!(position(&stage, &id), Point::new(100.0, 200.0));

        // touchend carries no points
        controller.on_gesture_end(&mut stage);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_touch_start_without_points_is_ignored() {
        let (mut stage, mut controller, id) = stage();
        let result = controller
            .on_gesture_start(&mut stage, &id, &PointerEvent::Touch { touches: vec![] })
            .unwrap();
        assert_eq!(result, Propagation::Continue);
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_move_without_session_is_noop() {
        let (mut stage, mut controller, id) = stage();
        let result = controller.on_gesture_move(&mut stage, &PointerEvent::mouse(10.0, 10.0));
        assert_eq!(result, Propagation::Continue);
        assert_eq!(position(&stage, &id), Point::new(480.0, 480.0));
        assert_eq!(controller.element(&id).unwrap().anchor, Anchor::Stylesheet);
    }

    #[test]
    fn test_end_without_session_applies_nothing() {
        let mut surface = MockSurface::new();
        surface.expect_apply().never();

        let mut controller = DragController::new(DragConfig::default());
        controller.register("badge");
        assert_eq!(controller.on_gesture_end(&mut surface), Propagation::Continue);
    }

    #[test]
    fn test_unknown_element() {
        let (mut stage, mut controller, _) = stage();
        let ghost = ElementId::from("ghost");
        let err = controller
            .on_gesture_start(&mut stage, &ghost, &PointerEvent::mouse(0.0, 0.0))
            .unwrap_err();
        assert_eq!(err, DragError::UnknownElement(ghost.clone()));
        assert!(controller.on_hover_enter(&mut stage, &ghost).is_err());
    }

    #[test]
    fn test_unmeasured_element() {
        let mut surface = MockSurface::new();
        surface.expect_bounding_box().returning(|_| None);
        surface.expect_apply().never();

        let mut controller = DragController::new(DragConfig::default());
        controller.register("badge");
        let id = ElementId::from("badge");

        let err = controller
            .on_gesture_start(&mut surface, &id, &PointerEvent::mouse(1.0, 1.0))
            .unwrap_err();
        assert_eq!(err, DragError::Unmeasured(id));
        assert!(!controller.is_dragging());
    }

    #[test]
    fn test_lift_and_release_styles() {
        let id = ElementId::from("badge");
        let mut surface = MockSurface::new();
        surface
            .expect_bounding_box()
            .returning(|_| Some(Rect::new(480.0, 480.0, 100.0, 100.0)));
        surface
            .expect_viewport()
            .returning(|| Size::new(800.0, 600.0));

        let mut seq = mockall::Sequence::new();
        surface
            .expect_apply()
            .with(
                eq(id.clone()),
                eq(StylePatch::default()
                    .with_cursor(Cursor::Grabbing)
                    .with_z_index(1000)
                    .with_scale(1.1)),
            )
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        surface
            .expect_apply()
            .with(eq(id.clone()), eq(StylePatch::absolute(30.0, 30.0)))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        surface
            .expect_apply()
            .with(
                eq(id.clone()),
                eq(StylePatch::default()
                    .with_cursor(Cursor::Move)
                    .with_z_index(-1)
                    .with_scale(1.0)),
            )
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let mut controller = DragController::new(DragConfig::default());
        controller.register("badge");
        controller
            .on_gesture_start(&mut surface, &id, &PointerEvent::mouse(500.0, 500.0))
            .unwrap();
        controller.on_gesture_move(&mut surface, &PointerEvent::mouse(50.0, 50.0));
        controller.on_gesture_end(&mut surface);
        assert!(controller.session().is_none());
    }

    #[test]
    fn test_stale_session_released_on_new_start() {
        let mut stage = MemoryStage::new(Size::new(800.0, 600.0));
        stage.add_floating(&FloatingSpec::new("a", 50.0, 50.0, 100.0, 100.0));
        stage.add_floating(&FloatingSpec::new("b", 50.0, 50.0, 300.0, 300.0));
        let (a, b) = (ElementId::from("a"), ElementId::from("b"));

        let mut controller = DragController::new(DragConfig::default());
        controller.register("a");
        controller.register("b");

        controller
            .on_gesture_start(&mut stage, &a, &PointerEvent::mouse(660.0, 460.0))
            .unwrap();
        assert_eq!(stage.element(&a).unwrap().z_index, 1000);

        // The end event for `a` was lost; a new gesture starts on `b`.
        controller
            .on_gesture_start(&mut stage, &b, &PointerEvent::mouse(460.0, 260.0))
            .unwrap();
        assert_eq!(controller.session().unwrap().target(), &b);
        assert_eq!(stage.element(&a).unwrap().z_index, -1);
        assert_eq!(stage.element(&a).unwrap().cursor, Cursor::Move);
        assert_eq!(stage.element(&b).unwrap().z_index, 1000);
    }

    #[test]
    fn test_hover_scale_toggle() {
        let (mut stage, mut controller, id) = stage();

        controller.on_hover_enter(&mut stage, &id).unwrap();
        assert_eq!(stage.element(&id).unwrap().scale, 1.1);

        controller.on_hover_leave(&mut stage, &id).unwrap();
        assert_eq!(stage.element(&id).unwrap().scale, 1.0);
    }

    #[test]
    fn test_hover_enter_twice_applies_once() {
        let id = ElementId::from("badge");
        let mut surface = MockSurface::new();
        surface
            .expect_apply()
            .with(eq(id.clone()), eq(StylePatch::default().with_scale(1.1)))
            .times(1)
            .return_const(());

        let mut controller = DragController::new(DragConfig::default());
        controller.register("badge");
        controller.on_hover_enter(&mut surface, &id).unwrap();
        controller.on_hover_enter(&mut surface, &id).unwrap();
    }

    #[test]
    fn test_hover_leave_during_drag_keeps_scale() {
        let (mut stage, mut controller, id) = stage();
        controller.on_hover_enter(&mut stage, &id).unwrap();
        controller
            .on_gesture_start(&mut stage, &id, &PointerEvent::mouse(500.0, 500.0))
            .unwrap();

        controller.on_hover_leave(&mut stage, &id).unwrap();
        assert_eq!(stage.element(&id).unwrap().scale, 1.1);

        controller.on_gesture_end(&mut stage);
        assert_eq!(stage.element(&id).unwrap().scale, 1.0);
        assert!(!controller.element(&id).unwrap().hovered);
    }

    #[test]
    fn test_resize_resets_overflowing_element() {
        let (mut stage, mut controller, id) = stage();
        controller
            .on_gesture_start(&mut stage, &id, &PointerEvent::mouse(500.0, 500.0))
            .unwrap();
        controller.on_gesture_move(&mut stage, &PointerEvent::mouse(620.0, 420.0));
        controller.on_gesture_end(&mut stage);
        assert_eq!(position(&stage, &id), Point::new(600.0, 400.0));

        stage.set_viewport(Size::new(640.0, 480.0));
        assert_eq!(controller.on_viewport_resize(&mut stage), 1);

        let element = stage.element(&id).unwrap();
        assert_eq!(element.left, None);
        assert_eq!(element.top, None);
        assert_eq!(element.right, None);
        assert_eq!(element.bottom, None);
        assert_eq!(controller.element(&id).unwrap().anchor, Anchor::Stylesheet);
        // Back at its stylesheet corner in the new viewport
        assert_eq!(position(&stage, &id), Point::new(320.0, 360.0));
    }

    #[test]
    fn test_resize_keeps_fitting_element() {
        let (mut stage, mut controller, id) = stage();
        controller
            .on_gesture_start(&mut stage, &id, &PointerEvent::mouse(500.0, 500.0))
            .unwrap();
        controller.on_gesture_move(&mut stage, &PointerEvent::mouse(50.0, 50.0));
        controller.on_gesture_end(&mut stage);

        stage.set_viewport(Size::new(640.0, 480.0));
        assert_eq!(controller.on_viewport_resize(&mut stage), 0);
        assert_eq!(stage.element(&id).unwrap().left, Some(Offset::Px(30.0)));
        assert_eq!(position(&stage, &id), Point::new(30.0, 30.0));
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut controller = DragController::new(DragConfig::default());
        controller.register("badge");
        controller.register("badge");
        assert_eq!(controller.elements().len(), 1);
    }
}
