//! Pointer input and element identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::Point;

/// Stable identifier of a host element (the DOM `id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub String);

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ElementId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A pointer event from either input modality.
///
/// Mouse events carry their client coordinates directly. Touch events carry
/// the active touch points; only the first one drives a drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PointerEvent {
    Mouse { x: f64, y: f64 },
    Touch { touches: Vec<Point> },
}

impl PointerEvent {
    pub fn mouse(x: f64, y: f64) -> Self {
        PointerEvent::Mouse { x, y }
    }

    /// Touch event with a single touch point.
    pub fn touch(x: f64, y: f64) -> Self {
        PointerEvent::Touch {
            touches: vec![Point::new(x, y)],
        }
    }

    /// Client coordinates of the event.
    ///
    /// Returns `None` for a touch event whose touch list is empty
    /// (e.g. the last finger was lifted).
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerEvent::Mouse { x, y } => Some(Point::new(*x, *y)),
            PointerEvent::Touch { touches } => touches.first().copied(),
        }
    }

    pub fn is_touch(&self) -> bool {
        matches!(self, PointerEvent::Touch { .. })
    }
}
