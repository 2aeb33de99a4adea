//! Inline style changes sent to the host.
//!
//! The host owns declarative styling; Folio only overrides a handful of
//! inline properties. A `StylePatch` lists the properties to change, with
//! `None` meaning "leave as is".

use serde::{Deserialize, Serialize};

/// Value written to one of the `left`/`top`/`right`/`bottom` properties.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Offset {
    /// An explicit pixel offset.
    Px(f64),
    /// The `auto` keyword, releasing an opposite-corner anchor.
    Auto,
    /// Remove the inline override so the stylesheet value applies again.
    Cleared,
}

/// Cursor shown over a floating element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Move,
    Grabbing,
}

impl Cursor {
    pub fn as_css(&self) -> &'static str {
        match self {
            Cursor::Move => "move",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// A set of inline style overrides for one element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<Offset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<Offset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<Offset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Offset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    /// Uniform scale transform; `1.0` removes it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

impl StylePatch {
    /// Pin the element by its top-left corner, releasing right/bottom anchoring.
    pub fn absolute(left: f64, top: f64) -> Self {
        Self {
            left: Some(Offset::Px(left)),
            top: Some(Offset::Px(top)),
            right: Some(Offset::Auto),
            bottom: Some(Offset::Auto),
            ..Self::default()
        }
    }

    /// Drop all positional overrides.
    pub fn reset_position() -> Self {
        Self {
            left: Some(Offset::Cleared),
            top: Some(Offset::Cleared),
            right: Some(Offset::Cleared),
            bottom: Some(Offset::Cleared),
            ..Self::default()
        }
    }

    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
