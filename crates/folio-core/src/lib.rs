//! Core types for the Folio portfolio page.
//!
//! This crate contains shared data structures that are used across all Folio crates:
//! - Geometry (points, sizes, rectangles) and viewport clamping
//! - Pointer events unified across mouse and touch input
//! - Style patches sent to the host surface
//! - The static project catalog
//! - The `Ticker` trait driven by the animation runtime
//! - Configuration types
//! - Error types

mod animation;
mod config;
mod error;
mod geometry;
mod pointer;
mod project;
mod style;

pub use animation::{Step, Ticker};
pub use config::{
    config_dir, config_path, load_config, CounterConfig, DragConfig, FloatingSpec, FolioConfig,
    ParticleConfig, StageConfig, TypewriterConfig,
};
pub use error::{ConfigError, DragError, RuntimeError, TypewriterError};
pub use geometry::{clamp_axis, Point, Rect, Size};
pub use pointer::{ElementId, PointerEvent};
pub use project::{Project, ProjectCatalog, ProjectId};
pub use style::{Cursor, Offset, StylePatch};
