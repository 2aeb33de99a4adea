//! Interaction model for the Folio portfolio page.
//!
//! This crate provides:
//! - The `Surface` trait the page's host implements
//! - State machines for dragging, the typewriter tagline, counters,
//!   navigation, filtering, the contact form and the project modal
//! - `MemoryStage`, an in-memory host used by the `folio` binary and tests

pub mod host;
pub mod model;
pub mod stage;

// Re-export commonly used types
pub use host::Surface;
pub use model::{
    CounterAnimation, DragController, DragSession, Phase, Propagation, Typewriter,
    TypewriterFrame, TypewriterTiming,
};
pub use stage::{MemoryStage, StageElement};
