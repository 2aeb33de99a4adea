//! Error types for Folio.

use std::path::PathBuf;
use thiserror::Error;

use crate::pointer::ElementId;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error reading {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Values that parse but make no sense.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Drag controller precondition violations.
///
/// Both are setup mistakes by the caller: handlers must only be wired to
/// registered, laid-out elements.
#[derive(Debug, Error, PartialEq)]
pub enum DragError {
    /// The element was never registered as draggable.
    #[error("Unknown floating element '{0}'")]
    UnknownElement(ElementId),

    /// The host could not measure the element (not laid out yet).
    #[error("Floating element '{0}' has no bounding box")]
    Unmeasured(ElementId),
}

/// Typewriter construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("Typewriter needs at least one phrase")]
    NoPhrases,

    /// An empty phrase would never reach its end-of-phrase pause.
    #[error("Phrase {index} is empty")]
    EmptyPhrase { index: usize },
}

/// Animation runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The animation task has stopped and will publish no more frames.
    #[error("Animation '{0}' is no longer running")]
    Closed(String),
}
