//! Scroll-reveal classes for content blocks.
//!
//! Blocks start hidden with an entrance class and become visible the first
//! time they intersect the viewport. They never hide again.

use std::collections::HashSet;
use std::time::Duration;

use folio_core::ElementId;

/// Stagger between consecutive fade-in blocks.
const FADE_STAGGER: Duration = Duration::from_millis(100);

/// Kinds of block that animate in on scroll, by their CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealKind {
    AboutText,
    AboutImage,
    SkillCategory,
    ProjectCard,
    CertCard,
    ContactItem,
    ContactForm,
}

impl RevealKind {
    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "about-text" => Some(Self::AboutText),
            "about-image" => Some(Self::AboutImage),
            "skill-category" => Some(Self::SkillCategory),
            "project-card" => Some(Self::ProjectCard),
            "cert-card" => Some(Self::CertCard),
            "contact-item" => Some(Self::ContactItem),
            "contact-form" => Some(Self::ContactForm),
            _ => None,
        }
    }
}

/// Entrance animation assigned to a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealClass {
    SlideInLeft,
    SlideInRight,
    FadeIn { delay: Duration },
}

impl RevealClass {
    /// Pick the entrance for the `index`-th animated block on the page.
    pub fn for_block(kind: RevealKind, index: usize) -> Self {
        match kind {
            RevealKind::AboutText | RevealKind::ContactForm => Self::SlideInLeft,
            RevealKind::AboutImage | RevealKind::ContactItem => Self::SlideInRight,
            _ => Self::FadeIn {
                delay: FADE_STAGGER * index as u32,
            },
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::SlideInLeft => "slide-in-left",
            Self::SlideInRight => "slide-in-right",
            Self::FadeIn { .. } => "fade-in",
        }
    }

    /// Inline `transition-delay`, if any.
    pub fn transition_delay(&self) -> Option<Duration> {
        match self {
            Self::FadeIn { delay } => Some(*delay),
            _ => None,
        }
    }
}

/// Blocks that have been revealed.
#[derive(Debug, Default)]
pub struct RevealSet {
    visible: HashSet<ElementId>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection observer entry.
    ///
    /// Returns true if the block became visible with this entry.
    pub fn observe(&mut self, id: &ElementId, is_intersecting: bool) -> bool {
        is_intersecting && self.visible.insert(id.clone())
    }

    pub fn is_visible(&self, id: &ElementId) -> bool {
        self.visible.contains(id)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}
