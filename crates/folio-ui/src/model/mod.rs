//! State model for the Folio page.
//!
//! Every interactive behaviour of the page lives here as plain state
//! machines. All types are host-independent for testability; the host
//! feeds events in and applies the results.

mod counter;
mod drag;
mod filter;
mod form;
mod modal;
mod nav;
mod particles;
mod reveal;
mod typewriter;

pub use counter::CounterAnimation;
pub use drag::{Anchor, DragController, DragSession, FloatingElement, Propagation};
pub use filter::{CardTransition, FilterBar, ProjectFilter, HIDE_DELAY, SHOW_DELAY};
pub use form::{
    validate_field, ContactForm, Field, FieldError, FormStatus, SUBMIT_DELAY, THANK_YOU,
};
pub use modal::{ModalEvent, ProjectModal};
pub use nav::{
    active_section, is_link_active, navbar_scrolled, scroll_target, BioToggle, MobileMenu,
    Section, NAVBAR_HEIGHT, NAVBAR_SCROLL_THRESHOLD, SECTION_ACTIVATION_OFFSET,
};
pub use particles::{ParticleFrame, ParticleId, ParticlePool};
pub use reveal::{RevealClass, RevealKind, RevealSet};
pub use typewriter::{Phase, Typewriter, TypewriterFrame, TypewriterTiming};
