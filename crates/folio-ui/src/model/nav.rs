//! Navigation bar state (scrolled styling, active section, mobile menu)
//! and the "read more" bio toggle in the about section.

/// Scroll distance after which the navbar gets its solid background.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Height of the fixed navbar; anchor jumps stop this far above a section.
pub const NAVBAR_HEIGHT: f64 = 70.0;

/// A section becomes active this far before its top reaches the viewport.
pub const SECTION_ACTIVATION_OFFSET: f64 = 100.0;

/// A page section with an anchor id and its document-space extent.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }
}

/// Whether the navbar should render in its "scrolled" style.
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// Scroll position that brings a section just below the fixed navbar.
pub fn scroll_target(section_top: f64) -> f64 {
    (section_top - NAVBAR_HEIGHT).max(0.0)
}

/// Id of the section the reader is in, if any.
///
/// When activation windows overlap, the later section wins.
pub fn active_section(sections: &[Section], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - SECTION_ACTIVATION_OFFSET;
            scroll_y >= top && scroll_y < top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Whether a nav link (`href="#about"`) points at the active section.
pub fn is_link_active(href: &str, active: Option<&str>) -> bool {
    match (href.strip_prefix('#'), active) {
        (Some(target), Some(active)) => target == active,
        _ => false,
    }
}

/// Hamburger menu shown on narrow screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger button clicked.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A nav link was followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Extended bio in the about section. Hidden until first toggled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BioToggle {
    shown: bool,
}

impl BioToggle {
    pub fn is_shown(&self) -> bool {
        self.shown
    }

    /// "Read more" clicked.
    pub fn toggle(&mut self) -> bool {
        self.shown = !self.shown;
        self.shown
    }

    /// Inline `display` value for the bio block.
    pub fn display(&self) -> &'static str {
        if self.shown {
            "block"
        } else {
            "none"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section::new("home", 0.0, 800.0),
            Section::new("about", 800.0, 600.0),
            Section::new("projects", 1400.0, 900.0),
        ]
    }

    #[test]
    fn test_navbar_scrolled() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.5));
    }

    #[test]
    fn test_scroll_target() {
        assert_eq!(scroll_target(800.0), 730.0);
        assert_eq!(scroll_target(20.0), 0.0);
    }

    #[test]
    fn test_active_section() {
        let sections = sections();
        assert_eq!(active_section(&sections, 0.0), Some("home"));
        // "about" activates 100px before its top
        assert_eq!(active_section(&sections, 699.0), Some("home"));
        assert_eq!(active_section(&sections, 700.0), Some("about"));
        assert_eq!(active_section(&sections, 1350.0), Some("projects"));
        assert_eq!(active_section(&sections, 5000.0), None);
    }

    #[test]
    fn test_overlapping_sections_prefer_later() {
        let sections = vec![Section::new("a", 0.0, 1000.0), Section::new("b", 300.0, 200.0)];
        assert_eq!(active_section(&sections, 250.0), Some("b"));
    }

    #[test]
    fn test_is_link_active() {
        assert!(is_link_active("#about", Some("about")));
        assert!(!is_link_active("#home", Some("about")));
        assert!(!is_link_active("about", Some("about")));
        assert!(!is_link_active("#about", None));
    }

    #[test]
    fn test_mobile_menu() {
        let mut menu = MobileMenu::default();
        assert!(!menu.is_open());
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_bio_toggle() {
        let mut bio = BioToggle::default();
        assert!(!bio.is_shown());
        assert_eq!(bio.display(), "none");

        assert!(bio.toggle());
        assert_eq!(bio.display(), "block");
        assert!(!bio.toggle());
        assert_eq!(bio.display(), "none");
    }
}
