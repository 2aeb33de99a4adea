//! Project grid filtering.
//!
//! Filter buttons carry a `data-filter` value; cards carry a
//! `data-category`. Hiding is animated: the card fades out via the `hidden`
//! class first and leaves the layout once the fade has run.

use std::time::Duration;

use folio_core::{ProjectCatalog, ProjectId};

/// Delay before a shown card is put back into the layout.
pub const SHOW_DELAY: Duration = Duration::from_millis(10);

/// Delay before a hidden card is taken out of the layout.
pub const HIDE_DELAY: Duration = Duration::from_millis(300);

/// Active filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    /// Parse a `data-filter` value.
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => Self::All,
            other => Self::Category(other.to_string()),
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => c == category,
        }
    }
}

/// What happens to one card when a filter is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardTransition {
    /// Remove `hidden`, then set `display: block` after the delay.
    Show { after: Duration },
    /// Add `hidden`, then set `display: none` after the delay.
    Hide { after: Duration },
}

impl CardTransition {
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Show { .. })
    }
}

/// Filter buttons and their effect on the project grid.
#[derive(Debug, Default)]
pub struct FilterBar {
    active: ProjectFilter,
}

impl FilterBar {
    pub fn active(&self) -> &ProjectFilter {
        &self.active
    }

    /// Whether the button with this `data-filter` value is highlighted.
    pub fn is_button_active(&self, value: &str) -> bool {
        ProjectFilter::parse(value) == self.active
    }

    /// A filter button was clicked. Returns the transition for every card.
    pub fn select(
        &mut self,
        value: &str,
        catalog: &ProjectCatalog,
    ) -> Vec<(ProjectId, CardTransition)> {
        self.active = ProjectFilter::parse(value);
        tracing::debug!("Project filter set to {:?}", self.active);

        catalog
            .iter()
            .map(|project| {
                let transition = if self.active.matches(&project.category) {
                    CardTransition::Show { after: SHOW_DELAY }
                } else {
                    CardTransition::Hide { after: HIDE_DELAY }
                };
                (project.id.clone(), transition)
            })
            .collect()
    }
}
