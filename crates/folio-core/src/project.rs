//! Static project catalog shown in the projects grid and detail modal.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::error::ConfigError;

/// Project catalog shipped with the page.
const BUILTIN_PROJECTS: &str = include_str!("../assets/projects.json");

/// Stable project identifier (`project1`, `project2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub String);

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A portfolio project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    /// Filter category of the project card (e.g. "frontend").
    pub category: String,
    /// Cover image URL.
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    /// Source repository link.
    pub github: String,
    /// Live demo link.
    pub live: String,
}

/// Ordered collection of projects.
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Load the catalog embedded in the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json(BUILTIN_PROJECTS)
    }

    /// Parse a JSON array of projects.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let projects: Vec<Project> =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(Self { projects })
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Render the detail view of a project as plain text.
    pub fn render_detail(&self, id: &ProjectId) -> Option<String> {
        self.get(id).map(Project::render_detail)
    }
}

impl Project {
    /// Plain-text rendering of the modal body.
    pub fn render_detail(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", "=".repeat(self.title.chars().count()));
        let _ = writeln!(out, "{}", self.description);
        let _ = writeln!(out);
        let _ = writeln!(out, "Technologies Used: {}", self.technologies.join(", "));
        let _ = writeln!(out);
        let _ = writeln!(out, "Key Features:");
        for feature in &self.features {
            let _ = writeln!(out, "- {}", feature);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "View Code: {}", self.github);
        let _ = write!(out, "Live Demo: {}", self.live);
        out
    }
}
