use serde::{Deserialize, Serialize};

/// One project idea. Field names are the wire names in both `Projets.json` and API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Document parsed. `rejected` counts entries skipped for a bad shape.
    Loaded { rejected: usize },
    Unavailable { reason: String },
}

/// Read-only list of projects, fixed once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    status: CatalogStatus,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self::from_parts(projects, 0)
    }

    pub fn from_parts(projects: Vec<Project>, rejected: usize) -> Self {
        Self {
            projects,
            status: CatalogStatus::Loaded { rejected },
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            projects: Vec::new(),
            status: CatalogStatus::Unavailable {
                reason: reason.into(),
            },
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// A loaded file with no valid entries is as unusable as a failed load.
    pub fn is_available(&self) -> bool {
        !self.projects.is_empty()
    }
}

impl From<Vec<Project>> for Catalog {
    fn from(projects: Vec<Project>) -> Self {
        Self::new(projects)
    }
}
