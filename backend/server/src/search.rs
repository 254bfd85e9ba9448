//! # Catalog Queries
//!
//! Every query is a linear scan over the in-memory catalog. The list is small and never changes
//! after startup, so nothing is indexed or cached, and categories/difficulties are recomputed on
//! every call.
//!
//!
//!
//! ## Filters
//! - difficulty: case-insensitive exact match
//! - category: case-insensitive substring match
//! - search: case-insensitive substring match on title or description, listing only
//!
//! Filters are ANDed. Empty values are treated as absent.
//!
//!
//!
//! ## Unavailable Catalog
//! Listing and random picks check the catalog first. What they do when nothing was loaded depends
//! on [`UnavailablePolicy`]. Aggregations never fail and report empty sets or zeros instead.
use std::collections::BTreeSet;

use bank::{Catalog, CatalogStatus, Project};
use rand::{Rng, seq::SliceRandom};
use serde::Serialize;
use tracing::debug;

use crate::{
    config::UnavailablePolicy,
    error::AppError,
    utils::{contains_ignore_case, equals_ignore_case, normalize},
};

pub const SERVICE_NAME: &str = "InspiCode API";

#[derive(Debug, Default, Clone)]
pub struct ProjectFilter {
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ProjectFilter {
    /// Builds a filter from raw query pairs. A repeated key keeps its last value and unknown
    /// keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut filter = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "difficulty" => filter.difficulty = Some(value),
                "category" => filter.category = Some(value),
                "search" => filter.search = Some(value),
                _ => {}
            }
        }

        filter
    }

    /// Random picks only honor difficulty and category.
    pub fn without_search(self) -> Self {
        Self {
            search: None,
            ..self
        }
    }

    fn predicate(&self) -> Predicate {
        Predicate {
            difficulty: normalize(self.difficulty.as_deref()),
            category: normalize(self.category.as_deref()),
            search: normalize(self.search.as_deref()),
        }
    }
}

/// Lowercased filter values, computed once per request.
struct Predicate {
    difficulty: Option<String>,
    category: Option<String>,
    search: Option<String>,
}

impl Predicate {
    fn matches(&self, project: &Project) -> bool {
        if let Some(difficulty) = &self.difficulty {
            if !equals_ignore_case(&project.difficulty, difficulty) {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !contains_ignore_case(&project.category, category) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            if !contains_ignore_case(&project.title, search)
                && !contains_ignore_case(&project.description, search)
            {
                return false;
            }
        }

        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total_projects: usize,
    pub categories: usize,
    pub difficulties: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub projects_loaded: usize,
    pub message: String,
}

fn check_available(catalog: &Catalog, policy: UnavailablePolicy) -> Result<bool, AppError> {
    match (catalog.is_available(), policy) {
        (true, _) => Ok(true),
        (false, UnavailablePolicy::Error) => Err(AppError::CatalogUnavailable),
        (false, UnavailablePolicy::Empty) => Ok(false),
    }
}

pub fn filter_projects<'a>(
    catalog: &'a Catalog,
    filter: &ProjectFilter,
) -> impl Iterator<Item = &'a Project> {
    let predicate = filter.predicate();

    catalog
        .projects()
        .iter()
        .filter(move |project| predicate.matches(project))
}

/// Matching projects in catalog order.
pub fn list_projects<'a>(
    catalog: &'a Catalog,
    filter: &ProjectFilter,
    policy: UnavailablePolicy,
) -> Result<Vec<&'a Project>, AppError> {
    if !check_available(catalog, policy)? {
        return Ok(Vec::new());
    }

    let projects: Vec<&Project> = filter_projects(catalog, filter).collect();
    debug!("{filter:?} matched {} of {}", projects.len(), catalog.len());

    Ok(projects)
}

/// Uniform pick among projects matching difficulty and category.
pub fn random_project<'a, R>(
    catalog: &'a Catalog,
    filter: &ProjectFilter,
    policy: UnavailablePolicy,
    rng: &mut R,
) -> Result<&'a Project, AppError>
where
    R: Rng + ?Sized,
{
    if !check_available(catalog, policy)? {
        return Err(AppError::NoMatch);
    }

    let filter = filter.clone().without_search();
    let candidates: Vec<&Project> = filter_projects(catalog, &filter).collect();
    debug!("{filter:?} random pick among {}", candidates.len());

    candidates.choose(rng).copied().ok_or(AppError::NoMatch)
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

pub fn list_categories(catalog: &Catalog) -> Vec<String> {
    distinct(catalog.projects().iter().map(|p| p.category.as_str()))
}

pub fn list_difficulties(catalog: &Catalog) -> Vec<String> {
    distinct(catalog.projects().iter().map(|p| p.difficulty.as_str()))
}

pub fn stats(catalog: &Catalog) -> Stats {
    let projects = catalog.projects();

    Stats {
        total_projects: projects.len(),
        categories: projects
            .iter()
            .map(|p| p.category.as_str())
            .collect::<BTreeSet<_>>()
            .len(),
        difficulties: projects
            .iter()
            .map(|p| p.difficulty.as_str())
            .collect::<BTreeSet<_>>()
            .len(),
    }
}

pub fn health(catalog: &Catalog) -> Health {
    let message = match catalog.status() {
        CatalogStatus::Unavailable { reason } => {
            format!("{SERVICE_NAME} is running without a catalog: {reason}")
        }
        CatalogStatus::Loaded { .. } if catalog.is_empty() => {
            format!("{SERVICE_NAME} is running without a catalog: no valid projects")
        }
        CatalogStatus::Loaded { rejected: 0 } => format!("{SERVICE_NAME} is running!"),
        CatalogStatus::Loaded { rejected } => {
            format!("{SERVICE_NAME} is running! ({rejected} catalog entries rejected)")
        }
    };

    Health {
        status: if catalog.is_available() {
            "healthy"
        } else {
            "degraded"
        },
        projects_loaded: catalog.len(),
        message,
    }
}
