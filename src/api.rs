//! # API Specifications
//!
//! Responses/requests between the frontend and backend. All bodies are JSON.
//!
//! ## Filters
//! - `difficulty`: case-insensitive exact match, `Easy` matches `easy` but not `easy-medium`
//! - `category`: case-insensitive substring, `web` matches `Web Development`
//! - `search`: case-insensitive substring over title or description, `/api/projects` only
//! - Empty values such as `?difficulty=` are ignored
//! - Filters are combined with AND
//!
//! ## Endpoints
//!
//! ### GET /api/projects
//! - 200: array of projects in catalog order, possibly empty
//! - 500: `{"detail": "No projects available"}` when the catalog did not load
//!
//! ### GET /api/random
//! - 200: one project drawn uniformly from the filtered set
//! - 404: `{"detail": "No project found for these criteria"}`
//! - 500: catalog did not load
//!
//! ### GET /api/categories
//! - 200: `{"categories": [...]}`, sorted, no duplicates
//!
//! ### GET /api/difficulties
//! - 200: `{"difficulties": [...]}`, sorted, no duplicates
//!
//! ### GET /api/stats
//! - 200: `{"total_projects": n, "categories": n, "difficulties": n}`
//!
//! ### GET /health
//! - 200: `{"status": "healthy" | "degraded", "projects_loaded": n, "message": "..."}`
//!
//! ## Pages
//! `/`, `/choose` and `/favorites` return `index.html`, `choose.html` and `favorites.html` from
//! `TEMPLATES_DIR`, or 404 when the file is missing.
//!
//! ## Unavailable Catalog
//! With `CATALOG_UNAVAILABLE_POLICY=empty`, `/api/projects` answers `[]` and `/api/random` answers
//! 404 instead of 500 when nothing was loaded.
