//! # InspiCode Documentation
//!
//! Project idea catalog served over HTTP.
//!
//! A fixed list of project ideas is read once from `Projets.json` at startup and kept in memory.
//! Every endpoint is a read over that list: filtered listing, a random pick, and a few aggregations.
//!
//!
//!
//! # Layout
//! - `backend/bank`: the `Project` record, catalog document parsing and per-entry validation
//! - `backend/server`: axum server, configuration, filters, routes
//! - this crate: binary entry point and docs
//!
//!
//!
//! # Data Source
//!
//! The document has a single key mapping to the array of ideas.
//! ```json
//! {
//!     "Projets": [
//!         {
//!             "title": "Todo CLI",
//!             "description": "A terminal todo list",
//!             "category": "CLI",
//!             "difficulty": "easy"
//!         }
//!     ]
//! }
//! ```
//!
//! Entries missing a field, or holding a non-string field, are skipped and logged. A missing or
//! unreadable file leaves the catalog empty and the server keeps running.
//!
//!
//!
//! # Setup
//!
//! Run with defaults (`0.0.0.0:8000`, `static/data/Projets.json`).
//! ```sh
//! RUST_LOG=info cargo run
//! ```
//!
//! Point at another catalog and answer empty lists instead of 500s when it fails to load.
//! ```sh
//! CATALOG_PATH=/data/ideas.json CATALOG_UNAVAILABLE_POLICY=empty cargo run
//! ```
//!
//! View current docs.
//! ```sh
//! cargo doc --open
//! ```

pub mod api;

pub use server::start_server;
