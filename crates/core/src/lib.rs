//! # Greenhouse Core
//!
//! The garden behind Greenhouse: an in-memory catalog of showcase projects
//! grouped by week, with voting, submissions, and aggregate stats.
//!
//! ## Architecture
//!
//! - `models` - Wire types (`Project`, `Gardener`, `CatalogStats`, ...)
//! - `catalog/` - The store, growth sources, search and filters
//! - `service` - Envelope-producing facade used by the HTTP layer and CLI
//! - `seed` - The demo garden every process starts with
//! - `config` - Layered settings
//!
//! ## Usage
//!
//! ```rust,ignore
//! use greenhouse_core::{seed, CatalogService};
//!
//! let service = CatalogService::new(seed::demo_store("week34"), "week33");
//! let outcome = service.vote(1);
//! assert!(outcome.success);
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod seed;
pub mod service;

pub use catalog::CatalogStore;
pub use config::GreenhouseConfig;
pub use error::{CatalogError, CatalogResult};
pub use service::{CatalogService, Envelope, ProjectQuery};
