//! # Catalog
//!
//! The in-memory project garden: week partitions, the gardener roster, and
//! the growth source that drives voting.
//!
//! ```text
//! CatalogService (envelopes)
//!        ↓
//! CatalogStore ── weeks: IndexMap<week id, Vec<Project>>
//!        ↓
//! GrowthSource (RandomGrowth | FixedGrowth)
//! ```

pub mod growth;
pub mod search;
pub mod store;

pub use growth::{FixedGrowth, GrowthSource, RandomGrowth, MAX_GROWTH_STEP};
pub use search::{ProjectFilter, TRENDING_GROWTH};
pub use store::{week_label, CatalogStore};
