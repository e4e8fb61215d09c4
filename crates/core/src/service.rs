//! # Catalog Service
//!
//! Request/response facade over the [`CatalogStore`]. Every call takes the
//! store lock for its whole duration and answers with an [`Envelope`].

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use utoipa::{IntoParams, ToSchema};

use crate::catalog::{search, CatalogStore, ProjectFilter};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CatalogStats, Gardener, GardenOverview, NewProject, Project, VoteOutcome, WeekSummary,
};

/// Uniform `{ success, data | message }` response wrapper
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Transport status; not part of the JSON body
    #[serde(skip, default = "ok_status")]
    #[schema(ignore)]
    pub status: u16,
}

fn ok_status() -> u16 {
    200
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            status: ok_status(),
        }
    }

    /// Failure envelope with an explicit status, for boundary errors such as
    /// unparseable request bodies.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            status,
        }
    }

    pub fn failure(error: &CatalogError) -> Self {
        Self::rejected(error.status(), error.to_string())
    }

    pub fn from_result(result: CatalogResult<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => {
                tracing::debug!(status = e.status(), error = ?e, "Catalog request failed");
                Self::failure(&e)
            }
        }
    }
}

/// Query string accepted by the project listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectQuery {
    /// Week key, defaults to the current week
    pub week: Option<String>,
    /// Case-insensitive text search over name, description and tags
    pub q: Option<String>,
    /// `all` (default) or `trending`
    pub filter: Option<String>,
}

impl ProjectQuery {
    pub fn for_week(week: impl Into<String>) -> Self {
        Self {
            week: Some(week.into()),
            ..Self::default()
        }
    }
}

/// Shared handle over one catalog store
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<Mutex<CatalogStore>>,
    default_week: Arc<str>,
}

impl CatalogService {
    /// Take ownership of `store`; `default_week` answers requests that name no week.
    pub fn new(store: CatalogStore, default_week: impl Into<String>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            default_week: Arc::from(default_week.into()),
        }
    }

    pub fn default_week(&self) -> &str {
        &self.default_week
    }

    fn lock(&self) -> CatalogResult<MutexGuard<'_, CatalogStore>> {
        self.store
            .lock()
            .map_err(|e| CatalogError::Unavailable(format!("Lock error: {}", e)))
    }

    fn with_store<T>(
        &self,
        op: impl FnOnce(&mut CatalogStore) -> CatalogResult<T>,
    ) -> Envelope<T> {
        Envelope::from_result(self.lock().and_then(|mut store| op(&mut store)))
    }

    fn resolve_week<'a>(&'a self, week: Option<&'a str>) -> &'a str {
        match week {
            Some(w) if !w.trim().is_empty() => w,
            _ => self.default_week(),
        }
    }

    /// Projects of `week` (or the default week) in display order
    pub fn get_projects_for_week(&self, week: Option<&str>) -> Envelope<Vec<Project>> {
        let week = self.resolve_week(week);
        self.with_store(|store| Ok(store.list_by_week(week).to_vec()))
    }

    /// Week listing narrowed by the optional text query and named filter
    pub fn search_projects(&self, query: &ProjectQuery) -> Envelope<Vec<Project>> {
        let week = self.resolve_week(query.week.as_deref());
        let filter = query
            .filter
            .as_deref()
            .map(ProjectFilter::parse)
            .unwrap_or_default();

        self.with_store(|store| {
            Ok(search::select(store.list_by_week(week), query.q.as_deref(), filter)
                .cloned()
                .collect())
        })
    }

    pub fn get_project_by_id(&self, id: u64) -> Envelope<Project> {
        self.with_store(|store| store.find_by_id(id).cloned())
    }

    pub fn vote(&self, id: u64) -> Envelope<VoteOutcome> {
        self.with_store(|store| store.record_vote(id))
    }

    pub fn create_project(&self, fields: NewProject) -> Envelope<Project> {
        self.with_store(|store| store.add_project(fields))
    }

    pub fn get_stats(&self) -> Envelope<CatalogStats> {
        self.with_store(|store| Ok(store.compute_stats()))
    }

    pub fn list_weeks(&self) -> Envelope<Vec<WeekSummary>> {
        self.with_store(|store| Ok(store.list_weeks()))
    }

    pub fn list_gardeners(&self) -> Envelope<Vec<Gardener>> {
        self.with_store(|store| Ok(store.list_gardeners().to_vec()))
    }

    /// Page data for the garden view.
    ///
    /// An unknown week still echoes back as `current_week`, but shows the
    /// default week's projects instead of an empty bed.
    pub fn garden_overview(&self, week: Option<&str>) -> Envelope<GardenOverview> {
        let current_week = self.resolve_week(week).to_string();
        self.with_store(|store| {
            let shown = if store.has_week(&current_week) {
                current_week.as_str()
            } else {
                self.default_week()
            };
            Ok(GardenOverview {
                projects: store.list_by_week(shown).to_vec(),
                current_week: current_week.clone(),
                weeks: store.list_weeks(),
                gardeners: store.list_gardeners().to_vec(),
            })
        })
    }
}

/// Parse a path segment into a project id; anything non-numeric names no project.
pub fn parse_project_id(raw: &str) -> CatalogResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| CatalogError::InvalidId(raw.to_string()))
}
