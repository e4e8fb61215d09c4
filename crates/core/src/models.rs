//! # Garden Models
//!
//! Wire and domain types shared by the catalog store, the service facade and
//! the HTTP layer. JSON field names follow the camelCase shape the garden page
//! consumes (`plantType`, `totalVotes`, ...).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Growth ceiling, in percent.
pub const MAX_GROWTH: f64 = 100.0;

/// Growth assigned to freshly planted projects.
pub const INITIAL_GROWTH: f64 = 5.0;

/// Categorical plant stage shown next to a project
///
/// Informational only: voting never re-derives it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    #[default]
    Seedling,
    Sprout,
    Bloom,
}

/// A showcase entry tracked with votes and a growth metric
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique across every week partition
    pub id: u64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub votes: u64,
    /// Display vitality in percent, always within `[0, 100]`
    pub growth: f64,
    pub plant_type: PlantType,
    /// Podium position for featured entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
}

impl Project {
    /// Lowercased "name description tags" haystack used by search.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.name, self.description, self.tags.join(" ")).to_lowercase()
    }
}

/// A contributor listed in the read-only roster
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Gardener {
    pub name: String,
    /// Number of contributions
    pub blooms: u32,
    /// Avatar image URL
    pub avatar: String,
}

/// Result of a successful vote
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct VoteOutcome {
    pub votes: u64,
    pub growth: f64,
}

/// One entry of the week selector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct WeekSummary {
    /// Partition key, e.g. `week33`
    pub id: String,
    /// Human label, e.g. `Week 33`
    pub label: String,
    /// Number of projects in the partition
    pub count: usize,
}

/// Aggregate counts across the whole catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_projects: usize,
    pub total_votes: u64,
    pub total_weeks: usize,
    pub total_gardeners: usize,
}

/// Tags as submitted: either a comma-separated string or a list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(untagged)]
pub enum TagsInput {
    Text(String),
    List(Vec<String>),
}

impl TagsInput {
    /// Text is split on commas, trimmed, and empties dropped. Lists pass through.
    pub fn into_tags(self) -> Vec<String> {
        match self {
            TagsInput::Text(text) => text
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
            TagsInput::List(tags) => tags,
        }
    }
}

/// Submission payload for a new project
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct NewProject {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<TagsInput>,
}

impl NewProject {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            tags: None,
        }
    }

    pub fn with_tags(mut self, tags: TagsInput) -> Self {
        self.tags = Some(tags);
        self
    }
}

/// Everything the garden page renders for one week
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GardenOverview {
    pub projects: Vec<Project>,
    pub current_week: String,
    pub weeks: Vec<WeekSummary>,
    pub gardeners: Vec<Gardener>,
}
