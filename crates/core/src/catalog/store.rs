//! # Catalog Store
//!
//! Single source of truth for projects and gardeners. Projects live in
//! insertion-ordered week partitions; new submissions go to the submission
//! week, which is created the first time something is planted there.

use indexmap::IndexMap;

use super::growth::{GrowthSource, RandomGrowth, MAX_GROWTH_STEP};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{
    CatalogStats, Gardener, NewProject, PlantType, Project, VoteOutcome, WeekSummary,
    INITIAL_GROWTH, MAX_GROWTH,
};

const WEEK_PREFIX: &str = "week";

/// Display label for a week key: `week33` becomes `Week 33`.
/// Keys without the prefix are shown as-is.
pub fn week_label(week_id: &str) -> String {
    match week_id.strip_prefix(WEEK_PREFIX) {
        Some(number) if !number.is_empty() => format!("Week {}", number),
        _ => week_id.to_string(),
    }
}

/// In-memory project catalog
pub struct CatalogStore {
    weeks: IndexMap<String, Vec<Project>>,
    gardeners: Vec<Gardener>,
    submission_week: String,
    next_id: u64,
    growth: Box<dyn GrowthSource>,
}

impl std::fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogStore")
            .field("weeks", &self.weeks.len())
            .field("gardeners", &self.gardeners.len())
            .field("submission_week", &self.submission_week)
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl CatalogStore {
    /// Empty catalog planting new submissions into `submission_week`
    pub fn new(submission_week: impl Into<String>) -> Self {
        Self {
            weeks: IndexMap::new(),
            gardeners: Vec::new(),
            submission_week: submission_week.into(),
            next_id: 1,
            growth: Box::new(RandomGrowth),
        }
    }

    /// Swap the growth source (tests use `FixedGrowth`)
    pub fn with_growth_source(mut self, source: impl GrowthSource + 'static) -> Self {
        self.growth = Box::new(source);
        self
    }

    pub fn with_gardeners(mut self, gardeners: Vec<Gardener>) -> Self {
        self.gardeners = gardeners;
        self
    }

    pub fn submission_week(&self) -> &str {
        &self.submission_week
    }

    /// Append existing projects to a week, creating the partition if needed.
    ///
    /// Rejects the whole batch if any id is already taken (in the store or
    /// within the batch). Keeps the id counter ahead of every id seen.
    pub fn insert_week(
        &mut self,
        week_id: impl Into<String>,
        projects: Vec<Project>,
    ) -> CatalogResult<()> {
        let mut seen = std::collections::HashSet::new();
        for project in &projects {
            if !seen.insert(project.id) || self.find_by_id(project.id).is_ok() {
                return Err(CatalogError::Validation(format!(
                    "Duplicate project id {}",
                    project.id
                )));
            }
        }

        if let Some(max) = projects.iter().map(|p| p.id).max() {
            self.next_id = self.next_id.max(max.saturating_add(1));
        }

        self.weeks
            .entry(week_id.into())
            .or_default()
            .extend(projects.into_iter().map(|mut p| {
                p.growth = p.growth.clamp(0.0, MAX_GROWTH);
                p
            }));
        Ok(())
    }

    /// Projects of one week in display order; unknown weeks are empty.
    pub fn list_by_week(&self, week_id: &str) -> &[Project] {
        self.weeks.get(week_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_week(&self, week_id: &str) -> bool {
        self.weeks.contains_key(week_id)
    }

    pub fn find_by_id(&self, id: u64) -> CatalogResult<&Project> {
        self.weeks
            .values()
            .flatten()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound { id })
    }

    /// One vote: `votes + 1`, growth bumped by the growth source, capped at 100.
    pub fn record_vote(&mut self, id: u64) -> CatalogResult<VoteOutcome> {
        // borrow the partition field alone so the growth source stays reachable
        let project = self
            .weeks
            .values_mut()
            .flatten()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound { id })?;

        // drawn only for a real project, so a miss leaves the source untouched
        let step = self.growth.next_increment();
        // a misbehaving source must not shrink growth or jump past one step
        let step = if step.is_finite() {
            step.clamp(0.0, MAX_GROWTH_STEP)
        } else {
            0.0
        };

        project.votes = project.votes.saturating_add(1);
        project.growth = (project.growth + step).min(MAX_GROWTH);

        tracing::debug!(
            project_id = id,
            votes = project.votes,
            growth = project.growth,
            "Vote recorded"
        );

        Ok(VoteOutcome {
            votes: project.votes,
            growth: project.growth,
        })
    }

    /// Plant a new submission in the submission week.
    pub fn add_project(&mut self, submission: NewProject) -> CatalogResult<Project> {
        let name = required(submission.name)?;
        let description = required(submission.description)?;

        let project = Project {
            id: self.allocate_id(),
            name,
            description,
            tags: submission.tags.map(|t| t.into_tags()).unwrap_or_default(),
            votes: 0,
            growth: INITIAL_GROWTH,
            plant_type: PlantType::Seedling,
            rank: None,
        };

        self.weeks
            .entry(self.submission_week.clone())
            .or_default()
            .push(project.clone());

        tracing::info!(
            project_id = project.id,
            week = %self.submission_week,
            name = %project.name,
            "Project planted"
        );

        Ok(project)
    }

    pub fn compute_stats(&self) -> CatalogStats {
        let projects = || self.weeks.values().flatten();
        CatalogStats {
            total_projects: projects().count(),
            total_votes: projects().map(|p| p.votes).sum(),
            total_weeks: self.weeks.len(),
            total_gardeners: self.gardeners.len(),
        }
    }

    pub fn list_weeks(&self) -> Vec<WeekSummary> {
        self.weeks
            .iter()
            .map(|(id, projects)| WeekSummary {
                id: id.clone(),
                label: week_label(id),
                count: projects.len(),
            })
            .collect()
    }

    pub fn list_gardeners(&self) -> &[Gardener] {
        &self.gardeners
    }

    /// Every project across all weeks, week order then display order
    pub fn iter_projects(&self) -> impl Iterator<Item = &Project> {
        self.weeks.values().flatten()
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn required(field: Option<String>) -> CatalogResult<String> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(CatalogError::missing_fields()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::growth::FixedGrowth;
    use crate::models::TagsInput;
    use crate::seed;

    fn seeded(step: f64) -> CatalogStore {
        seed::demo_store("week34").with_growth_source(FixedGrowth::constant(step))
    }

    #[test]
    fn test_vote_increments_by_one_and_grows() {
        let mut store = seeded(2.5);
        let before = store.find_by_id(1).unwrap().clone();
        assert_eq!(before.votes, 2847);

        let outcome = store.record_vote(1).unwrap();
        assert_eq!(outcome.votes, 2848);
        assert!(outcome.growth > before.growth);
        assert!(outcome.growth - before.growth <= MAX_GROWTH_STEP);
        assert_eq!(outcome.growth, 97.5);
        assert_eq!(store.find_by_id(1).unwrap().votes, 2848);
    }

    #[test]
    fn test_growth_is_clamped_at_100() {
        let mut store = seeded(5.0);
        for _ in 0..10 {
            let outcome = store.record_vote(1).unwrap();
            assert!(outcome.growth <= MAX_GROWTH);
        }
        assert_eq!(store.find_by_id(1).unwrap().growth, 100.0);
        assert_eq!(store.find_by_id(1).unwrap().votes, 2857);
    }

    #[test]
    fn test_out_of_range_growth_source_is_clamped() {
        let mut store = seeded(0.0).with_growth_source(FixedGrowth::new(vec![-20.0, 40.0]));
        let start = store.find_by_id(4).unwrap().growth;

        let first = store.record_vote(4).unwrap();
        assert_eq!(first.growth, start);

        let second = store.record_vote(4).unwrap();
        assert_eq!(second.growth, start + MAX_GROWTH_STEP);
    }

    #[test]
    fn test_vote_unknown_id_leaves_store_unchanged() {
        let mut store = seeded(0.0).with_growth_source(FixedGrowth::new(vec![1.0, 3.0]));
        let before = store.compute_stats();
        assert_eq!(
            store.record_vote(99999),
            Err(CatalogError::NotFound { id: 99999 })
        );
        assert_eq!(store.compute_stats(), before);

        // the miss must not consume a growth step
        let outcome = store.record_vote(1).unwrap();
        assert_eq!(outcome.growth, 96.0);
        assert_eq!(store.record_vote(1).unwrap().growth, 99.0);
    }

    #[test]
    fn test_add_project_defaults_and_tags() {
        let mut store = seeded(1.0);
        let project = store
            .add_project(NewProject::new("X", "Y").with_tags(TagsInput::Text("A, B".into())))
            .unwrap();

        assert_eq!(project.tags, vec!["A", "B"]);
        assert_eq!(project.votes, 0);
        assert_eq!(project.growth, 5.0);
        assert_eq!(project.plant_type, PlantType::Seedling);
        assert_eq!(project.rank, None);
        assert_eq!(store.list_by_week("week34"), &[project.clone()]);
        assert_eq!(store.find_by_id(project.id).unwrap(), &project);
    }

    #[test]
    fn test_add_project_requires_name_and_description() {
        let mut store = seeded(1.0);
        let before = store.compute_stats();

        let empty_name = NewProject::new("", "Y");
        assert_eq!(
            store.add_project(empty_name),
            Err(CatalogError::missing_fields())
        );

        let missing_description = NewProject {
            name: Some("X".into()),
            description: None,
            tags: None,
        };
        assert!(store.add_project(missing_description).is_err());

        assert_eq!(store.compute_stats(), before);
        assert!(!store.has_week("week34"));
    }

    #[test]
    fn test_new_ids_never_collide() {
        let mut store = seeded(1.0);
        let mut ids: Vec<u64> = store.iter_projects().map(|p| p.id).collect();
        for i in 0..50 {
            let project = store
                .add_project(NewProject::new(format!("P{i}"), "rapid fire"))
                .unwrap();
            assert!(!ids.contains(&project.id));
            ids.push(project.id);
        }
    }

    #[test]
    fn test_insert_week_rejects_duplicate_ids() {
        let mut store = seeded(1.0);
        let dup = store.find_by_id(3).unwrap().clone();
        let err = store.insert_week("week30", vec![dup]).unwrap_err();
        assert_eq!(err.status(), 400);
        assert!(!store.has_week("week30"));
    }

    #[test]
    fn test_find_by_id_agrees_with_list_by_week() {
        let store = seeded(1.0);
        for week in store.list_weeks() {
            for project in store.list_by_week(&week.id) {
                assert_eq!(store.find_by_id(project.id).unwrap(), project);
            }
        }
    }

    #[test]
    fn test_stats_total_votes_matches_partitions() {
        let mut store = seeded(1.0);
        store.record_vote(10).unwrap();
        store.add_project(NewProject::new("X", "Y")).unwrap();

        let stats = store.compute_stats();
        let summed: u64 = store
            .list_weeks()
            .iter()
            .flat_map(|w| store.list_by_week(&w.id))
            .map(|p| p.votes)
            .sum();
        assert_eq!(stats.total_votes, summed);
        assert_eq!(stats.total_projects, 13);
        assert_eq!(stats.total_weeks, 4);
        assert_eq!(stats.total_gardeners, 3);
    }

    #[test]
    fn test_list_weeks_keeps_insertion_order() {
        let store = seeded(1.0);
        let weeks = store.list_weeks();
        let ids: Vec<&str> = weeks.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["week33", "week32", "week31"]);
        assert_eq!(weeks[0].label, "Week 33");
        assert_eq!(weeks[0].count, 9);
    }

    #[test]
    fn test_unknown_week_is_empty() {
        let store = seeded(1.0);
        assert!(store.list_by_week("week99").is_empty());
    }

    #[test]
    fn test_week_label() {
        assert_eq!(week_label("week7"), "Week 7");
        assert_eq!(week_label("archive"), "archive");
        assert_eq!(week_label("week"), "week");
    }
}
