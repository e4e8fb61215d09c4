//! Search and filter over a week's projects.

use crate::models::Project;

/// Growth at or above which a project counts as trending.
pub const TRENDING_GROWTH: f64 = 50.0;

/// Named filters offered by the garden controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Trending,
}

impl ProjectFilter {
    /// Unknown names fall back to `All`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "trending" => Self::Trending,
            _ => Self::All,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Trending => project.growth >= TRENDING_GROWTH,
        }
    }
}

/// Case-insensitive substring match on name, description and tags.
/// A blank query matches everything.
pub fn matches_query(project: &Project, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    project.search_text().contains(&query.to_lowercase())
}

/// Applies both the text query and the filter, keeping display order.
pub fn select<'a>(
    projects: &'a [Project],
    query: Option<&str>,
    filter: ProjectFilter,
) -> impl Iterator<Item = &'a Project> + 'a {
    let query = query.map(str::to_string);
    projects.iter().filter(move |project| {
        filter.matches(project) && query.as_deref().map_or(true, |q| matches_query(project, q))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlantType;

    fn project(id: u64, name: &str, tags: &[&str], growth: f64) -> Project {
        Project {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            votes: 0,
            growth,
            plant_type: PlantType::Seedling,
            rank: None,
        }
    }

    #[test]
    fn test_query_matches_tags_case_insensitively() {
        let p = project(1, "SecureVault", &["Rust", "Security"], 67.0);
        assert!(matches_query(&p, "rust"));
        assert!(matches_query(&p, "VAULT"));
        assert!(!matches_query(&p, "python"));
        assert!(matches_query(&p, "   "));
    }

    #[test]
    fn test_trending_filter_threshold() {
        let projects = vec![
            project(1, "A", &[], 50.0),
            project(2, "B", &[], 49.9),
            project(3, "C", &[], 95.0),
        ];
        let ids: Vec<u64> = select(&projects, None, ProjectFilter::Trending)
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_unknown_filter_is_all() {
        assert_eq!(ProjectFilter::parse("newest"), ProjectFilter::All);
        assert_eq!(ProjectFilter::parse(" Trending "), ProjectFilter::Trending);
    }
}
