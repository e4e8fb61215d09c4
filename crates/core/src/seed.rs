//! # Demo Garden
//!
//! The catalog every fresh process starts with: three weeks of showcase
//! projects and the gardener roster.

use crate::catalog::CatalogStore;
use crate::models::{Gardener, PlantType, Project};

fn plant(
    id: u64,
    name: &str,
    description: &str,
    tags: [&str; 2],
    votes: u64,
    growth: f64,
    plant_type: PlantType,
) -> Project {
    Project {
        id,
        name: name.to_string(),
        description: description.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        votes,
        growth,
        plant_type,
        rank: None,
    }
}

fn ranked(rank: u32, project: Project) -> Project {
    Project {
        rank: Some(rank),
        ..project
    }
}

fn week33() -> Vec<Project> {
    use PlantType::*;
    vec![
        ranked(
            1,
            plant(1, "EcoTracker Pro", "Sustainable living metrics dashboard", ["React", "Analytics"], 2847, 95.0, Bloom),
        ),
        ranked(
            2,
            plant(2, "MindfulAI", "Personal wellness AI assistant", ["Python", "ML"], 1923, 78.0, Sprout),
        ),
        ranked(
            3,
            plant(3, "CodeGarden", "Visual code documentation tool", ["TypeScript", "Viz"], 1456, 65.0, Seedling),
        ),
        plant(4, "TaskFlow", "Kanban board with AI suggestions", ["Vue", "AI"], 342, 35.0, Seedling),
        plant(5, "CloudSync", "Multi-cloud file synchronization", ["Go", "Cloud"], 523, 42.0, Sprout),
        plant(6, "DataViz Pro", "Real-time data visualization", ["D3.js", "Charts"], 189, 28.0, Seedling),
        plant(7, "SecureVault", "Encrypted password manager", ["Rust", "Security"], 892, 67.0, Bloom),
        plant(8, "APIForge", "GraphQL API generator", ["Node", "GraphQL"], 734, 55.0, Sprout),
        plant(9, "SmartNotes", "AI-powered note organization", ["Swift", "iOS"], 87, 15.0, Seedling),
    ]
}

fn week32() -> Vec<Project> {
    use PlantType::*;
    vec![
        plant(10, "WebFlow Builder", "No-code website builder", ["JavaScript", "UI"], 1234, 72.0, Bloom),
        plant(11, "DataMiner", "Web scraping automation tool", ["Python", "Automation"], 876, 58.0, Sprout),
    ]
}

fn week31() -> Vec<Project> {
    vec![plant(12, "ChatBot Pro", "Customer service AI chatbot", ["NLP", "AI"], 1567, 82.0, PlantType::Bloom)]
}

/// The read-only gardener roster
pub fn gardeners() -> Vec<Gardener> {
    [
        ("Alex Chen", 12, "https://i.pravatar.cc/40?img=1"),
        ("Sarah Kim", 9, "https://i.pravatar.cc/40?img=2"),
        ("Marcus Johnson", 7, "https://i.pravatar.cc/40?img=3"),
    ]
    .into_iter()
    .map(|(name, blooms, avatar)| Gardener {
        name: name.to_string(),
        blooms,
        avatar: avatar.to_string(),
    })
    .collect()
}

/// A store holding the demo garden, planting submissions into `submission_week`
pub fn demo_store(submission_week: impl Into<String>) -> CatalogStore {
    let mut store = CatalogStore::new(submission_week).with_gardeners(gardeners());

    for (week, projects) in [("week33", week33()), ("week32", week32()), ("week31", week31())] {
        if let Err(e) = store.insert_week(week, projects) {
            // seed ids are distinct, so this only fires if the tables above are edited badly
            tracing::error!(week, error = %e, "Skipping demo week");
        }
    }

    store
}
