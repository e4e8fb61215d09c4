use thiserror::Error;

/// Failures surfaced by catalog operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Project not found")]
    NotFound { id: u64 },

    /// The caller handed in something that cannot name a project
    #[error("Project not found")]
    InvalidId(String),

    #[error("{0}")]
    Validation(String),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    /// HTTP-style status code for the failure envelope
    pub fn status(&self) -> u16 {
        match self {
            CatalogError::NotFound { .. } | CatalogError::InvalidId(_) => 404,
            CatalogError::Validation(_) => 400,
            CatalogError::Unavailable(_) => 500,
        }
    }

    pub fn missing_fields() -> Self {
        CatalogError::Validation("Name and description are required".to_string())
    }
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
