use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid profile id: {0:?}")]
    InvalidProfileId(String),
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error("invalid sort direction: {0}")]
    InvalidSortDirection(String),
}

/// Input errors raised by profile forms before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    EmptyName,
}

impl ValidationError {
    /// Form field the error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName => "name",
        }
    }
}
