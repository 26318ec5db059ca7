use thiserror::Error;

use crate::shared::ValidationError;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}
