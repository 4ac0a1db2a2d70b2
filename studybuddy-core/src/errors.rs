use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid difficulty: {0} (expected easy, medium, or hard)")]
    InvalidDifficulty(String),
    #[error("not found: {0}")]
    NotFound(&'static str),
    #[error("storage error: {0}")]
    Storage(&'static str),
}
