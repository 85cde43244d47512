/// Domain-level errors raised by pure validation in this crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),
}
