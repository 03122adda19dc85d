use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Request body absent, not a JSON object, or missing `name`/`value`.
    #[error("invalid input")]
    InvalidInput,
    /// Referenced item id does not exist in the store.
    #[error("item not found")]
    NotFound,
}
