use thiserror::Error;

/// Expected outcomes of normal operation, not faults; the HTTP layer maps
/// them to status codes per route.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("collection not found: {0}")]
    CollectionNotFound(String),
    /// Collection exists but holds no item with the given id.
    /// First field is the collection name, second the item id.
    #[error("item {1} not found in collection {0}")]
    ItemNotFound(String, String),
}

pub type StoreResult<T> = Result<T, StoreError>;
