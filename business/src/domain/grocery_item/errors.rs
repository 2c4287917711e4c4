#[derive(Debug, thiserror::Error)]
pub enum GroceryError {
    /// The document store never initialized at startup; the save route is
    /// degraded for the lifetime of the process.
    #[error("grocery.store_unavailable")]
    StoreUnavailable,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
