use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to connect to the property store: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Store migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("An error occurred during JSON serialization/deserialization: {0}")]
    Json(#[from] serde_json::Error),

    #[error("A stored row could not be decoded: {0}")]
    Corrupt(String),

    #[error("The requested property was not found in the store.")]
    NotFound,
}
