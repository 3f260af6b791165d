use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database driver error: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("failed to encode document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    #[error("performing an update on the path '{0}' would modify an immutable field")]
    ImmutableField(String),
}
