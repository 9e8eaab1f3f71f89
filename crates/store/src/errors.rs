use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("persistence error: {0}")]
    Persistence(#[from] std::io::Error),
    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}
