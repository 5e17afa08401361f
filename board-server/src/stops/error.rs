//! Stop persistence error types.

/// Errors from the last-stop store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the store file failed
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the store contents failed
    #[error("store serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// System clock is unusable
    #[error("system time before unix epoch")]
    Clock,
}
