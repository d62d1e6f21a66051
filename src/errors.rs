use thiserror::Error;

/// Errors that can occur while ingesting an SMS backup or driving collaborators
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The backup document could not be parsed at all (detail in the message)
    #[error("Parse failed: {0}")]
    ParseFailed(String),

    /// The supplied content is not a recognized backup format
    #[error("Unsupported backup format")]
    UnsupportedFormat,

    /// Reading the backup file from disk failed
    #[error("Failed to read file content: {0}")]
    ReadContentFailed(#[from] std::io::Error),

    /// The builder was invoked with neither content nor a file path
    #[error("Content or filepath is required")]
    MissingContentAndFilepath,

    // ── Domain-specific errors ──────────────────────────────────────────────

    /// The message timestamp token is not an epoch-milliseconds value
    #[error("Invalid message timestamp")]
    TimestampInvalid,

    /// A remote backup store collaborator reported a failure
    #[error("Backup store error: {0}")]
    StoreFailed(String),
}

/// Convenient alias for Result with our main error type
pub type ExtractResult<T> = Result<T, ExtractError>;
