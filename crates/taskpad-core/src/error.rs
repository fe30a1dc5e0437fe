use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
  #[error("storage is unavailable: {0}")]
  Unavailable(String),

  #[error("i/o failure on storage key {key}")]
  Io {
    key:    String,
    #[source]
    source: std::io::Error
  },

  #[error("storage rejected write to {key}: {reason}")]
  Rejected {
    key:    String,
    reason: String
  },

  #[error("failed to encode task collection")]
  Encode(#[from] serde_json::Error)
}

/// Input problems that block a create
/// or edit and must be shown to the
/// user. The message is the notice text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Title cannot be empty.")]
  EmptyTitle,

  #[error("Due date must be a calendar date like 2024-06-01, got \"{0}\".")]
  InvalidDueDate(String)
}
