use thiserror::Error;

/// Failure modes of the desk. None of them are fatal: each one degrades
/// to a safe state (inline message, empty list, logged-out session).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeskError {
    /// Bad user input, shown inline and fixed by re-editing
    #[error("{0}")]
    Validation(String),

    /// Symbol that the catalog or quote table cannot resolve
    #[error("Unknown symbol: {0}")]
    Lookup(String),

    /// Durable storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Order submission failed
    #[error("{0}")]
    Gateway(String),

    /// Login or registration rejected
    #[error("{0}")]
    Auth(String),

    /// Another submission is still awaiting its acknowledgment
    #[error("An order is already being submitted")]
    SubmissionPending,
}

impl DeskError {
    pub fn validation(msg: impl Into<String>) -> Self {
        DeskError::Validation(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        DeskError::Storage(msg.into())
    }

    pub fn gateway(msg: impl Into<String>) -> Self {
        DeskError::Gateway(msg.into())
    }
}

impl From<serde_json::Error> for DeskError {
    fn from(e: serde_json::Error) -> Self {
        DeskError::Storage(e.to_string())
    }
}

impl From<std::io::Error> for DeskError {
    fn from(e: std::io::Error) -> Self {
        DeskError::Storage(e.to_string())
    }
}
