// src/error.rs
// Error types for operations and the dispatch boundary

use thiserror::Error;

/// Errors raised by operations and their storage collaborator.
///
/// Anything below the dispatcher returns this type. The dispatcher is the only
/// place that turns it into a [`DispatchError`].
#[derive(Error, Debug)]
pub enum OpError {
    /// Domain-level failure whose message is shown to the user verbatim
    #[error("{0}")]
    Domain(String),

    /// Arguments passed the parameter contract but could not be read into the
    /// operation's typed input
    #[error("{0}")]
    InvalidArguments(String),

    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias for operation results
pub type Result<T> = std::result::Result<T, OpError>;

impl OpError {
    /// Shorthand for a domain failure
    pub fn domain(msg: impl Into<String>) -> Self {
        OpError::Domain(msg.into())
    }

    /// Convert to user-facing string for the dispatch boundary
    pub fn to_user_string(&self) -> String {
        self.to_string()
    }
}

impl From<String> for OpError {
    fn from(s: String) -> Self {
        OpError::Domain(s)
    }
}

/// Normalized failure produced at the dispatch boundary.
///
/// The `Display` text is exactly the `error` field of the failure record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Unknown tool: {0}")]
    UnknownOperation(String),

    #[error("Invalid arguments for {name}: {detail}")]
    InvalidArguments { name: String, detail: String },

    /// Domain failure reported by the operation, message kept verbatim
    #[error("{0}")]
    OperationFailure(String),

    #[error("Tool execution failed: {0}")]
    ExecutionFailed(String),
}

impl DispatchError {
    /// Classify an operation error raised while running `name`
    pub fn from_op(name: &str, err: OpError) -> Self {
        match err {
            OpError::Domain(msg) => DispatchError::OperationFailure(msg),
            OpError::InvalidArguments(detail) => DispatchError::InvalidArguments {
                name: name.to_string(),
                detail,
            },
            other => DispatchError::ExecutionFailed(other.to_user_string()),
        }
    }
}
