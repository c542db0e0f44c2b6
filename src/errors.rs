//! Error types for management commands

use thiserror::Error;

use crate::version::ServerVersion;

/// Errors that can occur while building or applying a management command
#[derive(Debug, Error)]
pub enum CommandError {
    /// A required field is missing or empty, or two mutually exclusive
    /// attribute groups are both populated
    #[error("invalid command argument: {0}")]
    InvalidArgument(String),

    /// The target server predates the feature this command configures
    #[error("{feature} requires server version {required} or newer, but the server reports {actual}")]
    UnsupportedVersion {
        /// Human-readable name of the gated feature
        feature: String,
        /// Minimum management model version for the feature
        required: ServerVersion,
        /// Version negotiated with the target server
        actual: ServerVersion,
    },

    /// The management client reported a failed operation; passed through
    /// unmodified
    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Structured failure reported by the management client
#[derive(Debug, Error)]
pub enum OperationError {
    /// The server executed the operation and reported a failure description
    #[error("management operation failed: {0}")]
    Failed(String),

    /// The operation never reached the server
    #[error("management transport error: {0}")]
    Transport(String),
}

/// Result type for management commands
pub type CommandResult<T> = Result<T, CommandError>;

impl CommandError {
    /// Shorthand for a missing/empty required field error
    pub(crate) fn required(field: &str, resource: &str) -> Self {
        CommandError::InvalidArgument(format!(
            "{field} of the {resource} must be specified as a non-empty value"
        ))
    }
}
