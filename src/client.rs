//! Management client seam and command contract
//!
//! The low-level management client (connection handling, wire protocol,
//! response decoding) is an external collaborator. This module defines the
//! narrow surface commands consume from it, plus the uniform `apply`
//! contract every command exposes to the orchestration layer.

use async_trait::async_trait;
use std::sync::Arc;

use crate::address::Address;
use crate::errors::{CommandResult, OperationError};
use crate::values::Values;
use crate::version::ServerVersion;

/// Result of an idempotent remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The resource existed and was removed
    Removed,
    /// No resource existed at the address; nothing was done
    Absent,
}

/// Operations commands issue against the server's management interface
///
/// Implementations own connection pooling, retries, and transactional
/// semantics; commands call these methods strictly one at a time and
/// propagate failures unmodified.
#[async_trait]
pub trait ManagementClient: Send + Sync {
    /// Create a resource at `address` with the given attributes
    async fn add(&self, address: &Address, values: Values) -> Result<(), OperationError>;

    /// Remove the resource at `address` if it exists
    async fn remove_if_exists(&self, address: &Address) -> Result<RemoveOutcome, OperationError>;

    /// Reload the server, only if a prior operation left it requiring one
    async fn reload_if_required(&self) -> Result<(), OperationError>;
}

/// Execution context handed to [`ManagementCommand::apply`]
///
/// Bundles the connection handle with the management model version
/// negotiated for the target server.
#[derive(Clone)]
pub struct CommandContext {
    /// Shared low-level management client
    pub client: Arc<dyn ManagementClient>,
    /// Version gates are checked against this before any client call
    pub version: ServerVersion,
}

impl CommandContext {
    /// Create a context for the given client and negotiated version
    pub fn new(client: Arc<dyn ManagementClient>, version: ServerVersion) -> Self {
        Self { client, version }
    }
}

/// A single management change, applied against a connected server
///
/// Each implementation is an immutable value object produced by its
/// builder; `apply` runs its operations in order and stops at the first
/// failure.
#[async_trait]
pub trait ManagementCommand: Send + Sync {
    /// Apply this command through the context's client
    async fn apply(&self, ctx: &CommandContext) -> CommandResult<()>;
}
