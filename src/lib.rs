//! Fluent management commands for the elytron security subsystem
//!
//! This crate builds and applies management operations against an
//! application server's administrative interface: each command validates
//! its input through a builder, derives the resource's address in the
//! management tree, and submits add/remove/reload operations through a
//! shared low-level [`ManagementClient`].
//!
//! The wire protocol, connection lifecycle, and the server-side tree model
//! belong to the client implementation; this crate only composes
//! operations against that seam.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use elytron_commands::{CommandContext, ManagementCommand, ServerVersion};
//! use elytron_commands::commands::AddSimpleRegexRealmMapper;
//!
//! # async fn run(client: Arc<dyn elytron_commands::ManagementClient>) -> elytron_commands::CommandResult<()> {
//! let ctx = CommandContext::new(client, ServerVersion::VERSION_7_0_0);
//!
//! AddSimpleRegexRealmMapper::builder("r1")
//!     .pattern("^a.*$")
//!     .replace_existing()
//!     .build()?
//!     .apply(&ctx)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod address;
pub mod client;
pub mod commands;
pub mod errors;
pub mod values;
pub mod version;

// Re-export commonly used types
pub use address::Address;
pub use client::{CommandContext, ManagementClient, ManagementCommand, RemoveOutcome};
pub use errors::{CommandError, CommandResult, OperationError};
pub use values::{ModelValue, Values};
pub use version::ServerVersion;
