// Copyright (c) 2025 - Cowboy AI, Inc.

//! Management commands for the elytron subsystem
//!
//! Each command is an immutable value object built by a validating builder
//! and applied through a [`ManagementClient`](crate::ManagementClient).
//! All commands follow the same sequence:
//!
//! ```text
//! Builder → build() → Command → apply(ctx)
//!                                  │
//!                                  ├─ version gate (no client call on failure)
//!                                  ├─ remove-if-exists + reload   (replace only)
//!                                  └─ add(address, values)
//! ```
//!
//! Resource addresses follow `/subsystem=elytron/{resource-type}={name}`.

pub mod permission_mapper;
pub mod principal_decoder;
pub mod realm_mapper;
pub mod role_decoder;
pub mod role_mapper;

pub use permission_mapper::{AddConstantPermissionMapper, Permission};
pub use principal_decoder::AddConstantPrincipalDecoder;
pub use realm_mapper::{
    AddConstantRealmMapper, AddMappedRegexRealmMapper, AddSimpleRegexRealmMapper,
};
pub use role_decoder::AddSimpleRoleDecoder;
pub use role_mapper::{AddConstantRoleMapper, AddLogicalRoleMapper, LogicalOperation};

use tracing::debug;

use crate::address::Address;
use crate::client::CommandContext;
use crate::errors::{CommandError, CommandResult};
use crate::version::ServerVersion;

/// Subsystem every command in this module targets
pub const ELYTRON: &str = "elytron";

/// Gate on the management model version that introduced the elytron
/// subsystem (WildFly 11)
pub(crate) fn require_elytron(version: ServerVersion) -> CommandResult<()> {
    if version.less_than(ServerVersion::VERSION_5_0_0) {
        return Err(CommandError::UnsupportedVersion {
            feature: "the elytron subsystem".to_string(),
            required: ServerVersion::VERSION_5_0_0,
            actual: version,
        });
    }
    Ok(())
}

/// Remove a same-named resource and reload before re-adding it
///
/// Structural removals can leave the server in reload-required state; the
/// reload must land before the add is submitted.
pub(crate) async fn remove_existing(ctx: &CommandContext, address: &Address) -> CommandResult<()> {
    let outcome = ctx.client.remove_if_exists(address).await?;
    debug!("Removed existing resource at {}: {:?}", address, outcome);
    ctx.client.reload_if_required().await?;
    Ok(())
}
