// Copyright 2025 Cowboy AI, LLC.

//! Permission mapper walkthrough, including the validation failures
//!
//! Run with:
//! ```bash
//! cargo run --example permission_mapping
//! ```

use async_trait::async_trait;
use std::sync::Arc;

use elytron_commands::commands::{AddConstantPermissionMapper, Permission};
use elytron_commands::{
    Address, CommandContext, ManagementClient, ManagementCommand, OperationError, RemoveOutcome,
    ServerVersion, Values,
};

struct DryRunClient;

#[async_trait]
impl ManagementClient for DryRunClient {
    async fn add(&self, address: &Address, values: Values) -> Result<(), OperationError> {
        println!("  ➕ add {} {}", address, values.to_json());
        Ok(())
    }

    async fn remove_if_exists(&self, address: &Address) -> Result<RemoveOutcome, OperationError> {
        println!("  ➖ remove-if-exists {}", address);
        Ok(RemoveOutcome::Removed)
    }

    async fn reload_if_required(&self) -> Result<(), OperationError> {
        println!("  🔄 reload-if-required");
        Ok(())
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🛂 Configuring a constant-permission-mapper (dry run)");
    println!("=====================================================\n");

    let login = Permission::builder("org.wildfly.security.auth.permission.LoginPermission")
        .build()?;
    let read_tmp = Permission::builder("java.io.FilePermission")
        .target_name("/tmp/*")
        .action("read")
        .build()?;

    let ctx = CommandContext::new(Arc::new(DryRunClient), ServerVersion::VERSION_7_0_0);

    println!("inline permissions:");
    AddConstantPermissionMapper::builder("grant-login")
        .add_permissions([login.clone(), read_tmp])
        .replace_existing()
        .build()?
        .apply(&ctx)
        .await?;

    // the two attribute groups are mutually exclusive
    println!("\nmixing permissions with permission-sets:");
    match AddConstantPermissionMapper::builder("broken")
        .add_permissions([login])
        .add_permission_sets(["login-permission-set"])
        .build()
    {
        Ok(_) => println!("  unexpected: build succeeded"),
        Err(e) => println!("  ❌ rejected as expected: {}", e),
    }

    // permission-sets are gated on the server version that introduced them
    println!("\npermission-sets on an older server:");
    let old_ctx = CommandContext::new(Arc::new(DryRunClient), ServerVersion::VERSION_5_0_0);
    let cmd = AddConstantPermissionMapper::builder("from-sets")
        .add_permission_sets(["login-permission-set"])
        .build()?;
    match cmd.apply(&old_ctx).await {
        Ok(()) => println!("  unexpected: apply succeeded"),
        Err(e) => println!("  ❌ rejected before any operation: {}", e),
    }

    Ok(())
}
