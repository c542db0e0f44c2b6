// Copyright 2025 Cowboy AI, LLC.

//! Realm mapper walkthrough against a dry-run client
//!
//! Run with:
//! ```bash
//! cargo run --example apply_realm_mappers
//! ```

use async_trait::async_trait;
use std::sync::Arc;

use elytron_commands::commands::{AddConstantRealmMapper, AddSimpleRegexRealmMapper};
use elytron_commands::{
    Address, CommandContext, ManagementClient, ManagementCommand, OperationError, RemoveOutcome,
    ServerVersion, Values,
};

/// Prints each operation instead of sending it anywhere
struct DryRunClient;

#[async_trait]
impl ManagementClient for DryRunClient {
    async fn add(&self, address: &Address, values: Values) -> Result<(), OperationError> {
        println!("  ➕ add {} {}", address, values.to_json());
        Ok(())
    }

    async fn remove_if_exists(&self, address: &Address) -> Result<RemoveOutcome, OperationError> {
        println!("  ➖ remove-if-exists {}", address);
        Ok(RemoveOutcome::Absent)
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

    println!("🔐 Configuring realm mappers (dry run)");
    println!("======================================\n");

    let ctx = CommandContext::new(Arc::new(DryRunClient), ServerVersion::VERSION_7_0_0);

    println!("constant-realm-mapper 'local':");
    AddConstantRealmMapper::builder("local")
        .realm_name("ApplicationRealm")
        .build()?
        .apply(&ctx)
        .await?;

    println!("\nsimple-regex-realm-mapper 'by-suffix' (replacing any existing one):");
    AddSimpleRegexRealmMapper::builder("by-suffix")
        .pattern(".*@([^@]+)$")
        .delegate_realm_mapper("local")
        .replace_existing()
        .build()?
        .apply(&ctx)
        .await?;

    println!("\n🎉 All commands applied");
    Ok(())
}
