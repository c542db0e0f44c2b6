// Copyright (c) 2025 - Cowboy AI, Inc.
//! Principal decoder commands

use async_trait::async_trait;
use tracing::debug;

use crate::address::Address;
use crate::client::{CommandContext, ManagementCommand};
use crate::errors::{CommandError, CommandResult};
use crate::values::Values;

use super::{remove_existing, require_elytron, ELYTRON};

/// Adds a `constant-principal-decoder`, decoding every principal to a
/// fixed name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddConstantPrincipalDecoder {
    name: String,
    constant: String,
    replace_existing: bool,
}

impl AddConstantPrincipalDecoder {
    /// Start building a decoder with the given resource name
    pub fn builder(name: impl Into<String>) -> AddConstantPrincipalDecoderBuilder {
        AddConstantPrincipalDecoderBuilder {
            name: name.into(),
            constant: None,
            replace_existing: false,
        }
    }
}

#[async_trait]
impl ManagementCommand for AddConstantPrincipalDecoder {
    async fn apply(&self, ctx: &CommandContext) -> CommandResult<()> {
        require_elytron(ctx.version)?;

        let address = Address::subsystem(ELYTRON).and("constant-principal-decoder", &self.name);
        if self.replace_existing {
            remove_existing(ctx, &address).await?;
        }

        debug!("Adding constant-principal-decoder at {}", address);
        ctx.client
            .add(&address, Values::empty().and("constant", &self.constant))
            .await?;
        Ok(())
    }
}

/// Builder for [`AddConstantPrincipalDecoder`]
#[derive(Debug, Clone)]
pub struct AddConstantPrincipalDecoderBuilder {
    name: String,
    constant: Option<String>,
    replace_existing: bool,
}

impl AddConstantPrincipalDecoderBuilder {
    /// Name every principal decodes to (required)
    pub fn constant(mut self, constant: impl Into<String>) -> Self {
        self.constant = Some(constant.into());
        self
    }

    /// Remove a same-named decoder before adding this one
    pub fn replace_existing(mut self) -> Self {
        self.replace_existing = true;
        self
    }

    /// Validate all fields and produce the command
    pub fn build(self) -> CommandResult<AddConstantPrincipalDecoder> {
        if self.name.is_empty() {
            return Err(CommandError::required("name", "constant-principal-decoder"));
        }
        let constant = self
            .constant
            .filter(|c| !c.is_empty())
            .ok_or_else(|| CommandError::required("constant", "constant-principal-decoder"))?;

        Ok(AddConstantPrincipalDecoder {
            name: self.name,
            constant,
            replace_existing: self.replace_existing,
        })
    }
}
