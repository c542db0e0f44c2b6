// Copyright (c) 2025 - Cowboy AI, Inc.
//! Role decoder commands

use async_trait::async_trait;
use tracing::debug;

use crate::address::Address;
use crate::client::{CommandContext, ManagementCommand};
use crate::errors::{CommandError, CommandResult};
use crate::values::Values;

use super::{remove_existing, require_elytron, ELYTRON};

/// Adds a `simple-role-decoder`, reading roles from one identity attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSimpleRoleDecoder {
    name: String,
    attribute: String,
    replace_existing: bool,
}

impl AddSimpleRoleDecoder {
    /// Start building a decoder with the given resource name
    pub fn builder(name: impl Into<String>) -> AddSimpleRoleDecoderBuilder {
        AddSimpleRoleDecoderBuilder {
            name: name.into(),
            attribute: None,
            replace_existing: false,
        }
    }
}

#[async_trait]
impl ManagementCommand for AddSimpleRoleDecoder {
    async fn apply(&self, ctx: &CommandContext) -> CommandResult<()> {
        require_elytron(ctx.version)?;

        let address = Address::subsystem(ELYTRON).and("simple-role-decoder", &self.name);
        if self.replace_existing {
            remove_existing(ctx, &address).await?;
        }

        debug!("Adding simple-role-decoder at {}", address);
        ctx.client
            .add(&address, Values::empty().and("attribute", &self.attribute))
            .await?;
        Ok(())
    }
}

/// Builder for [`AddSimpleRoleDecoder`]
#[derive(Debug, Clone)]
pub struct AddSimpleRoleDecoderBuilder {
    name: String,
    attribute: Option<String>,
    replace_existing: bool,
}

impl AddSimpleRoleDecoderBuilder {
    /// Identity attribute whose values become roles (required)
    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    /// Remove a same-named decoder before adding this one
    pub fn replace_existing(mut self) -> Self {
        self.replace_existing = true;
        self
    }

    /// Validate all fields and produce the command
    pub fn build(self) -> CommandResult<AddSimpleRoleDecoder> {
        if self.name.is_empty() {
            return Err(CommandError::required("name", "simple-role-decoder"));
        }
        let attribute = self
            .attribute
            .filter(|a| !a.is_empty())
            .ok_or_else(|| CommandError::required("attribute", "simple-role-decoder"))?;

        Ok(AddSimpleRoleDecoder {
            name: self.name,
            attribute,
            replace_existing: self.replace_existing,
        })
    }
}
