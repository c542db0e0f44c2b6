// Copyright (c) 2025 - Cowboy AI, Inc.
//! Role mapper commands

use async_trait::async_trait;
use std::fmt;
use tracing::debug;

use crate::address::Address;
use crate::client::{CommandContext, ManagementCommand};
use crate::errors::{CommandError, CommandResult};
use crate::values::{ModelValue, Values};

use super::{remove_existing, require_elytron, ELYTRON};

/// Adds a `constant-role-mapper`, assigning a fixed role set to every
/// authorization identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddConstantRoleMapper {
    name: String,
    roles: Vec<String>,
    replace_existing: bool,
}

impl AddConstantRoleMapper {
    /// Start building a mapper with the given resource name
    pub fn builder(name: impl Into<String>) -> AddConstantRoleMapperBuilder {
        AddConstantRoleMapperBuilder {
            name: name.into(),
            roles: Vec::new(),
            replace_existing: false,
        }
    }
}

#[async_trait]
impl ManagementCommand for AddConstantRoleMapper {
    async fn apply(&self, ctx: &CommandContext) -> CommandResult<()> {
        require_elytron(ctx.version)?;

        let address = Address::subsystem(ELYTRON).and("constant-role-mapper", &self.name);
        if self.replace_existing {
            remove_existing(ctx, &address).await?;
        }

        let roles = self.roles.iter().map(ModelValue::from).collect::<Vec<_>>();

        debug!("Adding constant-role-mapper at {}", address);
        ctx.client
            .add(&address, Values::empty().and_list("roles", roles))
            .await?;
        Ok(())
    }
}

/// Builder for [`AddConstantRoleMapper`]
#[derive(Debug, Clone)]
pub struct AddConstantRoleMapperBuilder {
    name: String,
    roles: Vec<String>,
    replace_existing: bool,
}

impl AddConstantRoleMapperBuilder {
    /// Add roles to the constant set; at least one is required
    pub fn add_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles.extend(roles.into_iter().map(Into::into));
        self
    }

    /// Remove a same-named mapper before adding this one
    pub fn replace_existing(mut self) -> Self {
        self.replace_existing = true;
        self
    }

    /// Validate all fields and produce the command
    pub fn build(self) -> CommandResult<AddConstantRoleMapper> {
        if self.name.is_empty() {
            return Err(CommandError::required("name", "constant-role-mapper"));
        }
        if self.roles.is_empty() {
            return Err(CommandError::required("roles", "constant-role-mapper"));
        }
        if self.roles.iter().any(String::is_empty) {
            return Err(CommandError::InvalidArgument(
                "roles of the constant-role-mapper must not contain empty names".to_string(),
            ));
        }

        Ok(AddConstantRoleMapper {
            name: self.name,
            roles: self.roles,
            replace_existing: self.replace_existing,
        })
    }
}

/// Set operation a `logical-role-mapper` combines its delegates with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperation {
    /// Intersection of left and right
    And,
    /// Roles in left that are not in right
    Minus,
    /// Union of left and right
    Or,
    /// Roles in exactly one of left and right
    Xor,
}

impl fmt::Display for LogicalOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperation::And => write!(f, "and"),
            LogicalOperation::Minus => write!(f, "minus"),
            LogicalOperation::Or => write!(f, "or"),
            LogicalOperation::Xor => write!(f, "xor"),
        }
    }
}

/// Adds a `logical-role-mapper`, combining two other role mappers with a
/// set operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLogicalRoleMapper {
    name: String,
    logical_operation: LogicalOperation,
    left: Option<String>,
    right: Option<String>,
    replace_existing: bool,
}

impl AddLogicalRoleMapper {
    /// Start building a mapper with the given resource name
    pub fn builder(name: impl Into<String>) -> AddLogicalRoleMapperBuilder {
        AddLogicalRoleMapperBuilder {
            name: name.into(),
            logical_operation: None,
            left: None,
            right: None,
            replace_existing: false,
        }
    }
}

#[async_trait]
impl ManagementCommand for AddLogicalRoleMapper {
    async fn apply(&self, ctx: &CommandContext) -> CommandResult<()> {
        require_elytron(ctx.version)?;

        let address = Address::subsystem(ELYTRON).and("logical-role-mapper", &self.name);
        if self.replace_existing {
            remove_existing(ctx, &address).await?;
        }

        debug!("Adding logical-role-mapper at {}", address);
        ctx.client
            .add(
                &address,
                Values::empty()
                    .and("logical-operation", self.logical_operation.to_string())
                    .and_optional("left", self.left.as_ref())
                    .and_optional("right", self.right.as_ref()),
            )
            .await?;
        Ok(())
    }
}

/// Builder for [`AddLogicalRoleMapper`]
#[derive(Debug, Clone)]
pub struct AddLogicalRoleMapperBuilder {
    name: String,
    logical_operation: Option<LogicalOperation>,
    left: Option<String>,
    right: Option<String>,
    replace_existing: bool,
}

impl AddLogicalRoleMapperBuilder {
    /// Set operation applied to the two delegates (required)
    pub fn logical_operation(mut self, operation: LogicalOperation) -> Self {
        self.logical_operation = Some(operation);
        self
    }

    /// Role mapper on the left of the operation; identity mapping if unset
    pub fn left(mut self, left: impl Into<String>) -> Self {
        self.left = Some(left.into());
        self
    }

    /// Role mapper on the right of the operation; identity mapping if unset
    pub fn right(mut self, right: impl Into<String>) -> Self {
        self.right = Some(right.into());
        self
    }

    /// Remove a same-named mapper before adding this one
    pub fn replace_existing(mut self) -> Self {
        self.replace_existing = true;
        self
    }

    /// Validate all fields and produce the command
    pub fn build(self) -> CommandResult<AddLogicalRoleMapper> {
        if self.name.is_empty() {
            return Err(CommandError::required("name", "logical-role-mapper"));
        }
        let logical_operation = self.logical_operation.ok_or_else(|| {
            CommandError::required("logical-operation", "logical-role-mapper")
        })?;

        Ok(AddLogicalRoleMapper {
            name: self.name,
            logical_operation,
            left: self.left,
            right: self.right,
            replace_existing: self.replace_existing,
        })
    }
}
