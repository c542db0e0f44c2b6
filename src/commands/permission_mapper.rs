// Copyright (c) 2025 - Cowboy AI, Inc.
//! Permission mapper commands
//!
//! A `constant-permission-mapper` grants the same permissions to every
//! authorized identity. Permissions are given either inline (class name
//! plus optional module/target/action) or by referencing named permission
//! sets defined elsewhere in the subsystem; the two forms are mutually
//! exclusive on one mapper.

use async_trait::async_trait;
use tracing::debug;

use crate::address::Address;
use crate::client::{CommandContext, ManagementCommand};
use crate::errors::{CommandError, CommandResult};
use crate::values::{ModelValue, Values};
use crate::version::ServerVersion;

use super::{remove_existing, require_elytron, ELYTRON};

/// One inline permission granted by a permission mapper
///
/// # Examples
///
/// ```rust
/// use elytron_commands::commands::Permission;
///
/// let permission = Permission::builder("java.io.FilePermission")
///     .target_name("/tmp/*")
///     .action("read")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permission {
    class_name: String,
    module: Option<String>,
    target_name: Option<String>,
    action: Option<String>,
}

impl Permission {
    /// Start building a permission for the given permission class
    pub fn builder(class_name: impl Into<String>) -> PermissionBuilder {
        PermissionBuilder {
            class_name: class_name.into(),
            module: None,
            target_name: None,
            action: None,
        }
    }

    /// Fully qualified class implementing the permission
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Render as the nested attribute object an `add` payload carries
    pub(crate) fn to_model_value(&self) -> ModelValue {
        let mut pairs = vec![("class-name".to_string(), ModelValue::from(&self.class_name))];
        if let Some(module) = &self.module {
            pairs.push(("module".to_string(), ModelValue::from(module)));
        }
        if let Some(target_name) = &self.target_name {
            pairs.push(("target-name".to_string(), ModelValue::from(target_name)));
        }
        if let Some(action) = &self.action {
            pairs.push(("action".to_string(), ModelValue::from(action)));
        }
        ModelValue::Object(pairs)
    }
}

/// Builder for [`Permission`]
#[derive(Debug, Clone)]
pub struct PermissionBuilder {
    class_name: String,
    module: Option<String>,
    target_name: Option<String>,
    action: Option<String>,
}

impl PermissionBuilder {
    /// Module the permission class is loaded from
    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Target the permission applies to
    pub fn target_name(mut self, target_name: impl Into<String>) -> Self {
        self.target_name = Some(target_name.into());
        self
    }

    /// Action the permission grants
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Validate and produce the permission
    pub fn build(self) -> CommandResult<Permission> {
        if self.class_name.is_empty() {
            return Err(CommandError::required("class-name", "permission"));
        }

        Ok(Permission {
            class_name: self.class_name,
            module: self.module,
            target_name: self.target_name,
            action: self.action,
        })
    }
}

/// Adds a `constant-permission-mapper`
///
/// Carries either inline `permissions` or named `permission-sets`, never
/// both. Permission sets were introduced with management model 7.0.0
/// (WildFly 13) and are version gated at apply time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddConstantPermissionMapper {
    name: String,
    permissions: Vec<Permission>,
    permission_sets: Vec<String>,
    replace_existing: bool,
}

impl AddConstantPermissionMapper {
    /// Start building a mapper with the given resource name
    pub fn builder(name: impl Into<String>) -> AddConstantPermissionMapperBuilder {
        AddConstantPermissionMapperBuilder {
            name: name.into(),
            permissions: Vec::new(),
            permission_sets: Vec::new(),
            replace_existing: false,
        }
    }
}

#[async_trait]
impl ManagementCommand for AddConstantPermissionMapper {
    async fn apply(&self, ctx: &CommandContext) -> CommandResult<()> {
        require_elytron(ctx.version)?;
        if !self.permission_sets.is_empty()
            && ctx.version.less_than(ServerVersion::VERSION_7_0_0)
        {
            return Err(CommandError::UnsupportedVersion {
                feature: "permission-set references".to_string(),
                required: ServerVersion::VERSION_7_0_0,
                actual: ctx.version,
            });
        }

        let address = Address::subsystem(ELYTRON).and("constant-permission-mapper", &self.name);
        if self.replace_existing {
            remove_existing(ctx, &address).await?;
        }

        let permissions = match self.permissions.is_empty() {
            true => None,
            false => Some(
                self.permissions
                    .iter()
                    .map(Permission::to_model_value)
                    .collect(),
            ),
        };
        let permission_sets = match self.permission_sets.is_empty() {
            true => None,
            false => Some(
                self.permission_sets
                    .iter()
                    .map(|set| {
                        ModelValue::object(vec![("permission-set".to_string(), set.into())])
                    })
                    .collect(),
            ),
        };

        debug!("Adding constant-permission-mapper at {}", address);
        ctx.client
            .add(
                &address,
                Values::empty()
                    .and_list_optional("permissions", permissions)
                    .and_list_optional("permission-sets", permission_sets),
            )
            .await?;
        Ok(())
    }
}

/// Builder for [`AddConstantPermissionMapper`]
#[derive(Debug, Clone)]
pub struct AddConstantPermissionMapperBuilder {
    name: String,
    permissions: Vec<Permission>,
    permission_sets: Vec<String>,
    replace_existing: bool,
}

impl AddConstantPermissionMapperBuilder {
    /// Add inline permissions; exclusive with [`add_permission_sets`](Self::add_permission_sets)
    pub fn add_permissions(mut self, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.permissions.extend(permissions);
        self
    }

    /// Add named permission-set references; exclusive with
    /// [`add_permissions`](Self::add_permissions)
    pub fn add_permission_sets<I, S>(mut self, permission_sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permission_sets
            .extend(permission_sets.into_iter().map(Into::into));
        self
    }

    /// Remove a same-named mapper before adding this one
    pub fn replace_existing(mut self) -> Self {
        self.replace_existing = true;
        self
    }

    /// Validate all fields and produce the command
    pub fn build(self) -> CommandResult<AddConstantPermissionMapper> {
        if self.name.is_empty() {
            return Err(CommandError::required("name", "constant-permission-mapper"));
        }
        if !self.permissions.is_empty() && !self.permission_sets.is_empty() {
            return Err(CommandError::InvalidArgument(
                "only one of permissions and permission-sets can be used on a constant-permission-mapper"
                    .to_string(),
            ));
        }
        if self.permission_sets.iter().any(String::is_empty) {
            return Err(CommandError::InvalidArgument(
                "permission-sets of the constant-permission-mapper must not contain empty names"
                    .to_string(),
            ));
        }

        Ok(AddConstantPermissionMapper {
            name: self.name,
            permissions: self.permissions,
            permission_sets: self.permission_sets,
            replace_existing: self.replace_existing,
        })
    }
}
