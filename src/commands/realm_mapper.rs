// Copyright (c) 2025 - Cowboy AI, Inc.
//! Realm mapper commands
//!
//! Realm mappers pick the security realm used to authenticate a principal,
//! either unconditionally (`constant-realm-mapper`) or by matching the
//! principal name against a regular expression.

use async_trait::async_trait;
use tracing::debug;

use crate::address::Address;
use crate::client::{CommandContext, ManagementCommand};
use crate::errors::{CommandError, CommandResult};
use crate::values::{ModelValue, Values};

use super::{remove_existing, require_elytron, ELYTRON};

/// Adds a `constant-realm-mapper`, mapping every principal to one realm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddConstantRealmMapper {
    name: String,
    realm_name: String,
    replace_existing: bool,
}

impl AddConstantRealmMapper {
    /// Start building a mapper with the given resource name
    pub fn builder(name: impl Into<String>) -> AddConstantRealmMapperBuilder {
        AddConstantRealmMapperBuilder {
            name: name.into(),
            realm_name: None,
            replace_existing: false,
        }
    }
}

#[async_trait]
impl ManagementCommand for AddConstantRealmMapper {
    async fn apply(&self, ctx: &CommandContext) -> CommandResult<()> {
        require_elytron(ctx.version)?;

        let address = Address::subsystem(ELYTRON).and("constant-realm-mapper", &self.name);
        if self.replace_existing {
            remove_existing(ctx, &address).await?;
        }

        debug!("Adding constant-realm-mapper at {}", address);
        ctx.client
            .add(&address, Values::empty().and("realm-name", &self.realm_name))
            .await?;
        Ok(())
    }
}

/// Builder for [`AddConstantRealmMapper`]
#[derive(Debug, Clone)]
pub struct AddConstantRealmMapperBuilder {
    name: String,
    realm_name: Option<String>,
    replace_existing: bool,
}

impl AddConstantRealmMapperBuilder {
    /// Realm every principal maps to (required)
    pub fn realm_name(mut self, realm_name: impl Into<String>) -> Self {
        self.realm_name = Some(realm_name.into());
        self
    }

    /// Remove a same-named mapper before adding this one
    pub fn replace_existing(mut self) -> Self {
        self.replace_existing = true;
        self
    }

    /// Validate all fields and produce the command
    pub fn build(self) -> CommandResult<AddConstantRealmMapper> {
        if self.name.is_empty() {
            return Err(CommandError::required("name", "constant-realm-mapper"));
        }
        let realm_name = self
            .realm_name
            .filter(|r| !r.is_empty())
            .ok_or_else(|| CommandError::required("realm-name", "constant-realm-mapper"))?;

        Ok(AddConstantRealmMapper {
            name: self.name,
            realm_name,
            replace_existing: self.replace_existing,
        })
    }
}

/// Adds a `simple-regex-realm-mapper`
///
/// Extracts the realm from the principal name with a single capture-group
/// pattern, optionally delegating to another mapper when the pattern does
/// not match.
///
/// # Examples
///
/// ```rust
/// use elytron_commands::commands::AddSimpleRegexRealmMapper;
///
/// let cmd = AddSimpleRegexRealmMapper::builder("r1")
///     .pattern("^a.*$")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSimpleRegexRealmMapper {
    name: String,
    pattern: String,
    delegate_realm_mapper: Option<String>,
    replace_existing: bool,
}

impl AddSimpleRegexRealmMapper {
    /// Start building a mapper with the given resource name
    pub fn builder(name: impl Into<String>) -> AddSimpleRegexRealmMapperBuilder {
        AddSimpleRegexRealmMapperBuilder {
            name: name.into(),
            pattern: None,
            delegate_realm_mapper: None,
            replace_existing: false,
        }
    }
}

#[async_trait]
impl ManagementCommand for AddSimpleRegexRealmMapper {
    async fn apply(&self, ctx: &CommandContext) -> CommandResult<()> {
        require_elytron(ctx.version)?;

        let address = Address::subsystem(ELYTRON).and("simple-regex-realm-mapper", &self.name);
        if self.replace_existing {
            remove_existing(ctx, &address).await?;
        }

        debug!("Adding simple-regex-realm-mapper at {}", address);
        ctx.client
            .add(
                &address,
                Values::empty()
                    .and("pattern", &self.pattern)
                    .and_optional("delegate-realm-mapper", self.delegate_realm_mapper.as_ref()),
            )
            .await?;
        Ok(())
    }
}

/// Builder for [`AddSimpleRegexRealmMapper`]
#[derive(Debug, Clone)]
pub struct AddSimpleRegexRealmMapperBuilder {
    name: String,
    pattern: Option<String>,
    delegate_realm_mapper: Option<String>,
    replace_existing: bool,
}

impl AddSimpleRegexRealmMapperBuilder {
    /// Pattern with the capture group that extracts the realm (required)
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Mapper consulted when the pattern does not match
    pub fn delegate_realm_mapper(mut self, delegate: impl Into<String>) -> Self {
        self.delegate_realm_mapper = Some(delegate.into());
        self
    }

    /// Remove a same-named mapper before adding this one
    pub fn replace_existing(mut self) -> Self {
        self.replace_existing = true;
        self
    }

    /// Validate all fields and produce the command
    pub fn build(self) -> CommandResult<AddSimpleRegexRealmMapper> {
        if self.name.is_empty() {
            return Err(CommandError::required("name", "simple-regex-realm-mapper"));
        }
        let pattern = self
            .pattern
            .filter(|p| !p.is_empty())
            .ok_or_else(|| CommandError::required("pattern", "simple-regex-realm-mapper"))?;

        Ok(AddSimpleRegexRealmMapper {
            name: self.name,
            pattern,
            delegate_realm_mapper: self.delegate_realm_mapper,
            replace_existing: self.replace_existing,
        })
    }
}

/// Adds a `mapped-regex-realm-mapper`
///
/// Like the simple variant, but the captured portion is looked up in an
/// explicit match → realm table instead of being used verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMappedRegexRealmMapper {
    name: String,
    pattern: String,
    realm_map: Vec<(String, String)>,
    delegate_realm_mapper: Option<String>,
    replace_existing: bool,
}

impl AddMappedRegexRealmMapper {
    /// Start building a mapper with the given resource name
    pub fn builder(name: impl Into<String>) -> AddMappedRegexRealmMapperBuilder {
        AddMappedRegexRealmMapperBuilder {
            name: name.into(),
            pattern: None,
            realm_map: Vec::new(),
            delegate_realm_mapper: None,
            replace_existing: false,
        }
    }
}

#[async_trait]
impl ManagementCommand for AddMappedRegexRealmMapper {
    async fn apply(&self, ctx: &CommandContext) -> CommandResult<()> {
        require_elytron(ctx.version)?;

        let address = Address::subsystem(ELYTRON).and("mapped-regex-realm-mapper", &self.name);
        if self.replace_existing {
            remove_existing(ctx, &address).await?;
        }

        let realm_map = ModelValue::object(
            self.realm_map
                .iter()
                .map(|(matched, realm)| (matched.clone(), ModelValue::from(realm))),
        );

        debug!("Adding mapped-regex-realm-mapper at {}", address);
        ctx.client
            .add(
                &address,
                Values::empty()
                    .and("pattern", &self.pattern)
                    .and("realm-map", realm_map)
                    .and_optional("delegate-realm-mapper", self.delegate_realm_mapper.as_ref()),
            )
            .await?;
        Ok(())
    }
}

/// Builder for [`AddMappedRegexRealmMapper`]
#[derive(Debug, Clone)]
pub struct AddMappedRegexRealmMapperBuilder {
    name: String,
    pattern: Option<String>,
    realm_map: Vec<(String, String)>,
    delegate_realm_mapper: Option<String>,
    replace_existing: bool,
}

impl AddMappedRegexRealmMapperBuilder {
    /// Pattern with the capture group that extracts the match key (required)
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Map a captured value to a realm name; entries keep insertion order
    pub fn add_realm_mapping(
        mut self,
        matched: impl Into<String>,
        realm: impl Into<String>,
    ) -> Self {
        self.realm_map.push((matched.into(), realm.into()));
        self
    }

    /// Mapper consulted when the pattern does not match
    pub fn delegate_realm_mapper(mut self, delegate: impl Into<String>) -> Self {
        self.delegate_realm_mapper = Some(delegate.into());
        self
    }

    /// Remove a same-named mapper before adding this one
    pub fn replace_existing(mut self) -> Self {
        self.replace_existing = true;
        self
    }

    /// Validate all fields and produce the command
    pub fn build(self) -> CommandResult<AddMappedRegexRealmMapper> {
        if self.name.is_empty() {
            return Err(CommandError::required("name", "mapped-regex-realm-mapper"));
        }
        let pattern = self
            .pattern
            .filter(|p| !p.is_empty())
            .ok_or_else(|| CommandError::required("pattern", "mapped-regex-realm-mapper"))?;
        if self.realm_map.is_empty() {
            return Err(CommandError::required(
                "realm-map",
                "mapped-regex-realm-mapper",
            ));
        }
        for (matched, realm) in &self.realm_map {
            if matched.is_empty() || realm.is_empty() {
                return Err(CommandError::InvalidArgument(
                    "realm-map of the mapped-regex-realm-mapper must not contain empty keys or realm names"
                        .to_string(),
                ));
            }
        }

        Ok(AddMappedRegexRealmMapper {
            name: self.name,
            pattern,
            realm_map: self.realm_map,
            delegate_realm_mapper: self.delegate_realm_mapper,
            replace_existing: self.replace_existing,
        })
    }
}
