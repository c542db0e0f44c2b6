// Copyright (c) 2025 - Cowboy AI, Inc.

//! Management tree addresses
//!
//! Every node in the server's configuration tree is identified by a path of
//! `key=value` segments.
//!
//! # Address Pattern
//!
//! Resources configured by this crate live under a subsystem:
//!
//! ```text
//! /subsystem={subsystem}/{resource-type}={resource-name}
//! ```
//!
//! # Examples
//!
//! ```rust
//! use elytron_commands::Address;
//!
//! let addr = Address::subsystem("elytron").and("simple-regex-realm-mapper", "r1");
//! assert_eq!(addr.to_string(), "/subsystem=elytron/simple-regex-realm-mapper=r1");
//! ```

use std::fmt;

/// Path to a node in the server's management tree
///
/// Purely a derived value; commands rebuild it on every `apply` and never
/// store it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    segments: Vec<(String, String)>,
}

impl Address {
    /// Address of the management root
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Address of a subsystem node: `/subsystem={name}`
    pub fn subsystem(name: impl Into<String>) -> Self {
        Self::root().and("subsystem", name)
    }

    /// Append a `key=value` segment
    pub fn and(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.segments.push((key.into(), value.into()));
        self
    }

    /// Path segments in order
    pub fn segments(&self) -> &[(String, String)] {
        &self.segments
    }

    /// Value of the last segment, the resource name for typed resources
    pub fn last_value(&self) -> Option<&str> {
        self.segments.last().map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for (key, value) in &self.segments {
            write!(f, "/{}={}", key, value)?;
        }
        Ok(())
    }
}
