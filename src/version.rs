// Copyright (c) 2025 - Cowboy AI, Inc.
//! Management Model Version Markers
//!
//! The server negotiates a management model version on connect; features
//! introduced in later releases are gated on it. Versions follow the
//! `major.minor.micro` scheme of the management model, not the product
//! release numbering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Management model version of a target server
///
/// Ordered by `(major, minor, micro)`. Named constants mark the model
/// versions shipped with specific server releases, so gates read as
/// `ctx.version < ServerVersion::VERSION_5_0_0` rather than raw triples.
///
/// # Examples
///
/// ```rust
/// use elytron_commands::ServerVersion;
///
/// assert!(ServerVersion::VERSION_4_0_0 < ServerVersion::VERSION_5_0_0);
/// assert!(ServerVersion::VERSION_7_0_0.since(ServerVersion::VERSION_5_0_0));
/// assert_eq!(ServerVersion::VERSION_5_0_0.to_string(), "5.0.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ServerVersion {
    /// Major model version
    pub major: u16,
    /// Minor model version
    pub minor: u16,
    /// Micro model version
    pub micro: u16,
}

impl ServerVersion {
    /// Management model 4.0.0 (WildFly 10)
    pub const VERSION_4_0_0: ServerVersion = ServerVersion::new(4, 0, 0);
    /// Management model 4.1.0 (WildFly 10.1)
    pub const VERSION_4_1_0: ServerVersion = ServerVersion::new(4, 1, 0);
    /// Management model 5.0.0 (WildFly 11); first release with the elytron subsystem
    pub const VERSION_5_0_0: ServerVersion = ServerVersion::new(5, 0, 0);
    /// Management model 6.0.0 (WildFly 12)
    pub const VERSION_6_0_0: ServerVersion = ServerVersion::new(6, 0, 0);
    /// Management model 7.0.0 (WildFly 13)
    pub const VERSION_7_0_0: ServerVersion = ServerVersion::new(7, 0, 0);
    /// Management model 8.0.0 (WildFly 14)
    pub const VERSION_8_0_0: ServerVersion = ServerVersion::new(8, 0, 0);
    /// Management model 10.0.0 (WildFly 16)
    pub const VERSION_10_0_0: ServerVersion = ServerVersion::new(10, 0, 0);

    /// Create a version from its `major.minor.micro` components
    pub const fn new(major: u16, minor: u16, micro: u16) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// True when this version is at or above `marker` (inclusive)
    pub fn since(&self, marker: ServerVersion) -> bool {
        *self >= marker
    }

    /// True when this version predates `marker`
    pub fn less_than(&self, marker: ServerVersion) -> bool {
        *self < marker
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}
