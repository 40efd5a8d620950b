//! Error types for agent setup.

use std::fmt;

use crate::config::UnitRole;

/// Errors raised while resolving the game-start configuration.
///
/// Configuration resolution is the only fatal failure in the agent: every
/// later phase depends on the resolved unit table, so a malformed payload
/// halts initialization instead of producing a crippled strategy.
#[derive(Debug)]
pub enum ConfigError {
    /// The unit metadata list has fewer entries than the role table needs.
    MissingUnitEntry {
        /// Positional index that was expected in the payload.
        index: usize,
        /// Role that should have resolved from that index.
        role: UnitRole,
    },
    /// A unit entry carried an empty engine identifier.
    EmptyIdentifier {
        /// Role whose identifier was empty.
        role: UnitRole,
    },
    /// A unit entry carried a non-positive cost.
    ///
    /// A zero or negative cost would let a spend loop run forever without
    /// draining its pool, so it is rejected at resolution time.
    InvalidCost {
        /// Role whose cost was invalid.
        role: UnitRole,
        /// The offending cost value.
        cost: f64,
    },
    /// The configuration payload could not be read.
    Io(std::io::Error),
    /// The configuration payload was not valid JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingUnitEntry { index, role } => {
                write!(f, "missing unit entry at index {index} (expected {role})")
            }
            Self::EmptyIdentifier { role } => {
                write!(f, "empty engine identifier for {role}")
            }
            Self::InvalidCost { role, cost } => {
                write!(f, "invalid cost {cost} for {role} (must be positive)")
            }
            Self::Io(e) => write!(f, "failed to read configuration: {e}"),
            Self::Parse(e) => write!(f, "failed to parse configuration: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}
