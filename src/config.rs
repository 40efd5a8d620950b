//! Game-start configuration and unit role resolution.
//!
//! The engine hands the agent one configuration payload before the first
//! turn. The payload lists unit metadata in a fixed positional order; the
//! agent resolves it into a [`UnitTypeTable`] exactly once and treats the
//! table as read-only for the rest of the game. The table is an explicit
//! value passed by reference wherever it is needed, never process-global
//! state, so tests can run multiple configurations side by side.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Semantic unit categories known to the strategy.
///
/// The discriminant order matches the positional order of the engine
/// configuration payload: index 0 is the wall, index 5 the disruptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitRole {
    /// Cheap stationary blocker.
    Wall,
    /// Stationary resource generator.
    Generator,
    /// Stationary static defense.
    Turret,
    /// Fast, fragile mobile attacker.
    Scout,
    /// Slow area-damage mobile attacker.
    Bomber,
    /// Mobile unit that disrupts enemy attackers.
    Disruptor,
}

impl UnitRole {
    /// All roles in the positional order used by the engine payload.
    pub const ALL: [UnitRole; 6] = [
        UnitRole::Wall,
        UnitRole::Generator,
        UnitRole::Turret,
        UnitRole::Scout,
        UnitRole::Bomber,
        UnitRole::Disruptor,
    ];

    /// Positional index of this role in the engine payload.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether units of this role stay where they are placed.
    ///
    /// Stationary units occupy their tile exclusively; mobile units may
    /// stack on a shared deployment tile.
    #[must_use]
    pub const fn is_stationary(self) -> bool {
        matches!(self, UnitRole::Wall | UnitRole::Generator | UnitRole::Turret)
    }

    /// Human-readable role name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            UnitRole::Wall => "wall",
            UnitRole::Generator => "generator",
            UnitRole::Turret => "turret",
            UnitRole::Scout => "scout",
            UnitRole::Bomber => "bomber",
            UnitRole::Disruptor => "disruptor",
        }
    }
}

impl std::fmt::Display for UnitRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Metadata for one unit type in the engine configuration payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitInfo {
    /// Engine identifier used on the wire for this unit type.
    pub shorthand: String,
    /// Resource cost to place one unit.
    pub cost: f64,
}

/// The game-start configuration payload provided by the engine.
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    /// Unit metadata in fixed positional order (index = role).
    #[serde(rename = "unitInformation")]
    pub unit_information: Vec<UnitInfo>,
}

impl GameConfig {
    /// Parse a configuration payload from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not valid JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration payload from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Built-in configuration used when the engine supplies none.
    ///
    /// Identifiers and costs match the standard ruleset.
    #[must_use]
    pub fn builtin() -> Self {
        let units = [
            ("FF", 1.0),
            ("EF", 4.0),
            ("DF", 3.0),
            ("PI", 1.0),
            ("EI", 3.0),
            ("SI", 1.0),
        ];
        Self {
            unit_information: units
                .iter()
                .map(|&(shorthand, cost)| UnitInfo {
                    shorthand: shorthand.to_string(),
                    cost,
                })
                .collect(),
        }
    }
}

/// One resolved unit entry: engine identifier plus cost.
#[derive(Debug, Clone)]
struct ResolvedUnit {
    shorthand: String,
    cost: f64,
}

/// Role-to-identifier table resolved once at game start.
///
/// Immutable after resolution. All role lookups during the game go through
/// this table; there is no fallback, which is why resolution failure is
/// fatal (see [`ConfigError`]).
#[derive(Debug, Clone)]
pub struct UnitTypeTable {
    entries: [ResolvedUnit; 6],
}

impl UnitTypeTable {
    /// Resolve the table from a configuration payload by positional lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if any role's entry is missing, has an empty
    /// identifier, or has a non-positive cost.
    pub fn resolve(config: &GameConfig) -> Result<Self, ConfigError> {
        let resolve_one = |role: UnitRole| -> Result<ResolvedUnit, ConfigError> {
            let info = config.unit_information.get(role.index()).ok_or(
                ConfigError::MissingUnitEntry {
                    index: role.index(),
                    role,
                },
            )?;
            if info.shorthand.is_empty() {
                return Err(ConfigError::EmptyIdentifier { role });
            }
            if info.cost <= 0.0 {
                return Err(ConfigError::InvalidCost {
                    role,
                    cost: info.cost,
                });
            }
            Ok(ResolvedUnit {
                shorthand: info.shorthand.clone(),
                cost: info.cost,
            })
        };

        Ok(Self {
            entries: [
                resolve_one(UnitRole::Wall)?,
                resolve_one(UnitRole::Generator)?,
                resolve_one(UnitRole::Turret)?,
                resolve_one(UnitRole::Scout)?,
                resolve_one(UnitRole::Bomber)?,
                resolve_one(UnitRole::Disruptor)?,
            ],
        })
    }

    /// Engine identifier for a role.
    #[must_use]
    pub fn id(&self, role: UnitRole) -> &str {
        &self.entries[role.index()].shorthand
    }

    /// Resource cost to place one unit of a role.
    #[must_use]
    pub fn cost(&self, role: UnitRole) -> f64 {
        self.entries[role.index()].cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_resolves() {
        let table = UnitTypeTable::resolve(&GameConfig::builtin()).unwrap();
        assert_eq!(table.id(UnitRole::Wall), "FF");
        assert_eq!(table.id(UnitRole::Disruptor), "SI");
        assert!(table.cost(UnitRole::Turret) > 0.0);
    }

    #[test]
    fn test_positional_order() {
        let table = UnitTypeTable::resolve(&GameConfig::builtin()).unwrap();
        // Index 2 is the turret, index 4 the bomber.
        assert_eq!(table.id(UnitRole::Turret), "DF");
        assert_eq!(table.id(UnitRole::Bomber), "EI");
    }

    #[test]
    fn test_missing_entry_is_fatal() {
        let mut config = GameConfig::builtin();
        config.unit_information.truncate(4);

        let err = UnitTypeTable::resolve(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingUnitEntry {
                index: 4,
                role: UnitRole::Bomber
            }
        ));
    }

    #[test]
    fn test_empty_identifier_is_fatal() {
        let mut config = GameConfig::builtin();
        config.unit_information[0].shorthand.clear();

        let err = UnitTypeTable::resolve(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EmptyIdentifier {
                role: UnitRole::Wall
            }
        ));
    }

    #[test]
    fn test_nonpositive_cost_is_fatal() {
        let mut config = GameConfig::builtin();
        config.unit_information[5].cost = 0.0;

        let err = UnitTypeTable::resolve(&config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidCost {
                role: UnitRole::Disruptor,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_engine_payload() {
        let json = r#"{
            "unitInformation": [
                {"shorthand": "FF", "cost": 1.0},
                {"shorthand": "EF", "cost": 4.0},
                {"shorthand": "DF", "cost": 3.0},
                {"shorthand": "PI", "cost": 1.0},
                {"shorthand": "EI", "cost": 3.0},
                {"shorthand": "SI", "cost": 1.0}
            ]
        }"#;

        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.unit_information.len(), 6);

        let table = UnitTypeTable::resolve(&config).unwrap();
        assert_eq!(table.id(UnitRole::Generator), "EF");
    }

    #[test]
    fn test_malformed_json_is_fatal() {
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
