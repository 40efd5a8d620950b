//! Validate command implementation.

use std::path::PathBuf;

use parapet::{GameConfig, UnitRole, UnitTypeTable};

use super::CliError;

/// Execute the validate command.
///
/// Loads a configuration file, resolves the unit table exactly the way game
/// start would, and prints the result.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the table cannot be
/// resolved.
pub(crate) fn execute(config: PathBuf) -> Result<(), CliError> {
    let game_config = GameConfig::from_path(&config)
        .map_err(|e| CliError::new(format!("Failed to load {}: {e}", config.display())))?;

    let table = UnitTypeTable::resolve(&game_config)
        .map_err(|e| CliError::new(format!("Invalid configuration: {e}")))?;

    println!("Configuration OK: {}", config.display());
    println!();
    println!("  {:<10} {:<6} {}", "role", "id", "cost");
    for role in UnitRole::ALL {
        println!("  {:<10} {:<6} {}", role.name(), table.id(role), table.cost(role));
    }

    Ok(())
}
