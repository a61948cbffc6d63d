// Person seed dataset loading
//
// Loads the initial person collection from a JSON file or uses the dataset
// embedded in the binary.

use anyhow::{Context, Result};
use pessoas_core::Person;
use std::path::Path;

/// Built-in seed dataset (embedded in binary)
pub const DEFAULT_SEED: &str = include_str!("../../data/pessoa.json");

/// Load the seed collection from file or use the built-in dataset
///
/// If `seed_path` is provided it must exist; a missing file is an error so a
/// typo in the environment does not silently start with the wrong data.
pub fn load_seed(seed_path: Option<&Path>) -> Result<Vec<Person>> {
    let seed_str = match seed_path {
        Some(path) => {
            tracing::info!("Loading person seed from: {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read seed file: {}", path.display()))?
        }
        None => {
            tracing::info!("No seed path specified, using built-in dataset");
            DEFAULT_SEED.to_string()
        }
    };

    let persons = parse_seed(&seed_str)?;
    tracing::info!("Loaded {} persons from seed", persons.len());
    Ok(persons)
}

/// Parse a seed collection from a JSON array
pub fn parse_seed(seed_str: &str) -> Result<Vec<Person>> {
    serde_json::from_str(seed_str).context("Failed to parse person seed JSON")
}
