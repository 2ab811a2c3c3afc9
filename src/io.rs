//! File boundary around the codec.
//!
//! Thin wrappers only: a full read followed by one decode, or one encode
//! followed by a full write. There is no streaming or partial-write
//! recovery; the file is written only after the whole document has been
//! encoded successfully.

use std::fs;
use std::path::Path;

use crate::codec;
use crate::error::ScenarioError;
use crate::model::Scenario;

/// Read and decode a scenario file.
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, ScenarioError> {
    let path = path.as_ref();
    log::debug!("loading scenario from {}", path.display());
    let text = fs::read_to_string(path)?;
    codec::decode_str(&text)
}

/// Encode and write a scenario file (pretty, 4-space indent).
pub fn save_scenario(path: impl AsRef<Path>, scenario: &Scenario) -> Result<(), ScenarioError> {
    let path = path.as_ref();
    let text = codec::encode_pretty(scenario);
    log::debug!("saving scenario to {} ({} bytes)", path.display(), text.len());
    fs::write(path, text)?;
    Ok(())
}
