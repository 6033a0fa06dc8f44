use std::{fs, path::Path};

use crate::SolverConfig;

use super::ConsoleError;

/// Loads a JSON solver configuration. Missing fields take their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<SolverConfig, ConsoleError> {
    let contents = fs::read_to_string(path.as_ref())
        .map_err(|err| ConsoleError::InvalidPath(err, path.as_ref().display().to_string()))?;
    let config: SolverConfig =
        serde_json::from_str(&contents).map_err(ConsoleError::ParseConfigJsonError)?;
    log::debug!("loaded solver configuration {config:?}");
    Ok(config)
}
