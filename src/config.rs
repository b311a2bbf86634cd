use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{CerebroError, Result};

/// Name of the configuration file looked up inside a config directory.
pub const CONFIG_FILENAME: &str = "cerebro.json";

/// Weights a `DirectedGraph` reports when no edge supplies one.
///
/// Missing fields in a config document fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Weight returned when a node is compared against itself.
    pub default_weight: f64,
    /// Weight returned alongside `found = false` when no edge exists.
    pub absent_weight: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            default_weight: 1.0,
            absent_weight: 0.0,
        }
    }
}

impl GraphConfig {
    /// Config with the given self-comparison weight and a zero absent weight.
    pub fn with_default_weight(default_weight: f64) -> Self {
        Self {
            default_weight,
            ..Self::default()
        }
    }
}

/// Returns the path to `cerebro.json` within the given directory.
pub fn get_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

/// Builds a `CerebroError::Config` naming the failed step and the file involved.
fn config_error(step: &str, path: &Path, cause: impl std::fmt::Display) -> CerebroError {
    CerebroError::Config {
        message: format!("cannot {step} '{}': {cause}", path.display()),
    }
}

/// Loads the graph weights stored in `dir`.
///
/// A missing `cerebro.json` is not an error: the default weights are returned.
/// Fields absent from the document keep their default values.
pub fn load_config(dir: &Path) -> Result<GraphConfig> {
    let config_path = get_config_path(dir);

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(GraphConfig::default());
    }

    let contents = fs::read_to_string(&config_path)
        .map_err(|e| config_error("read graph weights from", &config_path, e))?;
    serde_json::from_str(&contents)
        .map_err(|e| config_error("decode graph weights in", &config_path, e))
}

/// Writes `config` to `dir/cerebro.json`, creating `dir` when needed.
///
/// The document goes to a `.tmp` sibling first and is then renamed into place.
pub fn save_config(dir: &Path, config: &GraphConfig) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| config_error("create config directory", dir, e))?;

    let config_path = get_config_path(dir);
    let staged = config_path.with_extension("tmp");

    let json = serde_json::to_string_pretty(config)
        .map_err(|e| config_error("encode graph weights for", &config_path, e))?;
    fs::write(&staged, json).map_err(|e| config_error("stage graph weights at", &staged, e))?;
    fs::rename(&staged, &config_path)
        .map_err(|e| config_error("move staged weights into", &config_path, e))?;

    tracing::debug!(path = %config_path.display(), "saved graph config");
    Ok(())
}
