//! Optional per-user defaults.
//!
//! # Location
//!
//! ```text
//! ~/.ngscaffold/
//!   config.yaml
//! ```
//!
//! Every field is optional; a missing file means built-in defaults. The file
//! is read, never written.
//!
//! # API pattern
//!
//! - `load_at(home: &Path)` — explicit home; used in tests with `TempDir`
//! - `load()` — derives home from `dirs::home_dir()`, delegates to `load_at`

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::command::DEFAULT_ANGULAR_CLI;
use crate::error::{io_err, ScaffoldError};
use crate::types::{RegistryConfig, DEFAULT_NPM_CONFIG};

/// Pre-filled answers for the registry questions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistryDefaults {
    pub url: String,
    pub save_exact: bool,
    pub audit: bool,
    pub scope: String,
}

impl Default for RegistryDefaults {
    fn default() -> Self {
        Self {
            url: DEFAULT_NPM_CONFIG.registry.to_string(),
            save_exact: DEFAULT_NPM_CONFIG.save_exact,
            audit: DEFAULT_NPM_CONFIG.audit,
            scope: String::new(),
        }
    }
}

impl From<&RegistryDefaults> for RegistryConfig {
    fn from(d: &RegistryDefaults) -> Self {
        Self {
            url: d.url.clone(),
            save_exact: d.save_exact,
            audit: d.audit,
            scope: Some(d.scope.clone()).filter(|s| !s.is_empty()),
        }
    }
}

/// Settings for the generator invocation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorDefaults {
    /// Tag or version for `@angular/cli@<pin>`.
    pub angular_cli: String,
}

impl Default for GeneratorDefaults {
    fn default() -> Self {
        Self {
            angular_cli: DEFAULT_ANGULAR_CLI.to_string(),
        }
    }
}

/// Root of `config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub registry: RegistryDefaults,
    pub generator: GeneratorDefaults,
}

/// `<home>/.ngscaffold/config.yaml` — pure, no I/O.
pub fn config_path_at(home: &Path) -> PathBuf {
    home.join(".ngscaffold").join("config.yaml")
}

/// Load defaults from `<home>/.ngscaffold/config.yaml`.
///
/// Returns built-in defaults when the file is absent and
/// `ScaffoldError::ConfigParse` (with path) when it is malformed.
pub fn load_at(home: &Path) -> Result<ScaffoldConfig, ScaffoldError> {
    let path = config_path_at(home);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no defaults file, using built-ins");
        return Ok(ScaffoldConfig::default());
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    // An empty file deserialises to `null`, which serde_yaml rejects for a struct.
    if contents.trim().is_empty() {
        return Ok(ScaffoldConfig::default());
    }
    let config = serde_yaml::from_str(&contents)
        .map_err(|source| ScaffoldError::ConfigParse { path: path.clone(), source })?;
    tracing::debug!(path = %path.display(), "loaded defaults file");
    Ok(config)
}

/// `load_at` convenience wrapper.
pub fn load() -> Result<ScaffoldConfig, ScaffoldError> {
    load_at(&home()?)
}

fn home() -> Result<PathBuf, ScaffoldError> {
    dirs::home_dir().ok_or(ScaffoldError::HomeNotFound)
}
