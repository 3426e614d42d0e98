//! Credential settings for the CLI.
//!
//! Read from a small TOML file; command-line flags and `KUAIZHAN_*`
//! environment variables override whatever the file says.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Config filename looked up in the working directory when `--config` is
/// not given.
pub const DEFAULT_CONFIG_FILE: &str = "kuaizhan.toml";

/// Contents of `kuaizhan.toml`. Every field is optional; credentials may
/// arrive through flags or the environment instead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub app_key: Option<String>,
    #[serde(default)]
    pub app_secret: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&contents).map_err(|e| Error::ConfigInvalid {
            message: e.to_string(),
        })?;
        Ok(settings)
    }
}
