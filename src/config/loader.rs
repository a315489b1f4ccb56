//! Configuration file loading

use crate::config::local::LocalConfig;
use crate::config::schema::Settings;
use crate::Result;
use anyhow::anyhow;
use std::fs::File;
use std::path::Path;

/// Default settings file name
pub const SETTINGS_FILE: &str = "boxplan.yaml";

/// Default local (untracked) configuration file name
pub const LOCAL_FILE: &str = "boxplan.local.yaml";

/// Load the shared settings tree
pub fn load_settings(path: &Path) -> Result<Settings> {
    let f = File::open(path)
        .map_err(|e| anyhow!("cannot open settings file {}: {e}", path.display()))?;
    let settings: Settings = serde_yaml::from_reader(f)
        .map_err(|e| anyhow!("malformed settings file {}: {e}", path.display()))?;
    Ok(settings)
}

/// Load the local configuration; a missing file yields an empty config
pub fn load_local_config(path: &Path) -> Result<LocalConfig> {
    if !path.exists() {
        return Ok(LocalConfig::default());
    }
    let f = File::open(path)
        .map_err(|e| anyhow!("cannot open local config {}: {e}", path.display()))?;
    // An empty file deserializes to null, not to an empty mapping
    let local: Option<LocalConfig> = serde_yaml::from_reader(f)
        .map_err(|e| anyhow!("malformed local config {}: {e}", path.display()))?;
    Ok(local.unwrap_or_default())
}
