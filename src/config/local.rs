//! Local (untracked) debug configuration
//!
//! Loaded from a machine-specific file next to the shared settings, never
//! meant to be committed. Supplies the xdebug toggles.

use serde::{Deserialize, Serialize};

/// Root of the local configuration file; an absent file is an empty config
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LocalConfig {
    pub xdebug: Option<XdebugConfig>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct XdebugConfig {
    #[serde(default)]
    pub fpm: Toggle,
    #[serde(default)]
    pub cli: Toggle,
    #[serde(default)]
    pub profiler: ProfilerConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Toggle {
    #[serde(default)]
    pub enabled: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ProfilerConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub logs: ProfilerLogs,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ProfilerLogs {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub filename: String,
}
