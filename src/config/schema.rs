//! Settings schema definitions
//!
//! The raw settings tree as it comes out of the YAML loader. Every field is
//! optional or defaulted; `normalize` turns this into the non-optional form
//! the planners read.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Root settings tree (shared configuration file)
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Settings {
    pub provider: Option<String>,
    #[serde(rename = "box")]
    pub box_image: Option<String>,
    pub version: Option<String>,
    pub hostname: Option<String>,
    /// VM name shown by the virtualbox provider
    pub name: Option<String>,
    pub ip: Option<String>,
    pub memory: Option<u32>,
    pub cpus: Option<u32>,
    #[serde(default)]
    pub networks: Vec<NetworkSpec>,
    pub ports: Option<Vec<PortMapping>>,
    /// Public key to append to the guest's authorized keys
    pub authorize: Option<PathBuf>,
    #[serde(default)]
    pub keys: Vec<PathBuf>,
    #[serde(default)]
    pub folders: Vec<FolderSpec>,
    #[serde(default)]
    pub sites: Vec<SiteSpec>,
    #[serde(default)]
    pub databases: Vec<String>,
    #[serde(default)]
    pub variables: Vec<EnvVar>,
    #[serde(default)]
    pub blackfire: Vec<BlackfireCredentials>,
}

/// Additional network declaration
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NetworkSpec {
    #[serde(rename = "type")]
    pub kind: String,
    pub ip: String,
    pub bridge: Option<String>,
}

/// Port forward declaration; `to`/`send` are legacy spellings of
/// `guest`/`host`
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct PortMapping {
    pub guest: Option<u16>,
    pub host: Option<u16>,
    pub to: Option<u16>,
    pub send: Option<u16>,
    pub protocol: Option<String>,
}

/// Shared folder declaration
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FolderSpec {
    pub map: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub options: BTreeMap<String, serde_yaml::Value>,
    pub mount_options: Option<Vec<String>>,
    pub bindfs: Option<BindfsSpec>,
}

/// Ownership metadata for the bindfs rebind of an nfs folder
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BindfsSpec {
    pub owner: String,
    pub group: String,
    pub permissions: String,
}

/// Website declaration
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SiteSpec {
    pub map: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub hhvm: Option<bool>,
    pub port: Option<u16>,
    pub ssl: Option<u16>,
    pub schedule: Option<bool>,
}

/// Server environment variable
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EnvVar {
    pub key: String,
    pub value: String,
}

/// Blackfire.io profiling credentials
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlackfireCredentials {
    pub id: String,
    pub token: String,
    #[serde(rename = "client-id")]
    pub client_id: String,
    #[serde(rename = "client-token")]
    pub client_token: String,
}
