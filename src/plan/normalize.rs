//! Settings normalizer
//!
//! One-time pass that applies every default and back-compat coercion. The
//! planners only ever see the normalized form; none of them re-derives a
//! default on its own.

use crate::config::schema::{BindfsSpec, BlackfireCredentials, EnvVar, NetworkSpec, Settings};
use crate::plan::directive::{FolderOptions, Provider};
use crate::Result;
use anyhow::anyhow;
use std::path::PathBuf;

pub const DEFAULT_BOX: &str = "laravel/homestead";
pub const DEFAULT_BOX_VERSION: &str = ">= 0";
pub const DEFAULT_HOSTNAME: &str = "homestead";
pub const DEFAULT_VM_NAME: &str = "homestead-7";
pub const DEFAULT_IP: &str = "192.168.10.22";
pub const DEFAULT_MEMORY: u32 = 2048;
pub const DEFAULT_NFS_MOUNT_OPTIONS: &[&str] = &["actimeo=1"];

/// Settings with every default applied; what the planner stages read
#[derive(Debug, Clone)]
pub struct NormalizedSettings {
    pub provider: Provider,
    pub box_image: String,
    pub box_version: String,
    pub hostname: String,
    pub vm_name: String,
    pub ip: String,
    pub memory: u32,
    pub cpus: u32,
    pub networks: Vec<NetworkSpec>,
    pub ports: Vec<PortForward>,
    pub authorize: Option<PathBuf>,
    pub keys: Vec<PathBuf>,
    pub folders: Vec<NormalizedFolder>,
    pub sites: Vec<NormalizedSite>,
    pub databases: Vec<String>,
    pub variables: Vec<EnvVar>,
    pub blackfire: Option<BlackfireCredentials>,
}

/// A fully-resolved user port forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortForward {
    pub guest: u16,
    pub host: u16,
    pub protocol: String,
}

#[derive(Debug, Clone)]
pub struct NormalizedFolder {
    pub map: String,
    pub to: String,
    pub kind: Option<String>,
    pub options: FolderOptions,
    pub bindfs: Option<BindfsSpec>,
}

#[derive(Debug, Clone)]
pub struct NormalizedSite {
    pub map: String,
    pub to: String,
    /// Resolved serve type (never the legacy "symfony" alias)
    pub kind: String,
    pub port: u16,
    pub ssl: u16,
    pub schedule: Option<bool>,
}

/// Apply all defaults and coercions to a raw settings tree
pub fn normalize(settings: Settings) -> Result<NormalizedSettings> {
    let provider: Provider = settings
        .provider
        .as_deref()
        .unwrap_or("virtualbox")
        .parse()?;

    let mut ports = Vec::new();
    for (i, port) in settings.ports.unwrap_or_default().into_iter().enumerate() {
        // Legacy schema used to/send for guest/host
        let guest = port
            .guest
            .or(port.to)
            .ok_or_else(|| anyhow!("port entry {i} has no guest port"))?;
        let host = port
            .host
            .or(port.send)
            .ok_or_else(|| anyhow!("port entry {i} has no host port"))?;
        ports.push(PortForward {
            guest,
            host,
            protocol: port.protocol.unwrap_or_else(|| "tcp".to_string()),
        });
    }

    let folders = settings
        .folders
        .into_iter()
        .map(|folder| {
            let mount_options = if folder.kind.as_deref() == Some("nfs") {
                folder.mount_options.unwrap_or_else(|| {
                    DEFAULT_NFS_MOUNT_OPTIONS
                        .iter()
                        .map(|s| s.to_string())
                        .collect()
                })
            } else {
                Vec::new()
            };
            NormalizedFolder {
                map: folder.map,
                to: folder.to,
                kind: folder.kind,
                options: FolderOptions {
                    mount_options,
                    extra: folder.options,
                },
                bindfs: folder.bindfs,
            }
        })
        .collect();

    let sites = settings
        .sites
        .into_iter()
        .map(|site| {
            let mut kind = site.kind.unwrap_or_else(|| "laravel".to_string());
            if site.hhvm.unwrap_or(false) {
                kind = "hhvm".to_string();
            }
            if kind == "symfony" {
                kind = "symfony2".to_string();
            }
            NormalizedSite {
                map: site.map,
                to: site.to,
                kind,
                port: site.port.unwrap_or(80),
                ssl: site.ssl.unwrap_or(443),
                schedule: site.schedule,
            }
        })
        .collect();

    Ok(NormalizedSettings {
        box_image: settings.box_image.unwrap_or_else(|| DEFAULT_BOX.to_string()),
        box_version: settings
            .version
            .unwrap_or_else(|| DEFAULT_BOX_VERSION.to_string()),
        hostname: settings
            .hostname
            .unwrap_or_else(|| DEFAULT_HOSTNAME.to_string()),
        vm_name: settings.name.unwrap_or_else(|| DEFAULT_VM_NAME.to_string()),
        ip: settings.ip.unwrap_or_else(|| DEFAULT_IP.to_string()),
        memory: settings.memory.unwrap_or(DEFAULT_MEMORY),
        cpus: settings.cpus.unwrap_or_else(|| provider.default_cpus()),
        provider,
        networks: settings.networks,
        ports,
        authorize: settings.authorize,
        keys: settings.keys,
        folders,
        sites,
        databases: settings.databases,
        variables: settings.variables,
        blackfire: settings.blackfire.into_iter().next(),
    })
}
