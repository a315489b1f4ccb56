//! Plan output model
//!
//! The directives the compiler hands to the virtualization host. The list is
//! an in-process contract: the host must apply it in order and owns all
//! execution and failure reporting.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::str::FromStr;

/// Virtualization backend (closed set)
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    Virtualbox,
    VmwareFusion,
    VmwareWorkstation,
    Parallels,
}

impl Provider {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Virtualbox => "virtualbox",
            Provider::VmwareFusion => "vmware_fusion",
            Provider::VmwareWorkstation => "vmware_workstation",
            Provider::Parallels => "parallels",
        }
    }

    /// Default vCPU count differs per provider (virtualbox gets 2, the
    /// others 1; kept as-is rather than unified)
    pub fn default_cpus(&self) -> u32 {
        match self {
            Provider::Virtualbox => 2,
            Provider::VmwareFusion | Provider::VmwareWorkstation | Provider::Parallels => 1,
        }
    }
}

impl FromStr for Provider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "virtualbox" => Ok(Provider::Virtualbox),
            "vmware_fusion" => Ok(Provider::VmwareFusion),
            "vmware_workstation" => Ok(Provider::VmwareWorkstation),
            "parallels" => Ok(Provider::Parallels),
            other => Err(anyhow::anyhow!("unknown provider '{other}'")),
        }
    }
}

/// Per-provider VM configuration, constructed for the active provider only
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum ProviderConfig {
    Virtualbox {
        vm_name: String,
        memory: u32,
        cpus: u32,
        nat_dns_proxy: bool,
        nat_dns_host_resolver: bool,
        os_type: String,
    },
    VmwareFusion {
        display_name: String,
        memory: u32,
        cpus: u32,
        guest_os: String,
    },
    VmwareWorkstation {
        display_name: String,
        memory: u32,
        cpus: u32,
        guest_os: String,
    },
    Parallels {
        memory: u32,
        cpus: u32,
        update_guest_tools: bool,
    },
}

/// Merged mount options for a synced folder
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FolderOptions {
    pub mount_options: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Where a provisioning action's shell code comes from
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionSource {
    Script { path: PathBuf },
    Inline { command: String },
}

/// A single idempotent shell-level action applied to the guest
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Provision {
    #[serde(flatten)]
    pub source: ProvisionSource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    pub privileged: bool,
}

impl Provision {
    pub fn script(path: PathBuf) -> Self {
        Provision {
            source: ProvisionSource::Script { path },
            args: Vec::new(),
            privileged: true,
        }
    }

    pub fn inline(command: impl Into<String>) -> Self {
        Provision {
            source: ProvisionSource::Inline {
                command: command.into(),
            },
            args: Vec::new(),
            privileged: true,
        }
    }

    pub fn args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args = args.into_iter().collect();
        self
    }

    pub fn unprivileged(mut self) -> Self {
        self.privileged = false;
        self
    }
}

/// One entry of the emitted plan
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "directive", rename_all = "snake_case")]
pub enum Directive {
    /// SSH behavior the host must apply before provisioning
    SshBehavior {
        no_tty_workaround: bool,
        forward_agent: bool,
    },
    Box {
        image: String,
        version: String,
        hostname: String,
    },
    Provider {
        #[serde(flatten)]
        config: ProviderConfig,
    },
    /// Private or bridged network attachment
    Network {
        kind: String,
        ip: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        bridge: Option<String>,
    },
    ForwardedPort {
        guest: u16,
        host: u16,
        protocol: String,
        auto_correct: bool,
    },
    SyncedFolder {
        host_path: String,
        guest_path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
        options: FolderOptions,
    },
    /// Re-expose an already-mounted folder with different ownership
    RebindFolder {
        from: String,
        to: String,
        owner: String,
        group: String,
        perms: String,
    },
    /// Guest-tools addon auto-update toggle; emitted only when the addon
    /// capability is reported available
    GuestToolsUpdate { auto_update: bool },
    Provision(Provision),
}

impl Directive {
    pub fn provision(&self) -> Option<&Provision> {
        match self {
            Directive::Provision(p) => Some(p),
            _ => None,
        }
    }
}

/// The compiled plan: the active provider plus the ordered directive list
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Plan {
    pub provider: Provider,
    pub directives: Vec<Directive>,
}

/// Host addon availability, injected once per compile; the compiler never
/// probes the host itself
#[derive(Debug, Clone, Copy, Default)]
pub struct Capabilities {
    /// Bind-remount (bindfs) addon is installed
    pub bind_remount: bool,
    /// Guest-tools auto-update addon is installed
    pub guest_tools_update: bool,
}
