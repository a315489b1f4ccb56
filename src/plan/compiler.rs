//! Plan emitter
//!
//! Runs the planner stages once, in a fixed order, and concatenates their
//! output. The order is part of the contract with the host: later actions
//! assume earlier ones already ran. The compiler either returns a complete
//! plan or fails before emitting anything.

use crate::config::local::LocalConfig;
use crate::config::schema::Settings;
use crate::plan::directive::{Capabilities, Directive, Plan, Provider, ProviderConfig};
use crate::plan::normalize::{normalize, NormalizedSettings};
use crate::plan::{extras, folders, network, sites};
use crate::utils::paths::ScriptDir;
use crate::utils::system::now_utc;
use crate::Result;
use serde::{Deserialize, Serialize};

/// Plan document metadata; the directive list itself stays deterministic
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Meta {
    pub version: u32,
    pub generated: String,
}

/// Serialized form of a plan, as written by the CLI
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlanDocument {
    pub meta: Meta,
    #[serde(flatten)]
    pub plan: Plan,
}

impl PlanDocument {
    pub fn new(plan: Plan) -> Self {
        PlanDocument {
            meta: Meta {
                version: 1,
                generated: now_utc(),
            },
            plan,
        }
    }
}

fn provider_config(settings: &NormalizedSettings) -> ProviderConfig {
    match settings.provider {
        Provider::Virtualbox => ProviderConfig::Virtualbox {
            vm_name: settings.vm_name.clone(),
            memory: settings.memory,
            cpus: settings.cpus,
            nat_dns_proxy: true,
            nat_dns_host_resolver: true,
            os_type: "Ubuntu_64".to_string(),
        },
        Provider::VmwareFusion => ProviderConfig::VmwareFusion {
            display_name: "homestead".to_string(),
            memory: settings.memory,
            cpus: settings.cpus,
            guest_os: "ubuntu-64".to_string(),
        },
        Provider::VmwareWorkstation => ProviderConfig::VmwareWorkstation {
            display_name: "homestead".to_string(),
            memory: settings.memory,
            cpus: settings.cpus,
            guest_os: "ubuntu-64".to_string(),
        },
        Provider::Parallels => ProviderConfig::Parallels {
            memory: settings.memory,
            cpus: settings.cpus,
            update_guest_tools: true,
        },
    }
}

/// Compile a raw settings tree into the ordered provisioning plan
pub fn compile(
    settings: Settings,
    local: &LocalConfig,
    caps: &Capabilities,
    scripts: &ScriptDir,
) -> Result<Plan> {
    let settings = normalize(settings)?;

    let mut directives = vec![
        Directive::SshBehavior {
            no_tty_workaround: true,
            forward_agent: true,
        },
        Directive::Box {
            image: settings.box_image.clone(),
            version: settings.box_version.clone(),
            hostname: settings.hostname.clone(),
        },
        Directive::Provider {
            config: provider_config(&settings),
        },
    ];

    directives.extend(network::plan(&settings));
    directives.extend(extras::ssh_access(&settings)?);
    directives.extend(folders::plan(&settings, caps)?);

    if caps.guest_tools_update {
        directives.push(Directive::GuestToolsUpdate { auto_update: false });
    }

    directives.extend(sites::plan(&settings, scripts));
    directives.extend(extras::databases(&settings, scripts));
    directives.extend(extras::variables(&settings, scripts));
    directives.push(extras::composer_update());
    directives.extend(extras::blackfire(&settings, scripts));
    directives.extend(extras::debugger(local, scripts));
    directives.extend(extras::editor_highlight(scripts));

    Ok(Plan {
        provider: settings.provider,
        directives,
    })
}
