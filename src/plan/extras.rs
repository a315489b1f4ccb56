//! Aux planner
//!
//! The optional provisioning extras: SSH keys, databases, environment
//! variables, the composer self-update, blackfire, xdebug, and editor
//! highlighting. Each sub-plan keys off settings presence; helper scripts
//! that are absent on the controlling host simply skip their action.

use crate::config::local::LocalConfig;
use crate::plan::directive::{Directive, Provision};
use crate::plan::normalize::NormalizedSettings;
use crate::utils::paths::{expand_home, ScriptDir};
use crate::Result;
use anyhow::anyhow;
use std::fs;

/// Authorized public key and private key installs
pub fn ssh_access(settings: &NormalizedSettings) -> Result<Vec<Directive>> {
    let mut out = Vec::new();

    if let Some(authorize) = &settings.authorize {
        let path = expand_home(authorize);
        // Optional collaborator: a missing public key skips the action
        if path.is_file() {
            let key = fs::read_to_string(&path)
                .map_err(|e| anyhow!("cannot read public key {}: {e}", path.display()))?;
            out.push(Directive::Provision(
                Provision::inline(
                    "echo $1 | grep -xq \"$1\" /home/vagrant/.ssh/authorized_keys || \
                     echo $1 | tee -a /home/vagrant/.ssh/authorized_keys",
                )
                .args([key]),
            ));
        }
    }

    for key_path in &settings.keys {
        let path = expand_home(key_path);
        let key = fs::read_to_string(&path)
            .map_err(|e| anyhow!("cannot read private key {}: {e}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow!("private key path {} has no file name", path.display()))?
            .to_string();
        out.push(Directive::Provision(
            Provision::inline("echo \"$1\" > /home/vagrant/.ssh/$2 && chmod 600 /home/vagrant/.ssh/$2")
                .args([key, name])
                .unprivileged(),
        ));
    }

    Ok(out)
}

/// One mysql and one postgres create per database, regardless of which
/// server role is active on the guest
pub fn databases(settings: &NormalizedSettings, scripts: &ScriptDir) -> Vec<Directive> {
    let mut out = Vec::new();
    for db in &settings.databases {
        out.push(Directive::Provision(
            Provision::script(scripts.path("create-mysql.sh")).args([db.clone()]),
        ));
        out.push(Directive::Provision(
            Provision::script(scripts.path("create-postgres.sh")).args([db.clone()]),
        ));
    }
    out
}

/// Wipe then re-append every server environment variable; the fpm restart
/// runs once at the end and only when any variable was declared
pub fn variables(settings: &NormalizedSettings, scripts: &ScriptDir) -> Vec<Directive> {
    let mut out = vec![Directive::Provision(Provision::script(
        scripts.path("clear-variables.sh"),
    ))];

    for var in &settings.variables {
        out.push(Directive::Provision(
            Provision::inline("echo \"\\nenv[$1] = '$2'\" >> /etc/php/7.0/fpm/php-fpm.conf")
                .args([var.key.clone(), var.value.clone()]),
        ));
        out.push(Directive::Provision(
            Provision::inline(
                "echo \"\\n# Provisioned Environment Variable\\nexport $1=$2\" >> /home/vagrant/.profile",
            )
            .args([var.key.clone(), var.value.clone()]),
        ));
    }

    if !settings.variables.is_empty() {
        out.push(Directive::Provision(Provision::inline(
            "service php7.0-fpm restart",
        )));
    }

    out
}

/// Dependency manager self-update, unconditional
pub fn composer_update() -> Directive {
    Directive::Provision(Provision::inline("/usr/local/bin/composer self-update"))
}

/// Blackfire.io profiling agent, when credentials are configured
pub fn blackfire(settings: &NormalizedSettings, scripts: &ScriptDir) -> Option<Directive> {
    let creds = settings.blackfire.as_ref()?;
    Some(Directive::Provision(
        Provision::script(scripts.path("blackfire.sh")).args([
            creds.id.clone(),
            creds.token.clone(),
            creds.client_id.clone(),
            creds.client_token.clone(),
        ]),
    ))
}

/// Xdebug install/enable and its request profiler
pub fn debugger(local: &LocalConfig, scripts: &ScriptDir) -> Vec<Directive> {
    // Args carry a fixed "not dev-mode" flag expected by the scripts
    let dev_mode = false;
    let mut out = Vec::new();

    if scripts.exists("xdebug/xdebug-install.sh") {
        out.push(Directive::Provision(Provision::script(
            scripts.path("xdebug/xdebug-install.sh"),
        )));
    }

    let (Some(xdebug), true) = (&local.xdebug, scripts.exists("xdebug/xdebug-enable.sh")) else {
        return out;
    };

    out.push(Directive::Provision(
        Provision::script(scripts.path("xdebug/xdebug-enable.sh")).args([
            xdebug.fpm.enabled.to_string(),
            xdebug.cli.enabled.to_string(),
            dev_mode.to_string(),
        ]),
    ));

    if xdebug.profiler.enabled && !xdebug.fpm.enabled && !xdebug.cli.enabled {
        let state = |enabled: bool| if enabled { "enabled" } else { "disabled" };
        let message = format!(
            "xdebug profiler may not work as expected because\n   \
             xdebug for fpm is: {}\n   \
             xdebug for cli is: {}",
            state(xdebug.fpm.enabled),
            state(xdebug.cli.enabled),
        );
        out.push(Directive::Provision(
            Provision::inline("echo -e \"\\e[31m ${1} \\e[39m\"").args([message]),
        ));
    }

    if scripts.exists("xdebug/xdebug-profiler-enable.sh") {
        // The duplicated enabled flag is what the script expects
        out.push(Directive::Provision(
            Provision::script(scripts.path("xdebug/xdebug-profiler-enable.sh")).args([
                xdebug.profiler.enabled.to_string(),
                xdebug.profiler.enabled.to_string(),
                xdebug.profiler.logs.path.clone(),
                xdebug.profiler.logs.filename.clone(),
                dev_mode.to_string(),
            ]),
        ));
    }

    out
}

/// Nano syntax highlighting, when the script ships with the project
pub fn editor_highlight(scripts: &ScriptDir) -> Option<Directive> {
    let script = "nano/ubuntu1404_add-nano-code-highlighting.sh";
    if !scripts.exists(script) {
        return None;
    }
    let dev_mode = false;
    Some(Directive::Provision(
        Provision::script(scripts.path(script))
            .args(["vagrant".to_string(), dev_mode.to_string()]),
    ))
}
