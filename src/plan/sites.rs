//! Site planner
//!
//! Emits one wipe of all existing site configuration, then one serve action
//! per declared site keyed by its resolved type, plus an optional cron
//! install/remove per site.

use crate::plan::directive::{Directive, Provision};
use crate::plan::normalize::NormalizedSettings;
use crate::utils::paths::ScriptDir;

/// Cron-safe identifier for a domain: alphanumerics only
pub fn sanitize_domain(domain: &str) -> String {
    domain.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

pub fn plan(settings: &NormalizedSettings, scripts: &ScriptDir) -> Vec<Directive> {
    // Full-replace semantics: wipe first so stale sites never linger
    let mut out = vec![Directive::Provision(Provision::script(
        scripts.path("clear-nginx.sh"),
    ))];

    for site in &settings.sites {
        out.push(Directive::Provision(
            Provision::script(scripts.path(&format!("serve-{}.sh", site.kind))).args([
                site.map.clone(),
                site.to.clone(),
                site.port.to_string(),
                site.ssl.to_string(),
            ]),
        ));

        if let Some(schedule) = site.schedule {
            let job = sanitize_domain(&site.map);
            let action = if schedule {
                Provision::script(scripts.path("cron-schedule.sh")).args([job, site.to.clone()])
            } else {
                Provision::inline("rm -f /etc/cron.d/$1").args([job])
            };
            out.push(Directive::Provision(action));
        }
    }

    out
}
