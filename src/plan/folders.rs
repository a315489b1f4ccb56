//! Folder planner
//!
//! Chooses a mount strategy per shared folder. Non-nfs folders, and nfs
//! folders without the bind-remount addon, mount directly. An nfs folder
//! with the addon available mounts to an intermediate path and is rebound
//! to its target with the ownership from its `bindfs` block.

use crate::plan::directive::{Capabilities, Directive};
use crate::plan::normalize::NormalizedSettings;
use crate::Result;
use anyhow::anyhow;

pub fn plan(settings: &NormalizedSettings, caps: &Capabilities) -> Result<Vec<Directive>> {
    let mut out = Vec::new();

    for (index, folder) in settings.folders.iter().enumerate() {
        if folder.kind.as_deref() == Some("nfs") && caps.bind_remount {
            let bindfs = folder.bindfs.as_ref().ok_or_else(|| {
                anyhow!(
                    "nfs folder '{}' needs a bindfs block (owner/group/permissions) \
                     when the bind-remount addon is available",
                    folder.map
                )
            })?;
            let intermediate = format!("/mnt/vagrant-{index}");
            out.push(Directive::SyncedFolder {
                host_path: folder.map.clone(),
                guest_path: intermediate.clone(),
                kind: folder.kind.clone(),
                options: folder.options.clone(),
            });
            out.push(Directive::RebindFolder {
                from: intermediate,
                to: folder.to.clone(),
                owner: bindfs.owner.clone(),
                group: bindfs.group.clone(),
                perms: bindfs.permissions.clone(),
            });
        } else {
            out.push(Directive::SyncedFolder {
                host_path: folder.map.clone(),
                guest_path: folder.to.clone(),
                kind: folder.kind.clone(),
                options: folder.options.clone(),
            });
        }
    }

    Ok(out)
}
