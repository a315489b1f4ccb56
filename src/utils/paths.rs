//! Path utility functions

use std::path::{Path, PathBuf};

/// Resolve path under root directory
pub fn resolve_under_root(root: &Path, p: &Path) -> PathBuf {
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        root.join(p)
    }
}

/// Expand a leading `~` to the user's home directory
pub fn expand_home(p: &Path) -> PathBuf {
    let Some(rest) = p.to_str().and_then(|s| s.strip_prefix('~')) else {
        return p.to_path_buf();
    };
    if !rest.is_empty() && !rest.starts_with('/') {
        // ~user form, not ours to resolve
        return p.to_path_buf();
    }
    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches('/')),
        None => p.to_path_buf(),
    }
}

/// Directory holding the provisioning scripts the compiler references
#[derive(Debug, Clone)]
pub struct ScriptDir {
    root: PathBuf,
}

impl ScriptDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ScriptDir { root: root.into() }
    }

    /// Path of a script by relative name; no existence requirement
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Presence check for optional helper scripts
    pub fn exists(&self, name: &str) -> bool {
        self.root.join(name).is_file()
    }
}
