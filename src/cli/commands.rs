//! CLI command definitions

use crate::config::loader::SETTINGS_FILE;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// boxplan CLI (Rust)
#[derive(Parser, Debug)]
#[command(name = "boxplan", about = "Dev VM provisioning plan compiler")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Cmd,
}

/// Inputs shared by `compile` and `check`
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Settings file (YAML)
    #[arg(long, default_value = SETTINGS_FILE)]
    pub config: PathBuf,

    /// Local untracked configuration; defaults to boxplan.local.yaml next
    /// to the settings file
    #[arg(long)]
    pub local_config: Option<PathBuf>,

    /// Provisioning script directory; relative paths resolve under the
    /// settings file's directory
    #[arg(long, default_value = "scripts")]
    pub scripts: PathBuf,

    /// Host reports the bind-remount (bindfs) addon as installed
    #[arg(long)]
    pub bindfs_available: bool,

    /// Host reports the guest-tools auto-update addon as installed
    #[arg(long)]
    pub vbguest_available: bool,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Compile the settings into an ordered provisioning plan (JSON)
    Compile {
        #[command(flatten)]
        args: CompileArgs,

        /// Write the plan here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Validate the settings without emitting a plan
    Check {
        #[command(flatten)]
        args: CompileArgs,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Install Fish shell completions automatically
    InstallFish,

    /// Generate man page
    ManPage,
}
