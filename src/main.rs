use anyhow::Result;
use boxplan::cli::commands::{Cli, Cmd, CompileArgs};
use boxplan::cli::completions::{generate_man_page, install_fish_completions, print_completions};
use boxplan::config::loader::{load_local_config, load_settings, LOCAL_FILE};
use boxplan::plan::compiler::{compile, PlanDocument};
use boxplan::plan::directive::{Capabilities, Plan};
use boxplan::utils::paths::{resolve_under_root, ScriptDir};
use clap::{CommandFactory, Parser};
use std::fs::File;
use std::path::Path;

fn compile_from_args(args: &CompileArgs) -> Result<Plan> {
    let settings = load_settings(&args.config)?;

    let project_root = args.config.parent().unwrap_or_else(|| Path::new("."));
    let local_path = match &args.local_config {
        Some(p) => p.clone(),
        None => project_root.join(LOCAL_FILE),
    };
    let local = load_local_config(&local_path)?;

    let scripts = ScriptDir::new(resolve_under_root(project_root, &args.scripts));
    let caps = Capabilities {
        bind_remount: args.bindfs_available,
        guest_tools_update: args.vbguest_available,
    };

    compile(settings, &local, &caps, &scripts)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Compile {
            args,
            output,
            compact,
        } => {
            let doc = PlanDocument::new(compile_from_args(&args)?);
            match output {
                Some(path) => {
                    let f = File::create(&path)?;
                    if compact {
                        serde_json::to_writer(f, &doc)?;
                    } else {
                        serde_json::to_writer_pretty(f, &doc)?;
                    }
                    println!("Wrote plan to {}", path.display());
                }
                None => {
                    let out = std::io::stdout();
                    if compact {
                        serde_json::to_writer(out, &doc)?;
                    } else {
                        serde_json::to_writer_pretty(out, &doc)?;
                    }
                    println!();
                }
            }
        }

        Cmd::Check { args } => {
            let plan = compile_from_args(&args)?;
            println!(
                "OK: {} directives for provider '{}'",
                plan.directives.len(),
                plan.provider.as_str()
            );
        }

        Cmd::Completions { shell } => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }

        Cmd::InstallFish => {
            install_fish_completions()?;
        }

        Cmd::ManPage => {
            generate_man_page()?;
        }
    }

    Ok(())
}
