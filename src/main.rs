use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "imagepick")]
#[command(about = "Pick an image from a grid and say why")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Picker config to open (same as `imagepick show <config>`)
    config: Option<PathBuf>,

    /// Write the final selection here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the picker window
    Show {
        /// Picker config (.toml, .yaml, .yml or .json)
        config: PathBuf,

        /// Write the final selection here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replay scripted interactions headlessly, printing one snapshot per line
    Replay {
        /// Picker config (.toml, .yaml, .yml or .json)
        config: PathBuf,

        /// Script with one `select`, `reason` or `text` command per line
        script: PathBuf,
    },

    /// Parse a config and describe what the picker will show
    Check {
        /// Picker config (.toml, .yaml, .yml or .json)
        config: PathBuf,
    },

    /// Write a starter picker config
    Init {
        /// Where to write it
        #[arg(default_value = "imagepick.toml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so stdout stays clean for snapshots)
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Show { config, output }) => {
            cli::show::show_command(&config, output)?;
        }
        Some(Commands::Replay { config, script }) => {
            cli::replay::replay_command(&config, &script)?;
        }
        Some(Commands::Check { config }) => {
            cli::check::check_command(&config)?;
        }
        Some(Commands::Init { path, force }) => {
            cli::init::init_command(&path, force)?;
        }
        None => match cli.config {
            Some(config) => cli::show::show_command(&config, cli.output)?,
            None => bail!("No config given. Try `imagepick init` to create one."),
        },
    }

    Ok(())
}
