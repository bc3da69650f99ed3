//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::output::OutputContext;

/// Live follower for remote status pages
#[derive(Parser)]
#[command(
    name = "faro",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Follow a status page and keep its regions fresh
    Watch(commands::watch::WatchArgs),

    /// Fetch the current status token once
    Status(commands::status::StatusArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            no_color,
            quiet,
            json,
            command,
        } = self;
        match command {
            Command::Watch(args) => {
                let ctx = OutputContext::new(no_color, quiet);
                commands::watch::run(&ctx, &args, json).await
            }
            Command::Status(args) => commands::status::run(&args, json).await,
            Command::Version => {
                commands::version::run(json);
                Ok(())
            }
        }
    }
}
