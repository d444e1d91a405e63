//! CLI argument parsing

mod common;
mod set_team;
mod teams;

use clap::{Parser, Subcommand};

use crate::config::{defaults, rc};

pub use common::OutputFormat;
pub use set_team::{SetTeamArgs, TeamFlags};
pub use teams::TeamsArgs;

/// fly - CI server command-line client
#[derive(Parser, Debug)]
#[command(name = "fly")]
#[command(version)]
#[command(about = "Command-line client for Concourse-style CI servers", long_about = None)]
pub struct Cli {
    /// Concourse target name
    #[arg(short = 't', long, global = true, env = rc::TARGET_ENV_VAR)]
    pub target: Option<String>,

    /// Print API requests and responses
    #[arg(short = 'v', long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Effective log filter: --verbose forces debug
    pub fn effective_log_level(&self) -> &str {
        if self.verbose {
            defaults::VERBOSE_LOG_LEVEL
        } else {
            &self.log_level
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create or modify a team to have the given credentials
    #[command(name = "set-team", visible_alias = "st")]
    SetTeam(SetTeamArgs),

    /// List the teams of the target
    #[command(visible_alias = "t")]
    Teams(TeamsArgs),

    /// List saved targets
    #[command(visible_alias = "ts")]
    Targets,
}
