//! teams command arguments

use clap::Parser;

use super::common::OutputFormat;

/// Arguments for 'teams'
#[derive(Parser, Debug)]
pub struct TeamsArgs {
    /// Show the users and groups of each team
    #[arg(short = 'd', long, default_value_t = false)]
    pub details: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
