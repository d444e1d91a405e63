//! set-team command arguments

use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser};

/// Arguments for 'set-team'
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
        fly -t ci set-team -n ops --user alice --group github:my-org:ops\n  \
        fly -t ci set-team -n ops --non-interactive --user alice\n  \
        fly -t ci set-team -n sandbox --no-really-i-dont-want-any-auth")]
pub struct SetTeamArgs {
    /// The team to create or modify
    #[arg(short = 'n', long = "team-name", value_parser = NonEmptyStringValueParser::new())]
    pub team_name: String,

    /// Force apply configuration
    #[arg(long = "non-interactive", default_value_t = false)]
    pub skip_interactive: bool,

    #[command(flatten)]
    pub team_flags: TeamFlags,
}

/// Requested team authentication, as typed by the operator
#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "Authentication")]
pub struct TeamFlags {
    /// List of auth users
    #[arg(long = "user", value_name = "USER")]
    pub users: Vec<String>,

    /// List of auth groups
    #[arg(long = "group", value_name = "GROUP")]
    pub groups: Vec<String>,

    /// Flag to disable any authorization method for your team
    #[arg(long = "no-really-i-dont-want-any-auth", default_value_t = false)]
    pub no_auth: bool,
}
