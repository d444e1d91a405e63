//! fly - command-line client for Concourse-style CI servers
//!
//! Manages team authentication on a saved target.
//!
//! # Features
//!
//! - Create or update a team's users and groups (`set-team`)
//! - List teams of a target (`teams`)
//! - List saved targets from `~/.flyrc` (`targets`)
//!
//! # Example
//!
//! ```bash
//! # Give alice and the ops group access to team "ops"
//! fly -t ci set-team -n ops --user alice --group github:my-org:ops
//!
//! # Same, without the confirmation prompt
//! fly -t ci set-team -n ops --user alice --non-interactive
//!
//! # List teams with their auth
//! fly -t ci teams --details
//! ```

pub mod cli;
pub mod commands;
pub mod concourse;
pub mod config;
pub mod error;
pub mod output;
pub mod rc;
pub mod ui;

pub use cli::{Cli, Command, OutputFormat, SetTeamArgs, TeamFlags, TeamsArgs};
pub use commands::{run_set_team_command, run_targets_command, run_teams_command, validate_flags};
pub use concourse::{ApiClient, Target, Team, TeamAuth};
pub use error::{FlyError, Result};
pub use rc::{load_target, RcStore};
