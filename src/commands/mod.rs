//! Command handlers

mod set_team;
mod targets;
mod teams;

pub use set_team::{run_set_team_command, validate_flags};
pub use targets::run_targets_command;
pub use teams::run_teams_command;
