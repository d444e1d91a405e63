//! teams command handler

use log::debug;
use std::io::Write;

use crate::cli::TeamsArgs;
use crate::error::Result;
use crate::output::render_teams;
use crate::rc::{load_target, RcStore};
use crate::ui::{create_spinner, finish_spinner, stderr_is_terminal};

/// Run the teams list command
pub async fn run_teams_command(
    target_name: Option<&str>,
    verbose: bool,
    args: &TeamsArgs,
    store: &RcStore,
    out: &mut dyn Write,
) -> Result<()> {
    let target = load_target(store, target_name, verbose)?;
    target.validate().await?;

    let spinner = create_spinner(
        &format!("Fetching teams from '{}'...", target.name),
        !stderr_is_terminal(),
    );
    let result = target.client().list_teams().await;
    finish_spinner(spinner);
    let mut teams = result?;

    teams.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("Found {} teams on '{}'", teams.len(), target.name);

    writeln!(out, "{}", render_teams(&teams, args.output, args.details)?)?;
    Ok(())
}
