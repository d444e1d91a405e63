//! set-team command handler

use log::debug;
use std::io::Write;

use crate::cli::{SetTeamArgs, TeamFlags};
use crate::concourse::TeamAuth;
use crate::config::{auth, defaults};
use crate::error::{FlyError, Result};
use crate::output::join_or_none;
use crate::rc::{load_target, RcStore};
use crate::ui::{
    confirm_action, create_spinner, embolden, finish_spinner, print_warning_header,
    stderr_is_terminal, warning_color, Prompter,
};

impl TeamFlags {
    /// Auth map sent to the server; kinds with no entries are left out
    pub fn to_map(&self) -> TeamAuth {
        let mut map = TeamAuth::new();

        if !self.users.is_empty() {
            map.insert(auth::USERS.to_string(), self.users.clone());
        }

        if !self.groups.is_empty() {
            map.insert(auth::GROUPS.to_string(), self.groups.clone());
        }

        map
    }
}

/// Check the requested auth before anything is sent.
///
/// An explicit opt-out is accepted with a warning. No users, no groups and
/// no opt-out prints the command that would opt out and fails with
/// `FlyError::MissingAuth`, which `main` turns into exit status 1.
pub fn validate_flags(
    flags: &TeamFlags,
    target: &str,
    team: &str,
    err: &mut dyn Write,
) -> Result<()> {
    if flags.no_auth {
        print_warning_header(err)?;
        writeln!(
            err,
            "{}",
            warning_color("no auth methods configured. you asked for it!")
        )?;
        writeln!(err)?;
    } else if flags.users.is_empty() && flags.groups.is_empty() {
        writeln!(err, "no auth methods configured! to continue, run:")?;
        writeln!(err)?;
        writeln!(
            err,
            "    {}",
            embolden(&format!(
                "{} -t {} set-team -n {} --no-really-i-dont-want-any-auth",
                defaults::BIN_NAME,
                target,
                team
            ))
        )?;
        writeln!(err)?;
        writeln!(err, "this will leave the team open to anyone to mess with!")?;
        return Err(FlyError::MissingAuth {
            target: target.to_string(),
            team: team.to_string(),
        });
    }

    Ok(())
}

/// Run the set-team command: validate, confirm, then create or update the team
pub async fn run_set_team_command(
    target_name: Option<&str>,
    verbose: bool,
    args: &SetTeamArgs,
    store: &RcStore,
    prompter: &dyn Prompter,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    debug!(
        "set-team '{}' (users={:?}, groups={:?}, no_auth={}, non_interactive={})",
        args.team_name,
        args.team_flags.users,
        args.team_flags.groups,
        args.team_flags.no_auth,
        args.skip_interactive
    );

    let target = load_target(store, target_name, verbose)?;
    target.validate().await?;

    validate_flags(&args.team_flags, &target.name, &args.team_name, err)?;

    writeln!(out, "Team Name: {}", args.team_name)?;
    writeln!(out, "Users: {}", join_or_none(&args.team_flags.users))?;
    writeln!(out, "Groups: {}", join_or_none(&args.team_flags.groups))?;
    out.flush()?;

    if !confirm_action(prompter, "apply configuration?", args.skip_interactive)? {
        return Err(FlyError::Aborted);
    }

    let auth = args.team_flags.to_map();

    let spinner = create_spinner(
        &format!("Saving team '{}'...", args.team_name),
        !stderr_is_terminal(),
    );
    let result = target
        .client()
        .create_or_update_team(&args.team_name, &auth)
        .await;
    finish_spinner(spinner);
    let (_team, created, updated) = result?;

    if created {
        writeln!(out, "team created")?;
    } else if updated {
        writeln!(out, "team updated")?;
    }

    Ok(())
}
