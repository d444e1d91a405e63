//! fly - Main entry point

use clap::Parser;
use log::{debug, info};
use std::io;
use std::process::ExitCode;

use fly::ui::{failure_color, TerminalPrompter};
use fly::{
    run_set_team_command, run_targets_command, run_teams_command, Cli, Command, FlyError,
    RcStore,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.effective_log_level()),
    )
    .init();

    info!("Starting fly v{}", env!("CARGO_PKG_VERSION"));
    debug!("CLI args: target={:?}, command={:?}", cli.target, cli.command);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        // Guidance was already printed by the command
        Err(FlyError::MissingAuth { .. }) => ExitCode::FAILURE,
        Err(FlyError::Aborted) => {
            eprintln!("{}", failure_color(&FlyError::Aborted.to_string()));
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{} {}", failure_color("error:"), e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> fly::Result<()> {
    let store = RcStore::new();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    match &cli.command {
        Command::SetTeam(args) => {
            run_set_team_command(
                cli.target.as_deref(),
                cli.verbose,
                args,
                &store,
                &TerminalPrompter,
                &mut stdout,
                &mut stderr,
            )
            .await
        }
        Command::Teams(args) => {
            run_teams_command(cli.target.as_deref(), cli.verbose, args, &store, &mut stdout)
                .await
        }
        Command::Targets => run_targets_command(&store, &mut stdout),
    }
}
