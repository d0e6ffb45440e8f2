//! Mimicry CLI entry point.
//!
//! Binary name: `mimic`
//!
//! Parses CLI arguments, initializes tracing, config, and the personality
//! database, then dispatches to the command handler.

mod cli;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands, OutputMode};
use mimicry_observe::tracing_setup::{LogLevel, init_tracing, shutdown_tracing};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(LogLevel::from_flags(cli.verbose, cli.quiet), cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "mimic", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;
    let mode = OutputMode::from_flags(cli.json, cli.quiet);
    let result = run(&state, cli.command, mode).await;

    shutdown_tracing();
    result
}

async fn run(state: &AppState, command: Commands, mode: OutputMode) -> anyhow::Result<()> {
    match command {
        Commands::Train {
            source,
            name,
            description,
            user,
            max_bytes,
        } => {
            cli::personality::train(state, &source, name, description, user, max_bytes, mode)
                .await
        }

        Commands::Preview {
            source,
            name,
            description,
            max_bytes,
        } => cli::personality::preview(state, &source, name, description, max_bytes, mode).await,

        Commands::List { user } => cli::personality::list(state, user, mode).await,

        Commands::Show { id, prompt } => cli::personality::show(state, &id, prompt, mode).await,

        Commands::Delete { id, force } => cli::personality::delete(state, &id, force, mode).await,

        Commands::Completions { .. } => unreachable!("handled above"),
    }
}
