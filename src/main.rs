//! Focus Timer CLI - A Pomodoro-style productivity tool
//!
//! This tool helps you stay focused by alternating sessions:
//! - 25 minutes of focused work (adjustable 5-60 minutes)
//! - 5 minutes of break (adjustable 1-15 minutes)

use anyhow::Result;
use clap::{CommandFactory, Parser};

pub mod cli;
pub mod daemon;
pub mod types;

use cli::{Cli, Commands, Display, IpcClient};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    // Set verbose logging if requested
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Start) => {
            let client = IpcClient::new()?;
            let response = client.start().await?;
            Display::show_start_success(&response);
        }
        Some(Commands::Pause) => {
            let client = IpcClient::new()?;
            let response = client.pause().await?;
            Display::show_pause_success(&response);
        }
        Some(Commands::Resume) => {
            let client = IpcClient::new()?;
            let response = client.resume().await?;
            Display::show_resume_success(&response);
        }
        Some(Commands::Stop) => {
            let client = IpcClient::new()?;
            let response = client.stop().await?;
            Display::show_stop_success(&response);
        }
        Some(Commands::Toggle) => {
            let client = IpcClient::new()?;
            let response = client.toggle().await?;
            Display::show_toggle_success(&response);
        }
        Some(Commands::Status) => {
            let client = IpcClient::new()?;
            let response = client.status().await?;
            Display::show_status(&response);
        }
        Some(Commands::Config(args)) => {
            let client = IpcClient::new()?;
            let response = client.config(&args).await?;
            Display::show_config_success(&response);
        }
        Some(Commands::Daemon(args)) => {
            let socket_path = match args.socket {
                Some(path) => path,
                None => IpcClient::default_socket_path()?,
            };
            daemon::run(&socket_path).await?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
