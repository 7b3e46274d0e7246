//! Command definitions for the Focus Timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::StepDirection;

// ============================================================================
// CLI Structure
// ============================================================================

/// Focus Timer CLI - A Pomodoro-style focus/break countdown timer
#[derive(Parser, Debug)]
#[command(
    name = "focustimer",
    version,
    about = "ポモドーロ式フォーカスタイマーCLI",
    long_about = "ターミナル上で動作するシンプルなフォーカスタイマー。\n\
                  集中と休憩のセッションを自動で交互に切り替えます。",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start a new focus session
    Start,

    /// Pause the current timer
    Pause,

    /// Resume a paused timer
    Resume,

    /// Stop the current timer
    Stop,

    /// Pause if running, resume if paused, start if idle
    Toggle,

    /// Show current timer status
    Status,

    /// Adjust focus/break durations in fixed steps
    Config(ConfigArgs),

    /// Run as daemon (background service)
    #[command(hide = true)]
    Daemon(DaemonArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Config Command Arguments
// ============================================================================

/// Step direction for duration adjustment
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepArg {
    /// Increase by one step
    Up,
    /// Decrease by one step
    Down,
}

impl From<StepArg> for StepDirection {
    fn from(arg: StepArg) -> Self {
        match arg {
            StepArg::Up => StepDirection::Up,
            StepArg::Down => StepDirection::Down,
        }
    }
}

/// Arguments for the config command
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Adjust focus duration (5 minute steps, 5-60 minutes)
    #[arg(short, long, value_enum)]
    pub focus: Option<StepArg>,

    /// Adjust break duration (1 minute steps, 1-15 minutes)
    #[arg(short, long, value_enum)]
    pub break_time: Option<StepArg>,
}

// ============================================================================
// Daemon Command Arguments
// ============================================================================

/// Arguments for the daemon command
#[derive(Args, Debug, Clone, Default)]
pub struct DaemonArgs {
    /// Socket path override (defaults to ~/.focustimer/focustimer.sock)
    #[arg(long)]
    pub socket: Option<std::path::PathBuf>,
}

// ============================================================================
// Tests
// ============================================================================
