//! Focus Timer Library
//!
//! This library provides the core functionality for the Focus Timer CLI.
//! It includes:
//! - Timer engine alternating focus and break sessions
//! - IPC server/client for daemon-CLI communication
//! - CLI command parsing and display utilities
//! - Type definitions for configuration and state

pub mod cli;
pub mod daemon;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{
    ConfigParams, DurationConfig, IpcRequest, IpcResponse, ResponseData, Session, SessionPhase,
    StepDirection, TimerStatus,
};

// Re-export daemon types
pub use daemon::{TimerEngine, TimerError, TimerEvent};
