//! Core data types for the Focus Timer.
//!
//! This module defines the data structures used for:
//! - Session phase and countdown state
//! - Bounded duration configuration
//! - IPC request/response serialization

use serde::{Deserialize, Serialize};

// ============================================================================
// SessionPhase
// ============================================================================

/// Represents which half of the focus/break cycle a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    /// A focus (work) interval
    Focusing,
    /// A break interval
    OnBreak,
}

impl SessionPhase {
    /// Returns the string representation of the phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionPhase::Focusing => "focusing",
            SessionPhase::OnBreak => "on_break",
        }
    }

    /// Returns the human-readable session title label.
    pub fn label(&self) -> &'static str {
        match self {
            SessionPhase::Focusing => "Focusing",
            SessionPhase::OnBreak => "On Break",
        }
    }

    /// Returns the opposite phase.
    ///
    /// This is the entire phase-transition table of the timer: focus
    /// alternates with break, nothing else.
    pub fn other(&self) -> SessionPhase {
        match self {
            SessionPhase::Focusing => SessionPhase::OnBreak,
            SessionPhase::OnBreak => SessionPhase::Focusing,
        }
    }
}

// ============================================================================
// DurationConfig
// ============================================================================

/// Minimum focus duration in minutes.
pub const FOCUS_MIN_MINUTES: u32 = 5;
/// Maximum focus duration in minutes.
pub const FOCUS_MAX_MINUTES: u32 = 60;
/// Step size for focus duration adjustments.
pub const FOCUS_STEP_MINUTES: u32 = 5;

/// Minimum break duration in minutes.
pub const BREAK_MIN_MINUTES: u32 = 1;
/// Maximum break duration in minutes.
pub const BREAK_MAX_MINUTES: u32 = 15;
/// Step size for break duration adjustments.
pub const BREAK_STEP_MINUTES: u32 = 1;

/// User-adjustable target lengths for each phase, in minutes.
///
/// Both settings are mutated only through the bounded step operations;
/// hitting a bound is a silent no-op, never an error. A running session is
/// unaffected by mutation because sessions snapshot their duration at
/// construction (see [`Session`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationConfig {
    /// Focus duration in minutes (5-60, steps of 5)
    pub focus_minutes: u32,
    /// Break duration in minutes (1-15, steps of 1)
    pub break_minutes: u32,
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            break_minutes: 5,
        }
    }
}

impl DurationConfig {
    /// Increases the focus duration by one step, clamped to the maximum.
    pub fn increase_focus(&mut self) {
        self.focus_minutes = (self.focus_minutes + FOCUS_STEP_MINUTES)
            .clamp(FOCUS_MIN_MINUTES, FOCUS_MAX_MINUTES);
    }

    /// Decreases the focus duration by one step, clamped to the minimum.
    pub fn decrease_focus(&mut self) {
        self.focus_minutes = self
            .focus_minutes
            .saturating_sub(FOCUS_STEP_MINUTES)
            .clamp(FOCUS_MIN_MINUTES, FOCUS_MAX_MINUTES);
    }

    /// Increases the break duration by one step, clamped to the maximum.
    pub fn increase_break(&mut self) {
        self.break_minutes = (self.break_minutes + BREAK_STEP_MINUTES)
            .clamp(BREAK_MIN_MINUTES, BREAK_MAX_MINUTES);
    }

    /// Decreases the break duration by one step, clamped to the minimum.
    pub fn decrease_break(&mut self) {
        self.break_minutes = self
            .break_minutes
            .saturating_sub(BREAK_STEP_MINUTES)
            .clamp(BREAK_MIN_MINUTES, BREAK_MAX_MINUTES);
    }

    /// Returns the configured duration in minutes for the given phase.
    pub fn get(&self, phase: SessionPhase) -> u32 {
        match phase {
            SessionPhase::Focusing => self.focus_minutes,
            SessionPhase::OnBreak => self.break_minutes,
        }
    }
}

// ============================================================================
// Session
// ============================================================================

/// The live record of the current phase and its remaining countdown.
///
/// `duration_minutes` is snapshotted from [`DurationConfig`] when the session
/// is constructed. Config edits made while the session is in flight must not
/// change its countdown or its total, so every derived query reads the
/// snapshot rather than the live config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Current phase of the session
    pub phase: SessionPhase,
    /// Remaining seconds in this session
    pub remaining_seconds: u32,
    /// Configured duration at the moment this session was created
    pub duration_minutes: u32,
}

impl Session {
    /// Creates a fresh session for the given phase, reading the phase's
    /// duration from the config at this instant.
    pub fn new(phase: SessionPhase, config: &DurationConfig) -> Self {
        let duration_minutes = config.get(phase);
        Self {
            phase,
            remaining_seconds: duration_minutes * 60,
            duration_minutes,
        }
    }

    /// Returns the replacement session for the opposite phase.
    ///
    /// Pure transform: `Focusing` flips to `OnBreak` and vice versa, with the
    /// new duration captured from `config` at the moment of transition.
    pub fn next(&self, config: &DurationConfig) -> Session {
        Session::new(self.phase.other(), config)
    }

    /// Decrements the countdown by one second, floored at zero.
    ///
    /// Returns true if the session has completed (reached 0).
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.remaining_seconds == 0
    }

    /// Formats the remaining time as zero-padded `MM:SS` (1505 -> "25:05").
    pub fn remaining_display(&self) -> String {
        let minutes = self.remaining_seconds / 60;
        let seconds = self.remaining_seconds % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }

    /// Returns the configured total duration in minutes for this session.
    ///
    /// Used for the session title ("Focusing for 25 minutes"), not for the
    /// countdown itself.
    pub fn total_display_minutes(&self) -> u32 {
        self.duration_minutes
    }

    /// Returns elapsed progress as a percentage in `[0.0, 100.0]`.
    ///
    /// 0 at session start, approaching 100 as the countdown runs out.
    pub fn progress_percent(&self) -> f64 {
        let total = f64::from(self.duration_minutes * 60);
        let remaining = f64::from(self.remaining_seconds);
        (100.0 - (remaining / total) * 100.0).clamp(0.0, 100.0)
    }
}

// ============================================================================
// TimerStatus
// ============================================================================

/// Tri-state timer status, derived from the presence and activity of a
/// session: no session -> Idle, session ticking -> Running, session held ->
/// Paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    /// No session exists
    Idle,
    /// A session exists and is counting down
    Running,
    /// A session exists but the countdown is held
    Paused,
}

impl TimerStatus {
    /// Returns the string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Paused => "paused",
        }
    }
}

impl Default for TimerStatus {
    fn default() -> Self {
        TimerStatus::Idle
    }
}

// ============================================================================
// IPC Types
// ============================================================================

/// Direction for a bounded duration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    /// Step the duration up by one increment
    Up,
    /// Step the duration down by one increment
    Down,
}

/// Parameters for the config command.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ConfigParams {
    /// Focus duration adjustment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<StepDirection>,
    /// Break duration adjustment
    #[serde(rename = "breakTime", skip_serializing_if = "Option::is_none")]
    pub break_time: Option<StepDirection>,
}

/// IPC request from client to daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum IpcRequest {
    /// Start a new focus session from idle
    Start,
    /// Pause the running timer
    Pause,
    /// Resume the paused timer
    Resume,
    /// Stop the timer and discard the session
    Stop,
    /// Start, pause or resume depending on the current status
    Toggle,
    /// Query the current status
    Status,
    /// Adjust the configured durations
    Config {
        /// Adjustment parameters
        #[serde(flatten)]
        params: ConfigParams,
    },
}

/// Response data for IPC responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseData {
    /// Current timer status ("idle", "running", "paused")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Current session phase ("focusing", "on_break")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Remaining seconds
    #[serde(rename = "remainingSeconds", skip_serializing_if = "Option::is_none")]
    pub remaining_seconds: Option<u32>,
    /// Remaining time formatted as MM:SS
    #[serde(rename = "remainingDisplay", skip_serializing_if = "Option::is_none")]
    pub remaining_display: Option<String>,
    /// Configured total minutes for the current session
    #[serde(rename = "totalMinutes", skip_serializing_if = "Option::is_none")]
    pub total_minutes: Option<u32>,
    /// Elapsed progress percentage (0-100)
    #[serde(rename = "progressPercent", skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<f64>,
    /// Configured focus duration in minutes
    #[serde(rename = "focusMinutes", skip_serializing_if = "Option::is_none")]
    pub focus_minutes: Option<u32>,
    /// Configured break duration in minutes
    #[serde(rename = "breakMinutes", skip_serializing_if = "Option::is_none")]
    pub break_minutes: Option<u32>,
}

impl ResponseData {
    /// Creates response data from the timer's status, session and config.
    pub fn new(status: TimerStatus, session: Option<&Session>, config: &DurationConfig) -> Self {
        Self {
            state: Some(status.as_str().to_string()),
            phase: session.map(|s| s.phase.as_str().to_string()),
            remaining_seconds: session.map(|s| s.remaining_seconds),
            remaining_display: session.map(Session::remaining_display),
            total_minutes: session.map(Session::total_display_minutes),
            progress_percent: session.map(Session::progress_percent),
            focus_minutes: Some(config.focus_minutes),
            break_minutes: Some(config.break_minutes),
        }
    }
}

/// IPC response from daemon to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcResponse {
    /// Response status ("success" or "error")
    pub status: String,
    /// Human-readable message
    pub message: String,
    /// Optional response data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl IpcResponse {
    /// Creates a success response.
    pub fn success(message: impl Into<String>, data: Option<ResponseData>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
            data,
        }
    }

    /// Creates an error response.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            data: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
