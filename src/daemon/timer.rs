//! Timer engine for the Focus Timer.
//!
//! This module provides the core state machine:
//! - Idle / Running / Paused transitions with typed errors
//! - One-second countdown with a stale-tick guard
//! - Phase alternation (Focusing <-> On Break) on completion
//! - Event firing for the host's notification hooks

use thiserror::Error;
use tokio::sync::mpsc;

use crate::types::{DurationConfig, Session, SessionPhase, StepDirection, TimerStatus};

// ============================================================================
// TimerError
// ============================================================================

/// Errors raised by the timer state machine.
///
/// Every variant except [`TimerError::ChannelClosed`] is an invalid
/// transition: a command invoked from a state that does not permit it. These
/// are surfaced to the caller, never silently swallowed. Duration adjustments
/// have no error variant at all because hitting a bound is a documented
/// no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimerError {
    /// `start` was invoked while a session already exists.
    #[error("タイマーは既に実行中です")]
    AlreadyActive,

    /// `pause` was invoked while the timer is not running.
    #[error("タイマーは実行されていません")]
    NotRunning,

    /// `resume` was invoked while the timer is not paused.
    #[error("タイマーは一時停止していません")]
    NotPaused,

    /// `stop` was invoked while no session exists.
    #[error("タイマーは開始されていません")]
    NotActive,

    /// The event receiver was dropped.
    #[error("イベントチャネルが閉じられています")]
    ChannelClosed,
}

impl TimerError {
    /// Returns true if this error is an invalid state transition.
    #[must_use]
    pub fn is_invalid_transition(&self) -> bool {
        !matches!(self, Self::ChannelClosed)
    }
}

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events delivered to the host (notification sink).
#[derive(Debug, Clone, PartialEq)]
pub enum TimerEvent {
    /// A fresh focus session was started from idle
    Started {
        /// Phase of the new session
        phase: SessionPhase,
        /// Snapshotted duration in minutes
        duration_minutes: u32,
    },
    /// The countdown was paused
    Paused,
    /// The countdown was resumed
    Resumed,
    /// The session was discarded
    Stopped,
    /// One second elapsed
    Tick {
        /// Remaining seconds after the tick
        remaining_seconds: u32,
    },
    /// A phase ran out and the session flipped to the opposite phase.
    ///
    /// This is the hook the host uses to play its audio/visual cue; the
    /// engine itself performs no I/O for it.
    PhaseCompleted {
        /// The phase that just finished
        previous: SessionPhase,
        /// The phase that just began
        next: SessionPhase,
    },
}

// ============================================================================
// TimerEngine
// ============================================================================

/// The timer state machine.
///
/// Owns the duration config, at most one live [`Session`], and the running
/// flag. The status is derived: no session is Idle, a session with the
/// running flag set is Running, otherwise Paused. All mutation happens
/// through the transition methods; the host clock delivers `tick()` once per
/// second while Running.
pub struct TimerEngine {
    /// Configured durations; read only at session construction time
    config: DurationConfig,
    /// The live session, if any
    session: Option<Session>,
    /// Whether the countdown is advancing
    running: bool,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TimerEngine {
    /// Creates a new idle engine with the given configuration and event
    /// channel.
    pub fn new(config: DurationConfig, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            config,
            session: None,
            running: false,
            event_tx,
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Starts a new focus session.
    ///
    /// Valid only from Idle; the session snapshots the current focus
    /// duration.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::AlreadyActive`] if a session already exists.
    pub fn start(&mut self) -> Result<(), TimerError> {
        if self.session.is_some() {
            return Err(TimerError::AlreadyActive);
        }

        let session = Session::new(SessionPhase::Focusing, &self.config);
        self.send(TimerEvent::Started {
            phase: session.phase,
            duration_minutes: session.duration_minutes,
        })?;
        self.session = Some(session);
        self.running = true;

        Ok(())
    }

    /// Pauses the running countdown. Remaining time is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotRunning`] unless the timer is Running.
    pub fn pause(&mut self) -> Result<(), TimerError> {
        if self.status() != TimerStatus::Running {
            return Err(TimerError::NotRunning);
        }

        self.running = false;
        self.send(TimerEvent::Paused)?;

        Ok(())
    }

    /// Resumes a paused countdown.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotPaused`] unless the timer is Paused.
    pub fn resume(&mut self) -> Result<(), TimerError> {
        if self.status() != TimerStatus::Paused {
            return Err(TimerError::NotPaused);
        }

        self.running = true;
        self.send(TimerEvent::Resumed)?;

        Ok(())
    }

    /// Convenience combinator: start from Idle, pause from Running, resume
    /// from Paused.
    pub fn toggle_running(&mut self) -> Result<(), TimerError> {
        match self.status() {
            TimerStatus::Idle => self.start(),
            TimerStatus::Running => self.pause(),
            TimerStatus::Paused => self.resume(),
        }
    }

    /// Stops the timer and discards the session.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotActive`] if no session exists.
    pub fn stop(&mut self) -> Result<(), TimerError> {
        if self.session.is_none() {
            return Err(TimerError::NotActive);
        }

        self.session = None;
        self.running = false;
        self.send(TimerEvent::Stopped)?;

        Ok(())
    }

    /// Advances the countdown by one second.
    ///
    /// A tick delivered while the timer is not Running is a silent no-op,
    /// not an error: a previously scheduled tick arriving after `pause()` or
    /// `stop()` must never mutate state. While Running the countdown
    /// decrements (floored at zero); on reaching zero the engine fires
    /// [`TimerEvent::PhaseCompleted`] exactly once and replaces the session
    /// with one for the opposite phase, reading that phase's duration from
    /// the config at this instant. The engine stays Running across the flip.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::ChannelClosed`] if the event receiver was
    /// dropped.
    pub fn tick(&mut self) -> Result<(), TimerError> {
        if !self.running {
            return Ok(());
        }
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        let completed = session.tick();
        let remaining_seconds = session.remaining_seconds;
        self.send(TimerEvent::Tick { remaining_seconds })?;

        if completed {
            self.complete_phase()?;
        }

        Ok(())
    }

    /// Handles phase completion: notify, then alternate.
    fn complete_phase(&mut self) -> Result<(), TimerError> {
        let Some(session) = self.session.as_ref() else {
            return Ok(());
        };

        let next = session.next(&self.config);
        self.send(TimerEvent::PhaseCompleted {
            previous: session.phase,
            next: next.phase,
        })?;
        self.session = Some(next);

        Ok(())
    }

    // ------------------------------------------------------------------
    // Duration adjustments
    // ------------------------------------------------------------------

    /// Increases the focus duration by one step (no-op at the bound).
    ///
    /// Always permitted, even mid-session: the active session's snapshot is
    /// unaffected.
    pub fn increase_focus(&mut self) {
        self.config.increase_focus();
    }

    /// Decreases the focus duration by one step (no-op at the bound).
    pub fn decrease_focus(&mut self) {
        self.config.decrease_focus();
    }

    /// Increases the break duration by one step (no-op at the bound).
    pub fn increase_break(&mut self) {
        self.config.increase_break();
    }

    /// Decreases the break duration by one step (no-op at the bound).
    pub fn decrease_break(&mut self) {
        self.config.decrease_break();
    }

    /// Applies an optional step direction to each duration.
    pub fn adjust(&mut self, focus: Option<StepDirection>, break_time: Option<StepDirection>) {
        match focus {
            Some(StepDirection::Up) => self.increase_focus(),
            Some(StepDirection::Down) => self.decrease_focus(),
            None => {}
        }
        match break_time {
            Some(StepDirection::Up) => self.increase_break(),
            Some(StepDirection::Down) => self.decrease_break(),
            None => {}
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Returns the derived timer status.
    pub fn status(&self) -> TimerStatus {
        match (&self.session, self.running) {
            (None, _) => TimerStatus::Idle,
            (Some(_), true) => TimerStatus::Running,
            (Some(_), false) => TimerStatus::Paused,
        }
    }

    /// Returns the current session, if any.
    pub fn current_session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the current duration configuration.
    pub fn config(&self) -> &DurationConfig {
        &self.config
    }

    /// Returns the remaining time formatted as `MM:SS`, or None when Idle.
    pub fn remaining_display(&self) -> Option<String> {
        self.session.as_ref().map(Session::remaining_display)
    }

    /// Returns the configured minutes for the current phase, or None when
    /// Idle.
    pub fn total_display_minutes(&self) -> Option<u32> {
        self.session.as_ref().map(Session::total_display_minutes)
    }

    /// Returns the elapsed progress percentage, or None when Idle.
    pub fn progress_percent(&self) -> Option<f64> {
        self.session.as_ref().map(Session::progress_percent)
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn send(&self, event: TimerEvent) -> Result<(), TimerError> {
        self.event_tx
            .send(event)
            .map_err(|_| TimerError::ChannelClosed)
    }

    /// Returns a mutable reference to the session (for testing).
    #[cfg(test)]
    fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_engine() -> (TimerEngine, mpsc::UnboundedReceiver<TimerEvent>) {
        create_engine_with_config(DurationConfig::default())
    }

    fn create_engine_with_config(
        config: DurationConfig,
    ) -> (TimerEngine, mpsc::UnboundedReceiver<TimerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let engine = TimerEngine::new(config, tx);
        (engine, rx)
    }

    /// Drains the event channel and returns everything received so far.
    fn drain(rx: &mut mpsc::UnboundedReceiver<TimerEvent>) -> Vec<TimerEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    // ------------------------------------------------------------------------
    // Transition Tests
    // ------------------------------------------------------------------------

    mod transition_tests {
        use super::*;

        #[test]
        fn test_new_engine_is_idle() {
            let (engine, _rx) = create_engine();

            assert_eq!(engine.status(), TimerStatus::Idle);
            assert!(engine.current_session().is_none());
        }

        #[test]
        fn test_start_creates_focusing_session() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();

            assert_eq!(engine.status(), TimerStatus::Running);
            let session = engine.current_session().unwrap();
            assert_eq!(session.phase, SessionPhase::Focusing);
            assert_eq!(session.remaining_seconds, 25 * 60);

            let event = rx.try_recv().unwrap();
            assert_eq!(
                event,
                TimerEvent::Started {
                    phase: SessionPhase::Focusing,
                    duration_minutes: 25
                }
            );
        }

        #[test]
        fn test_start_uses_current_config() {
            let config = DurationConfig {
                focus_minutes: 50,
                break_minutes: 10,
            };
            let (mut engine, _rx) = create_engine_with_config(config);

            engine.start().unwrap();

            let session = engine.current_session().unwrap();
            assert_eq!(session.remaining_seconds, 50 * 60);
            assert_eq!(session.duration_minutes, 50);
        }

        #[test]
        fn test_start_while_running_is_error() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            let result = engine.start();

            assert_eq!(result, Err(TimerError::AlreadyActive));
            // State was not corrupted
            assert_eq!(engine.status(), TimerStatus::Running);
        }

        #[test]
        fn test_start_while_paused_is_error() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            engine.pause().unwrap();

            assert_eq!(engine.start(), Err(TimerError::AlreadyActive));
            assert_eq!(engine.status(), TimerStatus::Paused);
        }

        #[test]
        fn test_pause_keeps_remaining_time() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.session_mut().unwrap().remaining_seconds = 1000;

            engine.pause().unwrap();

            assert_eq!(engine.status(), TimerStatus::Paused);
            assert_eq!(engine.current_session().unwrap().remaining_seconds, 1000);

            let events = drain(&mut rx);
            assert_eq!(events.last(), Some(&TimerEvent::Paused));
        }

        #[test]
        fn test_pause_while_idle_is_error() {
            let (mut engine, _rx) = create_engine();
            assert_eq!(engine.pause(), Err(TimerError::NotRunning));
        }

        #[test]
        fn test_pause_while_paused_is_error() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            engine.pause().unwrap();

            assert_eq!(engine.pause(), Err(TimerError::NotRunning));
        }

        #[test]
        fn test_resume_restores_running() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.session_mut().unwrap().remaining_seconds = 500;
            engine.pause().unwrap();

            engine.resume().unwrap();

            assert_eq!(engine.status(), TimerStatus::Running);
            assert_eq!(engine.current_session().unwrap().remaining_seconds, 500);

            let events = drain(&mut rx);
            assert_eq!(events.last(), Some(&TimerEvent::Resumed));
        }

        #[test]
        fn test_resume_while_idle_is_error() {
            let (mut engine, _rx) = create_engine();
            assert_eq!(engine.resume(), Err(TimerError::NotPaused));
        }

        #[test]
        fn test_resume_while_running_is_error() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();

            assert_eq!(engine.resume(), Err(TimerError::NotPaused));
        }

        #[test]
        fn test_stop_from_running() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.stop().unwrap();

            assert_eq!(engine.status(), TimerStatus::Idle);
            assert!(engine.current_session().is_none());

            let events = drain(&mut rx);
            assert_eq!(events.last(), Some(&TimerEvent::Stopped));
        }

        #[test]
        fn test_stop_from_paused() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            engine.pause().unwrap();
            engine.stop().unwrap();

            assert_eq!(engine.status(), TimerStatus::Idle);
        }

        #[test]
        fn test_stop_while_idle_is_error() {
            let (mut engine, _rx) = create_engine();
            assert_eq!(engine.stop(), Err(TimerError::NotActive));
        }

        #[test]
        fn test_start_after_stop_uses_current_config() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            engine.increase_focus();
            engine.stop().unwrap();

            engine.start().unwrap();

            let session = engine.current_session().unwrap();
            assert_eq!(session.phase, SessionPhase::Focusing);
            assert_eq!(session.remaining_seconds, 30 * 60);
        }

        #[test]
        fn test_toggle_cycles_start_pause_resume() {
            let (mut engine, _rx) = create_engine();

            engine.toggle_running().unwrap();
            assert_eq!(engine.status(), TimerStatus::Running);

            engine.toggle_running().unwrap();
            assert_eq!(engine.status(), TimerStatus::Paused);

            engine.toggle_running().unwrap();
            assert_eq!(engine.status(), TimerStatus::Running);
        }
    }

    // ------------------------------------------------------------------------
    // Tick Tests
    // ------------------------------------------------------------------------

    mod tick_tests {
        use super::*;

        #[test]
        fn test_tick_decrements_by_one() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            engine.tick().unwrap();

            assert_eq!(
                engine.current_session().unwrap().remaining_seconds,
                25 * 60 - 1
            );
        }

        #[test]
        fn test_n_ticks_decrement_by_n() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            for _ in 0..100 {
                engine.tick().unwrap();
            }

            let session = engine.current_session().unwrap();
            assert_eq!(session.remaining_seconds, 25 * 60 - 100);
            assert_eq!(session.phase, SessionPhase::Focusing);
        }

        #[test]
        fn test_tick_emits_tick_event() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            let _ = rx.try_recv(); // consume Started

            engine.tick().unwrap();

            let event = rx.try_recv().unwrap();
            assert_eq!(
                event,
                TimerEvent::Tick {
                    remaining_seconds: 25 * 60 - 1
                }
            );
        }

        #[test]
        fn test_tick_while_idle_is_noop() {
            let (mut engine, mut rx) = create_engine();

            engine.tick().unwrap();

            assert_eq!(engine.status(), TimerStatus::Idle);
            assert!(rx.try_recv().is_err());
        }

        #[test]
        fn test_stale_ticks_after_pause_do_not_mutate() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.tick().unwrap();
            engine.pause().unwrap();
            let remaining = engine.current_session().unwrap().remaining_seconds;
            let _ = drain(&mut rx);

            // A late-arriving scheduled tick must be ignored
            for _ in 0..10 {
                engine.tick().unwrap();
            }

            assert_eq!(
                engine.current_session().unwrap().remaining_seconds,
                remaining
            );
            assert_eq!(engine.status(), TimerStatus::Paused);
            assert!(rx.try_recv().is_err());
        }

        #[test]
        fn test_stale_ticks_after_stop_do_not_resurrect_state() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.stop().unwrap();
            let _ = drain(&mut rx);

            for _ in 0..10 {
                engine.tick().unwrap();
            }

            assert_eq!(engine.status(), TimerStatus::Idle);
            assert!(engine.current_session().is_none());
            assert!(rx.try_recv().is_err());
        }

        #[test]
        fn test_phase_flip_focusing_to_break() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.session_mut().unwrap().remaining_seconds = 1;
            let _ = drain(&mut rx);

            engine.tick().unwrap();

            let session = engine.current_session().unwrap();
            assert_eq!(session.phase, SessionPhase::OnBreak);
            assert_eq!(session.remaining_seconds, 5 * 60);
            // Still running across the transition
            assert_eq!(engine.status(), TimerStatus::Running);

            let events = drain(&mut rx);
            assert_eq!(
                events,
                vec![
                    TimerEvent::Tick {
                        remaining_seconds: 0
                    },
                    TimerEvent::PhaseCompleted {
                        previous: SessionPhase::Focusing,
                        next: SessionPhase::OnBreak,
                    },
                ]
            );
        }

        #[test]
        fn test_phase_flip_break_to_focusing() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.session_mut().unwrap().remaining_seconds = 1;
            engine.tick().unwrap(); // now OnBreak
            engine.session_mut().unwrap().remaining_seconds = 1;
            let _ = drain(&mut rx);

            engine.tick().unwrap();

            let session = engine.current_session().unwrap();
            assert_eq!(session.phase, SessionPhase::Focusing);
            assert_eq!(session.remaining_seconds, 25 * 60);

            let events = drain(&mut rx);
            assert!(events.contains(&TimerEvent::PhaseCompleted {
                previous: SessionPhase::OnBreak,
                next: SessionPhase::Focusing,
            }));
        }

        #[test]
        fn test_phase_completed_fires_exactly_once_per_transition() {
            let config = DurationConfig {
                focus_minutes: 5,
                break_minutes: 1,
            };
            let (mut engine, mut rx) = create_engine_with_config(config);

            engine.start().unwrap();
            // One full focus phase plus one full break phase
            for _ in 0..(5 * 60 + 60) {
                engine.tick().unwrap();
            }

            let completions = drain(&mut rx)
                .into_iter()
                .filter(|e| matches!(e, TimerEvent::PhaseCompleted { .. }))
                .count();
            assert_eq!(completions, 2);
        }

        #[test]
        fn test_flip_uses_config_captured_at_transition() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            // Mid-session edit: must not touch the running countdown, but
            // must govern the break constructed at the flip
            engine.increase_break();
            engine.increase_break();
            assert_eq!(
                engine.current_session().unwrap().remaining_seconds,
                25 * 60
            );

            engine.session_mut().unwrap().remaining_seconds = 1;
            engine.tick().unwrap();

            let session = engine.current_session().unwrap();
            assert_eq!(session.phase, SessionPhase::OnBreak);
            assert_eq!(session.remaining_seconds, 7 * 60);
        }

        #[test]
        fn test_tick_on_expired_session_completes_without_underflow() {
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            engine.session_mut().unwrap().remaining_seconds = 0;
            let _ = drain(&mut rx);

            engine.tick().unwrap();

            let session = engine.current_session().unwrap();
            assert_eq!(session.phase, SessionPhase::OnBreak);
            assert_eq!(session.remaining_seconds, 5 * 60);
        }

        #[test]
        fn test_full_default_scenario() {
            // focus 25 min -> start -> {Focusing, 1500s}; 1500 ticks ->
            // {OnBreak, 300s}; completion fired once; display checks.
            let (mut engine, mut rx) = create_engine();

            engine.start().unwrap();
            assert_eq!(engine.current_session().unwrap().remaining_seconds, 1500);

            for _ in 0..(1500 - 65) {
                engine.tick().unwrap();
            }
            assert_eq!(engine.remaining_display().as_deref(), Some("01:05"));

            for _ in 0..65 {
                engine.tick().unwrap();
            }

            let session = engine.current_session().unwrap();
            assert_eq!(session.phase, SessionPhase::OnBreak);
            assert_eq!(session.remaining_seconds, 300);

            let completions: Vec<_> = drain(&mut rx)
                .into_iter()
                .filter(|e| matches!(e, TimerEvent::PhaseCompleted { .. }))
                .collect();
            assert_eq!(
                completions,
                vec![TimerEvent::PhaseCompleted {
                    previous: SessionPhase::Focusing,
                    next: SessionPhase::OnBreak,
                }]
            );
        }
    }

    // ------------------------------------------------------------------------
    // Query Tests
    // ------------------------------------------------------------------------

    mod query_tests {
        use super::*;

        #[test]
        fn test_queries_absent_while_idle() {
            let (engine, _rx) = create_engine();

            assert!(engine.remaining_display().is_none());
            assert!(engine.total_display_minutes().is_none());
            assert!(engine.progress_percent().is_none());
        }

        #[test]
        fn test_remaining_display_running() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            engine.session_mut().unwrap().remaining_seconds = 1505;

            assert_eq!(engine.remaining_display().as_deref(), Some("25:05"));
        }

        #[test]
        fn test_total_display_minutes_is_configured_total() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            for _ in 0..90 {
                engine.tick().unwrap();
            }

            // Total reflects the configured duration, not the remaining time
            assert_eq!(engine.total_display_minutes(), Some(25));
        }

        #[test]
        fn test_progress_starts_at_zero_and_grows() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            assert_eq!(engine.progress_percent(), Some(0.0));

            let mut previous = 0.0;
            for _ in 0..200 {
                engine.tick().unwrap();
                let current = engine.progress_percent().unwrap();
                assert!(current >= previous);
                assert!((0.0..=100.0).contains(&current));
                previous = current;
            }
            assert!(previous > 0.0);
        }

        #[test]
        fn test_queries_are_side_effect_free() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            let before = engine.current_session().unwrap().clone();

            let _ = engine.remaining_display();
            let _ = engine.progress_percent();
            let _ = engine.total_display_minutes();
            let _ = engine.status();

            assert_eq!(engine.current_session().unwrap(), &before);
        }
    }

    // ------------------------------------------------------------------------
    // Adjustment Tests
    // ------------------------------------------------------------------------

    mod adjustment_tests {
        use super::*;

        #[test]
        fn test_adjust_applies_directions() {
            let (mut engine, _rx) = create_engine();

            engine.adjust(Some(StepDirection::Up), Some(StepDirection::Down));

            assert_eq!(engine.config().focus_minutes, 30);
            assert_eq!(engine.config().break_minutes, 4);
        }

        #[test]
        fn test_adjust_none_is_noop() {
            let (mut engine, _rx) = create_engine();

            engine.adjust(None, None);

            assert_eq!(engine.config(), &DurationConfig::default());
        }

        #[test]
        fn test_adjust_allowed_mid_session_without_touching_countdown() {
            let (mut engine, _rx) = create_engine();

            engine.start().unwrap();
            for _ in 0..10 {
                engine.tick().unwrap();
            }
            let remaining = engine.current_session().unwrap().remaining_seconds;

            engine.adjust(Some(StepDirection::Down), Some(StepDirection::Up));

            assert_eq!(
                engine.current_session().unwrap().remaining_seconds,
                remaining
            );
            assert_eq!(engine.config().focus_minutes, 20);
        }
    }

    // ------------------------------------------------------------------------
    // Error Tests
    // ------------------------------------------------------------------------

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_display() {
            assert!(TimerError::AlreadyActive.to_string().contains("既に実行中"));
            assert!(TimerError::NotRunning
                .to_string()
                .contains("実行されていません"));
            assert!(TimerError::NotPaused
                .to_string()
                .contains("一時停止していません"));
            assert!(TimerError::NotActive
                .to_string()
                .contains("開始されていません"));
        }

        #[test]
        fn test_is_invalid_transition() {
            assert!(TimerError::AlreadyActive.is_invalid_transition());
            assert!(TimerError::NotRunning.is_invalid_transition());
            assert!(TimerError::NotPaused.is_invalid_transition());
            assert!(TimerError::NotActive.is_invalid_transition());
            assert!(!TimerError::ChannelClosed.is_invalid_transition());
        }

        #[test]
        fn test_tick_with_dropped_receiver_is_channel_closed() {
            let (mut engine, rx) = create_engine();

            engine.start().unwrap();
            drop(rx);

            assert_eq!(engine.tick(), Err(TimerError::ChannelClosed));
        }
    }
}
