//! Daemon module for the Focus Timer.
//!
//! This module contains the core daemon functionality:
//! - `timer`: Timer engine with state transitions and countdown logic
//! - `ipc`: Unix Domain Socket server and request handling

pub mod ipc;
pub mod timer;

pub use ipc::{IpcServer, RequestHandler};
pub use timer::{TimerEngine, TimerError, TimerEvent};

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::{mpsc, Mutex, Notify};
use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::types::{DurationConfig, TimerStatus};

/// Clock tick interval
const TICK_INTERVAL_SECS: u64 = 1;

/// Runs the daemon until Ctrl-C.
///
/// Wires together the timer engine, the one-second clock, the event
/// logger and the IPC accept loop. The engine is shared between the
/// clock task and request handlers behind a mutex; the clock is parked
/// while the timer is not running and woken after each handled request.
pub async fn run(socket_path: &Path) -> Result<()> {
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let engine = Arc::new(Mutex::new(TimerEngine::new(
        DurationConfig::default(),
        event_tx,
    )));
    let wake = Arc::new(Notify::new());

    let server = IpcServer::new(socket_path)?;
    tracing::info!("Daemonを起動しました: {:?}", server.socket_path());

    let clock_handle = tokio::spawn(run_clock(
        engine.clone(),
        wake.clone(),
        Duration::from_secs(TICK_INTERVAL_SECS),
    ));
    let logger_handle = tokio::spawn(log_events(event_rx));

    let handler = Arc::new(RequestHandler::new(engine));

    loop {
        tokio::select! {
            result = server.accept() => {
                match result {
                    Ok(mut stream) => {
                        let handler = handler.clone();
                        let wake = wake.clone();
                        tokio::spawn(async move {
                            if let Err(e) = handle_connection(&mut stream, &handler).await {
                                tracing::warn!("接続処理に失敗しました: {}", e);
                            }
                            // The request may have changed the timer state
                            wake.notify_one();
                        });
                    }
                    Err(e) => {
                        tracing::warn!("接続の受付に失敗しました: {}", e);
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("シャットダウンします");
                break;
            }
        }
    }

    clock_handle.abort();
    logger_handle.abort();

    Ok(())
}

/// Drives the engine clock, one tick per period.
///
/// The clock only runs while the timer is Running; in any other state it
/// parks on `wake` until a handled request changes the state. A wake
/// delivered before the clock parks is kept as a stored permit, so a
/// start cannot be missed. Missed ticks are skipped rather than bursted
/// to avoid jumping the countdown after a suspend.
async fn run_clock(engine: Arc<Mutex<TimerEngine>>, wake: Arc<Notify>, period: Duration) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        if engine.lock().await.status() != TimerStatus::Running {
            wake.notified().await;
            // Fresh cadence after a park, not a burst of owed ticks
            ticker.reset();
            continue;
        }

        ticker.tick().await;

        let mut engine = engine.lock().await;
        if let Err(e) = engine.tick() {
            // Only ChannelClosed reaches here; the daemon is going down
            tracing::error!("クロック停止: {}", e);
            break;
        }
    }
}

/// Logs timer events as they arrive.
async fn log_events(mut event_rx: mpsc::UnboundedReceiver<TimerEvent>) {
    while let Some(event) = event_rx.recv().await {
        match event {
            TimerEvent::Started {
                phase,
                duration_minutes,
            } => {
                tracing::info!("セッション開始: {} ({}分)", phase.label(), duration_minutes);
            }
            TimerEvent::Paused => tracing::info!("一時停止"),
            TimerEvent::Resumed => tracing::info!("再開"),
            TimerEvent::Stopped => tracing::info!("停止"),
            TimerEvent::Tick { remaining_seconds } => {
                tracing::trace!("tick: 残り{}秒", remaining_seconds);
            }
            TimerEvent::PhaseCompleted { previous, next } => {
                tracing::info!(
                    "フェーズ完了: {} -> {}",
                    previous.label(),
                    next.label()
                );
            }
        }
    }
}

/// Handles a single client connection.
async fn handle_connection(
    stream: &mut tokio::net::UnixStream,
    handler: &RequestHandler,
) -> Result<()> {
    let request = IpcServer::receive_request(stream).await?;
    tracing::debug!("リクエスト受信: {:?}", request);

    let response = handler.handle(request).await;
    IpcServer::send_response(stream, &response).await?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
