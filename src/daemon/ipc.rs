//! IPC Server for the Focus Timer.
//!
//! This module provides Unix Domain Socket IPC functionality:
//! - Server that listens on a Unix socket
//! - Request/response handling for timer commands
//! - Integration with TimerEngine for command execution

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{UnixListener, UnixStream};
use tokio::sync::Mutex;
use tokio::time::{timeout, Duration};

use crate::types::{ConfigParams, IpcRequest, IpcResponse, ResponseData};

use super::timer::TimerEngine;

// ============================================================================
// Constants
// ============================================================================

/// Maximum request size in bytes (4KB)
const MAX_REQUEST_SIZE: usize = 4096;

/// Read timeout in seconds
const READ_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// IpcError
// ============================================================================

/// IPC-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum IpcError {
    /// Read error
    #[error("Failed to read request: {0}")]
    ReadError(String),

    /// Write error
    #[error("Failed to write response: {0}")]
    WriteError(String),

    /// Timeout error
    #[error("Operation timed out")]
    Timeout,

    /// Request too large
    #[error("Request too large (max {MAX_REQUEST_SIZE} bytes)")]
    RequestTooLarge,
}

// ============================================================================
// IpcServer
// ============================================================================

/// Unix Domain Socket IPC server.
pub struct IpcServer {
    /// Unix socket listener
    listener: UnixListener,
    /// Socket path (for cleanup)
    socket_path: PathBuf,
}

impl IpcServer {
    /// Creates a new IPC server bound to the specified socket path.
    ///
    /// If the socket file already exists, it will be removed before binding.
    ///
    /// # Errors
    ///
    /// Returns an error if the socket cannot be bound.
    pub fn new(socket_path: &Path) -> Result<Self> {
        // Remove existing socket file if present
        if socket_path.exists() {
            std::fs::remove_file(socket_path)
                .with_context(|| format!("Failed to remove existing socket: {:?}", socket_path))?;
        }

        // Ensure parent directory exists
        if let Some(parent) = socket_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create socket directory: {:?}", parent))?;
        }

        let listener = UnixListener::bind(socket_path)
            .with_context(|| format!("Failed to bind Unix socket: {:?}", socket_path))?;

        Ok(Self {
            listener,
            socket_path: socket_path.to_path_buf(),
        })
    }

    /// Accepts an incoming client connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be accepted.
    pub async fn accept(&self) -> Result<UnixStream> {
        let (stream, _addr) = self
            .listener
            .accept()
            .await
            .context("Failed to accept connection")?;
        Ok(stream)
    }

    /// Receives and deserializes an IPC request from the stream.
    ///
    /// Applies a read timeout to prevent blocking indefinitely.
    ///
    /// # Errors
    ///
    /// Returns an error if reading or deserialization fails.
    pub async fn receive_request(stream: &mut UnixStream) -> Result<IpcRequest> {
        let mut buffer = vec![0u8; MAX_REQUEST_SIZE];

        let read_result = timeout(
            Duration::from_secs(READ_TIMEOUT_SECS),
            stream.read(&mut buffer),
        )
        .await;

        let n = match read_result {
            Ok(Ok(n)) => n,
            Ok(Err(e)) => return Err(IpcError::ReadError(e.to_string()).into()),
            Err(_) => return Err(IpcError::Timeout.into()),
        };

        if n == 0 {
            anyhow::bail!("Connection closed by client");
        }

        // A read that fills the whole buffer is a truncated request
        if n == MAX_REQUEST_SIZE {
            return Err(IpcError::RequestTooLarge.into());
        }

        let request: IpcRequest = serde_json::from_slice(&buffer[..n])
            .with_context(|| "Failed to deserialize IPC request")?;

        Ok(request)
    }

    /// Serializes and sends an IPC response to the stream.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub async fn send_response(stream: &mut UnixStream, response: &IpcResponse) -> Result<()> {
        let json = serde_json::to_vec(response).context("Failed to serialize IPC response")?;

        stream
            .write_all(&json)
            .await
            .map_err(|e| IpcError::WriteError(e.to_string()))?;
        stream
            .flush()
            .await
            .map_err(|e| IpcError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Returns the socket path.
    pub fn socket_path(&self) -> &Path {
        &self.socket_path
    }
}

impl Drop for IpcServer {
    fn drop(&mut self) {
        // Clean up socket file on drop
        let _ = std::fs::remove_file(&self.socket_path);
    }
}

// ============================================================================
// RequestHandler
// ============================================================================

/// Handles IPC requests by dispatching to TimerEngine.
pub struct RequestHandler {
    /// Shared reference to the timer engine
    engine: Arc<Mutex<TimerEngine>>,
}

impl RequestHandler {
    /// Creates a new request handler with the given timer engine.
    pub fn new(engine: Arc<Mutex<TimerEngine>>) -> Self {
        Self { engine }
    }

    /// Handles an IPC request and returns the appropriate response.
    pub async fn handle(&self, request: IpcRequest) -> IpcResponse {
        match request {
            IpcRequest::Start => self.transition(TimerEngine::start, "タイマーを開始しました").await,
            IpcRequest::Pause => {
                self.transition(TimerEngine::pause, "タイマーを一時停止しました")
                    .await
            }
            IpcRequest::Resume => {
                self.transition(TimerEngine::resume, "タイマーを再開しました")
                    .await
            }
            IpcRequest::Stop => self.transition(TimerEngine::stop, "タイマーを停止しました").await,
            IpcRequest::Toggle => self.handle_toggle().await,
            IpcRequest::Status => self.handle_status().await,
            IpcRequest::Config { params } => self.handle_config(params).await,
        }
    }

    /// Runs a transition on the engine and builds the response from the
    /// resulting state.
    async fn transition(
        &self,
        op: fn(&mut TimerEngine) -> Result<(), super::timer::TimerError>,
        message: &str,
    ) -> IpcResponse {
        let mut engine = self.engine.lock().await;

        match op(&mut engine) {
            Ok(()) => IpcResponse::success(message, Some(Self::snapshot(&engine))),
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the toggle command, reporting the transition it chose.
    async fn handle_toggle(&self) -> IpcResponse {
        let mut engine = self.engine.lock().await;

        match engine.toggle_running() {
            Ok(()) => {
                let message = match engine.status() {
                    crate::types::TimerStatus::Running => "タイマーを開始または再開しました",
                    crate::types::TimerStatus::Paused => "タイマーを一時停止しました",
                    crate::types::TimerStatus::Idle => "タイマーを停止しました",
                };
                IpcResponse::success(message, Some(Self::snapshot(&engine)))
            }
            Err(e) => IpcResponse::error(e.to_string()),
        }
    }

    /// Handles the status command.
    async fn handle_status(&self) -> IpcResponse {
        let engine = self.engine.lock().await;
        IpcResponse::success("", Some(Self::snapshot(&engine)))
    }

    /// Handles the config command. Adjustments are clamped, never rejected.
    async fn handle_config(&self, params: ConfigParams) -> IpcResponse {
        let mut engine = self.engine.lock().await;

        engine.adjust(params.focus, params.break_time);

        IpcResponse::success("設定を更新しました", Some(Self::snapshot(&engine)))
    }

    fn snapshot(engine: &TimerEngine) -> ResponseData {
        ResponseData::new(engine.status(), engine.current_session(), engine.config())
    }
}

// ============================================================================
// Tests
// ============================================================================
