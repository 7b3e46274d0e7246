//! IPC Client for communicating with the Focus Timer daemon.
//!
//! This module provides:
//! - Unix Domain Socket client
//! - Request/response handling
//! - Connection retry logic
//! - Timeout handling

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tokio::time::timeout;

use crate::cli::commands::ConfigArgs;
use crate::types::{ConfigParams, IpcRequest, IpcResponse};

// ============================================================================
// Constants
// ============================================================================

/// Default socket path relative to $HOME
const DEFAULT_SOCKET_PATH: &str = ".focustimer/focustimer.sock";

/// Environment variable overriding the socket path
const SOCKET_ENV_VAR: &str = "FOCUSTIMER_SOCKET";

/// Connection timeout in seconds
const CONNECTION_TIMEOUT_SECS: u64 = 5;

/// Read/write timeout in seconds
const IO_TIMEOUT_SECS: u64 = 5;

/// Maximum response size in bytes (64KB)
const MAX_RESPONSE_SIZE: usize = 65536;

/// Maximum retry attempts
const MAX_RETRIES: u32 = 3;

/// Retry delay in milliseconds (base delay, multiplied by attempt number)
const RETRY_DELAY_MS: u64 = 500;

// ============================================================================
// IpcClient
// ============================================================================

/// IPC client for daemon communication.
pub struct IpcClient {
    /// Socket path
    socket_path: PathBuf,
    /// Connection timeout
    timeout: Duration,
}

impl IpcClient {
    /// Creates a new IPC client with the default socket path.
    pub fn new() -> Result<Self> {
        let socket_path = Self::default_socket_path()?;
        Ok(Self {
            socket_path,
            timeout: Duration::from_secs(CONNECTION_TIMEOUT_SECS),
        })
    }

    /// Creates a new IPC client with a custom socket path.
    pub fn with_socket_path(socket_path: PathBuf) -> Self {
        Self {
            socket_path,
            timeout: Duration::from_secs(CONNECTION_TIMEOUT_SECS),
        }
    }

    /// Returns the default socket path.
    ///
    /// FOCUSTIMER_SOCKET takes precedence over the $HOME-relative default.
    pub fn default_socket_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(SOCKET_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let home = std::env::var("HOME").context("HOME環境変数が設定されていません")?;
        Ok(PathBuf::from(home).join(DEFAULT_SOCKET_PATH))
    }

    /// Returns the socket path.
    pub fn socket_path(&self) -> &PathBuf {
        &self.socket_path
    }

    /// Sends a start command to the daemon.
    pub async fn start(&self) -> Result<IpcResponse> {
        self.send_request_with_retry(&IpcRequest::Start).await
    }

    /// Sends a pause command to the daemon.
    pub async fn pause(&self) -> Result<IpcResponse> {
        self.send_request_with_retry(&IpcRequest::Pause).await
    }

    /// Sends a resume command to the daemon.
    pub async fn resume(&self) -> Result<IpcResponse> {
        self.send_request_with_retry(&IpcRequest::Resume).await
    }

    /// Sends a stop command to the daemon.
    pub async fn stop(&self) -> Result<IpcResponse> {
        self.send_request_with_retry(&IpcRequest::Stop).await
    }

    /// Sends a toggle command to the daemon.
    pub async fn toggle(&self) -> Result<IpcResponse> {
        self.send_request_with_retry(&IpcRequest::Toggle).await
    }

    /// Sends a status query to the daemon.
    pub async fn status(&self) -> Result<IpcResponse> {
        self.send_request_with_retry(&IpcRequest::Status).await
    }

    /// Sends a config adjustment to the daemon.
    pub async fn config(&self, args: &ConfigArgs) -> Result<IpcResponse> {
        let params = ConfigParams {
            focus: args.focus.map(Into::into),
            break_time: args.break_time.map(Into::into),
        };

        let request = IpcRequest::Config { params };
        self.send_request_with_retry(&request).await
    }

    /// Sends a request to the daemon with retry logic.
    ///
    /// Only transport failures are retried. An error-status response is the
    /// daemon's definitive answer: it is surfaced immediately and the
    /// command is never re-invoked, so a rejected transition is sent exactly
    /// once.
    async fn send_request_with_retry(&self, request: &IpcRequest) -> Result<IpcResponse> {
        let mut last_error = None;

        for attempt in 1..=MAX_RETRIES {
            match self.send_request(request).await {
                Ok(response) => {
                    if response.status == "error" {
                        anyhow::bail!("{}", response.message);
                    }
                    return Ok(response);
                }
                Err(e) => {
                    tracing::warn!("リクエスト失敗 (試行 {}/{}): {}", attempt, MAX_RETRIES, e);
                    last_error = Some(e);

                    if attempt < MAX_RETRIES {
                        let delay = Duration::from_millis(RETRY_DELAY_MS * u64::from(attempt));
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error.unwrap())
    }

    /// Sends a single request to the daemon.
    async fn send_request(&self, request: &IpcRequest) -> Result<IpcResponse> {
        // Connect with timeout
        let mut stream = timeout(self.timeout, UnixStream::connect(&self.socket_path))
            .await
            .context("接続がタイムアウトしました")?
            .context("Daemonに接続できません。'focustimer daemon' を起動してください")?;

        // Serialize request
        let request_json =
            serde_json::to_string(request).context("リクエストのシリアライズに失敗しました")?;

        // Send request with timeout
        timeout(
            Duration::from_secs(IO_TIMEOUT_SECS),
            stream.write_all(request_json.as_bytes()),
        )
        .await
        .context("書き込みがタイムアウトしました")?
        .context("リクエストの送信に失敗しました")?;

        // Flush
        timeout(Duration::from_secs(IO_TIMEOUT_SECS), stream.flush())
            .await
            .context("フラッシュがタイムアウトしました")?
            .context("フラッシュに失敗しました")?;

        // Shutdown write side to signal end of request
        stream
            .shutdown()
            .await
            .context("シャットダウンに失敗しました")?;

        // Read response with timeout
        let mut buffer = vec![0u8; MAX_RESPONSE_SIZE];
        let n = timeout(
            Duration::from_secs(IO_TIMEOUT_SECS),
            stream.read(&mut buffer),
        )
        .await
        .context("読み込みがタイムアウトしました")?
        .context("レスポンスの受信に失敗しました")?;

        if n == 0 {
            anyhow::bail!("Daemonからの応答がありませんでした");
        }

        // Deserialize response
        let response: IpcResponse =
            serde_json::from_slice(&buffer[..n]).context("レスポンスのパースに失敗しました")?;

        Ok(response)
    }
}

// ============================================================================
// Tests
// ============================================================================
