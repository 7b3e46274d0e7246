//! Display utilities for the Focus Timer CLI.
//!
//! This module provides formatted output for:
//! - Success messages
//! - Error messages
//! - Status display
//! - Timer information

use crate::types::{IpcResponse, ResponseData};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows a success message for timer start.
    pub fn show_start_success(response: &IpcResponse) {
        println!("* タイマーを開始しました");

        if let Some(data) = &response.data {
            Self::print_session_line(data);
        }
    }

    /// Shows a success message for timer pause.
    pub fn show_pause_success(response: &IpcResponse) {
        println!("|| タイマーを一時停止しました");

        if let Some(data) = &response.data {
            Self::print_session_line(data);
        }
    }

    /// Shows a success message for timer resume.
    pub fn show_resume_success(response: &IpcResponse) {
        println!("> タイマーを再開しました");

        if let Some(data) = &response.data {
            Self::print_session_line(data);
        }
    }

    /// Shows a success message for timer stop.
    pub fn show_stop_success(_response: &IpcResponse) {
        println!("[] タイマーを停止しました");
    }

    /// Shows the outcome of a toggle, based on the resulting state.
    pub fn show_toggle_success(response: &IpcResponse) {
        let state = response
            .data
            .as_ref()
            .and_then(|d| d.state.as_deref())
            .unwrap_or("unknown");

        match state {
            "running" => println!("> タイマーが動作中になりました"),
            "paused" => println!("|| タイマーを一時停止しました"),
            _ => println!("[] タイマーを停止しました"),
        }

        if let Some(data) = &response.data {
            Self::print_session_line(data);
        }
    }

    /// Shows the updated durations after a config adjustment.
    pub fn show_config_success(response: &IpcResponse) {
        println!("* 設定を更新しました");

        if let Some(data) = &response.data {
            if let Some(focus) = data.focus_minutes {
                println!("  集中時間: {}分", focus);
            }
            if let Some(break_min) = data.break_minutes {
                println!("  休憩時間: {}分", break_min);
            }
        }
    }

    /// Shows the current timer status.
    pub fn show_status(response: &IpcResponse) {
        println!("フォーカスタイマー ステータス");
        println!("─────────────────────────────");

        if let Some(data) = &response.data {
            let state = data.state.as_deref().unwrap_or("unknown");
            let state_display = match state {
                "running" => "動作中",
                "paused" => "一時停止中",
                "idle" => "停止中",
                _ => state,
            };
            println!("状態: {}", state_display);

            if state != "idle" {
                if let Some(phase) = data.phase.as_deref() {
                    println!("フェーズ: {}", Self::phase_display(phase));
                }
                if let Some(display) = &data.remaining_display {
                    println!("残り時間: {}", display);
                }
                if let Some(total) = data.total_minutes {
                    println!("セッション: {}分", total);
                }
                if let Some(percent) = data.progress_percent {
                    println!("進捗: {:.0}%", percent);
                }
            }

            if let (Some(focus), Some(break_min)) = (data.focus_minutes, data.break_minutes) {
                println!("設定: 集中{}分 / 休憩{}分", focus, break_min);
            }
        } else {
            println!("タイマーは起動していません");
        }
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("エラー: {}", message);
    }

    /// Prints the phase and remaining time line shared by transition output.
    fn print_session_line(data: &ResponseData) {
        if let Some(phase) = data.phase.as_deref() {
            println!("  フェーズ: {}", Self::phase_display(phase));
        }
        if let Some(display) = &data.remaining_display {
            println!("  残り時間: {}", display);
        }
    }

    /// Maps a wire phase string to its Japanese display label.
    fn phase_display(phase: &str) -> &str {
        match phase {
            "focusing" => "集中中",
            "on_break" => "休憩中",
            _ => phase,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
