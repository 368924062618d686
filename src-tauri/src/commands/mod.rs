//! Tauri IPC Commands
//!
//! These commands bridge the address bar webview to the Rust core.

pub mod diagnostics;
pub mod navigation;
pub mod webview;
pub mod windows;

use serde::Serialize;
use tauri::{AppHandle, Emitter, Manager};

use crate::state::AppState;

pub const MAIN_WINDOW_LABEL: &str = "main";
pub const UI_WEBVIEW_LABEL: &str = "ui-main";
pub const CONTENT_WEBVIEW_LABEL: &str = "content-main";

/// Height of the address bar strip, in logical pixels
pub const TOOLBAR_HEIGHT: f64 = 44.0;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Push the current browser state to the address bar
pub fn emit_state(app: &AppHandle) {
    let Some(state) = app.try_state::<AppState>() else {
        return;
    };

    let snapshot = state.browser().snapshot();
    if let Err(e) = app.emit_to(UI_WEBVIEW_LABEL, "browser-state", snapshot) {
        tracing::warn!(error = %e, "Failed to emit browser state");
    }
}
