//! Content webview
//!
//! Creates the single child webview that renders pages and adapts it to the
//! core's `RenderingEngine`.

use std::sync::Arc;
use tauri::webview::{NewWindowResponse, PageLoadEvent, WebviewBuilder};
use tauri::{AppHandle, LogicalPosition, LogicalSize, Manager, Webview, WebviewUrl, Window};

use singletab_core::{Config, CoreError, LinkDecision, RenderingEngine};

use super::{emit_state, CONTENT_WEBVIEW_LABEL, TOOLBAR_HEIGHT};
use crate::state::AppState;

/// Links asking for a new window are retargeted to this one before the click
/// is handled. Anything that still asks for a window goes through
/// `on_new_window`.
const SAME_WINDOW_LINKS_SCRIPT: &str = r#"
(() => {
  try {
    const retarget = (event) => {
      const origin = event.target;
      if (!origin || typeof origin.closest !== 'function') return;
      const anchor = origin.closest('a[target]');
      if (anchor && anchor.target !== '_self') {
        anchor.target = '_self';
      }
    };
    document.addEventListener('click', retarget, true);
    document.addEventListener('auxclick', retarget, true);
  } catch {}
})();
"#;

/// `RenderingEngine` over a Tauri webview
pub struct WebviewEngine {
    webview: Webview,
}

impl WebviewEngine {
    pub fn new(webview: Webview) -> Self {
        Self { webview }
    }
}

impl RenderingEngine for WebviewEngine {
    fn load(&self, url: &str) -> singletab_core::Result<()> {
        let parsed: url::Url = url.parse().map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Engine cannot load URL");
            CoreError::Engine(format!("Invalid URL {}: {}", url, e))
        })?;

        self.webview
            .navigate(parsed)
            .map_err(|e| CoreError::Engine(format!("Navigation failed: {}", e)))?;

        tracing::debug!(url = %url, "Loading in content webview");
        Ok(())
    }

    fn reload(&self) -> singletab_core::Result<()> {
        self.webview
            .reload()
            .map_err(|e| CoreError::Engine(format!("Reload failed: {}", e)))
    }

    fn current_url(&self) -> Option<String> {
        self.webview.url().ok().map(|u| u.to_string())
    }
}

fn initial_url(homepage: &str) -> Result<url::Url, url::ParseError> {
    homepage.parse().or_else(|e| {
        tracing::warn!(homepage = %homepage, error = %e, "Invalid homepage, starting blank");
        "about:blank".parse()
    })
}

pub fn attach_content_webview(
    app: &AppHandle,
    window: &Window,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let app_handle_for_load = app.clone();
    let app_handle_for_title = app.clone();
    let app_handle_for_new_window = app.clone();

    let webview_builder = WebviewBuilder::new(
        CONTENT_WEBVIEW_LABEL,
        WebviewUrl::External(initial_url(&config.homepage)?),
    )
    .transparent(config.window.translucent)
    .user_agent(&config.user_agent)
    .enable_clipboard_access()
    .initialization_script_for_all_frames(SAME_WINDOW_LINKS_SCRIPT)
    .on_page_load(move |_webview, payload| {
        let url = payload.url().to_string();
        if let Some(state) = app_handle_for_load.try_state::<AppState>() {
            let browser = state.browser();
            let recorded = match payload.event() {
                PageLoadEvent::Started => browser.on_navigation_started(&url),
                // The page may have rewritten its URL while loading
                PageLoadEvent::Finished => {
                    browser.on_navigation_finished(&url) | browser.resync_with_engine()
                }
            };

            tracing::debug!(url = %url, event = ?payload.event(), recorded, "Page load");
        }

        emit_state(&app_handle_for_load);
    })
    // Single-page apps change the URL without a page load, usually alongside
    // the title
    .on_document_title_changed(move |_webview, _title| {
        if let Some(state) = app_handle_for_title.try_state::<AppState>() {
            if state.browser().resync_with_engine() {
                emit_state(&app_handle_for_title);
            }
        }
    })
    .on_new_window(move |url, _features| {
        if let Some(state) = app_handle_for_new_window.try_state::<AppState>() {
            match state.browser().intercept_new_window(&url) {
                Ok(LinkDecision::OpenInPlace(target)) => {
                    tracing::info!(url = %target, "Opening new window request in place");
                }
                Ok(LinkDecision::Ignore) => {}
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "Failed to open link in place");
                }
            }
        }

        emit_state(&app_handle_for_new_window);
        NewWindowResponse::Deny
    });

    let size = window
        .inner_size()?
        .to_logical::<f64>(window.scale_factor()?);

    let webview = window.add_child(
        webview_builder,
        LogicalPosition::new(0.0, TOOLBAR_HEIGHT),
        LogicalSize::new(size.width, (size.height - TOOLBAR_HEIGHT).max(0.0)),
    )?;

    if let Some(state) = app.try_state::<AppState>() {
        state
            .browser()
            .attach_engine(Arc::new(WebviewEngine::new(webview)));
    }

    tracing::info!(label = %CONTENT_WEBVIEW_LABEL, "Created content webview");

    Ok(())
}
