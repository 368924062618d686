//! Main window, its chrome and the address bar webview

use tauri::webview::WebviewBuilder;
use tauri::window::{Effect, EffectState, EffectsBuilder, WindowBuilder};
use tauri::{
    AppHandle, Emitter, LogicalPosition, LogicalSize, Manager, State, WebviewUrl, Window,
    WindowEvent,
};

use singletab_core::{Config, CoreError, WindowChrome};

use super::{
    emit_state, CommandResult, CONTENT_WEBVIEW_LABEL, MAIN_WINDOW_LABEL, TOOLBAR_HEIGHT,
    UI_WEBVIEW_LABEL,
};
use crate::state::AppState;

/// `WindowChrome` over the main Tauri window
pub struct WindowShell {
    window: Window,
}

impl WindowShell {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Shell for the main window, if it is still open
    pub fn main(app: &AppHandle) -> Option<Self> {
        app.get_window(MAIN_WINDOW_LABEL).map(Self::new)
    }
}

impl WindowChrome for WindowShell {
    fn focus_address_bar(&self) -> singletab_core::Result<()> {
        if let Some(ui) = self.window.get_webview(UI_WEBVIEW_LABEL) {
            ui.set_focus()
                .map_err(|e| CoreError::Chrome(format!("Failed to focus address bar: {}", e)))?;
        }

        self.window
            .emit_to(UI_WEBVIEW_LABEL, "focus-address-bar", ())
            .map_err(|e| CoreError::Chrome(e.to_string()))
    }

    fn set_always_on_top(&self, on_top: bool) -> singletab_core::Result<()> {
        self.window
            .set_always_on_top(on_top)
            .map_err(|e| CoreError::Chrome(format!("Failed to change window level: {}", e)))
    }
}

pub fn build_main_window(app: &AppHandle, config: &Config) -> tauri::Result<Window> {
    let window_config = &config.window;

    let mut builder = WindowBuilder::new(app, MAIN_WINDOW_LABEL)
        .title("single-tab")
        .inner_size(window_config.width, window_config.height)
        .min_inner_size(window_config.min_width, window_config.min_height)
        .always_on_top(window_config.always_on_top)
        .center();

    #[cfg(target_os = "macos")]
    {
        builder = builder
            .title_bar_style(tauri::TitleBarStyle::Overlay)
            .hidden_title(true);
    }

    if window_config.translucent {
        builder = builder.transparent(true).effects(
            EffectsBuilder::new()
                .effect(Effect::UnderWindowBackground)
                .state(EffectState::Active)
                .build(),
        );
    }

    let window = builder.build()?;

    let ui_webview = WebviewBuilder::new(UI_WEBVIEW_LABEL, WebviewUrl::App("index.html".into()))
        .transparent(window_config.translucent)
        .enable_clipboard_access();

    let ui_webview = window.add_child(
        ui_webview,
        LogicalPosition::new(0.0, 0.0),
        LogicalSize::new(window_config.width, TOOLBAR_HEIGHT),
    )?;
    let _ = ui_webview.show();

    let window_for_events = window.clone();
    window.on_window_event(move |event| {
        if matches!(
            event,
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. }
        ) {
            if let Err(e) = layout_webviews(&window_for_events) {
                tracing::warn!(error = %e, "Failed to lay out webviews");
            }
        }
    });

    Ok(window)
}

/// Address bar across the top, content below it
pub fn layout_webviews(window: &Window) -> tauri::Result<()> {
    let size = window
        .inner_size()?
        .to_logical::<f64>(window.scale_factor()?);

    if let Some(ui) = window.get_webview(UI_WEBVIEW_LABEL) {
        ui.set_position(LogicalPosition::new(0.0, 0.0))?;
        ui.set_size(LogicalSize::new(size.width, TOOLBAR_HEIGHT))?;
    }

    if let Some(content) = window.get_webview(CONTENT_WEBVIEW_LABEL) {
        content.set_position(LogicalPosition::new(0.0, TOOLBAR_HEIGHT))?;
        content.set_size(LogicalSize::new(
            size.width,
            (size.height - TOOLBAR_HEIGHT).max(0.0),
        ))?;
    }

    Ok(())
}

/// Float the window above others, or return it to normal stacking
#[tauri::command]
pub fn toggle_pin(app: AppHandle, window: Window, state: State<AppState>) -> CommandResult<bool> {
    let shell = WindowShell::new(window);
    let result = state.with_browser(|browser| browser.toggle_pinned(&shell));
    emit_state(&app);

    match result {
        Ok(pinned) => CommandResult::ok(pinned),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
