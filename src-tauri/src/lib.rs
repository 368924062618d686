//! single-tab - Tauri Application
//!
//! - One window, one content webview, one address bar
//! - The address bar is a small local webview above the content
//! - Rust owns all state

mod commands;
mod menu;
mod state;

use singletab_core::Config;
use state::AppState;
use tauri::Manager;

fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid configuration, using defaults");
            Config::default()
        }
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    singletab_core::init_logging();

    tauri::Builder::default()
        .menu(menu::build)
        .on_menu_event(menu::handle_event)
        .setup(|app| {
            let config = load_config();

            // Store state in Tauri
            app.manage(AppState::new(config.clone()));

            let window = commands::windows::build_main_window(app.handle(), &config)?;
            commands::webview::attach_content_webview(app.handle(), &window, &config)?;
            commands::windows::layout_webviews(&window)?;

            tracing::info!(homepage = %config.homepage, "single-tab started");

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // Navigation commands
            commands::navigation::get_browser_state,
            commands::navigation::submit_address,
            commands::navigation::navigate_to,
            commands::navigation::go_back,
            commands::navigation::go_forward,
            commands::navigation::reload_page,
            // Window commands
            commands::windows::toggle_pin,
        ])
        .run(tauri::generate_context!())
        .expect("error while running single-tab");
}
