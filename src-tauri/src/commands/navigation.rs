//! Navigation and address bar commands

use singletab_core::{BrowserSnapshot, NavigationRequest, NavigationSource};
use tauri::{AppHandle, State};

use super::{emit_state, CommandResult};
use crate::state::AppState;

#[tauri::command]
pub fn get_browser_state(state: State<AppState>) -> CommandResult<BrowserSnapshot> {
    CommandResult::ok(state.browser().snapshot())
}

/// Address bar submission: URL or search terms
#[tauri::command]
pub fn submit_address(
    app: AppHandle,
    state: State<AppState>,
    input: String,
) -> CommandResult<NavigationRequest> {
    let result = state.with_browser(|browser| browser.submit_input(&input));
    emit_state(&app);

    match result {
        Ok(request) => CommandResult::ok(request),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

/// Navigate to an already-formed URL, skipping input resolution
#[tauri::command]
pub fn navigate_to(app: AppHandle, state: State<AppState>, url: String) -> CommandResult<bool> {
    let result = state.with_browser(|browser| browser.navigate(&url, NavigationSource::User));
    emit_state(&app);

    match result {
        Ok(recorded) => CommandResult::ok(recorded),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn go_back(app: AppHandle, state: State<AppState>) -> CommandResult<Option<String>> {
    let result = state.with_browser(|browser| browser.back());
    emit_state(&app);

    match result {
        Ok(url) => CommandResult::ok(url),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn go_forward(app: AppHandle, state: State<AppState>) -> CommandResult<Option<String>> {
    let result = state.with_browser(|browser| browser.forward());
    emit_state(&app);

    match result {
        Ok(url) => CommandResult::ok(url),
        Err(e) => CommandResult::err(e.to_string()),
    }
}

#[tauri::command]
pub fn reload_page(state: State<AppState>) -> CommandResult<()> {
    match state.with_browser(|browser| browser.reload()) {
        Ok(()) => CommandResult::ok(()),
        Err(e) => CommandResult::err(e.to_string()),
    }
}
