//! Application menu
//!
//! Keyboard shortcuts are menu accelerators so they work whichever webview
//! has focus.

use tauri::menu::{Menu, MenuBuilder, MenuEvent, MenuItemBuilder, SubmenuBuilder};
use tauri::{AppHandle, Manager, Wry};

use singletab_core::Shortcut;

use crate::commands::emit_state;
use crate::commands::windows::WindowShell;
use crate::state::AppState;

pub fn build(app: &AppHandle) -> tauri::Result<Menu<Wry>> {
    let app_menu = SubmenuBuilder::new(app, "single-tab")
        .hide()
        .separator()
        .quit()
        .build()?;

    // Without these the address bar loses copy/paste on macOS
    let edit_menu = SubmenuBuilder::new(app, "Edit")
        .undo()
        .redo()
        .separator()
        .cut()
        .copy()
        .paste()
        .select_all()
        .build()?;

    let mut navigate_menu = SubmenuBuilder::new(app, "Navigate");
    for shortcut in Shortcut::ALL {
        let item = MenuItemBuilder::with_id(shortcut.id(), shortcut.label())
            .accelerator(shortcut.accelerator())
            .build(app)?;
        navigate_menu = navigate_menu.item(&item);
    }
    let navigate_menu = navigate_menu.build()?;

    MenuBuilder::new(app)
        .item(&app_menu)
        .item(&edit_menu)
        .item(&navigate_menu)
        .build()
}

pub fn handle_event(app: &AppHandle, event: MenuEvent) {
    let Some(shortcut) = Shortcut::from_id(event.id().as_ref()) else {
        return;
    };

    let (Some(state), Some(shell)) = (app.try_state::<AppState>(), WindowShell::main(app)) else {
        return;
    };

    if let Err(e) = state.with_browser(|browser| browser.handle_shortcut(shortcut, &shell)) {
        tracing::warn!(shortcut = %shortcut, error = %e, "Shortcut failed");
    }

    emit_state(app);
}
