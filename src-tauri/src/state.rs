//! Application state management
use singletab_core::{Browser, Config, Result};
use std::sync::Arc;

/// Thread-safe application state wrapper
pub struct AppState {
    browser: Arc<Browser>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            browser: Arc::new(Browser::new(config)),
        }
    }

    pub fn browser(&self) -> Arc<Browser> {
        Arc::clone(&self.browser)
    }

    pub fn with_browser<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Browser) -> Result<T>,
    {
        f(&self.browser)
    }
}
