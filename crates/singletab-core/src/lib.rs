//! single-tab Core
//!
//! Central coordination layer for the single-tab browser.
//! Rust owns all state; the webviews only render it.

mod browser;
mod config;
mod engine;
mod error;
mod shortcuts;

pub use browser::{Browser, BrowserSnapshot, LinkDecision, NavigationSource};
pub use config::{Config, WindowConfig};
pub use engine::{RenderingEngine, WindowChrome};
pub use error::CoreError;
pub use shortcuts::Shortcut;

// Re-export navigation components
pub use singletab_navigation::{
    same_document, InputResolver, NavigationRequest, RequestKind, SessionHistory,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
