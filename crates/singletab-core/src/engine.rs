//! Capabilities the browser needs from the platform
//!
//! The content webview and the window are owned by the shell; the core only
//! talks to them through these traits.

use crate::Result;

/// The web rendering surface
pub trait RenderingEngine: Send + Sync {
    /// Start loading `url`. Any string is accepted; what the engine cannot
    /// load it reports through its own error page.
    fn load(&self, url: &str) -> Result<()>;

    /// Reload the page currently shown
    fn reload(&self) -> Result<()>;

    /// URL the engine is currently showing, if any
    fn current_url(&self) -> Option<String>;
}

/// Window-level presentation hooks
pub trait WindowChrome {
    /// Move keyboard focus into the address bar and select its text
    fn focus_address_bar(&self) -> Result<()>;

    /// Float the window above normal windows, or return it to normal stacking
    fn set_always_on_top(&self, on_top: bool) -> Result<()>;
}
