//! Keyboard shortcuts
//!
//! - `CmdOrCtrl+L` focuses the address bar
//! - `CmdOrCtrl+R` reloads the current page

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shortcut {
    FocusAddressBar,
    ForceReload,
}

impl Shortcut {
    pub const ALL: [Shortcut; 2] = [Shortcut::FocusAddressBar, Shortcut::ForceReload];

    /// Stable id used for the menu item bound to this shortcut
    pub fn id(&self) -> &'static str {
        match self {
            Shortcut::FocusAddressBar => "focus-address-bar",
            Shortcut::ForceReload => "force-reload",
        }
    }

    pub fn accelerator(&self) -> &'static str {
        match self {
            Shortcut::FocusAddressBar => "CmdOrCtrl+L",
            Shortcut::ForceReload => "CmdOrCtrl+R",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Shortcut::FocusAddressBar => "Open Location",
            Shortcut::ForceReload => "Reload Page",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

impl std::fmt::Display for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_lookup() {
        for shortcut in Shortcut::ALL {
            assert_eq!(Shortcut::from_id(shortcut.id()), Some(shortcut));
        }
        assert_eq!(Shortcut::from_id("close-window"), None);
    }

    #[test]
    fn test_accelerators() {
        assert_eq!(Shortcut::FocusAddressBar.accelerator(), "CmdOrCtrl+L");
        assert_eq!(Shortcut::ForceReload.accelerator(), "CmdOrCtrl+R");
    }
}
