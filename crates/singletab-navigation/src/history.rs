//! Session history
//!
//! In-memory back/forward list for the single content view. Nothing here is
//! persisted; the list lives as long as the window does.

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionHistory {
    entries: Vec<String>,
    current_index: usize,
}

impl SessionHistory {
    /// Seed the history with the start page
    pub fn new(default_url: impl Into<String>) -> Self {
        Self {
            entries: vec![default_url.into()],
            current_index: 0,
        }
    }

    /// Record a navigation.
    ///
    /// Returns `false` when `url` is already the current entry. Otherwise any
    /// forward entries are dropped, `url` is appended and becomes current.
    pub fn navigate(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();

        if same_document(self.current(), &url) {
            return false;
        }

        self.entries.truncate(self.current_index + 1);
        self.entries.push(url);
        self.current_index = self.entries.len() - 1;

        true
    }

    /// Swap the entry at `index` for `url` without touching the cursor or any
    /// other entry, as when a page turns out to redirect.
    ///
    /// Nothing changes unless the entry is still `expected`.
    pub fn replace_entry(&mut self, index: usize, expected: &str, url: impl Into<String>) -> bool {
        match self.entries.get_mut(index) {
            Some(entry) if same_document(entry, expected) => {
                *entry = url.into();
                true
            }
            _ => false,
        }
    }

    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }

        self.current_index -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }

        self.current_index += 1;
        Some(self.current())
    }

    pub fn current(&self) -> &str {
        &self.entries[self.current_index]
    }

    pub fn can_go_back(&self) -> bool {
        self.current_index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.current_index + 1 < self.entries.len()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true: the history is seeded at construction
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compare two URLs the way the engine reports them.
///
/// `https://a.com` and `https://a.com/` are the same document. Strings that do
/// not parse are compared verbatim.
pub fn same_document(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    match (Url::parse(a), Url::parse(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
