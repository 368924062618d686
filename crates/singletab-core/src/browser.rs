//! Main browser state container
//!
//! Rust owns all state. The content webview is only told what to load, and
//! everything it reports comes back through [`Browser::navigate`].
//!
//! Engine reports arrive after the fact. Every load the browser dispatches is
//! remembered until the engine reports it, so a report for an earlier back or
//! forward press (or a redirect of one) settles that load instead of being
//! taken for a fresh navigation.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use url::Url;

use singletab_navigation::{same_document, InputResolver, NavigationRequest, SessionHistory};

use crate::config::Config;
use crate::engine::{RenderingEngine, WindowChrome};
use crate::error::CoreError;
use crate::shortcuts::Shortcut;
use crate::Result;

/// Loads older than this are assumed lost by the engine
const MAX_PENDING_LOADS: usize = 32;

/// Who asked for a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationSource {
    /// Address bar submission
    User,
    /// Link that wanted a new window, redirected into this one
    LinkClick,
    /// The engine reporting where it already is
    Engine,
}

impl NavigationSource {
    /// Engine reports describe a load that is already happening
    fn dispatches_load(&self) -> bool {
        !matches!(self, NavigationSource::Engine)
    }
}

/// What to do with a request to open a link in a new window
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDecision {
    /// Load the link in the single content view instead
    OpenInPlace(String),
    /// Drop the request
    Ignore,
}

impl LinkDecision {
    pub fn for_url(url: &Url) -> Self {
        match url.scheme() {
            "http" | "https" | "about" | "data" | "file" => {
                LinkDecision::OpenInPlace(url.as_str().to_string())
            }
            _ => LinkDecision::Ignore,
        }
    }
}

/// State the address bar renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserSnapshot {
    pub current_url: String,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub is_loading: bool,
    pub is_pinned: bool,
    pub history_len: usize,
    pub current_index: usize,
}

/// Kind of report coming back from the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EngineReport {
    Started,
    Finished,
    UrlChanged,
    /// URL read back from the engine rather than pushed by it
    Resync,
}

/// A load sent to the engine and not yet reported back
#[derive(Debug, Clone)]
struct PendingLoad {
    /// History entry the load was dispatched for
    index: usize,
    url: String,
}

#[derive(Debug)]
struct BrowserState {
    history: SessionHistory,
    is_loading: bool,
    is_pinned: bool,
    pending: VecDeque<PendingLoad>,
}

impl BrowserState {
    /// Remember that the current entry was just sent to the engine
    fn expect_load(&mut self, url: &str) {
        self.pending.push_back(PendingLoad {
            index: self.history.current_index(),
            url: url.to_string(),
        });

        if self.pending.len() > MAX_PENDING_LOADS {
            self.pending.pop_front();
        }
    }

    /// Undo `expect_load` when the engine refused the load
    fn forget_load(&mut self, url: &str) {
        if self
            .pending
            .back()
            .is_some_and(|load| load.url == url)
        {
            self.pending.pop_back();
        }
    }

    /// Fold an engine report into history. Returns whether history changed.
    ///
    /// - A report for a pending load settles it and every older one; the
    ///   cursor already points at the newest dispatched entry.
    /// - Finished reports only settle loads; their Started already counted.
    /// - An unknown URL while loads are pending is where the oldest of them
    ///   ended up, so its entry is replaced in place.
    /// - An unknown URL with nothing pending is a navigation the page made on
    ///   its own.
    fn reconcile(&mut self, url: &str, report: EngineReport) -> bool {
        if let Some(settled) = self
            .pending
            .iter()
            .position(|load| same_document(&load.url, url))
        {
            self.pending.drain(..=settled);
            return false;
        }

        match report {
            EngineReport::Finished => false,
            EngineReport::Resync if !self.pending.is_empty() => false,
            _ => match self.pending.pop_front() {
                Some(load) => {
                    let replaced = self.history.replace_entry(load.index, &load.url, url);
                    if replaced {
                        tracing::debug!(from = %load.url, to = %url, "Redirected");
                    }
                    replaced
                }
                None => self.history.navigate(url),
            },
        }
    }
}

/// Main browser instance
///
/// The single writer for history, the loading flag and the pinned flag.
/// Engine calls are always made after the state lock is released, so an
/// engine that reports back synchronously cannot deadlock.
pub struct Browser {
    /// Configuration
    config: Config,
    /// Input resolver for address bar
    input_resolver: Arc<RwLock<InputResolver>>,
    state: Arc<RwLock<BrowserState>>,
    /// Content view, attached once the shell has created it
    engine: Arc<RwLock<Option<Arc<dyn RenderingEngine>>>>,
}

impl Browser {
    pub fn new(config: Config) -> Self {
        let input_resolver = InputResolver::with_search_engine(config.search_engine.clone());
        let state = BrowserState {
            history: SessionHistory::new(config.homepage.clone()),
            is_loading: false,
            is_pinned: config.window.always_on_top,
            pending: VecDeque::new(),
        };

        Self {
            config,
            input_resolver: Arc::new(RwLock::new(input_resolver)),
            state: Arc::new(RwLock::new(state)),
            engine: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn attach_engine(&self, engine: Arc<dyn RenderingEngine>) {
        *self.engine.write() = Some(engine);
        tracing::debug!("Rendering engine attached");
    }

    fn engine(&self) -> Result<Arc<dyn RenderingEngine>> {
        self.engine.read().clone().ok_or(CoreError::NotInitialized)
    }

    /// Send `url` to the engine, already registered with `expect_load`
    fn load(&self, url: &str) -> Result<()> {
        let result = self.engine().and_then(|engine| engine.load(url));
        if result.is_err() {
            self.state.write().forget_load(url);
        }
        result
    }

    pub fn set_search_engine(&self, template: String) {
        self.input_resolver.write().set_search_engine(template);
    }

    // === Navigation ===

    /// Resolve address bar text and navigate to it
    pub fn submit_input(&self, raw_input: &str) -> Result<NavigationRequest> {
        let request = self.input_resolver.read().submit(raw_input);
        self.navigate(&request.url, NavigationSource::User)?;
        Ok(request)
    }

    /// The one place history and the current URL change.
    ///
    /// Returns whether history changed. User and link navigations are always
    /// sent to the engine, even when they repeat the current URL.
    pub fn navigate(&self, url: &str, source: NavigationSource) -> Result<bool> {
        let recorded = {
            let mut state = self.state.write();
            if source.dispatches_load() {
                let recorded = state.history.navigate(url);
                state.expect_load(url);
                recorded
            } else {
                state.reconcile(url, EngineReport::UrlChanged)
            }
        };

        if recorded {
            tracing::info!(url = %url, source = ?source, "Navigated");
        }

        if source.dispatches_load() {
            self.load(url)?;
        }

        Ok(recorded)
    }

    /// Step back in history. `None` when already at the first entry.
    pub fn back(&self) -> Result<Option<String>> {
        let target = {
            let mut state = self.state.write();
            let target = state.history.back().map(str::to_string);
            if let Some(url) = &target {
                state.expect_load(url);
            }
            target
        };

        if let Some(url) = &target {
            tracing::debug!(url = %url, "Back");
            self.load(url)?;
        }

        Ok(target)
    }

    /// Step forward in history. `None` when already at the last entry.
    pub fn forward(&self) -> Result<Option<String>> {
        let target = {
            let mut state = self.state.write();
            let target = state.history.forward().map(str::to_string);
            if let Some(url) = &target {
                state.expect_load(url);
            }
            target
        };

        if let Some(url) = &target {
            tracing::debug!(url = %url, "Forward");
            self.load(url)?;
        }

        Ok(target)
    }

    pub fn reload(&self) -> Result<()> {
        tracing::debug!(url = %self.current_url(), "Reload");
        self.engine()?.reload()
    }

    // === Engine events ===

    pub fn on_navigation_started(&self, url: &str) -> bool {
        let mut state = self.state.write();
        state.is_loading = true;
        state.reconcile(url, EngineReport::Started)
    }

    pub fn on_navigation_finished(&self, url: &str) -> bool {
        let mut state = self.state.write();
        state.is_loading = false;
        state.reconcile(url, EngineReport::Finished)
    }

    pub fn on_url_changed(&self, url: &str) -> bool {
        self.navigate(url, NavigationSource::Engine)
            .unwrap_or(false)
    }

    /// Pick up URL changes the engine made without loading a page
    /// (`pushState`, fragment changes). Skipped while loads are in flight.
    pub fn resync_with_engine(&self) -> bool {
        let Some(url) = self.engine().ok().and_then(|engine| engine.current_url()) else {
            return false;
        };

        let changed = self.state.write().reconcile(&url, EngineReport::Resync);
        if changed {
            tracing::info!(url = %url, "URL changed in page");
        }
        changed
    }

    /// Keep links that target a new window inside the single content view
    pub fn intercept_new_window(&self, url: &Url) -> Result<LinkDecision> {
        let decision = LinkDecision::for_url(url);

        match &decision {
            LinkDecision::OpenInPlace(target) => {
                self.navigate(target, NavigationSource::LinkClick)?;
            }
            LinkDecision::Ignore => {
                tracing::debug!(url = %url, "Ignored new window request");
            }
        }

        Ok(decision)
    }

    // === Window ===

    pub fn set_pinned(&self, pinned: bool, chrome: &dyn WindowChrome) -> Result<bool> {
        let mut state = self.state.write();
        chrome.set_always_on_top(pinned)?;
        state.is_pinned = pinned;
        tracing::info!(pinned, "Window pin changed");
        Ok(pinned)
    }

    /// Flip the pin. Decided and applied under one lock so concurrent toggles
    /// cannot both pick the same value.
    pub fn toggle_pinned(&self, chrome: &dyn WindowChrome) -> Result<bool> {
        let mut state = self.state.write();
        let next = !state.is_pinned;
        chrome.set_always_on_top(next)?;
        state.is_pinned = next;
        tracing::info!(pinned = next, "Window pin changed");
        Ok(next)
    }

    pub fn handle_shortcut(&self, shortcut: Shortcut, chrome: &dyn WindowChrome) -> Result<()> {
        tracing::debug!(shortcut = %shortcut, "Shortcut");
        match shortcut {
            Shortcut::FocusAddressBar => chrome.focus_address_bar(),
            Shortcut::ForceReload => self.reload(),
        }
    }

    // === Queries ===

    pub fn current_url(&self) -> String {
        self.state.read().history.current().to_string()
    }

    pub fn history_entries(&self) -> Vec<String> {
        self.state.read().history.entries().to_vec()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().is_loading
    }

    pub fn is_pinned(&self) -> bool {
        self.state.read().is_pinned
    }

    pub fn snapshot(&self) -> BrowserSnapshot {
        let state = self.state.read();
        BrowserSnapshot {
            current_url: state.history.current().to_string(),
            can_go_back: state.history.can_go_back(),
            can_go_forward: state.history.can_go_forward(),
            is_loading: state.is_loading,
            is_pinned: state.is_pinned,
            history_len: state.history.len(),
            current_index: state.history.current_index(),
        }
    }
}
