//! Input resolution for the address bar
//!
//! Every input resolves to some navigable URL. There is no failure path:
//! strings the engine cannot load are simply handed to it as-is.

use serde::{Deserialize, Serialize};

/// Search engine used when none is configured.
pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://www.google.com/search?q=%s";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestKind {
    /// Input was taken as an address
    Direct,
    /// Input was turned into a search engine query
    Search,
}

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub url: String,
    pub kind: RequestKind,
}

impl NavigationRequest {
    pub fn is_search(&self) -> bool {
        self.kind == RequestKind::Search
    }
}

#[derive(Debug, Clone)]
pub struct InputResolver {
    /// Search engine URL template (%s replaced with query)
    search_template: String,
}

impl InputResolver {
    pub fn new() -> Self {
        Self {
            search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }

    pub fn with_search_engine(template: String) -> Self {
        Self {
            search_template: template,
        }
    }

    pub fn set_search_engine(&mut self, template: String) {
        self.search_template = template;
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Resolve user input into a navigation request
    pub fn submit(&self, raw_input: &str) -> NavigationRequest {
        let input = raw_input.trim();

        let request = if Self::is_search(input) {
            NavigationRequest {
                url: self.build_search_url(input),
                kind: RequestKind::Search,
            }
        } else {
            NavigationRequest {
                url: Self::with_scheme(input),
                kind: RequestKind::Direct,
            }
        };

        tracing::debug!(input = %input, url = %request.url, kind = ?request.kind, "Resolved address bar input");

        request
    }

    /// A space anywhere, or no dot at all, means the user typed search terms
    fn is_search(input: &str) -> bool {
        input.contains(' ') || !input.contains('.')
    }

    fn with_scheme(input: &str) -> String {
        if input.starts_with("http://") || input.starts_with("https://") {
            input.to_string()
        } else {
            format!("https://{}", input)
        }
    }

    /// Build search URL from query
    fn build_search_url(&self, query: &str) -> String {
        let encoded = urlencoding::encode(query);
        self.search_template.replace("%s", &encoded)
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_domain_gets_https() {
        let resolver = InputResolver::new();

        let request = resolver.submit("openai.com");
        assert_eq!(request.url, "https://openai.com");
        assert_eq!(request.kind, RequestKind::Direct);

        let request = resolver.submit("  example.com/path?x=1  ");
        assert_eq!(request.url, "https://example.com/path?x=1");
    }

    #[test]
    fn test_existing_scheme_is_kept() {
        let resolver = InputResolver::new();

        // Not upgraded to https
        assert_eq!(resolver.submit("http://example.com").url, "http://example.com");
        assert_eq!(
            resolver.submit("https://example.com/a").url,
            "https://example.com/a"
        );
    }

    #[test]
    fn test_phrase_is_search() {
        let resolver = InputResolver::new();

        let request = resolver.submit("weather today");
        assert_eq!(
            request.url,
            "https://www.google.com/search?q=weather%20today"
        );
        assert!(request.is_search());

        // A dot does not rescue a phrase
        let request = resolver.submit("read example.com later");
        assert!(request.is_search());
        assert_eq!(
            request.url,
            "https://www.google.com/search?q=read%20example.com%20later"
        );
    }

    #[test]
    fn test_single_word_without_dot_is_search() {
        let resolver = InputResolver::new();

        assert!(resolver.submit("rust").is_search());
        assert!(resolver.submit("localhost:8080").is_search());
        assert_eq!(
            resolver.submit("").url,
            "https://www.google.com/search?q="
        );
    }

    #[test]
    fn test_query_is_percent_encoded() {
        let resolver = InputResolver::new();

        let request = resolver.submit("c++ & rust");
        assert_eq!(
            request.url,
            "https://www.google.com/search?q=c%2B%2B%20%26%20rust"
        );
    }

    #[test]
    fn test_custom_search_engine() {
        let mut resolver = InputResolver::with_search_engine("https://duckduckgo.com/?q=%s".to_string());
        assert_eq!(
            resolver.submit("rust lang").url,
            "https://duckduckgo.com/?q=rust%20lang"
        );

        resolver.set_search_engine("https://search.example/find?term=%s".to_string());
        assert_eq!(resolver.search_template(), "https://search.example/find?term=%s");
        assert_eq!(
            resolver.submit("tauri").url,
            "https://search.example/find?term=tauri"
        );
    }
}
