//! single-tab Navigation
//!
//! - Address bar input resolution:
//!   1. Text with a space, or without a dot → search
//!   2. Anything else → direct URL (`https://` added when no scheme is given)
//! - Session history: an ordered list of visited URLs with a cursor,
//!   standard back/forward semantics and forward truncation on navigation.

mod history;
mod input;

pub use history::{same_document, SessionHistory};
pub use input::{InputResolver, NavigationRequest, RequestKind, DEFAULT_SEARCH_TEMPLATE};
