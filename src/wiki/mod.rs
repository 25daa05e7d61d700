// src/wiki/mod.rs
// =============================================================================
// This module handles retrieving article pages from Wikipedia.
//
// Currently implements:
// - The PageSource trait the search engine fetches through
// - A live client that downloads article HTML over HTTPS
//
// Future enhancements (stretch goals):
// - Use the MediaWiki API instead of scraping article HTML
// - Support other-language Wikipedias via a configurable base URL
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;

// Re-export the trait and the live client from fetch.rs
pub use fetch::{PageSource, WikiClient};
