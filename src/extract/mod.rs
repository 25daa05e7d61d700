// src/extract/mod.rs
// =============================================================================
// This module extracts article links from Wikipedia page markup.
//
// Currently implements:
// - Finding every in-wiki anchor ("/wiki/<title>") in a page
// - Filtering out non-article targets (namespaced pages, section anchors)
//
// This file (mod.rs) is the module root - it exports the public API that
// other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod html;

// Re-export the extraction function from html.rs
pub use html::extract_article_links;
