// src/wiki/fetch.rs
// =============================================================================
// This module retrieves article pages from Wikipedia.
//
// Strategy:
// - Build the article URL from the title (https://en.wikipedia.org/wiki/<title>)
// - Fetch the page HTML with a shared reqwest client
// - Treat every failure the same way: no markup, no links, keep going
//
// Why a trait instead of a plain function?
// - The search engine only needs "title in, markup out"
// - Putting that behind the PageSource trait lets tests drive the engine
//   with a fixed in-memory graph instead of the live network
//
// There is deliberately no retry logic: a page that fails to download
// simply contributes no links to the traversal.
//
// Rust concepts:
// - Traits: Abstract interfaces that multiple types can implement
// - async-trait: Allows async functions inside trait definitions
// - Option<T>: "markup or nothing" without an error type
// =============================================================================

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

// Where English Wikipedia serves its articles from
const ARTICLE_BASE: &str = "https://en.wikipedia.org/wiki/";

// How long to wait for a single page before giving up on it
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

// A source of article markup, keyed by article title
//
// The #[async_trait] attribute lets us declare async methods in the trait.
// Implementations: WikiClient (live network) and the fixed graphs used in
// the search engine's tests.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Retrieves the raw markup for an article.
    ///
    /// Returns None when retrieval fails for any reason (network error,
    /// non-success status, unbuildable URL). Callers treat that as a page
    /// with no outgoing links.
    async fn fetch(&self, title: &str) -> Option<String>;
}

// The live Wikipedia client
//
// Wraps a single reqwest::Client so every request shares one connection
// pool. Client is cheap to clone and safe to share across tasks.
pub struct WikiClient {
    client: Client,
}

impl WikiClient {
    // Creates a client with a request timeout and an identifying User-Agent
    //
    // Wikipedia asks automated clients to identify themselves; anonymous
    // default agents risk being blocked.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(concat!("wiki-pathfinder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for WikiClient {
    async fn fetch(&self, title: &str) -> Option<String> {
        let url = article_url(title)?;

        // Any transport error or non-success status degrades to None
        let response = self.client.get(url.clone()).send().await.ok()?;
        if !response.status().is_success() {
            return None;
        }
        let html = response.text().await.ok()?;

        // Progress goes to stderr so it never mixes with the path output
        eprintln!("Retrieved {} bytes ({})", html.len(), url);

        Some(html)
    }
}

// Builds the URL for an article from its title
//
// Titles scraped from pages are already percent-encoded, so they are used
// verbatim. A title that cannot form a valid URL yields None, which the
// caller treats as a failed fetch.
//
// Example:
//   "University_of_Victoria" ->
//   Some("https://en.wikipedia.org/wiki/University_of_Victoria")
fn article_url(title: &str) -> Option<Url> {
    Url::parse(&format!("{}{}", ARTICLE_BASE, title)).ok()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is async-trait?
//    - Rust traits can't (easily) hold async functions on their own
//    - The #[async_trait] macro rewrites them into ordinary methods that
//      return boxed futures
//    - The call sites just write .fetch(title).await as you'd expect
//
// 2. Why Option instead of Result here?
//    - The traversal doesn't care WHY a page failed to download
//    - Timeout, 404, bad URL: all of them mean "no links from this page"
//    - Collapsing them into None keeps the engine free of error plumbing
//
// 3. What is ok()?
//    - Converts a Result<T, E> into an Option<T>, discarding the error
//    - Combined with ? it gives us "bail out with None on failure"
//
// 4. Why one shared Client?
//    - reqwest::Client keeps a connection pool internally
//    - Reusing it avoids re-opening TLS connections for every page
// -----------------------------------------------------------------------------
