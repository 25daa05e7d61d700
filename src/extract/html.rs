// src/extract/html.rs
// =============================================================================
// This module extracts article titles from the HTML of a Wikipedia page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// A regular article link looks like
//   <a href="/wiki/Franz_Kafka">Franz Kafka</a>
// and we keep only the "Franz_Kafka" part. Two kinds of targets are
// filtered out:
// - Titles containing ':' are namespaced pages (Category:, File:,
//   Special:, Talk:, ...), not regular articles
// - Titles containing '#' point at a section inside an article rather
//   than at the article itself
//
// Rust concepts:
// - HashSet: Collecting unique items (duplicate links collapse)
// - Option<T>: For a filter that either yields a title or nothing
// - Iterators: For processing the selected elements
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;

// Extracts the set of linked article titles from page HTML
//
// Parameters:
//   html: the page markup to parse (borrowed as &str)
//
// Returns: HashSet<String> of article titles, deduplicated
//
// Example:
//   html = r#"<a href="/wiki/Raspberry">Raspberry</a>"#
//   result = {"Raspberry"}
pub fn extract_article_links(html: &str) -> HashSet<String> {
    let mut links = HashSet::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Create a CSS selector to find all <a> tags with an href
    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    // Select all <a> elements and keep the ones that name an article
    for element in document.select(&selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(title) = article_title(href) {
                links.insert(title);
            }
        }
    }

    links
}

// Turns an href value into an article title, if it names one
//
// Parameters:
//   href: the raw href attribute value
//
// Returns: Some(title) for a regular article link, None otherwise
//
// Examples:
//   "/wiki/Raspberry" -> Some("Raspberry")
//   "/wiki/Category:Fruit" -> None (namespaced page)
//   "/wiki/Raspberry#Cultivation" -> None (section anchor)
//   "https://example.com" -> None (not an in-wiki link)
fn article_title(href: &str) -> Option<String> {
    // Only in-wiki absolute paths count; everything else is external
    let title = href.strip_prefix("/wiki/")?;

    // Empty titles and reserved-character titles are not articles
    if title.is_empty() || title.contains(':') || title.contains('#') {
        return None;
    }

    Some(title.to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is scraper and how does it work?
//    - scraper parses HTML into a tree structure (DOM)
//    - You can then query it using CSS selectors (like querySelector)
//    - "a[href]" means "all <a> tags that have an href attribute"
//
// 2. Why HashSet instead of Vec?
//    - A page often links to the same article many times
//    - The traversal only cares whether a link exists, not how often
//    - HashSet gives us deduplication for free
//
// 3. What does strip_prefix do?
//    - Returns Some(rest) if the string starts with the prefix
//    - Returns None otherwise
//    - The ? operator turns that None into an early return
//
// 4. Why unwrap() on the selector?
//    - Selector::parse can fail if the CSS selector is invalid
//    - Our selector "a[href]" is constant and known to be valid
//    - If it fails, the program should panic (programmer error)
//    - Generally avoid unwrap() on user input!
// -----------------------------------------------------------------------------
