// src/search/queue.rs
// =============================================================================
// This module implements the breadth-first traversal of the link graph.
//
// How it works:
// 1. Start with the first article in a queue
// 2. Fetch each queued article's page (within the visit budget)
// 3. Extract the articles it links to
// 4. Record unseen articles in the parent map and queue them
// 5. Stop as soon as the target article is discovered, or when the
//    queue runs dry
//
// The strict first-in-first-out order is what makes the result a
// SHORTEST path: every article reachable in k hops is queued before any
// article that needs k+1 hops, so the first parent recorded for the
// target lies on a minimal chain.
//
// Fetching is overlapped for articles of the same hop distance, but one
// hop layer is always finished before the next begins, which preserves
// that ordering guarantee. All bookkeeping stays on the driver task; the
// budget counter is the only state shared with in-flight fetches.
//
// Rust concepts:
// - HashSet: To track discovered articles (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first traversal
// - HashMap: Records which article first discovered each article
// - Labeled break: Exiting a nested loop the moment the target appears
// =============================================================================

use futures::stream::{self, StreamExt};
use std::collections::{HashMap, HashSet, VecDeque};

use super::budget::VisitBudget;
use crate::extract::extract_article_links;
use crate::wiki::PageSource;

// How many page fetches may be in flight at once
//
// Only articles at the same hop distance are ever fetched together, so
// this also bounds how much of a layer is abandoned when the target
// turns up early.
const FETCH_CONCURRENCY: usize = 8;

// What a finished traversal hands back
#[derive(Debug)]
pub struct SearchOutcome {
    /// For each discovered article, the article that first linked to it
    /// (None marks the start article). The target's presence as a key is
    /// the success signal; reconstruct() turns the map into a path.
    pub parents: HashMap<String, Option<String>>,

    /// How many pages were actually retrieved
    pub pages_fetched: usize,
}

// Explores the link graph breadth-first from `start` until `target` is
// discovered, the frontier runs dry, or the visit budget is exhausted
//
// Parameters:
//   source: where article markup comes from (live Wikipedia or a test graph)
//   start: article title the search begins at
//   target: article title the search is looking for
//   max_visits: hard cap on page retrievals for this run
//
// Returns: the parent map built during traversal plus visit accounting.
// An unreachable target is not an error - it is simply absent from the
// parent map.
pub async fn explore<S: PageSource>(
    source: &S,
    start: &str,
    target: &str,
    max_visits: usize,
) -> SearchOutcome {
    let budget = VisitBudget::new(max_visits);

    // Every article ever discovered (queued at most once)
    let mut visited = HashSet::new();
    // Articles discovered but not yet expanded, in discovery order
    let mut frontier = VecDeque::new();
    // Which article first discovered each article
    let mut parents = HashMap::new();

    // The start article is discovered before traversal begins
    visited.insert(start.to_string());
    frontier.push_back(start.to_string());
    parents.insert(start.to_string(), None);

    // Searching for the article we're standing on needs no fetches at all
    if start == target {
        return SearchOutcome {
            parents,
            pages_fetched: 0,
        };
    }

    let mut hop = 0;
    'traversal: while !frontier.is_empty() {
        hop += 1;

        // Everything queued right now sits at the same hop distance.
        // Draining it as one layer lets the fetches overlap without
        // letting hop k+1 start before hop k is finished.
        let layer: Vec<String> = frontier.drain(..).collect();

        let fetches = layer.into_iter().map(|title| {
            let budget = &budget;
            async move {
                // The budget gate sits in front of the transport: a
                // refused claim never reaches the network and looks
                // exactly like a failed retrieval
                let markup = if budget.try_claim() {
                    source.fetch(&title).await
                } else {
                    None
                };
                (title, markup)
            }
        });

        // Run up to FETCH_CONCURRENCY fetches at once, taking results as
        // they complete. Expansion below happens here on the driver task
        // only, so visited/parents/frontier have a single writer.
        let mut pages = stream::iter(fetches).buffer_unordered(FETCH_CONCURRENCY);

        while let Some((title, markup)) = pages.next().await {
            let links = extract_article_links(markup.as_deref().unwrap_or(""));
            println!("  [hop {}] {}: {} links", hop, title, links.len());

            for link in links {
                // Each article enters the traversal exactly once; this
                // also swallows self-links and back-links for free
                if visited.contains(&link) {
                    continue;
                }
                visited.insert(link.clone());
                parents.insert(link.clone(), Some(title.clone()));
                frontier.push_back(link.clone());

                // The first parent recorded for the target already lies
                // on a shortest chain, so the search is over. Breaking
                // out drops the stream, which abandons the in-flight
                // fetches for the rest of this layer.
                if link == target {
                    break 'traversal;
                }
            }
        }
    }

    SearchOutcome {
        parents,
        pages_fetched: budget.used(),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is buffer_unordered?
//    - Takes a stream of futures and runs up to N of them at once
//    - Results come out in completion order, not submission order
//    - That's fine here: siblings of one layer may expand in any order
//      without changing the length of the shortest path
//
// 2. Why drain the frontier into a layer first?
//    - Everything queued at once sits at the same hop distance
//    - Fetching a whole layer together overlaps the slow network calls
//    - But layer k+1 never starts before layer k finished, which is
//      what keeps the traversal breadth-first
//
// 3. What is a labeled break?
//    - `break 'traversal` jumps out of the OUTER loop from inside the
//      inner ones, in one step
//    - Clearer than setting a flag and re-checking it at every level
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::super::path::reconstruct;

    // A fixed in-memory graph standing in for live Wikipedia
    //
    // Each article's links are rendered as real anchor markup, so the
    // traversal exercises the same extraction path as production. The
    // counter records how often the "network" was actually reached.
    struct FixedGraph {
        pages: HashMap<String, String>,
        fetches: AtomicUsize,
    }

    impl FixedGraph {
        fn new(edges: &[(&str, &[&str])]) -> Self {
            let mut pages = HashMap::new();
            for (title, links) in edges {
                let html: String = links
                    .iter()
                    .map(|link| format!(r#"<a href="/wiki/{}">{}</a>"#, link, link))
                    .collect();
                pages.insert(title.to_string(), html);
            }
            Self {
                pages,
                fetches: AtomicUsize::new(0),
            }
        }

        fn fetch_count(&self) -> usize {
            self.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl PageSource for FixedGraph {
        async fn fetch(&self, title: &str) -> Option<String> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            // An article missing from the graph behaves like a failed
            // download: no markup at all
            self.pages.get(title).cloned()
        }
    }

    #[tokio::test]
    async fn test_diamond_graph_finds_shortest_path() {
        // A -> {B, C}, B -> {D}, C -> {D}, D -> {E}; both A-B-D and
        // A-C-D are valid shortest answers
        let graph = FixedGraph::new(&[
            ("A", &["B", "C"]),
            ("B", &["D"]),
            ("C", &["D"]),
            ("D", &["E"]),
        ]);

        let outcome = explore(&graph, "A", "D", 100).await;
        let path = reconstruct(&outcome.parents, "D").expect("D is reachable");

        assert_eq!(path.len(), 3);
        assert_eq!(path[0], "A");
        assert!(path[1] == "B" || path[1] == "C");
        assert_eq!(path[2], "D");
    }

    #[tokio::test]
    async fn test_shorter_route_beats_longer_one() {
        // A two-hop route and a three-hop route to the same target; the
        // two-hop one must win no matter which sibling expands first
        let graph = FixedGraph::new(&[
            ("A", &["Long1", "Short"]),
            ("Short", &["T"]),
            ("Long1", &["Long2"]),
            ("Long2", &["T"]),
        ]);

        let outcome = explore(&graph, "A", "T", 100).await;
        let path = reconstruct(&outcome.parents, "T").expect("T is reachable");

        assert_eq!(path, vec!["A", "Short", "T"]);
    }

    #[tokio::test]
    async fn test_start_equals_target_needs_no_fetches() {
        let graph = FixedGraph::new(&[("A", &["B"])]);

        let outcome = explore(&graph, "A", "A", 100).await;
        let path = reconstruct(&outcome.parents, "A").expect("trivial path");

        assert_eq!(path, vec!["A"]);
        assert_eq!(outcome.pages_fetched, 0);
        assert_eq!(graph.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_unreachable_target_reports_not_found() {
        // The component around A never reaches Z
        let graph = FixedGraph::new(&[("A", &["B"]), ("B", &["A"]), ("Z", &[])]);

        let outcome = explore(&graph, "A", "Z", 100).await;

        assert!(reconstruct(&outcome.parents, "Z").is_none());
    }

    #[tokio::test]
    async fn test_cycles_fetch_each_article_once() {
        // Self-links and back-links everywhere; every article is still
        // fetched at most once
        let graph = FixedGraph::new(&[
            ("A", &["A", "B"]),
            ("B", &["A", "B", "C"]),
            ("C", &["A", "B"]),
        ]);

        let outcome = explore(&graph, "A", "Missing", 100).await;

        assert_eq!(graph.fetch_count(), 3);
        assert_eq!(outcome.pages_fetched, 3);
    }

    #[tokio::test]
    async fn test_budget_caps_retrievals() {
        // A chain much longer than the budget; the transport is reached
        // exactly budget times and the target stays undiscovered
        let graph = FixedGraph::new(&[
            ("A", &["B"]),
            ("B", &["C"]),
            ("C", &["D"]),
            ("D", &["E"]),
            ("E", &["F"]),
            ("F", &["G"]),
        ]);

        let outcome = explore(&graph, "A", "G", 3).await;

        assert_eq!(graph.fetch_count(), 3);
        assert_eq!(outcome.pages_fetched, 3);
        assert!(reconstruct(&outcome.parents, "G").is_none());
    }

    #[tokio::test]
    async fn test_target_discovery_stops_fetching() {
        // The target is linked straight from the start article, so the
        // already-queued siblings are never retrieved
        let graph = FixedGraph::new(&[
            ("A", &["T", "B", "C", "D"]),
            ("B", &["E"]),
            ("C", &["E"]),
            ("D", &["E"]),
        ]);

        let outcome = explore(&graph, "A", "T", 100).await;
        let path = reconstruct(&outcome.parents, "T").expect("T is reachable");

        assert_eq!(path, vec!["A", "T"]);
        assert_eq!(graph.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_contributes_no_links() {
        // B is missing from the graph (its download "fails"); the path
        // through C must still be found
        let graph = FixedGraph::new(&[("A", &["B", "C"]), ("C", &["T"])]);

        let outcome = explore(&graph, "A", "T", 100).await;
        let path = reconstruct(&outcome.parents, "T").expect("T is reachable");

        assert_eq!(path, vec!["A", "C", "T"]);
    }
}
