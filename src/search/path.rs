// src/search/path.rs
// =============================================================================
// This module turns the traversal's parent map into the final path.
//
// The parent map is an implicit tree rooted at the start article: every
// discovered article points at the article that first linked to it, and
// the start article points at nothing. Walking from the target back
// through those links and reversing the result gives the start-to-target
// chain.
//
// If the target never made it into the map, the traversal ran out of
// frontier or budget first - that is reported as None, not as an error.
//
// Rust concepts:
// - Option<T>: "a path or nothing" without an error type
// - while let: Looping while a pattern keeps matching
// - Vec::reverse: Flipping the collected chain in place
// =============================================================================

use std::collections::HashMap;

// Reconstructs the start-to-target path from a parent map
//
// Parameters:
//   parents: which article first discovered each article (None = start)
//   target: article title the path should end at
//
// Returns: Some(path) in start-to-target order, or None if the target
// was never discovered
//
// The path has no repeated articles: each article's parent was
// discovered strictly before it, so the walk can never loop.
pub fn reconstruct(
    parents: &HashMap<String, Option<String>>,
    target: &str,
) -> Option<Vec<String>> {
    // The target's presence as a key is the traversal's success signal
    if !parents.contains_key(target) {
        return None;
    }

    // Follow the parent links backwards, collecting as we go
    let mut chain = vec![target.to_string()];
    let mut current = target;
    while let Some(Some(parent)) = parents.get(current) {
        chain.push(parent.clone());
        current = parent;
    }

    // The walk produced target-to-start order; callers want the opposite
    chain.reverse();
    Some(chain)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does the while let pattern nest two Somes?
//    - parents.get(current) returns Option<&Option<String>>
//    - The outer Option is "is this article in the map at all?"
//    - The inner Option is "does it have a parent, or is it the start?"
//    - Some(Some(parent)) matches only "in the map AND has a parent",
//      so the loop stops cleanly at the start article
//
// 2. Why can't this loop forever?
//    - Each article's parent was discovered before the article itself
//    - Following parents therefore always moves strictly earlier in
//      discovery order, and must bottom out at the start
// -----------------------------------------------------------------------------
