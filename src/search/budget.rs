// src/search/budget.rs
// =============================================================================
// This module enforces the hard cap on page retrievals.
//
// Every fetch must claim a visit before it is allowed to touch the
// network. Once the cap is reached, claims are refused and the search
// degrades gracefully: refused fetches look exactly like failed ones
// (no markup, no links), so the frontier simply drains.
//
// The counter is atomic because fetches for articles in the same layer
// run concurrently, and two of them must never both take the last slot.
//
// Rust concepts:
// - AtomicUsize: An integer that can be updated safely from many tasks
// - fetch_update: Compare-and-swap in a loop, expressed as a closure
// =============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

// Counts page retrievals against a fixed maximum
//
// The count only ever goes up, and never past the maximum: a claim either
// increments the counter by one or leaves it untouched.
pub struct VisitBudget {
    max: usize,
    used: AtomicUsize,
}

impl VisitBudget {
    pub fn new(max: usize) -> Self {
        Self {
            max,
            used: AtomicUsize::new(0),
        }
    }

    // Tries to claim one visit
    //
    // Returns true and increments the counter if the cap hasn't been
    // reached yet; returns false (without incrementing) once it has.
    pub fn try_claim(&self) -> bool {
        self.used
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |used| {
                (used < self.max).then(|| used + 1)
            })
            .is_ok()
    }

    // How many visits have been claimed so far
    pub fn used(&self) -> usize {
        self.used.load(Ordering::SeqCst)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is AtomicUsize?
//    - A usize that can be read and written from concurrent tasks
//      without a lock
//    - Plain `mut usize` would be rejected by the compiler here, because
//      several in-flight fetches hold a reference to the budget at once
//
// 2. What does fetch_update do?
//    - Runs the closure on the current value and tries to store the result
//    - If another task changed the value in between, it retries
//    - Returning None from the closure means "leave the value alone",
//      which fetch_update reports as Err - that's our refused claim
//
// 3. Why check-then-increment in one step?
//    - A separate "if used < max { used += 1 }" has a gap between the
//      check and the increment where another task can slip in
//    - Two tasks could both pass the check and push the counter past max
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_succeed_until_cap() {
        let budget = VisitBudget::new(3);
        assert!(budget.try_claim());
        assert!(budget.try_claim());
        assert!(budget.try_claim());
        assert!(!budget.try_claim());
        assert_eq!(budget.used(), 3);
    }

    #[test]
    fn test_counter_never_passes_cap() {
        let budget = VisitBudget::new(4);
        for _ in 0..10 {
            budget.try_claim();
        }
        assert_eq!(budget.used(), 4);
    }

    #[test]
    fn test_zero_budget_rejects_immediately() {
        let budget = VisitBudget::new(0);
        assert!(!budget.try_claim());
        assert_eq!(budget.used(), 0);
    }
}
