//! Shared setup for the integration tests.
//!
//! Log output from the tree only exists with the `tracing` feature:
//!
//! ```bash
//! RUST_LOG=bst_map=trace cargo test --features tracing -- --nocapture
//! ```

#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Ensures tracing is only initialized once across all tests.
static INIT: Once = Once::new();

/// Installs a compact fmt subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call multiple times - only the first call takes effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        // Another harness may already have installed a global subscriber.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .compact()
            .try_init();
    });
}

/// Builds the tree used throughout the scenarios:
///
/// ```text
///         4
///        / \
///       2   5
///      / \
///     1   3
/// ```
///
/// Each key maps to its own value times ten.
pub fn scenario_tree() -> bst_map::Tree<i32, i32> {
    [4, 2, 5, 1, 3].into_iter().map(|k| (k, k * 10)).collect()
}

/// Collects the keys of a walk in the given order.
pub fn keys(tree: &bst_map::Tree<i32, i32>, order: bst_map::Order) -> Vec<i32> {
    let mut keys = Vec::new();
    tree.traverse(order, |k, _| keys.push(*k));
    keys
}

/// Collects the entries of an inorder walk.
pub fn entries(tree: &bst_map::Tree<i32, i32>) -> Vec<(i32, i32)> {
    let mut entries = Vec::new();
    tree.traverse_inorder(|k, v| entries.push((*k, *v)));
    entries
}
