//! Logging macros that cost nothing unless the `tracing` feature is enabled.
//!
//! ```bash
//! # Run the tests with the tree's log points printed
//! RUST_LOG=bst_map=trace cargo test --features tracing
//! ```

#![allow(unused_macros)]

/// Trace-level logging. Compiles to nothing without the `tracing` feature.
#[cfg(feature = "tracing")]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

/// Debug-level logging. Compiles to nothing without the `tracing` feature.
#[cfg(feature = "tracing")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}
