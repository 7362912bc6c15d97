//! Cache artifact: emit and re-load the compiled route table.
//!
//! # Data Flow
//! ```text
//! RouteTable
//!     → emitter.rs (header comment + one assignment per entry)
//!     → textual fragment (written to a cache file by the caller)
//!
//! textual fragment
//!     → loader.rs (skip comments, split statements, unescape, deserialize)
//!     → RouteTable (same names, same order)
//! ```
//!
//! # Design Decisions
//! - Everything after the two-line header is deterministic for a table;
//!   the timestamp is informational only and excluded from round-trip
//!   guarantees
//! - Statement order equals table order, so a re-loaded table dispatches
//!   identically

pub mod emitter;
pub mod loader;

use thiserror::Error;

/// Errors for cache-fragment handling.
#[derive(Debug, Error)]
pub enum CacheError {
    /// A fragment statement does not have the expected shape.
    #[error("cache fragment line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// A route failed to (de)serialize.
    #[error("route serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
