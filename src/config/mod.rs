//! Configuration front end: definition sources and factory settings.
//!
//! # Data Flow
//! ```text
//! definition sources (TOML, ordered)
//!     → loader.rs (parse & deserialize, name-level override)
//!     → Vec<(name, RouteParams)> (document order preserved)
//!
//! factory settings (TOML)
//!     → factory.rs ([routing.param] table, `cache` key stripped)
//!     → ParamMap of process-wide default options
//! ```
//!
//! # Design Decisions
//! - Sources are fully materialized before the pipeline runs; no streaming
//! - Later sources override earlier ones per route name, not deep-merged
//! - An overridden name keeps its original position
//! - Syntactic validation only; class references are checked at build time

pub mod factory;
pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::{ParamMap, RouteParams};
