//! Routing-Table Compiler
//!
//! Compiles declarative route definitions (grouped by name, possibly nested
//! into collections) into a flattened, ordered dispatch table, plus a
//! serialized cache fragment that reloads without re-parsing.
//!
//! # Architecture Overview
//!
//! ```text
//!  TOML sources ──▶ config::loader ──▶ routing::classify ──▶ routing::builder
//!                                                                  │
//!                                                                  ▼
//!  cache fragment ◀── cache::emitter ◀── routing::defaults ◀── routing::flatten
//!        │
//!        ▼
//!  cache::loader ──▶ RouteTable (same names, same order)
//! ```
//!
//! The `evaluate` path stops after construction and hands back the raw
//! top-level mapping, collections intact.

pub mod cache;
pub mod compiler;
pub mod config;
pub mod routing;

pub use compiler::{CompileError, RoutingCompiler};
pub use config::schema::{ParamMap, RouteParams};
pub use routing::flatten::RouteTable;
pub use routing::route::Route;
