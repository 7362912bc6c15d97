//! Routing core: classification, construction, flattening, defaults.
//!
//! # Data Flow
//! ```text
//! Vec<(name, RouteParams)>             (from config::loader)
//!     → classify.rs (simple vs collection, ordered constructor args)
//!     → builder.rs (registry lookup, construct Route values)
//!     → flatten.rs (depth-first expansion into RouteTable)
//!     → defaults.rs (process-wide options, route-level wins)
//!     → RouteTable (ordered, unique names, frozen)
//! ```
//!
//! # Design Decisions
//! - Closed Route enum; the flattener never needs runtime type inspection
//! - Constructors are a registry over a closed set, not reflection
//! - Deterministic: same definitions always produce the same table
//! - First match wins at dispatch, so table order is part of the contract

pub mod builder;
pub mod classify;
pub mod defaults;
pub mod flatten;
pub mod route;

pub use builder::{ConstructionError, ConstructorRegistry};
pub use classify::RouteDefinition;
pub use flatten::RouteTable;
pub use route::{Route, RouteCollection, SimpleRoute};
