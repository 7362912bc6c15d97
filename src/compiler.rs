//! Compile passes over declarative route definitions.
//!
//! # Responsibilities
//! - Wire the pipeline: parse → classify → build → flatten → merge → emit
//! - Offer the lighter evaluate path (top-level mapping, no flattening)
//! - Propagate failures unchanged; no partial output ever leaves a pass
//!
//! # Design Decisions
//! - Default options are an injected value, not ambient state, so every
//!   pass is independent and reentrant
//! - Fail-fast: the first error aborts the pass, callers own retry policy

use std::path::PathBuf;

use thiserror::Error;

use crate::cache::{emitter, CacheError};
use crate::config::loader::{load_definitions, ConfigError};
use crate::config::schema::{ParamMap, RouteParams};
use crate::routing::classify::classify;
use crate::routing::builder::{ConstructionError, ConstructorRegistry};
use crate::routing::defaults::apply_default_options;
use crate::routing::flatten::{flatten, RouteTable};
use crate::routing::route::Route;

/// Error of a compile pass. Transparent wrappers: callers see the original
/// error unchanged, so missing file vs malformed content vs bad class
/// reference stay distinguishable.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// The routing-table compiler. One instance can run any number of passes;
/// passes share nothing but the constructor registry, which is immutable
/// while a pass runs.
#[derive(Debug, Clone, Default)]
pub struct RoutingCompiler {
    registry: ConstructorRegistry,
}

impl RoutingCompiler {
    /// Compiler with the built-in route classes registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiler with a caller-supplied registry (extra route classes).
    pub fn with_registry(registry: ConstructorRegistry) -> Self {
        Self { registry }
    }

    pub fn registry_mut(&mut self) -> &mut ConstructorRegistry {
        &mut self.registry
    }

    /// Execute path: compile the sources and return the cache fragment.
    pub fn execute(
        &self,
        sources: &[PathBuf],
        default_options: &ParamMap,
    ) -> Result<String, CompileError> {
        let table = self.compile(sources, default_options)?;
        Ok(emitter::emit(&table)?)
    }

    /// Compile the sources into the in-memory table: flattened, defaults
    /// applied, ready for dispatch.
    pub fn compile(
        &self,
        sources: &[PathBuf],
        default_options: &ParamMap,
    ) -> Result<RouteTable, CompileError> {
        let definitions = load_definitions(sources)?;
        let routes = self.construct_top_level(&definitions)?;

        let mut table = flatten(&routes);
        apply_default_options(&mut table, default_options);

        tracing::info!(
            definitions = definitions.len(),
            routes = table.len(),
            "route table compiled"
        );

        Ok(table)
    }

    /// Evaluate path: the raw top-level `name → Route` mapping. No
    /// flattening, no default options; collections come back intact.
    pub fn evaluate(&self, sources: &[PathBuf]) -> Result<Vec<(String, Route)>, CompileError> {
        let definitions = load_definitions(sources)?;
        let routes = self.construct_top_level(&definitions)?;

        tracing::debug!(entries = routes.len(), "top-level routes evaluated");

        Ok(routes)
    }

    fn construct_top_level(
        &self,
        definitions: &[(String, RouteParams)],
    ) -> Result<Vec<(String, Route)>, ConstructionError> {
        definitions
            .iter()
            .map(|(name, params)| {
                let definition = classify(name, params);
                let route = self.registry.construct(&definition)?;
                Ok((name.clone(), route))
            })
            .collect()
    }
}
