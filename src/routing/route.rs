//! Route model.
//!
//! # Responsibilities
//! - Represent a single dispatchable route (pattern, defaults, requirements,
//!   options)
//! - Represent a named grouping of routes (collection), possibly nested
//! - Apply process-wide default options without clobbering explicit ones
//!
//! # Design Decisions
//! - Closed tagged variant instead of trait objects: the flattener needs to
//!   know collection vs leaf, and a closed enum makes that a `match`
//! - Serde derives throughout: the cache artifact embeds serialized routes
//! - Immutable after the compile pass; `set_default_options` is the only
//!   mutator and runs exactly once per route

use serde::{Deserialize, Serialize};

use crate::config::schema::ParamMap;

/// A compiled route: either a concrete leaf or a collection of routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Route {
    Simple(SimpleRoute),
    Collection(RouteCollection),
}

impl Route {
    /// Unique identity of this route within its table.
    pub fn name(&self) -> &str {
        match self {
            Route::Simple(route) => route.name(),
            Route::Collection(collection) => collection.name(),
        }
    }

    /// Apply process-wide default options. Keys the route already defines
    /// are left untouched; route-level options always win.
    pub fn set_default_options(&mut self, defaults: &ParamMap) {
        match self {
            Route::Simple(route) => route.set_default_options(defaults),
            Route::Collection(collection) => collection.set_default_options(defaults),
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Route::Collection(_))
    }
}

/// A single pattern-to-parameters route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleRoute {
    name: String,
    pattern: String,
    defaults: ParamMap,
    requirements: ParamMap,
    options: ParamMap,
}

impl SimpleRoute {
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        defaults: ParamMap,
        requirements: ParamMap,
        options: ParamMap,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            defaults,
            requirements,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn defaults(&self) -> &ParamMap {
        &self.defaults
    }

    pub fn requirements(&self) -> &ParamMap {
        &self.requirements
    }

    pub fn options(&self) -> &ParamMap {
        &self.options
    }

    fn set_default_options(&mut self, defaults: &ParamMap) {
        merge_missing(&mut self.options, defaults);
    }
}

/// A named grouping of routes. Never dispatched directly; flattening
/// replaces it with its leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCollection {
    name: String,
    options: ParamMap,
    routes: Vec<(String, Route)>,
}

impl RouteCollection {
    /// `options` is the full injected options map and always carries the
    /// `name` and `requirements` keys by the time it gets here.
    pub fn new(name: impl Into<String>, options: ParamMap) -> Self {
        Self {
            name: name.into(),
            options,
            routes: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &ParamMap {
        &self.options
    }

    /// Append a child under its final (already prefixed) name.
    pub fn push(&mut self, name: impl Into<String>, route: Route) {
        self.routes.push((name.into(), route));
    }

    /// Ordered enumeration of contained named entries.
    pub fn routes(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.routes.iter().map(|(name, route)| (name.as_str(), route))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn set_default_options(&mut self, defaults: &ParamMap) {
        merge_missing(&mut self.options, defaults);
    }
}

fn merge_missing(options: &mut ParamMap, defaults: &ParamMap) {
    for (key, value) in defaults {
        if !options.contains_key(key) {
            options.insert(key.clone(), value.clone());
        }
    }
}
