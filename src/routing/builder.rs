//! Dynamic route construction.
//!
//! # Responsibilities
//! - Map class-name strings to constructor functions
//! - Validate constructor argument arity and types
//! - Build nested collection children through the same registry
//!
//! # Design Decisions
//! - Registry-based factory over a closed set instead of open-ended
//!   reflection; unregistered identifiers are a hard `ConstructionError`
//! - Constructors receive the registry so collection variants can construct
//!   their children recursively
//! - Any construction failure aborts the whole compile pass; there is no
//!   partial table

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::config::schema::{ParamMap, RouteParams};
use crate::routing::classify::{
    classify, RouteDefinition, DEFAULT_COLLECTION_CLASS, DEFAULT_ROUTE_CLASS,
};
use crate::routing::route::{Route, RouteCollection, SimpleRoute};

/// Errors that can occur while constructing routes from definitions.
#[derive(Debug, Error)]
pub enum ConstructionError {
    /// The class name is not registered.
    #[error("unknown route class `{0}`")]
    UnknownClass(String),

    /// The argument count does not match the constructor.
    #[error("route class `{class}` expects {expected} constructor arguments, got {got}")]
    Arity {
        class: String,
        expected: usize,
        got: usize,
    },

    /// An argument has the wrong type or an invalid value.
    #[error("route class `{class}`: invalid `{argument}` argument: {reason}")]
    InvalidArgument {
        class: String,
        argument: &'static str,
        reason: String,
    },
}

/// Constructor signature: definition name, ordered arguments, and the
/// registry itself for nested construction.
pub type Constructor =
    fn(&str, &[Value], &ConstructorRegistry) -> Result<Route, ConstructionError>;

/// Class-name → constructor mapping, populated at startup.
#[derive(Debug, Clone)]
pub struct ConstructorRegistry {
    constructors: HashMap<String, Constructor>,
}

impl Default for ConstructorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl ConstructorRegistry {
    /// Registry seeded with the two built-in variants.
    pub fn with_builtins() -> Self {
        let mut registry = Self {
            constructors: HashMap::new(),
        };
        registry.register(DEFAULT_ROUTE_CLASS, construct_simple);
        registry.register(DEFAULT_COLLECTION_CLASS, construct_collection);
        registry
    }

    /// Register (or replace) a constructor for a class name.
    pub fn register(&mut self, class: impl Into<String>, constructor: Constructor) {
        self.constructors.insert(class.into(), constructor);
    }

    /// Construct the route a definition describes.
    pub fn construct(&self, definition: &RouteDefinition) -> Result<Route, ConstructionError> {
        let constructor = self
            .constructors
            .get(&definition.class)
            .ok_or_else(|| ConstructionError::UnknownClass(definition.class.clone()))?;

        constructor(&definition.name, &definition.args, self)
    }
}

fn construct_simple(
    name: &str,
    args: &[Value],
    _registry: &ConstructorRegistry,
) -> Result<Route, ConstructionError> {
    check_arity(DEFAULT_ROUTE_CLASS, args, 4)?;

    let pattern = args[0]
        .as_str()
        .ok_or_else(|| invalid(DEFAULT_ROUTE_CLASS, "pattern", "expected a string"))?;
    let defaults = as_map(DEFAULT_ROUTE_CLASS, "defaults", &args[1])?;
    let requirements = as_map(DEFAULT_ROUTE_CLASS, "requirements", &args[2])?;
    let options = as_map(DEFAULT_ROUTE_CLASS, "options", &args[3])?;

    Ok(Route::Simple(SimpleRoute::new(
        name,
        pattern,
        defaults,
        requirements,
        options,
    )))
}

fn construct_collection(
    name: &str,
    args: &[Value],
    registry: &ConstructorRegistry,
) -> Result<Route, ConstructionError> {
    check_arity(DEFAULT_COLLECTION_CLASS, args, 1)?;

    let options = as_map(DEFAULT_COLLECTION_CLASS, "options", &args[0])?;

    let prefix = match options.get("prefix") {
        None => None,
        Some(Value::String(prefix)) => Some(prefix.clone()),
        Some(_) => {
            return Err(invalid(
                DEFAULT_COLLECTION_CLASS,
                "prefix",
                "expected a string",
            ))
        }
    };

    let children = match options.get("routes") {
        None => Vec::new(),
        Some(Value::Object(routes)) => routes.clone().into_iter().collect(),
        Some(_) => {
            return Err(invalid(
                DEFAULT_COLLECTION_CLASS,
                "routes",
                "expected a table of route definitions",
            ))
        }
    };

    let mut collection = RouteCollection::new(name, options);

    for (key, body) in children {
        let child_name = match &prefix {
            Some(prefix) => format!("{prefix}{key}"),
            None => key,
        };
        let params: RouteParams = serde_json::from_value(body).map_err(|err| {
            ConstructionError::InvalidArgument {
                class: DEFAULT_COLLECTION_CLASS.to_string(),
                argument: "routes",
                reason: format!("entry `{child_name}`: {err}"),
            }
        })?;

        let definition = classify(&child_name, &params);
        let route = registry.construct(&definition)?;
        collection.push(child_name, route);
    }

    Ok(Route::Collection(collection))
}

fn check_arity(class: &str, args: &[Value], expected: usize) -> Result<(), ConstructionError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ConstructionError::Arity {
            class: class.to_string(),
            expected,
            got: args.len(),
        })
    }
}

fn as_map(class: &str, argument: &'static str, value: &Value) -> Result<ParamMap, ConstructionError> {
    value
        .as_object()
        .cloned()
        .ok_or_else(|| invalid(class, argument, "expected a mapping"))
}

fn invalid(class: &str, argument: &'static str, reason: &str) -> ConstructionError {
    ConstructionError::InvalidArgument {
        class: class.to_string(),
        argument,
        reason: reason.to_string(),
    }
}
