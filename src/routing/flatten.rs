//! Route table and collection flattening.
//!
//! # Responsibilities
//! - Hold the final ordered `(name, route)` sequence with unique names
//! - Expand nested collections depth-first, in source order
//!
//! # Design Decisions
//! - Collections are pure grouping constructs: only leaves enter the table
//! - Re-inserting an existing name replaces the value AND relocates the
//!   entry to the end of iteration order, so a later definition wins at its
//!   own position
//! - Frozen after the compile pass; dispatch iterates it first-match-wins

use crate::routing::route::Route;

/// Ordered sequence of uniquely named routes, the durable output of a
/// compile pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteTable {
    entries: Vec<(String, Route)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-update. An existing name is removed first, so the entry
    /// ends up at the current end of the table.
    pub fn insert(&mut self, name: impl Into<String>, route: Route) {
        let name = name.into();
        if let Some(position) = self.entries.iter().position(|(n, _)| *n == name) {
            self.entries.remove(position);
        }
        self.entries.push((name, route));
    }

    pub fn get(&self, name: &str) -> Option<&Route> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, route)| route)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Route)> {
        self.entries.iter().map(|(name, route)| (name.as_str(), route))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub(crate) fn routes_mut(&mut self) -> impl Iterator<Item = &mut Route> {
        self.entries.iter_mut().map(|(_, route)| route)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = (&'a str, &'a Route);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Route)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Flatten top-level routes into a table, expanding collections in place.
pub fn flatten(routes: &[(String, Route)]) -> RouteTable {
    let mut table = RouteTable::new();
    for (name, route) in routes {
        flatten_into(&mut table, name, route);
    }
    table
}

fn flatten_into(table: &mut RouteTable, name: &str, route: &Route) {
    match route {
        Route::Collection(collection) => {
            for (child_name, child) in collection.routes() {
                flatten_into(table, child_name, child);
            }
        }
        Route::Simple(_) => table.insert(name, route.clone()),
    }
}
