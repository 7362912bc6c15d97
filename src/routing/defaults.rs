//! Default-options merging.

use crate::config::schema::ParamMap;
use crate::routing::flatten::RouteTable;

/// Apply process-wide default options to every route in the table, exactly
/// once per route. Precedence is the route's own responsibility: keys a
/// route already defines are never overwritten.
pub fn apply_default_options(table: &mut RouteTable, defaults: &ParamMap) {
    if defaults.is_empty() {
        return;
    }
    for route in table.routes_mut() {
        route.set_default_options(defaults);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::route::{Route, SimpleRoute};
    use serde_json::json;

    fn options(pairs: &[(&str, serde_json::Value)]) -> ParamMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_defaults_fill_gaps_without_clobbering() {
        let mut table = RouteTable::new();
        table.insert(
            "explicit",
            Route::Simple(SimpleRoute::new(
                "explicit",
                "/a",
                ParamMap::new(),
                ParamMap::new(),
                options(&[("foo", json!(1))]),
            )),
        );
        table.insert(
            "bare",
            Route::Simple(SimpleRoute::new(
                "bare",
                "/b",
                ParamMap::new(),
                ParamMap::new(),
                ParamMap::new(),
            )),
        );

        apply_default_options(&mut table, &options(&[("foo", json!(2))]));

        let Some(Route::Simple(explicit)) = table.get("explicit") else {
            panic!("missing entry")
        };
        assert_eq!(explicit.options().get("foo"), Some(&json!(1)));

        let Some(Route::Simple(bare)) = table.get("bare") else {
            panic!("missing entry")
        };
        assert_eq!(bare.options().get("foo"), Some(&json!(2)));
    }
}
