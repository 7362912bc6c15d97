//! Cache fragment re-loading.

use crate::cache::CacheError;
use crate::routing::flatten::RouteTable;
use crate::routing::route::Route;

/// Parse an emitted fragment back into a route table.
///
/// Comment lines and blank lines are skipped; every other line must be a
/// `routes["<name>"] = "<escaped json>";` statement. The reconstructed
/// table keeps statement order.
pub fn load(fragment: &str) -> Result<RouteTable, CacheError> {
    let mut table = RouteTable::new();

    for (index, raw) in fragment.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        let (name, literal) = split_statement(line).ok_or_else(|| CacheError::Malformed {
            line: index + 1,
            reason: "expected `routes[\"<name>\"] = \"...\";`".to_string(),
        })?;

        let serialized: String =
            serde_json::from_str(literal).map_err(|err| CacheError::Malformed {
                line: index + 1,
                reason: format!("bad string literal: {err}"),
            })?;
        let route: Route =
            serde_json::from_str(&serialized).map_err(|err| CacheError::Malformed {
                line: index + 1,
                reason: format!("bad route payload: {err}"),
            })?;

        table.insert(name, route);
    }

    Ok(table)
}

fn split_statement(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix("routes[\"")?;
    let (name, rest) = rest.split_once("\"]")?;
    let literal = rest.strip_prefix(" = ")?.strip_suffix(';')?;
    Some((name, literal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::emitter::emit;
    use crate::config::schema::ParamMap;
    use crate::routing::route::SimpleRoute;
    use serde_json::json;

    fn sample_table() -> RouteTable {
        let mut options = ParamMap::new();
        options.insert("compress".to_string(), json!(true));

        let mut table = RouteTable::new();
        table.insert(
            "home",
            Route::Simple(SimpleRoute::new(
                "home",
                "/",
                ParamMap::new(),
                ParamMap::new(),
                options,
            )),
        );
        table.insert(
            "blog_show",
            Route::Simple(SimpleRoute::new(
                "blog_show",
                "/blog/:id",
                ParamMap::new(),
                ParamMap::new(),
                ParamMap::new(),
            )),
        );
        table
    }

    #[test]
    fn test_round_trip_preserves_names_order_and_routes() {
        let table = sample_table();
        let fragment = emit(&table).unwrap();

        let reloaded = load(&fragment).unwrap();
        assert_eq!(reloaded, table);
    }

    #[test]
    fn test_malformed_statement_is_rejected() {
        let err = load("routes[home] = nope\n").unwrap_err();
        assert!(matches!(err, CacheError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_bad_payload_is_rejected() {
        let err = load("routes[\"home\"] = \"not json\";\n").unwrap_err();
        assert!(matches!(err, CacheError::Malformed { line: 1, .. }));
    }
}
