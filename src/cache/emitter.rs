//! Cache fragment emission.

use chrono::{DateTime, Local};

use crate::cache::CacheError;
use crate::routing::flatten::RouteTable;

/// Generator name written into the fragment header.
pub const GENERATOR: &str = "routec";

/// Serialize the table into a re-loadable textual fragment.
///
/// Format: a two-line header comment (generator name, local timestamp),
/// then one assignment statement per entry in table order, each embedding
/// the serialized route as an escaped string literal.
pub fn emit(table: &RouteTable) -> Result<String, CacheError> {
    emit_at(table, Local::now())
}

fn emit_at(table: &RouteTable, timestamp: DateTime<Local>) -> Result<String, CacheError> {
    let mut fragment = String::new();
    fragment.push_str(&format!("// auto-generated by {GENERATOR}\n"));
    fragment.push_str(&format!("// date: {}\n", timestamp.format("%Y/%m/%d %H:%M:%S")));

    for (name, route) in table.iter() {
        let serialized = serde_json::to_string(route)?;
        let literal = serde_json::to_string(&serialized)?;
        fragment.push_str(&format!("routes[\"{name}\"] = {literal};\n"));
    }

    Ok(fragment)
}
