//! Definition classification.
//!
//! Decides, for every named entry, whether it denotes a single route or a
//! route collection, and normalizes it into a class name plus ordered
//! constructor arguments. No validation happens here beyond presence
//! checks; bad class references only surface when the builder runs.

use serde_json::Value;

use crate::config::schema::RouteParams;

/// Built-in class name for simple routes.
pub const DEFAULT_ROUTE_CLASS: &str = "Route";

/// Built-in class name for collections. Collection detection keys off the
/// `Collection` substring, so the default matches itself.
pub const DEFAULT_COLLECTION_CLASS: &str = "RouteCollection";

/// A classified definition: which class to construct and with which ordered
/// arguments. Immutable once built.
///
/// Two shapes exist:
/// - simple: `args = [pattern, defaults, requirements, options]`
/// - collection: `args = [options]`, where options always carries `name`
///   and `requirements`
#[derive(Debug, Clone, PartialEq)]
pub struct RouteDefinition {
    pub name: String,
    pub class: String,
    pub args: Vec<Value>,
}

/// Classify one named entry.
pub fn classify(name: &str, params: &RouteParams) -> RouteDefinition {
    if is_collection(params) {
        classify_collection(name, params)
    } else {
        classify_simple(name, params)
    }
}

fn is_collection(params: &RouteParams) -> bool {
    params.kind.as_deref() == Some("collection")
        || params
            .class
            .as_deref()
            .is_some_and(|class| class.contains("Collection"))
}

fn classify_collection(name: &str, params: &RouteParams) -> RouteDefinition {
    let mut options = params.options.clone().unwrap_or_default();

    // Injected values win over same-named keys the source already set.
    options.insert("name".to_string(), Value::String(name.to_string()));
    options.insert(
        "requirements".to_string(),
        Value::Object(params.requirements.clone().unwrap_or_default()),
    );

    RouteDefinition {
        name: name.to_string(),
        class: class_or(params, DEFAULT_COLLECTION_CLASS),
        args: vec![Value::Object(options)],
    }
}

fn classify_simple(name: &str, params: &RouteParams) -> RouteDefinition {
    let url = match params.url.as_deref() {
        Some(url) if !url.is_empty() => url,
        _ => "/",
    };

    let defaults = params
        .params
        .clone()
        .or_else(|| params.param.clone())
        .unwrap_or_default();

    RouteDefinition {
        name: name.to_string(),
        class: class_or(params, DEFAULT_ROUTE_CLASS),
        args: vec![
            Value::String(url.to_string()),
            Value::Object(defaults),
            Value::Object(params.requirements.clone().unwrap_or_default()),
            Value::Object(params.options.clone().unwrap_or_default()),
        ],
    }
}

fn class_or(params: &RouteParams, default: &str) -> String {
    params
        .class
        .clone()
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ParamMap;
    use serde_json::json;

    fn map(pairs: &[(&str, serde_json::Value)]) -> ParamMap {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_type_collection_selects_collection_shape() {
        let params = RouteParams {
            kind: Some("collection".to_string()),
            ..RouteParams::default()
        };

        let def = classify("blog", &params);
        assert_eq!(def.class, DEFAULT_COLLECTION_CLASS);
        assert_eq!(def.args.len(), 1);
    }

    #[test]
    fn test_collection_substring_in_class_selects_collection_shape() {
        let params = RouteParams {
            class: Some("ObjectRouteCollection".to_string()),
            ..RouteParams::default()
        };

        let def = classify("blog", &params);
        assert_eq!(def.class, "ObjectRouteCollection");
        assert_eq!(def.args.len(), 1);
    }

    #[test]
    fn test_plain_entry_selects_simple_shape() {
        let params = RouteParams {
            url: Some("/blog/:id".to_string()),
            ..RouteParams::default()
        };

        let def = classify("blog_show", &params);
        assert_eq!(def.class, DEFAULT_ROUTE_CLASS);
        assert_eq!(def.args.len(), 4);
        assert_eq!(def.args[0], json!("/blog/:id"));
    }

    #[test]
    fn test_collection_default_injection_is_exact() {
        let params = RouteParams {
            kind: Some("collection".to_string()),
            ..RouteParams::default()
        };

        let def = classify("blog", &params);
        let expected = json!({"name": "blog", "requirements": {}});
        assert_eq!(def.args[0], expected);
    }

    #[test]
    fn test_injected_keys_overwrite_source_options() {
        let params = RouteParams {
            kind: Some("collection".to_string()),
            options: Some(map(&[
                ("name", json!("spoofed")),
                ("model", json!("Article")),
            ])),
            requirements: Some(map(&[("id", json!(r"\d+"))])),
            ..RouteParams::default()
        };

        let def = classify("articles", &params);
        let options = def.args[0].as_object().unwrap();
        assert_eq!(options.get("name"), Some(&json!("articles")));
        assert_eq!(options.get("model"), Some(&json!("Article")));
        assert_eq!(options.get("requirements"), Some(&json!({"id": r"\d+"})));
    }

    #[test]
    fn test_empty_url_becomes_root() {
        let params = RouteParams {
            url: Some(String::new()),
            ..RouteParams::default()
        };

        let def = classify("home", &params);
        assert_eq!(def.args[0], json!("/"));
    }

    #[test]
    fn test_param_is_fallback_for_params() {
        let singular_only = RouteParams {
            url: Some("/x".to_string()),
            param: Some(map(&[("module", json!("default"))])),
            ..RouteParams::default()
        };
        let def = classify("x", &singular_only);
        assert_eq!(def.args[1], json!({"module": "default"}));

        let both = RouteParams {
            url: Some("/x".to_string()),
            params: Some(map(&[("module", json!("blog"))])),
            param: Some(map(&[("module", json!("ignored"))])),
            ..RouteParams::default()
        };
        let def = classify("x", &both);
        assert_eq!(def.args[1], json!({"module": "blog"}));
    }
}
