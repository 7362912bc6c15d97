//! Raw definition schema.
//!
//! This module defines the shape of one declarative route definition as it
//! appears in a source file, before classification. All fields are optional;
//! the classifier decides what missing keys mean.

use serde::{Deserialize, Serialize};

/// Order-preserving mapping used for defaults, requirements and options.
pub type ParamMap = serde_json::Map<String, serde_json::Value>;

/// One raw route definition body, keyed by route name in the source file.
///
/// Recognized keys only; anything else in the source is ignored rather than
/// rejected, so definition files can carry annotations for other tools.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteParams {
    /// Definition kind; `"collection"` forces the collection shape.
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Explicit route class name, overriding the built-in defaults.
    pub class: Option<String>,

    /// URL pattern for simple routes. Empty or absent means `/`.
    pub url: Option<String>,

    /// Default parameter values bound when the route matches.
    pub params: Option<ParamMap>,

    /// Legacy singular spelling of `params`; consulted only when `params`
    /// is absent.
    pub param: Option<ParamMap>,

    /// Pattern requirements (per-placeholder constraints).
    pub requirements: Option<ParamMap>,

    /// Free-form route options.
    pub options: Option<ParamMap>,
}
