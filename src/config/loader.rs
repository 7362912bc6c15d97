//! Definition loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::RouteParams;

/// Error type for definition-source loading.
///
/// The two variants keep "file not there" and "file not parseable" apart so
/// callers can tell the root causes from each other.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A named source cannot be located or read.
    #[error("cannot read configuration source `{path}`: {source}")]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source was read but its content is not the expected mapping shape.
    #[error("configuration source `{path}` is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load an ordered sequence of TOML sources into `(name, params)` pairs.
///
/// Each top-level table entry of a source is one route definition. Later
/// sources override earlier ones key-by-key at the route-name level (no
/// deep merge); an overridden name keeps its original position. Document
/// order is preserved throughout.
pub fn load_definitions(
    sources: &[PathBuf],
) -> Result<Vec<(String, RouteParams)>, ConfigError> {
    let mut definitions: Vec<(String, RouteParams)> = Vec::new();

    for path in sources {
        for (name, params) in load_source(path)? {
            match definitions.iter_mut().find(|(n, _)| *n == name) {
                Some((_, slot)) => *slot = params,
                None => definitions.push((name, params)),
            }
        }
    }

    tracing::debug!(
        sources = sources.len(),
        definitions = definitions.len(),
        "route definitions loaded"
    );

    Ok(definitions)
}

fn load_source(path: &Path) -> Result<Vec<(String, RouteParams)>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Missing {
        path: path.to_path_buf(),
        source,
    })?;

    let table: toml::Table = content.parse().map_err(|source| ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    table
        .into_iter()
        .map(|(name, value)| {
            let params: RouteParams =
                value.try_into().map_err(|source| ConfigError::Malformed {
                    path: path.to_path_buf(),
                    source,
                })?;
            Ok((name, params))
        })
        .collect()
}
