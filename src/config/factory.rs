//! Factory settings: the source of process-wide default route options.

use std::path::Path;

use crate::config::loader::ConfigError;
use crate::config::schema::ParamMap;

/// Read the default route options from a factory-settings TOML file.
///
/// The options live in the `[routing.param]` table; a missing table means
/// no defaults. The `cache` key is internal bookkeeping of the factory
/// configuration and is stripped before the options reach any route.
pub fn load_default_options(path: &Path) -> Result<ParamMap, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|source| ConfigError::Missing {
            path: path.to_path_buf(),
            source,
        })?;

    let table: toml::Table = content.parse().map_err(|source| malformed(path, source))?;

    let mut options = match table.get("routing").and_then(|r| r.get("param")) {
        Some(param) => param
            .clone()
            .try_into::<ParamMap>()
            .map_err(|source| malformed(path, source))?,
        None => ParamMap::new(),
    };

    options.shift_remove("cache");

    Ok(options)
}

fn malformed(path: &Path, source: toml::de::Error) -> ConfigError {
    ConfigError::Malformed {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_factory(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("factories.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_reads_routing_param_table() {
        let (_dir, path) = write_factory(
            "[routing.param]\nextra_parameters_as_query_string = true\nsegment_separators = \"/.\"\n",
        );

        let options = load_default_options(&path).unwrap();
        assert_eq!(
            options.get("extra_parameters_as_query_string"),
            Some(&serde_json::Value::Bool(true))
        );
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_strips_cache_key() {
        let (_dir, path) =
            write_factory("[routing.param]\ncache = \"filesystem\"\nlazy_routes_deserialize = true\n");

        let options = load_default_options(&path).unwrap();
        assert!(options.get("cache").is_none());
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_missing_table_means_no_defaults() {
        let (_dir, path) = write_factory("[logging]\nlevel = \"info\"\n");

        let options = load_default_options(&path).unwrap();
        assert!(options.is_empty());
    }
}
