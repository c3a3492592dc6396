//! Shared utilities for command handlers

use crate::config::Config;
use crate::error::{Error, Result};
use pipelint_core::MessageTable;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Whether a path names a YAML document
fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
}

/// Load a JSON or YAML document, picking the format by extension
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
            reason: e.to_string(),
        })
    } else {
        serde_json::from_str(&content).map_err(|e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
            reason: e.to_string(),
        })
    }
}

/// Load the message table to use, if any
///
/// A table given on the command line wins over the configured one. With
/// neither, the built-in messages apply through an empty table.
pub fn load_catalog(explicit: Option<&Path>, config: &Config) -> Result<MessageTable> {
    let path = match explicit.or(config.messages.table.as_deref()) {
        Some(path) => path,
        None => return Ok(MessageTable::new()),
    };

    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let table = MessageTable::from_path(path)?;
    debug!(path = %path.display(), templates = table.len(), "Loaded message table");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipelint_core::{MessageCatalog, MessageKey};
    use std::path::PathBuf;

    #[test]
    fn test_load_document_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let yaml = dir.path().join("doc.yml");
        fs::write(&yaml, "a: 1\n").unwrap();
        let value: serde_json::Value = load_document(&yaml).unwrap();
        assert_eq!(value["a"], serde_json::json!(1));

        let json = dir.path().join("doc.json");
        fs::write(&json, "{not json").unwrap();
        let result: Result<serde_json::Value> = load_document(&json);
        assert!(matches!(result, Err(Error::InvalidFormat { ref expected, .. }) if expected == "JSON"));
    }

    #[test]
    fn test_load_document_missing_file() {
        let result: Result<serde_json::Value> = load_document(Path::new("/nonexistent/doc.json"));
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }

    #[test]
    fn test_load_catalog_prefers_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let configured = dir.path().join("configured.json");
        let explicit = dir.path().join("explicit.json");
        fs::write(&configured, r#"{"pipelines.configure.emptyValueError": "configured"}"#).unwrap();
        fs::write(&explicit, r#"{"pipelines.configure.emptyValueError": "explicit"}"#).unwrap();

        let mut config = Config::default();
        config.messages.table = Some(configured);

        let table = load_catalog(Some(explicit.as_path()), &config).unwrap();
        assert_eq!(table.render(MessageKey::FieldRequired, &[]), "explicit");

        let table = load_catalog(None, &config).unwrap();
        assert_eq!(table.render(MessageKey::FieldRequired, &[]), "configured");
    }

    #[test]
    fn test_load_catalog_defaults_to_builtin_messages() {
        let table = load_catalog(None, &Config::default()).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.render(MessageKey::FieldRequired, &[]), "Field is required.");

        let missing = PathBuf::from("/nonexistent/messages.json");
        assert!(matches!(
            load_catalog(Some(missing.as_path()), &Config::default()),
            Err(Error::FileNotFound { .. })
        ));
    }
}
