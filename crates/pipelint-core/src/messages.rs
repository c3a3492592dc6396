//! Message catalog for validation output
//!
//! Every user-facing string the validator produces is looked up through a
//! [`MessageCatalog`] by [`MessageKey`], then `{name}` placeholders are
//! filled from the supplied parameters. [`DefaultMessages`] renders the
//! built-in English text; [`MessageTable`] renders templates loaded from a
//! JSON or YAML key/template map and falls back to the defaults.
//!
//! Copyright (c) 2025 Pipelint Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::OnceLock;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

/// Keys of every message the validator can emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MessageKey {
    /// A required field is empty
    FieldRequired,
    /// Pipeline name contains characters outside the allowed set
    InvalidPipelineName,
    /// Another pipeline already uses the name
    PipelineNameExists,
    /// Existing pipeline reads fields the index does not have.
    /// Parameter: `commaSeparatedMissingSourceFields`
    MissingSourceFields,
    /// Existing pipeline is already attached to the index
    PipelineAlreadyAttached,
    /// Placeholder of the model selector
    ModelSelectPlaceholder,
    /// Shown in place of a model that is not visible in the current space
    ModelRedactedValue,
}

impl MessageKey {
    /// Every key, in declaration order
    pub const ALL: [MessageKey; 7] = [
        MessageKey::FieldRequired,
        MessageKey::InvalidPipelineName,
        MessageKey::PipelineNameExists,
        MessageKey::MissingSourceFields,
        MessageKey::PipelineAlreadyAttached,
        MessageKey::ModelSelectPlaceholder,
        MessageKey::ModelRedactedValue,
    ];

    /// Stable identifier used in message tables
    pub fn id(&self) -> &'static str {
        match self {
            MessageKey::FieldRequired => "pipelines.configure.emptyValueError",
            MessageKey::InvalidPipelineName => "pipelines.configure.invalidPipelineName",
            MessageKey::PipelineNameExists => "pipelines.configure.pipelineNameExistsError",
            MessageKey::MissingSourceFields => {
                "pipelines.configure.existingPipeline.missingSourceFieldsDescription"
            }
            MessageKey::PipelineAlreadyAttached => {
                "pipelines.configure.existingPipeline.disabledPipelineExistsDescription"
            }
            MessageKey::ModelSelectPlaceholder => "pipelines.configure.model.placeholder",
            MessageKey::ModelRedactedValue => "pipelines.configure.model.redactedValue",
        }
    }

    /// Built-in English template
    pub fn default_template(&self) -> &'static str {
        match self {
            MessageKey::FieldRequired => "Field is required.",
            MessageKey::InvalidPipelineName => {
                "Name must only contain letters, numbers, underscores, and hyphens."
            }
            MessageKey::PipelineNameExists => "Name already used by another pipeline.",
            MessageKey::MissingSourceFields => {
                "Fields missing in this index: {commaSeparatedMissingSourceFields}"
            }
            MessageKey::PipelineAlreadyAttached => {
                "This pipeline cannot be selected because it is already attached."
            }
            MessageKey::ModelSelectPlaceholder => "Select a model",
            MessageKey::ModelRedactedValue => "This model isn't available in the Kibana space",
        }
    }

    /// Look a key up by its table identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.id() == id)
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Source of localized message templates
pub trait MessageCatalog {
    /// Template for a key, with `{name}` placeholders left in place
    fn template(&self, key: MessageKey) -> Cow<'_, str>;

    /// Render a key with its parameters substituted
    fn render(&self, key: MessageKey, params: &[(&str, &str)]) -> String {
        interpolate(&self.template(key), params)
    }
}

impl<C: MessageCatalog + ?Sized> MessageCatalog for &C {
    fn template(&self, key: MessageKey) -> Cow<'_, str> {
        (**self).template(key)
    }
}

impl<C: MessageCatalog + ?Sized> MessageCatalog for Box<C> {
    fn template(&self, key: MessageKey) -> Cow<'_, str> {
        (**self).template(key)
    }
}

/// Built-in English messages
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl MessageCatalog for DefaultMessages {
    fn template(&self, key: MessageKey) -> Cow<'_, str> {
        Cow::Borrowed(key.default_template())
    }
}

/// Messages loaded from a key/template table
///
/// Keys are the identifiers returned by [`MessageKey::id`]. Keys missing
/// from the table render the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageTable {
    templates: HashMap<String, String>,
}

impl MessageTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the template for one key
    pub fn with_template(mut self, key: MessageKey, template: impl Into<String>) -> Self {
        self.templates.insert(key.id().to_string(), template.into());
        self
    }

    /// Parse a table from a JSON object
    pub fn from_json_str(input: &str) -> Result<Self> {
        let table: Self = serde_json::from_str(input)?;
        table.log_unknown_keys();
        Ok(table)
    }

    /// Parse a table from a YAML mapping
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let table: Self = serde_yaml::from_str(input)?;
        table.log_unknown_keys();
        Ok(table)
    }

    /// Load a table from disk, picking the format by extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(Error::invalid_document(
                format!(
                    "unsupported message table extension {:?} for {}",
                    other.unwrap_or(""),
                    path.display()
                ),
                Some("a .json, .yaml or .yml file"),
            )),
        }
    }

    /// Number of templates in the table
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True when the table overrides nothing
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    fn log_unknown_keys(&self) {
        for id in self.templates.keys() {
            if MessageKey::from_id(id).is_none() {
                tracing::debug!(id = %id, "Ignoring unknown message table key");
            }
        }
    }
}

impl MessageCatalog for MessageTable {
    fn template(&self, key: MessageKey) -> Cow<'_, str> {
        match self.templates.get(key.id()) {
            Some(template) => Cow::Borrowed(template.as_str()),
            None => Cow::Borrowed(key.default_template()),
        }
    }
}

/// Replace `{name}` placeholders in a single pass
///
/// Unknown placeholders are left untouched and substituted values are never
/// rescanned.
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let regex = PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid")
    });

    regex
        .replace_all(template, |caps: &Captures<'_>| {
            let name = &caps[1];
            params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_messages_render_english() {
        let catalog = DefaultMessages;
        assert_eq!(catalog.render(MessageKey::FieldRequired, &[]), "Field is required.");
        assert_eq!(
            catalog.render(
                MessageKey::MissingSourceFields,
                &[("commaSeparatedMissingSourceFields", "title, body")]
            ),
            "Fields missing in this index: title, body"
        );
    }

    #[test]
    fn test_interpolate_is_single_pass() {
        let rendered = interpolate("{a} and {b}", &[("a", "{b}"), ("b", "x")]);
        assert_eq!(rendered, "{b} and x");
    }

    #[test]
    fn test_interpolate_leaves_unknown_placeholders() {
        assert_eq!(interpolate("missing {field}", &[]), "missing {field}");
    }

    #[test]
    fn test_message_table_falls_back_to_defaults() {
        let table = MessageTable::new().with_template(MessageKey::FieldRequired, "Champ requis.");
        assert_eq!(table.render(MessageKey::FieldRequired, &[]), "Champ requis.");
        assert_eq!(
            table.render(MessageKey::PipelineNameExists, &[]),
            "Name already used by another pipeline."
        );
    }

    #[test]
    fn test_message_table_from_yaml() {
        let table = MessageTable::from_yaml_str(
            "pipelines.configure.existingPipeline.missingSourceFieldsDescription: \"Champs manquants : {commaSeparatedMissingSourceFields}\"\n",
        )
        .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(
            table.render(
                MessageKey::MissingSourceFields,
                &[("commaSeparatedMissingSourceFields", "a")]
            ),
            "Champs manquants : a"
        );
    }

    #[test]
    fn test_message_table_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("messages.txt");
        std::fs::write(&path, "{}").unwrap();
        assert!(matches!(
            MessageTable::from_path(&path),
            Err(Error::InvalidDocument { .. })
        ));
    }

    #[test]
    fn test_key_ids_round_trip() {
        for key in MessageKey::ALL {
            assert_eq!(MessageKey::from_id(key.id()), Some(key));
        }
        assert_eq!(MessageKey::from_id("nope"), None);
    }
}
