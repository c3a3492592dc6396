//! Core data structures for pipeline configuration validation
//!
//! This module defines the configuration record entered in the pipeline
//! wizard and the per-field error record returned by the validator.
//!
//! Copyright (c) 2025 Pipelint Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Inference pipeline configuration as entered by the user
///
/// Field names on the wire follow the wizard form (`pipelineName`,
/// `modelID`, ...). Snake-case spellings are accepted on input as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferencePipelineConfiguration {
    /// The user picked a pre-existing pipeline instead of defining one
    #[serde(rename = "existingPipeline", alias = "existing_pipeline")]
    pub existing_pipeline: bool,

    /// Pipeline identifier, required in both modes
    #[serde(rename = "pipelineName", alias = "pipeline_name")]
    pub pipeline_name: String,

    /// Inference model identifier, required for new pipelines only
    #[serde(rename = "modelID", alias = "model_id")]
    pub model_id: String,

    /// Document field to run inference over
    #[serde(rename = "sourceField", alias = "source_field")]
    pub source_field: String,

    /// Explicit field mappings; when non-empty they replace `source_field`
    #[serde(
        rename = "fieldMappings",
        alias = "field_mappings",
        skip_serializing_if = "Option::is_none"
    )]
    pub field_mappings: Option<BTreeMap<String, String>>,
}

impl InferencePipelineConfiguration {
    /// Configuration for a new pipeline running `model_id`
    pub fn new_pipeline(pipeline_name: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            pipeline_name: pipeline_name.into(),
            model_id: model_id.into(),
            ..Self::default()
        }
    }

    /// Configuration selecting an already existing pipeline
    pub fn existing(pipeline_name: impl Into<String>) -> Self {
        Self {
            existing_pipeline: true,
            pipeline_name: pipeline_name.into(),
            ..Self::default()
        }
    }

    /// Set the single source field
    pub fn with_source_field(mut self, source_field: impl Into<String>) -> Self {
        self.source_field = source_field.into();
        self
    }

    /// Add one source-to-target field mapping
    pub fn with_field_mapping(
        mut self,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        self.field_mappings
            .get_or_insert_with(BTreeMap::new)
            .insert(source.into(), target.into());
        self
    }

    /// True when at least one field mapping is configured
    pub fn has_field_mappings(&self) -> bool {
        self.field_mappings
            .as_ref()
            .is_some_and(|mappings| !mappings.is_empty())
    }

    /// Parse a configuration from a JSON document
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse a configuration from a YAML document
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(input)?)
    }
}

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FormField {
    #[serde(rename = "pipelineName")]
    PipelineName,
    #[serde(rename = "modelID")]
    ModelId,
    #[serde(rename = "sourceField")]
    SourceField,
}

impl FormField {
    /// All fields in display order
    pub const ALL: [FormField; 3] = [
        FormField::PipelineName,
        FormField::ModelId,
        FormField::SourceField,
    ];

    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::PipelineName => "pipelineName",
            FormField::ModelId => "modelID",
            FormField::SourceField => "sourceField",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation messages
///
/// A field is either present with a non-empty message or absent. Inserting
/// an empty message leaves the record unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors {
    errors: BTreeMap<FormField, String>,
}

impl FormErrors {
    /// Create an empty error record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for a field, replacing any previous one
    ///
    /// Returns false when the message was empty and nothing was stored.
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) -> bool {
        let message = message.into();
        if message.is_empty() {
            return false;
        }
        self.errors.insert(field, message);
        true
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// True when the field failed
    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Number of failed fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when every field is valid
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over failed fields in display order
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// Fold another record into this one; existing messages win
    pub fn merge(&mut self, other: FormErrors) {
        for (field, message) in other.errors {
            self.errors.entry(field).or_insert(message);
        }
    }

    /// Consume the record, returning the underlying map
    pub fn into_inner(self) -> BTreeMap<FormField, String> {
        self.errors
    }
}

impl From<FormErrors> for BTreeMap<FormField, String> {
    fn from(errors: FormErrors) -> Self {
        errors.into_inner()
    }
}
