//! Field-specific validation rules
//!
//! Each rule inspects one aspect of the configuration and returns the key
//! of the message to show, or `None` when the field passes. Rendering the
//! key into text is left to the caller's catalog.
//!
//! Copyright (c) 2025 Pipelint Team
//! Licensed under the Apache-2.0 license

use crate::messages::MessageKey;
use crate::types::InferencePipelineConfiguration;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

static PIPELINE_NAME_REGEX: OnceLock<Regex> = OnceLock::new();

fn pipeline_name_regex() -> &'static Regex {
    PIPELINE_NAME_REGEX
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("pipeline name pattern is valid"))
}

/// Check that a pipeline name only uses ASCII letters, digits, `_` and `-`
///
/// The empty string is not a valid name.
pub fn is_valid_pipeline_name(input: &str) -> bool {
    !input.is_empty() && pipeline_name_regex().is_match(input)
}

/// Validate the pipeline name
///
/// Existing pipelines only need a non-empty name, checked on the raw value.
/// New pipelines are checked for emptiness after trimming, then the
/// untrimmed value is matched against the allowed character set.
pub fn check_pipeline_name(config: &InferencePipelineConfiguration) -> Option<MessageKey> {
    if config.existing_pipeline {
        return config
            .pipeline_name
            .is_empty()
            .then_some(MessageKey::FieldRequired);
    }

    if config.pipeline_name.trim().is_empty() {
        Some(MessageKey::FieldRequired)
    } else if !is_valid_pipeline_name(&config.pipeline_name) {
        Some(MessageKey::InvalidPipelineName)
    } else {
        None
    }
}

/// Validate the model identifier of a new pipeline
pub fn check_model_id(config: &InferencePipelineConfiguration) -> Option<MessageKey> {
    config
        .model_id
        .trim()
        .is_empty()
        .then_some(MessageKey::FieldRequired)
}

/// Validate that input fields are specified one way or the other
///
/// Non-empty field mappings satisfy the requirement on their own.
pub fn check_source_field(config: &InferencePipelineConfiguration) -> Option<MessageKey> {
    if config.has_field_mappings() {
        return None;
    }

    config
        .source_field
        .trim()
        .is_empty()
        .then_some(MessageKey::FieldRequired)
}

/// Validate a pipeline-name lookup result; any hit means the name is taken
pub fn check_name_available<T: ?Sized>(existing_pipeline: Option<&T>) -> Option<MessageKey> {
    existing_pipeline.map(|_| MessageKey::PipelineNameExists)
}

/// Required source fields absent from the index
///
/// Preserves the order of `required` and reports each missing field once.
pub fn missing_source_fields<R, I>(required: &[R], index_fields: &[I]) -> Vec<String>
where
    R: AsRef<str>,
    I: AsRef<str>,
{
    let present: HashSet<&str> = index_fields.iter().map(|field| field.as_ref()).collect();
    let mut reported = HashSet::new();

    required
        .iter()
        .map(|field| field.as_ref())
        .filter(|field| !present.contains(field))
        .filter(|field| reported.insert(*field))
        .map(str::to_string)
        .collect()
}

/// True when `pipeline_name` is among the processors already on the index
pub fn is_attached<P: AsRef<str>>(index_processor_names: &[P], pipeline_name: &str) -> bool {
    index_processor_names
        .iter()
        .any(|name| name.as_ref() == pipeline_name)
}
