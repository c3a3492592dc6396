//! Core validation engine and PipelineConfigValidator implementation
//!
//! This module contains the PipelineConfigValidator struct, which runs the
//! field rules and renders their outcome through a message catalog.
//!
//! Copyright (c) 2025 Pipelint Team
//! Licensed under the Apache-2.0 license

use super::field_validators::{
    check_model_id, check_name_available, check_pipeline_name, check_source_field, is_attached,
};
use crate::messages::{DefaultMessages, MessageCatalog, MessageKey};
use crate::types::{FormErrors, FormField, InferencePipelineConfiguration};
use tracing::{debug, trace};

/// Validator for the inference pipeline configuration form
///
/// Every operation is a pure function of its arguments; the validator only
/// carries the catalog used to render messages. The same input always
/// yields an equal result.
#[derive(Debug, Clone, Default)]
pub struct PipelineConfigValidator<C = DefaultMessages> {
    catalog: C,
}

impl PipelineConfigValidator<DefaultMessages> {
    /// Create a validator producing the built-in English messages
    pub fn new() -> Self {
        Self {
            catalog: DefaultMessages,
        }
    }
}

impl<C: MessageCatalog> PipelineConfigValidator<C> {
    /// Create a validator rendering messages through `catalog`
    pub fn with_catalog(catalog: C) -> Self {
        Self { catalog }
    }

    /// The catalog messages are rendered with
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Render a parameterless message
    pub fn message(&self, key: MessageKey) -> String {
        self.catalog.render(key, &[])
    }

    /// Validate the name and model of a configuration
    ///
    /// When an existing pipeline is selected only the name is checked.
    pub fn validate_configuration(&self, config: &InferencePipelineConfiguration) -> FormErrors {
        let mut errors = FormErrors::new();

        if let Some(key) = check_pipeline_name(config) {
            trace!(rule = %key, "pipeline name rejected");
            errors.insert(FormField::PipelineName, self.message(key));
        }

        if config.existing_pipeline {
            debug!(errors = errors.len(), "Validated existing pipeline selection");
            return errors;
        }

        if let Some(key) = check_model_id(config) {
            trace!(rule = %key, "model id rejected");
            errors.insert(FormField::ModelId, self.message(key));
        }

        debug!(errors = errors.len(), "Validated new pipeline configuration");
        errors
    }

    /// Turn an already-resolved name lookup into form errors
    ///
    /// `existing_pipeline` is the lookup result for the candidate name;
    /// `None` means no pipeline uses it.
    pub fn validate_name_availability<T: ?Sized>(&self, existing_pipeline: Option<&T>) -> FormErrors {
        let mut errors = FormErrors::new();
        if let Some(key) = check_name_available(existing_pipeline) {
            trace!(rule = %key, "pipeline name already taken");
            errors.insert(FormField::PipelineName, self.message(key));
        }
        errors
    }

    /// Check that a source field is given unless field mappings are
    pub fn validate_source_field_requirement(
        &self,
        config: &InferencePipelineConfiguration,
    ) -> FormErrors {
        let mut errors = FormErrors::new();
        if let Some(key) = check_source_field(config) {
            trace!(rule = %key, "source field rejected");
            errors.insert(FormField::SourceField, self.message(key));
        }
        errors
    }

    /// Why an existing pipeline cannot be selected, if it cannot
    ///
    /// Missing source fields take priority over the pipeline already being
    /// attached to the index.
    pub fn disabled_reason<M, P>(
        &self,
        missing_source_fields: &[M],
        index_processor_names: &[P],
        pipeline_name: &str,
    ) -> Option<String>
    where
        M: AsRef<str>,
        P: AsRef<str>,
    {
        if !missing_source_fields.is_empty() {
            let joined = missing_source_fields
                .iter()
                .map(|field| field.as_ref())
                .collect::<Vec<&str>>()
                .join(", ");
            debug!(pipeline = pipeline_name, missing = %joined, "Pipeline disabled by missing fields");
            return Some(self.catalog.render(
                MessageKey::MissingSourceFields,
                &[("commaSeparatedMissingSourceFields", joined.as_str())],
            ));
        }

        if is_attached(index_processor_names, pipeline_name) {
            debug!(pipeline = pipeline_name, "Pipeline disabled, already attached");
            return Some(self.message(MessageKey::PipelineAlreadyAttached));
        }

        None
    }

    /// Run every check that applies to a configuration
    ///
    /// New pipelines additionally get the source-field rule and, when a
    /// lookup result is supplied, the availability rule. Messages from the
    /// configuration check take precedence for a field.
    pub fn validate_form<T: ?Sized>(
        &self,
        config: &InferencePipelineConfiguration,
        existing_pipeline: Option<&T>,
    ) -> FormErrors {
        let mut errors = self.validate_configuration(config);

        if !config.existing_pipeline {
            errors.merge(self.validate_source_field_requirement(config));
            errors.merge(self.validate_name_availability(existing_pipeline));
        }

        debug!(
            existing_pipeline = config.existing_pipeline,
            errors = errors.len(),
            "Form validation finished"
        );
        errors
    }
}
