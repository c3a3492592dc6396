//! Validation logic for inference pipeline configurations
//!
//! The validator is organized into focused modules:
//! - `field_validators`: Pure per-field rules returning message keys
//! - `core`: PipelineConfigValidator, which renders rule outcomes into form errors
//! - `tests`: Test suite
//!
//! Copyright (c) 2025 Pipelint Team
//! Licensed under the Apache-2.0 license

pub mod core;
pub mod field_validators;

// Re-export public API
pub use self::core::PipelineConfigValidator;
pub use self::field_validators::{is_valid_pipeline_name, missing_source_fields};
