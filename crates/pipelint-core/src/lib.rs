//! Pipelint Core - Validation rules for inference pipeline configuration
//!
//! This crate checks the configuration a user enters when attaching an
//! inference pipeline to an index, and explains why an existing pipeline
//! cannot be selected.
//!
//! # Main Components
//!
//! - **Types**: The configuration record and the per-field error record
//! - **Validator**: Pure validation rules behind `PipelineConfigValidator`
//! - **Messages**: Pluggable message catalog used to render errors
//! - **Error Handling**: Error types for document parsing using `thiserror`
//!
//! # Example
//!
//! ```
//! use pipelint_core::{FormField, InferencePipelineConfiguration, PipelineConfigValidator};
//!
//! let validator = PipelineConfigValidator::new();
//! let config = InferencePipelineConfiguration::new_pipeline("bad name!", "my-model")
//!     .with_source_field("body");
//!
//! let errors = validator.validate_configuration(&config);
//! assert_eq!(
//!     errors.get(FormField::PipelineName),
//!     Some("Name must only contain letters, numbers, underscores, and hyphens.")
//! );
//! ```

pub mod error;
pub mod messages;
pub mod types;
pub mod validator;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use messages::{DefaultMessages, MessageCatalog, MessageKey, MessageTable};
pub use types::{FormErrors, FormField, InferencePipelineConfiguration};
pub use validator::{is_valid_pipeline_name, missing_source_fields, PipelineConfigValidator};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
