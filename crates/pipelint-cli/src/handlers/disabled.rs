//! Disabled-reason command handler

use super::utils::load_catalog;
use crate::cli::DisabledReasonArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{DisabledReport, OutputWriter};
use pipelint_core::{missing_source_fields, PipelineConfigValidator};
use tracing::debug;

/// Handle the disabled-reason command
///
/// Reporting a pipeline as unselectable is not an error; the command only
/// fails on bad input.
pub fn handle_disabled_reason(
    args: DisabledReasonArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    if args.pipeline.trim().is_empty() {
        return Err(Error::invalid_args("--pipeline must not be empty"));
    }

    if args.source_fields.is_empty() {
        output.warning("No --source-field given; only the attachment check applies")?;
    }

    let catalog = load_catalog(args.messages.as_deref(), config)?;
    let validator = PipelineConfigValidator::with_catalog(catalog);

    let missing = missing_source_fields(args.source_fields.as_slice(), args.index_fields.as_slice());
    debug!(
        pipeline = %args.pipeline,
        missing = missing.len(),
        processors = args.processors.len(),
        "Computed missing source fields"
    );

    let reason = validator.disabled_reason(missing.as_slice(), args.processors.as_slice(), &args.pipeline);

    let report = DisabledReport {
        pipeline: args.pipeline,
        missing_source_fields: missing,
        selectable: reason.is_none(),
        reason,
    };
    output.disabled_report(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(pipeline: &str) -> DisabledReasonArgs {
        DisabledReasonArgs {
            pipeline: pipeline.to_string(),
            source_fields: vec!["title".to_string()],
            index_fields: vec!["title".to_string()],
            processors: Vec::new(),
            messages: None,
        }
    }

    #[test]
    fn test_empty_pipeline_is_rejected() {
        let mut output =
            OutputWriter::with_writer(OutputFormat::Human, false, false, Box::new(std::io::sink()));
        let result = handle_disabled_reason(args("  "), &Config::default(), &mut output);
        assert!(matches!(result, Err(Error::InvalidArgs(_))));
    }

    #[test]
    fn test_unselectable_pipeline_is_not_an_error() {
        let mut output =
            OutputWriter::with_writer(OutputFormat::Json, false, false, Box::new(std::io::sink()));
        let mut args = args("shared");
        args.processors = vec!["shared".to_string()];

        assert!(handle_disabled_reason(args, &Config::default(), &mut output).is_ok());
    }
}
