//! Validate command handler

use super::utils::{load_catalog, load_document};
use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::current_run_id;
use crate::logging::timing::Timer;
use crate::output::{OutputWriter, ValidationReport};
use pipelint_core::{InferencePipelineConfiguration, PipelineConfigValidator};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Existing pipelines keyed by name; only presence matters
type PipelineCatalog = BTreeMap<String, serde_json::Value>;

/// Handle the validate command
pub fn handle_validate(args: ValidateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    output.info(&format!(
        "Validating pipeline configuration: {}",
        args.config_file.display()
    ))?;

    let _timer = Timer::with_details("validate", &args.config_file.display().to_string());

    let pipeline: InferencePipelineConfiguration = load_document(&args.config_file)?;
    let existing = match &args.existing {
        Some(path) => Some(load_document::<PipelineCatalog>(path)?),
        None => None,
    };
    let catalog = load_catalog(args.messages.as_deref(), config)?;
    let validator = PipelineConfigValidator::with_catalog(catalog);

    let errors = match &existing {
        Some(pipelines) => {
            let lookup = pipelines.get(&pipeline.pipeline_name);
            debug!(
                pipeline = %pipeline.pipeline_name,
                known = pipelines.len(),
                taken = lookup.is_some(),
                "Checked name availability"
            );
            validator.validate_form(&pipeline, lookup)
        }
        None => validator.validate_form::<serde_json::Value>(&pipeline, None),
    };

    info!(errors = errors.len(), "Validation finished");

    let report = ValidationReport {
        source: args.config_file.display().to_string(),
        valid: errors.is_empty(),
        errors,
        checked_at: chrono::Utc::now().to_rfc3339(),
        run_id: current_run_id().map(str::to_string),
    };
    output.validation_report(&report)?;

    if args.detailed {
        output.section("Pipeline Configuration")?;
        output.data(&pipeline)?;
    }

    if report.valid {
        Ok(())
    } else {
        Err(Error::ValidationFailed {
            count: report.errors.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use std::fs;
    use std::path::PathBuf;

    fn args(config_file: PathBuf, existing: Option<PathBuf>) -> ValidateArgs {
        ValidateArgs {
            config_file,
            existing,
            messages: None,
            detailed: false,
        }
    }

    fn quiet_output() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Json, false, true, Box::new(std::io::sink()))
    }

    #[test]
    fn test_valid_new_pipeline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.yaml");
        fs::write(
            &path,
            "pipelineName: my-pipe\nmodelID: elser\nsourceField: body\nexistingPipeline: false\n",
        )
        .unwrap();

        let result = handle_validate(args(path, None), &Config::default(), &mut quiet_output());
        assert!(result.is_ok());
    }

    #[test]
    fn test_taken_name_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.json");
        fs::write(
            &path,
            r#"{"pipelineName": "shared", "modelID": "elser", "sourceField": "body"}"#,
        )
        .unwrap();
        let existing = dir.path().join("existing.json");
        fs::write(&existing, r#"{"shared": {"processors": []}}"#).unwrap();

        let result = handle_validate(
            args(path, Some(existing)),
            &Config::default(),
            &mut quiet_output(),
        );
        assert!(matches!(result, Err(Error::ValidationFailed { count: 1 })));
    }

    #[test]
    fn test_missing_fields_are_counted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.json");
        fs::write(&path, r#"{"pipelineName": "bad name"}"#).unwrap();

        let result = handle_validate(args(path, None), &Config::default(), &mut quiet_output());
        assert!(matches!(result, Err(Error::ValidationFailed { count: 3 })));
    }

    #[test]
    fn test_missing_config_file() {
        let result = handle_validate(
            args(PathBuf::from("/nonexistent/pipeline.json"), None),
            &Config::default(),
            &mut quiet_output(),
        );
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }
}
