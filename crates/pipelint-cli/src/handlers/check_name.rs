//! Check-name command handler

use crate::cli::CheckNameArgs;
use crate::error::{Error, Result};
use crate::output::{NameCheck, OutputWriter};
use pipelint_core::{is_valid_pipeline_name, MessageKey, PipelineConfigValidator};

/// Handle the check-name command
pub fn handle_check_name(args: CheckNameArgs, output: &mut OutputWriter) -> Result<()> {
    let valid = is_valid_pipeline_name(&args.name);
    let message =
        (!valid).then(|| PipelineConfigValidator::new().message(MessageKey::InvalidPipelineName));

    output.name_check(&NameCheck {
        name: args.name,
        valid,
        message,
    })?;

    if valid {
        Ok(())
    } else {
        Err(Error::ValidationFailed { count: 1 })
    }
}
