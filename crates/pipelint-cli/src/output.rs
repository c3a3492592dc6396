//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with dedicated
//! renderings for validation, disabled-reason and name-check reports.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use pipelint_core::FormErrors;
use serde::Serialize;
use std::io::{self, Write};
use tracing::{debug, trace};

/// Result of validating one configuration document
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Document that was validated
    pub source: String,
    /// True when no field failed
    pub valid: bool,
    /// Failed fields and their messages
    pub errors: FormErrors,
    /// When the check ran (RFC 3339)
    pub checked_at: String,
    /// Run ID of this invocation, when logging is initialized
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

/// Outcome of the disabled-reason check for an existing pipeline
#[derive(Debug, Clone, Serialize)]
pub struct DisabledReport {
    pub pipeline: String,
    pub missing_source_fields: Vec<String>,
    pub selectable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Outcome of checking a candidate pipeline name
#[derive(Debug, Clone, Serialize)]
pub struct NameCheck {
    pub name: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Trait for formatting output with specialized support for report types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a validation report
    fn format_validation_report(&self, report: &ValidationReport) -> Result<String>;

    /// Format a disabled-reason report
    fn format_disabled_report(&self, report: &DisabledReport) -> Result<String>;

    /// Format a name check
    fn format_name_check(&self, check: &NameCheck) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_validation_report(&self, report: &ValidationReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_report_human(report)),
            _ => self.format(report),
        }
    }

    fn format_disabled_report(&self, report: &DisabledReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_disabled_report_human(report)),
            _ => self.format(report),
        }
    }

    fn format_name_check(&self, check: &NameCheck) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_name_check_human(check)),
            _ => self.format(check),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!("Outputting data: {}", formatted);

        if self.format == OutputFormat::Human {
            self.writeln(&formatted)
        } else {
            // For machine formats, write as-is
            self.write(&formatted)
        }
    }

    /// Write a validation report
    pub fn validation_report(&mut self, report: &ValidationReport) -> Result<()> {
        if self.format == OutputFormat::Human {
            self.report_status(report.valid, &validation_headline(report))?;
            if report.errors.is_empty() {
                return Ok(());
            }
            let rows = report
                .errors
                .iter()
                .map(|(field, message)| vec![field.to_string(), message.to_string()])
                .collect();
            return self.table(&["Field", "Message"], rows);
        }

        let formatted = self.format.format_validation_report(report)?;
        self.writeln(&formatted)
    }

    /// Write a disabled-reason report
    pub fn disabled_report(&mut self, report: &DisabledReport) -> Result<()> {
        if self.format == OutputFormat::Human {
            let headline = disabled_headline(report);
            self.report_status(report.selectable, &headline)?;
            if let Some(reason) = &report.reason {
                self.writeln(&format!("  {}", reason))?;
            }
            return Ok(());
        }

        let formatted = self.format.format_disabled_report(report)?;
        self.writeln(&formatted)
    }

    /// Write a name check
    pub fn name_check(&mut self, check: &NameCheck) -> Result<()> {
        if self.format == OutputFormat::Human {
            let headline = name_check_headline(check);
            self.report_status(check.valid, &headline)?;
            if let Some(message) = &check.message {
                self.writeln(&format!("  {}", message))?;
            }
            return Ok(());
        }

        let formatted = self.format.format_name_check(check)?;
        self.writeln(&formatted)
    }

    /// Write a pass/fail headline; failures are shown even when quiet
    fn report_status(&mut self, passed: bool, headline: &str) -> Result<()> {
        if passed {
            self.success(headline)
        } else if self.use_color {
            self.writeln(&headline.red().to_string())
        } else {
            self.writeln(headline)
        }
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        let rendered = render_table(headers, &rows);
        let mut lines = rendered.lines();

        if let Some(header_row) = lines.next() {
            if self.use_color {
                self.writeln(&header_row.bold().to_string())?;
            } else {
                self.writeln(header_row)?;
            }
        }
        for line in lines {
            self.writeln(line)?;
        }

        Ok(())
    }
}

/// Render rows as an aligned table with a header separator
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }

    let pad_row = |cells: Vec<&str>| {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| match widths.get(i) {
                Some(width) => format!("{:width$}", cell, width = *width),
                None => cell.to_string(),
            })
            .collect::<Vec<_>>()
            .join(" │ ")
            .trim_end()
            .to_string()
    };

    let mut output = String::new();
    output.push_str(&pad_row(headers.to_vec()));
    output.push('\n');
    output.push_str(
        &widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    );
    output.push('\n');
    for row in rows {
        output.push_str(&pad_row(row.iter().map(String::as_str).collect()));
        output.push('\n');
    }
    output
}

fn validation_headline(report: &ValidationReport) -> String {
    if report.valid {
        format!("✓ {} is valid", report.source)
    } else {
        format!("✗ {} has {} error(s)", report.source, report.errors.len())
    }
}

fn disabled_headline(report: &DisabledReport) -> String {
    if report.selectable {
        format!("✓ Pipeline '{}' can be selected", report.pipeline)
    } else {
        format!("✗ Pipeline '{}' cannot be selected", report.pipeline)
    }
}

fn name_check_headline(check: &NameCheck) -> String {
    if check.valid {
        format!("✓ '{}' is a valid pipeline name", check.name)
    } else {
        format!("✗ '{}' is not a valid pipeline name", check.name)
    }
}

/// Format a validation report for human reading
fn format_validation_report_human(report: &ValidationReport) -> String {
    let mut output = validation_headline(report);
    output.push('\n');

    if !report.errors.is_empty() {
        let rows = report
            .errors
            .iter()
            .map(|(field, message)| vec![field.to_string(), message.to_string()])
            .collect::<Vec<_>>();
        output.push_str(&render_table(&["Field", "Message"], &rows));
    }

    output
}

/// Format a disabled-reason report for human reading
fn format_disabled_report_human(report: &DisabledReport) -> String {
    let mut output = disabled_headline(report);
    output.push('\n');
    if let Some(reason) = &report.reason {
        output.push_str(&format!("  {}\n", reason));
    }
    output
}

/// Format a name check for human reading
fn format_name_check_human(check: &NameCheck) -> String {
    let mut output = name_check_headline(check);
    output.push('\n');
    if let Some(message) = &check.message {
        output.push_str(&format!("  {}\n", message));
    }
    output
}
