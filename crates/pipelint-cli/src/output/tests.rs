// Tests for report formatting and the output writer
//
// The writer is pointed at a shared in-memory buffer so each test can
// inspect exactly what would have reached stdout.

use super::*;
use pipelint_core::FormField;
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn writer(format: OutputFormat, quiet: bool) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = OutputWriter::with_writer(format, false, quiet, Box::new(buffer.clone()));
    (writer, buffer)
}

fn failing_report() -> ValidationReport {
    let mut errors = FormErrors::new();
    errors.insert(FormField::PipelineName, "Name must only contain letters, numbers, underscores, and hyphens.");
    errors.insert(FormField::ModelId, "Field is required.");

    ValidationReport {
        source: "pipeline.yaml".to_string(),
        valid: false,
        errors,
        checked_at: "2025-01-17T10:30:00+00:00".to_string(),
        run_id: None,
    }
}

#[test]
fn test_validation_report_human() {
    let formatted = OutputFormat::Human
        .format_validation_report(&failing_report())
        .unwrap();

    assert!(formatted.starts_with("✗ pipeline.yaml has 2 error(s)\n"));
    assert!(formatted.contains("Field"));
    assert!(formatted.contains("pipelineName"));
    assert!(formatted.contains("modelID"));
    assert!(formatted.contains("Field is required."));
}

#[test]
fn test_validation_report_json_uses_wizard_field_names() {
    let formatted = OutputFormat::Json
        .format_validation_report(&failing_report())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&formatted).unwrap();

    assert_eq!(value["valid"], serde_json::json!(false));
    assert_eq!(value["errors"]["modelID"], serde_json::json!("Field is required."));
    assert!(value["errors"].get("sourceField").is_none());
    assert!(value.get("run_id").is_none());
}

#[test]
fn test_valid_report_is_silent_when_quiet() {
    let report = ValidationReport {
        source: "pipeline.json".to_string(),
        valid: true,
        errors: FormErrors::new(),
        checked_at: "2025-01-17T10:30:00+00:00".to_string(),
        run_id: Some("run_abc".to_string()),
    };

    let (mut out, buffer) = writer(OutputFormat::Human, true);
    out.validation_report(&report).unwrap();
    assert_eq!(buffer.contents(), "");

    let (mut out, buffer) = writer(OutputFormat::Human, false);
    out.validation_report(&report).unwrap();
    assert_eq!(buffer.contents(), "✓ pipeline.json is valid\n");
}

#[test]
fn test_failures_are_printed_even_when_quiet() {
    let (mut out, buffer) = writer(OutputFormat::Human, true);
    out.validation_report(&failing_report()).unwrap();

    let contents = buffer.contents();
    assert!(contents.starts_with("✗ pipeline.yaml has 2 error(s)"));
    assert!(contents.contains("Field is required."));
}

#[test]
fn test_disabled_report_human() {
    let report = DisabledReport {
        pipeline: "shared".to_string(),
        missing_source_fields: vec!["title".to_string()],
        selectable: false,
        reason: Some("Fields missing in index: title".to_string()),
    };

    let (mut out, buffer) = writer(OutputFormat::Human, false);
    out.disabled_report(&report).unwrap();
    assert_eq!(
        buffer.contents(),
        "✗ Pipeline 'shared' cannot be selected\n  Fields missing in index: title\n"
    );
}

#[test]
fn test_disabled_report_yaml() {
    let report = DisabledReport {
        pipeline: "shared".to_string(),
        missing_source_fields: Vec::new(),
        selectable: true,
        reason: None,
    };

    let formatted = OutputFormat::Yaml.format_disabled_report(&report).unwrap();
    assert!(formatted.contains("pipeline: shared"));
    assert!(formatted.contains("selectable: true"));
    assert!(!formatted.contains("reason"));
}

#[test]
fn test_name_check_human_and_json() {
    let check = NameCheck {
        name: "bad name".to_string(),
        valid: false,
        message: Some("Name must only contain letters, numbers, underscores, and hyphens.".to_string()),
    };

    let human = OutputFormat::Human.format_name_check(&check).unwrap();
    assert!(human.starts_with("✗ 'bad name' is not a valid pipeline name\n"));

    let json = OutputFormat::Json.format_name_check(&check).unwrap();
    assert_eq!(
        json,
        r#"{"name":"bad name","valid":false,"message":"Name must only contain letters, numbers, underscores, and hyphens."}"#
    );
}

#[test]
fn test_messages_are_suppressed_for_machine_formats() {
    let (mut out, buffer) = writer(OutputFormat::Json, false);
    out.info("loading").unwrap();
    out.success("done").unwrap();
    out.warning("careful").unwrap();
    out.section("Details").unwrap();
    assert_eq!(buffer.contents(), "");

    out.data(&serde_json::json!({"ok": true})).unwrap();
    assert_eq!(buffer.contents(), r#"{"ok":true}"#);
}

#[test]
fn test_plain_prefixes_without_color() {
    let (mut out, buffer) = writer(OutputFormat::Human, false);
    out.info("loading").unwrap();
    out.warning("careful").unwrap();

    assert_eq!(buffer.contents(), "INFO: loading\nWARNING: careful\n");
}

#[test]
fn test_render_table_aligns_columns() {
    let rendered = render_table(
        &["Field", "Message"],
        &[
            vec!["modelID".to_string(), "Field is required.".to_string()],
            vec!["sourceField".to_string(), "Field is required.".to_string()],
        ],
    );

    let lines = rendered.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Field       │ Message");
    assert_eq!(lines[2], "modelID     │ Field is required.");
    assert_eq!(lines[3], "sourceField │ Field is required.");
}

#[test]
fn test_output_writer_format() {
    let (out, _) = writer(OutputFormat::Yaml, false);
    assert_eq!(out.format(), OutputFormat::Yaml);
}
