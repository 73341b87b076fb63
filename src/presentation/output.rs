//! Output Rendering
//!
//! Renders a check result as plain text or as NDJSON events.

use std::io::{self, Write};

use crate::application::{CheckOutcome, CheckResult};
use crate::domain::value_objects::CheckMode;

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// One JSON object per line for scripting
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Trait for rendering check results
pub trait CheckResultRenderer {
    fn render(&self, result: &CheckResult, out: &mut dyn Write) -> io::Result<()>;
}

/// Text renderer for check results
///
/// Prints nothing for a clean run.
pub struct TextRenderer;

impl CheckResultRenderer for TextRenderer {
    fn render(&self, result: &CheckResult, out: &mut dyn Write) -> io::Result<()> {
        match &result.outcome {
            CheckOutcome::Clean => Ok(()),
            CheckOutcome::SpawnFailed { message } => {
                writeln!(out, "Unable to call doxygen: {}", message)
            }
            CheckOutcome::Warnings(lines) => {
                if result.mode == CheckMode::Input {
                    if let Some(file) = result.files.first() {
                        writeln!(out, "Doxygen warnings in {}:", file.display())?;
                    }
                }
                let body = lines
                    .iter()
                    .map(|l| l.as_str())
                    .collect::<Vec<_>>()
                    .join("\n");
                writeln!(out, "{}", body)
            }
        }
    }
}

/// JSON renderer for check results
pub struct JsonRenderer;

impl CheckResultRenderer for JsonRenderer {
    fn render(&self, result: &CheckResult, out: &mut dyn Write) -> io::Result<()> {
        write_event(
            out,
            &serde_json::json!({
                "event": "start",
                "command": "check",
                "mode": result.mode.as_str(),
                "files": result.files.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
            }),
        )?;

        if let CheckOutcome::SpawnFailed { message } = &result.outcome {
            write_event(
                out,
                &serde_json::json!({
                    "event": "error",
                    "message": format!("Unable to call doxygen: {}", message),
                }),
            )?;
        }

        for line in result.warnings() {
            write_event(
                out,
                &serde_json::json!({
                    "event": "warning",
                    "path": line.path_prefix(),
                    "line": line.as_str(),
                }),
            )?;
        }

        write_event(
            out,
            &serde_json::json!({
                "event": "complete",
                "command": "check",
                "count": result.warnings().len(),
                "success": result.is_clean(),
                "exit_code": result.exit_code(),
            }),
        )
    }
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut dyn Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Create a renderer based on format
pub fn create_renderer(format: OutputFormat) -> Box<dyn CheckResultRenderer> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Json => Box::new(JsonRenderer),
    }
}

/// Render an error that ended the run before a result existed.
pub fn render_error(
    format: OutputFormat,
    message: &str,
    out: &mut dyn Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "[ERROR] {}", message),
        OutputFormat::Json => write_event(
            out,
            &serde_json::json!({
                "event": "error",
                "message": message,
            }),
        ),
    }
}
