//! Output formatting for the shell that hosts the core.
//!
//! Turns the outcome of a [`run`](crate::run) call into either the bare text
//! (success) / message (failure), or a structured JSON report carrying the
//! [`ErrorKind`] so callers can branch on it.

use crate::{ClipcatError, ErrorKind};
use serde::Serialize;

/// Supported report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Structured outcome of one request.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ErrorKind>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<&'a str>,
}

impl<'a> Report<'a> {
    pub fn from_outcome(outcome: &'a Result<String, ClipcatError>) -> Self {
        match outcome {
            Ok(text) => Report {
                ok: true,
                kind: None,
                message: SUCCESS_MESSAGE.to_string(),
                output: Some(text.as_str()),
            },
            Err(err) => Report {
                ok: false,
                kind: Some(err.kind()),
                message: err.to_string(),
                output: None,
            },
        }
    }
}

/// Status line shown after a successful request.
pub const SUCCESS_MESSAGE: &str = "Successfully collected output.";

/// Formats an outcome for display.
///
/// In [`OutputFormat::Text`] a success is the produced text unchanged and a
/// failure is `Error: <message>`.
pub fn format_outcome(
    outcome: &Result<String, ClipcatError>,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(match outcome {
            Ok(text) => text.clone(),
            Err(err) => format!("Error: {}", err),
        }),
        OutputFormat::Json => {
            let report = Report::from_outcome(outcome);
            if pretty {
                serde_json::to_string_pretty(&report)
            } else {
                serde_json::to_string(&report)
            }
        }
    }
}
