use serde_json::Value;
use svc_bootstrap::OutputFormat;

use crate::dispatch::Outcome;

/// Renders an outcome for stdout.
///
/// Text output is the bare result: strings unquoted, absent values as `null`.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub fn render(outcome: &Outcome, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(match &outcome.result {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }),
        OutputFormat::Json => serde_json::to_string(outcome),
    }
}
