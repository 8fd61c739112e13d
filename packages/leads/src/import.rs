//! Ingestion boundary for uploaded lead lists.
//!
//! Lead lists arrive as loosely-shaped JSON rows (spreadsheet exports, CRM
//! dumps). This module is where that looseness stops: rows are rejected or
//! defaulted into closed [`RawLead`] records, and nothing downstream ever
//! sees a dynamic shape.

use serde_json::Value;
use thiserror::Error;

use crate::lead::RawLead;

/// Structured errors for lead-list ingestion.
///
/// Row-indexed variants let the upload UI point at the offending line
/// instead of failing the whole file opaquely.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The top-level JSON value was not an array of rows.
    #[error("lead rows must be a JSON array")]
    NotAnArray,

    /// A row was something other than a JSON object.
    #[error("row {row} is not a JSON object")]
    RowNotAnObject { row: usize },

    /// A row had no usable `name` field.
    #[error("row {row} is missing a usable `name`")]
    MissingName { row: usize },

    /// The input was not valid JSON at all.
    #[error("invalid lead JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a JSON document into raw leads.
pub fn parse_lead_json(json: &str) -> Result<Vec<RawLead>, ImportError> {
    let value: Value = serde_json::from_str(json)?;
    parse_lead_rows(&value)
}

/// Convert an already-parsed JSON value into raw leads.
///
/// `name` is required and must be non-blank after trimming. `phone`,
/// `email`, `company` and `position` default to absent; unknown keys are
/// ignored.
pub fn parse_lead_rows(value: &Value) -> Result<Vec<RawLead>, ImportError> {
    let rows = value.as_array().ok_or(ImportError::NotAnArray)?;

    let mut leads = Vec::with_capacity(rows.len());
    for (row, entry) in rows.iter().enumerate() {
        let fields = entry
            .as_object()
            .ok_or(ImportError::RowNotAnObject { row })?;

        let name = fields
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ImportError::MissingName { row })?;

        leads.push(RawLead {
            name: name.to_string(),
            phone: field_as_string(fields.get("phone")),
            email: field_as_string(fields.get("email")),
            company: field_as_string(fields.get("company")),
            position: field_as_string(fields.get("position")),
        });
    }

    Ok(leads)
}

// Spreadsheet exports routinely encode phone cells as numbers; accept both.
fn field_as_string(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}
