//! Import/export codec for the portable template records.
//!
//! Converts documents to and from the JSON form consumed by the
//! storage collaborator and the import/export buttons. Import follows
//! the tolerance policy: absent or malformed fields default silently;
//! only unparseable JSON or an absent/empty section collection rejects,
//! and a rejected import leaves the caller's document untouched.

pub mod gradient;
pub mod invoice;
pub mod timesheet;

use crate::model::{ImportError, InvoiceTemplate, TemplateError, TimesheetTemplate};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Field-level tolerance: deserialize the value if it has the expected
/// shape, otherwise fall back to the type's default instead of failing
/// the whole import.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// A successfully imported template of either flavor.
#[derive(Debug, Clone)]
pub enum AnyTemplate {
    Invoice(InvoiceTemplate),
    Timesheet(TimesheetTemplate),
}

impl AnyTemplate {
    pub fn name(&self) -> &str {
        match self {
            AnyTemplate::Invoice(doc) => &doc.name,
            AnyTemplate::Timesheet(doc) => &doc.name,
        }
    }
}

/// Parse an invoice template file.
pub fn import_invoice(json: &str) -> Result<InvoiceTemplate, ImportError> {
    let record = serde_json::from_str(json)?;
    invoice::from_record(record)
}

/// Parse a timesheet template file.
pub fn import_timesheet(json: &str) -> Result<TimesheetTemplate, ImportError> {
    let record = serde_json::from_str(json)?;
    timesheet::from_record(record)
}

/// Parse a template file of either flavor, detecting the kind from its
/// structure: invoice records carry a top-level `blocks` array,
/// timesheet records a `config.columns` array.
pub fn import_auto(json: &str) -> Result<AnyTemplate, ImportError> {
    let value: Value = serde_json::from_str(json)?;

    if value.get("blocks").is_some() {
        let record = serde_json::from_value(value)?;
        Ok(AnyTemplate::Invoice(invoice::from_record(record)?))
    } else if value.pointer("/config/columns").is_some() {
        let record = serde_json::from_value(value)?;
        Ok(AnyTemplate::Timesheet(timesheet::from_record(record)?))
    } else {
        warn!("template file matches neither record shape");
        Err(ImportError::UnknownFormat)
    }
}

/// Serialize an invoice template to record JSON.
pub fn export_invoice(doc: &InvoiceTemplate, pretty: bool) -> Result<String, TemplateError> {
    let record = invoice::to_record(doc);
    to_json(&record, pretty)
}

/// Serialize a timesheet template to record JSON.
pub fn export_timesheet(doc: &TimesheetTemplate, pretty: bool) -> Result<String, TemplateError> {
    let record = timesheet::to_record(doc);
    to_json(&record, pretty)
}

fn to_json<T: serde::Serialize>(record: &T, pretty: bool) -> Result<String, TemplateError> {
    let json = if pretty {
        serde_json::to_string_pretty(record)
    } else {
        serde_json::to_string(record)
    };
    json.map_err(TemplateError::Serialize)
}

/// Download filename for an exported template: whitespace runs become
/// hyphens and the `-template.json` suffix is appended. A blank name
/// falls back to an `untitled` stem.
pub fn export_file_name(name: &str) -> String {
    let slug: Vec<&str> = name.split_whitespace().collect();
    if slug.is_empty() {
        return "untitled-template.json".to_string();
    }
    format!("{}-template.json", slug.join("-"))
}
