//! Timesheet template record: the portable JSON form.
//!
//! The record nests layout under `config` and styling under `styles`,
//! with the watermark fields flattened into `styles`. Same tolerance
//! policy as the invoice record: absent fields default, a missing or
//! empty column list rejects.

use crate::codec::gradient;
use crate::model::document::renumbered;
use crate::model::{
    GradientPair, ImportError, Orientation, PageSize, TimesheetColumn, TimesheetTemplate,
    WatermarkSettings, DEFAULT_BORDER_COLOR, DEFAULT_TIMESHEET_NAME,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// On-disk shape of a timesheet template.
///
/// Every field except `config.columns` deserializes leniently, same
/// policy as the invoice record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimesheetRecord {
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub id: String,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub name: String,
    pub config: ConfigRecord,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub styles: StylesRecord,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigRecord {
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub size: Option<PageSize>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub orientation: Option<Orientation>,
    pub columns: Vec<TimesheetColumn>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub rows: Option<u32>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub show_logo: Option<bool>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub show_total_row: Option<bool>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub total_row_label: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub show_signature: Option<bool>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub signature_label: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StylesRecord {
    /// Composed header gradient expression.
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub header_color: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub border_color: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub font_size: Option<u32>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub font_family: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub logo_url: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub watermark_url: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub watermark_opacity: Option<u8>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub watermark_size: Option<u32>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub watermark_rotation: Option<i16>,
}

/// Serialize a document to its portable record.
pub fn to_record(doc: &TimesheetTemplate) -> TimesheetRecord {
    TimesheetRecord {
        id: doc.id.clone(),
        name: doc.name.clone(),
        config: ConfigRecord {
            size: Some(doc.page_size),
            orientation: Some(doc.orientation),
            columns: doc.columns.clone(),
            rows: Some(doc.rows),
            show_logo: Some(doc.show_logo),
            show_total_row: Some(doc.show_total_row),
            total_row_label: Some(doc.total_row_label.clone()),
            show_signature: Some(doc.show_signature),
            signature_label: Some(doc.signature_label.clone()),
        },
        styles: StylesRecord {
            header_color: Some(gradient::compose(&doc.header)),
            border_color: Some(doc.border_color.clone()),
            font_size: Some(doc.font_size),
            font_family: Some(doc.font_family.clone()),
            logo_url: Some(doc.logo_url.clone()),
            watermark_url: Some(doc.watermark.url.clone()),
            watermark_opacity: Some(doc.watermark.opacity),
            watermark_size: Some(doc.watermark.size),
            watermark_rotation: Some(doc.watermark.rotation),
        },
        created_at: Some(doc.created_at),
        updated_at: Some(doc.updated_at),
    }
}

/// Rebuild a document from a parsed record, defaulting every absent
/// field. Rejects only a missing/empty column list.
pub fn from_record(record: TimesheetRecord) -> Result<TimesheetTemplate, ImportError> {
    if record.config.columns.is_empty() {
        return Err(ImportError::NoSections);
    }

    let now = Utc::now();
    let defaults = TimesheetTemplate::new();
    let watermark_defaults = WatermarkSettings::timesheet_default();

    debug!(
        name = %record.name,
        columns = record.config.columns.len(),
        "importing timesheet template"
    );

    Ok(TimesheetTemplate {
        id: if record.id.is_empty() {
            format!("timesheet-template-{}", now.timestamp_millis())
        } else {
            record.id
        },
        name: if record.name.is_empty() {
            DEFAULT_TIMESHEET_NAME.to_string()
        } else {
            record.name
        },
        columns: renumbered(&record.config.columns),
        header: gradient::decompose(
            record.styles.header_color.as_deref(),
            &GradientPair::primary_default(),
        ),
        border_color: record
            .styles
            .border_color
            .unwrap_or_else(|| DEFAULT_BORDER_COLOR.to_string()),
        font_size: record.styles.font_size.unwrap_or(defaults.font_size),
        font_family: record
            .styles
            .font_family
            .unwrap_or_else(|| defaults.font_family.clone()),
        rows: record.config.rows.unwrap_or(defaults.rows),
        show_logo: record.config.show_logo.unwrap_or(defaults.show_logo),
        logo_url: record.styles.logo_url.unwrap_or_default(),
        watermark: WatermarkSettings {
            url: record.styles.watermark_url.unwrap_or_default(),
            opacity: record
                .styles
                .watermark_opacity
                .unwrap_or(watermark_defaults.opacity),
            size: record
                .styles
                .watermark_size
                .unwrap_or(watermark_defaults.size),
            rotation: record
                .styles
                .watermark_rotation
                .unwrap_or(watermark_defaults.rotation),
        },
        show_total_row: record
            .config
            .show_total_row
            .unwrap_or(defaults.show_total_row),
        total_row_label: record
            .config
            .total_row_label
            .unwrap_or_else(|| defaults.total_row_label.clone()),
        show_signature: record
            .config
            .show_signature
            .unwrap_or(defaults.show_signature),
        signature_label: record
            .config
            .signature_label
            .unwrap_or_else(|| defaults.signature_label.clone()),
        page_size: record.config.size.unwrap_or_default(),
        orientation: record.config.orientation.unwrap_or_default(),
        created_at: record.created_at.unwrap_or(now),
        updated_at: record.updated_at.unwrap_or(now),
    })
}
