//! Invoice template record: the portable JSON form.
//!
//! Export is total and faithful. Import is tolerant: every field that
//! is absent falls back to the documented default; only a missing or
//! empty `blocks` array rejects the file.

use crate::codec::gradient;
use crate::model::document::renumbered;
use crate::model::{
    DecorativeWaves, FontSettings, GradientPair, ImportError, InvoiceBlock, InvoiceTemplate,
    LogoPosition, LogoSettings, Orientation, PageSize, QrCodeSettings, WarningBoxSettings,
    WatermarkSettings, DEFAULT_BACKGROUND_COLOR, DEFAULT_BORDER_COLOR, DEFAULT_INVOICE_NAME,
    DEFAULT_TEXT_COLOR,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// On-disk shape of an invoice template.
///
/// Every field except `blocks` deserializes leniently: a missing or
/// wrongly-shaped value becomes `None`/default and the import carries
/// on. `blocks` is the structurally-required part of the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceRecord {
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub id: String,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub name: String,
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::codec::lenient"
    )]
    pub description: Option<String>,
    pub blocks: Vec<InvoiceBlock>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub colors: ColorRecord,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub fonts: Option<FontRecord>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub logo: Option<LogoRecord>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub watermark: Option<WatermarkSettings>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub qr_code: Option<QrCodeSettings>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub warning_box: Option<WarningBoxSettings>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub decorative_waves: Option<DecorativeWaves>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub page_size: Option<PageSize>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub orientation: Option<Orientation>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for InvoiceRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            description: None,
            blocks: Vec::new(),
            colors: ColorRecord::default(),
            fonts: None,
            logo: None,
            watermark: None,
            qr_code: None,
            warning_box: None,
            decorative_waves: None,
            page_size: None,
            orientation: None,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Color fields of the record. The gradient-valued ones hold composed
/// `linear-gradient(...)` expressions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorRecord {
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub primary: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub secondary: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub accent: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub text: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub background: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub border: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontRecord {
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub heading: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub body: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub size: Option<FontSizesRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizesRecord {
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub heading: Option<u32>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub body: Option<u32>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub small: Option<u32>,
}

/// Logo sub-object; the record nests width/height under `size`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoRecord {
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub url: Option<String>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub position: Option<LogoPosition>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub x: Option<i32>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub y: Option<i32>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub size: Option<LogoSizeRecord>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub opacity: Option<u8>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub show_in_header: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoSizeRecord {
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub width: Option<u32>,
    #[serde(deserialize_with = "crate::codec::lenient")]
    pub height: Option<u32>,
}

/// Serialize a document to its portable record.
pub fn to_record(doc: &InvoiceTemplate) -> InvoiceRecord {
    InvoiceRecord {
        id: doc.id.clone(),
        name: doc.name.clone(),
        description: doc.description.clone(),
        blocks: doc.blocks.clone(),
        colors: ColorRecord {
            primary: Some(gradient::compose(&doc.primary)),
            secondary: Some(gradient::compose(&doc.header)),
            accent: Some(gradient::compose(&doc.accent)),
            text: Some(doc.text_color.clone()),
            background: Some(doc.background_color.clone()),
            border: Some(doc.border_color.clone()),
        },
        fonts: Some(FontRecord {
            heading: Some(doc.fonts.heading.clone()),
            body: Some(doc.fonts.body.clone()),
            size: Some(FontSizesRecord {
                heading: Some(doc.fonts.size.heading),
                body: Some(doc.fonts.size.body),
                small: Some(doc.fonts.size.small),
            }),
        }),
        // Always serialized, visibility flag included, so hidden logos
        // survive an export/import round trip.
        logo: Some(LogoRecord {
            url: Some(doc.logo.url.clone()),
            position: Some(doc.logo.position),
            x: Some(doc.logo.x),
            y: Some(doc.logo.y),
            size: Some(LogoSizeRecord {
                width: Some(doc.logo.width),
                height: Some(doc.logo.height),
            }),
            opacity: Some(doc.logo.opacity),
            show_in_header: Some(doc.logo.visible),
        }),
        watermark: Some(doc.watermark.clone()),
        qr_code: Some(doc.qr_code.clone()),
        warning_box: Some(doc.warning_box.clone()),
        decorative_waves: Some(doc.waves.clone()),
        page_size: Some(doc.page_size),
        orientation: Some(doc.orientation),
        created_at: Some(doc.created_at),
        updated_at: Some(doc.updated_at),
    }
}

/// Rebuild a document from a parsed record, defaulting every absent
/// field. Rejects only a missing/empty block list.
pub fn from_record(record: InvoiceRecord) -> Result<InvoiceTemplate, ImportError> {
    if record.blocks.is_empty() {
        return Err(ImportError::NoSections);
    }

    let now = Utc::now();
    let defaults = LogoSettings::default();
    let logo = record.logo.unwrap_or_default();
    let logo_size = logo.size.unwrap_or_default();
    let fonts = record.fonts.unwrap_or_default();
    let font_sizes = fonts.size.unwrap_or_default();
    let font_defaults = FontSettings::default();

    debug!(name = %record.name, blocks = record.blocks.len(), "importing invoice template");

    Ok(InvoiceTemplate {
        id: if record.id.is_empty() {
            format!("invoice-template-{}", now.timestamp_millis())
        } else {
            record.id
        },
        name: if record.name.is_empty() {
            DEFAULT_INVOICE_NAME.to_string()
        } else {
            record.name
        },
        description: record.description,
        blocks: renumbered(&record.blocks),
        primary: gradient::decompose(
            record.colors.primary.as_deref(),
            &GradientPair::primary_default(),
        ),
        header: gradient::decompose(
            record.colors.secondary.as_deref(),
            &GradientPair::primary_default(),
        ),
        accent: gradient::decompose(
            record.colors.accent.as_deref(),
            &GradientPair::accent_default(),
        ),
        background_color: record
            .colors
            .background
            .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
        text_color: record
            .colors
            .text
            .unwrap_or_else(|| DEFAULT_TEXT_COLOR.to_string()),
        border_color: record
            .colors
            .border
            .unwrap_or_else(|| DEFAULT_BORDER_COLOR.to_string()),
        fonts: FontSettings {
            heading: fonts.heading.unwrap_or(font_defaults.heading),
            body: fonts.body.unwrap_or(font_defaults.body),
            size: crate::model::FontSizes {
                heading: font_sizes.heading.unwrap_or(font_defaults.size.heading),
                body: font_sizes.body.unwrap_or(font_defaults.size.body),
                small: font_sizes.small.unwrap_or(font_defaults.size.small),
            },
        },
        logo: LogoSettings {
            url: logo.url.unwrap_or_default(),
            position: logo.position.unwrap_or(defaults.position),
            x: logo.x.unwrap_or(defaults.x),
            y: logo.y.unwrap_or(defaults.y),
            width: logo_size.width.unwrap_or(defaults.width),
            height: logo_size.height.unwrap_or(defaults.height),
            opacity: logo.opacity.unwrap_or(defaults.opacity),
            visible: logo.show_in_header.unwrap_or(defaults.visible),
        },
        watermark: record.watermark.unwrap_or_default(),
        qr_code: record.qr_code.unwrap_or_default(),
        warning_box: record.warning_box.unwrap_or_default(),
        waves: record.decorative_waves.unwrap_or_default(),
        page_size: record.page_size.unwrap_or_default(),
        orientation: record.orientation.unwrap_or_default(),
        created_at: record.created_at.unwrap_or(now),
        updated_at: record.updated_at.unwrap_or(now),
    })
}
