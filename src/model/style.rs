//! Styling attributes shared by the template documents.
//!
//! These structs serialize directly into the portable template record,
//! so field names follow the record's camelCase convention. Gradient
//! pairs are the exception: the record stores them as a single
//! `linear-gradient(...)` expression composed by the codec.

use serde::{Deserialize, Serialize};

// Default palette (sky-500 / blue-600 family).
pub const DEFAULT_PRIMARY_START: &str = "#0ea5e9";
pub const DEFAULT_PRIMARY_END: &str = "#2563eb";
pub const DEFAULT_ACCENT_START: &str = "#0284c7";
pub const DEFAULT_ACCENT_END: &str = "#1e40af";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";
pub const DEFAULT_TEXT_COLOR: &str = "#1f2937";
pub const DEFAULT_BORDER_COLOR: &str = "#e5e7eb";

/// Start/end colors of a left-to-right gradient.
///
/// Kept decomposed in memory; the codec composes/decomposes the single
/// gradient expression string at the serialization boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientPair {
    pub start: String,
    pub end: String,
}

impl GradientPair {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Default pair for primary and header gradients.
    pub fn primary_default() -> Self {
        Self::new(DEFAULT_PRIMARY_START, DEFAULT_PRIMARY_END)
    }

    /// Default pair for the accent gradient.
    pub fn accent_default() -> Self {
        Self::new(DEFAULT_ACCENT_START, DEFAULT_ACCENT_END)
    }
}

/// Page size of the rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

/// Page orientation of the rendered document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

/// Font family per text role plus per-role sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    pub heading: String,
    pub body: String,
    pub size: FontSizes,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            heading: "Arial".to_string(),
            body: "Arial".to_string(),
            size: FontSizes::default(),
        }
    }
}

/// Point sizes for the three text roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub heading: u32,
    pub body: u32,
    pub small: u32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            heading: 14,
            body: 10,
            small: 8,
        }
    }
}

/// Where the header logo is anchored horizontally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoPosition {
    #[default]
    Left,
    Center,
    Right,
}

/// Header logo placement and transform. `url` is an opaque data-URL
/// string supplied by the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoSettings {
    pub url: String,
    pub position: LogoPosition,
    /// Free-drag offset in px from the anchor.
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Opacity percentage, 0-100.
    pub opacity: u8,
    pub visible: bool,
}

impl Default for LogoSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            position: LogoPosition::Left,
            x: 20,
            y: 20,
            width: 120,
            height: 60,
            opacity: 100,
            visible: true,
        }
    }
}

/// Background watermark transform. Rotation is clamped to -45..45
/// degrees by the presentation layer; the model stores it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatermarkSettings {
    pub url: String,
    /// Opacity percentage.
    pub opacity: u8,
    /// Rendered size in px.
    pub size: u32,
    /// Rotation in degrees.
    pub rotation: i16,
}

impl Default for WatermarkSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            opacity: 15,
            size: 300,
            rotation: 0,
        }
    }
}

impl WatermarkSettings {
    /// Timesheet editors start from a subtler diagonal watermark.
    pub fn timesheet_default() -> Self {
        Self {
            url: String::new(),
            opacity: 10,
            size: 300,
            rotation: -30,
        }
    }
}

/// QR code anchor. `payment-*` positions are relative to the payment
/// details block; the rest are absolute page corners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QrPosition {
    #[default]
    PaymentRight,
    PaymentBelow,
    TopRight,
    BottomRight,
}

/// QR code layout settings. The encoded payload comes from the invoice
/// itself and is out of scope here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QrCodeSettings {
    pub enabled: bool,
    pub position: QrPosition,
    /// Edge length in px.
    pub size: u32,
}

impl Default for QrCodeSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            position: QrPosition::PaymentRight,
            size: 100,
        }
    }
}

/// Styling of the warning box (reverse-charge notes and similar). The
/// text content comes from the invoice, not the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WarningBoxSettings {
    pub enabled: bool,
    pub background_color: String,
    pub text_color: String,
    pub icon: String,
}

impl Default for WarningBoxSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            background_color: "#fef3c7".to_string(),
            text_color: "#92400e".to_string(),
            icon: "⚠️".to_string(),
        }
    }
}

/// Edge placement of the decorative wave strip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WavePosition {
    #[default]
    Top,
    Bottom,
    Both,
}

/// Decorative wave strip settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecorativeWaves {
    pub enabled: bool,
    pub position: WavePosition,
    /// Opacity percentage.
    pub opacity: u8,
    pub color: String,
}

impl Default for DecorativeWaves {
    fn default() -> Self {
        Self {
            enabled: false,
            position: WavePosition::Top,
            opacity: 20,
            color: DEFAULT_PRIMARY_START.to_string(),
        }
    }
}
