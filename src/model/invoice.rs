//! Invoice template document.

use crate::model::document::{collect_common_errors, Document};
use crate::model::error::{ValidationError, ValidationFailure};
use crate::model::section::{BlockKind, InvoiceBlock};
use crate::model::style::{
    DecorativeWaves, FontSettings, GradientPair, LogoSettings, Orientation, PageSize,
    QrCodeSettings, WarningBoxSettings, WatermarkSettings, DEFAULT_BACKGROUND_COLOR,
    DEFAULT_BORDER_COLOR, DEFAULT_TEXT_COLOR,
};
use chrono::{DateTime, Utc};

/// Name given to a template created from defaults.
pub const DEFAULT_INVOICE_NAME: &str = "New Invoice Template";

/// Complete in-memory state of an invoice template being edited.
///
/// Mutated exclusively through the editor session; every field here is
/// captured by history snapshots, so the struct stays plain cloneable
/// data with no interior mutability.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceTemplate {
    /// Stable record id, assigned at creation and kept across saves.
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    /// Ordered blocks; `order` fields always match array position.
    pub blocks: Vec<InvoiceBlock>,
    pub primary: GradientPair,
    /// Header band gradient (the record's "secondary" color).
    pub header: GradientPair,
    pub accent: GradientPair,
    pub background_color: String,
    pub text_color: String,
    pub border_color: String,
    pub fonts: FontSettings,
    pub logo: LogoSettings,
    pub watermark: WatermarkSettings,
    pub qr_code: QrCodeSettings,
    pub warning_box: WarningBoxSettings,
    pub waves: DecorativeWaves,
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl InvoiceTemplate {
    /// Fresh template with the standard eight blocks and default styling.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: format!("invoice-template-{}", now.timestamp_millis()),
            name: DEFAULT_INVOICE_NAME.to_string(),
            description: None,
            blocks: default_blocks(),
            primary: GradientPair::primary_default(),
            header: GradientPair::primary_default(),
            accent: GradientPair::accent_default(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            border_color: DEFAULT_BORDER_COLOR.to_string(),
            fonts: FontSettings::default(),
            logo: LogoSettings::default(),
            watermark: WatermarkSettings::default(),
            qr_code: QrCodeSettings::default(),
            warning_box: WarningBoxSettings::default(),
            waves: DecorativeWaves::default(),
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for InvoiceTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// Explicit-field partial update for [`InvoiceTemplate`].
///
/// `None` leaves the field untouched; `Some` replaces it wholesale.
#[derive(Debug, Clone, Default)]
pub struct InvoicePatch {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub blocks: Option<Vec<InvoiceBlock>>,
    pub primary: Option<GradientPair>,
    pub header: Option<GradientPair>,
    pub accent: Option<GradientPair>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub border_color: Option<String>,
    pub fonts: Option<FontSettings>,
    pub logo: Option<LogoSettings>,
    pub watermark: Option<WatermarkSettings>,
    pub qr_code: Option<QrCodeSettings>,
    pub warning_box: Option<WarningBoxSettings>,
    pub waves: Option<DecorativeWaves>,
    pub page_size: Option<PageSize>,
    pub orientation: Option<Orientation>,
}

impl Document for InvoiceTemplate {
    type Section = InvoiceBlock;
    type Patch = InvoicePatch;

    const SECTION_ID_PREFIX: &'static str = "block";

    fn name(&self) -> &str {
        &self.name
    }

    fn sections(&self) -> &[InvoiceBlock] {
        &self.blocks
    }

    fn merged(&self, patch: InvoicePatch) -> Self {
        let mut next = self.clone();
        if let Some(name) = patch.name {
            next.name = name;
        }
        if let Some(description) = patch.description {
            next.description = description;
        }
        if let Some(blocks) = patch.blocks {
            next.blocks = blocks;
        }
        if let Some(primary) = patch.primary {
            next.primary = primary;
        }
        if let Some(header) = patch.header {
            next.header = header;
        }
        if let Some(accent) = patch.accent {
            next.accent = accent;
        }
        if let Some(background_color) = patch.background_color {
            next.background_color = background_color;
        }
        if let Some(text_color) = patch.text_color {
            next.text_color = text_color;
        }
        if let Some(border_color) = patch.border_color {
            next.border_color = border_color;
        }
        if let Some(fonts) = patch.fonts {
            next.fonts = fonts;
        }
        if let Some(logo) = patch.logo {
            next.logo = logo;
        }
        if let Some(watermark) = patch.watermark {
            next.watermark = watermark;
        }
        if let Some(qr_code) = patch.qr_code {
            next.qr_code = qr_code;
        }
        if let Some(warning_box) = patch.warning_box {
            next.warning_box = warning_box;
        }
        if let Some(waves) = patch.waves {
            next.waves = waves;
        }
        if let Some(page_size) = patch.page_size {
            next.page_size = page_size;
        }
        if let Some(orientation) = patch.orientation {
            next.orientation = orientation;
        }
        next
    }

    fn sections_patch(sections: Vec<InvoiceBlock>) -> InvoicePatch {
        InvoicePatch {
            blocks: Some(sections),
            ..InvoicePatch::default()
        }
    }

    fn validate(&self) -> Result<(), ValidationFailure> {
        let mut errors = Vec::new();
        collect_common_errors(&self.name, &self.blocks, &mut errors);

        // Only checked when blocks exist at all; an empty template
        // already reported NoSections above.
        if !self.blocks.is_empty() && !self.blocks.iter().any(|b| b.visible) {
            errors.push(ValidationError::NoVisibleSections);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure::new(errors))
        }
    }
}

/// The standard block set for a new invoice template. Notes start
/// hidden; everything else is visible.
pub fn default_blocks() -> Vec<InvoiceBlock> {
    let specs: [(&str, BlockKind, &str, bool); 8] = [
        ("company-info", BlockKind::CompanyInfo, "Company details", true),
        ("client-info", BlockKind::ClientInfo, "Client details", true),
        ("invoice-header", BlockKind::InvoiceHeader, "Invoice header", true),
        ("items-table", BlockKind::ItemsTable, "Items table", true),
        ("totals", BlockKind::Totals, "Totals", true),
        ("payment-info", BlockKind::PaymentInfo, "Payment details", true),
        ("notes", BlockKind::Notes, "Notes", false),
        ("footer", BlockKind::Footer, "Footer", true),
    ];

    specs
        .iter()
        .enumerate()
        .map(|(idx, (id, kind, label, visible))| {
            let mut block = InvoiceBlock::new(*id, *kind, *label);
            block.visible = *visible;
            block.order = idx as u32 + 1;
            block
        })
        .collect()
}
