//! Styled PDF document generation.
//!
//! Lays out invoices and BTW reports onto A4 pages at explicit
//! coordinates — header band, information cards, a tabular region,
//! flowing totals, notes, and a footer — themed by a closed set of
//! style variants and color schemes. The tabular region has a validated
//! layout path and a manual row-by-row fallback with the same visual
//! contract; a failed layout never aborts generation.
//!
//! Rendering is synchronous and infallible-by-fallback for layout
//! concerns; real failures return [`FactuurError::Document`] and no
//! bytes leave the renderer.

mod invoice_doc;
mod layout;
mod report_doc;
mod table;
mod theme;

pub use invoice_doc::render_invoice;
pub use report_doc::render_vat_report;
pub use theme::{ColorScheme, Palette, StyleVariant};

use chrono::NaiveDateTime;

/// A finished document ready for the download primitive.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    /// Deterministic name: `factuur-{number}.pdf` for invoices,
    /// `btw-rapport-{start}-{end}.pdf` for reports.
    pub filename: String,
    /// Number of pages produced (line-item tables paginate).
    pub pages: usize,
}

/// Rendering inputs beyond the records themselves.
///
/// The generation timestamp is injected by the caller so output is
/// reproducible; the renderer reads no clock of its own.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub style: StyleVariant,
    pub scheme: ColorScheme,
    pub generated_at: NaiveDateTime,
}

impl RenderOptions {
    /// Default theme: modern style, blue scheme.
    pub fn new(generated_at: NaiveDateTime) -> Self {
        Self {
            style: StyleVariant::default(),
            scheme: ColorScheme::default(),
            generated_at,
        }
    }

    pub fn with_style(mut self, style: StyleVariant) -> Self {
        self.style = style;
        self
    }

    pub fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }
}
