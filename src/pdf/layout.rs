//! Low-level page writing over `printpdf`.
//!
//! All public helpers address the page in millimetres from the top-left
//! corner (the layout was designed top-down); conversion to PDF's
//! bottom-up coordinates happens in one place. Text measurement uses a
//! per-character width estimate — the built-in Helvetica fonts expose
//! no metrics, and the estimate is accurate enough for alignment and
//! word wrap at document font sizes.

use std::io::BufWriter;

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rect, Rgb,
};

use super::RenderOptions;
use super::theme::Palette;
use crate::core::{FactuurError, Organization, format_date, format_time};

pub(crate) const PAGE_WIDTH: f32 = 210.0;
pub(crate) const PAGE_HEIGHT: f32 = 297.0;
/// Flowing content stops here; the zone below is reserved for the footer.
pub(crate) const BODY_LIMIT: f32 = 262.0;
/// Where flowing content resumes on a continuation page.
pub(crate) const CONTINUATION_TOP: f32 = 20.0;

const PT_TO_MM: f32 = 0.352_778;

/// Card and muted tones shared by every scheme.
pub(crate) const CARD_BG: (u8, u8, u8) = (248, 250, 252);
pub(crate) const CARD_BORDER: (u8, u8, u8) = (226, 232, 240);
pub(crate) const MUTED: (u8, u8, u8) = (100, 116, 139);
pub(crate) const WHITE: (u8, u8, u8) = (255, 255, 255);

pub(crate) struct DocWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    bold: IndirectFontRef,
    page_count: usize,
}

impl DocWriter {
    pub fn new(title: &str) -> Result<Self, FactuurError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "page 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(document_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(document_error)?;
        let layer = doc.get_page(page).get_layer(layer);
        Ok(Self {
            doc,
            layer,
            font,
            bold,
            page_count: 1,
        })
    }

    /// Start a continuation page; subsequent drawing lands there.
    pub fn new_page(&mut self) {
        self.page_count += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("page {}", self.page_count),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    fn y(top: f32) -> Mm {
        Mm(PAGE_HEIGHT - top)
    }

    pub fn set_fill(&self, (r, g, b): (u8, u8, u8)) {
        self.layer.set_fill_color(Color::Rgb(Rgb::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            None,
        )));
    }

    pub fn set_stroke(&self, (r, g, b): (u8, u8, u8), thickness: f32) {
        self.layer.set_outline_color(Color::Rgb(Rgb::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            None,
        )));
        self.layer.set_outline_thickness(thickness);
    }

    /// Draw text with its baseline `top` millimetres from the page top.
    /// Uses the current fill color.
    pub fn text(&self, text: &str, size: f32, x: f32, top: f32, bold: bool) {
        let font = if bold { &self.bold } else { &self.font };
        self.layer.use_text(text, size, Mm(x), Self::y(top), font);
    }

    pub fn text_right(&self, text: &str, size: f32, right: f32, top: f32, bold: bool) {
        self.text(text, size, right - text_width(text, size), top, bold);
    }

    pub fn text_center(&self, text: &str, size: f32, center: f32, top: f32, bold: bool) {
        self.text(text, size, center - text_width(text, size) / 2.0, top, bold);
    }

    /// Filled rectangle addressed from its top-left corner.
    pub fn fill_rect(&self, x: f32, top: f32, width: f32, height: f32) {
        let rect = Rect::new(Mm(x), Self::y(top + height), Mm(x + width), Self::y(top))
            .with_mode(PaintMode::Fill);
        self.layer.add_rect(rect);
    }

    /// Outlined rectangle with the current stroke color and thickness.
    pub fn stroke_rect(&self, x: f32, top: f32, width: f32, height: f32) {
        let rect = Rect::new(Mm(x), Self::y(top + height), Mm(x + width), Self::y(top))
            .with_mode(PaintMode::Stroke);
        self.layer.add_rect(rect);
    }

    pub fn hline(&self, x1: f32, x2: f32, top: f32) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x1), Self::y(top)), false),
                (Point::new(Mm(x2), Self::y(top)), false),
            ],
            is_closed: false,
        });
    }

    pub fn vline(&self, x: f32, top: f32, bottom: f32) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x), Self::y(top)), false),
                (Point::new(Mm(x), Self::y(bottom)), false),
            ],
            is_closed: false,
        });
    }

    pub fn finish(self) -> Result<Vec<u8>, FactuurError> {
        let mut writer = BufWriter::new(Vec::new());
        self.doc.save(&mut writer).map_err(document_error)?;
        writer
            .into_inner()
            .map_err(|e| FactuurError::Document(format!("buffer flush failed: {e}")))
    }
}

fn document_error(err: impl std::fmt::Display) -> FactuurError {
    FactuurError::Document(err.to_string())
}

/// Estimated rendered width of `text` in millimetres at `size` points.
pub(crate) fn text_width(text: &str, size: f32) -> f32 {
    let em: f32 = text.chars().map(char_width_em).sum();
    em * size * PT_TO_MM
}

/// Approximate Helvetica advance widths in em, bucketed by glyph class.
fn char_width_em(c: char) -> f32 {
    match c {
        'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' | ' ' => 0.28,
        't' | 'f' | 'r' | '(' | ')' | '[' | ']' | '-' | '/' => 0.35,
        'm' | 'w' | 'M' | 'W' | '@' | '%' | '€' => 0.85,
        'A'..='Z' | '0'..='9' | '#' => 0.62,
        _ => 0.5,
    }
}

/// Greedy word wrap to a content width.
pub(crate) fn wrap_text(text: &str, width: f32, size: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            if current.is_empty() || text_width(&candidate, size) <= width {
                current = candidate;
            } else {
                lines.push(current);
                current = word.to_string();
            }
        }
        lines.push(current);
    }
    lines
}

/// Truncate with an ellipsis when `text` would overflow `width`.
pub(crate) fn fit_text(text: &str, width: f32, size: f32) -> String {
    if text_width(text, size) <= width {
        return text.to_string();
    }
    let budget = width - text_width("...", size);
    let mut out = String::new();
    let mut used = 0.0;
    for c in text.chars() {
        let advance = char_width_em(c) * size * PT_TO_MM;
        if used + advance > budget {
            break;
        }
        out.push(c);
        used += advance;
    }
    out.push_str("...");
    out
}

/// Light card background with a hairline border, shared by the info and
/// totals sections.
pub(crate) fn card(w: &DocWriter, x: f32, top: f32, width: f32, height: f32) {
    w.set_fill(CARD_BG);
    w.fill_rect(x, top, width, height);
    w.set_stroke(CARD_BORDER, 0.5);
    w.stroke_rect(x, top, width, height);
}

/// Footer band on the last page: accent rule, organization recap on the
/// left, closing message centered, generation timestamp beneath it.
pub(crate) fn render_footer(
    w: &DocWriter,
    organization: Option<&Organization>,
    options: &RenderOptions,
    palette: &Palette,
) {
    w.set_stroke(palette.accent, 1.0);
    w.hline(20.0, 190.0, 270.0);

    if let Some(org) = organization {
        w.set_fill(palette.text);
        w.text(&org.name, 9.0, 20.0, 278.0, true);

        let mut y = 281.5;
        let mut line = |text: &str| {
            w.text(text, 8.0, 20.0, y, false);
            y += 3.0;
        };
        if let Some(address) = &org.address {
            line(address);
        }
        if let (Some(city), Some(country)) = (&org.city, &org.country) {
            line(&format!("{city}, {country}"));
        }
        if let Some(email) = &org.email {
            line(email);
        }
        if let Some(phone) = &org.phone {
            line(phone);
        }
        if let Some(tax_id) = &org.tax_id {
            line(&format!("BTW: {tax_id}"));
        }
    }

    w.set_fill(palette.primary);
    w.text_center("Bedankt voor je vertrouwen!", 10.0, 105.0, 278.0, true);

    w.set_fill(MUTED);
    let stamp = format!(
        "Gegenereerd op: {} om {}",
        format_date(options.generated_at.date()),
        format_time(options.generated_at.time())
    );
    w.text_center(&stamp, 7.0, 105.0, 286.0, false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wider_text_measures_wider() {
        assert!(text_width("MMMM", 10.0) > text_width("iiii", 10.0));
        assert!(text_width("abc", 12.0) > text_width("abc", 8.0));
    }

    #[test]
    fn wrap_respects_width() {
        let lines = wrap_text(
            "Betaling binnen 30 dagen na factuurdatum op rekening NL00BANK0123456789",
            60.0,
            9.0,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(text_width(line, 9.0) <= 60.0, "line too wide: {line}");
        }
    }

    #[test]
    fn wrap_preserves_words() {
        let lines = wrap_text("een twee drie", 500.0, 9.0);
        assert_eq!(lines, vec!["een twee drie".to_string()]);
    }

    #[test]
    fn fit_text_truncates_with_ellipsis() {
        let fitted = fit_text("Een hele lange omschrijving die niet past", 20.0, 10.0);
        assert!(fitted.ends_with("..."));
        assert!(text_width(&fitted, 10.0) <= 20.0 + 3.0);
    }

    #[test]
    fn fit_text_leaves_short_text_alone() {
        assert_eq!(fit_text("kort", 50.0, 10.0), "kort");
    }
}
