//! The invoice document.
//!
//! Section order is fixed regardless of style and color scheme:
//! header band, issuer/counterparty/date cards, line-item table,
//! totals card (flowing, directly under the table's last row),
//! optional notes and terms, footer band.

use super::layout::{self, DocWriter, WHITE, card, wrap_text};
use super::table::{Column, TableLayout, render_rows_manual};
use super::theme::Palette;
use super::{RenderOptions, RenderedDocument};
use crate::core::{Client, FactuurError, Invoice, LineItem, Organization, format_date, format_eur};

const TABLE_X: f32 = 15.0;
const TABLE_WIDTH: f32 = 180.0;
const TABLE_TOP: f32 = 150.0;

/// Render an invoice into a downloadable PDF.
///
/// A missing client degrades to a placeholder counterparty; a missing
/// organization simply leaves the issuer fields out. Zero line items
/// still produce a valid document. The filename derives from the
/// invoice number.
pub fn render_invoice(
    invoice: &Invoice,
    items: &[LineItem],
    client: Option<&Client>,
    organization: Option<&Organization>,
    options: &RenderOptions,
) -> Result<RenderedDocument, FactuurError> {
    let palette = options.scheme.palette();
    let mut w = DocWriter::new(&format!("Factuur {}", invoice.invoice_number))?;

    render_header(&w, invoice, organization, &palette);
    render_cards(&w, invoice, client, organization, &palette);

    let rows: Vec<Vec<String>> = items
        .iter()
        .map(|item| {
            vec![
                item.description.clone(),
                item.quantity.normalize().to_string(),
                format_eur(item.unit_price),
                format_eur(item.amount),
            ]
        })
        .collect();

    let columns = vec![
        Column::left("Omschrijving", 85.0),
        Column::right("Aantal", 25.0),
        Column::right("Prijs per Stuk", 35.0),
        Column::right("Bedrag", 35.0),
    ];

    let table_end = match TableLayout::new(TABLE_X, columns, TABLE_WIDTH) {
        Ok(table) => table.render(&mut w, TABLE_TOP, &rows, options.style.ruled_table(), &palette),
        // degrade transparently: same columns and tint, plain placement
        Err(_) => render_rows_manual(
            &mut w,
            TABLE_X,
            TABLE_TOP,
            TABLE_WIDTH,
            &[
                ("Omschrijving", 20.0),
                ("Aantal", 120.0),
                ("Prijs per Stuk", 140.0),
                ("Bedrag", 170.0),
            ],
            &rows,
            &palette,
        ),
    };

    let totals_end = render_totals(&mut w, invoice, table_end + 15.0, &palette);
    render_notes(&mut w, invoice, totals_end + 8.0, &palette);
    layout::render_footer(&w, organization, options, &palette);

    let pages = w.page_count();
    let bytes = w.finish()?;
    Ok(RenderedDocument {
        bytes,
        filename: format!("factuur-{}.pdf", invoice.invoice_number),
        pages,
    })
}

fn render_header(
    w: &DocWriter,
    invoice: &Invoice,
    organization: Option<&Organization>,
    palette: &Palette,
) {
    if let Some(org) = organization {
        w.set_fill(palette.text);
        w.text(&org.name, 20.0, 20.0, 20.0, true);
        if org.logo_url.is_some() {
            // placeholder glyph; image loading is not part of this core
            w.set_fill(palette.primary);
            w.fill_rect(20.0, 23.0, 16.0, 8.0);
            w.set_fill(WHITE);
            w.text_center("LOGO", 7.0, 28.0, 28.5, true);
        }
    }

    w.set_fill(palette.primary);
    w.text("FACTUUR", 24.0, 150.0, 20.0, true);
    w.set_fill(palette.text);
    w.text(&format!("#{}", invoice.invoice_number), 12.0, 150.0, 28.0, false);

    w.set_fill(palette.primary);
    w.fill_rect(150.0, 32.0, 35.0, 8.0);
    w.set_fill(WHITE);
    w.text(
        &invoice.status.label_nl().to_uppercase(),
        8.0,
        152.0,
        37.5,
        true,
    );

    w.set_stroke(palette.primary, 2.0);
    w.hline(20.0, 190.0, 45.0);
}

fn render_cards(
    w: &DocWriter,
    invoice: &Invoice,
    client: Option<&Client>,
    organization: Option<&Organization>,
    palette: &Palette,
) {
    // issuer
    card(w, 15.0, 50.0, 85.0, 35.0);
    w.set_fill(palette.primary);
    w.text("BEDRIJFSGEGEVENS", 11.0, 20.0, 57.0, true);
    if let Some(org) = organization {
        w.set_fill(palette.text);
        w.text(&org.name, 9.0, 20.0, 63.0, true);
        let mut y = 67.5;
        let lines = [
            org.address.clone(),
            org.city.clone(),
            org.country.clone(),
            org.phone.as_ref().map(|p| format!("Tel: {p}")),
            org.email.as_ref().map(|e| format!("Email: {e}")),
            org.tax_id.as_ref().map(|t| format!("BTW: {t}")),
        ];
        for line in lines.into_iter().flatten() {
            w.text(&line, 9.0, 20.0, y, false);
            y += 4.0;
        }
    }

    // counterparty
    card(w, 15.0, 95.0, 85.0, 40.0);
    w.set_fill(palette.primary);
    w.text("FACTUUR AAN", 11.0, 20.0, 102.0, true);
    w.set_fill(palette.text);
    match client {
        Some(client) => {
            w.text(&client.name, 10.0, 20.0, 108.0, true);
            let mut y = 114.0;
            if let Some(address) = &client.address {
                w.text(address, 10.0, 20.0, y, false);
                y += 4.0;
            }
            if let (Some(city), Some(country)) = (&client.city, &client.country) {
                w.text(&format!("{city}, {country}"), 10.0, 20.0, y, false);
                y += 4.0;
            }
            if let Some(email) = &client.email {
                w.text(email, 10.0, 20.0, y, false);
            }
        }
        None => {
            w.text("Onbekende Klant", 10.0, 20.0, 108.0, true);
        }
    }

    // invoice metadata
    card(w, 110.0, 95.0, 85.0, 40.0);
    w.set_fill(palette.primary);
    w.text("FACTUURGEGEVENS", 11.0, 115.0, 102.0, true);
    w.set_fill(palette.text);
    w.text("Factuurdatum:", 9.0, 115.0, 108.0, true);
    w.text(&format_date(invoice.issue_date), 9.0, 115.0, 112.5, false);
    w.text("Vervaldatum:", 9.0, 115.0, 119.0, true);
    w.text(&format_date(invoice.due_date), 9.0, 115.0, 123.5, false);
}

/// Totals card, right-aligned, positioned relative to the table's last
/// row rather than a fixed page offset. Returns the y below the card.
fn render_totals(w: &mut DocWriter, invoice: &Invoice, mut top: f32, palette: &Palette) -> f32 {
    if top + 35.0 > layout::BODY_LIMIT {
        w.new_page();
        top = layout::CONTINUATION_TOP + 8.0;
    }

    card(w, 120.0, top - 8.0, 75.0, 35.0);
    w.set_fill(palette.primary);
    w.text("TOTALEN", 11.0, 125.0, top - 2.0, true);

    w.set_fill(palette.text);
    w.text("Subtotaal:", 10.0, 125.0, top + 5.0, false);
    w.text_right(&format_eur(invoice.subtotal), 10.0, 185.0, top + 5.0, false);
    w.text(
        &format!("BTW ({}%):", invoice.tax_rate.normalize()),
        10.0,
        125.0,
        top + 12.0,
        false,
    );
    w.text_right(&format_eur(invoice.tax_amount), 10.0, 185.0, top + 12.0, false);

    w.set_stroke(palette.primary, 1.0);
    w.hline(125.0, 185.0, top + 16.0);

    w.set_fill(palette.primary);
    w.text("TOTAAL:", 12.0, 125.0, top + 23.0, true);
    w.text_right(&format_eur(invoice.total), 12.0, 185.0, top + 23.0, true);

    top + 27.0
}

fn render_notes(w: &mut DocWriter, invoice: &Invoice, mut top: f32, palette: &Palette) {
    let sections = [
        ("Notities:", invoice.notes.as_deref()),
        ("Algemene Voorwaarden:", invoice.terms.as_deref()),
    ];

    for (label, text) in sections {
        let Some(text) = text else { continue };
        let lines = wrap_text(text, 170.0, 9.0);
        let needed = 5.0 + lines.len() as f32 * 5.0;
        if top + needed > layout::BODY_LIMIT {
            w.new_page();
            top = layout::CONTINUATION_TOP + 5.0;
        }

        w.set_fill(palette.text);
        w.text(label, 10.0, 20.0, top, true);
        let mut y = top + 5.0;
        for line in &lines {
            w.text(line, 9.0, 20.0, y, false);
            y += 5.0;
        }
        top = y + 5.0;
    }
}
