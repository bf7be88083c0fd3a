//! The BTW (VAT) report document.
//!
//! Same skeleton as the invoice document — header band, summary card,
//! tabular breakdown, optional notes, footer — with the period's
//! invoices as the table body. All amounts render as EUR in nl-NL
//! conventions, including the report totals.

use std::collections::HashMap;

use super::layout::{self, DocWriter, MUTED, WHITE, card};
use super::table::{Column, TableLayout, render_rows_manual};
use super::theme::Palette;
use super::{RenderOptions, RenderedDocument};
use crate::core::{FactuurError, Invoice, Organization, VatReport, format_date, format_eur};

const TABLE_X: f32 = 15.0;
const TABLE_WIDTH: f32 = 180.0;
const TABLE_TOP: f32 = 92.0;

/// Render a persisted VAT report with its per-invoice breakdown.
///
/// `client_names` maps client ids to display names; invoices without a
/// resolvable client show "Geen klant". The filename derives from the
/// report's period bounds.
pub fn render_vat_report(
    report: &VatReport,
    invoices: &[Invoice],
    client_names: &HashMap<String, String>,
    organization: Option<&Organization>,
    options: &RenderOptions,
) -> Result<RenderedDocument, FactuurError> {
    let palette = options.scheme.palette();
    let mut w = DocWriter::new(&format!(
        "BTW rapport {} - {}",
        report.period_start, report.period_end
    ))?;

    render_header(&w, report, organization, &palette);
    render_summary(&w, report, &palette);

    let rows: Vec<Vec<String>> = invoices
        .iter()
        .map(|invoice| {
            let client = invoice
                .client_id
                .as_ref()
                .and_then(|id| client_names.get(id))
                .map(String::as_str)
                .unwrap_or("Geen klant");
            vec![
                invoice.invoice_number.clone(),
                client.to_string(),
                format_date(invoice.issue_date),
                format_eur(invoice.subtotal),
                format_eur(invoice.tax_amount),
                format_eur(invoice.total),
            ]
        })
        .collect();

    let columns = vec![
        Column::left("Factuurnummer", 32.0),
        Column::left("Klant", 44.0),
        Column::left("Datum", 24.0),
        Column::right("Subtotaal", 27.0),
        Column::right("BTW", 26.0),
        Column::right("Totaal", 27.0),
    ];

    let table_end = match TableLayout::new(TABLE_X, columns, TABLE_WIDTH) {
        Ok(table) => table.render(&mut w, TABLE_TOP, &rows, options.style.ruled_table(), &palette),
        Err(_) => render_rows_manual(
            &mut w,
            TABLE_X,
            TABLE_TOP,
            TABLE_WIDTH,
            &[
                ("Factuurnummer", 17.0),
                ("Klant", 50.0),
                ("Datum", 95.0),
                ("Subtotaal", 120.0),
                ("BTW", 147.0),
                ("Totaal", 172.0),
            ],
            &rows,
            &palette,
        ),
    };

    let mut cursor = table_end + 10.0;
    if invoices.is_empty() {
        w.set_fill(MUTED);
        w.text_center(
            "Geen facturen gevonden voor deze periode",
            10.0,
            105.0,
            cursor,
            false,
        );
        cursor += 10.0;
    }

    render_report_notes(&mut w, report, cursor, &palette);
    layout::render_footer(&w, organization, options, &palette);

    let pages = w.page_count();
    let bytes = w.finish()?;
    Ok(RenderedDocument {
        bytes,
        filename: format!(
            "btw-rapport-{}-{}.pdf",
            report.period_start, report.period_end
        ),
        pages,
    })
}

fn render_header(
    w: &DocWriter,
    report: &VatReport,
    organization: Option<&Organization>,
    palette: &Palette,
) {
    if let Some(org) = organization {
        w.set_fill(palette.text);
        w.text(&org.name, 20.0, 20.0, 20.0, true);
    }

    w.set_fill(palette.primary);
    w.text_right("BTW RAPPORT", 24.0, 190.0, 20.0, true);
    w.set_fill(palette.text);
    let period = format!(
        "{} - {}",
        format_date(report.period_start),
        format_date(report.period_end)
    );
    w.text_right(&period, 12.0, 190.0, 28.0, false);

    w.set_fill(palette.primary);
    w.fill_rect(155.0, 32.0, 35.0, 8.0);
    w.set_fill(WHITE);
    w.text(
        &report.status.label_nl().to_uppercase(),
        8.0,
        157.0,
        37.5,
        true,
    );

    w.set_stroke(palette.primary, 2.0);
    w.hline(20.0, 190.0, 45.0);
}

fn render_summary(w: &DocWriter, report: &VatReport, palette: &Palette) {
    card(w, 15.0, 52.0, 180.0, 30.0);
    w.set_fill(palette.primary);
    w.text("TOTALEN", 11.0, 20.0, 59.0, true);

    w.set_fill(palette.text);
    w.text("Totale Omzet:", 10.0, 20.0, 66.5, false);
    w.text_right(&format_eur(report.total_sales), 10.0, 190.0, 66.5, false);
    w.text("Totale BTW:", 10.0, 20.0, 73.5, false);
    w.text_right(&format_eur(report.total_vat), 10.0, 190.0, 73.5, true);
}

fn render_report_notes(w: &mut DocWriter, report: &VatReport, mut top: f32, palette: &Palette) {
    let Some(notes) = &report.notes else { return };
    let lines = layout::wrap_text(notes, 170.0, 9.0);
    let needed = 5.0 + lines.len() as f32 * 5.0;
    if top + needed > layout::BODY_LIMIT {
        w.new_page();
        top = layout::CONTINUATION_TOP + 5.0;
    }

    w.set_fill(palette.text);
    w.text("Notities:", 10.0, 20.0, top, true);
    let mut y = top + 5.0;
    for line in &lines {
        w.text(line, 9.0, 20.0, y, false);
        y += 5.0;
    }
}
