use chrono::NaiveDate;
use factuur::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn builder(number: &str) -> InvoiceBuilder {
    InvoiceBuilder::new(number, date(2025, 3, 1), date(2025, 3, 31))
}

// --- Calculator contract ---

#[test]
fn consulting_scenario() {
    let items = vec![LineItem::new("Consulting", dec!(10), dec!(50.00))];
    let totals = compute(&items, dec!(21));

    assert_eq!(totals.subtotal, dec!(500.00));
    assert_eq!(totals.tax_amount, dec!(105.00));
    assert_eq!(totals.total, dec!(605.00));
}

#[test]
fn unrounded_intermediate_accumulation() {
    // 2 * 19.99 + 1 * 5.005 = 44.985 — no rounding before the sum
    let items = vec![
        LineItem::new("Eerste", dec!(2), dec!(19.99)),
        LineItem::new("Tweede", dec!(1), dec!(5.005)),
    ];
    let totals = compute(&items, dec!(0));

    assert_eq!(totals.subtotal, dec!(44.985));
    assert_eq!(totals.tax_amount, dec!(0));
    assert_eq!(totals.total, dec!(44.985));
    // rounding happens at the display boundary only
    assert_eq!(format_eur(totals.total), "€ 44,99");
}

#[test]
fn empty_items_zero_regardless_of_rate() {
    for rate in [dec!(0), dec!(9), dec!(21), dec!(100)] {
        let totals = compute(&[], rate);
        assert_eq!(totals.subtotal, dec!(0));
        assert_eq!(totals.tax_amount, dec!(0));
        assert_eq!(totals.total, dec!(0));
    }
}

#[test]
fn line_amount_is_exact() {
    assert_eq!(line_amount(dec!(10), dec!(50.00)), dec!(500.00));
    assert_eq!(line_amount(dec!(0.5), dec!(3.33)), dec!(1.665));
    assert_eq!(line_amount(dec!(0), dec!(99.99)), dec!(0));
}

#[test]
fn calculator_accepts_negative_input() {
    // bounds live at the form boundary, not here
    let items = vec![LineItem::new("Correctie", dec!(-1), dec!(50))];
    let totals = compute(&items, dec!(21));
    assert_eq!(totals.subtotal, dec!(-50));
    assert_eq!(totals.total, dec!(-60.50));
}

#[test]
fn recalculate_after_edit() {
    let mut item = LineItem::new("Hosting", dec!(1), dec!(49.90));
    assert_eq!(item.amount, dec!(49.90));

    item.quantity = dec!(3);
    item.recalculate();
    assert_eq!(item.amount, dec!(149.70));

    item.unit_price = dec!(50);
    item.recalculate();
    assert_eq!(item.amount, dec!(150));
}

// --- Builder ---

#[test]
fn builder_derives_totals() {
    let (invoice, items) = builder("INV-001")
        .tax_rate(dec!(21))
        .add_item("Webdevelopment", dec!(40), dec!(85))
        .add_item("Hosting", dec!(1), dec!(49.90))
        .build()
        .unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(invoice.subtotal, dec!(3449.90));
    assert_eq!(invoice.tax_amount, dec!(724.479));
    assert_eq!(invoice.total, invoice.subtotal + invoice.tax_amount);
    assert_eq!(invoice.status, InvoiceStatus::Draft);
    assert!(invoice.id.is_none());
}

#[test]
fn builder_applies_settings_defaults() {
    let settings = Settings {
        tax_rate: dec!(9),
        invoice_notes: Some("Standaard notitie".to_string()),
        invoice_terms: Some("Betaling binnen 14 dagen".to_string()),
        ..Settings::default()
    };

    let (invoice, _) = builder("INV-002")
        .with_defaults(&settings)
        .add_item("Advies", dec!(2), dec!(100))
        .build()
        .unwrap();

    assert_eq!(invoice.tax_rate, dec!(9));
    assert_eq!(invoice.notes.as_deref(), Some("Standaard notitie"));
    assert_eq!(invoice.terms.as_deref(), Some("Betaling binnen 14 dagen"));
    assert_eq!(invoice.total, dec!(218));
}

#[test]
fn builder_explicit_notes_win_over_defaults() {
    let settings = Settings {
        invoice_notes: Some("Standaard".to_string()),
        ..Settings::default()
    };

    let (invoice, _) = builder("INV-003")
        .notes("Specifiek voor deze factuur")
        .with_defaults(&settings)
        .add_item("Advies", dec!(1), dec!(100))
        .build()
        .unwrap();

    assert_eq!(invoice.notes.as_deref(), Some("Specifiek voor deze factuur"));
}

#[test]
fn builder_rejects_empty_number() {
    let err = builder("  ")
        .add_item("Advies", dec!(1), dec!(100))
        .build()
        .unwrap_err();
    assert!(matches!(err, FactuurError::Validation(_)));
    assert!(err.to_string().contains("invoice number"));
}

#[test]
fn builder_rejects_out_of_range_tax_rate() {
    let err = builder("INV-004")
        .tax_rate(dec!(120))
        .add_item("Advies", dec!(1), dec!(100))
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("tax rate"));
}

#[test]
fn builder_collects_all_errors() {
    let err = builder("")
        .tax_rate(dec!(-1))
        .add_item("", dec!(-2), dec!(-3))
        .build()
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("invoice_number"));
    assert!(message.contains("tax_rate"));
    assert!(message.contains("items[0].description"));
    assert!(message.contains("items[0].quantity"));
    assert!(message.contains("items[0].unit_price"));
}

#[test]
fn build_unchecked_skips_validation() {
    let (invoice, items) = builder("")
        .add_item("", dec!(-1), dec!(10))
        .build_unchecked();
    assert_eq!(invoice.subtotal, dec!(-10));
    assert_eq!(items.len(), 1);
}

#[test]
fn builder_with_zero_items_is_valid() {
    // the renderer and calculator both accept empty invoices
    let (invoice, items) = builder("INV-005").build().unwrap();
    assert!(items.is_empty());
    assert_eq!(invoice.total, dec!(0));
}

// --- Validation details ---

#[test]
fn validate_reports_per_item_paths() {
    let (invoice, items) = builder("INV-006")
        .add_item("Goed", dec!(1), dec!(10))
        .add_item("", dec!(1), dec!(10))
        .build_unchecked();

    let errors = validate_invoice(&invoice, &items);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "items[1].description");
}
