//! Form-boundary validation.
//!
//! These checks mirror what the invoice form enforces on input:
//! required fields and non-negative numeric constraints. The totals
//! calculator never calls them — it stays permissive by design.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::ValidationError;
use super::types::{Invoice, LineItem};

/// Validate an invoice and its line items as submitted from a form.
/// Returns all validation errors found (not just the first).
pub fn validate_invoice(invoice: &Invoice, items: &[LineItem]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if invoice.invoice_number.trim().is_empty() {
        errors.push(ValidationError::new(
            "invoice_number",
            "invoice number must not be empty",
        ));
    }

    if invoice.tax_rate < Decimal::ZERO || invoice.tax_rate > dec!(100) {
        errors.push(ValidationError::new(
            "tax_rate",
            "tax rate must be between 0 and 100",
        ));
    }

    for (i, item) in items.iter().enumerate() {
        validate_item(item, i, &mut errors);
    }

    errors
}

fn validate_item(item: &LineItem, index: usize, errors: &mut Vec<ValidationError>) {
    let prefix = format!("items[{index}]");

    if item.description.trim().is_empty() {
        errors.push(ValidationError::new(
            format!("{prefix}.description"),
            "description must not be empty",
        ));
    }

    if item.quantity.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.quantity"),
            "quantity must not be negative",
        ));
    }

    if item.unit_price.is_sign_negative() {
        errors.push(ValidationError::new(
            format!("{prefix}.unit_price"),
            "unit price must not be negative",
        ));
    }
}
