//! Invoice total calculation.
//!
//! The calculator is deliberately permissive: it performs no bounds
//! checking (that happens at the form boundary, see
//! [`validate_invoice`](super::validate_invoice)) and accumulates
//! without intermediate rounding. Rounding to two places happens only
//! where a value crosses a display or persistence boundary, via
//! [`round2`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::LineItem;

/// Document-level derived totals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Sum of line amounts, unrounded.
    pub subtotal: Decimal,
    /// `subtotal * tax_rate / 100`.
    pub tax_amount: Decimal,
    /// `subtotal + tax_amount`.
    pub total: Decimal,
}

/// Amount for a single line: `quantity * unit_price`, exact.
pub fn line_amount(quantity: Decimal, unit_price: Decimal) -> Decimal {
    quantity * unit_price
}

/// Derive subtotal, tax amount, and total from the current line items
/// and tax rate (a percentage).
///
/// Pure and synchronous — recomputation after any quantity, price, or
/// rate change is just calling this again. An empty item list yields
/// all zeros regardless of the rate.
pub fn compute(items: &[LineItem], tax_rate: Decimal) -> Totals {
    let subtotal: Decimal = items.iter().map(|item| item.amount).sum();
    let tax_amount = subtotal * tax_rate / dec!(100);
    let total = subtotal + tax_amount;
    Totals {
        subtotal,
        tax_amount,
        total,
    }
}

/// Round to two decimal places using half-up (commercial rounding).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
