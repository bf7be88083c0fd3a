use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Invoice, InvoiceStatus};

/// Statuses that count towards VAT figures. Drafts, overdue, and
/// cancelled invoices are excluded from every report and summary.
pub const REPORTABLE_STATUSES: [InvoiceStatus; 2] = [InvoiceStatus::Sent, InvoiceStatus::Paid];

/// Summed sales and VAT over a set of invoices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VatTotals {
    pub total_sales: Decimal,
    pub total_vat: Decimal,
}

/// The two live figures shown on the VAT overview: the running
/// calendar month and the year to date. Computed on demand from the
/// store, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VatSummary {
    pub current_period: VatTotals,
    pub year_to_date: VatTotals,
}

/// Sum `total` and `tax_amount` over the supplied invoices.
///
/// No filtering happens here — the caller supplies a pre-filtered set
/// (by status and date range, usually via the store query). The sum is
/// order-independent; an empty set yields zeros.
pub fn aggregate<'a, I>(invoices: I) -> VatTotals
where
    I: IntoIterator<Item = &'a Invoice>,
{
    let mut totals = VatTotals::default();
    for invoice in invoices {
        totals.total_sales += invoice.total;
        totals.total_vat += invoice.tax_amount;
    }
    totals
}
