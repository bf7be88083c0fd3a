use chrono::NaiveDate;

use super::aggregate::aggregate;
use crate::core::{Invoice, ReportStatus, VatReport};

/// Build a VAT report record over a period from the invoices the caller
/// selected for it.
///
/// The totals are fixed at this point — the persisted report is a
/// snapshot, not a live view, and is never recomputed when the
/// underlying invoices change. Reports over overlapping periods are
/// accepted; nothing here deduplicates.
pub fn snapshot<'a, I>(
    period_start: NaiveDate,
    period_end: NaiveDate,
    invoices: I,
    status: ReportStatus,
    notes: Option<String>,
) -> VatReport
where
    I: IntoIterator<Item = &'a Invoice>,
{
    let totals = aggregate(invoices);
    VatReport {
        id: None,
        period_start,
        period_end,
        total_sales: totals.total_sales,
        total_vat: totals.total_vat,
        status,
        notes,
    }
}
