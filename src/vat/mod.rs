//! BTW (VAT) aggregation and period reporting.
//!
//! Sums sales and VAT figures over sets of invoices, computes the
//! calendar bounds for the two live summary figures (current month and
//! year to date), and builds persisted report snapshots.
//!
//! # Example
//!
//! ```
//! use factuur::vat::{aggregate, VatTotals};
//!
//! let totals = aggregate(&[]);
//! assert_eq!(totals, VatTotals::default());
//! ```

mod aggregate;
mod period;
mod snapshot;

pub use aggregate::{REPORTABLE_STATUSES, VatSummary, VatTotals, aggregate};
pub use period::{month_bounds, year_start};
pub use snapshot::snapshot;
