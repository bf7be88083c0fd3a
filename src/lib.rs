//! # factuur
//!
//! Invoicing core for a Dutch small-business billing application:
//! invoice totals and BTW (VAT) calculation, period reporting, record
//! lifecycle against an external store, and styled PDF documents.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. Subtotals accumulate unrounded; rounding to two places
//! happens only at display and persistence boundaries.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use factuur::core::*;
//! use rust_decimal_macros::dec;
//!
//! let (invoice, items) = InvoiceBuilder::new(
//!     "INV-001",
//!     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
//! )
//! .tax_rate(dec!(21))
//! .add_item("Consultancy", dec!(10), dec!(50))
//! .build()
//! .unwrap();
//!
//! assert_eq!(invoice.subtotal, dec!(500));
//! assert_eq!(invoice.total, dec!(605));
//! assert_eq!(format_eur(invoice.total), "€ 605,00");
//! assert_eq!(items.len(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Types, totals, BTW aggregation, numbering, formatting, store contracts & lifecycle |
//! | `pdf` | Styled PDF rendering of invoices and BTW reports |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod store;

#[cfg(feature = "core")]
pub mod vat;

#[cfg(feature = "pdf")]
pub mod pdf;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
