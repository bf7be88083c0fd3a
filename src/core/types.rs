use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One billable row on an invoice.
///
/// Line items are a value collection owned entirely by their invoice:
/// they carry no identity of their own, and every save rewrites the
/// full set (see `store::InvoiceService::save_invoice`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    /// `quantity * unit_price`, exact. Rounded to two places only at
    /// display and persistence boundaries.
    pub amount: Decimal,
}

impl LineItem {
    /// Create a line item with its amount derived from quantity and price.
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            amount: quantity * unit_price,
        }
    }

    /// Recompute `amount` after a quantity or unit price edit.
    pub fn recalculate(&mut self) {
        self.amount = self.quantity * self.unit_price;
    }
}

/// Invoice lifecycle status. Transitions are free-form — any status may
/// follow any other; nothing in the core enforces a state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    /// Wire code as stored in the record store.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse from a wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(Self::Draft),
            "sent" => Some(Self::Sent),
            "paid" => Some(Self::Paid),
            "overdue" => Some(Self::Overdue),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Dutch display label, used on documents and status badges.
    pub fn label_nl(&self) -> &'static str {
        match self {
            Self::Draft => "Concept",
            Self::Sent => "Verzonden",
            Self::Paid => "Betaald",
            Self::Overdue => "Achterstallig",
            Self::Cancelled => "Geannuleerd",
        }
    }
}

/// An invoice record.
///
/// `id` is `None` until the record store assigns one on create.
/// The derived money fields satisfy, at construction via
/// [`InvoiceBuilder`](super::InvoiceBuilder):
/// `subtotal == Σ item.amount` (unrounded accumulation),
/// `tax_amount == subtotal * tax_rate / 100`,
/// `total == subtotal + tax_amount`.
///
/// The derived fields take `#[serde(default)]` so records with absent
/// values decode as zero rather than failing the whole fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Option<String>,
    /// Unique per user; uniqueness is not enforced by the core.
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub subtotal: Decimal,
    /// Percentage in `[0, 100]`.
    pub tax_rate: Decimal,
    #[serde(default)]
    pub tax_amount: Decimal,
    #[serde(default)]
    pub total: Decimal,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub client_id: Option<String>,
    pub project_id: Option<String>,
}

/// A client (counterparty) record. Every field except the name is
/// optional; absent fields are skipped entirely on rendered documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub tax_id: Option<String>,
    pub notes: Option<String>,
}

impl Client {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: None,
            phone: None,
            address: None,
            city: None,
            country: None,
            postal_code: None,
            tax_id: None,
            notes: None,
        }
    }
}

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Active,
    Completed,
    OnHold,
    Cancelled,
}

impl ProjectStatus {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "on_hold" => Some(Self::OnHold),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// A project record, optionally tied to a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget: Option<Decimal>,
    pub client_id: Option<String>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            status: ProjectStatus::Active,
            start_date: None,
            end_date: None,
            budget: None,
            client_id: None,
        }
    }
}

/// The issuing organization — one record per user. Supplies the
/// document header and footer identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Option<String>,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub tax_id: Option<String>,
    pub logo_url: Option<String>,
}

impl Organization {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            address: None,
            city: None,
            country: None,
            postal_code: None,
            phone: None,
            email: None,
            website: None,
            tax_id: None,
            logo_url: None,
        }
    }
}

/// Account settings — one record per user. Seeds defaults for new
/// invoices (tax rate, number prefix, standing notes and terms).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub id: Option<String>,
    pub currency: String,
    pub tax_rate: Decimal,
    pub invoice_prefix: String,
    pub invoice_terms: Option<String>,
    pub invoice_notes: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: None,
            currency: "EUR".to_string(),
            tax_rate: dec!(21),
            invoice_prefix: "INV".to_string(),
            invoice_terms: None,
            invoice_notes: None,
        }
    }
}

/// VAT report lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Draft,
    Submitted,
    Approved,
}

impl ReportStatus {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "draft" => Some(Self::Draft),
            "submitted" => Some(Self::Submitted),
            "approved" => Some(Self::Approved),
            _ => None,
        }
    }

    /// Dutch display label for status badges.
    pub fn label_nl(&self) -> &'static str {
        match self {
            Self::Draft => "Concept",
            Self::Submitted => "Ingediend",
            Self::Approved => "Goedgekeurd",
        }
    }
}

/// A VAT (BTW) report over a date-bounded period.
///
/// `total_sales` and `total_vat` are a snapshot taken when the report is
/// created (see [`snapshot`](crate::vat::snapshot)); they are never
/// recomputed afterwards, even when the underlying invoices change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatReport {
    pub id: Option<String>,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    #[serde(default)]
    pub total_sales: Decimal,
    #[serde(default)]
    pub total_vat: Decimal,
    pub status: ReportStatus,
    pub notes: Option<String>,
}
