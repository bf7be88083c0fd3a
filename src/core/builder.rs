use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::error::FactuurError;
use super::totals;
use super::types::*;
use super::validation;

/// Builder assembling an invoice and its line items from form-shaped
/// input, with totals derived on build.
///
/// ```
/// use chrono::NaiveDate;
/// use factuur::core::*;
/// use rust_decimal_macros::dec;
///
/// let (invoice, items) = InvoiceBuilder::new(
///     "INV-001",
///     NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
/// )
/// .tax_rate(dec!(21))
/// .add_item("Consultancy", dec!(10), dec!(50))
/// .build()
/// .unwrap();
///
/// assert_eq!(invoice.subtotal, dec!(500));
/// assert_eq!(invoice.total, dec!(605));
/// assert_eq!(items.len(), 1);
/// ```
pub struct InvoiceBuilder {
    id: Option<String>,
    invoice_number: String,
    issue_date: NaiveDate,
    due_date: NaiveDate,
    status: InvoiceStatus,
    tax_rate: Decimal,
    notes: Option<String>,
    terms: Option<String>,
    client_id: Option<String>,
    project_id: Option<String>,
    items: Vec<LineItem>,
}

impl InvoiceBuilder {
    pub fn new(
        invoice_number: impl Into<String>,
        issue_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            invoice_number: invoice_number.into(),
            issue_date,
            due_date,
            status: InvoiceStatus::Draft,
            tax_rate: dec!(21),
            notes: None,
            terms: None,
            client_id: None,
            project_id: None,
            items: Vec::new(),
        }
    }

    /// Carry the id of an existing record — the subsequent save becomes
    /// an update instead of a create.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }

    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn terms(mut self, terms: impl Into<String>) -> Self {
        self.terms = Some(terms.into());
        self
    }

    pub fn client(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    /// Seed account defaults the way the form does: the settings tax
    /// rate, and standing notes/terms where none were set yet.
    pub fn with_defaults(mut self, settings: &Settings) -> Self {
        self.tax_rate = settings.tax_rate;
        if self.notes.is_none() {
            self.notes = settings.invoice_notes.clone();
        }
        if self.terms.is_none() {
            self.terms = settings.invoice_terms.clone();
        }
        self
    }

    /// Append a line item; its amount derives from quantity and price.
    pub fn add_item(
        mut self,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        self.items.push(LineItem::new(description, quantity, unit_price));
        self
    }

    /// Build the invoice, running form-boundary validation and deriving
    /// totals. Returns all validation errors joined (not just the first).
    pub fn build(self) -> Result<(Invoice, Vec<LineItem>), FactuurError> {
        let (invoice, items) = self.assemble();

        let errors = validation::validate_invoice(&invoice, &items);
        if !errors.is_empty() {
            let msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(FactuurError::Validation(msg));
        }

        Ok((invoice, items))
    }

    /// Build without validation — useful for tests or importing
    /// external data.
    pub fn build_unchecked(self) -> (Invoice, Vec<LineItem>) {
        self.assemble()
    }

    fn assemble(self) -> (Invoice, Vec<LineItem>) {
        let derived = totals::compute(&self.items, self.tax_rate);
        let invoice = Invoice {
            id: self.id,
            invoice_number: self.invoice_number,
            issue_date: self.issue_date,
            due_date: self.due_date,
            status: self.status,
            subtotal: derived.subtotal,
            tax_rate: self.tax_rate,
            tax_amount: derived.tax_amount,
            total: derived.total,
            notes: self.notes,
            terms: self.terms,
            client_id: self.client_id,
            project_id: self.project_id,
        };
        (invoice, self.items)
    }
}
