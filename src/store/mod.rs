//! Contracts for the external collaborators.
//!
//! The billing core runs against four opaque hosted services:
//! authentication, a record-oriented data store, a browser-style file
//! download primitive, and blob storage for organization logos. Each is
//! modeled as a narrow trait here; real implementations live outside
//! the crate, and the test suite drives the lifecycle against
//! in-memory doubles.
//!
//! Every trait takes `&self` — the core is single-threaded
//! request/response code, and implementations are either remote clients
//! or interior-mutability stores.

mod service;

pub use service::InvoiceService;

use chrono::NaiveDate;

use crate::core::{
    Client, Invoice, InvoiceStatus, LineItem, Organization, Project, Settings, StoreError,
    VatReport,
};

/// Owner key for every stored record.
pub type UserId = String;

/// The authenticated account, as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: Option<String>,
}

/// Current-user lookup. Every write requires one; `None` aborts the
/// operation before anything reaches the store.
pub trait Auth {
    fn current_user(&self) -> Option<CurrentUser>;
}

/// Invoice and line-item records.
///
/// Line items are child rows keyed by invoice id; they are only ever
/// written as a full set (`insert_items` after `delete_items`), never
/// diffed.
pub trait InvoiceStore {
    /// Insert a new invoice row; the store assigns and returns the id.
    fn create_invoice(&self, user: &UserId, invoice: &Invoice) -> Result<String, StoreError>;
    fn update_invoice(&self, user: &UserId, id: &str, invoice: &Invoice)
    -> Result<(), StoreError>;
    fn delete_invoice(&self, user: &UserId, id: &str) -> Result<(), StoreError>;
    fn invoice(&self, user: &UserId, id: &str) -> Result<Invoice, StoreError>;
    /// All invoices for the user, newest issue date first.
    fn invoices(&self, user: &UserId) -> Result<Vec<Invoice>, StoreError>;
    /// Invoices with `issue_date` in `[from, to]` (`to = None` leaves the
    /// range open-ended) restricted to `statuses`, ordered by issue date.
    fn invoices_issued_between(
        &self,
        user: &UserId,
        from: NaiveDate,
        to: Option<NaiveDate>,
        statuses: &[InvoiceStatus],
    ) -> Result<Vec<Invoice>, StoreError>;

    fn insert_items(
        &self,
        user: &UserId,
        invoice_id: &str,
        items: &[LineItem],
    ) -> Result<(), StoreError>;
    fn delete_items(&self, user: &UserId, invoice_id: &str) -> Result<(), StoreError>;
    fn items(&self, user: &UserId, invoice_id: &str) -> Result<Vec<LineItem>, StoreError>;
}

/// Client records.
pub trait ClientStore {
    fn create_client(&self, user: &UserId, client: &Client) -> Result<String, StoreError>;
    fn update_client(&self, user: &UserId, id: &str, client: &Client) -> Result<(), StoreError>;
    fn delete_client(&self, user: &UserId, id: &str) -> Result<(), StoreError>;
    fn client(&self, user: &UserId, id: &str) -> Result<Client, StoreError>;
    /// All clients for the user, ordered by name.
    fn clients(&self, user: &UserId) -> Result<Vec<Client>, StoreError>;
}

/// Project records.
pub trait ProjectStore {
    fn create_project(&self, user: &UserId, project: &Project) -> Result<String, StoreError>;
    fn update_project(&self, user: &UserId, id: &str, project: &Project)
    -> Result<(), StoreError>;
    fn delete_project(&self, user: &UserId, id: &str) -> Result<(), StoreError>;
    fn project(&self, user: &UserId, id: &str) -> Result<Project, StoreError>;
    /// All projects for the user, ordered by name.
    fn projects(&self, user: &UserId) -> Result<Vec<Project>, StoreError>;
}

/// The two keyed-by-owner singletons: account settings and the issuing
/// organization.
pub trait SettingsStore {
    fn settings(&self, user: &UserId) -> Result<Option<Settings>, StoreError>;
    fn create_settings(&self, user: &UserId, settings: &Settings) -> Result<String, StoreError>;
    fn update_settings(&self, user: &UserId, id: &str, settings: &Settings)
    -> Result<(), StoreError>;

    fn organization(&self, user: &UserId) -> Result<Option<Organization>, StoreError>;
    fn create_organization(
        &self,
        user: &UserId,
        organization: &Organization,
    ) -> Result<String, StoreError>;
    fn update_organization(
        &self,
        user: &UserId,
        id: &str,
        organization: &Organization,
    ) -> Result<(), StoreError>;
}

/// Persisted VAT report snapshots.
pub trait ReportStore {
    fn create_report(&self, user: &UserId, report: &VatReport) -> Result<String, StoreError>;
    fn report(&self, user: &UserId, id: &str) -> Result<VatReport, StoreError>;
    /// All reports for the user, newest period first.
    fn reports(&self, user: &UserId) -> Result<Vec<VatReport>, StoreError>;
}

/// Umbrella over the per-entity record stores.
pub trait Datastore:
    InvoiceStore + ClientStore + ProjectStore + SettingsStore + ReportStore
{
}

impl<T> Datastore for T where
    T: InvoiceStore + ClientStore + ProjectStore + SettingsStore + ReportStore
{
}

/// "Save as file" primitive: hands a finished in-memory document to the
/// host environment as a download. No server round-trip.
#[cfg(feature = "pdf")]
pub trait FileSink {
    fn save(&self, document: &crate::pdf::RenderedDocument) -> Result<(), StoreError>;
}

/// Blob storage for logo uploads. `upload` returns a publicly
/// resolvable URL; `ensure_container` is the best-effort
/// create-if-missing fallback used when an upload reports
/// [`StoreError::MissingContainer`].
pub trait BlobStore {
    fn upload(&self, name: &str, bytes: &[u8]) -> Result<String, StoreError>;
    fn ensure_container(&self) -> Result<(), StoreError>;
}
