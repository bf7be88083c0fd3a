//! In-memory doubles for the external collaborators, plus shared
//! fixtures. The store uses interior mutability behind `&self`
//! receivers, like the remote clients it stands in for.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use chrono::NaiveDate;
use factuur::core::*;
use factuur::store::*;
use rust_decimal_macros::dec;

pub const USER: &str = "user-1";

pub fn test_user() -> CurrentUser {
    CurrentUser {
        id: USER.to_string(),
        email: Some("eigenaar@voorbeeld.nl".to_string()),
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A sent invoice with fixed totals, for aggregation and report tests.
pub fn sent_invoice(number: &str, issue: NaiveDate, total: rust_decimal::Decimal) -> Invoice {
    let tax_amount = total * dec!(21) / dec!(121);
    Invoice {
        id: None,
        invoice_number: number.to_string(),
        issue_date: issue,
        due_date: issue + chrono::Days::new(30),
        status: InvoiceStatus::Sent,
        subtotal: total - tax_amount,
        tax_rate: dec!(21),
        tax_amount,
        total,
        notes: None,
        terms: None,
        client_id: None,
        project_id: None,
    }
}

#[derive(Default)]
pub struct MemoryStore {
    next_id: Cell<u64>,
    pub invoices: RefCell<HashMap<String, Invoice>>,
    pub items: RefCell<HashMap<String, Vec<LineItem>>>,
    pub clients: RefCell<HashMap<String, Client>>,
    pub projects: RefCell<HashMap<String, Project>>,
    pub settings: RefCell<Option<Settings>>,
    pub organization: RefCell<Option<Organization>>,
    pub reports: RefCell<HashMap<String, VatReport>>,
    /// Makes the next `insert_items` call fail, for the compensating
    /// cleanup test.
    pub fail_item_insert: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&self, prefix: &str) -> String {
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        format!("{prefix}-{n}")
    }
}

impl InvoiceStore for MemoryStore {
    fn create_invoice(&self, _user: &UserId, invoice: &Invoice) -> Result<String, StoreError> {
        let id = self.allocate("inv");
        let mut stored = invoice.clone();
        stored.id = Some(id.clone());
        self.invoices.borrow_mut().insert(id.clone(), stored);
        Ok(id)
    }

    fn update_invoice(
        &self,
        _user: &UserId,
        id: &str,
        invoice: &Invoice,
    ) -> Result<(), StoreError> {
        let mut invoices = self.invoices.borrow_mut();
        let slot = invoices.get_mut(id).ok_or(StoreError::NotFound)?;
        let mut stored = invoice.clone();
        stored.id = Some(id.to_string());
        *slot = stored;
        Ok(())
    }

    fn delete_invoice(&self, _user: &UserId, id: &str) -> Result<(), StoreError> {
        self.invoices
            .borrow_mut()
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    fn invoice(&self, _user: &UserId, id: &str) -> Result<Invoice, StoreError> {
        self.invoices
            .borrow()
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn invoices(&self, _user: &UserId) -> Result<Vec<Invoice>, StoreError> {
        let mut all: Vec<Invoice> = self.invoices.borrow().values().cloned().collect();
        all.sort_by(|a, b| b.issue_date.cmp(&a.issue_date));
        Ok(all)
    }

    fn invoices_issued_between(
        &self,
        _user: &UserId,
        from: NaiveDate,
        to: Option<NaiveDate>,
        statuses: &[InvoiceStatus],
    ) -> Result<Vec<Invoice>, StoreError> {
        let mut selected: Vec<Invoice> = self
            .invoices
            .borrow()
            .values()
            .filter(|inv| statuses.contains(&inv.status))
            .filter(|inv| inv.issue_date >= from)
            .filter(|inv| to.is_none_or(|t| inv.issue_date <= t))
            .cloned()
            .collect();
        selected.sort_by(|a, b| a.issue_date.cmp(&b.issue_date));
        Ok(selected)
    }

    fn insert_items(
        &self,
        _user: &UserId,
        invoice_id: &str,
        items: &[LineItem],
    ) -> Result<(), StoreError> {
        if self.fail_item_insert.take() {
            return Err(StoreError::Backend("item insert rejected".to_string()));
        }
        self.items
            .borrow_mut()
            .entry(invoice_id.to_string())
            .or_default()
            .extend(items.iter().cloned());
        Ok(())
    }

    fn delete_items(&self, _user: &UserId, invoice_id: &str) -> Result<(), StoreError> {
        self.items.borrow_mut().remove(invoice_id);
        Ok(())
    }

    fn items(&self, _user: &UserId, invoice_id: &str) -> Result<Vec<LineItem>, StoreError> {
        Ok(self
            .items
            .borrow()
            .get(invoice_id)
            .cloned()
            .unwrap_or_default())
    }
}

impl ClientStore for MemoryStore {
    fn create_client(&self, _user: &UserId, client: &Client) -> Result<String, StoreError> {
        let id = self.allocate("cli");
        let mut stored = client.clone();
        stored.id = Some(id.clone());
        self.clients.borrow_mut().insert(id.clone(), stored);
        Ok(id)
    }

    fn update_client(&self, _user: &UserId, id: &str, client: &Client) -> Result<(), StoreError> {
        let mut clients = self.clients.borrow_mut();
        let slot = clients.get_mut(id).ok_or(StoreError::NotFound)?;
        let mut stored = client.clone();
        stored.id = Some(id.to_string());
        *slot = stored;
        Ok(())
    }

    fn delete_client(&self, _user: &UserId, id: &str) -> Result<(), StoreError> {
        self.clients
            .borrow_mut()
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    fn client(&self, _user: &UserId, id: &str) -> Result<Client, StoreError> {
        self.clients
            .borrow()
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn clients(&self, _user: &UserId) -> Result<Vec<Client>, StoreError> {
        let mut all: Vec<Client> = self.clients.borrow().values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}

impl ProjectStore for MemoryStore {
    fn create_project(&self, _user: &UserId, project: &Project) -> Result<String, StoreError> {
        let id = self.allocate("prj");
        let mut stored = project.clone();
        stored.id = Some(id.clone());
        self.projects.borrow_mut().insert(id.clone(), stored);
        Ok(id)
    }

    fn update_project(
        &self,
        _user: &UserId,
        id: &str,
        project: &Project,
    ) -> Result<(), StoreError> {
        let mut projects = self.projects.borrow_mut();
        let slot = projects.get_mut(id).ok_or(StoreError::NotFound)?;
        let mut stored = project.clone();
        stored.id = Some(id.to_string());
        *slot = stored;
        Ok(())
    }

    fn delete_project(&self, _user: &UserId, id: &str) -> Result<(), StoreError> {
        self.projects
            .borrow_mut()
            .remove(id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    fn project(&self, _user: &UserId, id: &str) -> Result<Project, StoreError> {
        self.projects
            .borrow()
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn projects(&self, _user: &UserId) -> Result<Vec<Project>, StoreError> {
        let mut all: Vec<Project> = self.projects.borrow().values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}

impl SettingsStore for MemoryStore {
    fn settings(&self, _user: &UserId) -> Result<Option<Settings>, StoreError> {
        Ok(self.settings.borrow().clone())
    }

    fn create_settings(&self, _user: &UserId, settings: &Settings) -> Result<String, StoreError> {
        let mut slot = self.settings.borrow_mut();
        if slot.is_some() {
            return Err(StoreError::Backend("settings already exist".to_string()));
        }
        let id = self.allocate("set");
        let mut stored = settings.clone();
        stored.id = Some(id.clone());
        *slot = Some(stored);
        Ok(id)
    }

    fn update_settings(
        &self,
        _user: &UserId,
        id: &str,
        settings: &Settings,
    ) -> Result<(), StoreError> {
        let mut slot = self.settings.borrow_mut();
        match slot.as_mut() {
            Some(existing) if existing.id.as_deref() == Some(id) => {
                let mut stored = settings.clone();
                stored.id = Some(id.to_string());
                *existing = stored;
                Ok(())
            }
            _ => Err(StoreError::NotFound),
        }
    }

    fn organization(&self, _user: &UserId) -> Result<Option<Organization>, StoreError> {
        Ok(self.organization.borrow().clone())
    }

    fn create_organization(
        &self,
        _user: &UserId,
        organization: &Organization,
    ) -> Result<String, StoreError> {
        let mut slot = self.organization.borrow_mut();
        if slot.is_some() {
            return Err(StoreError::Backend("organization already exists".to_string()));
        }
        let id = self.allocate("org");
        let mut stored = organization.clone();
        stored.id = Some(id.clone());
        *slot = Some(stored);
        Ok(id)
    }

    fn update_organization(
        &self,
        _user: &UserId,
        id: &str,
        organization: &Organization,
    ) -> Result<(), StoreError> {
        let mut slot = self.organization.borrow_mut();
        match slot.as_mut() {
            Some(existing) if existing.id.as_deref() == Some(id) => {
                let mut stored = organization.clone();
                stored.id = Some(id.to_string());
                *existing = stored;
                Ok(())
            }
            _ => Err(StoreError::NotFound),
        }
    }
}

impl ReportStore for MemoryStore {
    fn create_report(&self, _user: &UserId, report: &VatReport) -> Result<String, StoreError> {
        let id = self.allocate("rpt");
        let mut stored = report.clone();
        stored.id = Some(id.clone());
        self.reports.borrow_mut().insert(id.clone(), stored);
        Ok(id)
    }

    fn report(&self, _user: &UserId, id: &str) -> Result<VatReport, StoreError> {
        self.reports
            .borrow()
            .get(id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    fn reports(&self, _user: &UserId) -> Result<Vec<VatReport>, StoreError> {
        let mut all: Vec<VatReport> = self.reports.borrow().values().cloned().collect();
        all.sort_by(|a, b| b.period_start.cmp(&a.period_start));
        Ok(all)
    }
}

pub struct TestAuth(pub Option<CurrentUser>);

impl Auth for TestAuth {
    fn current_user(&self) -> Option<CurrentUser> {
        self.0.clone()
    }
}

/// Service over a fresh store with an authenticated user.
pub fn service() -> InvoiceService<MemoryStore, TestAuth> {
    InvoiceService::new(MemoryStore::new(), TestAuth(Some(test_user())))
}

/// Service with no authenticated user — every write must abort.
pub fn anonymous_service() -> InvoiceService<MemoryStore, TestAuth> {
    InvoiceService::new(MemoryStore::new(), TestAuth(None))
}

/// Blob storage double; starts with or without the logos container.
pub struct MemoryBlobs {
    pub container_exists: Cell<bool>,
    pub uploads: RefCell<Vec<String>>,
    pub ensure_calls: Cell<u32>,
}

impl MemoryBlobs {
    pub fn with_container(exists: bool) -> Self {
        Self {
            container_exists: Cell::new(exists),
            uploads: RefCell::new(Vec::new()),
            ensure_calls: Cell::new(0),
        }
    }
}

impl BlobStore for MemoryBlobs {
    fn upload(&self, name: &str, _bytes: &[u8]) -> Result<String, StoreError> {
        if !self.container_exists.get() {
            return Err(StoreError::MissingContainer("logos".to_string()));
        }
        self.uploads.borrow_mut().push(name.to_string());
        Ok(format!("https://storage.local/logos/{name}"))
    }

    fn ensure_container(&self) -> Result<(), StoreError> {
        self.ensure_calls.set(self.ensure_calls.get() + 1);
        self.container_exists.set(true);
        Ok(())
    }
}

/// Download sink that collects delivered documents.
#[cfg(feature = "pdf")]
#[derive(Default)]
pub struct CollectSink {
    pub saved: RefCell<Vec<factuur::pdf::RenderedDocument>>,
}

#[cfg(feature = "pdf")]
impl FileSink for CollectSink {
    fn save(&self, document: &factuur::pdf::RenderedDocument) -> Result<(), StoreError> {
        self.saved.borrow_mut().push(document.clone());
        Ok(())
    }
}
