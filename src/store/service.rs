use chrono::NaiveDate;

use super::{Auth, BlobStore, CurrentUser, Datastore};
use crate::core::{
    Client, FactuurError, Invoice, LineItem, Organization, Project, ReportStatus, Settings,
    StoreError,
};
use crate::vat::{self, REPORTABLE_STATUSES, VatSummary};

/// The record lifecycle: every user-triggered save, delete, report, and
/// document action, run to completion within the triggering call.
///
/// All writes resolve the current user first and abort with
/// [`FactuurError::NotAuthenticated`] when there is none. There is no
/// retry, no locking, and no conflict detection — concurrent edits to
/// the same record are last-write-wins, matching the store's own
/// semantics.
pub struct InvoiceService<S, A> {
    store: S,
    auth: A,
}

impl<S: Datastore, A: Auth> InvoiceService<S, A> {
    pub fn new(store: S, auth: A) -> Self {
        Self { store, auth }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn require_user(&self) -> Result<CurrentUser, FactuurError> {
        self.auth.current_user().ok_or(FactuurError::NotAuthenticated)
    }

    /// Persist an invoice together with its full line-item set.
    ///
    /// Create (no id yet): insert the invoice row, then the items tagged
    /// with the new id. If the item insert fails, the orphaned invoice
    /// row is deleted best-effort before the error propagates.
    ///
    /// Update: write the invoice fields, delete *all* stored items for
    /// the id, then insert the current set. Item identity is never
    /// preserved across edits — the stored items always reflect exactly
    /// the submitted set.
    pub fn save_invoice(
        &self,
        invoice: &Invoice,
        items: &[LineItem],
    ) -> Result<String, FactuurError> {
        let user = self.require_user()?;

        match &invoice.id {
            Some(id) => {
                self.store.update_invoice(&user.id, id, invoice)?;
                self.store.delete_items(&user.id, id)?;
                self.store.insert_items(&user.id, id, items)?;
                Ok(id.clone())
            }
            None => {
                let id = self.store.create_invoice(&user.id, invoice)?;
                if let Err(err) = self.store.insert_items(&user.id, &id, items) {
                    // compensating cleanup; the insert error wins
                    let _ = self.store.delete_invoice(&user.id, &id);
                    return Err(err.into());
                }
                Ok(id)
            }
        }
    }

    /// Delete an invoice and its line items. The children go first —
    /// no reliance on a store-side cascade.
    pub fn delete_invoice(&self, id: &str) -> Result<(), FactuurError> {
        let user = self.require_user()?;
        self.store.delete_items(&user.id, id)?;
        self.store.delete_invoice(&user.id, id)?;
        Ok(())
    }

    /// Create or update a client, dispatching on id presence.
    pub fn save_client(&self, client: &Client) -> Result<String, FactuurError> {
        let user = self.require_user()?;
        match &client.id {
            Some(id) => {
                self.store.update_client(&user.id, id, client)?;
                Ok(id.clone())
            }
            None => Ok(self.store.create_client(&user.id, client)?),
        }
    }

    /// Delete a client. Invoices and projects referencing it keep their
    /// foreign keys; referential policy stays with the store.
    pub fn delete_client(&self, id: &str) -> Result<(), FactuurError> {
        let user = self.require_user()?;
        self.store.delete_client(&user.id, id)?;
        Ok(())
    }

    pub fn save_project(&self, project: &Project) -> Result<String, FactuurError> {
        let user = self.require_user()?;
        match &project.id {
            Some(id) => {
                self.store.update_project(&user.id, id, project)?;
                Ok(id.clone())
            }
            None => Ok(self.store.create_project(&user.id, project)?),
        }
    }

    pub fn delete_project(&self, id: &str) -> Result<(), FactuurError> {
        let user = self.require_user()?;
        self.store.delete_project(&user.id, id)?;
        Ok(())
    }

    /// Save the account settings singleton: fetch by owner, then update
    /// the existing record or create the first one. Explicit
    /// create-if-absent, no upsert races.
    pub fn save_settings(&self, settings: &Settings) -> Result<String, FactuurError> {
        let user = self.require_user()?;
        match self.store.settings(&user.id)? {
            Some(existing) => {
                let id = existing
                    .id
                    .ok_or_else(|| StoreError::Backend("stored settings have no id".into()))?;
                self.store.update_settings(&user.id, &id, settings)?;
                Ok(id)
            }
            None => Ok(self.store.create_settings(&user.id, settings)?),
        }
    }

    /// Save the organization singleton, same create-if-absent shape as
    /// [`save_settings`](Self::save_settings).
    pub fn save_organization(&self, organization: &Organization) -> Result<String, FactuurError> {
        let user = self.require_user()?;
        match self.store.organization(&user.id)? {
            Some(existing) => {
                let id = existing
                    .id
                    .ok_or_else(|| StoreError::Backend("stored organization has no id".into()))?;
                self.store.update_organization(&user.id, &id, organization)?;
                Ok(id)
            }
            None => Ok(self.store.create_organization(&user.id, organization)?),
        }
    }

    /// Upload an organization logo and stamp its public URL onto the
    /// organization record. When the container does not exist yet, it is
    /// created once and the upload retried.
    pub fn upload_logo(
        &self,
        blobs: &impl BlobStore,
        name: &str,
        bytes: &[u8],
    ) -> Result<String, FactuurError> {
        let user = self.require_user()?;

        let url = match blobs.upload(name, bytes) {
            Ok(url) => url,
            Err(StoreError::MissingContainer(_)) => {
                blobs.ensure_container()?;
                blobs.upload(name, bytes)?
            }
            Err(err) => return Err(err.into()),
        };

        if let Some(mut organization) = self.store.organization(&user.id)? {
            organization.logo_url = Some(url.clone());
            if let Some(id) = organization.id.clone() {
                self.store.update_organization(&user.id, &id, &organization)?;
            }
        }

        Ok(url)
    }

    /// The two live VAT figures: the calendar month containing `today`,
    /// and the year to date. Computed fresh on every call; nothing is
    /// persisted.
    pub fn vat_summary(&self, today: NaiveDate) -> Result<VatSummary, FactuurError> {
        let user = self.require_user()?;

        let (month_start, month_end) = vat::month_bounds(today);
        let current = self.store.invoices_issued_between(
            &user.id,
            month_start,
            Some(month_end),
            &REPORTABLE_STATUSES,
        )?;

        let ytd = self.store.invoices_issued_between(
            &user.id,
            vat::year_start(today),
            None,
            &REPORTABLE_STATUSES,
        )?;

        Ok(VatSummary {
            current_period: vat::aggregate(&current),
            year_to_date: vat::aggregate(&ytd),
        })
    }

    /// Snapshot the period's sent and paid invoices into a persisted
    /// VAT report. The stored totals never change afterwards, and
    /// overlapping periods are accepted.
    pub fn create_vat_report(
        &self,
        period_start: NaiveDate,
        period_end: NaiveDate,
        status: ReportStatus,
        notes: Option<String>,
    ) -> Result<String, FactuurError> {
        let user = self.require_user()?;

        let invoices = self.store.invoices_issued_between(
            &user.id,
            period_start,
            Some(period_end),
            &REPORTABLE_STATUSES,
        )?;

        let report = vat::snapshot(period_start, period_end, &invoices, status, notes);
        Ok(self.store.create_report(&user.id, &report)?)
    }
}

#[cfg(feature = "pdf")]
impl<S: Datastore, A: Auth> InvoiceService<S, A> {
    /// Generate and deliver the PDF for an invoice.
    ///
    /// Re-fetches the fully resolved invoice (items, client,
    /// organization) before rendering; a failing client lookup degrades
    /// to the placeholder counterparty rather than aborting. Any render
    /// failure surfaces once and nothing reaches the sink — no partial
    /// file is ever delivered.
    pub fn generate_invoice_pdf(
        &self,
        invoice_id: &str,
        options: &crate::pdf::RenderOptions,
        sink: &impl super::FileSink,
    ) -> Result<(), FactuurError> {
        let user = self.require_user()?;

        let invoice = self.store.invoice(&user.id, invoice_id)?;
        let items = self.store.items(&user.id, invoice_id)?;
        let organization = self.store.organization(&user.id)?;
        let client = invoice
            .client_id
            .as_ref()
            .and_then(|id| self.store.client(&user.id, id).ok());

        let document = crate::pdf::render_invoice(
            &invoice,
            &items,
            client.as_ref(),
            organization.as_ref(),
            options,
        )?;
        sink.save(&document)?;
        Ok(())
    }

    /// Generate and deliver the PDF for a persisted VAT report,
    /// including the per-invoice breakdown for its period.
    pub fn generate_vat_report_pdf(
        &self,
        report_id: &str,
        options: &crate::pdf::RenderOptions,
        sink: &impl super::FileSink,
    ) -> Result<(), FactuurError> {
        let user = self.require_user()?;

        let report = self.store.report(&user.id, report_id)?;
        let invoices = self.store.invoices_issued_between(
            &user.id,
            report.period_start,
            Some(report.period_end),
            &REPORTABLE_STATUSES,
        )?;
        let organization = self.store.organization(&user.id)?;

        let mut client_names = std::collections::HashMap::new();
        for client in self.store.clients(&user.id)? {
            if let Some(id) = client.id.clone() {
                client_names.insert(id, client.name);
            }
        }

        let document = crate::pdf::render_vat_report(
            &report,
            &invoices,
            &client_names,
            organization.as_ref(),
            options,
        )?;
        sink.save(&document)?;
        Ok(())
    }
}
