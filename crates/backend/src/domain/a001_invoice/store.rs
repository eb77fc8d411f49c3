use async_trait::async_trait;
use contracts::domain::a001_invoice::aggregate::{Invoice, InvoiceId};

/// Persistence seam for invoices
///
/// Single-record operations only; concurrent writers to the same id overwrite each other.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Persist a new invoice. `Ok(None)` means the store accepted the call but saved nothing.
    async fn insert(&self, invoice: &Invoice) -> anyhow::Result<Option<Invoice>>;

    /// Invoices not soft-deleted, in creation order
    async fn list_active(&self) -> anyhow::Result<Vec<Invoice>>;

    /// Any invoice with this id, soft-deleted ones included
    async fn get_by_id(&self, id: InvoiceId) -> anyhow::Result<Option<Invoice>>;

    /// Overwrite the stored record, leaving its deleted flag alone.
    /// False when no live row matched (missing or soft-deleted meanwhile).
    async fn update(&self, invoice: &Invoice) -> anyhow::Result<bool>;

    async fn soft_delete(&self, id: InvoiceId) -> anyhow::Result<bool>;

    async fn hard_delete(&self, id: InvoiceId) -> anyhow::Result<bool>;

    async fn custom_id_exists(&self, custom_id: i32) -> anyhow::Result<bool>;
}
