use super::aggregate::{Invoice, InvoiceDraft};
use super::status::InvoiceStatus;
use serde::{Deserialize, Serialize};

/// `payload` of create / get / update responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoicePayload {
    pub invoice: Invoice,
}

/// `payload` of the list response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceListPayload {
    pub data: Vec<Invoice>,
}

/// `payload` of the delete response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePayload {
    pub deleted: bool,
}

/// Query of `GET /api/get-invoice`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetInvoiceQuery {
    #[serde(rename = "invoiceId")]
    pub invoice_id: String,
}

/// Body of `POST /api/update-invoice`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateInvoiceRequest {
    #[serde(rename = "invoiceId")]
    pub invoice_id: String,

    #[serde(flatten)]
    pub draft: InvoiceDraft,
}

/// Body of `POST /api/update-status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub id: String,
    pub status: InvoiceStatus,
}

/// Body of `POST /api/delete`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteInvoiceRequest {
    #[serde(rename = "invoiceId")]
    pub invoice_id: String,

    /// Remove the row instead of flagging it deleted
    #[serde(default)]
    pub hard: bool,
}
