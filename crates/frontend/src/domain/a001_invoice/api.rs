use contracts::domain::a001_invoice::aggregate::{Invoice, InvoiceDraft};
use contracts::domain::a001_invoice::dto::{
    DeleteInvoiceRequest, DeletePayload, InvoiceListPayload, InvoicePayload, UpdateInvoiceRequest,
    UpdateStatusRequest,
};
use contracts::domain::a001_invoice::status::InvoiceStatus;
use contracts::shared::envelope::ApiEnvelope;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;

/// GET /api/get-all
pub async fn fetch_all() -> Result<Vec<Invoice>, String> {
    let response = Request::get(&api_url("/api/get-all"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    let envelope: ApiEnvelope<InvoiceListPayload> = read_envelope(response).await?;
    Ok(envelope.payload.data)
}

/// GET /api/get-invoice?invoiceId=
pub async fn fetch_by_id(id: &str) -> Result<Invoice, String> {
    let url = api_url(&format!(
        "/api/get-invoice?invoiceId={}",
        urlencoding::encode(id)
    ));
    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    let envelope: ApiEnvelope<InvoicePayload> = read_envelope(response).await?;
    Ok(envelope.payload.invoice)
}

/// POST /api/create-invoice
pub async fn create(draft: &InvoiceDraft) -> Result<Invoice, String> {
    let envelope: ApiEnvelope<InvoicePayload> = post_json("/api/create-invoice", draft).await?;
    Ok(envelope.payload.invoice)
}

/// POST /api/update-invoice
pub async fn update(id: &str, draft: InvoiceDraft) -> Result<Invoice, String> {
    let body = UpdateInvoiceRequest {
        invoice_id: id.to_string(),
        draft,
    };
    let envelope: ApiEnvelope<InvoicePayload> = post_json("/api/update-invoice", &body).await?;
    Ok(envelope.payload.invoice)
}

/// POST /api/update-status
pub async fn update_status(id: &str, status: InvoiceStatus) -> Result<Invoice, String> {
    let body = UpdateStatusRequest {
        id: id.to_string(),
        status,
    };
    let envelope: ApiEnvelope<InvoicePayload> = post_json("/api/update-status", &body).await?;
    Ok(envelope.payload.invoice)
}

/// POST /api/delete (soft delete)
pub async fn delete(id: &str) -> Result<(), String> {
    let body = DeleteInvoiceRequest {
        invoice_id: id.to_string(),
        hard: false,
    };
    let envelope: ApiEnvelope<DeletePayload> = post_json("/api/delete", &body).await?;
    if envelope.payload.deleted {
        Ok(())
    } else {
        Err("Invoice was not deleted".to_string())
    }
}

async fn post_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: serde::Serialize,
    T: DeserializeOwned,
{
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_envelope(response).await
}

/// Error responses carry a plain-text body; success responses a JSON envelope
async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(if text.is_empty() {
            format!("HTTP error: {}", status)
        } else {
            format!("HTTP error: {} ({})", status, text)
        });
    }
    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
