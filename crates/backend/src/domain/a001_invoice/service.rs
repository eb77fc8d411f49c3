use super::error::InvoiceError;
use crate::shared::app_state::AppState;
use contracts::domain::a001_invoice::aggregate::{Invoice, InvoiceDraft, InvoiceId};
use contracts::domain::a001_invoice::dto::{
    DeleteInvoiceRequest, UpdateInvoiceRequest, UpdateStatusRequest,
};
use contracts::domain::common::AggregateId;

/// Draw a display number for a new invoice.
///
/// With `custom_id_retries == 0` the draw is returned as is and may repeat an
/// existing number. Otherwise the store is asked and up to that many re-draws happen.
pub async fn generate_custom_id(state: &AppState) -> anyhow::Result<i32> {
    let attempts = state.custom_id_retries + 1;
    for attempt in 1..=attempts {
        let candidate = {
            let mut source = state
                .custom_ids
                .lock()
                .map_err(|_| anyhow::anyhow!("custom id generator lock poisoned"))?;
            source.next_custom_id()
        };
        if state.custom_id_retries == 0 {
            return Ok(candidate);
        }
        if !state.invoices.custom_id_exists(candidate).await? {
            return Ok(candidate);
        }
        tracing::warn!(
            "custom_id {} already taken (attempt {}/{})",
            candidate,
            attempt,
            attempts
        );
    }
    Err(anyhow::anyhow!(
        "no free custom_id after {} attempts",
        attempts
    ))
}

/// Create an invoice from a raw JSON body.
///
/// `Ok(None)` when the store saved nothing. Parsing happens here so a malformed
/// body is an ordinary failure of the operation.
pub async fn create(state: &AppState, body: &[u8]) -> anyhow::Result<Option<Invoice>> {
    let custom_id = generate_custom_id(state).await?;
    let draft: InvoiceDraft = serde_json::from_slice(body)?;

    let mut aggregate = Invoice::from_draft(draft, custom_id);
    aggregate.before_write();

    state.invoices.insert(&aggregate).await
}

pub async fn list_all(state: &AppState) -> anyhow::Result<Vec<Invoice>> {
    state.invoices.list_active().await
}

pub async fn get_by_id(state: &AppState, id: &str) -> Result<Invoice, InvoiceError> {
    let id = parse_id(id)?;
    load_active(state, id).await
}

/// Replace the editable fields of an existing invoice
pub async fn update(state: &AppState, req: UpdateInvoiceRequest) -> Result<Invoice, InvoiceError> {
    let id = parse_id(&req.invoice_id)?;
    validate_draft(&req.draft)?;

    let mut aggregate = load_active(state, id).await?;
    aggregate.apply_draft(req.draft);
    aggregate.before_write();

    if !state.invoices.update(&aggregate).await? {
        return Err(InvoiceError::NotFound);
    }
    Ok(aggregate)
}

pub async fn update_status(
    state: &AppState,
    req: UpdateStatusRequest,
) -> Result<Invoice, InvoiceError> {
    let id = parse_id(&req.id)?;

    let mut aggregate = load_active(state, id).await?;
    aggregate.status = Some(req.status.as_str().to_string());
    aggregate.before_write();

    if !state.invoices.update(&aggregate).await? {
        return Err(InvoiceError::NotFound);
    }
    tracing::info!(
        "invoice {} (#{}) status -> {}",
        aggregate.to_string_id(),
        aggregate.custom_id,
        req.status
    );
    Ok(aggregate)
}

/// Soft delete by default, row removal when `hard` is set
pub async fn delete(state: &AppState, req: DeleteInvoiceRequest) -> Result<(), InvoiceError> {
    let id = parse_id(&req.invoice_id)?;
    let removed = if req.hard {
        state.invoices.hard_delete(id).await?
    } else {
        state.invoices.soft_delete(id).await?
    };
    if !removed {
        return Err(InvoiceError::NotFound);
    }
    tracing::info!(
        "invoice {} deleted ({})",
        req.invoice_id,
        if req.hard { "hard" } else { "soft" }
    );
    Ok(())
}

fn parse_id(raw: &str) -> Result<InvoiceId, InvoiceError> {
    InvoiceId::from_string(raw).map_err(|_| InvoiceError::InvalidId(raw.to_string()))
}

async fn load_active(state: &AppState, id: InvoiceId) -> Result<Invoice, InvoiceError> {
    match state.invoices.get_by_id(id).await? {
        Some(invoice) if !invoice.metadata.is_deleted => Ok(invoice),
        _ => Err(InvoiceError::NotFound),
    }
}

fn validate_draft(draft: &InvoiceDraft) -> Result<(), InvoiceError> {
    if !draft.total_cost.is_finite() || draft.total_cost < 0.0 {
        return Err(InvoiceError::Validation(
            "total_cost must be a non-negative number".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_invoice::custom_id::testing::FixedCustomIds;
    use crate::domain::a001_invoice::custom_id::RandomCustomIds;
    use crate::domain::a001_invoice::store::memory::MemoryInvoiceStore;
    use contracts::domain::a001_invoice::status::InvoiceStatus;
    use std::sync::Arc;

    fn state_with(store: Arc<MemoryInvoiceStore>, ids: &[i32], retries: u32) -> AppState {
        AppState::new(store, Box::new(FixedCustomIds::new(ids)), retries)
    }

    #[tokio::test]
    async fn test_create_uses_generated_custom_id() {
        let store = Arc::new(MemoryInvoiceStore::new());
        let state = state_with(store.clone(), &[12345], 0);

        let saved = create(&state, br#"{"customer_name":"Acme","custom_id":7}"#)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(saved.custom_id, 12345);
        assert_eq!(store.all().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_non_object_body() {
        let state = state_with(Arc::new(MemoryInvoiceStore::new()), &[12345], 0);
        assert!(create(&state, b"[1,2,3]").await.is_err());
        assert!(create(&state, b"not json").await.is_err());
    }

    #[tokio::test]
    async fn test_identically_seeded_generators_collide() {
        let store = Arc::new(MemoryInvoiceStore::new());
        let a = AppState::new(store.clone(), Box::new(RandomCustomIds::seeded(99)), 0);
        let b = AppState::new(store.clone(), Box::new(RandomCustomIds::seeded(99)), 0);

        let first = create(&a, b"{}").await.unwrap().unwrap();
        let second = create(&b, b"{}").await.unwrap().unwrap();

        assert_eq!(first.custom_id, second.custom_id);
        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_retry_skips_taken_custom_id() {
        let store = Arc::new(MemoryInvoiceStore::new());
        let state = state_with(store.clone(), &[20000, 20000, 30000], 2);

        let first = create(&state, b"{}").await.unwrap().unwrap();
        let second = create(&state, b"{}").await.unwrap().unwrap();

        assert_eq!(first.custom_id, 20000);
        assert_eq!(second.custom_id, 30000);
    }

    #[tokio::test]
    async fn test_retry_gives_up_when_every_draw_collides() {
        let store = Arc::new(MemoryInvoiceStore::new());
        let state = state_with(store.clone(), &[40000], 3);

        create(&state, b"{}").await.unwrap();
        let err = create(&state, b"{}").await.unwrap_err();
        assert!(err.to_string().contains("4 attempts"));
        assert_eq!(store.all().len(), 1);
    }

    #[tokio::test]
    async fn test_update_status_and_soft_delete() {
        let store = Arc::new(MemoryInvoiceStore::new());
        let state = state_with(store.clone(), &[12345], 0);
        let saved = create(&state, br#"{"status":"Pending"}"#).await.unwrap().unwrap();
        let id = saved.to_string_id();

        let updated = update_status(
            &state,
            UpdateStatusRequest {
                id: id.clone(),
                status: InvoiceStatus::Paid,
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.status.as_deref(), Some("Paid"));
        assert!(updated.metadata.version > saved.metadata.version);

        delete(
            &state,
            DeleteInvoiceRequest {
                invoice_id: id.clone(),
                hard: false,
            },
        )
        .await
        .unwrap();
        assert!(matches!(
            get_by_id(&state, &id).await,
            Err(InvoiceError::NotFound)
        ));
        assert!(list_all(&state).await.unwrap().is_empty());
        assert_eq!(store.all().len(), 1);
    }

    #[tokio::test]
    async fn test_update_validates_and_keeps_custom_id() {
        let store = Arc::new(MemoryInvoiceStore::new());
        let state = state_with(store, &[12345], 0);
        let saved = create(&state, br#"{"customer_name":"Acme"}"#).await.unwrap().unwrap();

        let bad = UpdateInvoiceRequest {
            invoice_id: saved.to_string_id(),
            draft: InvoiceDraft {
                total_cost: -1.0,
                ..Default::default()
            },
        };
        assert!(matches!(
            update(&state, bad).await,
            Err(InvoiceError::Validation(_))
        ));

        let good = UpdateInvoiceRequest {
            invoice_id: saved.to_string_id(),
            draft: InvoiceDraft {
                customer_name: "Acme Ltd".into(),
                total_cost: 750.0,
                ..Default::default()
            },
        };
        let updated = update(&state, good).await.unwrap();
        assert_eq!(updated.custom_id, 12345);
        assert_eq!(updated.customer_name, "Acme Ltd");
    }

    #[tokio::test]
    async fn test_bad_and_unknown_ids() {
        let state = state_with(Arc::new(MemoryInvoiceStore::new()), &[12345], 0);
        assert!(matches!(
            get_by_id(&state, "nope").await,
            Err(InvoiceError::InvalidId(_))
        ));
        let missing = InvoiceId::new_v4().as_string();
        assert!(matches!(
            delete(
                &state,
                DeleteInvoiceRequest {
                    invoice_id: missing,
                    hard: true
                }
            )
            .await,
            Err(InvoiceError::NotFound)
        ));
    }
}
