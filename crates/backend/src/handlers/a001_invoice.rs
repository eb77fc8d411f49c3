use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use contracts::domain::a001_invoice::dto::{
    DeleteInvoiceRequest, DeletePayload, GetInvoiceQuery, InvoiceListPayload, InvoicePayload,
    UpdateInvoiceRequest, UpdateStatusRequest,
};
use contracts::shared::envelope::ApiEnvelope;

use crate::domain::a001_invoice::{error::InvoiceError, service};
use crate::shared::app_state::AppState;

const MSG_CREATED: &str = "Invoice created successfully";
const MSG_NOT_SAVED: &str = "Not able to save invoice";
const MSG_GENERIC_FAILURE: &str = "Something went wrong";

/// POST /api/create-invoice
pub async fn create_invoice(State(state): State<AppState>, body: Bytes) -> Response {
    match service::create(&state, &body).await {
        Ok(Some(invoice)) => (
            StatusCode::CREATED,
            Json(ApiEnvelope::new(MSG_CREATED, InvoicePayload { invoice })),
        )
            .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, MSG_NOT_SAVED).into_response(),
        Err(e) => {
            tracing::error!("Error saving invoice: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_GENERIC_FAILURE).into_response()
        }
    }
}

/// Any method but POST on /api/create-invoice
pub async fn create_invoice_method_not_allowed(method: Method) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        format!("Method {} Not Allowed", method),
    )
        .into_response()
}

/// GET /api/get-all
pub async fn list_all(State(state): State<AppState>) -> Response {
    match service::list_all(&state).await {
        Ok(data) => Json(ApiEnvelope::new(
            "Invoices fetched successfully",
            InvoiceListPayload { data },
        ))
        .into_response(),
        Err(e) => {
            tracing::error!("Error listing invoices: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_GENERIC_FAILURE).into_response()
        }
    }
}

/// GET /api/get-invoice?invoiceId=
pub async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<GetInvoiceQuery>,
) -> Response {
    match service::get_by_id(&state, &query.invoice_id).await {
        Ok(invoice) => Json(ApiEnvelope::new(
            "Invoice fetched successfully",
            InvoicePayload { invoice },
        ))
        .into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/update-invoice
pub async fn update(
    State(state): State<AppState>,
    body: Result<Json<UpdateInvoiceRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_body(rejection),
    };
    match service::update(&state, req).await {
        Ok(invoice) => Json(ApiEnvelope::new(
            "Invoice updated successfully",
            InvoicePayload { invoice },
        ))
        .into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/update-status
pub async fn update_status(
    State(state): State<AppState>,
    body: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_body(rejection),
    };
    match service::update_status(&state, req).await {
        Ok(invoice) => Json(ApiEnvelope::new(
            "Status updated successfully",
            InvoicePayload { invoice },
        ))
        .into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /api/delete
pub async fn delete(
    State(state): State<AppState>,
    body: Result<Json<DeleteInvoiceRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_body(rejection),
    };
    match service::delete(&state, req).await {
        Ok(()) => Json(ApiEnvelope::new(
            "Invoice deleted successfully",
            DeletePayload { deleted: true },
        ))
        .into_response(),
        Err(e) => error_response(e),
    }
}

/// Malformed or ill-typed JSON (e.g. an unknown status label) is a plain-text 400
fn bad_body(rejection: JsonRejection) -> Response {
    tracing::warn!("Rejected request body: {}", rejection.body_text());
    (StatusCode::BAD_REQUEST, rejection.body_text()).into_response()
}

fn error_response(err: InvoiceError) -> Response {
    match err {
        InvoiceError::InvalidId(id) => {
            (StatusCode::BAD_REQUEST, format!("Invalid invoice id: {}", id)).into_response()
        }
        InvoiceError::NotFound => (StatusCode::NOT_FOUND, "Invoice not found").into_response(),
        InvoiceError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        InvoiceError::Storage(e) => {
            tracing::error!("Invoice storage error: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_GENERIC_FAILURE).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_invoice::custom_id::RandomCustomIds;
    use crate::domain::a001_invoice::store::memory::{InsertMode, MemoryInvoiceStore};
    use crate::routes::configure_routes;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app_with(store: Arc<MemoryInvoiceStore>) -> axum::Router {
        configure_routes(AppState::new(
            store,
            Box::new(RandomCustomIds::seeded(2024)),
            0,
        ))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(resp: Response) -> String {
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn body_json(resp: Response) -> Value {
        serde_json::from_str(&body_text(resp).await).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_five_digit_custom_id() {
        let app = app_with(Arc::new(MemoryInvoiceStore::new()));
        let resp = app
            .oneshot(post_json(
                "/api/create-invoice",
                json!({"customer_name": "Acme", "total_cost": 500, "status": "Pending", "custom_id": 3}),
            ))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = body_json(resp).await;
        assert_eq!(body["message"], "Invoice created successfully");
        let invoice = &body["payload"]["invoice"];
        let custom_id = invoice["custom_id"].as_i64().unwrap();
        assert!((10_000..=99_999).contains(&custom_id));
        assert_eq!(invoice["customer_name"], "Acme");
        assert_eq!(invoice["total_cost"].as_f64(), Some(500.0));
        assert_eq!(invoice["status"], "Pending");
    }

    #[tokio::test]
    async fn test_create_rejects_other_methods_with_allow_header() {
        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let app = app_with(Arc::new(MemoryInvoiceStore::new()));
            let resp = app
                .oneshot(
                    Request::builder()
                        .method(method.clone())
                        .uri("/api/create-invoice")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
            assert_eq!(resp.headers()[header::ALLOW], "POST");
            assert_eq!(
                body_text(resp).await,
                format!("Method {} Not Allowed", method)
            );
        }
    }

    #[tokio::test]
    async fn test_create_hides_storage_errors_behind_500() {
        let app = app_with(Arc::new(MemoryInvoiceStore::with_insert_mode(
            InsertMode::Fail,
        )));
        let resp = app
            .oneshot(post_json("/api/create-invoice", json!({"customer_name": "Acme"})))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let text = body_text(resp).await;
        assert_eq!(text, "Something went wrong");
        assert!(!text.contains("secret-host"));
    }

    #[tokio::test]
    async fn test_create_answers_404_when_nothing_saved() {
        let app = app_with(Arc::new(MemoryInvoiceStore::with_insert_mode(
            InsertMode::SaveNothing,
        )));
        let resp = app
            .oneshot(post_json("/api/create-invoice", json!({"customer_name": "Acme"})))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(resp).await, "Not able to save invoice");
    }

    #[tokio::test]
    async fn test_create_with_malformed_body_is_500() {
        let app = app_with(Arc::new(MemoryInvoiceStore::new()));
        let resp = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/api/create-invoice")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_list_status_and_delete_flow() {
        let store = Arc::new(MemoryInvoiceStore::new());
        let app = app_with(store.clone());

        for name in ["First", "Second"] {
            let resp = app
                .clone()
                .oneshot(post_json("/api/create-invoice", json!({"customer_name": name})))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::CREATED);
        }

        let resp = app
            .clone()
            .oneshot(Request::get("/api/get-all").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        let data = body["payload"]["data"].as_array().unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data[0]["customer_name"], "First");
        let first_id = data[0]["id"].as_str().unwrap().to_string();

        let resp = app
            .clone()
            .oneshot(post_json(
                "/api/update-status",
                json!({"id": first_id, "status": "Paid"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["payload"]["invoice"]["status"], "Paid");

        let resp = app
            .clone()
            .oneshot(post_json("/api/delete", json!({"invoiceId": first_id})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .clone()
            .oneshot(
                Request::get(format!("/api/get-invoice?invoiceId={}", first_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = app
            .oneshot(Request::get("/api/get-all").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = body_json(resp).await;
        let data = body["payload"]["data"].as_array().unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0]["customer_name"], "Second");
    }

    #[tokio::test]
    async fn test_update_status_rejects_bad_input() {
        let app = app_with(Arc::new(MemoryInvoiceStore::new()));

        let resp = app
            .clone()
            .oneshot(post_json(
                "/api/update-status",
                json!({"id": "not-a-uuid", "status": "Paid"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = app
            .oneshot(post_json(
                "/api/update-status",
                json!({"id": uuid::Uuid::new_v4().to_string(), "status": "Lost"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_bodies_on_update_and_delete_are_400() {
        let app = app_with(Arc::new(MemoryInvoiceStore::new()));
        for uri in ["/api/update-invoice", "/api/update-status", "/api/delete"] {
            let resp = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(Method::POST)
                        .uri(uri)
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from("{not json"))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_create_accepts_loose_field_types() {
        let store = Arc::new(MemoryInvoiceStore::new());
        let app = app_with(store.clone());

        let resp = app
            .clone()
            .oneshot(post_json(
                "/api/create-invoice",
                json!({"customer_name": null, "total_cost": 500}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let invoice = body_json(resp).await["payload"]["invoice"].clone();
        assert_eq!(invoice["customer_name"], "");

        let resp = app
            .oneshot(post_json(
                "/api/create-invoice",
                json!({"customer_name": "Acme", "total_cost": "500"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let invoice = body_json(resp).await["payload"]["invoice"].clone();
        assert_eq!(invoice["total_cost"].as_f64(), Some(500.0));
        assert_eq!(store.all().len(), 2);
    }

    #[tokio::test]
    async fn test_update_invoice_keeps_custom_id() {
        let store = Arc::new(MemoryInvoiceStore::new());
        let app = app_with(store.clone());
        let resp = app
            .clone()
            .oneshot(post_json("/api/create-invoice", json!({"customer_name": "Acme"})))
            .await
            .unwrap();
        let created = body_json(resp).await["payload"]["invoice"].clone();

        let resp = app
            .oneshot(post_json(
                "/api/update-invoice",
                json!({
                    "invoiceId": created["id"],
                    "customer_name": "Acme Ltd",
                    "total_cost": 120.5,
                    "custom_id": 1
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let updated = body_json(resp).await["payload"]["invoice"].clone();
        assert_eq!(updated["custom_id"], created["custom_id"]);
        assert_eq!(updated["customer_name"], "Acme Ltd");
        assert_eq!(store.all()[0].customer_name, "Acme Ltd");
    }
}
