use contracts::domain::a001_invoice::aggregate::{Invoice, InvoiceDraft};
use contracts::domain::common::AggregateId;
use serde_json::{Map, Value};

use crate::shared::date_utils::to_input_date;

/// Field values as the inputs hold them
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvoiceForm {
    /// None while creating
    pub id: Option<String>,
    pub custom_id: Option<i32>,
    /// `YYYY-MM-DD` or empty
    pub issue_date: String,
    pub customer_name: String,
    pub total_cost: String,
    /// Empty when no status is chosen
    pub status: String,
    /// Fields the form does not edit; sent back unchanged
    pub extra: Map<String, Value>,
}

impl InvoiceForm {
    pub fn from_invoice(invoice: &Invoice) -> Self {
        let draft = invoice.to_draft();
        Self {
            id: Some(invoice.id.as_string()),
            custom_id: Some(invoice.custom_id),
            issue_date: draft
                .issue_date
                .as_deref()
                .map(to_input_date)
                .unwrap_or_default(),
            customer_name: draft.customer_name,
            total_cost: draft.total_cost.to_string(),
            status: draft.status.unwrap_or_default(),
            extra: draft.extra,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Result<(), String> {
        self.to_draft().map(|_| ())
    }

    pub fn to_draft(&self) -> Result<InvoiceDraft, String> {
        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            return Err("Customer name is required".to_string());
        }

        let total_cost = self
            .total_cost
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .ok_or_else(|| "Total cost must be a non-negative number".to_string())?;

        Ok(InvoiceDraft {
            issue_date: non_empty(&self.issue_date),
            customer_name: customer_name.to_string(),
            total_cost,
            status: non_empty(&self.status),
            extra: self.extra.clone(),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
