//! State of the invoice list page, kept free of any DOM/reactive types.

use contracts::domain::a001_invoice::aggregate::Invoice;
use contracts::domain::a001_invoice::status::InvoiceStatus;
use contracts::domain::common::AggregateId;
use std::collections::{HashMap, HashSet};

use crate::shared::date_utils::format_issue_date;

/// Column headers in display order
pub const COLUMNS: [&str; 6] = [
    "Invoice #",
    "Issue Date",
    "Customer Name",
    "Total Payment",
    "Status",
    "Actions",
];

pub const FETCH_FAILED_NOTICE: &str = "Error fetching data";

#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceRow {
    pub id: String,
    pub custom_id: String,
    pub issue_date: String,
    pub customer_name: String,
    pub total_cost: String,
    /// Last status confirmed by the server; empty when unset
    pub status: String,
}

impl From<Invoice> for InvoiceRow {
    fn from(i: Invoice) -> Self {
        Self {
            id: i.id.as_string(),
            custom_id: i.custom_id.to_string(),
            issue_date: format_issue_date(i.issue_date.as_deref()),
            customer_name: i.customer_name,
            total_cost: i.total_cost.to_string(),
            status: i.status.unwrap_or_default(),
        }
    }
}

/// Delete confirmation workflow
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    #[default]
    Idle,
    /// Dialog open for this invoice
    ConfirmPending { id: String },
    /// Confirmed; request in flight, dialog still open
    Deleting { id: String },
}

/// Unconfirmed status change of one row
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusEdit {
    Pending { requested: String },
    Failed { requested: String },
}

impl StatusEdit {
    fn requested(&self) -> &str {
        match self {
            StatusEdit::Pending { requested } | StatusEdit::Failed { requested } => requested,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct InvoiceListState {
    rows: Vec<InvoiceRow>,
    delete: DeleteFlow,
    /// Invoices with a delete request in flight (spinner instead of the icon)
    deleting: HashSet<String>,
    /// Absent entry means the row shows its confirmed status
    status_edits: HashMap<String, StatusEdit>,
}

impl InvoiceListState {
    pub fn rows(&self) -> &[InvoiceRow] {
        &self.rows
    }

    /// Replace rows with a fresh fetch, in server order
    pub fn load_succeeded(&mut self, invoices: Vec<Invoice>) {
        self.rows = invoices.into_iter().map(InvoiceRow::from).collect();
        let ids: HashSet<&str> = self.rows.iter().map(|r| r.id.as_str()).collect();
        self.status_edits.retain(|id, _| ids.contains(id.as_str()));
    }

    /// Fetch failed: no rows, pending edits dropped. Returns the notification text.
    pub fn load_failed(&mut self) -> &'static str {
        self.rows.clear();
        self.status_edits.clear();
        FETCH_FAILED_NOTICE
    }

    // ------------------------------------------------------------------
    // Delete workflow
    // ------------------------------------------------------------------

    pub fn delete_flow(&self) -> &DeleteFlow {
        &self.delete
    }

    pub fn dialog_open(&self) -> bool {
        !matches!(self.delete, DeleteFlow::Idle)
    }

    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.contains(id)
    }

    /// Delete icon clicked. Allowed while another delete is in flight.
    pub fn request_delete(&mut self, id: &str) {
        self.delete = DeleteFlow::ConfirmPending { id: id.to_string() };
    }

    pub fn cancel_delete(&mut self) {
        if let DeleteFlow::ConfirmPending { .. } = self.delete {
            self.delete = DeleteFlow::Idle;
        }
    }

    /// Confirm button; returns the invoice id to send the delete request for
    pub fn confirm_delete(&mut self) -> Option<String> {
        match std::mem::take(&mut self.delete) {
            DeleteFlow::ConfirmPending { id } => {
                self.deleting.insert(id.clone());
                self.delete = DeleteFlow::Deleting { id: id.clone() };
                Some(id)
            }
            other => {
                self.delete = other;
                None
            }
        }
    }

    /// Outcome of a delete request; returns to Idle unless the dialog was re-targeted meanwhile
    pub fn delete_finished(&mut self, id: &str, success: bool) {
        self.deleting.remove(id);
        if success {
            self.rows.retain(|r| r.id != id);
            self.status_edits.remove(id);
        }
        if matches!(&self.delete, DeleteFlow::Deleting { id: current } if current == id) {
            self.delete = DeleteFlow::Idle;
        }
    }

    // ------------------------------------------------------------------
    // Status edits
    // ------------------------------------------------------------------

    /// Value the row's dropdown shows: the user's latest pick, else the confirmed status
    pub fn displayed_status(&self, id: &str) -> String {
        if let Some(edit) = self.status_edits.get(id) {
            return edit.requested().to_string();
        }
        self.rows
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.status.clone())
            .unwrap_or_default()
    }

    pub fn status_failed(&self, id: &str) -> bool {
        matches!(self.status_edits.get(id), Some(StatusEdit::Failed { .. }))
    }

    /// Dropdown changed. Returns the status to send, or None for a label outside the vocabulary.
    pub fn begin_status_change(&mut self, id: &str, label: &str) -> Option<InvoiceStatus> {
        let status = InvoiceStatus::from_label(label)?;
        self.status_edits.insert(
            id.to_string(),
            StatusEdit::Pending {
                requested: label.to_string(),
            },
        );
        Some(status)
    }

    /// Server stored `label`; patch the row. A newer pick still pending stays displayed.
    pub fn status_change_succeeded(&mut self, id: &str, label: &str) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.id == id) {
            row.status = label.to_string();
        }
        if matches!(self.status_edits.get(id), Some(e) if e.requested() == label) {
            self.status_edits.remove(id);
        }
    }

    /// Update of `label` failed; the pick stays visible and the row is flagged
    pub fn status_change_failed(&mut self, id: &str, label: &str) {
        let pending = matches!(
            self.status_edits.get(id),
            Some(StatusEdit::Pending { requested }) if requested == label
        );
        if pending {
            self.status_edits.insert(
                id.to_string(),
                StatusEdit::Failed {
                    requested: label.to_string(),
                },
            );
        }
    }
}
