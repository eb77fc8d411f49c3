use serde::{Deserialize, Serialize};

/// Invoice status vocabulary offered by the status dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Draft,
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    /// Label stored in the invoice record and shown in the UI
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Cancelled => "Cancelled",
        }
    }

    /// All statuses in dropdown order
    pub fn all() -> Vec<InvoiceStatus> {
        vec![
            InvoiceStatus::Draft,
            InvoiceStatus::Pending,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
            InvoiceStatus::Cancelled,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.as_str() == label)
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_parse_back() {
        for status in InvoiceStatus::all() {
            assert_eq!(InvoiceStatus::from_label(status.as_str()), Some(status));
        }
        assert_eq!(InvoiceStatus::from_label("pending"), None);
        assert_eq!(InvoiceStatus::from_label(""), None);
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&InvoiceStatus::Paid).unwrap();
        assert_eq!(json, "\"Paid\"");
        let parsed: InvoiceStatus = serde_json::from_str("\"Overdue\"").unwrap();
        assert_eq!(parsed, InvoiceStatus::Overdue);
    }
}
