use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Lower bound of the human-facing invoice number
pub const CUSTOM_ID_MIN: i32 = 10_000;
/// Upper bound (inclusive) of the human-facing invoice number
pub const CUSTOM_ID_MAX: i32 = 99_999;

/// Keys owned by the record itself; never kept among the free-form fields
const RESERVED_KEYS: [&str; 3] = ["id", "custom_id", "metadata"];

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvoiceId(pub Uuid);

impl InvoiceId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for InvoiceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(InvoiceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Invoice record
///
/// Fields beyond the known ones are whatever the creation payload carried; they
/// are kept verbatim in `extra` and flattened back on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,

    /// Human-facing invoice number in `[CUSTOM_ID_MIN, CUSTOM_ID_MAX]`.
    /// Not guaranteed unique.
    pub custom_id: i32,

    #[serde(default)]
    pub issue_date: Option<String>,

    #[serde(default)]
    pub customer_name: String,

    #[serde(default)]
    pub total_cost: f64,

    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub metadata: EntityMetadata,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Invoice {
    /// Build a new record from a creation payload and a generated invoice number
    pub fn from_draft(draft: InvoiceDraft, custom_id: i32) -> Self {
        Self {
            id: InvoiceId::new_v4(),
            custom_id,
            issue_date: draft.issue_date,
            customer_name: draft.customer_name,
            total_cost: draft.total_cost,
            status: draft.status,
            metadata: EntityMetadata::new(),
            extra: strip_reserved(draft.extra),
        }
    }

    /// Replace the editable fields; id, custom_id and created_at stay
    pub fn apply_draft(&mut self, draft: InvoiceDraft) {
        self.issue_date = draft.issue_date;
        self.customer_name = draft.customer_name;
        self.total_cost = draft.total_cost;
        self.status = draft.status;
        self.extra = strip_reserved(draft.extra);
    }

    /// Editable view of the record (details form)
    pub fn to_draft(&self) -> InvoiceDraft {
        InvoiceDraft {
            issue_date: self.issue_date.clone(),
            customer_name: self.customer_name.clone(),
            total_cost: self.total_cost,
            status: self.status.clone(),
            extra: self.extra.clone(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Hook before every write
    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

fn strip_reserved(mut extra: Map<String, Value>) -> Map<String, Value> {
    for key in RESERVED_KEYS {
        extra.remove(key);
    }
    extra
}

impl AggregateRoot for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "invoice"
    }

    fn element_name() -> &'static str {
        "Invoice"
    }

    fn list_name() -> &'static str {
        "Invoices"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Creation / edit payload
///
/// Unknown keys land in `extra` so the whole submitted document is stored.
/// The known fields are read leniently: `null` means "not given", numbers are
/// accepted where text is expected and a numeric string is accepted for `total_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InvoiceDraft {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_text_option"
    )]
    pub issue_date: Option<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub customer_name: String,

    #[serde(default, deserialize_with = "deserialize_cost")]
    pub total_cost: f64,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_text_option"
    )]
    pub status: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn deserialize_text_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(s)) => Some(s),
        Some(TextOrNumber::Number(n)) => Some(n.to_string()),
        None => None,
    })
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserialize_text_option(deserializer).map(Option::unwrap_or_default)
}

/// Number, numeric string (blank reads as 0) or null
fn deserialize_cost<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrFloat {
        String(String),
        Float(f64),
    }

    match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(StringOrFloat::String(s)) if s.trim().is_empty() => Ok(0.0),
        Some(StringOrFloat::String(s)) => s.trim().parse::<f64>().map_err(de::Error::custom),
        Some(StringOrFloat::Float(f)) => Ok(f),
        None => Ok(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_custom_id_is_overwritten() {
        let draft: InvoiceDraft = serde_json::from_value(json!({
            "customer_name": "Acme",
            "total_cost": 500,
            "custom_id": 1,
            "notes": "net 30"
        }))
        .unwrap();

        let invoice = Invoice::from_draft(draft, 12345);
        let value = serde_json::to_value(&invoice).unwrap();

        assert_eq!(value["custom_id"], json!(12345));
        assert_eq!(value["customer_name"], json!("Acme"));
        assert_eq!(value["total_cost"].as_f64(), Some(500.0));
        assert_eq!(value["notes"], json!("net 30"));
        assert!(!invoice.extra.contains_key("custom_id"));
    }

    #[test]
    fn test_draft_reads_loose_field_types() {
        let draft: InvoiceDraft = serde_json::from_value(json!({
            "customer_name": null,
            "total_cost": "500",
            "issue_date": null,
            "status": null
        }))
        .unwrap();
        assert_eq!(draft.customer_name, "");
        assert_eq!(draft.total_cost, 500.0);
        assert_eq!(draft.issue_date, None);
        assert_eq!(draft.status, None);

        let draft: InvoiceDraft = serde_json::from_value(json!({
            "customer_name": 42,
            "total_cost": " 12.5 ",
            "notes": null
        }))
        .unwrap();
        assert_eq!(draft.customer_name, "42");
        assert_eq!(draft.total_cost, 12.5);
        assert_eq!(draft.extra["notes"], Value::Null);

        let blank: InvoiceDraft = serde_json::from_value(json!({"total_cost": ""})).unwrap();
        assert_eq!(blank.total_cost, 0.0);

        assert!(serde_json::from_value::<InvoiceDraft>(json!({"total_cost": "lots"})).is_err());
    }

    #[test]
    fn test_invoice_roundtrips_extra_fields() {
        let draft: InvoiceDraft = serde_json::from_value(json!({
            "customer_name": "Globex",
            "items": [{"name": "bolt", "qty": 3}]
        }))
        .unwrap();
        let invoice = Invoice::from_draft(draft, 54321);

        let text = serde_json::to_string(&invoice).unwrap();
        let back: Invoice = serde_json::from_str(&text).unwrap();

        assert_eq!(back, invoice);
        assert_eq!(back.extra["items"][0]["qty"], json!(3));
        assert_eq!(back.issue_date, None);
        assert_eq!(back.status, None);
    }

    #[test]
    fn test_apply_draft_keeps_identity() {
        let mut invoice = Invoice::from_draft(
            InvoiceDraft {
                customer_name: "Old".into(),
                ..Default::default()
            },
            11111,
        );
        let id = invoice.id;
        let created = invoice.metadata.created_at;

        invoice.apply_draft(InvoiceDraft {
            customer_name: "New".into(),
            total_cost: 12.5,
            status: Some("Paid".into()),
            ..Default::default()
        });

        assert_eq!(invoice.id, id);
        assert_eq!(invoice.custom_id, 11111);
        assert_eq!(invoice.metadata.created_at, created);
        assert_eq!(invoice.customer_name, "New");
        assert_eq!(invoice.to_draft().total_cost, 12.5);
    }

    #[test]
    fn test_table_name() {
        assert_eq!(Invoice::full_name(), "a001_invoice");
    }
}
