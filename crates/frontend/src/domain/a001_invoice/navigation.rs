//! Links between the invoice pages

/// Route of the create / view / edit page
pub const DETAILS_PATH: &str = "/create";
pub const LIST_PATH: &str = "/";

/// `/create`, `/create?invoiceId=<id>` or `/create?invoiceId=<id>&view=true`
pub fn details_href(invoice_id: Option<&str>, view_only: bool) -> String {
    match invoice_id {
        None => DETAILS_PATH.to_string(),
        Some(id) => {
            let mut href = format!("{}?invoiceId={}", DETAILS_PATH, urlencoding::encode(id));
            if view_only {
                href.push_str("&view=true");
            }
            href
        }
    }
}

/// Interpretation of the `view` query parameter
pub fn is_view_flag(value: Option<&str>) -> bool {
    matches!(value, Some("true") | Some("1"))
}
