/// Utilities for date formatting

/// Format ISO date string to DD.MM.YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// Table rendering of an optional issue date: empty when absent or blank
pub fn format_issue_date(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => format_date(v),
        _ => String::new(),
    }
}

/// Date part of an ISO string, as a `<input type="date">` expects it
pub fn to_input_date(value: &str) -> String {
    value.split('T').next().unwrap_or(value).to_string()
}
