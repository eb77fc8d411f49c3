//! API utilities for frontend-backend communication

/// Port the backend listens on
pub const API_PORT: u16 = 3000;

/// Base URL for API requests, derived from the current window location.
///
/// Empty string outside a browser window, which leaves request paths relative.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    build_api_base(&protocol, &hostname)
}

fn build_api_base(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Full API URL for a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_api_base() {
        assert_eq!(build_api_base("http:", "localhost"), "http://localhost:3000");
        assert_eq!(
            build_api_base("https:", "invoices.example.com"),
            "https://invoices.example.com:3000"
        );
    }
}
