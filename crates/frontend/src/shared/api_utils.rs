//! API base URL resolution.
//!
//! The backend listens on port 3000 of the host that served the app, so the
//! base URL is derived from `window.location`.

const API_PORT: u16 = 3000;

/// Base URL for API requests, e.g. `"https://example.com:3000"`.
/// Empty when no window is available.
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
    base_from_parts(&protocol, &hostname)
}

fn base_from_parts(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Full API URL for a path starting with `/api/`.
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    match (base.ends_with('/'), path.starts_with('/')) {
        (true, true) => format!("{}{}", base, &path[1..]),
        (false, false) if !base.is_empty() => format!("{}/{}", base, path),
        _ => format!("{}{}", base, path),
    }
}
