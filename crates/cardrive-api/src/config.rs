/// Path of the chat search endpoint, relative to the base URL
pub const SEARCH_PATH: &str = "/api/chat/";

/// Strip trailing slashes so paths can be appended safely
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Full URL of the chat search endpoint for a base URL
pub fn search_endpoint(base_url: &str) -> String {
    format!("{}{}", normalize_base_url(base_url), SEARCH_PATH)
}
