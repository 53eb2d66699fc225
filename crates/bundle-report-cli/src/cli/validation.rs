/// Parse a bundle name, rejecting empty or whitespace-only values.
pub fn parse_bundle_name(s: &str) -> Result<String, String> {
    let name = s.trim();
    if name.is_empty() {
        return Err("Bundle name cannot be empty".to_string());
    }
    Ok(name.to_string())
}

/// Parse an upload endpoint URL.
///
/// Only the scheme is checked; anything else is left to the HTTP client.
pub fn parse_api_url(s: &str) -> Result<String, String> {
    if s.starts_with("https://") || s.starts_with("http://") {
        Ok(s.trim_end_matches('/').to_string())
    } else {
        Err(format!("API URL must start with http:// or https://: '{}'", s))
    }
}
