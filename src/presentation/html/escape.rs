/// Escape text for HTML element content and quoted attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Percent-encode a single query-string value.
pub fn encode_query_value(input: &str) -> String {
    serde_urlencoded::to_string(&[("v", input)])
        .map(|encoded| encoded.trim_start_matches("v=").to_string())
        .unwrap_or_default()
}
