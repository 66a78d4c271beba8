const MAX_VISIBLE_CHARS: usize = 100;
const REDACTED: &str = "[REDACTED]";
const SENSITIVE_PREFIXES: [&str; 5] = ["Bearer ", "key=", "password=", "secret=", "token="];

/// Sanitizes prompt text for safe logging.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let sanitized = if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        trimmed.to_string()
    };

    redact_secrets(&sanitized)
}

/// Replaces credential values (bearer tokens, `key=` query parameters and
/// similar) with a marker. Every occurrence is redacted.
pub fn redact_secrets(text: &str) -> String {
    let mut result = text.to_string();
    for pattern in SENSITIVE_PREFIXES {
        let mut search_from = 0;
        while let Some(offset) = result[search_from..].find(pattern) {
            let value_start = search_from + offset + pattern.len();
            let value_end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(value_start..value_end, REDACTED);
            search_from = value_start + REDACTED.len();
        }
    }

    result
}
