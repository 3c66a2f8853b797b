use std::sync::LazyLock;

use regex::Regex;

const MAX_VISIBLE_CHARS: usize = 100;

static SECRET_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"Bearer\s+[^\s&'\x22]+", "Bearer [REDACTED]"),
        (r"(?i)\b(api_key|key|password|secret|token)=[^\s&'\x22]+", "$1=[REDACTED]"),
        (r"\bAIza[0-9A-Za-z_\-]{10,}", "[REDACTED]"),
        (r"\bgsk_[0-9A-Za-z]{10,}", "[REDACTED]"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("secret pattern is valid"),
            replacement,
        )
    })
    .collect()
});

/// Prompt or upstream error text reduced to something safe to log:
/// trimmed, cut to 100 characters and stripped of credentials.
pub fn sanitize_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let redacted = redact_secrets(trimmed);
    let total_chars = redacted.chars().count();

    if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = redacted.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        redacted
    }
}

fn redact_secrets(text: &str) -> String {
    SECRET_PATTERNS
        .iter()
        .fold(text.to_string(), |acc, (pattern, replacement)| {
            pattern.replace_all(&acc, *replacement).into_owned()
        })
}
