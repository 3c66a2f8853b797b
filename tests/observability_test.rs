use excelhub::infrastructure::observability::{RequestId, sanitize_prompt};

#[test]
fn given_blank_prompt_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_prompt("   \n"), "[EMPTY]");
}

#[test]
fn given_short_prompt_when_sanitizing_then_returns_trimmed_text() {
    assert_eq!(sanitize_prompt("  How do I use XLOOKUP?  "), "How do I use XLOOKUP?");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_with_total() {
    let prompt = "é".repeat(150);

    let sanitized = sanitize_prompt(&prompt);

    assert_eq!(sanitized, format!("{}... (150 chars total)", "é".repeat(100)));
}

#[test]
fn given_credentials_in_text_when_sanitizing_then_redacts_them() {
    let sanitized = sanitize_prompt(
        "Authorization: Bearer abc.def and ?key=AIzaSyD-123456789012 then token=xyz gsk_ABCDEFGHIJKLMNOP",
    );

    assert!(sanitized.contains("Bearer [REDACTED]"));
    assert!(sanitized.contains("key=[REDACTED]"));
    assert!(sanitized.contains("token=[REDACTED]"));
    assert!(!sanitized.contains("abc.def"));
    assert!(!sanitized.contains("AIza"));
    assert!(!sanitized.contains("gsk_"));
}

#[test]
fn given_bare_google_key_when_sanitizing_then_redacts_it() {
    assert_eq!(
        sanitize_prompt("API key AIzaSyA1234567890abcdef is invalid"),
        "API key [REDACTED] is invalid"
    );
}

#[test]
fn given_request_id_when_reading_then_exposes_inner_value() {
    assert_eq!(RequestId("req-1".to_string()).as_str(), "req-1");
}
