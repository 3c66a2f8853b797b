use serde_json::json;

use excelhub::application::ports::{ProviderAdapter, UpstreamPrompt, UserPart};
use excelhub::infrastructure::llm::{GeminiAdapter, GroqAdapter};

fn prompt_with_image() -> UpstreamPrompt {
    UpstreamPrompt {
        system_instruction: "be helpful".to_string(),
        user_parts: vec![
            UserPart::Text("What is in this sheet?".to_string()),
            UserPart::InlineData {
                mime_type: "image/png".to_string(),
                data: "AAAA".to_string(),
            },
        ],
    }
}

#[test]
fn given_gemini_prompt_when_building_request_then_matches_generate_content_shape() {
    let adapter = GeminiAdapter::new(Some("key".into()), "http://g.test/", "gemini-1.5-flash", 1000);

    let request = adapter.build_request(&prompt_with_image(), "secret");

    assert_eq!(
        request.url,
        "http://g.test/v1beta/models/gemini-1.5-flash:generateContent"
    );
    assert_eq!(request.header("x-goog-api-key"), Some("secret"));
    assert_eq!(
        request.body,
        json!({
            "contents": [{
                "role": "user",
                "parts": [
                    {"text": "What is in this sheet?"},
                    {"inline_data": {"mime_type": "image/png", "data": "AAAA"}}
                ]
            }],
            "systemInstruction": {"parts": [{"text": "be helpful"}]},
            "generationConfig": {"maxOutputTokens": 1000}
        })
    );
}

#[test]
fn given_gemini_reply_when_parsing_then_reads_first_part() {
    let adapter = GeminiAdapter::new(None, "http://g.test", "m", 10);
    let body = json!({
        "candidates": [
            {"content": {"parts": [{"text": "first"}, {"text": "second"}]}},
            {"content": {"parts": [{"text": "other"}]}}
        ]
    });

    assert_eq!(adapter.parse_response(&body).unwrap(), "first");
    assert!(adapter.parse_response(&json!({})).is_err());
    assert!(adapter.parse_response(&json!({"candidates": [{}]})).is_err());
}

#[test]
fn given_groq_prompt_when_building_request_then_sends_chat_messages_without_image() {
    let adapter = GroqAdapter::new(Some("key".into()), "http://q.test", "llama-3.3-70b-versatile", 1000);
    let mut prompt = prompt_with_image();
    prompt
        .user_parts
        .push(UserPart::Text("\n\nFile Context:\n[]".to_string()));

    let request = adapter.build_request(&prompt, "secret");

    assert_eq!(request.url, "http://q.test/openai/v1/chat/completions");
    assert_eq!(request.header("authorization"), Some("Bearer secret"));
    assert_eq!(
        request.body,
        json!({
            "model": "llama-3.3-70b-versatile",
            "messages": [
                {"role": "system", "content": "be helpful"},
                {"role": "user", "content": "What is in this sheet?\n\n\nFile Context:\n[]"}
            ],
            "max_tokens": 1000
        })
    );
}

#[test]
fn given_groq_reply_when_parsing_then_reads_first_choice() {
    let adapter = GroqAdapter::new(None, "http://q.test", "m", 10);
    let body = json!({"choices": [{"message": {"role": "assistant", "content": "answer"}}]});

    assert_eq!(adapter.parse_response(&body).unwrap(), "answer");
    assert!(adapter.parse_response(&json!({"choices": []})).is_err());
}

#[test]
fn given_error_body_when_extracting_message_then_reads_nested_field() {
    let adapter = GroqAdapter::new(None, "http://q.test", "m", 10);

    assert_eq!(
        adapter.extract_error_message(&json!({"error": {"message": "bad key"}})),
        Some("bad key".to_string())
    );
    assert_eq!(adapter.extract_error_message(&json!({"error": "flat"})), None);
}
