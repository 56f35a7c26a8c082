use serde_json::json;

/// Wire body for a Gemini generateContent reply with a single text part.
pub fn gemini_reply_body(text: &str) -> String {
    return gemini_multipart_body(&[text]);
}

/// Wire body with several parts in one candidate, the shape long replies
/// arrive in.
pub fn gemini_multipart_body(parts: &[&str]) -> String {
    let parts = parts
        .iter()
        .map(|text| return json!({ "text": text }))
        .collect::<Vec<_>>();

    return json!({
        "candidates": [{
            "content": {
                "parts": parts,
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    })
    .to_string();
}

/// Wire body for a transport-successful reply carrying no usable text.
pub fn gemini_empty_body() -> String {
    return json!({ "candidates": [] }).to_string();
}
