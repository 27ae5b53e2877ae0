//! Canned Stack Exchange API payloads.

use serde_json::{json, Value};

/// A successful `search/advanced` body with extra fields the client ignores.
pub fn search_body(titles: &[&str]) -> Value {
    let items: Vec<Value> = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            json!({
                "tags": ["rust"],
                "owner": {
                    "account_id": i,
                    "reputation": 101,
                    "user_type": "registered",
                    "display_name": format!("user{}", i)
                },
                "is_answered": false,
                "view_count": 3,
                "answer_count": 0,
                "score": 0,
                "creation_date": 1_744_401_672 - i as i64,
                "question_id": 79_000_000 + i,
                "link": format!("https://stackoverflow.com/questions/{}", 79_000_000 + i),
                "title": title
            })
        })
        .collect();

    json!({
        "items": items,
        "has_more": false,
        "quota_max": 300,
        "quota_remaining": 299
    })
}

/// The API's error envelope.
pub fn error_body(id: u16, name: &str, message: &str) -> Value {
    json!({
        "error_id": id,
        "error_name": name,
        "error_message": message
    })
}
