//! Wire adapters - convert between the Gemini vocabulary and ours

use serde_json::{Value, json};

use crate::domain::types::{Turn, TurnRole};

/// Map a raw role token from the Gemini wire vocabulary to the label the
/// interface expects. Gemini tags its own replies `"model"`; every other
/// token passes through unchanged.
pub fn translate_role(raw: &str) -> &str {
    if raw == "model" { "assistant" } else { raw }
}

/// Role token a turn carries on the Gemini wire.
pub fn wire_role(role: TurnRole) -> &'static str {
    match role {
        TurnRole::User => "user",
        TurnRole::Assistant => "model",
    }
}

/// Convert a turn history to Gemini `contents` entries.
pub fn to_gemini_contents(turns: &[Turn]) -> Vec<Value> {
    turns
        .iter()
        .map(|turn| {
            json!({
                "role": wire_role(turn.role),
                "parts": [{"text": turn.text.clone()}]
            })
        })
        .collect()
}
