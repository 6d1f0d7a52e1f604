//! Wire adapter tests

use streamly_chat_client::domain::types::{Turn, TurnRole};
use streamly_chat_client::model::adapter::{to_gemini_contents, translate_role, wire_role};

#[test]
fn test_translate_role_rewrites_model() {
    assert_eq!(translate_role("model"), "assistant");
}

#[test]
fn test_translate_role_passes_everything_else_through() {
    assert_eq!(translate_role("user"), "user");
    assert_eq!(translate_role("assistant"), "assistant");
    assert_eq!(translate_role("system"), "system");
    assert_eq!(translate_role("tool"), "tool");
    assert_eq!(translate_role(""), "");
}

#[test]
fn test_wire_role_round_trip() {
    // Our assistant turns go out as "model" and the wire token translates
    // back to "assistant".
    assert_eq!(wire_role(TurnRole::Assistant), "model");
    assert_eq!(translate_role(wire_role(TurnRole::Assistant)), "assistant");
    assert_eq!(wire_role(TurnRole::User), "user");
    assert_eq!(translate_role(wire_role(TurnRole::User)), "user");
}

#[test]
fn test_to_gemini_contents_shape() {
    let turns = vec![Turn::user("hi"), Turn::assistant("hello")];
    let contents = to_gemini_contents(&turns);

    assert_eq!(contents.len(), 2);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(contents[0]["parts"][0]["text"], "hi");
    assert_eq!(contents[1]["role"], "model");
    assert_eq!(contents[1]["parts"][0]["text"], "hello");
}

#[test]
fn test_to_gemini_contents_empty_history() {
    assert!(to_gemini_contents(&[]).is_empty());
}
