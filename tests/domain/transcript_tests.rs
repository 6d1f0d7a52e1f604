//! Excerpt and transcript export tests

use streamly_chat_client::domain::transcript::{excerpt, render_transcript, summarize};
use streamly_chat_client::domain::types::{Conversation, Turn};

#[test]
fn test_excerpt_takes_first_three_words() {
    assert_eq!(excerpt("What is the capital of France?"), "What is the");
}

#[test]
fn test_excerpt_shorter_text_returned_whole() {
    assert_eq!(excerpt("Paris."), "Paris.");
    assert_eq!(excerpt("two words"), "two words");
}

#[test]
fn test_excerpt_empty_text() {
    assert_eq!(excerpt(""), "");
    assert_eq!(excerpt("   \t\n  "), "");
}

#[test]
fn test_excerpt_collapses_whitespace_runs() {
    assert_eq!(excerpt("  a \t b\n\nc d"), "a b c");
}

#[test]
fn test_transcript_exact_output() {
    let mut conversation = Conversation::new();
    conversation.push(Turn::user("hi"));
    conversation.push(Turn::assistant("hello"));

    assert_eq!(render_transcript(&conversation), "User: hi\nAssistant: hello\n");
}

#[test]
fn test_transcript_empty_conversation() {
    assert_eq!(render_transcript(&Conversation::new()), "");
}

#[test]
fn test_transcript_is_idempotent() {
    let mut conversation = Conversation::new();
    conversation.push(Turn::user("first"));
    conversation.push(Turn::assistant("second"));

    let once = render_transcript(&conversation);
    let twice = render_transcript(&conversation);
    assert_eq!(once, twice);
}

#[test]
fn test_transcript_preserves_order_across_exchanges() {
    let mut conversation = Conversation::new();
    conversation.push(Turn::user("one"));
    conversation.push(Turn::assistant("two"));
    conversation.push(Turn::user("three"));
    conversation.push(Turn::assistant("four"));

    assert_eq!(
        render_transcript(&conversation),
        "User: one\nAssistant: two\nUser: three\nAssistant: four\n"
    );
}

#[test]
fn test_summarize_pairs_prompt_with_reply() {
    let mut conversation = Conversation::new();
    conversation.push(Turn::user("What is the capital of France?"));
    conversation.push(Turn::assistant("Paris."));

    let pairs = summarize(&conversation);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].prompt, "What is the");
    assert_eq!(pairs[0].reply.as_deref(), Some("Paris."));
}

#[test]
fn test_summarize_pending_reply() {
    let mut conversation = Conversation::new();
    conversation.push(Turn::user("still waiting for this one"));

    let pairs = summarize(&conversation);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].prompt, "still waiting for");
    assert!(pairs[0].reply.is_none());
}

#[test]
fn test_summarize_empty_conversation() {
    assert!(summarize(&Conversation::new()).is_empty());
}

#[test]
fn test_summarize_two_exchanges() {
    let mut conversation = Conversation::new();
    conversation.push(Turn::user("first question about things"));
    conversation.push(Turn::assistant("first answer"));
    conversation.push(Turn::user("second question"));
    conversation.push(Turn::assistant("a much longer second answer"));

    let pairs = summarize(&conversation);
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].prompt, "first question about");
    assert_eq!(pairs[0].reply.as_deref(), Some("first answer"));
    assert_eq!(pairs[1].prompt, "second question");
    assert_eq!(pairs[1].reply.as_deref(), Some("a much longer"));
}
