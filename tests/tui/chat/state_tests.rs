//! ChatState tests

use streamly_chat_client::tui::screens::chat::{ChatMessage, ChatState, MessageRole};

fn new_state() -> ChatState {
    ChatState::new("Streamly Assistant", None)
}

#[test]
fn test_chat_state_new() {
    let state = new_state();

    assert_eq!(state.title, "Streamly Assistant");
    assert!(state.messages.is_empty());
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
    assert_eq!(state.scroll_offset, 0);
    assert!(state.session_id.is_none());
    assert!(!state.loading);
}

#[test]
fn test_add_message() {
    let mut state = new_state();

    state.add_message(ChatMessage::user("Hello"));
    state.add_message(ChatMessage::assistant("Hi!"));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].role, MessageRole::User);
    assert_eq!(state.messages[1].role, MessageRole::Assistant);
}

#[test]
fn test_conversation_excludes_system_banners() {
    let mut state = new_state();
    state.add_message(ChatMessage::system("Welcome!"));
    state.add_message(ChatMessage::user("hi"));
    state.add_message(ChatMessage::assistant("hello"));
    state.add_message(ChatMessage::system("Error: provider unavailable"));

    let conversation = state.conversation();
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation.turns()[0].text, "hi");
    assert_eq!(conversation.turns()[1].text, "hello");
}

#[test]
fn test_excerpt_pairs_for_sidebar() {
    let mut state = new_state();
    state.add_message(ChatMessage::system("Welcome!"));
    state.add_message(ChatMessage::user("What is the capital of France?"));
    state.add_message(ChatMessage::assistant("Paris."));

    let pairs = state.excerpt_pairs();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].prompt, "What is the");
    assert_eq!(pairs[0].reply.as_deref(), Some("Paris."));
}

#[test]
fn test_excerpt_pairs_empty_before_first_message() {
    let mut state = new_state();
    state.add_message(ChatMessage::system("Welcome!"));
    assert!(state.excerpt_pairs().is_empty());
}

#[test]
fn test_take_input_clears_buffer() {
    let mut state = new_state();
    state.input = "hello".to_string();
    state.cursor_pos = 5;

    let taken = state.take_input();
    assert_eq!(taken, "hello");
    assert!(state.input.is_empty());
    assert_eq!(state.cursor_pos, 0);
}

#[test]
fn test_cursor_editing() {
    let mut state = new_state();
    for c in "abc".chars() {
        state.insert_char(c);
    }
    assert_eq!(state.input, "abc");
    assert_eq!(state.cursor_pos, 3);

    state.move_cursor_left();
    state.delete_char();
    assert_eq!(state.input, "ac");

    state.move_cursor_home();
    state.delete_char_forward();
    assert_eq!(state.input, "c");

    state.move_cursor_end();
    assert_eq!(state.cursor_pos, 1);
}

#[test]
fn test_multibyte_input_editing() {
    let mut state = new_state();
    state.insert_char('é');
    state.insert_char('a');
    assert_eq!(state.input, "éa");
    assert_eq!(state.cursor_pos, 2);

    for c in "日本".chars() {
        state.insert_char(c);
    }
    assert_eq!(state.input, "éa日本");

    state.move_cursor_left();
    state.move_cursor_left();
    state.delete_char();
    assert_eq!(state.input, "é日本");
    assert_eq!(state.cursor_pos, 1);

    state.insert_char('x');
    assert_eq!(state.input, "éx日本");

    state.move_cursor_home();
    state.delete_char_forward();
    assert_eq!(state.input, "x日本");

    state.move_cursor_end();
    assert_eq!(state.cursor_pos, 3);
}

#[test]
fn test_remove_pending_user_message() {
    let mut state = new_state();
    state.add_message(ChatMessage::user("hi"));
    state.add_message(ChatMessage::assistant("hello"));
    state.add_message(ChatMessage::user("are you there?"));

    let removed = state.remove_pending_user_message();
    assert_eq!(removed.as_deref(), Some("are you there?"));
    assert_eq!(state.conversation().len(), 2);
    assert_eq!(state.excerpt_pairs().len(), 1);

    state.messages.clear();
    assert!(state.remove_pending_user_message().is_none());
}

#[test]
fn test_reset() {
    let mut state = new_state();
    state.add_message(ChatMessage::user("Test"));
    state.session_id = Some("abc123".to_string());
    state.scroll_offset = 10;

    state.reset();

    assert!(state.messages.is_empty());
    assert!(state.session_id.is_none());
    assert_eq!(state.scroll_offset, 0);
    assert!(state.status_message.is_some());
}

#[test]
fn test_loading_tick() {
    let mut state = new_state();
    state.loading = true;
    state.loading_frame = 0;

    state.tick_loading();
    assert_eq!(state.loading_frame, 1);

    state.loading_frame = 3;
    state.tick_loading();
    assert_eq!(state.loading_frame, 0);
}

#[test]
fn test_is_command() {
    let mut state = new_state();
    state.input = "/help".to_string();
    assert!(state.is_command());

    state.input = "hello".to_string();
    assert!(!state.is_command());
}
