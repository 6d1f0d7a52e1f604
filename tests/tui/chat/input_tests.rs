//! Chat input and command parsing tests

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use streamly_chat_client::tui::screens::chat::input::{
    CommandResult, InputAction, handle_input, parse_command,
};
use streamly_chat_client::tui::screens::chat::ChatState;

fn new_state() -> ChatState {
    ChatState::new("Streamly Assistant", None)
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_typing_fills_input() {
    let mut state = new_state();
    for c in "hi".chars() {
        assert_eq!(handle_input(&mut state, key(KeyCode::Char(c))), InputAction::None);
    }
    assert_eq!(state.input, "hi");
}

#[test]
fn test_enter_on_empty_input_is_ignored() {
    let mut state = new_state();
    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::None);
}

#[test]
fn test_enter_on_whitespace_input_is_ignored() {
    let mut state = new_state();
    state.input = "   ".to_string();
    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::None);
}

#[test]
fn test_enter_submits_text() {
    let mut state = new_state();
    state.input = "hello".to_string();
    assert_eq!(handle_input(&mut state, key(KeyCode::Enter)), InputAction::Submit);
}

#[test]
fn test_enter_on_command_returns_command() {
    let mut state = new_state();
    state.input = "/save".to_string();
    state.cursor_pos = state.input.len();
    assert_eq!(
        handle_input(&mut state, key(KeyCode::Enter)),
        InputAction::Command("/save".to_string())
    );
    assert!(state.input.is_empty());
}

#[test]
fn test_q_exits_when_input_empty() {
    let mut state = new_state();
    assert_eq!(handle_input(&mut state, key(KeyCode::Char('q'))), InputAction::Exit);
}

#[test]
fn test_q_types_when_input_not_empty() {
    let mut state = new_state();
    state.input = "que".to_string();
    state.cursor_pos = 3;
    assert_eq!(handle_input(&mut state, key(KeyCode::Char('q'))), InputAction::None);
    assert_eq!(state.input, "queq");
}

#[test]
fn test_input_is_swallowed_while_loading() {
    let mut state = new_state();
    state.loading = true;
    assert_eq!(handle_input(&mut state, key(KeyCode::Char('x'))), InputAction::None);
    assert!(state.input.is_empty());
}

#[test]
fn test_escape_clears_input() {
    let mut state = new_state();
    state.input = "oops".to_string();
    state.cursor_pos = 4;
    handle_input(&mut state, key(KeyCode::Esc));
    assert!(state.input.is_empty());
}

#[test]
fn test_scroll_keys() {
    let mut state = new_state();
    assert_eq!(handle_input(&mut state, key(KeyCode::PageUp)), InputAction::ScrollUp);
    assert_eq!(
        handle_input(&mut state, key(KeyCode::PageDown)),
        InputAction::ScrollDown
    );
}

#[test]
fn test_parse_known_commands() {
    assert_eq!(parse_command("/help"), CommandResult::ShowHelp);
    assert_eq!(parse_command("/?"), CommandResult::ShowHelp);
    assert_eq!(parse_command("/reset"), CommandResult::Reset);
    assert_eq!(parse_command("/new"), CommandResult::Reset);
    assert_eq!(parse_command("/save"), CommandResult::Save);
    assert_eq!(parse_command("/export"), CommandResult::Save);
    assert_eq!(parse_command("/exit"), CommandResult::Exit);
    assert_eq!(parse_command(":quit"), CommandResult::Exit);
}

#[test]
fn test_parse_unknown_command() {
    assert_eq!(
        parse_command("/frobnicate"),
        CommandResult::Unknown("frobnicate".to_string())
    );
}

#[test]
fn test_parse_command_is_case_insensitive() {
    assert_eq!(parse_command("/SAVE"), CommandResult::Save);
}

#[test]
fn test_parse_bare_slash() {
    assert_eq!(parse_command("/"), CommandResult::None);
}
