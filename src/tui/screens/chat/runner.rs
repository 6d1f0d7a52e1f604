//! Chat runner - main event loop coordinator

use crossterm::event;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use super::input::{CommandResult, InputAction, handle_input, parse_command};
use super::state::{ChatMessage, ChatState};
use super::ui::ChatUI;
use crate::application::session::{ChatClient, ChatRequest};
use crate::config::AppConfig;
use crate::constants::TRANSCRIPT_FILENAME;
use crate::infrastructure::model::ChatModel;
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};

/// Run the TUI chat interface
pub async fn run_chat<P>(
    client: Arc<ChatClient<P>>,
    config: &AppConfig,
) -> Result<(), Box<dyn Error>>
where
    P: ChatModel + 'static,
{
    let mut terminal = init_terminal()?;
    let mut state = ChatState::new(config.title.clone(), config.theme.as_deref());
    state.add_message(ChatMessage::system(format!(
        "Welcome to {}! Type /help for commands, or start chatting.",
        config.title
    )));

    let result = run_chat_loop(&mut terminal, &mut state, client, &config.model).await;

    restore_terminal()?;
    result
}

/// Internal chat loop
async fn run_chat_loop<P>(
    terminal: &mut Tui,
    state: &mut ChatState,
    client: Arc<ChatClient<P>>,
    model: &str,
) -> Result<(), Box<dyn Error>>
where
    P: ChatModel + 'static,
{
    let (response_tx, mut response_rx) = mpsc::channel::<ResponseEvent>(10);

    loop {
        terminal.draw(|frame| {
            ChatUI::render(frame, state, model);
        })?;

        while let Ok(event) = response_rx.try_recv() {
            match event {
                ResponseEvent::Message(content) => {
                    state.loading = false;
                    state.add_message(ChatMessage::assistant(content));
                }
                ResponseEvent::Error(err) => {
                    // The store keeps nothing from a failed exchange, so the
                    // screen drops the pending prompt too; it goes back into
                    // the input buffer for a retry.
                    state.loading = false;
                    if let Some(text) = state.remove_pending_user_message() {
                        if state.input.is_empty() {
                            state.cursor_pos = text.chars().count();
                            state.input = text;
                        }
                    }
                    state.add_message(ChatMessage::system(format!("Error: {}", err)));
                }
                ResponseEvent::SessionUpdate(id) => {
                    let is_new = state.session_id.as_ref() != Some(&id);
                    state.session_id = Some(id.clone());
                    if is_new {
                        state.status_message = Some(format!("Session: {}", &id[..8.min(id.len())]));
                    }
                }
            }
        }

        let timeout = if state.loading {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if event::poll(timeout)? {
            let event = event::read()?;
            let action = handle_input(state, event);

            match action {
                InputAction::Exit => {
                    return Ok(());
                }

                InputAction::Submit => {
                    let input = state.take_input();
                    if !input.trim().is_empty() {
                        state.add_message(ChatMessage::user(input.trim()));
                        state.loading = true;
                        state.status_message = None;
                        let client_clone = client.clone();
                        let prompt = input.trim().to_string();
                        let session_id = state.session_id.clone();
                        let tx = response_tx.clone();

                        tokio::spawn(async move {
                            send_message(client_clone, prompt, session_id, tx).await;
                        });
                    }
                }

                InputAction::Command(cmd) => {
                    if handle_command(state, &client, &cmd).await {
                        return Ok(());
                    }
                }

                InputAction::ScrollUp => {
                    state.scroll_up();
                }

                InputAction::ScrollDown => {
                    state.scroll_down(1000); // Clamped against content during render
                }

                InputAction::ScrollTop => {
                    state.scroll_offset = 0;
                }

                InputAction::ScrollBottom => {
                    state.scroll_to_bottom();
                }

                InputAction::None => {}
            }
        } else if state.loading {
            state.tick_loading();
        }
    }
}

/// Events from async response handling
enum ResponseEvent {
    Message(String),
    Error(String),
    SessionUpdate(String),
}

/// Send message asynchronously
async fn send_message<P>(
    client: Arc<ChatClient<P>>,
    prompt: String,
    session_id: Option<String>,
    tx: mpsc::Sender<ResponseEvent>,
) where
    P: ChatModel + 'static,
{
    let request = ChatRequest { prompt, session_id };

    match client.chat(request).await {
        Ok(result) => {
            let _ = tx
                .send(ResponseEvent::SessionUpdate(result.session_id))
                .await;
            let _ = tx.send(ResponseEvent::Message(result.content)).await;
        }
        Err(err) => {
            let _ = tx.send(ResponseEvent::Error(err.user_message())).await;
        }
    }
}

/// Handle command execution; returns true when the chat should exit
async fn handle_command<P>(state: &mut ChatState, client: &Arc<ChatClient<P>>, input: &str) -> bool
where
    P: ChatModel + 'static,
{
    match parse_command(input) {
        CommandResult::None => {}

        CommandResult::ShowHelp => {
            state.add_message(ChatMessage::system(
                r#"Available commands:
  /help   - Show this help
  /save   - Save the transcript to chat_history.txt
  /reset  - Reset session and start new
  /exit   - Exit chat"#,
            ));
        }

        CommandResult::Reset => {
            if let Some(id) = state.session_id.clone() {
                client.reset(&id).await;
            }
            state.reset();
            state.add_message(ChatMessage::system("Session reset. Starting fresh."));
        }

        CommandResult::Save => {
            save_transcript(state, client).await;
        }

        CommandResult::Exit => {
            return true;
        }

        CommandResult::Unknown(cmd) => {
            state.add_message(ChatMessage::system(format!(
                "Unknown command: {}. Type /help for available commands.",
                cmd
            )));
        }
    }

    false
}

/// Write the session transcript next to the binary. Refused with a banner
/// while the conversation is still empty.
async fn save_transcript<P>(state: &mut ChatState, client: &Arc<ChatClient<P>>)
where
    P: ChatModel + 'static,
{
    let transcript = match &state.session_id {
        Some(id) => client.transcript(id).await,
        None => None,
    };

    match transcript {
        Some(text) => match tokio::fs::write(TRANSCRIPT_FILENAME, text).await {
            Ok(()) => {
                state.status_message = Some(format!("Saved {}", TRANSCRIPT_FILENAME));
                state.add_message(ChatMessage::system(format!(
                    "Transcript saved to {}.",
                    TRANSCRIPT_FILENAME
                )));
            }
            Err(err) => {
                state.add_message(ChatMessage::system(format!(
                    "Could not save transcript: {}",
                    err
                )));
            }
        },
        None => {
            state.add_message(ChatMessage::system(
                "Nothing to save yet. Send a message first.",
            ));
        }
    }
}
