//! TUI chat interface module
//!
//! Ratatui-based interactive chat screen:
//! - state.rs: chat state management
//! - ui.rs: rendering (sidebar, messages, input, status)
//! - input.rs: keyboard and command handling
//! - runner.rs: coordinates the components

pub mod input;
mod runner;
pub mod state;
mod ui;

// Re-exports
pub use input::{CommandResult, InputAction, handle_input, parse_command};
pub use runner::run_chat;
pub use state::{ChatMessage, ChatState, MessageRole};
