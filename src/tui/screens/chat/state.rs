//! Chat state management

use ratatui::style::Color;

use crate::domain::transcript::{ExchangeSummary, summarize};
use crate::domain::types::{Conversation, Turn};
use crate::tui::theme;

/// A single on-screen chat message
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    /// Banners (errors, command output); never part of the conversation.
    System,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: content.into(),
        }
    }
}

/// Chat screen state
pub struct ChatState {
    /// Page title shown in the status bar
    pub title: String,
    /// Accent color resolved from config
    pub accent: Color,
    /// On-screen message list (conversation turns plus system banners)
    pub messages: Vec<ChatMessage>,
    /// Current input buffer
    pub input: String,
    /// Cursor position in input, counted in chars
    pub cursor_pos: usize,
    /// Scroll offset for messages
    pub scroll_offset: u16,
    /// Current session ID
    pub session_id: Option<String>,
    /// Whether waiting for response
    pub loading: bool,
    /// Loading animation frame
    pub loading_frame: usize,
    /// Status message
    pub status_message: Option<String>,
}

impl ChatState {
    pub fn new(title: impl Into<String>, accent_name: Option<&str>) -> Self {
        Self {
            title: title.into(),
            accent: theme::accent_from_name(accent_name),
            messages: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            scroll_offset: 0,
            session_id: None,
            loading: false,
            loading_frame: 0,
            status_message: None,
        }
    }

    /// Add a message to history
    pub fn add_message(&mut self, message: ChatMessage) {
        self.messages.push(message);
        self.scroll_to_bottom();
    }

    /// The conversation turns currently on screen, banners excluded.
    pub fn conversation(&self) -> Conversation {
        let mut conversation = Conversation::new();
        for msg in &self.messages {
            match msg.role {
                MessageRole::User => conversation.push(Turn::user(msg.content.clone())),
                MessageRole::Assistant => conversation.push(Turn::assistant(msg.content.clone())),
                MessageRole::System => {}
            }
        }
        conversation
    }

    /// Excerpted prompt/reply pairs for the sidebar.
    pub fn excerpt_pairs(&self) -> Vec<ExchangeSummary> {
        summarize(&self.conversation())
    }

    /// Get the current input and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.input)
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.cursor_byte_offset();
        self.input.insert(at, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.cursor_byte_offset();
            self.input.remove(at);
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.input.chars().count() {
            let at = self.cursor_byte_offset();
            self.input.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.input.chars().count() {
            self.cursor_pos += 1;
        }
    }

    /// Move cursor to start
    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    /// Move cursor to end
    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input.chars().count();
    }

    /// Byte offset matching the char-counted cursor; input may hold
    /// multibyte chars, so the cursor cannot index the string directly.
    fn cursor_byte_offset(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map(|(at, _)| at)
            .unwrap_or(self.input.len())
    }

    /// Scroll messages up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll messages down
    pub fn scroll_down(&mut self, max_scroll: u16) {
        if self.scroll_offset < max_scroll {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to bottom of messages
    pub fn scroll_to_bottom(&mut self) {
        // Clamped against content height during render
        self.scroll_offset = u16::MAX;
    }

    /// Remove the most recent user message and return its text. A failed
    /// exchange leaves no turns in the session store, so the screen drops
    /// the pending prompt to match.
    pub fn remove_pending_user_message(&mut self) -> Option<String> {
        let at = self
            .messages
            .iter()
            .rposition(|msg| msg.role == MessageRole::User)?;
        Some(self.messages.remove(at).content)
    }

    /// Reset the screen for a fresh session
    pub fn reset(&mut self) {
        self.messages.clear();
        self.session_id = None;
        self.scroll_offset = 0;
        self.status_message = Some("Session reset".into());
    }

    /// Update loading animation frame
    pub fn tick_loading(&mut self) {
        if self.loading {
            self.loading_frame = (self.loading_frame + 1) % 4;
        }
    }

    /// Check if input is a command
    pub fn is_command(&self) -> bool {
        self.input.starts_with('/') || self.input.starts_with(':')
    }
}
