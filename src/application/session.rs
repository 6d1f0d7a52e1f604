//! Conversation sessions and the chat exchange flow.
//!
//! Sessions are caller-addressed by id rather than ambient process state:
//! every handler call names the session it operates on, and each session
//! owns an isolated [`Conversation`] that exists only for the process
//! lifetime.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::transcript::{ExchangeSummary, render_transcript, summarize};
use crate::domain::types::{Conversation, Turn};
use crate::infrastructure::model::{ChatModel, ModelError, ModelRequest};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub model: String,
    pub system_prompt: Option<String>,
}

impl ClientConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            system_prompt: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }
}

#[derive(Debug, Default)]
pub struct ChatRequest {
    pub prompt: String,
    pub session_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ChatResult {
    pub content: String,
    pub session_id: String,
}

/// Read-only view of one session's state.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    pub conversation: Conversation,
}

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("prompt cannot be empty")]
    EmptyPrompt,
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl ChatError {
    pub fn user_message(&self) -> String {
        match self {
            ChatError::EmptyPrompt => "Prompt cannot be empty.".to_string(),
            ChatError::Model(err) => err.user_message(),
        }
    }
}

struct SessionEntry {
    started_at: DateTime<Utc>,
    conversation: Conversation,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            started_at: Utc::now(),
            conversation: Conversation::new(),
        }
    }
}

pub struct ChatClient<P: ChatModel> {
    provider: P,
    config: ClientConfig,
    sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl<P: ChatModel> ChatClient<P> {
    pub fn new(provider: P, config: ClientConfig) -> Self {
        Self {
            provider,
            config,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn provider_id(&self) -> &str {
        self.provider.id()
    }

    /// Handle one user message: forward the prior history plus the new text
    /// to the provider, then record the exchange.
    ///
    /// Blank input is rejected before any state changes. On provider
    /// failure nothing is appended either - the user turn is only persisted
    /// together with the assistant reply, so a failed call leaves the
    /// conversation exactly as it was and never creates a session entry.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResult, ChatError> {
        let prompt = request.prompt.trim().to_string();
        if prompt.is_empty() {
            return Err(ChatError::EmptyPrompt);
        }

        let session_id = request.session_id.unwrap_or_else(new_session_id);

        // Read-only lookup: entries are created by persist_exchange, so a
        // failed call never leaves an unaddressable entry in the map.
        let history = {
            let sessions = self.sessions.lock().await;
            sessions
                .get(&session_id)
                .map(|entry| entry.conversation.clone())
                .unwrap_or_default()
        };
        debug!(
            session_id = session_id.as_str(),
            history_count = history.len(),
            "Preparing chat request with prior history"
        );

        let mut turns = Vec::with_capacity(history.len() + 1);
        turns.extend(history.turns().iter().cloned());
        turns.push(Turn::user(prompt.clone()));

        let response = self
            .provider
            .chat(ModelRequest {
                model: self.config.model.clone(),
                system_prompt: self.config.system_prompt.clone(),
                turns,
            })
            .await?;

        info!(
            session_id = session_id.as_str(),
            "Received response from model provider"
        );
        let content = response.reply.text.clone();

        self.persist_exchange(&session_id, prompt, response.reply)
            .await;

        Ok(ChatResult {
            content,
            session_id,
        })
    }

    /// Snapshot of a session, or `None` when the id was never seen.
    pub async fn snapshot(&self, session_id: &str) -> Option<SessionSnapshot> {
        let sessions = self.sessions.lock().await;
        sessions.get(session_id).map(|entry| SessionSnapshot {
            session_id: session_id.to_string(),
            started_at: entry.started_at,
            conversation: entry.conversation.clone(),
        })
    }

    /// Excerpted prompt/reply pairs for the sidebar listing.
    pub async fn excerpts(&self, session_id: &str) -> Vec<ExchangeSummary> {
        let sessions = self.sessions.lock().await;
        sessions
            .get(session_id)
            .map(|entry| summarize(&entry.conversation))
            .unwrap_or_default()
    }

    /// Flat-text transcript, or `None` when there is nothing to export.
    pub async fn transcript(&self, session_id: &str) -> Option<String> {
        let sessions = self.sessions.lock().await;
        sessions
            .get(session_id)
            .filter(|entry| !entry.conversation.is_empty())
            .map(|entry| render_transcript(&entry.conversation))
    }

    /// Drop a session's conversation entirely.
    pub async fn reset(&self, session_id: &str) {
        let mut sessions = self.sessions.lock().await;
        if sessions.remove(session_id).is_some() {
            info!(session_id, "Session reset");
        }
    }

    async fn persist_exchange(&self, session_id: &str, user_prompt: String, assistant: Turn) {
        let mut sessions = self.sessions.lock().await;
        let entry = sessions
            .entry(session_id.to_string())
            .or_insert_with(SessionEntry::new);
        entry.conversation.push(Turn::user(user_prompt));
        entry.conversation.push(assistant);
        debug!(
            session_id,
            total_turns = entry.conversation.len(),
            "Persisted chat exchange to session history"
        );
    }
}

fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}
