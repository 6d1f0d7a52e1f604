//! Transcript export and excerpt helpers
//!
//! Pure functions over a [`Conversation`]: the sidebar excerpt listing and
//! the flat-text transcript offered for download.

use serde::Serialize;

use super::types::{Conversation, TurnRole};

/// Number of leading words kept in an excerpt.
pub const EXCERPT_WORDS: usize = 3;

/// First few whitespace-delimited words of `text`, joined by single spaces.
///
/// Shorter texts are returned whole; empty or all-whitespace text yields an
/// empty string.
pub fn excerpt(text: &str) -> String {
    text.split_whitespace()
        .take(EXCERPT_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One prompt/response pair for the sidebar summary listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeSummary {
    pub prompt: String,
    pub reply: Option<String>,
}

/// Pair each user turn with the assistant turn that follows it, excerpted.
///
/// A trailing user turn without a reply yet is kept with `reply: None`.
pub fn summarize(conversation: &Conversation) -> Vec<ExchangeSummary> {
    let mut summaries = Vec::new();

    for turn in conversation.turns() {
        match turn.role {
            TurnRole::User => summaries.push(ExchangeSummary {
                prompt: excerpt(&turn.text),
                reply: None,
            }),
            TurnRole::Assistant => {
                if let Some(last) = summaries.last_mut() {
                    if last.reply.is_none() {
                        last.reply = Some(excerpt(&turn.text));
                        continue;
                    }
                }
                // Reply without a preceding prompt; list it on its own.
                summaries.push(ExchangeSummary {
                    prompt: String::new(),
                    reply: Some(excerpt(&turn.text)),
                });
            }
        }
    }

    summaries
}

/// Render the whole conversation as flat text, one newline-terminated
/// `"User: ..."` / `"Assistant: ..."` line per turn, in conversation order.
///
/// An empty conversation renders as an empty string. The caller decides
/// whether to offer the result as a download at all (it should not when the
/// conversation is empty).
pub fn render_transcript(conversation: &Conversation) -> String {
    let mut out = String::new();
    for turn in conversation.turns() {
        out.push_str(turn.role.label());
        out.push_str(": ");
        out.push_str(&turn.text);
        out.push('\n');
    }
    out
}
