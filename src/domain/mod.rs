pub mod transcript;
pub mod types;

pub use transcript::{ExchangeSummary, excerpt, render_transcript, summarize};
pub use types::{Conversation, Turn, TurnRole};
