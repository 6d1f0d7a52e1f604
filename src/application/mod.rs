pub mod session;

pub use session::{
    ChatClient, ChatError, ChatRequest, ChatResult, ClientConfig, SessionSnapshot,
};
