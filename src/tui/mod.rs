//! Terminal user interface

pub mod screens;
pub mod terminal;
pub mod theme;

pub use screens::chat::run_chat;
