use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "streamly",
    version,
    about = "Gemini chat client with an interactive chat screen and REST surface"
)]
pub struct Cli {
    /// Path to the configuration file (defaults to config/client.toml)
    #[arg(long)]
    pub config: Option<String>,
    /// Session id to continue (one-shot mode); a new one is minted otherwise
    #[arg(long)]
    pub session: Option<String>,
    /// Read the prompt from a file instead of the arguments
    #[arg(long)]
    pub prompt_file: Option<String>,
    #[arg(long, value_enum, default_value_t = RunMode::Chat)]
    pub mode: RunMode,
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub rest_addr: SocketAddr,
    #[arg()]
    pub prompt: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RunMode {
    /// One-shot prompt, JSON result on stdout
    Cli,
    /// Interactive chat screen
    Chat,
    /// REST server
    Rest,
}
