pub mod application;
pub mod cli;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod tui;

pub use application::session::{ChatClient, ChatError, ChatRequest, ChatResult, ClientConfig};
pub use cli::{Cli, RunMode};
pub use config::{AppConfig, ConfigError};
pub use domain::{Conversation, Turn, TurnRole};
pub use infrastructure::{model, server};

use serde_json::json;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt};

use infrastructure::model::GeminiClient;

pub async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    // The chat screen owns the terminal; keep the subscriber quiet there so
    // log lines don't tear the alternate screen.
    let quiet_mode = matches!(cli.mode, RunMode::Chat);
    init_tracing(quiet_mode);
    info!("Starting streamly");
    debug!(mode = ?cli.mode, config = ?cli.config, session = ?cli.session, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    let file_config = AppConfig::load(config_path)?;
    if let Some(path) = config_path {
        info!(path = %path.display(), "Loaded configuration from file");
    } else {
        info!("Loaded configuration from default path or defaults");
    }

    // The credential is read once here; without it there is no point going on.
    let provider = GeminiClient::from_config(&file_config).map_err(|_| {
        ConfigError::MissingApiKey {
            env_var: file_config.api_key_env.clone(),
        }
    })?;

    let mut client_config = ClientConfig::new(file_config.model.clone());
    if let Some(system_prompt) = file_config.system_prompt.clone() {
        client_config = client_config.with_system_prompt(system_prompt);
    }
    let client = Arc::new(ChatClient::new(provider, client_config));

    info!(mode = ?cli.mode, "Running client in selected mode");
    match cli.mode {
        RunMode::Cli => {
            let prompt = load_prompt(&cli)?;
            info!("Dispatching single prompt via CLI mode");
            let result = client
                .chat(ChatRequest {
                    prompt,
                    session_id: cli.session.clone(),
                })
                .await?;

            let output = json!({
                "session_id": result.session_id,
                "content": result.content,
            });

            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        RunMode::Chat => {
            tui::run_chat(client, &file_config).await?;
        }
        RunMode::Rest => {
            info!(addr = %cli.rest_addr, "Starting REST server");
            server::serve(client, cli.rest_addr, &file_config.title).await?;
        }
    }
    info!("Client execution finished");
    Ok(())
}

fn init_tracing(quiet: bool) {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = if quiet {
            EnvFilter::new("error")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        };
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}

fn load_prompt(cli: &Cli) -> Result<String, Box<dyn Error>> {
    if let Some(path) = &cli.prompt_file {
        info!(path = %path, "Loading prompt from file");
        let content = fs::read_to_string(path)?;
        return Ok(content.trim().to_string());
    }

    if !cli.prompt.is_empty() {
        info!("Using prompt provided through CLI arguments");
        return Ok(cli.prompt.join(" ").trim().to_string());
    }

    Err("prompt required via arguments or --prompt-file".into())
}
