use clap::Parser;
use std::error::Error;

use streamly_chat_client::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    streamly_chat_client::run(cli).await
}
