//! # sahayak-cli
//!
//! Command-line entry point. With a query argument it answers once and
//! exits; without one it runs an interactive loop on stdin.

use anyhow::Result;
use clap::Parser;
use sahayak::constants::{
    DEFAULT_GEMINI_API_URL, DEFAULT_PROMPTS_DIR, DEFAULT_UPSTREAM_TIMEOUT_SECS,
};
use sahayak::providers::ai::gemini::GeminiProvider;
use sahayak::{AssistClient, AssistClientBuilder, PromptStore};
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Question to answer once; omit to start an interactive session
    query: Option<String>,

    /// Directory containing the prompt template files
    #[arg(long, env = "PROMPTS_DIR", default_value = DEFAULT_PROMPTS_DIR)]
    prompts_dir: String,

    /// Upstream call timeout in seconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = DEFAULT_UPSTREAM_TIMEOUT_SECS)]
    timeout: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
    let api_url = std::env::var("GEMINI_API_URL")
        .unwrap_or_else(|_| DEFAULT_GEMINI_API_URL.to_string());

    // Both checks are fatal before any network call: an empty key and a
    // missing template file abort here with a clear message.
    let provider = GeminiProvider::new(api_url, api_key, Duration::from_secs(cli.timeout))?;
    let store = PromptStore::load(&cli.prompts_dir)?;

    let client = AssistClientBuilder::new()
        .ai_provider(Box::new(provider))
        .prompt_store(store)
        .build()?;

    match cli.query {
        Some(query) => {
            let answer = client.answer(&query).await?;
            println!("[{}] {}", answer.domain, answer.text);
        }
        None => run_repl(&client).await?,
    }

    Ok(())
}

/// Reads queries line by line until EOF or `exit`.
async fn run_repl(client: &AssistClient) -> Result<()> {
    println!("sahayak: ask about schemes, health, education, or the environment.");
    println!("Type `exit` to quit.");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query == "exit" || query == "quit" {
            break;
        }

        info!("answering query from interactive session");
        match client.answer(query).await {
            Ok(answer) => println!("[{}] {}\n", answer.domain, answer.text),
            Err(err) => eprintln!("The assistant is temporarily unavailable: {err}"),
        }
    }

    Ok(())
}
