// src/main.rs
// Foresight - decision outcome service

use anyhow::Result;
use clap::Parser;
use foresight::cli::{Cli, Commands};
use foresight::config::Config;
use foresight::http::create_shared_client;
use foresight::llm::{GeminiClient, LlmClient};
use foresight::outcome::DecisionRequest;
use foresight::web::{self, state::AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Build the model client once; it is shared read-only by every request
fn build_llm(config: &Config) -> Result<Arc<dyn LlmClient>> {
    let api_key = config.require_api_key()?.to_string();
    let client = GeminiClient::with_http_client(
        api_key,
        config.model.clone(),
        config.api_base.clone(),
        create_shared_client()?,
    );
    Ok(Arc::new(client))
}

async fn run_server(config: Config) -> Result<()> {
    let validation = config.validate();
    if !validation.is_valid() {
        anyhow::bail!("Invalid configuration:\n{}", validation.report());
    }
    for issue in validation.warnings() {
        tracing::warn!(variable = issue.variable, "{}", issue.message);
    }

    let llm = build_llm(&config)?;
    info!(model = %config.model, "Gemini client ready");

    let state = AppState::new(llm);
    web::serve(&config.bind_address(), state).await?;

    Ok(())
}

async fn run_ask(
    config: Config,
    decision: String,
    time: Option<String>,
    intensity: Option<String>,
) -> Result<()> {
    let llm = build_llm(&config)?;
    let state = AppState::new(llm);

    let request = DecisionRequest {
        decision: Some(decision),
        time,
        intensity,
    };
    let response = state.outcomes.evaluate_decision(request).await?;
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn run_check_config(config: &Config) -> Result<()> {
    let validation = config.validate();
    if validation.issues().is_empty() {
        println!(
            "Configuration OK (model: {}, listen: {})",
            config.model,
            config.bind_address()
        );
        return Ok(());
    }

    println!("{}", validation.report());
    if !validation.is_valid() {
        anyhow::bail!("configuration has errors");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env from current directory (missing file is fine)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = Config::from_env();
    cli.apply_overrides(&mut config);

    match cli.command {
        None | Some(Commands::Serve) => run_server(config).await?,
        Some(Commands::Ask {
            decision,
            time,
            intensity,
        }) => run_ask(config, decision, time, intensity).await?,
        Some(Commands::CheckConfig) => run_check_config(&config)?,
    }

    Ok(())
}
