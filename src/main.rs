//! Seekbot debug front end
//!
//! Interactive shell that wires the search pipeline and runs queries from
//! stdin, one at a time. The live messaging front end and the reasoning
//! collaborator are external; this binary exercises the search capability
//! directly.

use anyhow::Result;
use seekbot::{
    config::Settings,
    tools::{ToolRegistry, WebSearchTool, WEB_SEARCH_TOOL_NAME},
    SearchExecutor,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Seekbot v{}", seekbot::VERSION);

    // Load configuration
    let settings = load_settings()?;
    info!(
        rate_limit_delay = settings.search.rate_limit_delay,
        "Loaded configuration"
    );

    // Compose the search capability
    let executor = Arc::new(SearchExecutor::new(&settings));
    info!(max_results = executor.max_results(), "Search executor ready");
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(WebSearchTool::new(executor)));

    let tool = registry
        .get(WEB_SEARCH_TOOL_NAME)
        .ok_or_else(|| anyhow::anyhow!("web search tool not registered"))?;

    info!(tools = ?registry.names(), "Capabilities registered");
    println!("Seekbot debug shell. Type a query, or 'exit' to quit.");

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        stdout.write_all(b"search> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let query = line.trim();

        if query.is_empty() {
            continue;
        }
        if query == "exit" || query == "quit" {
            break;
        }

        let output = tool.invoke(query).await;
        println!("{}\n", output);
    }

    info!("Seekbot debug shell stopped");
    Ok(())
}

/// Load settings from file or use defaults
fn load_settings() -> Result<Settings> {
    // Check environment variable first
    if let Ok(path) = std::env::var("SEEKBOT_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Try conventional locations
    let paths = [
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        dirs::config_dir()
            .map(|p| p.join("seekbot/settings.yml"))
            .unwrap_or_default(),
    ];

    for path in paths.iter() {
        if path.exists() {
            info!("Loading settings from: {}", path.display());
            let mut settings = Settings::from_file(path)?;
            settings.merge_env();
            return Ok(settings);
        }
    }

    // Use defaults
    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}
