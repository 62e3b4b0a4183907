//! Roast CLI - send text or images to a roast server from the terminal
//!
//! Examples:
//!   roast text "socks with sandals"     # Roast a description
//!   roast image selfie.jpg              # Roast a photo

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

/// Roast Master - get roasted from the command line
#[derive(Parser)]
#[command(
    name = "roast",
    about = "Client for the Roast Master API",
    version = env!("CARGO_PKG_VERSION"),
    arg_required_else_help = true,
    propagate_version = true,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Server URL for API commands
    #[arg(
        long,
        global = true,
        value_name = "URL",
        default_value = "http://localhost:8080",
        env = "ROAST_SERVER"
    )]
    server: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Roast a short text description
    Text {
        /// What to get roasted about
        description: String,
    },
    /// Roast an image file
    Image {
        /// Path to the image (JPEG works best)
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let server = cli.server.trim_end_matches('/').to_string();

    let body = match cli.command {
        Commands::Text { description } => {
            let response = client
                .post(format!("{server}/text"))
                .json(&json!({ "text": description }))
                .send()
                .await
                .context("request to roast server failed")?;
            read_roast_body(response).await?
        }
        Commands::Image { path } => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("failed to read image {}", path.display()))?;
            let response = client
                .post(format!("{server}/"))
                .body(bytes)
                .send()
                .await
                .context("request to roast server failed")?;
            read_roast_body(response).await?
        }
    };

    match body["roast_text"].as_str() {
        Some(roast) => println!("{roast}"),
        None => bail!("server returned no roast: {body}"),
    }
    if let Some(audio) = body["audio_file"].as_str() {
        println!("sound: {audio}");
    }

    Ok(())
}

/// Decode a roast response, turning error payloads into process errors.
/// The server degrades some upstream failures into HTTP 200 bodies that carry
/// an `error` field instead of a roast, so the status alone is not enough.
async fn read_roast_body(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let text = response.text().await.context("failed to read response")?;
    let body: Value =
        serde_json::from_str(&text).with_context(|| format!("unexpected response: {text}"))?;

    if !status.is_success() || body.get("error").is_some() {
        let message = body["error"].as_str().unwrap_or("unknown error");
        match body["details"].as_str() {
            Some(details) => bail!("roast failed ({status}): {message}: {details}"),
            None => bail!("roast failed ({status}): {message}"),
        }
    }
    Ok(body)
}
