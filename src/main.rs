//! surreal-adapter Binary Entry Point
//!
//! Runs a single administration operation against a SurrealDB backend.
//! Core functionality is provided by the `surreal_adapter` library crate.

use std::time::Duration;

use clap::{Parser, Subcommand};
use surreal_adapter::{
    Adapter, AdapterConfig, SurrealAdapter,
    config::{ConfigError, parse_duration},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// SurrealDB administration CLI
#[derive(Parser, Debug)]
#[command(name = "surreal-adapter", version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, env = "SURREAL_ADAPTER_CONFIG")]
    config: Option<String>,

    /// Backend URL (overrides config file)
    #[arg(long, env = "SURREAL_URL")]
    url: Option<String>,

    /// Username (overrides config file)
    #[arg(long, env = "SURREAL_USER")]
    username: Option<String>,

    /// Password (overrides config file)
    #[arg(long, env = "SURREAL_PASS", hide_env_values = true)]
    password: Option<String>,

    /// Request timeout, e.g. "10s" (overrides config file)
    #[arg(long, value_parser = parse_duration)]
    timeout: Option<Duration>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend is reachable
    Ping,
    /// Create a database (namespace + database of the same name)
    Create { name: String },
    /// Check whether a database, or a table inside it, exists
    Exists {
        database: String,
        table: Option<String>,
    },
    /// List databases
    List,
    /// Delete a database
    Delete { name: String },
}

/// Resolve configuration with precedence CLI > ENV > config file.
fn resolve_config(cli: &Cli) -> Result<AdapterConfig, ConfigError> {
    let mut config = match (&cli.config, &cli.url) {
        (Some(path), _) => {
            tracing::debug!("Loading configuration from: {}", path);
            AdapterConfig::load(path)?
        }
        (None, Some(url)) => AdapterConfig::new(url),
        (None, None) => {
            return Err(ConfigError::ValidationError(
                "either --config or --url is required".to_string(),
            ));
        }
    };

    if let Some(ref url) = cli.url {
        config.url = url.clone();
    }
    if let Some(ref username) = cli.username {
        config.username = username.clone();
    }
    if let Some(ref password) = cli.password {
        config.password = password.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = Some(timeout);
    }

    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; stdout carries command output only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,surreal_adapter=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    tracing::debug!(
        url = %config.url,
        username = %config.username,
        timeout = ?config.timeout,
        "Connecting"
    );

    let adapter = SurrealAdapter::from_config(&config)?;

    match cli.command {
        Command::Ping => {
            println!("{}", adapter.ping().await?);
        }
        Command::Create { name } => {
            println!("{}", adapter.create(&name).await?);
        }
        Command::Exists { database, table } => {
            println!("{}", adapter.exists(&database, table.as_deref()).await?);
        }
        Command::List => {
            for name in adapter.list().await? {
                println!("{}", name);
            }
        }
        Command::Delete { name } => {
            println!("{}", adapter.delete(&name).await?);
        }
    }

    Ok(())
}
