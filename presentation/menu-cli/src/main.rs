use dotenvy::dotenv;

mod commands;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, repl::Repl};

/// Menu CLI Entry Point
///
/// Initializes logging and configuration, wires the menu service and runs the
/// interactive prompt on stdin/stdout.
fn main() -> anyhow::Result<()> {
    // 1. Load environment variables (so RUST_LOG may come from .env)
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter; logs go to stderr
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.catalog)?;

    // 5. Run prompt
    Repl::run(config.repl, container)
}
