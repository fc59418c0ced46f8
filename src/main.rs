//! Expiring LRU - command driver
//!
//! Reads cache commands from stdin, one per line, and writes one reply line
//! per command to stdout. Logs go to stderr.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use expiring_lru::models::{Command, Reply};
use expiring_lru::{spawn_cache_actor, Cache, Config};

/// Main entry point for the command driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Spawn the cache task
/// 4. Serve stdin lines until EOF, QUIT, Ctrl+C or SIGTERM
/// 5. Drop the handle and wait for the cache task to finish
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "expiring_lru=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Expiring LRU command driver");

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        "Configuration loaded: capacity={}, default_ttl={}s, channel_size={}",
        config.capacity, config.default_ttl, config.channel_size
    );

    let (cache, task) = spawn_cache_actor(Cache::in_memory(config.capacity), config.channel_size);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("failed to read stdin")?,
            _ = &mut shutdown => None,
        };
        let Some(line) = line else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let reply = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => command.execute(&cache, config.default_ttl).await?,
            Err(e) => {
                warn!("Rejected command: {}", e);
                Reply::Error(e.to_string())
            }
        };

        stdout.write_all(format!("{}\n", reply).as_bytes()).await?;
        stdout.flush().await?;
    }

    drop(cache);
    task.await.context("cache task failed")?;

    info!("Shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// A handler that cannot be installed never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
