use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::anyhow;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::infra::config::app_config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "varasto", version, about = "Varastonhallinnan hakunäkymä")]
pub struct Cli {
    /// Path to config.toml (defaults to the user config directory).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,

    #[arg(long = "server-url")]
    pub server_url: Option<String>,

    /// Saved products_json response to display.
    #[arg(long = "products-file")]
    pub products_file: Option<PathBuf>,

    /// Saved orders_json response to display.
    #[arg(long = "orders-file")]
    pub orders_file: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            server_url: self.server_url.clone(),
            products_file: self.products_file.clone(),
            orders_file: self.orders_file.clone(),
        }
    }
}

pub fn init_tracing(debug_enabled: bool) -> anyhow::Result<()> {
    let default_level = if debug_enabled { "debug" } else { "info" };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow!("invalid RUST_LOG / log filter: {e}"))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}
