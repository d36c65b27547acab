use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

mod app;
mod cli;

mod domain {
    pub mod entities {
        pub mod alert;
        pub mod search;
        pub mod search_form;
        pub mod shortcut;
        pub mod table;
        pub mod widget;
    }
}

mod infra {
    pub mod config {
        pub mod app_config;
    }
    pub mod source {
        pub mod json_file;
    }
}

mod platform {
    pub mod desktop {
        pub mod blocking;
    }
}

mod ui {
    pub mod components {
        pub mod advanced_search;
        pub mod alerts;
        pub mod data_table;
        pub mod date_picker;
        pub mod select_picker;
    }
    pub mod render {
        pub mod cells;
    }
    pub mod state {
        pub mod app_state;
    }
    pub mod table {
        pub mod signal_table;
    }
}

mod usecase {
    pub mod ports {
        pub mod source;
        pub mod table;
    }
    pub mod services {
        pub mod alert_service;
        pub mod query_service;
        pub mod search_service;
    }
}

#[cfg(test)]
mod tests;

use crate::app::{App, AppContext};
use crate::cli::{init_tracing, Cli};
use crate::infra::config::app_config::{project_dirs, AppConfig};

fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.overrides());
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = load_config(&cli)?;
    let webview_data_dir = default_webview_data_dir()?;
    info!(
        server_url = %config.server_url,
        page_size = config.page_size,
        "starting varasto"
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title("Varastonhallinta"),
                )
                .with_data_directory(webview_data_dir),
        )
        .with_context(AppContext {
            config: Arc::new(config),
        })
        .launch(App);

    Ok(())
}
