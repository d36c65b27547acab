use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::entities::search::MultiSelectField;
use crate::domain::entities::search_form::SelectOption;

pub const DEFAULT_SERVER_URL: &str = "http://[::1]:8080";
pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const DEFAULT_ALERT_AUTO_CLOSE_MS: u64 = 5000;

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("fi", "varastonhallinta", "varasto")
        .ok_or_else(|| anyhow!("unable to resolve project directories"))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub arkistoitu: Vec<SelectOption>,
    pub sijainti: Vec<SelectOption>,
    pub tila: Vec<SelectOption>,
    pub toimitustapa: Vec<SelectOption>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            arkistoitu: vec![SelectOption::new("0", "Ei"), SelectOption::new("1", "Kyllä")],
            sijainti: vec![
                SelectOption::new("-", "(ei sijaintia)"),
                SelectOption::new("1", "Myymälä"),
                SelectOption::new("2", "Varasto"),
            ],
            tila: vec![
                SelectOption::new("1", "Myynnissä"),
                SelectOption::new("2", "Varattu"),
                SelectOption::new("3", "Myyty"),
            ],
            toimitustapa: vec![
                SelectOption::new("-", "(ei toimitustapaa)"),
                SelectOption::new("1", "Nouto"),
                SelectOption::new("2", "Kuljetus"),
            ],
        }
    }
}

impl SearchOptions {
    pub fn by_field(&self) -> BTreeMap<MultiSelectField, Vec<SelectOption>> {
        BTreeMap::from([
            (MultiSelectField::Arkistoitu, self.arkistoitu.clone()),
            (MultiSelectField::Sijainti, self.sijainti.clone()),
            (MultiSelectField::Tila, self.tila.clone()),
            (MultiSelectField::Toimitustapa, self.toimitustapa.clone()),
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server_url: String,
    pub page_size: u32,
    pub alert_auto_close_ms: u64,
    pub products_file: Option<PathBuf>,
    pub orders_file: Option<PathBuf>,
    pub search_options: SearchOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            alert_auto_close_ms: DEFAULT_ALERT_AUTO_CLOSE_MS,
            products_file: None,
            orders_file: None,
            search_options: SearchOptions::default(),
        }
    }
}

/// Values given on the command line; they win over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub server_url: Option<String>,
    pub products_file: Option<PathBuf>,
    pub orders_file: Option<PathBuf>,
}

impl AppConfig {
    pub fn alert_auto_close(&self) -> Option<Duration> {
        (self.alert_auto_close_ms > 0).then(|| Duration::from_millis(self.alert_auto_close_ms))
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(text).context("failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be greater than zero");
        }
        if self.server_url.trim().is_empty() {
            bail!("server_url must not be empty");
        }
        Ok(())
    }

    /// An explicit path must exist; a missing default file means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (project_dirs()?.config_dir().join("config.toml"), false),
        };

        if !path.exists() {
            if required {
                bail!("config file not found: {}", path.display());
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        info!(path = %path.display(), "loading config");
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("invalid config: {}", path.display()))
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(server_url) = overrides.server_url {
            self.server_url = server_url;
        }
        if let Some(path) = overrides.products_file {
            self.products_file = Some(path);
        }
        if let Some(path) = overrides.orders_file {
            self.orders_file = Some(path);
        }
    }
}
