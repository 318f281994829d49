//! Global configuration.
//!
//! Loaded once from `icm.toml` in the working directory. Every setting has a default,
//! so running without a config file is fine.
//!
//! ```toml
//! [general]
//! base_url = "https://icm.example.org/"
//!
//! [page]
//! csrf_cookie = "csrftoken"
//! csrf_header = "X-CSRFToken"
//! ```
use once_cell::sync::OnceCell;
use std::env::var;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use std::fs::read_to_string;
use thiserror::Error;
use tracing::info;

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Error, Debug)]
pub enum Error {
    #[error("config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config file not found")]
    Io(#[from] std::io::Error),

    #[error("config is already loaded")]
    ConfigLoaded,

    #[error("config not found")]
    NoConfig,
}

/// Global configuration.
#[derive(Debug, Clone)]
pub struct Config {
    path: Option<PathBuf>,
    pub general: General,
    pub page: PageSettings,
}

#[derive(Debug, Clone)]
pub struct General {
    pub tty: bool,
    pub base_url: String,
    pub timeout: Duration,
}

/// Names and endpoints the page helpers agree on with the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageSettings {
    #[serde(default = "PageSettings::default_location_input")]
    pub location_input: String,
    #[serde(default = "PageSettings::default_locations_endpoint")]
    pub locations_endpoint: String,
    #[serde(default = "PageSettings::default_prefix_param")]
    pub prefix_param: String,
    #[serde(default = "PageSettings::default_csrf_cookie")]
    pub csrf_cookie: String,
    #[serde(default = "PageSettings::default_csrf_header")]
    pub csrf_header: String,
    #[serde(default = "PageSettings::default_min_length")]
    pub min_length: usize,
    #[serde(default = "PageSettings::default_delay_ms")]
    pub delay_ms: u64,
}

impl PageSettings {
    fn default_location_input() -> String {
        "id_location".into()
    }

    fn default_locations_endpoint() -> String {
        "/a/locations/".into()
    }

    fn default_prefix_param() -> String {
        "prefix".into()
    }

    fn default_csrf_cookie() -> String {
        "csrftoken".into()
    }

    fn default_csrf_header() -> String {
        "X-CSRFToken".into()
    }

    fn default_min_length() -> usize {
        1
    }

    fn default_delay_ms() -> u64 {
        300
    }

    /// How long the widget waits after a keystroke before searching.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            location_input: Self::default_location_input(),
            locations_endpoint: Self::default_locations_endpoint(),
            prefix_param: Self::default_prefix_param(),
            csrf_cookie: Self::default_csrf_cookie(),
            csrf_header: Self::default_csrf_header(),
            min_length: Self::default_min_length(),
            delay_ms: Self::default_delay_ms(),
        }
    }
}

impl Default for General {
    fn default() -> Self {
        let base_url = match var("ICM_BASE_URL") {
            Ok(url) => url,
            Err(_) => GeneralConfig::default_base_url(),
        };

        Self {
            tty: std::io::stderr().is_terminal(),
            base_url,
            timeout: Duration::from_secs(GeneralConfig::default_timeout()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            general: General::default(),
            page: PageSettings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the first config file found in the working directory.
    pub fn load() -> Result<Config, Error> {
        for name in ["icm.toml", "Icm.toml"] {
            let path = PathBuf::from(name);
            if path.exists() {
                let mut config = Self::from_file(ConfigFile::load(&path)?);
                config.path = Some(path);
                return Ok(config);
            }
        }

        Err(Error::NoConfig)
    }

    /// Build configuration from TOML text.
    pub fn from_str(text: &str) -> Result<Config, Error> {
        let file: ConfigFile = toml::from_str(text)?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: ConfigFile) -> Config {
        let mut config = Config::default();

        if let Some(general) = file.general {
            if let Some(tty) = general.tty {
                config.general.tty = tty;
            }

            // Environment wins over the file.
            if var("ICM_BASE_URL").is_err() {
                config.general.base_url = general.base_url;
            }

            config.general.timeout = Duration::from_secs(general.timeout);
        }

        config.page = file.page.unwrap_or_default();
        config
    }

    /// Install this configuration as the global one. Fails if the global
    /// configuration has already been read.
    pub fn install(self) -> Result<(), Error> {
        CONFIG.set(self).map_err(|_| Error::ConfigLoaded)
    }

    pub fn get() -> &'static Config {
        get_config()
    }

    /// Path to the loaded config file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn log_info(&self) {
        match self.path {
            Some(ref path) => info!("Configuration loaded from \"{}\"", path.display()),
            None => info!("Configuration file not found, using defaults"),
        }
    }
}

pub fn get_config() -> &'static Config {
    CONFIG.get_or_init(|| Config::load().unwrap_or_default())
}

#[derive(Serialize, Deserialize)]
struct ConfigFile {
    general: Option<GeneralConfig>,
    page: Option<PageSettings>,
}

impl ConfigFile {
    pub fn load(path: impl AsRef<Path>) -> Result<ConfigFile, Error> {
        let file = read_to_string(path)?;
        let config: Self = toml::from_str(&file)?;

        Ok(config)
    }
}

#[derive(Serialize, Deserialize)]
struct GeneralConfig {
    tty: Option<bool>,
    #[serde(default = "GeneralConfig::default_base_url")]
    base_url: String,
    #[serde(default = "GeneralConfig::default_timeout")]
    timeout: u64,
}

impl GeneralConfig {
    fn default_base_url() -> String {
        "http://localhost:8000/".into()
    }

    fn default_timeout() -> u64 {
        10
    }
}
