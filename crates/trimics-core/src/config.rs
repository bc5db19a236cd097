use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, DEFAULT_MONTHS_BEFORE, DEFAULT_PRODID, ENV_PREFIX};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub trim: TrimConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrimConfig {
    /// Retention window: events ending more than this many months ago are dropped.
    pub months_before: u32,
    /// Remove `X-` properties from surviving events.
    pub strip_extensions: bool,
    /// Copy VTIMEZONE definitions referenced by surviving events.
    pub keep_timezones: bool,
    /// PRODID written into the output calendar.
    pub prodid: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads settings from defaults, an optional `trimics.toml` in the working
    /// directory and `TRIMICS__`-prefixed environment variables, in increasing
    /// order of precedence.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(Self::builder_with_defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?)
    }

    /// ## Summary
    /// Builds settings from defaults overlaid with a TOML document.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or has wrong types.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Self::builder_with_defaults()?
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?)
    }

    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("trim.months_before", i64::from(DEFAULT_MONTHS_BEFORE))?
            .set_default("trim.strip_extensions", false)?
            .set_default("trim.keep_timezones", false)?
            .set_default("trim.prodid", DEFAULT_PRODID)?
            .set_default("logging.level", "info")?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
