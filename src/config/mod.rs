//! Configuration management

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::app::model::{
    default_destinations, validate_destinations, validate_spots, Destination, ParkingSpot,
};
use crate::app::pages::preview_spots;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bottom bar destinations, in display order
    #[serde(default = "default_destinations")]
    pub navigation: Vec<Destination>,

    /// Spots shown on the preview page
    #[serde(default = "preview_spots")]
    pub preview_spots: Vec<ParkingSpot>,
}

fn default_port() -> u16 {
    8090
}

/// Get config directory (XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PARKSPOT_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/parkspot-ui");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("parkspot-ui");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/parkspot-ui");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("parkspot-ui");
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

/// Variables resolved by hand in `load_config` rather than by the
/// environment source.
const EXPLICIT_ENV_VARS: &[&str] = &["PARKSPOT_PORT", "PARKSPOT_CONFIG_DIR"];

/// Environment source for `PARKSPOT_<KEY>` variables; nested keys use `__`
/// (`PARKSPOT_SECTION__KEY`).
fn environment_source(
    vars: impl IntoIterator<Item = (String, String)>,
) -> ::config::Environment {
    let vars: ::config::Map<String, String> = vars
        .into_iter()
        .filter(|(key, _)| !EXPLICIT_ENV_VARS.contains(&key.to_uppercase().as_str()))
        .collect();

    ::config::Environment::with_prefix("PARKSPOT")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .source(Some(vars))
}

/// Port override from the environment: PARKSPOT_PORT, then legacy PORT.
/// Values that are not valid ports are logged and skipped.
fn port_from_env() -> Option<u16> {
    for var in ["PARKSPOT_PORT", "PORT"] {
        let Ok(value) = std::env::var(var) else {
            continue;
        };
        match value.parse::<u16>() {
            Ok(port) => return Some(port),
            Err(e) => tracing::warn!("Ignoring {}={:?}: not a valid port ({})", var, value, e),
        }
    }
    None
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", default_port() as i64)?
        // Load from config file if it exists (config.toml / config.json / ...)
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with PARKSPOT_* environment variables
        .add_source(environment_source(std::env::vars()));

    // Port precedence: PARKSPOT_PORT > PORT > config file > default
    if let Some(port) = port_from_env() {
        builder = builder.set_override("port", port as i64)?;
    }

    let config: Config = builder.build()?.try_deserialize()?;

    validate_destinations(&config.navigation).context("invalid navigation configuration")?;
    validate_spots(&config.preview_spots).context("invalid preview spot configuration")?;

    Ok(config)
}
