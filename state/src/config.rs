//! Runtime configuration for the search front end.

use std::str::FromStr;

use dioxus_logger::tracing::warn;
use dioxus_logger::tracing::Level;
use thiserror::Error;

use crate::favorites::FAVORITES_KEY;
use crate::viewport::LatLng;
use crate::viewport::Viewport;

pub const CENTER_VAR: &str = "LUXE_DEFAULT_CENTER";
pub const ZOOM_VAR: &str = "LUXE_DEFAULT_ZOOM";
pub const FAVORITES_KEY_VAR: &str = "LUXE_FAVORITES_KEY";
pub const LOG_LEVEL_VAR: &str = "LUXE_LOG_LEVEL";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("LUXE_DEFAULT_CENTER must be \"lat,lng\", got {0:?}")]
    InvalidCenter(String),
    #[error("LUXE_DEFAULT_ZOOM must be a positive number, got {0:?}")]
    InvalidZoom(String),
    #[error("LUXE_FAVORITES_KEY must not be empty")]
    EmptyFavoritesKey,
    #[error("LUXE_LOG_LEVEL must be one of trace, debug, info, warn, error; got {0:?}")]
    InvalidLogLevel(String),
}

/// Settings the launchers and the search page start from.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Where the map starts and where "reset" returns to.
    pub default_viewport: Viewport,
    pub favorites_key: String,
    pub log_level: Level,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_viewport: Viewport::default(),
            favorites_key: FAVORITES_KEY.to_owned(),
            log_level: Level::INFO,
        }
    }
}

impl SearchConfig {
    /// Reads overrides from the process environment.
    ///
    /// # Environment Variables
    /// - `LUXE_DEFAULT_CENTER`: `"lat,lng"`, e.g. `"-34.9126,-54.8711"`.
    /// - `LUXE_DEFAULT_ZOOM`: positive number.
    /// - `LUXE_FAVORITES_KEY`: storage key for favorites.
    /// - `LUXE_LOG_LEVEL`: `trace`, `debug`, `info`, `warn` or `error`.
    ///
    /// Malformed values are logged and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(env_var)
    }

    /// Reads overrides captured at compile time, for targets without a
    /// process environment (wasm32).
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env_var)
    }

    /// Builds a config from an arbitrary variable lookup, logging every
    /// malformed value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let (config, errors) = Self::parse(lookup);
        for e in &errors {
            warn!("{}", e);
        }
        config
    }

    /// Builds a config from an arbitrary variable lookup and returns the
    /// malformed values instead of logging them, for callers that read the
    /// config before a logger exists.
    pub fn parse(lookup: impl Fn(&str) -> Option<String>) -> (Self, Vec<ConfigError>) {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(raw) = lookup(CENTER_VAR) {
            match parse_center(&raw) {
                Ok(center) => config.default_viewport.center = center,
                Err(e) => errors.push(e),
            }
        }

        if let Some(raw) = lookup(ZOOM_VAR) {
            let zoom = raw
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(|zoom| Viewport::new(config.default_viewport.center, zoom).ok());
            match zoom {
                Some(viewport) => config.default_viewport = viewport,
                None => errors.push(ConfigError::InvalidZoom(raw)),
            }
        }

        if let Some(raw) = lookup(FAVORITES_KEY_VAR) {
            let key = raw.trim();
            if key.is_empty() {
                errors.push(ConfigError::EmptyFavoritesKey);
            } else {
                config.favorites_key = key.to_owned();
            }
        }

        if let Some(raw) = lookup(LOG_LEVEL_VAR) {
            match Level::from_str(raw.trim()) {
                Ok(level) => config.log_level = level,
                Err(_) => errors.push(ConfigError::InvalidLogLevel(raw)),
            }
        }

        (config, errors)
    }
}

/// Looks `name` up in the process environment.
pub fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Looks `name` up among the variables captured when the crate was built.
pub fn build_env_var(name: &str) -> Option<String> {
    match name {
        CENTER_VAR => option_env!("LUXE_DEFAULT_CENTER"),
        ZOOM_VAR => option_env!("LUXE_DEFAULT_ZOOM"),
        FAVORITES_KEY_VAR => option_env!("LUXE_FAVORITES_KEY"),
        LOG_LEVEL_VAR => option_env!("LUXE_LOG_LEVEL"),
        _ => None,
    }
    .map(str::to_owned)
}

fn parse_center(raw: &str) -> Result<LatLng, ConfigError> {
    let invalid = || ConfigError::InvalidCenter(raw.to_owned());
    let (lat, lng) = raw.split_once(',').ok_or_else(invalid)?;
    let lat = lat.trim().parse::<f64>().map_err(|_| invalid())?;
    let lng = lng.trim().parse::<f64>().map_err(|_| invalid())?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err(invalid());
    }
    Ok(LatLng::new(lat, lng))
}
