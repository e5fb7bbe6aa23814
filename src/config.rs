//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local runs.

use crate::db::slots;
use crate::models::Coords;
use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = "data";
const DEFAULT_MAP_ZOOM: u8 = 13;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one JSON file per storage slot
    pub data_dir: PathBuf,
    /// Slot name holding the workout collection
    pub storage_key: String,
    /// Zoom level used when centering the map
    pub map_zoom: u8,
    /// Fixed position reported by the console geolocation (None = unavailable)
    pub home_position: Option<Coords>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            storage_key: slots::WORKOUTS.to_string(),
            map_zoom: DEFAULT_MAP_ZOOM,
            home_position: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let home_position = match (
            env::var("WORKOUT_HOME_LAT").ok(),
            env::var("WORKOUT_HOME_LNG").ok(),
        ) {
            (Some(lat), Some(lng)) => Some(Coords::new(
                parse_var("WORKOUT_HOME_LAT", &lat)?,
                parse_var("WORKOUT_HOME_LNG", &lng)?,
            )),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::Missing("WORKOUT_HOME_LNG")),
            (None, Some(_)) => return Err(ConfigError::Missing("WORKOUT_HOME_LAT")),
        };

        Ok(Self {
            data_dir: env::var("WORKOUT_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR)),
            storage_key: env::var("WORKOUT_STORAGE_KEY")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| slots::WORKOUTS.to_string()),
            map_zoom: match env::var("WORKOUT_MAP_ZOOM") {
                Ok(v) => parse_var("WORKOUT_MAP_ZOOM", &v)?,
                Err(_) => DEFAULT_MAP_ZOOM,
            },
            home_position,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        value: value.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
