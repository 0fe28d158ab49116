//! Process-level settings read from the environment at startup.

use std::env;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 5_000;

/// Runtime settings for the HTTP server and the score simulator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Period shared by the score simulator and live update polling
    pub tick_interval: Duration,
    pub simulator_enabled: bool,
    pub simulator_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            simulator_enabled: true,
            simulator_seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let host = env::var("BACKEND_HOST").unwrap_or(defaults.host);
        let port = parse_var::<u16>("BACKEND_PORT")?.unwrap_or(defaults.port);

        let tick_interval = match parse_var::<u64>("TICK_INTERVAL_MS")? {
            Some(0) => {
                return Err(AppError::config("TICK_INTERVAL_MS must be greater than zero"));
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.tick_interval,
        };

        let simulator_enabled = match env::var("SIMULATOR_ENABLED") {
            Ok(v) => parse_bool("SIMULATOR_ENABLED", &v)?,
            Err(_) => defaults.simulator_enabled,
        };

        let simulator_seed = parse_var::<u64>("SIMULATOR_SEED")?;

        Ok(Self {
            host,
            port,
            tick_interval,
            simulator_enabled,
            simulator_seed,
        })
    }

    /// Builder-style override used by tests
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{name} has an invalid value: '{raw}'"))),
        Err(_) => Ok(None),
    }
}

fn parse_bool(name: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::config(format!(
            "{name} must be a boolean, got '{raw}'"
        ))),
    }
}
