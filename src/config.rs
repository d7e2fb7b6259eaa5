//! Shell configuration loaded from environment variables

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::consts::TICK_PERIOD;

/// Tick period override in milliseconds
pub const TICK_MS_VAR: &str = "INVADERS_TICK_MS";
/// Log file path override
pub const LOG_FILE_VAR: &str = "INVADERS_LOG";

const DEFAULT_LOG_FILE: &str = "debug.log";

/// Settings for the terminal front end. The arena itself is not configurable.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    /// Period between simulation ticks
    pub tick_period: Duration,
    /// Where log output goes (stdout belongs to the TUI)
    pub log_file: PathBuf,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            tick_period: TICK_PERIOD,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(TICK_MS_VAR) {
            config.tick_period = parse_tick_ms(&raw)
                .wrap_err_with(|| format!("invalid {TICK_MS_VAR} value {raw:?}"))?;
        }

        if let Some(path) = lookup(LOG_FILE_VAR).filter(|p| !p.trim().is_empty()) {
            config.log_file = PathBuf::from(path);
        }

        Ok(config)
    }
}

fn parse_tick_ms(raw: &str) -> Result<Duration> {
    let millis: u64 = raw.trim().parse()?;
    if millis == 0 {
        return Err(eyre!("tick period must be at least 1 ms"));
    }
    Ok(Duration::from_millis(millis))
}
