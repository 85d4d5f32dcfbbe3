use std::path::Path;

use anyhow::Context as _;
use log::trace;
use serde::Deserialize;

use crate::time::WeekDaySet;

const DEFAULT_HOURS_PER_DAY: f64 = 8.0;

/// The startup configuration: the defaults a calculation falls back to when
/// the caller does not override them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    hours_per_day: f64,
    week_days: WeekDaySet,
}

impl Config {
    pub fn from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        trace!("reading config from: {}", path.display());

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file \"{}\"", path.display()))?;

        Self::from_toml(&contents)
            .with_context(|| format!("invalid config file \"{}\"", path.display()))
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(contents)?;

        anyhow::ensure!(
            config.hours_per_day > 0.0,
            "hours_per_day must be positive, got {}",
            config.hours_per_day
        );
        anyhow::ensure!(!config.week_days.is_empty(), "week_days must not be empty");

        Ok(config)
    }

    pub const fn hours_per_day(&self) -> f64 {
        self.hours_per_day
    }

    pub const fn week_days(&self) -> WeekDaySet {
        self.week_days
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hours_per_day: DEFAULT_HOURS_PER_DAY,
            week_days: WeekDaySet::MONDAY_TO_FRIDAY,
        }
    }
}
