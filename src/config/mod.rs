//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! section is optional; a missing file section falls back to the defaults
//! used by the core.
//!
//! ```toml
//! [logging]
//! level = "info"
//! format = "pretty"
//!
//! [sampling]
//! market = "1x2"
//! max_consecutive = 3
//! seed = 42
//!
//! [sampling.distribution]
//! home = 50
//! draw = 30
//! away = 20
//!
//! [payout]
//! stake = 1000
//! tax_rate = 0.12
//! ```
//!
//! # Example
//!
//! ```no_run
//! use slipgen::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("slipgen.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

pub mod logging;

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{
    correct_score_count, BonusSchedule, Distribution, Market, PayoutRules, SamplingConfig, Stake,
    DEFAULT_MAX_CONSECUTIVE, DEFAULT_MAX_GOALS, DEFAULT_TAX_RATE, MAX_SUGGESTED_SLIPS,
};
use crate::error::{ConfigError, Result};

pub use logging::LoggingConfig;

/// Largest batch a single `generate` run may request.
pub const MAX_BATCH_SLIPS: usize = MAX_SUGGESTED_SLIPS as usize;

/// Slip sampling settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SamplingSettings {
    pub market: Market,
    pub distribution: Distribution,
    pub max_consecutive: u32,
    pub max_goals: u32,
    /// Fixed seed for reproducible batches.
    pub seed: Option<u64>,
    /// Slips per batch. Defaults to the suggested `3^n` count.
    pub count: Option<usize>,
}

impl SamplingSettings {
    /// Core sampling parameters.
    #[must_use]
    pub fn to_sampling_config(&self) -> SamplingConfig {
        SamplingConfig {
            market: self.market,
            distribution: self.distribution,
            max_consecutive: self.max_consecutive,
            max_goals: self.max_goals,
        }
    }
}

impl Default for SamplingSettings {
    fn default() -> Self {
        Self {
            market: Market::default(),
            distribution: Distribution::default(),
            max_consecutive: DEFAULT_MAX_CONSECUTIVE,
            max_goals: DEFAULT_MAX_GOALS,
            seed: None,
            count: None,
        }
    }
}

/// Valuation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PayoutSettings {
    /// Flat stake applied to every slip.
    pub stake: Decimal,
    pub tax_rate: Decimal,
    pub bonus: BonusSchedule,
}

impl PayoutSettings {
    #[must_use]
    pub fn rules(&self) -> PayoutRules {
        PayoutRules {
            tax_rate: self.tax_rate,
            bonus: self.bonus.clone(),
        }
    }
}

impl Default for PayoutSettings {
    fn default() -> Self {
        Self {
            stake: Decimal::ZERO,
            tax_rate: DEFAULT_TAX_RATE,
            bonus: BonusSchedule::default(),
        }
    }
}

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub sampling: SamplingSettings,
    pub payout: PayoutSettings,
}

impl Config {
    /// Load and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadFile`], [`ConfigError::Parse`] or a
    /// validation error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise use defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`] for an existing file.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate TOML content.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] or a validation error.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every value the core would reject.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(invalid("logging.level", "cannot be empty").into());
        }

        let scores = correct_score_count(self.sampling.max_goals);
        if scores > MAX_BATCH_SLIPS as u64 {
            return Err(invalid(
                "sampling.max_goals",
                format!(
                    "{} allows {scores} scores per match, limit is {MAX_BATCH_SLIPS}",
                    self.sampling.max_goals
                ),
            )
            .into());
        }

        self.sampling
            .to_sampling_config()
            .validate()
            .map_err(|e| invalid("sampling", e.to_string()))?;

        if let Some(count) = self.sampling.count {
            if count > MAX_BATCH_SLIPS {
                return Err(invalid(
                    "sampling.count",
                    format!("must not exceed {MAX_BATCH_SLIPS}, got {count}"),
                )
                .into());
            }
        }

        Stake::try_new(self.payout.stake).map_err(|e| invalid("payout.stake", e.to_string()))?;
        self.payout
            .rules()
            .validate()
            .map_err(|e| invalid("payout", e.to_string()))?;

        Ok(())
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// The configured stake.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the stake is negative.
    pub fn stake(&self) -> Result<Stake> {
        Ok(Stake::try_new(self.payout.stake)?)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
}
