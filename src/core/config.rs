use crate::core::calculators::InterestType;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct PpfDefaults {
    pub yearly_investment: f64,
    pub years: f64,
    /// Government notified rate, revised every quarter.
    pub rate: f64,
}

impl Default for PpfDefaults {
    fn default() -> Self {
        PpfDefaults {
            yearly_investment: 150000.0,
            years: 15.0,
            rate: 7.1,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct FixedDepositDefaults {
    pub amount: f64,
    pub rate: f64,
    pub years: f64,
    pub interest_type: InterestType,
}

impl Default for FixedDepositDefaults {
    fn default() -> Self {
        FixedDepositDefaults {
            amount: 100000.0,
            rate: 10.0,
            years: 5.0,
            interest_type: InterestType::Simple,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SipDefaults {
    pub monthly_investment: f64,
    /// Expected average annual return.
    pub rate: f64,
    pub years: f64,
}

impl Default for SipDefaults {
    fn default() -> Self {
        SipDefaults {
            monthly_investment: 5000.0,
            rate: 12.0,
            years: 5.0,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct RecurringDepositDefaults {
    pub monthly_investment: f64,
    pub rate: f64,
    pub years: f64,
}

impl Default for RecurringDepositDefaults {
    fn default() -> Self {
        RecurringDepositDefaults {
            monthly_investment: 5000.0,
            rate: 8.0,
            years: 1.0,
        }
    }
}

/// Default inputs for each calculator, used for any value not given on the
/// command line.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub ppf: PpfDefaults,
    pub fd: FixedDepositDefaults,
    pub sip: SipDefaults,
    pub rd: RecurringDepositDefaults,
}

impl AppConfig {
    /// Loads the config from the default location, falling back to the
    /// built-in defaults when no config file exists yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using built-in defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "fincalc", "fincalc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
