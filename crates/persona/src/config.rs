//! User configuration (`{data_dir}/config.yaml`)
//!
//! Every field has a default, so a missing file or a partial file both work.
//! A file that does not parse is reported rather than ignored since it is
//! edited by hand.

use std::path::PathBuf;

use persona_core::allocation::{AllocationConfig, RoundingMode};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "config.yaml";

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    /// Parsed, but the values make no sense together
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// New customers acquired per month, used by the impact report
    pub monthly_new_customers: u32,
    pub rounding: RoundingMode,
    /// Lower bound of the allocation band, in percent
    pub allocation_floor: f64,
    /// Upper bound of the allocation band, in percent
    pub allocation_ceiling: f64,
    /// Where exports are written when `--out` is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let allocation = AllocationConfig::default();
        Self {
            monthly_new_customers: 1_000,
            rounding: allocation.rounding,
            allocation_floor: allocation.floor,
            allocation_ceiling: allocation.ceiling,
            export_dir: None,
        }
    }
}

impl AppConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_saphyr::from_str(yaml)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let (floor, ceiling) = (self.allocation_floor, self.allocation_ceiling);
        if !floor.is_finite() || !ceiling.is_finite() {
            return Err(ConfigError::Invalid(
                "allocation_floor and allocation_ceiling must be numbers".to_string(),
            ));
        }
        if floor < 0.0 || ceiling > 100.0 || floor > ceiling {
            return Err(ConfigError::Invalid(format!(
                "allocation band must satisfy 0 <= floor <= ceiling <= 100 (got {floor}..{ceiling})"
            )));
        }
        Ok(())
    }

    /// Allocation settings for the suggested mix
    pub fn allocation(&self) -> AllocationConfig {
        AllocationConfig {
            floor: self.allocation_floor,
            ceiling: self.allocation_ceiling,
            rounding: self.rounding,
        }
    }

    /// Load `config.yaml` from the data directory, defaults when absent
    #[cfg(feature = "native")]
    pub fn load(data_dir: &std::path::Path) -> Result<Self, ConfigError> {
        let path = data_dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(?config, "Loaded config");
        Ok(config)
    }
}
