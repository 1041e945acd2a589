use super::defaults::MAX_CAPACITY;
use super::types::Scenario;
use crate::debug_println;
use crate::pricing::tiers::TierTable;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Error types for scenario loading and validation
#[derive(Debug)]
pub enum ConfigError {
    FileAccess(std::io::Error),
    Parse(String),
    Serialize(String),
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileAccess(e) => write!(f, "Failed to access scenario file: {}", e),
            ConfigError::Parse(msg) => write!(f, "Scenario file is malformed: {}", msg),
            ConfigError::Serialize(msg) => write!(f, "Failed to write scenario: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid scenario: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::FileAccess(error)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::Parse(error.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(error: toml::ser::Error) -> Self {
        ConfigError::Serialize(error.to_string())
    }
}

impl Scenario {
    /// Load scenario from the default location, defaults if absent
    pub fn load() -> Result<Scenario, ConfigError> {
        let path = Self::get_config_path();
        if !path.exists() {
            debug_println!("No scenario at {}, using defaults", path.display());
            return Ok(Scenario::default());
        }
        Self::load_from_path(path)
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Scenario, ConfigError> {
        let path = path.as_ref();
        debug_println!("Loading scenario from {}", path.display());
        let content = fs::read_to_string(path)?;
        let scenario: Scenario = toml::from_str(&content)?;
        Ok(scenario)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the default scenario path (~/.paxline/scenario.toml)
    pub fn get_config_path() -> PathBuf {
        if let Some(home) = dirs::home_dir() {
            home.join(".paxline").join("scenario.toml")
        } else {
            PathBuf::from(".paxline/scenario.toml")
        }
    }

    /// Write the default scenario unless one already exists
    pub fn init(path: &Path) -> Result<bool, ConfigError> {
        if path.exists() {
            return Ok(false);
        }
        Scenario::default().save_to(path)?;
        Ok(true)
    }

    /// Validate scenario values the calculator cannot sensibly use
    pub fn check(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::Invalid("capacity must be at least 1".into()));
        }

        if self.capacity > MAX_CAPACITY {
            return Err(ConfigError::Invalid(format!(
                "capacity must not exceed {} pax",
                MAX_CAPACITY
            )));
        }

        if !self.commission_percent.is_finite() {
            return Err(ConfigError::Invalid("commission must be a number".into()));
        }

        if !self.flat_price.is_finite() {
            return Err(ConfigError::Invalid("flat price must be a number".into()));
        }

        for (label, costs) in [("fixed", &self.fixed_costs), ("variable", &self.variable_costs)] {
            let mut seen_ids = HashSet::new();
            for item in costs.items() {
                if !seen_ids.insert(item.id) {
                    return Err(ConfigError::Invalid(format!(
                        "duplicate {} cost id: {}",
                        label, item.id
                    )));
                }
                if !item.amount.is_finite() || item.amount < 0.0 {
                    return Err(ConfigError::Invalid(format!(
                        "{} cost '{}' must be a non-negative amount",
                        label, item.name
                    )));
                }
            }
        }

        for tier in &self.tiers {
            if tier.min < 1 || tier.max < tier.min {
                return Err(ConfigError::Invalid(format!(
                    "tier {}-{} must satisfy 1 <= min <= max",
                    tier.min, tier.max
                )));
            }
            if !tier.value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "tier {}-{} price must be a number",
                    tier.min, tier.max
                )));
            }
        }

        for warning in self.tier_warnings() {
            debug_println!("Warning: {}", warning);
        }

        Ok(())
    }

    /// Gaps and overlaps between tiers; tolerated, but worth reporting
    pub fn tier_warnings(&self) -> Vec<String> {
        TierTable::new(&self.tiers)
            .irregularities()
            .iter()
            .map(|issue| issue.to_string())
            .collect()
    }

    /// Print scenario as TOML
    pub fn print(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        println!("{}", content);
        Ok(())
    }
}
