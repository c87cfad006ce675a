use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::platform::PlatformConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG_PATH: &str = "dualdial.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dualdial/config.toml";

/// Main configuration structure for dualdial
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Name resolution settings
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Address family overrides on top of the probed platform stack
    #[serde(default)]
    pub platform: PlatformConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dualdial.toml in current directory
    /// 3. /etc/dualdial/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(timeout) = overrides.lookup_timeout_ms {
            self.resolver.lookup_timeout_ms = timeout;
        }
        if overrides.disable_ipv4 {
            self.platform.ipv4 = Some(false);
        }
        if overrides.disable_ipv6 {
            self.platform.ipv6 = Some(false);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.lookup_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Lookup timeout cannot be 0".to_string(),
            ));
        }

        if self.platform.ipv4 == Some(false) && self.platform.ipv6 == Some(false) {
            return Err(ConfigError::Validation(
                "At least one address family must stay enabled".to_string(),
            ));
        }

        Ok(())
    }

    /// Get the path to the configuration file that `load` would pick
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub lookup_timeout_ms: Option<u64>,
    pub disable_ipv4: bool,
    pub disable_ipv6: bool,
    pub log_level: Option<String>,
}
