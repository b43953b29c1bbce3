use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_INFERENCE_PORT: u16 = 8000;
pub const DEFAULT_MEMORY_PORT: u16 = 8001;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub host: String,
    pub port: u16,
}

impl InferenceConfig {
    pub fn server(&self) -> ServerConfig {
        ServerConfig::new(self.host.clone(), self.port)
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_INFERENCE_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryConfig {
    pub host: String,
    pub port: u16,
    pub placeholder_value: String,
}

impl MemoryConfig {
    pub fn new(placeholder_value: impl Into<String>) -> Self {
        Self {
            placeholder_value: placeholder_value.into(),
            ..Self::default()
        }
    }

    pub fn server(&self) -> ServerConfig {
        ServerConfig::new(self.host.clone(), self.port)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_MEMORY_PORT,
            placeholder_value: "stub".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    Inference,
    Memory,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub logging: LoggingConfig,
    pub inference: InferenceConfig,
    pub memory: MemoryConfig,
}

impl ServiceConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    pub fn resolve(
        path: Option<&Path>,
        kind: ServiceKind,
        overrides: ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_overrides(kind, overrides)?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, kind: ServiceKind, overrides: ConfigOverrides) -> Result<(), ConfigError> {
        let (host, port) = match kind {
            ServiceKind::Inference => (&mut self.inference.host, &mut self.inference.port),
            ServiceKind::Memory => (&mut self.memory.host, &mut self.memory.port),
        };

        if let Some(value) = overrides.host {
            *host = value;
        }
        if let Some(value) = overrides.port {
            *port = value;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let hosts = [
            ("inference.host", &self.inference.host),
            ("memory.host", &self.memory.host),
        ];

        for (name, host) in hosts {
            if host.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("'{}' must not be empty", name)));
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Invalid("'logging.level' must not be empty".to_string()));
        }

        if self.memory.placeholder_value.is_empty() {
            return Err(ConfigError::Invalid(
                "'memory.placeholder_value' must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
