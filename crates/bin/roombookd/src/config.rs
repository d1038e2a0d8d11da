//! Daemon settings read from `roombook.toml`, then patched from the
//! environment.
//!
//! The file is optional (`ROOMBOOK_CONFIG` points at another path). Besides
//! the listener and log filter it can list `[[rooms]]` to register on start.

use serde::Deserialize;

/// Settings for one `roombookd` process.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    /// Rooms registered before the listener opens.
    pub rooms: Vec<RoomSeed>,
}

/// Where the HTTP API listens.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// `tracing` filter, in `RUST_LOG` syntax.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

/// A room to register when the daemon starts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoomSeed {
    pub name: String,
    pub capacity: i64,
}

impl Config {
    /// Read the config file, apply `ROOMBOOK_*` and `RUST_LOG` overrides,
    /// then validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// merged settings are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("ROOMBOOK_CONFIG").unwrap_or_else(|_| "roombook.toml".to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    /// Patch settings from `lookup`, later keys winning over earlier ones.
    ///
    /// Unparsable ports are ignored. `ROOMBOOK_BIND` (`host:port`) is only
    /// applied when it carries a valid port.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("ROOMBOOK_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("ROOMBOOK_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some((host, port)) = lookup("ROOMBOOK_BIND").as_deref().and_then(split_bind) {
            self.server.host = host.to_string();
            self.server.port = port;
        }
        for key in ["ROOMBOOK_LOG", "RUST_LOG"] {
            if let Some(filter) = lookup(key) {
                self.logging.filter = filter;
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Listener address as `host:port`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn split_bind(bind: &str) -> Option<(&str, u16)> {
    let (host, port) = bind.rsplit_once(':')?;
    if host.is_empty() {
        return None;
    }
    Some((host, port.parse().ok()?))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "roombookd=info,roombook=info,tower_http=debug".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}
