//! Runtime configuration for the server and client binaries
//!
//! Settings come from a TOML file named by the `DHEC_CONFIG` environment
//! variable. Without it, or for any key the file leaves out, the defaults
//! below apply:
//!
//! ```toml
//! listen_addr = "127.0.0.1:8080"
//! server_addr = "127.0.0.1:8080"
//! private_key_bits = 256
//! random_source = "os"          # or "openssl"
//! validate_peer_points = false
//! # io_timeout_secs = 30
//! log_level = "info"
//! ```

use dhec_algorithms::{CommandSource, RngSource};
use dhec_api::RandomSource;
use dhec_exchange::{SessionOptions, TransportOptions};
use dhec_params::{DEFAULT_ADDR, DEFAULT_PRIVATE_KEY_BITS, MIN_PRIVATE_KEY_BITS};
use log::LevelFilter;
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the path of the configuration file.
pub const CONFIG_ENV: &str = "DHEC_CONFIG";

/// Configuration failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`Config`]
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        /// Path, or `<inline>` for text
        path: String,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// A value parsed but is out of range
    #[error("invalid value for {field}: {message}")]
    Invalid {
        /// Offending key
        field: &'static str,
        /// What is wrong with it
        message: String,
    },
}

impl From<ConfigError> for dhec_api::Error {
    fn from(err: ConfigError) -> Self {
        dhec_api::Error::param("configuration", err.to_string())
    }
}

fn invalid(field: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        message: message.into(),
    }
}

/// Where private scalars come from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RandomSourceKind {
    /// The operating system CSPRNG
    #[default]
    Os,
    /// `openssl rand -hex`
    Openssl,
}

/// Settings shared by `dhec-server` and `dhec-client`
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Address the server binds
    pub listen_addr: String,
    /// Address the client dials
    pub server_addr: String,
    /// Random bits drawn per private scalar, at least 256
    pub private_key_bits: usize,
    /// Generator used for private scalars
    pub random_source: RandomSourceKind,
    /// Reject peer points that are not on the curve
    pub validate_peer_points: bool,
    /// Per-connection read/write timeout; unset waits forever
    pub io_timeout_secs: Option<u64>,
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_ADDR.to_string(),
            server_addr: DEFAULT_ADDR.to_string(),
            private_key_bits: DEFAULT_PRIVATE_KEY_BITS,
            random_source: RandomSourceKind::Os,
            validate_peer_points: false,
            io_timeout_secs: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load from the file named by `DHEC_CONFIG`, or use the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_optional_path(std::env::var_os(CONFIG_ENV))
    }

    fn from_optional_path(path: Option<OsString>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text, &path.display().to_string())
    }

    /// Parse and validate TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Self::parse(text, "<inline>")
    }

    fn parse(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.listen_addr.trim().is_empty() {
            return Err(invalid("listen_addr", "must not be empty"));
        }
        if self.server_addr.trim().is_empty() {
            return Err(invalid("server_addr", "must not be empty"));
        }
        if self.private_key_bits < MIN_PRIVATE_KEY_BITS {
            return Err(invalid(
                "private_key_bits",
                format!("must be at least {}", MIN_PRIVATE_KEY_BITS),
            ));
        }
        if self.io_timeout_secs == Some(0) {
            return Err(invalid("io_timeout_secs", "must be positive when set"));
        }
        self.log_level()?;
        Ok(())
    }

    /// Replace the server bind address.
    pub fn with_listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.listen_addr = addr.into();
        self
    }

    /// Replace the address the client dials.
    pub fn with_server_addr(mut self, addr: impl Into<String>) -> Self {
        self.server_addr = addr.into();
        self
    }

    /// Replace the random source kind.
    pub fn with_random_source(mut self, kind: RandomSourceKind) -> Self {
        self.random_source = kind;
        self
    }

    /// Turn peer point validation on or off.
    pub fn with_validate_peer_points(mut self, validate: bool) -> Self {
        self.validate_peer_points = validate;
        self
    }

    /// Replace the per-connection timeout.
    pub fn with_io_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.io_timeout_secs = secs;
        self
    }

    /// The configured log level.
    pub fn log_level(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| invalid("log_level", format!("unknown level {:?}", self.log_level)))
    }

    /// A fresh random source of the configured kind.
    pub fn random_source(&self) -> Box<dyn RandomSource + Send> {
        match self.random_source {
            RandomSourceKind::Os => Box::new(RngSource::os()),
            RandomSourceKind::Openssl => Box::new(CommandSource::openssl()),
        }
    }

    /// Handshake settings derived from this config.
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            validate_peer_points: self.validate_peer_points,
            private_key_bits: self.private_key_bits,
        }
    }

    /// Connection settings derived from this config.
    pub fn transport_options(&self) -> TransportOptions {
        TransportOptions {
            io_timeout: self.io_timeout_secs.map(Duration::from_secs),
            session: self.session_options(),
        }
    }
}
