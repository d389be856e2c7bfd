use serde::{Deserialize, Deserializer};
use std::{
    fs,
    path::Path,
    time::Duration
};

use crate::errors::ConfigError;

/// How long a token stays valid after it is issued.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// How far in the future a token's issue time may lie, to tolerate a
/// verifier whose clock is behind the issuer's.
pub const DEFAULT_SKEW: Duration = Duration::from_secs(60);

/// How the MAC is rendered inside the token payload.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SignatureEncoding {
    /// The raw MAC bytes, as issued by existing deployments.
    #[default]
    Raw,
    /// Lowercase hex; never contains the separator.
    Hex
}

fn secs<'de, D>(d: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>
{
    u64::deserialize(d).map(Duration::from_secs)
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn default_skew() -> Duration {
    DEFAULT_SKEW
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(
        rename = "timeout_secs",
        default = "default_timeout",
        deserialize_with = "secs"
    )]
    pub timeout: Duration,
    #[serde(
        rename = "skew_secs",
        default = "default_skew",
        deserialize_with = "secs"
    )]
    pub skew: Duration,
    #[serde(default)]
    pub signature_encoding: SignatureEncoding
}

impl Default for Config {
    fn default() -> Self {
        Config {
            timeout: DEFAULT_TIMEOUT,
            skew: DEFAULT_SKEW,
            signature_encoding: SignatureEncoding::default()
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_toml_str(&fs::read_to_string(path)?)
    }

    /// Rejects a zero timeout, under which no token would ever be valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}
