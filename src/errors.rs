use std::{
    io,
    num::ParseIntError,
    str::Utf8Error
};
use thiserror::Error;

/// Why a token was refused.
///
/// Callers only ever see `false`; this exists so the verifier can log the
/// reason.
#[derive(Debug, Error)]
pub enum Rejection {
    #[error("base64 decoding failed")]
    Decode(#[from] base64::DecodeError),
    #[error("missing separator")]
    MissingSeparator,
    #[error("timestamp is not UTF-8")]
    TimestampEncoding(#[from] Utf8Error),
    #[error("timestamp parsing failed")]
    Timestamp(#[from] ParseIntError),
    #[error("token expired {age}ns after issue")]
    Expired { age: i64 },
    #[error("token issued {ahead}ns in the future")]
    FromFuture { ahead: i64 },
    #[error("token does not match")]
    Mismatch
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("timeout must be nonzero")]
    ZeroTimeout
}
