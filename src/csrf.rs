use chrono::{DateTime, Utc};

use crate::{
    clock::unix_nanos,
    config::Config,
    token::{generate_at_with, valid_at_with}
};

pub type Clock = fn() -> DateTime<Utc>;

#[derive(Clone)]
pub struct CsrfIssuer {
    key: Vec<u8>,
    config: Config,
    now: Clock
}

impl CsrfIssuer {
    pub fn new(key: &[u8]) -> Self {
        CsrfIssuer {
            key: key.to_vec(),
            config: Config::default(),
            now: Utc::now
        }
    }

    pub fn with_config(self, config: Config) -> Self {
        CsrfIssuer { config, ..self }
    }

    pub fn with_clock(self, now: Clock) -> Self {
        CsrfIssuer { now, ..self }
    }

    pub fn issue(&self, user_id: &str) -> String {
        self.issue_at(user_id, (self.now)())
    }

    pub fn issue_at(&self, user_id: &str, now: DateTime<Utc>) -> String {
        generate_at_with(
            &self.key,
            user_id,
            unix_nanos(&now),
            self.config.signature_encoding
        )
    }
}

#[derive(Clone)]
pub struct CsrfVerifier {
    key: Vec<u8>,
    config: Config,
    now: Clock
}

impl CsrfVerifier {
    pub fn new(key: &[u8]) -> Self {
        CsrfVerifier {
            key: key.to_vec(),
            config: Config::default(),
            now: Utc::now
        }
    }

    pub fn with_config(self, config: Config) -> Self {
        CsrfVerifier { config, ..self }
    }

    pub fn with_clock(self, now: Clock) -> Self {
        CsrfVerifier { now, ..self }
    }

    pub fn verify(&self, token: &str, user_id: &str) -> bool {
        self.verify_at(token, user_id, (self.now)())
    }

    pub fn verify_at(
        &self,
        token: &str,
        user_id: &str,
        now: DateTime<Utc>
    ) -> bool
    {
        valid_at_with(
            token,
            &self.key,
            user_id,
            unix_nanos(&now),
            &self.config
        )
    }
}
