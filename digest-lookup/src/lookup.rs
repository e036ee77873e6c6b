use std::env::VarError;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::error::{ConfigError, InputError};
use crate::store::DigestStore;

/// Environment variable holding the simulated lookup latency in milliseconds.
pub const LATENCY_ENV: &str = "DIGEST_LOOKUP_LATENCY_MS";

/// Shortest candidate, in characters, the analyzer will look up.
///
/// Counted in Unicode scalar values, so astral-plane characters count once
/// rather than as two UTF-16 units.
pub const MIN_CANDIDATE_LEN: usize = 10;

/// Lookup service settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupConfig {
    /// Delay applied before every outcome is produced. Zero disables it.
    pub simulated_latency: Duration,
}

impl LookupConfig {
    pub fn with_latency(simulated_latency: Duration) -> Self {
        Self { simulated_latency }
    }

    /// Reads the config from [`LATENCY_ENV`], falling back to the default
    /// (no latency) when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_var(std::env::var(LATENCY_ENV))
    }

    fn from_var(var: Result<String, VarError>) -> Result<Self, ConfigError> {
        match var {
            Ok(value) => Ok(Self::with_latency(parse_latency(&value)?)),
            Err(VarError::NotPresent) => Ok(Self::default()),
            Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var: LATENCY_ENV }),
        }
    }
}

/// Parses a millisecond count as accepted by [`LATENCY_ENV`].
pub fn parse_latency(value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|source| ConfigError::InvalidLatency { value: value.to_string(), source })
}

/// Result of analyzing one candidate digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// `digest_hex` is the full stored key, which may be longer than the
    /// candidate that matched it.
    Found { digest_hex: String, password: String },
    NotFound,
    InputError(InputError),
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found { .. })
    }

    pub fn password(&self) -> Option<&str> {
        match self {
            LookupOutcome::Found { password, .. } => Some(password),
            _ => None,
        }
    }
}

/// Reverse lookup of candidate digests (full or prefix) against a shared store.
#[derive(Debug, Clone)]
pub struct LookupService {
    store: Arc<DigestStore>,
    config: LookupConfig,
}

impl LookupService {
    pub fn new(store: Arc<DigestStore>, config: LookupConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &Arc<DigestStore> {
        &self.store
    }

    /// Analyzes `candidate`, blocking the current thread for the configured
    /// latency first.
    ///
    /// Never fails: a miss is [`LookupOutcome::NotFound`] and a candidate
    /// shorter than [`MIN_CANDIDATE_LEN`] is [`LookupOutcome::InputError`].
    pub fn analyze(&self, candidate: &str) -> LookupOutcome {
        if !self.config.simulated_latency.is_zero() {
            std::thread::sleep(self.config.simulated_latency);
        }
        self.resolve(candidate)
    }

    /// Async form of [`analyze`](Self::analyze); waits on the tokio timer
    /// instead of blocking the thread.
    #[cfg(feature = "tokio")]
    pub async fn analyze_async(&self, candidate: &str) -> LookupOutcome {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }
        self.resolve(candidate)
    }

    /// Produces the outcome without any simulated latency.
    pub fn resolve(&self, candidate: &str) -> LookupOutcome {
        if candidate.chars().count() < MIN_CANDIDATE_LEN {
            debug!(len = candidate.len(), "rejecting short candidate");
            return LookupOutcome::InputError(InputError::TooShort { min: MIN_CANDIDATE_LEN });
        }

        match self.store.find_by_prefix(&candidate.to_lowercase()) {
            Some(record) => {
                debug!(candidate, digest = %record.digest_hex, "candidate matched");
                LookupOutcome::Found { digest_hex: record.digest_hex, password: record.password }
            }
            None => {
                debug!(candidate, "candidate not found");
                LookupOutcome::NotFound
            }
        }
    }
}
