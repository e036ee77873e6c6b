//! Reverse lookup of SHA-256 password digests against a small in-memory
//! dictionary.
//!
//! The [`DigestStore`] maps lowercase hex digests to the passwords they were
//! computed from. It starts with a fixed set of [`SEED_RECORDS`] and grows as
//! callers register freshly generated digests. The [`LookupService`] resolves
//! a candidate digest, or any prefix of at least [`MIN_CANDIDATE_LEN`]
//! characters, to the first stored record it prefixes.
//!
//! ```
//! use std::sync::Arc;
//!
//! use digest_lookup::{DigestStore, LookupConfig, LookupOutcome, LookupService, generate};
//!
//! let store = Arc::new(DigestStore::seeded());
//! let service = LookupService::new(Arc::clone(&store), LookupConfig::default());
//!
//! let digest = generate("hunter2");
//! store.insert(digest.clone(), "hunter2");
//!
//! assert_eq!(service.analyze(&digest[..16]).password(), Some("hunter2"));
//! assert_eq!(service.analyze("doesnotexist000000"), LookupOutcome::NotFound);
//! ```
//!
//! # Features
//!
//! - `tokio`: async `analyze_async`/`generate_async` that wait on the tokio
//!   timer for the simulated latency instead of blocking the thread.

pub mod error;
pub mod generator;
pub mod lookup;
pub mod report;
pub mod session;
pub mod store;

pub use error::{ConfigError, InputError};
#[cfg(feature = "tokio")]
pub use generator::generate_async;
pub use generator::{DIGEST_HEX_LEN, DIGEST_LEN, digest, generate};
pub use lookup::{
    LATENCY_ENV, LookupConfig, LookupOutcome, LookupService, MIN_CANDIDATE_LEN, parse_latency,
};
pub use report::{AnalysisReport, AnalysisStatus};
pub use session::{AnalyzerState, GeneratorState, Session};
pub use store::{DigestRecord, DigestStore, SEED_RECORDS};

/// A seeded digest with a shared prefix, handy for trying out prefix lookups.
pub const SAMPLE_DIGEST: &str = "ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f";
