//! Per-caller request state for the analyzer and generator panels.
//!
//! Each request method takes `&mut self`, so a session never has more than one
//! request in flight. Separate sessions may share one store.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::generator::generate;
use crate::lookup::{LookupConfig, LookupOutcome, LookupService};
use crate::report::{AnalysisReport, AnalysisStatus};
use crate::store::DigestStore;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnalyzerState {
    #[default]
    Idle,
    Analyzing,
    Done(LookupOutcome),
}

impl AnalyzerState {
    pub fn status(&self) -> AnalysisStatus {
        match self {
            AnalyzerState::Idle => AnalysisStatus::Idle,
            AnalyzerState::Analyzing => AnalysisStatus::Analyzing,
            AnalyzerState::Done(LookupOutcome::Found { .. }) => AnalysisStatus::Found,
            AnalyzerState::Done(LookupOutcome::NotFound) => AnalysisStatus::NotFound,
            AnalyzerState::Done(LookupOutcome::InputError(_)) => AnalysisStatus::Error,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GeneratorState {
    #[default]
    Idle,
    Generating,
    Done(String),
}

/// Analyzer and generator bound to one store.
#[derive(Debug)]
pub struct Session {
    service: LookupService,
    analyzer: AnalyzerState,
    generator: GeneratorState,
}

impl Session {
    pub fn new(store: Arc<DigestStore>, config: LookupConfig) -> Self {
        Self {
            service: LookupService::new(store, config),
            analyzer: AnalyzerState::Idle,
            generator: GeneratorState::Idle,
        }
    }

    /// A session over a freshly seeded store.
    pub fn seeded(config: LookupConfig) -> Self {
        Self::new(Arc::new(DigestStore::seeded()), config)
    }

    pub fn store(&self) -> &Arc<DigestStore> {
        self.service.store()
    }

    pub fn analyzer(&self) -> &AnalyzerState {
        &self.analyzer
    }

    pub fn generator(&self) -> &GeneratorState {
        &self.generator
    }

    /// Runs one analysis, restarting from whatever state the analyzer was in.
    #[instrument(level = "debug", skip(self))]
    pub fn analyze(&mut self, candidate: &str) -> AnalysisReport {
        self.analyzer = AnalyzerState::Analyzing;
        let outcome = self.service.analyze(candidate);
        self.finish_analysis(candidate, outcome)
    }

    #[cfg(feature = "tokio")]
    #[instrument(level = "debug", skip(self))]
    pub async fn analyze_async(&mut self, candidate: &str) -> AnalysisReport {
        self.analyzer = AnalyzerState::Analyzing;
        let outcome = self.service.analyze_async(candidate).await;
        self.finish_analysis(candidate, outcome)
    }

    /// Generates the digest of `password` and registers the pair in the store
    /// when both are non-empty.
    pub fn generate(&mut self, password: &str) -> String {
        self.generator = GeneratorState::Generating;
        let digest = generate(password);
        self.finish_generation(password, digest)
    }

    #[cfg(feature = "tokio")]
    pub async fn generate_async(&mut self, password: &str) -> String {
        self.generator = GeneratorState::Generating;
        let digest = crate::generator::generate_async(password).await;
        self.finish_generation(password, digest)
    }

    fn finish_analysis(&mut self, candidate: &str, outcome: LookupOutcome) -> AnalysisReport {
        let report = AnalysisReport::new(candidate, &outcome);
        self.analyzer = AnalyzerState::Done(outcome);
        report
    }

    fn finish_generation(&mut self, password: &str, digest: String) -> String {
        if !digest.is_empty() && !password.is_empty() {
            self.service.store().insert(digest.clone(), password);
        } else {
            debug!("empty password, nothing registered");
        }
        self.generator = GeneratorState::Done(digest.clone());
        digest
    }
}
