use std::fmt;

use serde::Serialize;

use crate::lookup::LookupOutcome;

/// Lifecycle of an analyzer request as seen by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Idle,
    Analyzing,
    Found,
    NotFound,
    Error,
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AnalysisStatus::Idle => "idle",
            AnalysisStatus::Analyzing => "analyzing",
            AnalysisStatus::Found => "found",
            AnalysisStatus::NotFound => "not_found",
            AnalysisStatus::Error => "error",
        };
        f.write_str(s)
    }
}

/// Renderable summary of one analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub status: AnalysisStatus,
    /// The stored full digest on a match, otherwise the candidate as entered.
    pub input_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub message: String,
}

impl AnalysisReport {
    pub fn new(candidate: &str, outcome: &LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Found { digest_hex, password } => Self {
                status: AnalysisStatus::Found,
                input_hash: digest_hex.clone(),
                password: Some(password.clone()),
                message: format!("Password found → {password}"),
            },
            LookupOutcome::NotFound => Self {
                status: AnalysisStatus::NotFound,
                input_hash: candidate.to_string(),
                password: None,
                message: "Password not found".to_string(),
            },
            LookupOutcome::InputError(err) => Self {
                status: AnalysisStatus::Error,
                input_hash: candidate.to_string(),
                password: None,
                message: err.to_string(),
            },
        }
    }
}
