use serde::{Deserialize, Serialize};

/// Verdict for a single login response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Success,
    Failure,
    /// Anti-CSRF or session problem; every later verdict would be wrong too.
    Indeterminate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

// Why a run stopped before enumerating every candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AbortReason {
    Transport { message: String },
    UnexpectedStatus { status: u16 },
    SessionInvalidated { username: String, password: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RunOutcome {
    Completed,
    /// Stopped after the first working pair (`--stop-on-success`).
    Stopped,
    Aborted { reason: AbortReason },
}

impl RunOutcome {
    pub fn is_aborted(&self) -> bool {
        matches!(self, RunOutcome::Aborted { .. })
    }
}

// Bruteforce run results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BruteforceResults {
    pub target: String,
    pub successful: Vec<Credential>,
    pub exhausted_users: Vec<String>,
    pub failed_count: usize,
    pub total_attempts: usize,
    pub outcome: RunOutcome,
}

impl BruteforceResults {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            successful: vec![],
            exhausted_users: vec![],
            failed_count: 0,
            total_attempts: 0,
            outcome: RunOutcome::Completed,
        }
    }
}

/// Raw HTTP answer to one login attempt.
#[derive(Debug, Clone)]
pub struct LoginResponse {
    pub status: u16,
    pub body: String,
}
