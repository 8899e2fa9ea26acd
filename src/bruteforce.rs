use crate::classifier::ResponseClassifier;
use crate::error::{BruteError, Result};
use crate::http_client::LoginTransport;
use crate::models::{AbortReason, BruteforceResults, Classification, Credential, RunOutcome};
use crate::output::OutputFormatter;

/// Where the password loop for one user ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserState {
    Running,
    Solved,
    Exhausted,
}

pub struct BruteforceEngine<'a, T: LoginTransport> {
    transport: &'a T,
    classifier: &'a ResponseClassifier,
    stop_on_success: bool,
}

impl<'a, T: LoginTransport> BruteforceEngine<'a, T> {
    pub fn new(transport: &'a T, classifier: &'a ResponseClassifier, stop_on_success: bool) -> Self {
        Self {
            transport,
            classifier,
            stop_on_success,
        }
    }

    /// Tries every password for each user in turn. A success moves on to the
    /// next user; transport errors, non-200 answers and session problems end
    /// the whole run.
    pub fn bruteforce(&self, target: &str, users: &[String], passwords: &[String]) -> BruteforceResults {
        let mut results = BruteforceResults::new(target);

        for username in users {
            OutputFormatter::print_user_header(username);

            match self.attack_user(username, passwords, &mut results) {
                Ok(UserState::Solved) => {
                    if self.stop_on_success {
                        results.outcome = RunOutcome::Stopped;
                        return results;
                    }
                }
                Ok(_) => {
                    OutputFormatter::print_user_exhausted(username);
                    results.exhausted_users.push(username.clone());
                }
                Err(e) => {
                    let reason = Self::abort_reason(&e);
                    OutputFormatter::print_abort(&reason);
                    results.outcome = RunOutcome::Aborted { reason };
                    return results;
                }
            }
        }

        results
    }

    fn attack_user(
        &self,
        username: &str,
        passwords: &[String],
        results: &mut BruteforceResults,
    ) -> Result<UserState> {
        let mut state = UserState::Running;

        for password in passwords {
            results.total_attempts += 1;

            match self.try_login(username, password)? {
                Classification::Success => {
                    OutputFormatter::print_success(username, password);
                    results.successful.push(Credential {
                        username: username.to_string(),
                        password: password.clone(),
                    });
                    state = UserState::Solved;
                    break;
                }
                Classification::Failure => {
                    OutputFormatter::print_failure(password);
                    results.failed_count += 1;
                }
                Classification::Indeterminate => {
                    return Err(BruteError::SessionInvalidated {
                        username: username.to_string(),
                        password: password.clone(),
                    });
                }
            }
        }

        if state == UserState::Running {
            state = UserState::Exhausted;
        }
        Ok(state)
    }

    fn try_login(&self, username: &str, password: &str) -> Result<Classification> {
        let response = self.transport.submit(username, password)?;

        if response.status != 200 {
            return Err(BruteError::UnexpectedStatus(response.status));
        }

        Ok(self.classifier.classify(&response.body))
    }

    fn abort_reason(error: &BruteError) -> AbortReason {
        match error {
            BruteError::UnexpectedStatus(status) => AbortReason::UnexpectedStatus { status: *status },
            BruteError::SessionInvalidated { username, password } => AbortReason::SessionInvalidated {
                username: username.clone(),
                password: password.clone(),
            },
            other => AbortReason::Transport {
                message: other.to_string(),
            },
        }
    }
}
