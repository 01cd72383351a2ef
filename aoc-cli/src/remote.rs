//! Remote collaborators: input fetching and answer submission

use crate::config;
use crate::error::RemoteError;
use aoc_http_client::{AocClient, SubmissionResult};
use aoc_solver::PuzzleId;
use std::cell::OnceCell;
use zeroize::Zeroizing;

/// Outcome of submitting one task, as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    AlreadySolved,
    RightAnswer,
    WrongAnswer,
    /// Throttled, unrecognized response, or the call failed
    Indeterminate,
}

impl From<&SubmissionResult> for SubmissionOutcome {
    fn from(result: &SubmissionResult) -> Self {
        match result {
            SubmissionResult::Correct => SubmissionOutcome::RightAnswer,
            SubmissionResult::Incorrect => SubmissionOutcome::WrongAnswer,
            SubmissionResult::AlreadyCompleted => SubmissionOutcome::AlreadySolved,
            SubmissionResult::Throttled { .. } | SubmissionResult::Unrecognized => {
                SubmissionOutcome::Indeterminate
            }
        }
    }
}

/// Retrieves the personal puzzle input
pub trait InputFetcher {
    fn fetch_input(&self, id: PuzzleId) -> Result<String, RemoteError>;
}

/// Posts an answer for one task
pub trait AnswerSubmitter {
    fn submit(&self, id: PuzzleId, task: u8, answer: &str) -> SubmissionOutcome;
}

/// HTTP-backed collaborator holding the session token
///
/// The session comes from `AOC_SESSION`. When it is missing, submission
/// prompts for it once; fetching fails instead. The HTTP client is only
/// built on the first remote call.
pub struct SessionClient {
    client: OnceCell<AocClient>,
    session: OnceCell<Zeroizing<String>>,
}

impl SessionClient {
    pub fn new(client: Option<AocClient>, session: Option<Zeroizing<String>>) -> Self {
        Self {
            client: client.map(OnceCell::from).unwrap_or_default(),
            session: session.map(OnceCell::from).unwrap_or_default(),
        }
    }

    /// Client with the default base URL and the session from the environment
    pub fn from_env() -> Self {
        Self::new(None, config::env_session())
    }

    fn client(&self) -> Result<&AocClient, RemoteError> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let client = AocClient::new()?;
        Ok(self.client.get_or_init(|| client))
    }

    fn session(&self, prompt: bool) -> Result<&str, RemoteError> {
        if let Some(session) = self.session.get() {
            return Ok(session.as_str());
        }
        if !prompt {
            return Err(RemoteError::MissingSession);
        }
        let session = config::prompt_session("Session token required for submission")?;
        Ok(self.session.get_or_init(|| session).as_str())
    }

    /// Whether the HTTP client has been built yet
    #[cfg(test)]
    fn is_connected(&self) -> bool {
        self.client.get().is_some()
    }
}

impl InputFetcher for SessionClient {
    fn fetch_input(&self, id: PuzzleId) -> Result<String, RemoteError> {
        let session = self.session(false)?;
        Ok(self.client()?.get_input(id.year(), id.day(), session)?)
    }
}

impl AnswerSubmitter for SessionClient {
    fn submit(&self, id: PuzzleId, task: u8, answer: &str) -> SubmissionOutcome {
        let result = self.session(true).and_then(|session| {
            self.client()?
                .submit_answer(id.year(), id.day(), task, answer, session)
                .map_err(RemoteError::from)
        });

        match result {
            Ok(SubmissionResult::Throttled { wait_time }) => {
                tracing::warn!(%id, task, ?wait_time, "submission throttled");
                SubmissionOutcome::Indeterminate
            }
            Ok(SubmissionResult::Unrecognized) => {
                tracing::warn!(%id, task, "unrecognized submission response");
                SubmissionOutcome::Indeterminate
            }
            Ok(result) => SubmissionOutcome::from(&result),
            Err(e) => {
                tracing::warn!(%id, task, error = %e, "submission failed");
                SubmissionOutcome::Indeterminate
            }
        }
    }
}
