//! Error types for the CLI

use aoc_solver::{PuzzleError, SolverError};
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
///
/// Every variant aborts the current command with exit code 1.
#[derive(Error, Debug)]
pub enum CliError {
    /// Year or day outside the accepted range
    #[error("{0}")]
    InvalidPuzzle(#[from] PuzzleError),

    /// Solver lookup, data loading, parsing or solving failed
    #[error("{0}")]
    Solver(#[from] SolverError),

    /// Registration error while building the registry
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Scaffold template is not on disk
    #[error("Template {} not found", .0.display())]
    TemplateMissing(PathBuf),

    /// Scaffold template failed to render
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Submission requested for example data
    #[error("You can't send an answer for example data")]
    SubmitOnExample,

    /// Overwrite of an existing day was declined
    #[error("Operation cancelled. No changes made to day{day:02} of year {year}.")]
    UserDeclinedOverwrite { year: u16, day: u8 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<aoc_solver::SolveError> for CliError {
    fn from(e: aoc_solver::SolveError) -> Self {
        CliError::Solver(SolverError::SolveError(e))
    }
}

/// Errors of the remote collaborators (fetching and submitting)
#[derive(Error, Debug)]
pub enum RemoteError {
    /// No session token available
    #[error("No session token available (set AOC_SESSION)")]
    MissingSession,

    /// Reading the session token from the terminal failed
    #[error("Failed to read session: {0}")]
    Prompt(#[source] std::io::Error),

    /// HTTP client error
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),
}
