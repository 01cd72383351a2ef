//! Error types for the solver library

use std::path::PathBuf;
use thiserror::Error;

/// Error type for an invalid puzzle identity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Day outside of the 1-25 advent window
    #[error("Day must be between 1 and 25 (got {0})")]
    InvalidDay(i64),
    /// Year that cannot name a puzzle series
    #[error("Year must be between 0 and {max} (got {0})", max = u16::MAX)]
    InvalidYear(i64),
}

/// Error type for parsing input data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is out of range (exceeds PARTS)
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error type for solver operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day
    #[error("No puzzle solver for day {day} of year {year} yet")]
    NotFound { year: u16, day: u8 },
    /// The data file selected for construction does not exist
    #[error("File {file_name} not found for day {day} of year {year}")]
    MissingDataFile {
        year: u16,
        day: u8,
        file_name: &'static str,
        path: PathBuf,
    },
    /// The data file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// Attempted to register a solver for a year-day combination that already exists
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Attempted to register a solver outside the 1-25 day window
    #[error("Cannot register solver for year {0} day {1}: day must be between 1 and 25")]
    InvalidDay(u16, u8),
}
