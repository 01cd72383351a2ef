//! Configuration resolution from CLI args and environment

use crate::error::RemoteError;
use aoc_solver::{PuzzleError, PuzzleId, PuzzleLayout};
use chrono::{Datelike, Local, NaiveDate};
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Environment variable holding the session cookie
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Resolved runtime configuration shared by all commands
pub struct Config {
    /// Layout of the solutions tree
    pub layout: PuzzleLayout,
    /// Local date used for year/day defaults
    pub today: NaiveDate,
}

impl Config {
    /// Build config from the global CLI args
    pub fn new(solutions_dir: &Path) -> Self {
        Config {
            layout: PuzzleLayout::new(expand_tilde(solutions_dir)),
            today: Local::now().date_naive(),
        }
    }

    /// Resolve the puzzle a command applies to
    pub fn puzzle(&self, year: Option<i64>, day: Option<i64>) -> Result<PuzzleId, PuzzleError> {
        resolve_puzzle(year, day, self.today)
    }
}

/// Apply the date defaults and validate
///
/// The default day is tomorrow's day of month without calendar rollover:
/// on the 25th it is 26 and on the 31st it is 32, both rejected.
pub fn resolve_puzzle(
    year: Option<i64>,
    day: Option<i64>,
    today: NaiveDate,
) -> Result<PuzzleId, PuzzleError> {
    let year = year.unwrap_or_else(|| i64::from(today.year()));
    let day = day.unwrap_or_else(|| i64::from(today.day()) + 1);
    PuzzleId::new(year, day)
}

/// Expand ~ to home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}

/// Session token from the environment, if set and non-empty
pub fn env_session() -> Option<Zeroizing<String>> {
    std::env::var(SESSION_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(Zeroizing::new)
}

/// Prompt user for session token
pub fn prompt_session(reason: &str) -> Result<Zeroizing<String>, RemoteError> {
    println!("{}", reason);
    let s = rpassword::prompt_password("Enter AOC session key: ").map_err(RemoteError::Prompt)?;
    if s.trim().is_empty() {
        return Err(RemoteError::MissingSession);
    }
    Ok(Zeroizing::new(s.trim().to_string()))
}
