//! Core solver trait and related types

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data
///
/// This trait defines the shared data type and parsing logic for a solver,
/// providing clean separation between parsing and solving concerns.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
///             .collect()
///     }
/// }
/// ```
pub trait AocParser {
    /// The shared data structure that holds parsed input and intermediate results
    type SharedData;

    /// Parse the input string into the shared data structure.
    fn parse(input: &str) -> Result<Self::SharedData, ParseError>;
}

/// Core trait that all puzzle solvers must implement.
///
/// Extends `AocParser` to inherit `SharedData` type and `parse()` function.
/// Each part returns `Ok(None)` until it is implemented; the runner treats
/// such parts as not yet solved and never submits them.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData = Vec<i32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
///         input.lines()
///             .map(|line| line.parse().map_err(|_|
///                 ParseError::InvalidFormat("Expected integer".to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData, part: u8) -> Result<Option<String>, SolveError> {
///         match part {
///             1 => Ok(Some(shared.iter().sum::<i32>().to_string())),
///             2 => Ok(None),
///             _ => Err(SolveError::PartOutOfRange(part)),
///         }
///     }
/// }
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data (parsed input and intermediate results)
    /// * `part` - The part number (1, 2, etc.)
    ///
    /// # Returns
    /// * `Ok(Some(answer))` - The answer for this part
    /// * `Ok(None)` - The part has no answer yet
    /// * `Err(SolveError)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData, part: u8) -> Result<Option<String>, SolveError>;
}

pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData,
        part: u8,
    ) -> Result<Option<String>, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
