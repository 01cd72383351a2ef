//! Solver instance implementation

use crate::error::{ParseError, SolveError};
use crate::puzzle::PuzzleId;
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};
use std::fmt;

/// Answer of a single task, including timing information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResult {
    /// 1-based task number
    pub task: u8,
    /// The answer, or `None` if the task is not solved yet
    pub answer: Option<String>,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl TaskResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Ordered per-task answers of one solve run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveResult {
    tasks: Vec<TaskResult>,
}

impl SolveResult {
    /// Build a result from task results in ascending task order
    pub fn new(tasks: Vec<TaskResult>) -> Self {
        Self { tasks }
    }

    /// All task results, ascending
    pub fn tasks(&self) -> &[TaskResult] {
        &self.tasks
    }

    /// Answers only, in task order
    pub fn answers(&self) -> Vec<Option<&str>> {
        self.tasks.iter().map(|t| t.answer.as_deref()).collect()
    }

    /// Tasks that produced an answer, as `(task, answer)` pairs
    pub fn solved(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.tasks
            .iter()
            .filter_map(|t| t.answer.as_deref().map(|a| (t.task, a)))
    }
}

impl fmt::Display for SolveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, task) in self.tasks.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match &task.answer {
                Some(answer) => f.write_str(answer)?,
                None => f.write_str("None")?,
            }
        }
        f.write_str("]")
    }
}

/// A solver instance for a specific puzzle with shared data
///
/// Manages the state for solving a specific year-day problem, including:
/// - The shared data (parsed input and intermediate results)
/// - Parse timing information (start and end timestamps)
pub struct SolverInstance<S: Solver> {
    id: PuzzleId,
    shared: S::SharedData,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<S: Solver> SolverInstance<S> {
    /// Create a new solver instance by parsing input
    ///
    /// Records parse timing internally.
    pub fn new(id: PuzzleId, input: &str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            id,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// The concrete `SolverInstance<S>` implements this trait, allowing the
/// registry to hand out different solver types uniformly.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn example(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     let result = solver.solve()?;
///     println!("Results: {}", result);
///     println!("Parse took {:?}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve every part in ascending order
    fn solve(&mut self) -> Result<SolveResult, SolveError> {
        let tasks = (1..=self.parts())
            .map(|part| self.solve_task(part))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SolveResult::new(tasks))
    }

    /// Solve a single part with timing
    fn solve_task(&mut self, part: u8) -> Result<TaskResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Get the puzzle this solver was built for
    fn id(&self) -> PuzzleId;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<S> {
    fn solve_task(&mut self, part: u8) -> Result<TaskResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(TaskResult {
            task: part,
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn id(&self) -> PuzzleId {
        self.id
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}
