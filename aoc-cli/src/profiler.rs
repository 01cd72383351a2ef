//! Timing of a solve run

use aoc_solver::{DynSolver, SolveError, SolveResult};
use chrono::TimeDelta;
use std::time::{Duration, Instant};

/// Timing collected around one solve call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileReport {
    /// Time spent parsing the data file
    pub parse: TimeDelta,
    /// `(task, duration)` for every task, ascending
    pub tasks: Vec<(u8, TimeDelta)>,
    /// Wall-clock time of the whole solve call
    pub wall: Duration,
}

impl ProfileReport {
    /// Sum of parse and task durations
    pub fn total_compute(&self) -> TimeDelta {
        self.parse + self.tasks.iter().map(|(_, d)| *d).sum::<TimeDelta>()
    }
}

/// Wraps `solve` and records timing without touching the result
pub struct Profiler;

impl Profiler {
    pub fn run(solver: &mut dyn DynSolver) -> Result<(SolveResult, ProfileReport), SolveError> {
        let started = Instant::now();
        let result = solver.solve()?;
        let wall = started.elapsed();

        let report = ProfileReport {
            parse: solver.parse_duration(),
            tasks: result
                .tasks()
                .iter()
                .map(|t| (t.task, t.duration()))
                .collect(),
            wall,
        };
        tracing::debug!(id = %solver.id(), ?wall, "profiled solve");
        Ok((result, report))
    }
}
