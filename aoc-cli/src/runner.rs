//! The `run` command: resolve, solve, print and optionally submit

use crate::error::CliError;
use crate::output::OutputFormatter;
use crate::profiler::Profiler;
use crate::remote::AnswerSubmitter;
use aoc_solver::{DataType, PuzzleId, PuzzleLayout, SolveResult, SolverRegistry};
use std::io::{self, Write};

/// A validated `run` invocation
#[derive(Debug, Clone, Copy)]
pub struct RunRequest {
    pub id: PuzzleId,
    pub data_type: DataType,
    pub benchmark: bool,
    pub submit: bool,
}

/// Executes registered solvers against the solutions tree
pub struct Runner<'a> {
    registry: &'a SolverRegistry,
    layout: &'a PuzzleLayout,
}

impl<'a> Runner<'a> {
    pub fn new(registry: &'a SolverRegistry, layout: &'a PuzzleLayout) -> Self {
        Self { registry, layout }
    }

    /// Run one puzzle end to end
    ///
    /// Lookup, data loading and parsing abort before anything is printed.
    /// The result is always printed before the submission check, so an
    /// example run with `submit` shows its answers and then fails.
    pub fn run<W: Write>(
        &self,
        request: &RunRequest,
        submitter: &dyn AnswerSubmitter,
        output: &mut OutputFormatter<W>,
    ) -> Result<SolveResult, CliError> {
        let mut solver = self
            .registry
            .create_solver(request.id, request.data_type, self.layout)?;

        output.print_run_header(&request.id, request.data_type == DataType::Example)?;

        let result = if request.benchmark {
            output.print_benchmark_notice()?;
            let (result, report) = Profiler::run(solver.as_mut())?;
            output.print_result(&result)?;
            output.print_profile(&report)?;
            result
        } else {
            let result = solver.solve()?;
            output.print_result(&result)?;
            result
        };

        if request.submit {
            if !request.data_type.is_submittable() {
                return Err(CliError::SubmitOnExample);
            }
            submit_all(request.id, &result, submitter, output)?;
        }

        Ok(result)
    }
}

/// Submit every answered task in ascending order, skipping unsolved ones
pub fn submit_all<W: Write>(
    id: PuzzleId,
    result: &SolveResult,
    submitter: &dyn AnswerSubmitter,
    output: &mut OutputFormatter<W>,
) -> io::Result<()> {
    for (task, answer) in result.solved() {
        let outcome = submitter.submit(id, task, answer);
        tracing::debug!(%id, task, ?outcome, "submitted answer");
        output.print_outcome(task, outcome)?;
    }
    Ok(())
}
