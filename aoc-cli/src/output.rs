//! Output formatting for command results

use crate::profiler::ProfileReport;
use crate::remote::SubmissionOutcome;
use aoc_solver::{PuzzleId, SolveResult, SolverInfo};
use chrono::TimeDelta;
use std::io::{self, Write};
use std::path::Path;

/// Writes user-facing messages for every command
pub struct OutputFormatter<W: Write> {
    out: W,
}

impl OutputFormatter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn print_run_header(&mut self, id: &PuzzleId, example: bool) -> io::Result<()> {
        writeln!(self.out, "Running puzzle solver for day {}...", id.day())?;
        if example {
            writeln!(self.out, "Computing example data...")?;
        }
        Ok(())
    }

    pub fn print_benchmark_notice(&mut self) -> io::Result<()> {
        writeln!(self.out, "Benchmark mode activated!")
    }

    pub fn print_result(&mut self, result: &SolveResult) -> io::Result<()> {
        writeln!(self.out, "Results : {}", result)
    }

    /// Parse time, per-task time and wall-clock time
    pub fn print_profile(&mut self, report: &ProfileReport) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- Profile ---")?;
        writeln!(self.out, "Parse: {}", format_duration(report.parse))?;
        for (task, duration) in &report.tasks {
            writeln!(self.out, "Task {}: {} (1 call)", task, format_duration(*duration))?;
        }
        writeln!(self.out, "Total compute: {}", format_duration(report.total_compute()))?;
        writeln!(self.out, "Elapsed wall-clock time: {}", format_std_duration(report.wall))
    }

    /// Print the message for a submission outcome; indeterminate ones stay silent
    pub fn print_outcome(&mut self, task: u8, outcome: SubmissionOutcome) -> io::Result<()> {
        match outcome {
            SubmissionOutcome::AlreadySolved => {
                writeln!(self.out, "Task {} has already been solved!", task)
            }
            SubmissionOutcome::RightAnswer => {
                writeln!(self.out, "Your answer for task {} is right!", task)
            }
            SubmissionOutcome::WrongAnswer => {
                writeln!(self.out, "Your answer for task {} is wrong!", task)
            }
            SubmissionOutcome::Indeterminate => Ok(()),
        }
    }

    pub fn print_folder_created(&mut self, id: &PuzzleId) -> io::Result<()> {
        writeln!(
            self.out,
            "Folder day{} created in year {}.",
            id.day_padded(),
            id.year()
        )
    }

    pub fn print_entry_created(&mut self, entry: &Path) -> io::Result<()> {
        let name = entry.file_name().unwrap_or(entry.as_os_str());
        writeln!(
            self.out,
            "File {} created successfully from template.",
            name.to_string_lossy()
        )
    }

    pub fn print_input_missing(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "Could not fetch puzzle input, created an empty input.txt"
        )
    }

    pub fn print_solver_list<'a>(
        &mut self,
        solvers: impl IntoIterator<Item = &'a SolverInfo>,
    ) -> io::Result<()> {
        let mut count = 0;
        for info in solvers {
            count += 1;
            if info.tags.is_empty() {
                writeln!(self.out, "{}/{:02}", info.year, info.day)?;
            } else {
                writeln!(
                    self.out,
                    "{}/{:02} [{}]",
                    info.year,
                    info.day,
                    info.tags.join(", ")
                )?;
            }
        }
        if count == 0 {
            writeln!(self.out, "No solvers registered.")?;
        }
        Ok(())
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn captured(f: impl FnOnce(&mut OutputFormatter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut output = OutputFormatter::new(Vec::new());
        f(&mut output).unwrap();
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
        assert_eq!(format_std_duration(Duration::from_micros(999)), "999µs");
    }

    #[test]
    fn test_outcome_messages() {
        let text = captured(|o| {
            o.print_outcome(1, SubmissionOutcome::AlreadySolved)?;
            o.print_outcome(2, SubmissionOutcome::RightAnswer)?;
            o.print_outcome(1, SubmissionOutcome::WrongAnswer)?;
            o.print_outcome(2, SubmissionOutcome::Indeterminate)
        });
        assert_eq!(
            text,
            "Task 1 has already been solved!\n\
             Your answer for task 2 is right!\n\
             Your answer for task 1 is wrong!\n"
        );
    }

    #[test]
    fn test_run_header() {
        let id = PuzzleId::new(2023, 7).unwrap();
        assert_eq!(
            captured(|o| o.print_run_header(&id, true)),
            "Running puzzle solver for day 7...\nComputing example data...\n"
        );
        assert_eq!(
            captured(|o| o.print_run_header(&id, false)),
            "Running puzzle solver for day 7...\n"
        );
    }

    #[test]
    fn test_solver_list() {
        let infos = [
            SolverInfo {
                year: 2023,
                day: 1,
                parts: 2,
                tags: &["strings"],
            },
            SolverInfo {
                year: 2023,
                day: 12,
                parts: 2,
                tags: &[],
            },
        ];
        assert_eq!(
            captured(|o| o.print_solver_list(&infos)),
            "2023/01 [strings]\n2023/12\n"
        );
        assert_eq!(
            captured(|o| o.print_solver_list(std::iter::empty())),
            "No solvers registered.\n"
        );
    }
}
