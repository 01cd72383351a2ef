//! CLI argument parsing using clap

use aoc_solver::DataType;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Data file a solver reads
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum DataTypeArg {
    /// Personal puzzle input (input.txt)
    #[default]
    Input,
    /// Example from the puzzle text (example.txt)
    Example,
}

impl From<DataTypeArg> for DataType {
    fn from(arg: DataTypeArg) -> Self {
        match arg {
            DataTypeArg::Input => DataType::Input,
            DataTypeArg::Example => DataType::Example,
        }
    }
}

/// Daily puzzle runner, scaffolder and submitter
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run, scaffold and submit Advent of Code solutions", version)]
pub struct Args {
    /// Root of the solutions tree (contains year_YYYY/dayDD directories)
    #[arg(
        long,
        global = true,
        env = "AOC_SOLUTIONS_DIR",
        default_value = "aoc-solutions/src"
    )]
    pub solutions_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the solution for a given day
    Run(RunArgs),
    /// Scaffold files to start a new solution
    Create(CreateArgs),
    /// List registered solvers
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Year of the solution to run (defaults to current year)
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i64>,

    /// Day of the solution to run, 1-25 (defaults to tomorrow's day of month)
    #[arg(short, long, allow_negative_numbers = true)]
    pub day: Option<i64>,

    /// Data type: 'input' for user data, or 'example' for example data
    #[arg(long, value_enum, default_value = "input")]
    pub data_type: DataTypeArg,

    /// Profile the solve call and print timing statistics
    #[arg(long)]
    pub benchmark: bool,

    /// Submit the answers (AOC_SESSION needed)
    #[arg(long)]
    pub submit: bool,
}

#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// Day of the solution to create, 1-25 (defaults to tomorrow's day of month)
    #[arg(short, long, allow_negative_numbers = true)]
    pub day: Option<i64>,

    /// Year of the solution to create (defaults to current year)
    #[arg(short, long, allow_negative_numbers = true)]
    pub year: Option<i64>,

    /// Template for the solver entry point
    #[arg(
        long,
        env = "AOC_TEMPLATE",
        default_value = "aoc-solutions/templates/day.rs.jinja"
    )]
    pub template: PathBuf,

    /// Overwrite an existing day without asking
    #[arg(long)]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only list solvers of this year
    #[arg(short, long)]
    pub year: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_defaults() {
        let args = Args::try_parse_from(["aoc", "run"]).unwrap();
        let Command::Run(run) = args.command else {
            panic!("Expected run command");
        };
        assert_eq!(run.year, None);
        assert_eq!(run.day, None);
        assert_eq!(run.data_type, DataTypeArg::Input);
        assert!(!run.benchmark);
        assert!(!run.submit);
    }

    #[test]
    fn test_negative_day_reaches_validation() {
        let args = Args::try_parse_from(["aoc", "run", "--day", "-3"]).unwrap();
        let Command::Run(run) = args.command else {
            panic!("Expected run command");
        };
        assert_eq!(run.day, Some(-3));
    }

    #[test]
    fn test_unknown_data_type_rejected() {
        assert!(Args::try_parse_from(["aoc", "run", "--data-type", "sample"]).is_err());
    }

    #[test]
    fn test_create_flags() {
        let args = Args::try_parse_from([
            "aoc", "--solutions-dir", "/tmp/s", "create", "--day", "5", "--year", "2023", "--yes",
        ])
        .unwrap();
        assert_eq!(args.solutions_dir, PathBuf::from("/tmp/s"));
        let Command::Create(create) = args.command else {
            panic!("Expected create command");
        };
        assert_eq!((create.year, create.day), (Some(2023), Some(5)));
        assert!(create.yes);
    }
}
