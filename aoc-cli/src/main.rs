//! AOC CLI - run, scaffold and submit Advent of Code solutions

mod cli;
mod config;
mod error;
mod logging;
mod output;
mod profiler;
mod prompt;
mod remote;
mod runner;
mod scaffold;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::{Args, Command, CreateArgs, ListArgs, RunArgs};
use config::Config;
use error::CliError;
use output::OutputFormatter;
use prompt::{AssumeYes, Confirm, StdinConfirm};
use remote::SessionClient;
use runner::{RunRequest, Runner};
use scaffold::Scaffolder;

fn main() {
    logging::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::new(&args.solutions_dir);
    tracing::debug!(root = %config.layout.root().display(), today = %config.today, "resolved config");

    match args.command {
        Command::Run(run_args) => run_puzzle(&config, run_args),
        Command::Create(create_args) => create_day(&config, create_args),
        Command::List(list_args) => list_solvers(list_args),
    }
}

fn run_puzzle(config: &Config, args: RunArgs) -> Result<(), CliError> {
    // Validate before touching the registry or the filesystem
    let id = config.puzzle(args.year, args.day)?;
    let request = RunRequest {
        id,
        data_type: args.data_type.into(),
        benchmark: args.benchmark,
        submit: args.submit,
    };

    let registry = build_registry()?;
    let submitter = SessionClient::from_env();
    let mut output = OutputFormatter::stdout();

    Runner::new(&registry, &config.layout).run(&request, &submitter, &mut output)?;
    Ok(())
}

fn create_day(config: &Config, args: CreateArgs) -> Result<(), CliError> {
    let id = config.puzzle(args.year, args.day)?;

    let template = config::expand_tilde(&args.template);
    let fetcher = SessionClient::from_env();
    let confirm: &dyn Confirm = if args.yes { &AssumeYes } else { &StdinConfirm };
    let mut output = OutputFormatter::stdout();

    Scaffolder::new(&config.layout, template).create(id, &fetcher, confirm, &mut output)?;
    Ok(())
}

fn list_solvers(args: ListArgs) -> Result<(), CliError> {
    let registry = build_registry()?;
    let mut output = OutputFormatter::stdout();

    output.print_solver_list(
        registry
            .iter_info()
            .filter(|info| args.year.is_none_or(|year| info.year == year)),
    )?;
    Ok(())
}

/// Build the registry from every linked solver plugin
fn build_registry() -> Result<SolverRegistry, CliError> {
    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    tracing::debug!(solvers = registry.iter_info().count(), "built solver registry");
    Ok(registry)
}
