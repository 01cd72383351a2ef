//! Advent of Code Solver Library
//!
//! Framework for the per-day puzzle solvers: identity and data selection,
//! the on-disk layout of a day, the solver traits, and the registry that
//! maps `(year, day)` to a solver factory.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, ParseError, PuzzleId, RegisterableSolver, RegistryBuilder, SolveError, Solver};
//!
//! pub struct MyDay1;
//!
//! impl AocParser for MyDay1 {
//!     type SharedData = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
//!         input.lines()
//!             .map(|line| line.parse().map_err(|_|
//!                 ParseError::InvalidFormat("Expected integer".to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for MyDay1 {
//!     const PARTS: u8 = 2;
//!
//!     fn solve_part(shared: &mut Self::SharedData, part: u8) -> Result<Option<String>, SolveError> {
//!         match part {
//!             1 => Ok(Some(shared.iter().sum::<i32>().to_string())),
//!             2 => Ok(None),
//!             _ => Err(SolveError::PartOutOfRange(part)),
//!         }
//!     }
//! }
//!
//! let registry = MyDay1
//!     .register_with(RegistryBuilder::new(), 2023, 1, &[])
//!     .unwrap()
//!     .build();
//!
//! let id = PuzzleId::new(2023, 1).unwrap();
//! let mut solver = registry.create_solver_from_str(id, "1\n2\n3").unwrap();
//! let result = solver.solve().unwrap();
//! assert_eq!(result.answers(), vec![Some("6"), None]);
//! ```
//!
//! # Key Concepts
//!
//! ## Solver Trait
//!
//! The [`Solver`] trait is the core interface. Implement it to define:
//! - How to parse input (`SharedData` type and `parse()` method)
//! - How to solve each part (`solve_part()` method), returning `None` for
//!   parts that have no answer yet
//!
//! ## Registration
//!
//! Use `#[derive(AutoRegisterSolver)]` to register solvers at link time:
//! ```ignore
//! #[derive(AutoRegisterSolver)]
//! #[aoc(year = 2023, day = 1, tags = ["easy"])]
//! struct Day1Solver;
//! ```
//!
//! ## Layout
//!
//! [`PuzzleLayout`] resolves `year_YYYY/dayDD/{mod.rs,example.txt,input.txt}`
//! below a solutions root; the registry reads the selected data file from it.

mod error;
mod instance;
mod layout;
mod puzzle;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, PuzzleError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance, TaskResult};
pub use layout::{ENTRY_FILE, PuzzleLayout};
pub use puzzle::{DataType, FIRST_DAY, LAST_DAY, PuzzleId};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_solver_macros::AutoRegisterSolver;
