//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::layout::PuzzleLayout;
use crate::puzzle::{DataType, FIRST_DAY, LAST_DAY, PuzzleId};
use std::collections::BTreeMap;
use std::io::ErrorKind;

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn Fn(PuzzleId, &str) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The puzzle year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
    /// Tags attached at registration
    pub tags: &'static [&'static str],
}

/// Factory entry with metadata
struct SolverEntry {
    factory: SolverFactory,
    info: SolverInfo,
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// The builder pattern allows for method chaining and ensures the registry
/// is immutable after construction. It also provides duplicate detection
/// during registration.
///
/// # Example
///
/// ```ignore
/// # use aoc_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register(2023, 1, 2, |id, input| { /* ... */ Ok(Box::new(/* solver */)) })
///     .unwrap()
///     .build();
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<(u16, u8), SolverEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a solver factory function for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate solver or day outside 1-25
    pub fn register<F>(
        self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: Fn(PuzzleId, &str) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync + 'static,
    {
        self.register_tagged(year, day, parts, &[], factory)
    }

    /// Register a solver factory with tags attached
    pub fn register_tagged<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: Fn(PuzzleId, &str) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync + 'static,
    {
        if !(FIRST_DAY..=LAST_DAY).contains(&day) {
            return Err(RegistrationError::InvalidDay(year, day));
        }
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        tracing::debug!(year, day, parts, "registered solver");
        self.solvers.insert(
            (year, day),
            SolverEntry {
                factory: Box::new(factory),
                info: SolverInfo {
                    year,
                    day,
                    parts,
                    tags,
                },
            },
        );
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// Only registers plugins for which the filter function returns `true`.
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// The registry maps (year, day) pairs to factory functions that can create
/// solver instances. Once built, it cannot be modified.
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), SolverEntry>,
}

impl SolverRegistry {
    /// Whether a solver is registered for the puzzle
    pub fn contains(&self, id: &PuzzleId) -> bool {
        self.solvers.contains_key(&(id.year(), id.day()))
    }

    /// Metadata of every registered solver, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = &SolverInfo> + '_ {
        self.solvers.values().map(|entry| &entry.info)
    }

    /// Create a solver instance from the data file selected by `data_type`
    ///
    /// Lookup happens before any file access, so an unknown puzzle reports
    /// `NotFound` even when its data directory is missing too.
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError::NotFound)` - No solver registered for the puzzle
    /// * `Err(SolverError::MissingDataFile)` - The selected data file is absent
    /// * `Err(SolverError::ParseError)` - The solver rejected the input
    pub fn create_solver(
        &self,
        id: PuzzleId,
        data_type: DataType,
        layout: &PuzzleLayout,
    ) -> Result<Box<dyn DynSolver>, SolverError> {
        let entry = self
            .solvers
            .get(&(id.year(), id.day()))
            .ok_or(SolverError::NotFound {
                year: id.year(),
                day: id.day(),
            })?;

        let path = layout.data_path(&id, data_type);
        let input = match std::fs::read_to_string(&path) {
            Ok(input) => input,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SolverError::MissingDataFile {
                    year: id.year(),
                    day: id.day(),
                    file_name: data_type.file_name(),
                    path,
                });
            }
            Err(source) => return Err(SolverError::Read { path, source }),
        };
        tracing::debug!(path = %path.display(), bytes = input.len(), "loaded puzzle data");

        (entry.factory)(id, &input).map_err(SolverError::ParseError)
    }

    /// Create a solver instance from in-memory input
    pub fn create_solver_from_str(
        &self,
        id: PuzzleId,
        input: &str,
    ) -> Result<Box<dyn DynSolver>, SolverError> {
        let entry = self
            .solvers
            .get(&(id.year(), id.day()))
            .ok_or(SolverError::NotFound {
                year: id.year(),
                day: id.day(),
            })?;

        (entry.factory)(id, input).map_err(SolverError::ParseError)
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// This trait provides a type-erased interface for solvers to self-register.
/// Unlike the `Solver` trait which has associated types, this trait has no
/// associated types, allowing for collection of different solver types in
/// a single container.
///
/// Any type implementing `Solver` gets this trait through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: crate::solver::Solver + Sync + 'static,
    S::SharedData: 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_tagged(year, day, S::PARTS, tags, |id, input| {
            Ok(Box::new(SolverInstance::<S>::new(id, input)?))
        })
    }
}

/// Plugin information for automatic solver registration
///
/// Submitted through `inventory` by `#[derive(AutoRegisterSolver)]`.
///
/// # Example
///
/// ```no_run
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData = ();
///
///     fn parse(_: &str) -> Result<Self::SharedData, ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut Self::SharedData, _: u8) -> Result<Option<String>, SolveError> {
///         Ok(None)
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The puzzle year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::{AocParser, Solver};
    use tempfile::TempDir;

    struct LineCount;

    impl AocParser for LineCount {
        type SharedData = usize;

        fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
            if input.trim().is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok(input.lines().count())
        }
    }

    impl Solver for LineCount {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData, part: u8) -> Result<Option<String>, SolveError> {
            match part {
                1 => Ok(Some(shared.to_string())),
                _ => Ok(None),
            }
        }
    }

    fn registry() -> SolverRegistry {
        LineCount
            .register_with(RegistryBuilder::new(), 2023, 4, &["test"])
            .unwrap()
            .build()
    }

    #[test]
    fn test_duplicate_registration() {
        let builder = LineCount
            .register_with(RegistryBuilder::new(), 2023, 4, &[])
            .unwrap();
        let result = LineCount.register_with(builder, 2023, 4, &[]);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(2023, 4))
        ));
    }

    #[test]
    fn test_register_invalid_day() {
        let result = LineCount.register_with(RegistryBuilder::new(), 2023, 26, &[]);
        assert!(matches!(result, Err(RegistrationError::InvalidDay(2023, 26))));
    }

    #[test]
    fn test_not_found_before_file_access() {
        let temp = TempDir::new().unwrap();
        let layout = PuzzleLayout::new(temp.path());
        let id = PuzzleId::new(2015, 3).unwrap();

        match registry().create_solver(id, DataType::Input, &layout) {
            Err(SolverError::NotFound { year, day }) => assert_eq!((year, day), (2015, 3)),
            _ => panic!("Expected NotFound"),
        }
    }

    #[test]
    fn test_missing_data_file_names_file() {
        let temp = TempDir::new().unwrap();
        let layout = PuzzleLayout::new(temp.path());
        let id = PuzzleId::new(2023, 4).unwrap();

        let err = registry()
            .create_solver(id, DataType::Example, &layout)
            .err()
            .expect("Expected missing file error");
        assert!(matches!(
            err,
            SolverError::MissingDataFile {
                file_name: "example.txt",
                ..
            }
        ));
        assert!(err.to_string().contains("example.txt"));
    }

    #[test]
    fn test_create_from_data_file() {
        let temp = TempDir::new().unwrap();
        let layout = PuzzleLayout::new(temp.path());
        let id = PuzzleId::new(2023, 4).unwrap();
        std::fs::create_dir_all(layout.day_dir(&id)).unwrap();
        std::fs::write(layout.data_path(&id, DataType::Input), "a\nb\nc\n").unwrap();

        let mut solver = registry()
            .create_solver(id, DataType::Input, &layout)
            .unwrap();
        let result = solver.solve().unwrap();
        assert_eq!(result.answers(), vec![Some("3"), None]);
    }

    #[test]
    fn test_iter_info_sorted() {
        let builder = LineCount
            .register_with(RegistryBuilder::new(), 2024, 2, &[])
            .unwrap();
        let builder = LineCount.register_with(builder, 2023, 9, &[]).unwrap();
        let builder = LineCount.register_with(builder, 2023, 1, &["x"]).unwrap();
        let registry = builder.build();

        let keys: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(keys, vec![(2023, 1), (2023, 9), (2024, 2)]);
        assert_eq!(registry.iter_info().next().unwrap().tags, &["x"]);
        assert!(registry.contains(&PuzzleId::new(2024, 2).unwrap()));
    }
}
