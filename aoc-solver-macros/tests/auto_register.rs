use aoc_solver::{AocParser, AutoRegisterSolver, ParseError, PuzzleId, RegistryBuilder, SolveError, Solver};

#[derive(AutoRegisterSolver)]
#[aoc(year = 2016, day = 24, tags = ["macro", "test"])]
struct TaggedSolver;

impl AocParser for TaggedSolver {
    type SharedData = Vec<i32>;

    fn parse(input: &str) -> Result<Vec<i32>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl Solver for TaggedSolver {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Vec<i32>, part: u8) -> Result<Option<String>, SolveError> {
        match part {
            1 => Ok(Some(shared.iter().sum::<i32>().to_string())),
            2 => Ok(None),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

#[derive(AutoRegisterSolver)]
#[aoc(year = 2016, day = 25)]
struct UntaggedSolver;

impl AocParser for UntaggedSolver {
    type SharedData = ();

    fn parse(_input: &str) -> Result<(), ParseError> {
        Ok(())
    }
}

impl Solver for UntaggedSolver {
    const PARTS: u8 = 1;

    fn solve_part(_shared: &mut (), _part: u8) -> Result<Option<String>, SolveError> {
        Ok(Some("done".into()))
    }
}

#[test]
fn test_plugins_are_collected() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("plugins register")
        .build();

    let id = PuzzleId::new(2016, 24).unwrap();
    assert!(registry.contains(&id));

    let mut solver = registry
        .create_solver_from_str(id, "2\n3\n4")
        .expect("Failed to create solver");
    let result = solver.solve().expect("Failed to solve");
    assert_eq!(result.answers(), vec![Some("9"), None]);
}

#[test]
fn test_plugin_metadata() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let tagged = registry
        .iter_info()
        .find(|info| (info.year, info.day) == (2016, 24))
        .expect("tagged solver registered");
    assert_eq!(tagged.parts, 2);
    assert_eq!(tagged.tags, &["macro", "test"]);

    let untagged = registry
        .iter_info()
        .find(|info| (info.year, info.day) == (2016, 25))
        .expect("untagged solver registered");
    assert!(untagged.tags.is_empty());
}

#[test]
fn test_filtered_plugins() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro"))
        .unwrap()
        .build();

    assert!(registry.contains(&PuzzleId::new(2016, 24).unwrap()));
    assert!(!registry.contains(&PuzzleId::new(2016, 25).unwrap()));
}
