use aoc_solver::{AocParser, AutoRegisterSolver, ParseError, SolveError, Solver};

#[derive(AutoRegisterSolver)]
#[aoc(year = 2023, day = 1, tags = ["strings"])]
pub struct Day01;

const DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Day01 {
    type SharedData = Vec<String>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let lines: Vec<String> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".into()));
        }
        Ok(lines)
    }
}

impl Solver for Day01 {
    const PARTS: u8 = 2;

    fn solve_part(shared: &mut Self::SharedData, part: u8) -> Result<Option<String>, SolveError> {
        let spelled = match part {
            1 => false,
            2 => true,
            _ => return Err(SolveError::PartOutOfRange(part)),
        };
        shared
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                calibration_value(line, spelled)
                    .ok_or_else(|| anyhow::anyhow!("(line {}) no digit in '{}'", idx + 1, line))
            })
            .sum::<anyhow::Result<u32>>()
            .map(|total| Some(total.to_string()))
            .map_err(|e| SolveError::SolveFailed(e.into()))
    }
}

/// First and last digit of a line joined as a two-digit number
fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
    let digits: Vec<u32> = line
        .char_indices()
        .filter_map(|(start, _)| digit_at(&line[start..], spelled))
        .collect();
    Some(digits.first()? * 10 + digits.last()?)
}

fn digit_at(rest: &str, spelled: bool) -> Option<u32> {
    let first = rest.chars().next()?;
    if let Some(d) = first.to_digit(10) {
        return Some(d);
    }
    if !spelled {
        return None;
    }
    DIGIT_WORDS
        .iter()
        .position(|word| rest.starts_with(word))
        .map(|idx| idx as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_PART_2: &str = "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n4nineeightseven2\nzoneight234\n7pqrstsixteen\n";

    fn solve(input: &str, part: u8) -> Option<String> {
        let mut shared = Day01::parse(input).unwrap();
        Day01::solve_part(&mut shared, part).unwrap()
    }

    #[test]
    fn test_example_part_1() {
        let input = include_str!("example.txt");
        assert_eq!(solve(input, 1).as_deref(), Some("142"));
    }

    #[test]
    fn test_example_part_2() {
        assert_eq!(solve(EXAMPLE_PART_2, 2).as_deref(), Some("281"));
    }

    #[test]
    fn test_overlapping_words() {
        assert_eq!(calibration_value("oneight", true), Some(18));
        assert_eq!(calibration_value("oneight", false), None);
    }

    #[test]
    fn test_line_without_digit_fails() {
        let mut shared = Day01::parse("abc").unwrap();
        assert!(matches!(
            Day01::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }
}
