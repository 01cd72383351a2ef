//! Puzzle solutions with automatic registration
//!
//! One module per year and day, `year_YYYY/dayDD/mod.rs`, next to the day's
//! `example.txt` and `input.txt`. `aoc create` scaffolds new days from
//! `templates/day.rs.jinja` and appends the module declarations below.

pub mod year_2023;
