//! On-disk layout of the solutions tree

use crate::puzzle::{DataType, PuzzleId};
use std::path::{Path, PathBuf};

/// File name of a day's solver entry point
pub const ENTRY_FILE: &str = "mod.rs";

/// Resolves per-day paths below a solutions root
///
/// Directory structure: `{root}/year_{year}/day{day:02}/{mod.rs,example.txt,input.txt}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleLayout {
    root: PathBuf,
}

impl PuzzleLayout {
    /// Create a layout rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The solutions root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Module name of a year, e.g. `year_2023`
    pub fn year_module(year: u16) -> String {
        format!("year_{}", year)
    }

    /// Module name of a day, e.g. `day05`
    pub fn day_module(id: &PuzzleId) -> String {
        format!("day{}", id.day_padded())
    }

    /// Directory holding all days of a year
    pub fn year_dir(&self, year: u16) -> PathBuf {
        self.root.join(Self::year_module(year))
    }

    /// Directory holding a single day
    pub fn day_dir(&self, id: &PuzzleId) -> PathBuf {
        self.year_dir(id.year()).join(Self::day_module(id))
    }

    /// Solver entry point of a day
    pub fn entry_path(&self, id: &PuzzleId) -> PathBuf {
        self.day_dir(id).join(ENTRY_FILE)
    }

    /// Data file of a day for the given data type
    pub fn data_path(&self, id: &PuzzleId, data_type: DataType) -> PathBuf {
        self.day_dir(id).join(data_type.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_paths() {
        let layout = PuzzleLayout::new("/tmp/solutions");
        let id = PuzzleId::new(2023, 5).unwrap();

        assert_eq!(layout.year_dir(2023), Path::new("/tmp/solutions/year_2023"));
        assert_eq!(
            layout.day_dir(&id),
            Path::new("/tmp/solutions/year_2023/day05")
        );
        assert_eq!(
            layout.entry_path(&id),
            Path::new("/tmp/solutions/year_2023/day05/mod.rs")
        );
        assert_eq!(
            layout.data_path(&id, DataType::Example),
            Path::new("/tmp/solutions/year_2023/day05/example.txt")
        );
        assert_eq!(
            layout.data_path(&id, DataType::Input),
            Path::new("/tmp/solutions/year_2023/day05/input.txt")
        );
    }
}
