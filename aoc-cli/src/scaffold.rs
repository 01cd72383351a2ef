//! The `create` command: scaffold a new day from the template

use crate::error::CliError;
use crate::output::OutputFormatter;
use crate::prompt::Confirm;
use crate::remote::InputFetcher;
use aoc_solver::{DataType, PuzzleId, PuzzleLayout};
use minijinja::{Environment, UndefinedBehavior, context};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Crate root of the solutions tree, receives `pub mod year_YYYY;`
const LIB_FILE: &str = "lib.rs";

/// Creates day directories in the solutions tree
pub struct Scaffolder<'a> {
    layout: &'a PuzzleLayout,
    template: PathBuf,
}

impl<'a> Scaffolder<'a> {
    pub fn new(layout: &'a PuzzleLayout, template: impl Into<PathBuf>) -> Self {
        Self {
            layout,
            template: template.into(),
        }
    }

    /// Scaffold the day directory for `id` and return its path
    ///
    /// The entry point is rendered before anything is removed. An existing
    /// day is only replaced after `confirm` accepts; the old directory is
    /// removed entirely. A failed fetch leaves `input.txt` empty.
    pub fn create<W: Write>(
        &self,
        id: PuzzleId,
        fetcher: &dyn InputFetcher,
        confirm: &dyn Confirm,
        output: &mut OutputFormatter<W>,
    ) -> Result<PathBuf, CliError> {
        fs::create_dir_all(self.layout.year_dir(id.year()))?;

        if !self.template.is_file() {
            return Err(CliError::TemplateMissing(self.template.clone()));
        }
        let template = fs::read_to_string(&self.template)?;
        let entry_source = render_entry(&template, &id)?;

        let day_dir = self.layout.day_dir(&id);
        if day_dir.exists() {
            let question = format!(
                "The folder for day{} already exists in year {}. Do you want to overwrite it?",
                id.day_padded(),
                id.year()
            );
            if !confirm.confirm(&question, false)? {
                return Err(CliError::UserDeclinedOverwrite {
                    year: id.year(),
                    day: id.day(),
                });
            }
            tracing::info!(path = %day_dir.display(), "removing existing day directory");
            fs::remove_dir_all(&day_dir)?;
        }

        fs::create_dir_all(&day_dir)?;
        output.print_folder_created(&id)?;

        let entry = self.layout.entry_path(&id);
        fs::write(&entry, entry_source)?;
        output.print_entry_created(&entry)?;

        fs::write(self.layout.data_path(&id, DataType::Example), "")?;

        let input = match fetcher.fetch_input(id) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!(%id, error = %e, "could not fetch puzzle input");
                String::new()
            }
        };
        if input.is_empty() {
            output.print_input_missing()?;
        }
        fs::write(self.layout.data_path(&id, DataType::Input), input)?;

        self.declare_modules(&id)?;
        Ok(day_dir)
    }

    /// Make the new day part of the solutions crate
    fn declare_modules(&self, id: &PuzzleId) -> Result<(), CliError> {
        let year_mod = self.layout.year_dir(id.year()).join(aoc_solver::ENTRY_FILE);
        ensure_module_declared(&year_mod, &PuzzleLayout::day_module(id))?;

        let lib = self.layout.root().join(LIB_FILE);
        if lib.is_file() {
            ensure_module_declared(&lib, &PuzzleLayout::year_module(id.year()))?;
        } else {
            tracing::warn!(path = %lib.display(), "no crate root, year module not declared");
        }
        Ok(())
    }
}

/// Render the solver entry point with the puzzle's named fields
fn render_entry(template: &str, id: &PuzzleId) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.render_str(
        template,
        context! {
            year => id.year(),
            day => id.day(),
            day_padded => id.day_padded(),
        },
    )
}

/// Append `pub mod <name>;` to `file` unless already declared
///
/// The file is created when missing.
pub fn ensure_module_declared(file: &Path, name: &str) -> std::io::Result<()> {
    let declaration = format!("pub mod {};", name);
    let existing = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e),
    };

    if existing.lines().any(|line| line.trim() == declaration) {
        return Ok(());
    }

    let mut content = existing;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    content.push_str(&declaration);
    content.push('\n');
    tracing::debug!(path = %file.display(), module = name, "declaring module");
    fs::write(file, content)
}
