//! Fixture files written out for manual grading.
//!
//! A [`Fixture`] is a named text file with fixed content that a grading run
//! drops into the working directory so a grader has something concrete to run
//! the student's program against.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the grep lab fixture.
pub const GREP_FIXTURE_NAME: &str = "grep_test_file.txt";

/// Sample input for the grep lab: six lines mixing case variants and a
/// pattern occurrence. "test pattern here" sits on line 5.
pub const GREP_FIXTURE_CONTENT: &str = "hello world
this is a test
Hello World
another line
test pattern here
no match line
";

/// A named text file with fixed content, written as a grading aid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    name: String,
    content: String,
}

/// Error types for fixture creation
#[derive(thiserror::Error, Debug)]
pub enum FixtureError {
    #[error("{path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Fixture {
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// The sample file for the grep take-home lab.
    #[must_use]
    pub fn grep_lab() -> Self {
        Self::new(GREP_FIXTURE_NAME, GREP_FIXTURE_CONTENT)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of content lines in the fixture.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }

    /// Write the fixture into `dir`, overwriting any existing file of the
    /// same name. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns `FixtureError::Write` if the file cannot be created
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, FixtureError> {
        let path = dir.join(&self.name);
        fs::write(&path, &self.content).map_err(|source| FixtureError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
