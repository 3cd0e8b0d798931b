//! Manual-verification checklists printed during a grading run.
//!
//! A [`Checklist`] is the human-readable block a grader works through by hand:
//! a title, numbered checks, and the expected observations for the sample
//! patterns. Rendering is pure string building; the CLI decides where the
//! text goes.

/// A titled list of manual checks plus expected observations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    title: String,
    items: Vec<String>,
    expected: Vec<String>,
}

impl Checklist {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            expected: Vec::new(),
        }
    }

    /// Append a numbered check. Numbering is assigned at render time.
    pub fn push_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Append an expected-observation note, rendered after the fixture echo.
    pub fn push_expected(&mut self, note: impl Into<String>) {
        self.expected.push(note.into());
    }

    /// The checklist for the grep take-home lab (2 marks, graded by hand).
    #[must_use]
    pub fn grep_manual_test() -> Self {
        let mut checklist = Self::new("Grep Manual Test (2 marks)");
        checklist.push_item("grep_search_file() reads file and finds matches");
        checklist.push_item("Pattern matching works (use grep_match_pattern)");
        checklist.push_item("-n flag adds line numbers correctly");
        checklist.push_item("-v flag inverts matches correctly");
        checklist.push_expected("Pattern 'test' should match lines 2, 5");
        checklist.push_expected("Pattern 'hello' (case-insensitive) should match lines 1, 3");
        checklist
    }

    /// Render the block printed to the grader.
    ///
    /// `fixture_path` is the file the run just wrote; `fixture_content` is
    /// echoed verbatim so the grader sees what the student's program was run
    /// against. `fixture_content` is expected to end with a newline.
    #[must_use]
    pub fn render(&self, fixture_path: &str, fixture_content: &str) -> String {
        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!("=== {} ===\n", self.title));
        out.push_str(&format!("Test file created: {fixture_path}\n"));
        out.push('\n');
        out.push_str("Manual verification checklist:\n");
        for (index, item) in self.items.iter().enumerate() {
            out.push_str(&format!("{}. {item}\n", index + 1));
        }
        out.push('\n');
        out.push_str("Test file content:\n");
        out.push_str(fixture_content);
        out.push('\n');
        for note in &self.expected {
            out.push_str(&format!("Expected: {note}\n"));
        }
        out
    }
}
