//! Rubric CLI
//!
//! Command-line entry point for the grep take-home lab grading run.

use clap::{Arg, Command};
use rubric_checklist::Checklist;
use rubric_fixture::Fixture;
use rubric_scores::ScoreBook;
use std::path::{Path, PathBuf};
use std::process;

const GREP_BASIC: &str = "grep_basic";

fn main() {
    let matches = Command::new("rubric")
        .version("0.1.0")
        .about("Autograder harness for the grep take-home lab")
        .arg(
            Arg::new("dir")
                .short('d')
                .long("dir")
                .value_name("DIR")
                .help("Directory to write the grading fixture into")
                .num_args(1)
                .default_value("."),
        )
        .get_matches();

    let dir = matches
        .get_one::<String>("dir")
        .map_or_else(|| PathBuf::from("."), PathBuf::from);

    match run_grading(&dir) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Run every graded case, then emit the two report lines. Fixture trouble is
/// reported inline and never aborts the run.
fn run_grading(dir: &Path) -> Result<(), anyhow::Error> {
    let mut scores = ScoreBook::new();

    grade_grep_basic(&mut scores, dir);

    // The report must carry grep_basic even if the case never recorded it.
    scores.ensure(GREP_BASIC);

    for line in rubric_scores::report_lines(&scores)? {
        println!("{line}");
    }
    Ok(())
}

/// The one graded case: drop the sample file and print the checklist for the
/// grader. The score stays 0 until a grader verifies the checks by hand.
fn grade_grep_basic(scores: &mut ScoreBook, dir: &Path) {
    let fixture = Fixture::grep_lab();
    match fixture.write_to(dir) {
        Ok(path) => {
            scores.record(GREP_BASIC, 0);
            let shown = if dir == Path::new(".") {
                fixture.name().to_string()
            } else {
                path.display().to_string()
            };
            print!(
                "{}",
                Checklist::grep_manual_test().render(&shown, fixture.content())
            );
        }
        Err(e) => {
            scores.record(GREP_BASIC, 0);
            println!("Error creating test file: {e}");
        }
    }
}
