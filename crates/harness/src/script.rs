//! Demo script discovery and validation

use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{bail, Context, Result};
use regex_lite::Regex;

/// Location of the demo script relative to the repository root.
const SCRIPT_RELATIVE_PATH: &str = "scripts/print_numbers.py";

/// Pattern a script path must match before it is handed to the interpreter.
///
/// The harness only ever runs the bundled demo script; anything else passed
/// on the command line is rejected here rather than reaching `python`.
fn script_path_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\S+print_numbers[.]py$").expect("invalid script path pattern")
    })
}

/// Check that `path` points at the demo script.
pub fn validate_script_path(path: &Path) -> Result<()> {
    let text = path.to_string_lossy();
    if !script_path_pattern().is_match(&text) {
        bail!("provided script path does not match the expected filename, got: {text}");
    }
    Ok(())
}

/// Locate the demo script from the current directory.
///
/// The harness can be launched from the repository root, from a crate
/// directory, or from `target/`, so the search walks the current directory
/// and its ancestors looking for `scripts/print_numbers.py`.
pub fn find_script() -> Result<PathBuf> {
    let current = env::current_dir().context("failed to resolve current directory")?;

    for dir in current.ancestors() {
        let candidate = dir.join(SCRIPT_RELATIVE_PATH);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    bail!(
        "failed to find demo script ({SCRIPT_RELATIVE_PATH}) in {} or any parent directory",
        current.display()
    );
}
