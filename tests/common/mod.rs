//! Utility helpers shared across integration tests.
#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::{Command, assert::Assert};
use rstest::fixture;

/// Build a `Vec<String>` from a list of string slices.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// A small letter with a font table and paragraph marks.
#[fixture]
pub fn letter() -> &'static str {
    "{\\rtf1\\ansi\\deff0{\\fonttbl{\\f0 Times;}}\n\
     \\pard Dear reader,\\par\n\
     \\par\n\
     This is a short letter.\\par\n\
     }"
}

/// Convert `input` in memory at the default width.
pub fn convert_str(input: &str) -> Vec<String> {
    rtf2txt::convert_to_lines(input.as_bytes()).expect("in-memory conversion cannot fail")
}

/// Write `content` to `name` inside `dir` and return the path.
pub fn write_rtf(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("failed to write RTF file");
    path
}

fn cli() -> Command {
    Command::cargo_bin("rtf2txt").expect("Failed to create cargo command for rtf2txt")
}

/// Run the binary with `args`, feeding `input` on standard input.
pub fn run_cli_with_stdin(args: &[&str], input: &str) -> Assert {
    cli().args(args).write_stdin(input).assert()
}

/// Run the binary with `args` and no standard input.
pub fn run_cli_with_args<I, S>(args: I) -> Assert
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    cli().args(args).assert()
}
