extern crate chrono;

use crate::client::submission::ProblemId;
use chrono::Local;
use std::{
    fs::{self, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

const DEFAULT_EXTENSION: &str = "txt";
const EXACT_EXTENSIONS: [(&str, &str); 4] = [
    ("d", "d"),
    ("go", "go"),
    ("scala", "scala"),
    ("node.js", "js"),
];
// Matched in order against the lowercased language name.
const SUBSTRING_EXTENSIONS: [(&str, &str); 13] = [
    ("c++", "cpp"),
    ("gcc", "cpp"),
    ("clang", "cpp"),
    ("python", "py"),
    ("pypy", "py"),
    ("java", "java"),
    ("kotlin", "kt"),
    ("rust", "rs"),
    ("c#", "cs"),
    ("pascal", "pas"),
    ("javascript", "js"),
    ("ruby", "rb"),
    ("haskell", "hs"),
];

pub fn extension_for(language: &str) -> &'static str {
    let language = language.to_lowercase();
    for (name, ext) in &EXACT_EXTENSIONS {
        if language == *name {
            return ext;
        }
    }
    for (needle, ext) in &SUBSTRING_EXTENSIONS {
        if language.contains(needle) {
            return ext;
        }
    }
    DEFAULT_EXTENSION
}

pub fn write_solution(
    out_dir: &Path,
    id: &ProblemId,
    language: &str,
    source: &str,
) -> io::Result<PathBuf> {
    let path = out_dir.join(format!("{}.{}", id, extension_for(language)));
    fs::write(&path, source)?;
    Ok(path)
}

pub fn append_log(log_path: &Path, id: &ProblemId, name: Option<&str>) -> io::Result<()> {
    let mut log = OpenOptions::new().create(true).append(true).open(log_path)?;
    writeln!(
        log,
        "{}\t{}\t{}",
        id,
        name.unwrap_or("-"),
        Local::now().format("%Y-%m-%d %H:%M:%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn maps_languages_to_extensions() {
        assert_eq!(extension_for("GNU C++17"), "cpp");
        assert_eq!(extension_for("GNU GCC C11 5.1.0"), "cpp");
        assert_eq!(extension_for("Python 3"), "py");
        assert_eq!(extension_for("PyPy 3-64"), "py");
        assert_eq!(extension_for("Java 11"), "java");
        assert_eq!(extension_for("Rust 2021"), "rs");
        assert_eq!(extension_for("Kotlin 1.6"), "kt");
    }

    #[test]
    fn exact_match_wins_over_substring() {
        // "Go" must not fall through to the default, and the bare name
        // table is consulted before any substring rule.
        assert_eq!(extension_for("Go"), "go");
        assert_eq!(extension_for("D"), "d");
        assert_eq!(extension_for("Node.js"), "js");
    }

    #[test]
    fn unknown_language_defaults_to_txt() {
        assert_eq!(extension_for("Secret 2021 language"), "txt");
        assert_eq!(extension_for(""), "txt");
    }

    #[test]
    fn writes_solution_file() {
        let dir = tempdir().unwrap();
        let id = ProblemId::new(100, "A");
        let path = write_solution(dir.path(), &id, "GNU C++17", "int main() {}\n").unwrap();
        assert_eq!(path, dir.path().join("100_A.cpp"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "int main() {}\n");
    }

    #[test]
    fn log_lines_accumulate() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("archive.log");
        append_log(&log, &ProblemId::new(1, "A"), Some("Theatre Square")).unwrap();
        append_log(&log, &ProblemId::new(1, "B"), None).unwrap();
        let contents = fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1_A\tTheatre Square\t"));
        assert!(lines[1].starts_with("1_B\t-\t"));
    }
}
