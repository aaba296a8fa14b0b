//! Integration tests for the `hs` binary
//!
//! Each test builds a throwaway project laid out like the real one:
//! `iwyu_progress.md` next to an `internal/core` source tree.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Project {
    _temp: TempDir,
    // Canonical, so paths match what the binary sees as its working directory
    dir: PathBuf,
}

impl Project {
    fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let dir = fs::canonicalize(temp.path()).unwrap();
        fs::create_dir_all(dir.join("internal/core/src")).unwrap();
        Self { _temp: temp, dir }
    }

    fn dir(&self) -> &Path {
        &self.dir
    }

    fn core(&self) -> PathBuf {
        self.dir().join("internal/core")
    }

    fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.core().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn checklist(&self, content: &str) {
        fs::write(self.dir().join("iwyu_progress.md"), content).unwrap();
    }

    fn hs(&self) -> Command {
        let mut cmd = Command::cargo_bin("hs").unwrap();
        cmd.current_dir(self.dir())
            .env("XDG_CONFIG_HOME", self.dir().join(".config"))
            .env("HOME", self.dir())
            .env_remove("RUST_LOG");
        cmd
    }
}

// =============================================================================
// Stats mode
// =============================================================================

#[test]
fn test_stats_counts() {
    let project = Project::new();
    project.checklist(
        "# IWYU progress\n\
         - [ ] /x/src/a.h\n\
         - [ ] /x/src/b.hpp\n\
         - [x] /x/src/c.h\n\
         - [x] /x/src/c.cpp\n\
         - [!] /x/src/bad.cpp\n",
    );

    project
        .hs()
        .arg("--stats")
        .assert()
        .success()
        .stdout("Unprocessed headers: 2\nProcessed headers: 1\nProblem files: 1\n");
}

#[test]
fn test_stats_empty_checklist_without_tree() {
    let project = Project::new();
    project.checklist("nothing tracked yet\n");
    fs::remove_dir_all(project.dir().join("internal")).unwrap();

    project
        .hs()
        .arg("--stats")
        .assert()
        .success()
        .stdout("Unprocessed headers: 0\nProcessed headers: 0\nProblem files: 0\n");
}

#[test]
fn test_stats_counts_paths_as_written() {
    let project = Project::new();
    project.checklist("- [ ] /x/a.h\n- [ ] /x//a.h\n- [ ] /x/./a.h\n");

    project
        .hs()
        .arg("--stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unprocessed headers: 3\n"));
}

// =============================================================================
// Batch mode
// =============================================================================

#[test]
fn test_batch_basic_scenario() {
    let project = Project::new();
    let a_h = project.write("src/a.h", "#pragma once\n");
    let b_h = project.write("src/b.h", "#pragma once\n");
    let a_cpp = project.write("src/a.cpp", "#include \"a.h\"\n");
    let bad_cpp = project.write("src/bad.cpp", "#include \"a.h\"\n");
    project.checklist(&format!(
        "- [ ] {}\n- [x] {}\n- [!] {}\n",
        a_h.display(),
        b_h.display(),
        bad_cpp.display()
    ));

    project
        .hs()
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total headers: 1"))
        .stdout(predicate::str::contains(format!("  {}\n", a_h.display())))
        .stdout(predicate::str::contains("entry points (1)"))
        .stdout(predicate::str::contains(format!("  {}\n", a_cpp.display())))
        .stdout(predicate::str::contains("bad.cpp").not())
        .stdout(predicate::str::contains("b.h\n").not());
}

#[test]
fn test_batch_default_target_is_twelve() {
    let project = Project::new();
    let mut lines = String::new();
    let mut includes = String::new();
    for i in 0..15 {
        let header = project.write(&format!("src/h{i:02}.h"), "");
        lines.push_str(&format!("- [ ] {}\n", header.display()));
        includes.push_str(&format!("#include \"h{i:02}.h\"\n"));
    }
    // One header per source so the batch stops exactly at the target
    for (i, line) in includes.lines().enumerate() {
        project.write(&format!("src/s{i:02}.cpp"), &format!("{line}\n"));
    }
    project.checklist(&lines);

    project
        .hs()
        .assert()
        .success()
        .stdout(predicate::str::contains("Total headers: 12"))
        .stdout(predicate::str::contains("entry points (12)"));
}

#[test]
fn test_batch_skips_third_party_only_sources() {
    let project = Project::new();
    let vendored = project.write("src/boost/any.hpp", "");
    project.write("src/vendor.cpp", "#include <boost/any.hpp>\n#include <fmt/core.h>\n");
    project.checklist(&format!("- [ ] {}\n", vendored.display()));

    for target in ["1", "12", "100"] {
        project
            .hs()
            .arg(target)
            .assert()
            .success()
            .stdout(predicate::str::contains("Total headers: 0"))
            .stdout(predicate::str::contains("vendor.cpp").not());
    }
}

#[test]
fn test_batch_problem_file_excluded() {
    let project = Project::new();
    let mut checklist = String::new();
    let mut body = String::new();
    for i in 0..5 {
        let header = project.write(&format!("src/h{i}.h"), "");
        checklist.push_str(&format!("- [ ] {}\n", header.display()));
        body.push_str(&format!("#include \"h{i}.h\"\n"));
    }
    let heavy = project.write("src/heavy.cpp", &body);
    checklist.push_str(&format!("- [!] {}\n", heavy.display()));
    project.checklist(&checklist);

    project
        .hs()
        .assert()
        .success()
        .stdout(predicate::str::contains("Total headers: 0"))
        .stdout(predicate::str::contains("heavy.cpp").not());
}

#[test]
fn test_batch_target_zero() {
    let project = Project::new();
    let a_h = project.write("src/a.h", "");
    project.write("src/a.cpp", "#include \"a.h\"\n");
    project.checklist(&format!("- [ ] {}\n", a_h.display()));

    project
        .hs()
        .arg("0")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total headers: 0"))
        .stdout(predicate::str::contains("entry points (0)"));
}

#[test]
fn test_batch_with_path_overrides() {
    let project = Project::new();
    let other = project.dir().join("engine");
    fs::create_dir_all(other.join("src")).unwrap();
    fs::write(other.join("src/e.h"), "").unwrap();
    fs::write(other.join("src/e.cpp"), "#include \"e.h\"\n").unwrap();
    let checklist = project.dir().join("notes.md");
    fs::write(&checklist, format!("- [ ] {}\n", other.join("src/e.h").display())).unwrap();

    project
        .hs()
        .arg("--progress-file")
        .arg(&checklist)
        .arg("--root")
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total headers: 1"))
        .stdout(predicate::str::contains("e.cpp"));
}

// =============================================================================
// Logging
// =============================================================================

#[test]
fn test_rust_log_enables_debug_events() {
    let project = Project::new();
    project.checklist("- [ ] /x/a.h\n");

    project
        .hs()
        .env("RUST_LOG", "debug")
        .arg("--stats")
        .assert()
        .success()
        .stderr(predicate::str::contains("Loaded progress file"));
}

#[test]
fn test_default_log_level_is_quiet() {
    let project = Project::new();
    project.checklist("- [ ] /x/a.h\n");

    project.hs().arg("--stats").assert().success().stderr("");
}

#[test]
fn test_unknown_log_level_warns() {
    let project = Project::new();
    project.checklist("");

    project
        .hs()
        .args(["--log-level", "loud", "--stats"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown log-level 'loud'"));
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_missing_checklist_fails() {
    let project = Project::new();

    project
        .hs()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("iwyu_progress.md"));

    project.hs().arg("--stats").assert().code(1);
}

#[test]
fn test_non_numeric_target_is_usage_error() {
    let project = Project::new();
    project.checklist("");

    project.hs().arg("lots").assert().failure();
}

#[test]
fn test_unreadable_default_config_fails_with_context() {
    let project = Project::new();
    project.checklist("");
    fs::create_dir(project.dir().join("headerscan.yml")).unwrap();

    project
        .hs()
        .arg("--stats")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config file: headerscan.yml"));
}
