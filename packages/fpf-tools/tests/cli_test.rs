//! End-to-end tests for the `fpf` binary.
//!
//! Every test runs in its own temp directory so default paths (`FPF/...`)
//! never touch the repository.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

const SPEC: &str = "\
FPF title
Table of contents
# Part A - Kernel
Intro
## A.1 Holon
### Problem frame
frame text
### Solution
solution text
### SoTA-Echoing
echo text
# Part B - Reasoning
## B.1 Trust
### Forces
forces text
### Conformance
conformance text
# Part C - Extensions
C text
";

fn fpf(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fpf").unwrap();
    cmd.current_dir(dir)
        .env_remove("FPF_SPEC_URL")
        .env_remove("FPF_PROFILES_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Work dir with the spec split into parts and a three-part baseline.
fn parts_fixture() -> TempDir {
    let dir = tempdir().unwrap();
    write(dir.path(), "parts/FPF-Part-Preface.md", "Preface line 1\nPreface line 2\n");
    write(dir.path(), "parts/FPF-Part-A.md", "# Part A\nA line 1\nA line 2\n");
    write(dir.path(), "parts/FPF-Part-B.md", "# Part B\nB line 1\n");
    write(
        dir.path(),
        "baseline.yaml",
        "output: full.md\n\
         parts:\n\
         \x20 - parts/FPF-Part-Preface.md\n\
         \x20 - parts/FPF-Part-A.md\n\
         \x20 - parts/FPF-Part-B.md\n",
    );
    dir
}

#[test]
fn test_strip_writes_lite_and_aggressive() {
    let dir = tempdir().unwrap();
    write(dir.path(), "FPF/FPF-Spec.md", SPEC);

    fpf(dir.path())
        .arg("strip")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stats for FPF/FPF-Spec-Lite.md:"))
        .stdout(predicate::str::contains("Stats for FPF/FPF-Spec-Aggressive.md:"))
        .stdout(predicate::str::contains("Removal statistics:"))
        .stdout(predicate::str::contains("  - SoTA-Echoing: 1 sections"))
        .stdout(predicate::str::is_match(r"Lines: 19 -> \d+ \(Reduction: \d+\.\d%\)").unwrap());

    let lite = fs::read_to_string(dir.path().join("FPF/FPF-Spec-Lite.md")).unwrap();
    assert!(lite.starts_with("# Part A - Kernel\n"));
    assert!(!lite.contains("echo text"));
    assert!(lite.contains("### Problem frame\n"));

    let aggressive = fs::read_to_string(dir.path().join("FPF/FPF-Spec-Aggressive.md")).unwrap();
    assert!(!aggressive.contains("frame text"));
    assert!(!aggressive.contains("forces text"));
    assert!(aggressive.contains("### Conformance\nconformance text\n"));
    assert!(aggressive.lines().count() <= lite.lines().count());
}

#[test]
fn test_compress_lite_alias_with_explicit_paths() {
    let dir = tempdir().unwrap();
    write(dir.path(), "spec.md", SPEC);

    fpf(dir.path())
        .args(["compress-lite", "--input", "spec.md", "--output", "out/lite.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote out/lite.md"));

    assert!(dir.path().join("out/lite.md").exists());
}

#[test]
fn test_strip_missing_input_fails_without_output() {
    let dir = tempdir().unwrap();

    fpf(dir.path())
        .args(["strip-aggressive", "--input", "nope.md"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Input file not found: nope.md"));

    assert!(!dir.path().join("FPF/FPF-Spec-Aggressive.md").exists());
}

#[test]
fn test_strip_without_start_marker_warns() {
    let dir = tempdir().unwrap();
    write(dir.path(), "spec.md", "Just a preface\n# Introduction\n");

    fpf(dir.path())
        .args(["strip-lite", "--input", "spec.md", "--output", "lite.md"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:"));

    assert_eq!(fs::read_to_string(dir.path().join("lite.md")).unwrap(), "");
}

#[test]
fn test_split_work_dir_round_trips() {
    let dir = tempdir().unwrap();
    write(dir.path(), "FPF-Spec.md", SPEC);

    fpf(dir.path())
        .args(["split", "--work-dir", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("into 4 parts"));

    let manifest = fs::read_to_string(dir.path().join("FPF-Parts-Manifest.yaml")).unwrap();
    assert!(manifest.starts_with("---\n"));
    assert!(manifest.contains("baseline_file: FPF-Spec.md"));

    let names = [
        "FPF-Part-Preface.md",
        "FPF-Part-A.md",
        "FPF-Part-B.md",
        "FPF-Part-C.md",
    ];
    let mut rebuilt = String::new();
    for name in names {
        assert!(manifest.contains(&format!("  - {name}")), "{name} missing");
        rebuilt.push_str(&fs::read_to_string(dir.path().join(name)).unwrap());
    }
    assert_eq!(rebuilt, SPEC);
}

#[test]
fn test_split_then_assemble_reproduces_spec() {
    let dir = tempdir().unwrap();
    write(dir.path(), "FPF-Spec.md", SPEC);

    fpf(dir.path())
        .args(["split", "--input", "FPF-Spec.md", "--output-dir", "parts"])
        .assert()
        .success();

    fpf(dir.path())
        .args(["assemble", "--manifest", "parts/FPF-Parts-Manifest.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lines: 19 -> 19 (Reduction: 0.0%)"));

    let rebuilt = fs::read(dir.path().join("parts/FPF-Spec-Reassembled.md")).unwrap();
    assert_eq!(rebuilt, SPEC.as_bytes());
}

#[test]
fn test_split_verify_copy() {
    let dir = tempdir().unwrap();
    write(dir.path(), "FPF-Spec.md", SPEC);

    fpf(dir.path())
        .args(["split", "--work-dir", ".", "--verify-copy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verified copy:"));

    let copy = fs::read_to_string(dir.path().join("FPF-Spec-Verified-Copy.md")).unwrap();
    assert_eq!(copy, SPEC);
}

#[test]
fn test_assemble_with_baseline_manifest_reports_stats() {
    let dir = parts_fixture();
    write(
        dir.path(),
        "assemble.yaml",
        "output: assembled.md\n\
         parts:\n\
         \x20 - parts/FPF-Part-Preface.md\n\
         \x20 - parts/FPF-Part-A.md\n\
         baseline_manifest: baseline.yaml\n",
    );

    fpf(dir.path())
        .args(["assemble", "--manifest", "assemble.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stats for"))
        .stdout(predicate::str::contains("Removal statistics:"))
        .stdout(predicate::str::contains("  - parts/FPF-Part-B.md: 2 lines"))
        .stdout(predicate::str::contains("Lines: 7 -> 5 (Reduction: 28.6%)"));

    assert_eq!(
        fs::read_to_string(dir.path().join("assembled.md")).unwrap(),
        "Preface line 1\nPreface line 2\n# Part A\nA line 1\nA line 2\n"
    );
}

#[test]
fn test_assemble_missing_part_fails() {
    let dir = parts_fixture();
    write(
        dir.path(),
        "assemble.yaml",
        "output: assembled.md\n\
         parts:\n\
         \x20 - parts/FPF-Part-Preface.md\n\
         \x20 - parts/FPF-Part-Z.md\n",
    );

    fpf(dir.path())
        .args(["assemble", "--manifest", "assemble.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Part file not found"));

    assert!(!dir.path().join("assembled.md").exists());
}

#[test]
fn test_assemble_part_not_in_baseline_fails() {
    let dir = parts_fixture();
    write(dir.path(), "parts/FPF-Part-C.md", "# Part C\n");
    write(
        dir.path(),
        "assemble.yaml",
        "output: assembled.md\n\
         parts:\n\
         \x20 - parts/FPF-Part-A.md\n\
         \x20 - parts/FPF-Part-C.md\n\
         baseline_manifest: baseline.yaml\n",
    );

    fpf(dir.path())
        .args(["assemble", "--manifest", "assemble.yaml"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Integrity violation"));

    assert!(!dir.path().join("assembled.md").exists());
}

#[test]
fn test_assemble_missing_baseline_warns_without_stats() {
    let dir = parts_fixture();
    write(
        dir.path(),
        "assemble.yaml",
        "output: assembled.md\n\
         parts:\n\
         \x20 - parts/FPF-Part-A.md\n\
         baseline_manifest: missing-baseline.yaml\n",
    );

    fpf(dir.path())
        .args(["assemble", "--manifest", "assemble.yaml"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning:"))
        .stderr(predicate::str::contains("missing-baseline.yaml"))
        .stdout(predicate::str::contains("Stats for").not())
        .stdout(predicate::str::contains("Lines:").not());

    assert_eq!(
        fs::read_to_string(dir.path().join("assembled.md")).unwrap(),
        "# Part A\nA line 1\nA line 2\n"
    );
}

#[test]
fn test_assemble_malformed_manifest_fails() {
    let dir = tempdir().unwrap();
    write(dir.path(), "assemble.yaml", "parts:\n  - a.md\n");

    fpf(dir.path())
        .args(["assemble", "--manifest", "assemble.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed manifest"));
}

#[test]
fn test_assemble_profile_name_resolves_in_profiles_dir() {
    let dir = tempdir().unwrap();
    let work = dir.path().join("work");
    write(&work, "FPF-Part-A.md", "# Part A\nA\n");
    write(&work, "FPF-Part-B.md", "# Part B\nB\n");
    write(&work, "baseline.md", "# Part A\nA\n# Part B\nB\n");
    write(
        dir.path(),
        "profiles/lite.yaml",
        "output: lite.md\nparts:\n  - FPF-Part-A.md\nbaseline_file: baseline.md\n",
    );

    fpf(dir.path())
        .args([
            "assemble",
            "--profile",
            "lite",
            "--profiles-dir",
            "profiles",
            "--work-dir",
            "work",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stats for"))
        .stdout(predicate::str::contains("Lines: 4 -> 2 (Reduction: 50.0%)"))
        .stderr(predicate::str::contains("Warning").not());

    assert!(work.join("lite.md").exists());
}

#[test]
fn test_assemble_profile_path_wins_over_profiles_dir() {
    let dir = tempdir().unwrap();
    let work = dir.path().join("work");
    write(&work, "FPF-Part-A.md", "# Part A\n");
    write(
        dir.path(),
        "profiles/custom.yaml",
        "output: wrong.md\nparts:\n  - FPF-Part-A.md\n",
    );
    write(
        dir.path(),
        "custom/custom.yaml",
        "output: right.md\nparts:\n  - FPF-Part-A.md\n",
    );

    fpf(dir.path())
        .args([
            "assemble",
            "--profile",
            "custom/custom.yaml",
            "--profiles-dir",
            "profiles",
            "--work-dir",
            "work",
        ])
        .assert()
        .success();

    assert!(work.join("right.md").exists());
    assert!(!work.join("wrong.md").exists());
}

#[test]
fn test_assemble_profiles_dir_from_env() {
    let dir = tempdir().unwrap();
    write(dir.path(), "FPF-Part-A.md", "# Part A\n");
    write(
        dir.path(),
        "my-profiles/full.yml",
        "output: ../full.md\nparts:\n  - ../FPF-Part-A.md\n",
    );

    fpf(dir.path())
        .env("FPF_PROFILES_DIR", "my-profiles")
        .args(["assemble", "--profile", "full.yml"])
        .assert()
        .success();

    assert!(dir.path().join("full.md").exists());
}

#[test]
fn test_assemble_unknown_profile_fails() {
    let dir = tempdir().unwrap();

    fpf(dir.path())
        .args(["assemble", "--profile", "nope", "--profiles-dir", "profiles"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Profile not found"));
}
