//! Specs for `tabcheck check`: selection, phases, and the failure threshold.

use crate::prelude::*;

/// > Every selected checker loads, then every one is checked
#[test]
fn all_passing_exits_0() {
    passing_project()
        .check(&[])
        .assert()
        .success()
        .stdout("3 checkers passed\n")
        .stderr(predicates::str::contains("=== LOAD  Alpha"))
        .stderr(predicates::str::contains("--- PASS: Gamma"));
}

/// > No declared checkers is a successful empty run
#[test]
fn empty_config_passes() {
    Project::with_config("version = 1\n")
        .check(&[])
        .assert()
        .success()
        .stdout("0 checkers passed\n");
}

/// > Loads run in name order before any check
#[test]
fn loads_precede_checks() {
    let output = passing_project().check(&[]).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    let last_load = stderr.rfind("=== LOAD").unwrap();
    let first_run = stderr.find("=== RUN").unwrap();
    assert!(last_load < first_run, "stderr:\n{}", stderr);
}

/// > A failing check exits 1 and reports the failure
#[test]
fn failing_check_exits_1() {
    let project = passing_project();
    project.file("data/conf/alpha.json", r#"[{"id": 1}, {"name": "x"}]"#);

    project
        .check(&[])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("--- FAIL: Alpha"))
        .stderr(predicates::str::contains("row 1: missing required field `id`"))
        .stdout(predicates::str::contains("1 of 1 checkers failed, 2 not checked"));
}

/// > The check phase continues until break_failed_count failures
#[test]
fn break_failed_count_keeps_checking() {
    let project = passing_project();
    project
        .file("data/conf/alpha.json", r#"[{"name": "x"}]"#)
        .file("data/conf/beta.json", r#"[{"id": 1}, {"id": 1}]"#);

    project
        .check(&["--break-failed-count", "5"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("--- FAIL: Beta"))
        .stderr(predicates::str::contains("--- PASS: Gamma"))
        .stdout(predicates::str::contains("2 of 3 checkers failed"));
}

/// > break_failed_count 0 behaves like 1
#[test]
fn break_failed_count_zero_stops_at_first_failure() {
    let project = passing_project();
    project.file("data/conf/alpha.json", r#"[{"name": "x"}]"#);

    project
        .check(&["--break-failed-count", "0"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("--- STOP: 1 failed (break at 1), 2 not checked"))
        .stderr(predicates::str::contains("=== RUN   Beta").not());
}

/// > A load failure aborts before any check runs
#[test]
fn load_failure_exits_1_without_checks() {
    let project = passing_project();
    project.file("data/conf/beta.json", "not json");

    project
        .check(&[])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("--- FAIL: Beta"))
        .stderr(predicates::str::contains("=== LOAD  Gamma").not())
        .stderr(predicates::str::contains("=== RUN").not())
        .stdout(predicates::str::contains("load failed: Beta (no checks run)"));
}

/// > Missing table files are load failures
#[test]
fn missing_table_is_load_failure() {
    let project = Project::with_config(THREE_CHECKERS);

    project
        .check(&[])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("load failed: Alpha"));
}

/// > --only selects a subset; others are never loaded
#[test]
fn only_selects_subset() {
    let project = passing_project();
    project.file("data/conf/beta.json", "not json");

    project
        .check(&["--only", "Alpha,Gamma"])
        .assert()
        .success()
        .stdout("2 checkers passed\n")
        .stderr(predicates::str::contains("Beta").not());
}

/// > --skip removes checkers from the run
#[test]
fn skip_removes_checker() {
    let project = passing_project();
    project.file("data/conf/gamma.json", "[]");

    project
        .check(&["--skip", "Gamma"])
        .assert()
        .success()
        .stdout("2 checkers passed\n");
}

/// > Unknown checker names are argument errors
#[test]
fn unknown_checker_name_exits_2() {
    passing_project()
        .check(&["--only", "Delta"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unknown checker: Delta"));
}

/// > Subdirectory rewrites redirect table paths
#[test]
fn subdir_rewrite_redirects_tables() {
    let project = passing_project();
    project
        .file("data/conf/alpha.json", r#"[{"name": "x"}]"#)
        .file("data/conf-v2/alpha.json", r#"[{"id": 7}]"#)
        .file("data/conf-v2/beta.json", r#"[{"id": 7}]"#)
        .file("data/conf-v2/gamma.json", r#"[{"id": 7}]"#);

    project
        .check(&["--subdir-rewrite", "conf/=conf-v2/"])
        .assert()
        .success();
}

/// > Malformed rewrites are rejected with exit 2
#[test]
fn malformed_rewrite_exits_2() {
    passing_project()
        .check(&["--subdir-rewrite", "conf"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("OLD=NEW"));
}

/// > --format selects the table extension
#[test]
fn yaml_format_reads_yaml_tables() {
    let project = Project::with_config(THREE_CHECKERS);
    project
        .file("data/conf/alpha.yaml", "- id: 1\n")
        .file("data/conf/beta.yaml", "- id: 1\n- id: 2\n")
        .file("data/conf/gamma.yaml", "- id: 1\n");

    project
        .check(&["--format", "yaml"])
        .assert()
        .success()
        .stdout("3 checkers passed\n");
}

/// > A positional DIR overrides [run].dir
#[test]
fn positional_dir_overrides_config() {
    let project = passing_project();
    project
        .file("other/conf/alpha.json", r#"[{"name": "x"}]"#)
        .file("other/conf/beta.json", "[]")
        .file("other/conf/gamma.json", r#"[{"id": 1}]"#);

    project
        .check(&["other"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("--- FAIL: Alpha"));
}
