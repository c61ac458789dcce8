//! Specs for JSON output.

use crate::prelude::*;

/// > -o json produces a JSON summary on stdout
#[test]
fn json_output_on_success() {
    let output = passing_project().check(&["-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["passed"], true);
    assert_eq!(json["selected"], serde_json::json!(["Alpha", "Beta", "Gamma"]));
    assert_eq!(json["attempted"], 3);
    assert!(json.get("timestamp").is_some());
}

/// > JSON output lists failures and unchecked checkers
#[test]
fn json_output_on_failure() {
    let project = passing_project();
    project.file("data/conf/alpha.json", r#"[{"name": "x"}]"#);

    let output = project.check(&["-o", "json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    assert_eq!(json["passed"], false);
    assert_eq!(json["aborted"], true);
    assert_eq!(json["failures"][0]["name"], "Alpha");
    assert_eq!(json["unchecked"], serde_json::json!(["Beta", "Gamma"]));
}

/// > JSON output reports a load failure
#[test]
fn json_output_on_load_failure() {
    let project = passing_project();
    project.file("data/conf/gamma.json", "{");

    let output = project.check(&["-o", "json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    assert_eq!(json["passed"], false);
    assert_eq!(json["attempted"], 0);
    assert_eq!(json["load_error"]["name"], "Gamma");
}

/// > JSON mode does not stream progress lines
#[test]
fn json_output_has_no_progress_lines() {
    passing_project()
        .check(&["-o", "json"])
        .assert()
        .success()
        .stderr(predicates::str::contains("=== RUN").not());
}

/// > NO_COLOR disables ANSI escapes in progress lines
#[test]
fn no_color_env_disables_color() {
    passing_project()
        .check(&[])
        .assert()
        .success()
        .stderr(predicates::str::contains("\x1b[").not());
}

/// > COLOR forces ANSI escapes even when stderr is not a terminal
#[test]
fn color_env_forces_color() {
    passing_project()
        .check(&[])
        .env_remove("NO_COLOR")
        .env("COLOR", "1")
        .assert()
        .success()
        .stderr(predicates::str::contains("\x1b["));
}

/// > --no-color wins over COLOR
#[test]
fn no_color_flag_wins_over_env() {
    passing_project()
        .check(&["--no-color"])
        .env_remove("NO_COLOR")
        .env("COLOR", "1")
        .assert()
        .success()
        .stderr(predicates::str::contains("\x1b[").not());
}
