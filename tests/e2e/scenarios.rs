use predicates::prelude::*;
use super::helpers::TestProject;

#[test]
fn test_skipped_ecosystem_passes() {
    let project = TestProject::new()
        .with_allowed(&["MIT", "Apache-2.0"])
        .with_artifacts(&[("left-pad", "npm", &["MIT"]), ("evil-pad", "npm", &["GPL-3.0"])]);

    project
        .command()
        .assert()
        .success()
        .stdout("No license violations detected\n");
}

#[test]
fn test_disallowed_license_fails() {
    let project = TestProject::new()
        .with_allowed(&["MIT"])
        .with_artifacts(&[("libfoo", "cargo", &["GPL-3.0"])]);

    project
        .command()
        .assert()
        .code(1)
        .stdout(
            "The cargo dependency 'libfoo' is licensed under 'GPL-3.0' which is not currently allowed.\n\
             \n\
             1 license violation(s) detected. Please review\n",
        );
}

#[test]
fn test_one_allowed_license_is_enough() {
    let project = TestProject::new()
        .with_allowed(&["MIT", "Apache-2.0"])
        .with_artifacts(&[("bar", "cargo", &["GPL-3.0", "MIT"])]);

    project.command().assert().success();
}

#[test]
fn test_empty_allow_list_flags_every_checked_artifact() {
    let project = TestProject::new()
        .with_allowed(&[])
        .with_artifacts(&[
            ("a", "cargo", &["MIT"]),
            ("b", "npm", &["MIT"]),
            ("c", "go-module", &["BSD-3-Clause", "ISC"]),
        ]);

    project
        .command()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("The cargo dependency 'a'"))
        .stdout(predicate::str::contains(
            "The go-module dependency 'c' is licensed under 'BSD-3-Clause' and 'ISC' which are not currently allowed.",
        ))
        .stdout(predicate::str::contains("'b'").not())
        .stdout(predicate::str::ends_with("2 license violation(s) detected. Please review\n"));
}

#[test]
fn test_word_boundaries_and_parentheses() {
    let project = TestProject::new()
        .with_allowed(&["mit"])
        .with_artifacts(&[
            ("paren", "cargo", &["(MIT)"]),
            ("compound", "cargo", &["MIT OR GPL-3.0"]),
            ("submit", "cargo", &["submit"]),
            ("mitigate", "cargo", &["mitigate"]),
        ]);

    let output = project.command().output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(!stdout.contains("'paren'"));
    assert!(!stdout.contains("'compound'"));
    let submit = stdout.find("'submit'").unwrap();
    let mitigate = stdout.find("'mitigate'").unwrap();
    assert!(submit < mitigate);
}

#[test]
fn test_quiet_prints_nothing() {
    let project = TestProject::new()
        .with_allowed(&["MIT"])
        .with_artifacts(&[("libfoo", "cargo", &["GPL-3.0"])]);

    project.command().arg("--quiet").assert().code(1).stdout("");
}

#[test]
fn test_violations_always_fail_the_run() {
    let project = TestProject::new()
        .with_allowed(&["MIT"])
        .with_artifacts(&[("libfoo", "cargo", &["GPL-3.0"])]);

    project.command().arg("--exit-zero").assert().code(2).stdout("");
    project.command().args(["--format", "json"]).assert().code(2).stdout("");
    project
        .command()
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("The cargo dependency 'libfoo'"));
}

#[test]
fn test_repeated_runs_are_identical() {
    let project = TestProject::new()
        .with_allowed(&["MIT"])
        .with_artifacts(&[("x", "cargo", &["GPL-3.0"]), ("y", "cargo", &["MIT"])]);

    let first = project.command().output().unwrap();
    let second = project.command().output().unwrap();

    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}
