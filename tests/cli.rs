use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).unwrap();
    }
    dir
}

fn keydiff(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("keydiff").unwrap();
    cmd.current_dir(dir);
    cmd
}

const SCORES_A: &str = "id,name,score\n1,alice,10.00\n2,bob,5.0\n3,carol,7\n";
const SCORES_B: &str = "id,name,score\n1,alice,10.02\n2,bob,5.005\n4,dave,8\n";

#[test]
fn reports_mismatches_and_exclusive_keys() {
    let dir = workspace(&[("a.csv", SCORES_A), ("b.csv", SCORES_B)]);

    let expected = format!(
        "KEY: {:<30} => Mismatched columns = score:3\n\
         KEY: {:<30} => Found only in b.csv\n\
         KEY: {:<30} => Found only in a.csv\n",
        "(1)", "(4)", "(3)"
    );

    keydiff(dir.path())
        .args(["--files", "a.csv,b.csv", "--keys", "id"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn swapping_files_flips_attribution() {
    let dir = workspace(&[("a.csv", SCORES_A), ("b.csv", SCORES_B)]);

    keydiff(dir.path())
        .args(["-f", "b.csv,a.csv", "-k", "id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mismatched columns = score:3"))
        .stdout(predicate::str::contains(format!("KEY: {:<30} => Found only in a.csv", "(3)")))
        .stdout(predicate::str::contains(format!("KEY: {:<30} => Found only in b.csv", "(4)")));
}

#[test]
fn output_is_identical_across_runs() {
    let dir = workspace(&[
        ("a.csv", "k,v\n1,a\n2,b\n3,c\n4,d\n5,e\n"),
        ("b.csv", "k,v\n9,z\n"),
    ]);

    let first = keydiff(dir.path())
        .args(["-f", "a.csv,b.csv", "-k", "k"])
        .output()
        .unwrap();
    let second = keydiff(dir.path())
        .args(["-f", "a.csv,b.csv", "-k", "k"])
        .output()
        .unwrap();

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    let text = String::from_utf8(first.stdout).unwrap();
    let keys: Vec<_> = text.lines().map(|l| &l[5..8]).collect();
    assert_eq!(keys, vec!["(9)", "(1)", "(2)", "(3)", "(4)", "(5)"]);
}

#[test]
fn precision_boundary_counts_as_mismatch() {
    let dir = workspace(&[
        ("a.csv", "id,v\n1,1.0\n2,1.0\n"),
        ("b.csv", "id,v\n1,1.5\n2,1.25\n"),
    ]);

    keydiff(dir.path())
        .args(["-f", "a.csv,b.csv", "-k", "id", "-p", "0.5"])
        .assert()
        .success()
        .stdout(format!("KEY: {:<30} => Mismatched columns = v:2\n", "(1)"));
}

#[test]
fn excluded_columns_are_ignored() {
    let dir = workspace(&[
        ("a.csv", "FUNDCODE,FUNDNAME,CAPITAL,NAV\nF1,Alpha,100,1.00\n"),
        ("b.csv", "FUNDCODE,FUNDNAME,CAPITAL,NAV\nF1,Alpha,999,1.00\n"),
    ]);

    keydiff(dir.path())
        .args(["-f", "a.csv,b.csv", "-k", "FUNDCODE,FUNDNAME", "-x", "CAPITAL"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn composite_key_and_custom_delimiter() {
    let dir = workspace(&[
        ("a.psv", "region|code|amount\nEU|F1|10\n"),
        ("b.psv", "region|code|amount\nEU|F1|11\n"),
    ]);

    keydiff(dir.path())
        .args(["-f", "a.psv,b.psv", "-k", "region,code", "-d", "|"])
        .assert()
        .success()
        .stdout(format!("KEY: {:<30} => Mismatched columns = amount:3\n", "(EU|F1)"));
}

#[test]
fn blank_lines_are_rows() {
    let dir = workspace(&[
        ("a.csv", "id,v\n1,x\n\n2,y\n"),
        ("b.csv", "id,v\n1,x\n2,y\n"),
        ("leading.csv", "\nid,v\n1,x\n"),
    ]);

    keydiff(dir.path())
        .args(["-f", "a.csv,b.csv", "-k", "id"])
        .assert()
        .success()
        .stdout(format!("KEY: {:<30} => Found only in a.csv\n", "()"));

    keydiff(dir.path())
        .args(["-f", "b.csv,leading.csv", "-k", "id"])
        .assert()
        .code(10)
        .stdout("");

    keydiff(dir.path())
        .args(["-f", "leading.csv,b.csv", "-k", "id"])
        .assert()
        .code(8);
}

#[test]
fn json_format_with_summary() {
    let dir = workspace(&[("a.csv", SCORES_A), ("b.csv", SCORES_B)]);

    let output = keydiff(dir.path())
        .args(["-f", "a.csv,b.csv", "-k", "id", "--format", "json", "--summary"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let records: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0]["type"], "mismatch");
    assert_eq!(records[0]["columns"][0]["column"], "score");
    assert_eq!(records[3]["type"], "summary");
    assert_eq!(records[3]["matched_keys"], 2);
}

#[test]
fn text_summary() {
    let dir = workspace(&[("a.csv", SCORES_A), ("b.csv", SCORES_B)]);

    keydiff(dir.path())
        .args(["-f", "a.csv,b.csv", "-k", "id", "--summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary: 3 rows in a.csv, 3 rows in b.csv"))
        .stdout(predicate::str::contains("Only in a.csv: 1"));
}

#[test]
fn no_arguments_prints_usage() {
    let dir = workspace(&[]);
    keydiff(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_exits_successfully() {
    let dir = workspace(&[]);
    keydiff(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--files"));
}

#[test]
fn argument_validation_exit_codes() {
    let dir = workspace(&[("a.csv", SCORES_A), ("b.csv", SCORES_B)]);

    let cases: &[(&[&str], i32)] = &[
        (&["-f", "a.csv,-b.csv"], 2),
        (&["-f", "a.csv,"], 2),
        (&["-f", "a.csv,b.csv", "-k", "id,"], 3),
        (&["-f", "a.csv,b.csv", "-p", "abc"], 4),
        (&["-f", "a.csv,b.csv", "-x", "-name"], 5),
        (&["-f", "a.csv,b.csv", "-k", "id", "-x", "id"], 6),
        (&["-f", "a.csv"], 7),
        (&["-f", "a.csv,b.csv,a.csv"], 7),
        (&["-f", "a.csv,b.csv", "-d", "||"], 1),
    ];

    for (args, code) in cases {
        keydiff(dir.path()).args(*args).assert().code(*code).stdout("");
    }
}

#[test]
fn header_validation_exit_codes() {
    let dir = workspace(&[
        ("a.csv", SCORES_A),
        ("b.csv", SCORES_B),
        ("reordered.csv", "id,score,name\n1,10.00,alice\n"),
        ("empty.csv", ""),
    ]);

    keydiff(dir.path())
        .args(["-f", "a.csv,b.csv", "-k", "id,code"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("key column 'code' was not found"));

    keydiff(dir.path())
        .args(["-f", "a.csv,b.csv", "-k", "id", "-x", "notes"])
        .assert()
        .code(9)
        .stderr(predicate::str::contains("exclude column 'notes'"));

    keydiff(dir.path())
        .args(["-f", "a.csv,reordered.csv", "-k", "id"])
        .assert()
        .code(10)
        .stdout("")
        .stderr(predicate::str::contains("do not match"));

    keydiff(dir.path())
        .args(["-f", "empty.csv,b.csv"])
        .assert()
        .code(11);

    keydiff(dir.path())
        .args(["-f", "a.csv,missing.csv", "-k", "id"])
        .assert()
        .code(12)
        .stderr(predicate::str::contains("missing.csv"));
}
