//! Integration tests for the dbdd CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dbdd() -> Command {
    let mut cmd = Command::cargo_bin("dbdd").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn sheet_arg(dir: &TempDir) -> String {
    dir.path().join("kael.json").to_str().unwrap().to_string()
}

fn saved(path: &str) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(Path::new(path)).unwrap()).unwrap()
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_sheet() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd()
        .args(["init", "-f", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created sheet"));
    assert!(Path::new(&file).exists());
    assert_eq!(saved(&file)["rolls"]["count"], 0);
}

#[test]
fn init_fails_if_sheet_exists() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd().args(["init", "-f", &file]).assert().success();
    dbdd()
        .args(["init", "-f", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    dbdd().args(["init", "--force", "-f", &file]).assert().success();
}

// ---------------------------------------------------------------------------
// set / meta / text
// ---------------------------------------------------------------------------

#[test]
fn set_updates_rating_and_points() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd()
        .args(["set", "might", "3", "-f", &file])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Might set to 3")
                .and(predicate::str::contains("Total Trait Points: 3 / 20")),
        );
    dbdd()
        .args(["set", "talent", "4", "-f", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Trait Points: 3 / 20"));
    assert_eq!(saved(&file)["sheet"]["ratings"]["Might"], 3);
}

#[test]
fn set_rejects_rating_above_four() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd()
        .args(["set", "might", "5", "-f", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn set_rejects_unknown_trait() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd()
        .args(["set", "charisma", "2", "-f", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown trait: charisma"));
}

#[test]
fn meta_and_text_show_on_sheet() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd()
        .args(["meta", "size", "Large", "-f", &file])
        .assert()
        .success();
    dbdd()
        .args(["text", "talent-description", "Speaks to crows", "-f", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Talent Description set"));
    dbdd()
        .args(["sheet", "-f", &file])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Large")
                .and(predicate::str::contains("Speaks to crows"))
                .and(predicate::str::contains("No rolls yet.")),
        );
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_records_and_counts() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd().args(["set", "might", "2", "-f", &file]).assert().success();

    dbdd()
        .args(["roll", "might", "--seed", "7", "-f", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Roll #1 | Might | 4d6 = "));
    dbdd()
        .args(["roll", "might", "--adv", "-f", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Roll #2 | Might | 6d6 = "));

    let json = saved(&file);
    assert_eq!(json["rolls"]["count"], 2);
    assert_eq!(json["rolls"]["latest"]["pool_size"], 6);
    assert_eq!(json["sheet"]["ratings"]["Might"], 2);
}

#[test]
fn parallel_rolls_keep_every_count() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd().args(["set", "might", "2", "-f", &file]).assert().success();

    let bin = assert_cmd::cargo::cargo_bin("dbdd");
    let children: Vec<_> = (0..12)
        .map(|_| {
            std::process::Command::new(&bin)
                .args(["roll", "might", "-f", &file])
                .env("NO_COLOR", "1")
                .stdout(std::process::Stdio::piped())
                .stderr(std::process::Stdio::piped())
                .spawn()
                .unwrap()
        })
        .collect();

    let mut numbers: Vec<u64> = children
        .into_iter()
        .map(|child| {
            let out = child.wait_with_output().unwrap();
            assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
            let stdout = String::from_utf8(out.stdout).unwrap();
            let n = stdout.split("Roll #").nth(1).unwrap().split(' ').next().unwrap();
            n.parse().unwrap()
        })
        .collect();
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=12).collect::<Vec<u64>>());
    assert_eq!(saved(&file)["rolls"]["count"], 12);
}

#[test]
fn seeded_rolls_repeat() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let mut outputs = Vec::new();
    for dir in [&first, &second] {
        let file = sheet_arg(dir);
        dbdd().args(["set", "focus", "3", "-f", &file]).assert().success();
        let out = dbdd()
            .args(["roll", "focus", "--seed", "42", "-f", &file])
            .output()
            .unwrap();
        assert!(out.status.success());
        outputs.push(saved(&file)["rolls"]["latest"]["dice"].clone());
    }
    assert_eq!(outputs[0], outputs[1]);
}

#[test]
fn roll_unavailable_at_zero() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd()
        .args(["roll", "power", "-f", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "normal roll is not available at rating 0",
        ));
    dbdd()
        .args(["roll", "power", "--dis", "-f", &file])
        .assert()
        .failure();
    dbdd()
        .args(["roll", "power", "--adv", "-f", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Roll #1 | Power | 2d6 = "));
}

#[test]
fn roll_adv_and_dis_conflict() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd()
        .args(["roll", "might", "--adv", "--dis", "-f", &file])
        .assert()
        .failure();
}

#[test]
fn sheet_shows_latest_roll() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd().args(["set", "insight", "1", "-f", &file]).assert().success();
    dbdd()
        .args(["roll", "insight", "-s", "3", "-f", &file])
        .assert()
        .success();
    dbdd()
        .args(["sheet", "-f", &file])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Roll #1 | Insight | 2d6 = ")
                .and(predicate::str::contains("Total Trait Points: 1 / 20")),
        );
}

#[test]
fn malformed_sheet_file_errors() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    fs::write(&file, "not json").unwrap();
    dbdd()
        .args(["sheet", "-f", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid sheet file"));
}

#[test]
fn sheet_file_with_rating_above_four_errors() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    fs::write(&file, r#"{"sheet":{"ratings":{"Might":9,"Focus":200}}}"#).unwrap();
    dbdd()
        .args(["sheet", "-f", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

// ---------------------------------------------------------------------------
// interpret
// ---------------------------------------------------------------------------

#[test]
fn interpret_looks_up_table() {
    dbdd()
        .args(["interpret", "2", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2d6 = 7 \u{2192} Critical Success | No Save | yes-and",
        ));
    dbdd()
        .args(["interpret", "6", "25"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Failure | Regular Save | no-but"));
}

#[test]
fn interpret_unsupported_pool_is_unknown() {
    dbdd()
        .args(["interpret", "3", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3d6 = 10 \u{2192} unknown"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_session_rolls_and_saves() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd()
        .args(["play", "--seed", "1", "-f", &file])
        .write_stdin("set agility 2\nroll agility dis\nroll agility\nbogus\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Agility set to 2")
                .and(predicate::str::contains("Roll #1 | Agility | 2d6 = "))
                .and(predicate::str::contains("Roll #2 | Agility | 4d6 = "))
                .and(predicate::str::contains("unknown command: bogus"))
                .and(predicate::str::contains("Goodbye!")),
        );
    assert_eq!(saved(&file)["rolls"]["count"], 2);
}

#[test]
fn play_ends_on_eof() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd()
        .args(["play", "-f", &file])
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("roll <trait> [adv|dis]"));
}

#[test]
fn play_quit_with_trailing_words_ends_session() {
    let dir = TempDir::new().unwrap();
    let file = sheet_arg(&dir);
    dbdd()
        .args(["play", "-f", &file])
        .write_stdin("quit now\nset might 3\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Goodbye!").and(predicate::str::contains("Might set").not()),
        );
    assert_eq!(saved(&file)["sheet"]["ratings"]["Might"], 0);
}
