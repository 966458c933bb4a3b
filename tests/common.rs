#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tc() -> Command {
    cargo_bin_cmd!("timecard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timecard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema and create a profile with the default schedule
/// (8h office, 2h extra, 1h lunch, 11h rest) tracked since 2025-03-03.
pub fn init_with_profile(db_path: &str) {
    tc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tc().args([
        "--db",
        db_path,
        "profile",
        "--first-name",
        "Ada",
        "--last-name",
        "Shaw",
        "--company",
        "Acme",
        "--start-date",
        "2025-03-03",
    ])
    .assert()
    .success();
}

/// Insert one card via the CLI and return its uuid, parsed from the
/// confirmation line. Seeding skips the balance footer to stay quiet.
pub fn add_card(db_path: &str, date: &str, time: &str) -> String {
    let out = tc()
        .args(["--db", db_path, "--no-balance", "add", date, time])
        .output()
        .expect("run add");
    assert!(
        out.status.success(),
        "add {} {} failed: {}",
        date,
        time,
        String::from_utf8_lossy(&out.stderr)
    );

    let stdout = String::from_utf8_lossy(&out.stdout);
    extract_uuid(&stdout)
}

/// Pull the uuid out of an `Added manual card on ... (uuid)` line.
pub fn extract_uuid(stdout: &str) -> String {
    let line = stdout
        .lines()
        .find(|l| l.contains("Added manual card"))
        .expect("no confirmation line in add output");
    let open = line.rfind('(').expect("no opening paren in add output");
    let close = line.rfind(')').expect("no closing paren in add output");
    line[open + 1..close].to_string()
}

/// A full 8h day with a one-hour lunch: 09:00-12:00 and 13:00-18:00.
pub fn seed_full_day(db_path: &str, date: &str) {
    for time in ["09:00", "12:00", "13:00", "18:00"] {
        add_card(db_path, date, time);
    }
}
