use predicates::str::contains;
use std::fs;

mod common;
use common::{init_with_profile, seed_full_day, setup_test_db, tc, temp_out};

#[test]
fn test_export_csv_writes_all_cards() {
    let db_path = setup_test_db("export_csv_all");
    init_with_profile(&db_path);
    seed_full_day(&db_path, "2025-03-03");

    let out = temp_out("export_csv_all", "csv");

    tc().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Exported data to"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("uuid,date,time,timestamp_utc,method"));
    assert!(content.contains("2025-03-03"));
    assert!(content.contains("manual"));
    assert_eq!(content.lines().count(), 5, "header plus four card rows");
}

#[test]
fn test_export_json_respects_the_range() {
    let db_path = setup_test_db("export_json_range");
    init_with_profile(&db_path);
    seed_full_day(&db_path, "2025-03-03");
    seed_full_day(&db_path, "2025-04-10");

    let out = temp_out("export_json_range", "json");

    tc().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--range", "2025-03",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("2025-03-03"));
    assert!(!content.contains("2025-04-10"));
    assert!(content.contains("timestamp_utc"));
}

#[test]
fn test_export_range_all_keeps_everything() {
    let db_path = setup_test_db("export_range_all");
    init_with_profile(&db_path);
    seed_full_day(&db_path, "2025-03-03");
    seed_full_day(&db_path, "2025-04-10");

    let out = temp_out("export_range_all", "csv");

    tc().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "all",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-03-03"));
    assert!(content.contains("2025-04-10"));
}

#[test]
fn test_export_skips_an_empty_range() {
    let db_path = setup_test_db("export_empty_range");
    init_with_profile(&db_path);
    seed_full_day(&db_path, "2025-03-03");

    let out = temp_out("export_empty_range", "csv");

    tc().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2026-01",
    ])
    .assert()
    .success()
    .stdout(contains("No time cards in the selected range"));

    assert!(fs::metadata(&out).is_err(), "no file should be written");
}

#[test]
fn test_export_force_overwrites_an_existing_file() {
    let db_path = setup_test_db("export_force");
    init_with_profile(&db_path);
    seed_full_day(&db_path, "2025-03-03");

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("seed stale file");

    tc().args([
        "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("stale"));
    assert!(content.contains("2025-03-03"));
}

#[test]
fn test_export_declined_overwrite_cancels() {
    let db_path = setup_test_db("export_declined");
    init_with_profile(&db_path);
    seed_full_day(&db_path, "2025-03-03");

    let out = temp_out("export_declined", "csv");
    fs::write(&out, "stale").expect("seed stale file");

    tc().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("cancelled: existing file not overwritten"));

    let content = fs::read_to_string(&out).expect("read untouched file");
    assert_eq!(content, "stale");
}
