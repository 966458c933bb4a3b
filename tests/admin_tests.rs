use predicates::str::contains;
use std::env;
use std::fs;

mod common;
use common::{init_with_profile, seed_full_day, setup_test_db, tc, temp_out};

#[test]
fn test_backup_copies_the_database() {
    let db_path = setup_test_db("backup_copy");
    init_with_profile(&db_path);
    seed_full_day(&db_path, "2025-03-03");

    let dest = temp_out("backup_copy", "sqlite");

    tc().args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(fs::metadata(&dest).is_ok(), "backup file not created");
}

#[test]
fn test_backup_creates_missing_destination_dirs() {
    let db_path = setup_test_db("backup_nested");
    init_with_profile(&db_path);

    let mut dest = env::temp_dir();
    dest.push("timecard_backup_nested");
    fs::remove_dir_all(&dest).ok();
    dest.push("deep/backup.sqlite");
    let dest = dest.to_string_lossy().to_string();

    tc().args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success();

    assert!(fs::metadata(&dest).is_ok(), "nested backup not created");
}

#[test]
fn test_backup_compress_leaves_only_the_zip() {
    let db_path = setup_test_db("backup_compress");
    init_with_profile(&db_path);

    let dest = temp_out("backup_compress", "sqlite");
    let zip = dest.replace(".sqlite", ".zip");
    fs::remove_file(&zip).ok();

    tc().args(["--db", &db_path, "backup", "--file", &dest, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed:"));

    assert!(fs::metadata(&zip).is_ok(), "zip archive not created");
    assert!(fs::metadata(&dest).is_err(), "plain copy should be removed");
}

#[test]
fn test_backup_declined_overwrite_keeps_the_file() {
    let db_path = setup_test_db("backup_declined");
    init_with_profile(&db_path);

    let dest = temp_out("backup_declined", "sqlite");
    fs::write(&dest, "old").expect("seed existing backup");

    tc().args(["--db", &db_path, "backup", "--file", &dest])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Backup cancelled"));

    assert_eq!(fs::read_to_string(&dest).expect("read backup"), "old");
}

#[test]
fn test_db_without_flags_does_nothing() {
    let db_path = setup_test_db("db_noop");
    init_with_profile(&db_path);

    tc().args(["--db", &db_path, "db"])
        .assert()
        .success()
        .stdout(contains("Nothing to do"));
}

#[test]
fn test_db_maintenance_flags() {
    let db_path = setup_test_db("db_maintenance");
    init_with_profile(&db_path);
    seed_full_day(&db_path, "2025-03-03");

    tc().args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed"));

    tc().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    tc().args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed"));

    tc().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Time cards:"))
        .stdout(contains("4"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_records");
    init_with_profile(&db_path);

    tc().args([
        "--db",
        &db_path,
        "holiday",
        "2025-03-06",
        "--description",
        "Spring fair",
    ])
    .assert()
    .success();

    tc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("Database initialized"))
        .stdout(contains("holiday"));
}

#[test]
fn test_holiday_list_round_trip() {
    let db_path = setup_test_db("holiday_list");
    init_with_profile(&db_path);

    tc().args(["--db", &db_path, "holiday", "--list"])
        .assert()
        .success()
        .stdout(contains("No holidays recorded for location 'default'"));

    tc().args([
        "--db",
        &db_path,
        "holiday",
        "2025-12-25",
        "--description",
        "Christmas",
        "--recurring",
    ])
    .assert()
    .success()
    .stdout(contains("recurring every year"));

    tc().args(["--db", &db_path, "holiday", "--list"])
        .assert()
        .success()
        .stdout(contains("2025-12-25"))
        .stdout(contains("Christmas"))
        .stdout(contains("yes"));
}

#[test]
fn test_holiday_requires_date_and_description() {
    let db_path = setup_test_db("holiday_args");
    init_with_profile(&db_path);

    tc().args(["--db", &db_path, "holiday", "2025-12-25"])
        .assert()
        .failure()
        .stderr(contains("holiday needs a date and --description"));
}

#[test]
fn test_absence_list_round_trip() {
    let db_path = setup_test_db("absence_list");
    init_with_profile(&db_path);

    tc().args(["--db", &db_path, "absence", "--list"])
        .assert()
        .success()
        .stdout(contains("No absences recorded"));

    tc().args([
        "--db",
        &db_path,
        "absence",
        "2025-03-04",
        "--description",
        "sick leave",
        "--authorized",
    ])
    .assert()
    .success()
    .stdout(contains("(authorized)"));

    tc().args(["--db", &db_path, "absence", "--list"])
        .assert()
        .success()
        .stdout(contains("2025-03-04"))
        .stdout(contains("sick leave"))
        .stdout(contains("yes"));
}

#[test]
fn test_config_print_shows_the_written_file() {
    let db_path = setup_test_db("config_print");

    let mut home = env::temp_dir();
    home.push("timecard_config_home");
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create fake home");
    let home = home.to_string_lossy().to_string();

    // A real (non --test) init writes the config file under $HOME/.timecard.
    tc().env("HOME", &home)
        .args(["--db", &db_path, "init"])
        .assert()
        .success();

    tc().env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration"))
        .stdout(contains("database:"))
        .stdout(contains("cooldown_seconds: 60"));

    tc().env("HOME", &home)
        .args(["config"])
        .assert()
        .success()
        .stdout(contains("Use --print to show it or --edit to open it"));
}
