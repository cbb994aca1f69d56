use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

mod common;
use common::{HEADER, setup_test_dir_arg, tat};

/// New data dir with one day-based timesheet "Client A" at rate 20
fn setup_with_sheet(name: &str) -> String {
    let dir = setup_test_dir_arg(name);

    tat()
        .args(["--data-dir", &dir, "new", "Client A", "--rate", "20"])
        .assert()
        .success()
        .stdout(contains("Client_A"));

    dir
}

fn csv_of(dir: &str) -> String {
    let path = PathBuf::from(dir).join("Client_A").join("ts_client_a.csv");
    fs::read_to_string(path).expect("read timesheet csv")
}

#[test]
fn test_add_and_show_entries() {
    let dir = setup_with_sheet("cli_add_show");

    tat()
        .args(["--data-dir", &dir, "add", "3.5", "Meeting", "--date", "2025-09-01"])
        .assert()
        .success()
        .stdout(contains("Added #1"));

    tat()
        .args(["--data-dir", &dir, "add", "1", "Code", "review", "--date", "02/09/2025", "--rate", "30"])
        .assert()
        .success();

    assert_eq!(
        csv_of(&dir),
        format!("{HEADER}\n2025-09-01,3.5,Meeting,20\n2025-09-02,1,Code review,30\n")
    );

    tat()
        .args(["--data-dir", &dir, "show"])
        .assert()
        .success()
        .stdout(contains("01 Sep 2025"))
        .stdout(contains("Code review"))
        .stdout(contains("£70.00"))
        .stdout(contains("£100.00"))
        .stdout(contains("4.5 days"));
}

#[test]
fn test_add_invalid_entry_is_rejected() {
    let dir = setup_with_sheet("cli_add_invalid");

    tat()
        .args(["--data-dir", &dir, "add", "abc", "Meeting"])
        .assert()
        .failure()
        .stderr(contains("invalid duration 'abc'"));

    tat()
        .args(["--data-dir", &dir, "add", "1", "Meeting", "--date", "31 Foo"])
        .assert()
        .failure()
        .stderr(contains("invalid date"));

    assert_eq!(csv_of(&dir), format!("{HEADER}\n"));
}

#[test]
fn test_edit_entry() {
    let dir = setup_with_sheet("cli_edit");

    tat()
        .args(["--data-dir", &dir, "add", "1", "Meeting", "--date", "2025-09-01"])
        .assert()
        .success();

    tat()
        .args(["--data-dir", &dir, "edit", "1", "--activity", "Workshop", "--duration", "2"])
        .assert()
        .success()
        .stdout(contains("Entry #1 updated"));

    assert_eq!(csv_of(&dir), format!("{HEADER}\n2025-09-01,2,Workshop,20\n"));

    tat()
        .args(["--data-dir", &dir, "edit", "1", "--activity", "Workshop"])
        .assert()
        .success()
        .stdout(contains("unchanged"));

    for id in ["0", "4"] {
        tat()
            .args(["--data-dir", &dir, "edit", id, "--activity", "Nope"])
            .assert()
            .failure()
            .stderr(contains(format!("Entry #{id} does not exist (timesheet has 1 entries)")));
    }
}

#[test]
fn test_delete_entries() {
    let dir = setup_with_sheet("cli_del");

    for (date, act) in [("2025-09-01", "A"), ("2025-09-02", "B"), ("2025-09-03", "C")] {
        tat()
            .args(["--data-dir", &dir, "add", "1", act, "--date", date])
            .assert()
            .success();
    }

    tat()
        .args(["--data-dir", &dir, "del", "1", "3", "3", "--yes"])
        .assert()
        .success()
        .stdout(contains("2 entries removed"));

    assert_eq!(csv_of(&dir), format!("{HEADER}\n2025-09-02,1,B,20\n"));

    tat()
        .args(["--data-dir", &dir, "del", "9", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Entry #9 does not exist"));
}

#[test]
fn test_hour_timebase_normalizes_input() {
    let dir = setup_test_dir_arg("cli_hours");

    tat()
        .args(["--data-dir", &dir, "new", "Client A", "--rate", "40", "--timebase", "hour", "--currency", "€"])
        .assert()
        .success();

    tat()
        .args(["--data-dir", &dir, "add", "1:30", "Support", "--date", "2025-09-01"])
        .assert()
        .success();

    tat()
        .args(["--data-dir", &dir, "add", "-1", "Support"])
        .assert()
        .failure();

    assert_eq!(csv_of(&dir), format!("{HEADER}\n2025-09-01,1.5,Support,40\n"));

    tat()
        .args(["--data-dir", &dir, "show"])
        .assert()
        .success()
        .stdout(contains("€60.00"))
        .stdout(contains("1.5 hours"));
}

#[test]
fn test_set_changes_settings() {
    let dir = setup_with_sheet("cli_set");

    tat()
        .args(["--data-dir", &dir, "set", "--rate", "25", "--currency", "$"])
        .assert()
        .success();

    let conf = fs::read_to_string(PathBuf::from(&dir).join("Client_A").join("ts_client_a.conf"))
        .unwrap();
    assert_eq!(conf, "name=Client_A\nrate=25\ncurrency=$\ntimebase=day\n");

    tat()
        .args(["--data-dir", &dir, "set", "--rate", "-3"])
        .assert()
        .failure();
}

#[test]
fn test_commands_need_a_timesheet() {
    let dir = setup_test_dir_arg("cli_no_sheet");

    tat()
        .args(["--data-dir", &dir, "show"])
        .assert()
        .failure()
        .stderr(contains("No timesheet is open"));

    tat()
        .args(["--data-dir", &dir, "list"])
        .assert()
        .success()
        .stdout(contains("no timesheets yet"));
}

#[test]
fn test_open_list_and_sheet_override() {
    let dir = setup_with_sheet("cli_open");

    tat()
        .args(["--data-dir", &dir, "new", "Other", "--rate", "10"])
        .assert()
        .success();

    tat()
        .args(["--data-dir", &dir, "list"])
        .assert()
        .success()
        .stdout(contains("* Other"))
        .stdout(contains("  Client_A"));

    // one-off override does not move the pointer
    tat()
        .args(["--data-dir", &dir, "--sheet", "Client A", "add", "1", "Meeting", "--date", "2025-09-01"])
        .assert()
        .success();

    tat()
        .args(["--data-dir", &dir, "list"])
        .assert()
        .success()
        .stdout(contains("* Other"));

    tat()
        .args(["--data-dir", &dir, "open", "Client A"])
        .assert()
        .success()
        .stdout(contains("1 entries"));

    tat()
        .args(["--data-dir", &dir, "list"])
        .assert()
        .success()
        .stdout(contains("* Client_A"));

    tat()
        .args(["--data-dir", &dir, "open", "Missing"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_new_existing_timesheet_fails() {
    let dir = setup_with_sheet("cli_new_twice");

    tat()
        .args(["--data-dir", &dir, "new", "Client_A", "--rate", "99"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_export_csv_and_json() {
    let dir = setup_with_sheet("cli_export");

    tat()
        .args(["--data-dir", &dir, "add", "2", "Design, review", "--date", "2025-09-01"])
        .assert()
        .success();

    let out_csv = PathBuf::from(&dir).join("out.csv");
    let out_csv = out_csv.to_string_lossy().to_string();

    tat()
        .args(["--data-dir", &dir, "export", "--file", &out_csv])
        .assert()
        .success()
        .stdout(contains("Export completed"));

    assert_eq!(
        fs::read_to_string(&out_csv).unwrap(),
        format!("{HEADER}\n2025-09-01,2,\"Design, review\",20\n")
    );

    tat()
        .args(["--data-dir", &dir, "export", "--file", &out_csv])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    tat()
        .args(["--data-dir", &dir, "export", "--format", "json", "--file", &out_csv, "--force"])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_csv).unwrap()).unwrap();
    assert_eq!(json["rows"][0]["activity"], "Design, review");
    assert_eq!(json["total_earnings"], 40.0);
}

#[test]
fn test_delete_timesheet_resets_current() {
    let dir = setup_with_sheet("cli_delete_sheet");

    tat()
        .args(["--data-dir", &dir, "delete", "Client A", "--yes"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    assert!(!PathBuf::from(&dir).join("Client_A").exists());

    tat()
        .args(["--data-dir", &dir, "show"])
        .assert()
        .failure()
        .stderr(contains("No timesheet is open"));

    tat()
        .args(["--data-dir", &dir, "delete", "Client A", "--yes"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_config_print() {
    let dir = setup_with_sheet("cli_config");

    tat()
        .args(["--data-dir", &dir, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("last=Client_A"))
        .stdout(contains("rate=20").and(contains("currency=£")));
}
