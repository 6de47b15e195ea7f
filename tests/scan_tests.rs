use predicates::str::contains;

mod common;
use common::{count_logs, init_main_db, qrg, setup_test_db};

#[test]
fn test_scan_unknown_id_is_error_without_insert() {
    let db_path = setup_test_db("scan_unknown");
    init_main_db(&db_path);

    qrg()
        .args(["--db", &db_path, "scan", "NOPE999"])
        .assert()
        .success()
        .stdout(contains("無効なIDです"));

    assert_eq!(count_logs(&db_path), 0);
}

#[test]
fn test_scan_seed_participant_then_duplicate_warning() {
    let db_path = setup_test_db("scan_duplicate");
    init_main_db(&db_path);

    qrg()
        .args(["--db", &db_path, "scan", "TEST001"])
        .assert()
        .success()
        .stdout(contains("入場しました"))
        .stdout(contains("TEST001"));

    qrg()
        .args(["--db", &db_path, "scan", "TEST001"])
        .assert()
        .success()
        .stdout(contains("既に入場済みです"));

    // the duplicate must not insert a second row
    assert_eq!(count_logs(&db_path), 1);
}

#[test]
fn test_scan_json_response_shape() {
    let db_path = setup_test_db("scan_json");
    init_main_db(&db_path);

    qrg()
        .args(["--db", &db_path, "--json", "scan", "TEST001"])
        .assert()
        .success()
        .stdout(contains("\"status\":\"success\""))
        .stdout(contains("\"message\":\"入場しました\""))
        .stdout(contains("\"id\":\"TEST001\""))
        .stdout(contains("登録済"));

    qrg()
        .args(["--db", &db_path, "--json", "scan", "TEST001"])
        .assert()
        .success()
        .stdout(contains("\"status\":\"warning\""));

    qrg()
        .args(["--db", &db_path, "--json", "scan", "UNKNOWN"])
        .assert()
        .success()
        .stdout(contains("\"status\":\"error\""));
}

#[test]
fn test_scan_again_after_session_closed() {
    let db_path = setup_test_db("scan_reentry");
    init_main_db(&db_path);

    qrg()
        .args(["--db", &db_path, "scan", "TEST001"])
        .assert()
        .success()
        .stdout(contains("入場しました"));

    // close the open session by hand; no command does this
    let conn = rusqlite::Connection::open(&db_path).unwrap();
    conn.execute("UPDATE logs SET exit_time = '2025-08-25T12:00:00Z'", [])
        .unwrap();
    drop(conn);

    qrg()
        .args(["--db", &db_path, "scan", "TEST001"])
        .assert()
        .success()
        .stdout(contains("入場しました"));

    assert_eq!(count_logs(&db_path), 2);
}

#[test]
fn test_scan_on_uninitialized_store_is_uniform_error() {
    let db_path = setup_test_db("scan_no_init");

    qrg()
        .args(["--db", &db_path, "scan", "TEST001"])
        .assert()
        .success()
        .stdout(contains("システムエラーが発生しました"));
}

#[test]
fn test_list_shows_recorded_entries() {
    let db_path = setup_test_db("list_entries");
    init_main_db(&db_path);

    qrg()
        .args(["--db", &db_path, "scan", "TEST001"])
        .assert()
        .success();

    qrg()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("TEST001"))
        .stdout(contains("PC-01"))
        .stdout(contains("登録済"));
}

#[test]
fn test_internal_log_records_init_and_scan() {
    let db_path = setup_test_db("journal");
    init_main_db(&db_path);

    qrg()
        .args(["--db", &db_path, "scan", "TEST001"])
        .assert()
        .success();

    qrg()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("scan (TEST001)"));
}
