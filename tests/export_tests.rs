use predicates::str::contains;
use std::fs;

mod common;
use common::{insert_history, qrg, setup_history_db, temp_out};

const HEADER: &str = "\"QRデータ\",\"入場日時\",\"ステータス\",\"入場種別\",\"NG理由\"";

#[test]
fn test_export_without_file_is_cancelled() {
    let history = setup_history_db("export_cancelled");

    qrg()
        .args(["export", "--history-db", &history])
        .assert()
        .success()
        .stdout(contains("保存がキャンセルされました"));

    qrg()
        .args(["--json", "export", "--history-db", &history])
        .assert()
        .success()
        .stdout(contains("\"status\":\"cancelled\""));
}

#[test]
fn test_export_missing_history_store_is_error() {
    let out = temp_out("export_missing", "csv");

    qrg()
        .args([
            "export",
            "--history-db",
            "/definitely/not/a/real/attendance.db",
            "--file",
            &out,
        ])
        .assert()
        .success()
        .stdout(contains("データベースが見つかりません"));
}

#[test]
fn test_export_writes_bom_header_and_quoted_rows() {
    let history = setup_history_db("export_rows");
    insert_history(
        &history,
        "祭2025,12",
        "2025-08-25 10:00:00",
        "OK",
        "初回入場",
        None,
    );
    insert_history(
        &history,
        "祭2025,9",
        "2025-08-25 11:00:00",
        "NG",
        "連番NG",
        Some("無効な連番 (下限: 10 > QR: 9)"),
    );

    let out = temp_out("export_rows", "csv");
    qrg()
        .args(["export", "--history-db", &history, "--file", &out])
        .assert()
        .success()
        .stdout(contains("エクスポートが完了しました (2件)"));

    let bytes = fs::read(&out).unwrap();
    assert_eq!(&bytes[..3], [0xEF, 0xBB, 0xBF]);

    let content = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], HEADER);
    // newest entry first
    assert_eq!(
        lines[1],
        "\"祭2025,9\",\"2025-08-25 11:00:00\",\"NG\",\"連番NG\",\"無効な連番 (下限: 10 > QR: 9)\""
    );
    // NULL ng_reason becomes an empty quoted field
    assert_eq!(
        lines[2],
        "\"祭2025,12\",\"2025-08-25 10:00:00\",\"OK\",\"初回入場\",\"\""
    );
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_export_empty_history_is_header_only() {
    let history = setup_history_db("export_empty");
    let out = temp_out("export_empty", "csv");

    qrg()
        .args(["export", "--history-db", &history, "--file", &out])
        .assert()
        .success()
        .stdout(contains("(0件)"));

    let bytes = fs::read(&out).unwrap();
    assert_eq!(&bytes[..3], [0xEF, 0xBB, 0xBF]);
    let content = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(content, format!("{}\n", HEADER));
}

#[test]
fn test_clear_then_export_yields_zero_rows() {
    let history = setup_history_db("clear_then_export");
    insert_history(
        &history,
        "祭2025,12",
        "2025-08-25 10:00:00",
        "OK",
        "初回入場",
        None,
    );

    qrg()
        .args(["clear", "--yes", "--history-db", &history])
        .assert()
        .success()
        .stdout(contains("データベースをクリアしました"));

    let out = temp_out("clear_then_export", "csv");
    qrg()
        .args(["export", "--history-db", &history, "--file", &out])
        .assert()
        .success()
        .stdout(contains("(0件)"));

    let bytes = fs::read(&out).unwrap();
    let content = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(content, format!("{}\n", HEADER));
}

#[test]
fn test_clear_missing_history_store_is_error() {
    qrg()
        .args([
            "--json",
            "clear",
            "--yes",
            "--history-db",
            "/definitely/not/a/real/attendance.db",
        ])
        .assert()
        .success()
        .stdout(contains("\"status\":\"error\""))
        .stdout(contains("データベースが見つかりません"));
}

#[test]
fn test_clear_prompt_declined_keeps_records() {
    let history = setup_history_db("clear_declined");
    insert_history(
        &history,
        "祭2025,12",
        "2025-08-25 10:00:00",
        "OK",
        "初回入場",
        None,
    );

    qrg()
        .args(["clear", "--history-db", &history])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Aborted."));

    let conn = rusqlite::Connection::open(&history).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM history", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 1);
}
