#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn qrg() -> Command {
    cargo_bin_cmd!("qrgate")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_qrgate.sqlite", name));
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

/// Initialize the main store (creates tables and the TEST001 seed)
pub fn init_main_db(db_path: &str) {
    qrg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Count rows in the `logs` table of the main store
pub fn count_logs(db_path: &str) -> i64 {
    let conn = Connection::open(db_path).unwrap();
    conn.query_row("SELECT COUNT(*) FROM logs", [], |r| r.get(0))
        .unwrap()
}

/// Create a history store shaped like the one the validation script owns
pub fn setup_history_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attendance.db", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();

    let conn = Connection::open(&db_path).unwrap();
    conn.execute_batch(
        "CREATE TABLE history (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            qr_data TEXT,
            entry_time TEXT,
            status TEXT,
            entry_type TEXT,
            ng_reason TEXT
        )",
    )
    .unwrap();
    db_path
}

pub fn insert_history(
    db_path: &str,
    qr_data: &str,
    entry_time: &str,
    status: &str,
    entry_type: &str,
    ng_reason: Option<&str>,
) {
    let conn = Connection::open(db_path).unwrap();
    conn.execute(
        "INSERT INTO history (qr_data, entry_time, status, entry_type, ng_reason)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        rusqlite::params![qr_data, entry_time, status, entry_type, ng_reason],
    )
    .unwrap();
}

/// Write a stub validation script runnable with `sh`
pub fn write_script(name: &str, body: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_validator.sh", name));
    fs::write(&path, body).unwrap();
    path.to_string_lossy().to_string()
}
