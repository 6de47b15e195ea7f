//! Access to the validator-owned history store.
//!
//! This store is written by the external validation script; here it is only
//! read (export) or cleared (reset). A fresh connection is opened per call
//! and closed on drop. The file is never created on this side: a missing
//! file is reported, not repaired.

use crate::db::models::HistoryRecord;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

pub fn open_read_only(path: &str) -> AppResult<Connection> {
    ensure_exists(path)?;
    let conn = Connection::open_with_flags(
        Path::new(path),
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}

pub fn open_read_write(path: &str) -> AppResult<Connection> {
    ensure_exists(path)?;
    let conn = Connection::open_with_flags(
        Path::new(path),
        OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?;
    Ok(conn)
}

fn ensure_exists(path: &str) -> AppResult<()> {
    if !Path::new(path).exists() {
        return Err(AppError::HistoryMissing(path.to_string()));
    }
    Ok(())
}

/// All audit records, newest entry first.
pub fn fetch_all(conn: &Connection) -> AppResult<Vec<HistoryRecord>> {
    let mut stmt = conn.prepare(
        "SELECT qr_data, entry_time, status, entry_type, ng_reason
         FROM history
         ORDER BY entry_time DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(HistoryRecord {
            qr_data: row.get("qr_data")?,
            entry_time: row.get("entry_time")?,
            status: row.get("status")?,
            entry_type: row.get("entry_type")?,
            ng_reason: row.get("ng_reason")?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn clear_all(conn: &Connection) -> AppResult<()> {
    conn.execute_batch("DELETE FROM history")?;
    Ok(())
}
