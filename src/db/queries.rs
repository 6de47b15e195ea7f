use crate::db::models::{LogRow, Participant};
use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn find_participant(conn: &Connection, id: &str) -> AppResult<Option<Participant>> {
    let mut stmt = conn.prepare_cached("SELECT id, status FROM participants WHERE id = ?1")?;
    let row = stmt
        .query_row([id], |row| {
            Ok(Participant {
                id: row.get("id")?,
                status: row.get("status")?,
            })
        })
        .optional()?;
    Ok(row)
}

fn map_log_row(row: &Row) -> Result<LogRow> {
    Ok(LogRow {
        record_id: row.get("record_id")?,
        participant_id: row.get("participant_id")?,
        entry_time: row.get("entry_time")?,
        exit_time: row.get("exit_time")?,
        terminal_id: row.get("terminal_id")?,
    })
}

/// Most recent log row for a participant, the duplicate-entry guard input.
pub fn last_log(conn: &Connection, participant_id: &str) -> AppResult<Option<LogRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT record_id, participant_id, entry_time, exit_time, terminal_id
         FROM logs
         WHERE participant_id = ?1
         ORDER BY record_id DESC
         LIMIT 1",
    )?;
    let row = stmt.query_row([participant_id], map_log_row).optional()?;
    Ok(row)
}

/// Record an entry. `exit_time` stays NULL; no flow closes a session.
pub fn insert_entry(
    conn: &Connection,
    participant_id: &str,
    entry_time: &str,
    terminal_id: &str,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO logs (participant_id, entry_time, terminal_id) VALUES (?1, ?2, ?3)",
        params![participant_id, entry_time, terminal_id],
    )?;
    Ok(())
}

/// All entry logs joined with participant status, newest first.
pub fn all_logs(conn: &Connection) -> AppResult<Vec<(LogRow, Option<String>)>> {
    let mut stmt = conn.prepare(
        "SELECT logs.record_id, logs.participant_id, logs.entry_time,
                logs.exit_time, logs.terminal_id, participants.status
         FROM logs
         LEFT JOIN participants ON logs.participant_id = participants.id
         ORDER BY logs.record_id DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        let log = map_log_row(row)?;
        let status: Option<String> = row.get("status")?;
        Ok((log, status))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
