use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the main store: check-in tables plus the internal journal.
/// Idempotent, safe to run on every `init`.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS participants (
            id     TEXT PRIMARY KEY,
            status TEXT DEFAULT '未登録'
        );

        CREATE TABLE IF NOT EXISTS logs (
            record_id      INTEGER PRIMARY KEY AUTOINCREMENT,
            participant_id TEXT,
            entry_time     TEXT,
            exit_time      TEXT,
            terminal_id    TEXT,
            FOREIGN KEY(participant_id) REFERENCES participants(id)
        );

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;

    seed_participants(conn)?;
    Ok(())
}

/// Pre-registered test participant, same on every terminal.
fn seed_participants(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO participants (id, status) VALUES (?1, ?2)",
        ["TEST001", "登録済"],
    )?;
    Ok(())
}
