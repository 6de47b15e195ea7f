use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages;

/// Print all recorded entries joined with the participant registry,
/// newest first. An empty `exit` column marks a still-open session.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let rows = queries::all_logs(&pool.conn)?;

    if rows.is_empty() {
        messages::info("No entries recorded.");
        return Ok(());
    }

    println!(
        "{:<6} {:<12} {:<26} {:<26} {:<8} {}",
        "id", "participant", "entry", "exit", "term", "status"
    );
    for (log, status) in rows {
        println!(
            "{:<6} {:<12} {:<26} {:<26} {:<8} {}",
            log.record_id,
            log.participant_id,
            log.entry_time,
            log.exit_time.unwrap_or_default(),
            log.terminal_id.unwrap_or_default(),
            status.unwrap_or_else(|| "未登録".to_string()),
        );
    }
    Ok(())
}
