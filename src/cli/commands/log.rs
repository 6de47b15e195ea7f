use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let pool = DbPool::new(&cfg.database)?;
        let entries = log::read_all(&pool.conn)?;

        if entries.is_empty() {
            messages::info("Internal log is empty.");
            return Ok(());
        }

        for (id, date, operation, target, message) in entries {
            let op_target = if target.is_empty() {
                operation
            } else {
                format!("{} ({})", operation, target)
            };
            println!("{:<5} {}  {:<20} {}", id, date, op_target, message);
        }
    }
    Ok(())
}
