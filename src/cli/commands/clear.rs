use crate::cli::commands::emit_op;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reset::ResetLogic;
use crate::errors::AppResult;
use crate::ui::messages;
use std::io::{self, Write, stdin};

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Clear { yes, history_db } = cmd {
        let db = history_db.as_deref().unwrap_or(&cfg.history_database);

        // Confirmation is a shell concern; the reset itself is unconditional.
        if !*yes && !confirm(db)? {
            messages::info("Aborted.");
            return Ok(());
        }

        let resp = ResetLogic::clear(db);
        emit_op(&resp, json)?;
    }
    Ok(())
}

fn confirm(db: &str) -> AppResult<bool> {
    print!("Delete ALL history records in {}? [y/N] ", db);
    io::stdout().flush()?;

    let mut line = String::new();
    stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}
