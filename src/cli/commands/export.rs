use crate::cli::commands::emit_op;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Export { file, history_db } = cmd {
        let db = history_db.as_deref().unwrap_or(&cfg.history_database);
        let resp = ExportLogic::export(db, file.as_deref());
        emit_op(&resp, json)?;
    }
    Ok(())
}
