use crate::cli::commands::emit_scan;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scan::ScanLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config, json: bool) -> AppResult<()> {
    if let Commands::Scan { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let resp = ScanLogic::scan(&mut pool, cfg, id);
        emit_scan(&resp, json)?;
    }
    Ok(())
}
