use crate::core::MSG_DB_MISSING;
use crate::db::history;
use crate::errors::{AppError, AppResult};
use crate::models::response::OpResponse;

pub struct ResetLogic;

impl ResetLogic {
    /// Delete every record in the history store. Unconditional at this
    /// layer; any confirmation lives in the shell.
    pub fn clear(history_db: &str) -> OpResponse {
        match Self::clear_all(history_db) {
            Ok(()) => OpResponse::success("データベースをクリアしました".to_string()),
            Err(AppError::HistoryMissing(_)) => OpResponse::error(MSG_DB_MISSING.to_string()),
            Err(e) => OpResponse::error(format!("クリアに失敗しました: {}", e)),
        }
    }

    fn clear_all(history_db: &str) -> AppResult<()> {
        let conn = history::open_read_write(history_db)?;
        history::clear_all(&conn)?;
        Ok(())
    }
}
