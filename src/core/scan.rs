use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::response::ScanResponse;
use chrono::{SecondsFormat, Utc};

const MSG_INVALID_ID: &str = "無効なIDです";
const MSG_ALREADY_IN: &str = "既に入場済みです";
const MSG_ENTERED: &str = "入場しました";
const MSG_SYSTEM_ERROR: &str = "システムエラーが発生しました";

pub struct ScanLogic;

impl ScanLogic {
    /// Run the check-in flow for one scanned id.
    ///
    /// Store failures never escape this boundary: they go to the console
    /// for the machine operator and come back as a uniform error response.
    pub fn scan(pool: &mut DbPool, cfg: &Config, qr_id: &str) -> ScanResponse {
        match Self::check_in(pool, cfg, qr_id) {
            Ok(resp) => resp,
            Err(e) => {
                eprintln!("Database operation error: {}", e);
                ScanResponse::error(MSG_SYSTEM_ERROR)
            }
        }
    }

    fn check_in(pool: &mut DbPool, cfg: &Config, qr_id: &str) -> AppResult<ScanResponse> {
        // 1. Registry lookup
        let Some(user) = queries::find_participant(&pool.conn, qr_id)? else {
            return Ok(ScanResponse::error(MSG_INVALID_ID));
        };

        // 2. Duplicate guard: the latest row still open blocks re-entry
        if let Some(last) = queries::last_log(&pool.conn, qr_id)?
            && last.exit_time.is_none()
        {
            return Ok(ScanResponse::warning(MSG_ALREADY_IN, user));
        }

        // 3. Record the entry
        let entry_time = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        queries::insert_entry(&pool.conn, qr_id, &entry_time, &cfg.terminal_id)?;

        if let Err(e) = log::oplog(
            &pool.conn,
            "scan",
            qr_id,
            &format!("Entry recorded at {}", entry_time),
        ) {
            eprintln!("Failed to write internal log: {}", e);
        }

        Ok(ScanResponse::success(MSG_ENTERED, user))
    }
}
