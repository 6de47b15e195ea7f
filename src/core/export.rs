use crate::core::MSG_DB_MISSING;
use crate::db::history;
use crate::db::models::HistoryRecord;
use crate::errors::{AppError, AppResult};
use crate::models::response::OpResponse;
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::Write;

/// Header understood by the event staff's spreadsheet templates.
const CSV_HEADER: [&str; 5] = ["QRデータ", "入場日時", "ステータス", "入場種別", "NG理由"];

const MSG_CANCELLED: &str = "保存がキャンセルされました";

pub struct ExportLogic;

impl ExportLogic {
    /// Export the history store as CSV. `file = None` means the operator
    /// backed out of choosing a destination.
    pub fn export(history_db: &str, file: Option<&str>) -> OpResponse {
        let Some(path) = file else {
            return OpResponse::cancelled(MSG_CANCELLED);
        };

        match Self::write_csv(history_db, path) {
            Ok(count) => {
                OpResponse::success(format!("エクスポートが完了しました ({}件)", count))
            }
            Err(AppError::HistoryMissing(_)) => OpResponse::error(MSG_DB_MISSING.to_string()),
            Err(e) => OpResponse::error(format!("エクスポートに失敗しました: {}", e)),
        }
    }

    fn write_csv(history_db: &str, path: &str) -> AppResult<usize> {
        let conn = history::open_read_only(history_db)?;
        let records = history::fetch_all(&conn)?;
        drop(conn);

        let mut file = File::create(path)?;
        // UTF-8 BOM so Excel picks the right encoding for the Japanese header
        file.write_all("\u{FEFF}".as_bytes())?;

        let mut wtr = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(file);

        wtr.write_record(CSV_HEADER)?;
        for rec in &records {
            wtr.write_record(csv_fields(rec))?;
        }
        wtr.flush()?;

        Ok(records.len())
    }
}

fn csv_fields(rec: &HistoryRecord) -> [&str; 5] {
    [
        rec.qr_data.as_deref().unwrap_or(""),
        rec.entry_time.as_deref().unwrap_or(""),
        rec.status.as_deref().unwrap_or(""),
        rec.entry_type.as_deref().unwrap_or(""),
        rec.ng_reason.as_deref().unwrap_or(""),
    ]
}
