use serde::Serialize;

/// Row from the `participants` registry. Never mutated by check-in logic.
#[derive(Debug, Clone, Serialize)]
pub struct Participant {
    pub id: String,
    pub status: String,
}

/// Row from the `logs` table. A session is "open" while `exit_time` is NULL.
#[derive(Debug, Clone, Serialize)]
pub struct LogRow {
    pub record_id: i64,
    pub participant_id: String,
    pub entry_time: String,
    pub exit_time: Option<String>,
    pub terminal_id: Option<String>,
}

/// Row from the validator-owned `history` store, export/clear only.
/// Every field is nullable upstream; NULLs become empty CSV fields.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecord {
    pub qr_data: Option<String>,
    pub entry_time: Option<String>,
    pub status: Option<String>,
    pub entry_type: Option<String>,
    pub ng_reason: Option<String>,
}
