pub mod export;
pub mod reset;
pub mod scan;

/// The history store belongs to the validation script; when its file is
/// absent there is nothing to repair on this side.
pub(crate) const MSG_DB_MISSING: &str = "データベースが見つかりません";
