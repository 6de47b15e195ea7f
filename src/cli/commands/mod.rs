pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod scan;
pub mod validate;

use crate::errors::{AppError, AppResult};
use crate::models::response::{OpResponse, ScanResponse};
use crate::ui::messages;

/// Print a scan response: JSON for machines, status lines for operators.
pub(crate) fn emit_scan(resp: &ScanResponse, json: bool) -> AppResult<()> {
    if json {
        println!("{}", to_json(resp)?);
        return Ok(());
    }
    messages::status_line(resp.status, &resp.message);
    if let Some(user) = &resp.user {
        println!("   {} ({})", user.id, user.status);
    }
    Ok(())
}

pub(crate) fn emit_op(resp: &OpResponse, json: bool) -> AppResult<()> {
    if json {
        println!("{}", to_json(resp)?);
        return Ok(());
    }
    messages::status_line(resp.status, &resp.message);
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string(value).map_err(|e| AppError::Other(e.to_string()))
}
