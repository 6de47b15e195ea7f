//! Uniform result shapes returned by every operation.
//!
//! No exception crosses an operation boundary: failures become an
//! `error`-status response with an operator-facing message.

use crate::db::models::Participant;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpStatus {
    Success,
    Warning,
    Cancelled,
    Error,
}

/// Response of the check-in flow. `user` rides along on success and on the
/// already-checked-in warning.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResponse {
    pub status: OpStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Participant>,
}

impl ScanResponse {
    pub fn success(message: &str, user: Participant) -> Self {
        Self {
            status: OpStatus::Success,
            message: message.to_string(),
            user: Some(user),
        }
    }

    pub fn warning(message: &str, user: Participant) -> Self {
        Self {
            status: OpStatus::Warning,
            message: message.to_string(),
            user: Some(user),
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            status: OpStatus::Error,
            message: message.to_string(),
            user: None,
        }
    }
}

/// Response of export/clear.
#[derive(Debug, Clone, Serialize)]
pub struct OpResponse {
    pub status: OpStatus,
    pub message: String,
}

impl OpResponse {
    pub fn success(message: String) -> Self {
        Self {
            status: OpStatus::Success,
            message,
        }
    }

    pub fn cancelled(message: &str) -> Self {
        Self {
            status: OpStatus::Cancelled,
            message: message.to_string(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            status: OpStatus::Error,
            message,
        }
    }
}
