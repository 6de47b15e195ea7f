//! Bridge to the external QR validation script.
//!
//! One blocking subprocess invocation per call: the request is flattened to
//! five positional string arguments, the script writes lines to stdout, and
//! only the last line counts. It is parsed as JSON `{status, msg}` and
//! returned unchanged. Every failure mode collapses into an `ERROR` outcome;
//! this boundary never surfaces an `Err`. No retry, no timeout, no
//! cancellation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::process::Command;

const MSG_NO_RESPONSE: &str = "検証スクリプトからの応答がありません";
const MSG_PARSE_FAILED: &str = "検証スクリプト出力の解析に失敗しました";

#[derive(Debug, Clone)]
pub struct ValidationRequest {
    pub qr_data: String,
    pub event_val: String,
    pub min_seq: i64,
    pub check_event: bool,
    pub check_seq: bool,
}

impl ValidationRequest {
    /// Positional argument order is part of the script contract.
    pub fn to_args(&self) -> [String; 5] {
        [
            self.qr_data.clone(),
            self.event_val.clone(),
            self.min_seq.to_string(),
            self.check_event.to_string(),
            self.check_seq.to_string(),
        ]
    }
}

/// Verdict of the script, passed through as-is when the last stdout line
/// parses. `status` is `OK`, `NG` or `ERROR` in practice but is not
/// constrained here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationOutcome {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub msg: String,
}

impl ValidationOutcome {
    pub fn error(msg: impl Into<String>) -> Self {
        Self {
            status: "ERROR".to_string(),
            msg: msg.into(),
        }
    }
}

/// Injectable validation capability. The shell wires in [`ScriptValidator`];
/// tests can substitute any closure.
pub trait QrValidator {
    fn validate(&self, req: &ValidationRequest) -> ValidationOutcome;
}

/// Adapter turning a plain function into a validator.
pub struct FnValidator<F>(pub F);

impl<F> QrValidator for FnValidator<F>
where
    F: Fn(&ValidationRequest) -> ValidationOutcome,
{
    fn validate(&self, req: &ValidationRequest) -> ValidationOutcome {
        (self.0)(req)
    }
}

/// Runs `interpreter script <args…>` and interprets the last stdout line.
pub struct ScriptValidator {
    interpreter: String,
    script: PathBuf,
}

impl ScriptValidator {
    pub fn new(interpreter: &str, script: &str) -> Self {
        Self {
            interpreter: interpreter.to_string(),
            script: PathBuf::from(script),
        }
    }
}

impl QrValidator for ScriptValidator {
    fn validate(&self, req: &ValidationRequest) -> ValidationOutcome {
        let output = match Command::new(&self.interpreter)
            .arg(&self.script)
            .args(req.to_args())
            .output()
        {
            Ok(out) => out,
            Err(e) => {
                return ValidationOutcome::error(format!("検証スクリプト実行エラー: {}", e));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return ValidationOutcome::error(format!(
                "検証スクリプト実行エラー: {} {}",
                output.status,
                stderr.trim()
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        match stdout.lines().last() {
            None => ValidationOutcome::error(MSG_NO_RESPONSE),
            Some(line) => serde_json::from_str(line).unwrap_or_else(|_| {
                eprintln!("Validator raw output: {:?}", stdout);
                ValidationOutcome::error(MSG_PARSE_FAILED)
            }),
        }
    }
}
