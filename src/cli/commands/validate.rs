use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::validator::{QrValidator, ScriptValidator, ValidationRequest};

/// Run one validation round-trip and print the script's verdict.
/// The outcome is always JSON on stdout; it is the wire format the rest of
/// the kiosk tooling consumes.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Validate {
        qr_data,
        event,
        min_seq,
        check_event,
        check_seq,
        script,
        interpreter,
    } = cmd
    {
        let req = ValidationRequest {
            qr_data: qr_data.clone(),
            event_val: event.clone().unwrap_or_else(|| cfg.event_name.clone()),
            min_seq: min_seq.unwrap_or(cfg.min_seq),
            check_event: *check_event || cfg.check_event,
            check_seq: *check_seq || cfg.check_seq,
        };

        let validator = ScriptValidator::new(
            interpreter.as_deref().unwrap_or(&cfg.interpreter),
            script.as_deref().unwrap_or(&cfg.validator_script),
        );

        let outcome = validator.validate(&req);
        let json = serde_json::to_string(&outcome).map_err(|e| AppError::Other(e.to_string()))?;
        println!("{}", json);
    }
    Ok(())
}
