use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|_| AppError::ConfigSave)?;
            print!("{}", yaml);
        } else {
            messages::info(format!(
                "Config file: {} (use --print to show contents)",
                Config::config_file().display()
            ));
        }
    }
    Ok(())
}
