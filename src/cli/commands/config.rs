use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "no configuration file at {:?} (run `tokentally init` first)",
                    path
                )));
            }
            println!("{}", fs::read_to_string(path)?);
        }

        if *check {
            let missing = Config::missing_fields();
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for f in missing {
                    warning(format!("Missing field: {}", f));
                }
            }
        }
    }
    Ok(())
}
