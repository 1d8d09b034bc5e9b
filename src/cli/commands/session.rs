use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::repo;
use crate::errors::{AppError, AppResult};
use crate::session;
use crate::ui::messages::success;

/// Handle `login` and `logout`: persisted identity, no credential check.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Login { staff } => {
            let pool = DbPool::new(&cfg.database)?;
            let member =
                repo::find_staff(&pool.conn, *staff)?.ok_or(AppError::StaffNotFound(*staff))?;

            session::login(&member)?;
            success(format!(
                "Logged in as {} (id {})",
                member.staff_name, member.staff_id
            ));
        }
        Commands::Logout => {
            session::logout()?;
            success("Logged out.");
        }
        _ => {}
    }
    Ok(())
}
