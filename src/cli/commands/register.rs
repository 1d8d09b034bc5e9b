use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::register::{RegisterLogic, RegistrationForm};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Register a new staff member. The repository error message, if any, is
/// surfaced verbatim through main's error path.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Register {
        id,
        name,
        tag,
        email,
        lab,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        let form = RegistrationForm {
            staff_id: id.clone(),
            staff_name: name.clone(),
            tag: tag.clone(),
            email: email.clone(),
            lab: lab.clone(),
        };

        let staff = RegisterLogic::apply(&pool.conn, &form)?;

        success(format!(
            "Staff added: {} (id {}, tag {}, lab {})",
            staff.staff_name, staff.staff_id, staff.tag, staff.lab
        ));
        info("Fingerprint enrollment armed (control row written).");
    }
    Ok(())
}
