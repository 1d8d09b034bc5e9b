use crate::db::log::ttlog;
use crate::db::repo;
use crate::errors::{AppError, AppResult};
use crate::models::control::ControlCommand;
use crate::models::staff::Staff;
use crate::utils::date;
use rusqlite::Connection;

/// Raw registration input, exactly as submitted. Numeric fields stay
/// strings until `validate()` so a bad value surfaces as a validation
/// error rather than an argument-parse failure.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub staff_id: String,
    pub staff_name: String,
    pub tag: String,
    pub email: String,
    pub lab: String,
}

impl RegistrationForm {
    /// All fields required non-empty; staff id and tag must parse as
    /// integers.
    pub fn validate(&self) -> AppResult<Staff> {
        let staff_id = self.staff_id.trim();
        let staff_name = self.staff_name.trim();
        let tag = self.tag.trim();
        let email = self.email.trim();
        let lab = self.lab.trim();

        if staff_id.is_empty()
            || staff_name.is_empty()
            || tag.is_empty()
            || email.is_empty()
            || lab.is_empty()
        {
            return Err(AppError::Validation(
                "please fill in all required fields".to_string(),
            ));
        }

        let staff_id: i64 = staff_id
            .parse()
            .map_err(|_| AppError::Validation(format!("staff id must be a number: '{}'", staff_id)))?;
        let tag: i64 = tag
            .parse()
            .map_err(|_| AppError::Validation(format!("tag must be a number: '{}'", tag)))?;

        Ok(Staff {
            staff_id,
            staff_name: staff_name.to_string(),
            tag,
            email: email.to_string(),
            lab: lab.to_string(),
        })
    }
}

pub struct RegisterLogic;

impl RegisterLogic {
    /// Register a staff member: insert the staff row, then write the
    /// `mode='register'` control row that arms the external
    /// fingerprint-capture cycle.
    ///
    /// Strictly ordered: if the staff insert fails, no control row is
    /// written.
    pub fn apply(conn: &Connection, form: &RegistrationForm) -> AppResult<Staff> {
        let staff = form.validate()?;

        repo::insert_staff(conn, &staff)?;

        let cmd = ControlCommand::register(staff.staff_id, date::now());
        repo::insert_control(conn, &cmd)?;

        ttlog(
            conn,
            "register",
            &staff.staff_id.to_string(),
            &format!("Registered {} (tag {}, lab {})", staff.staff_name, staff.tag, staff.lab),
        )?;

        Ok(staff)
    }
}
