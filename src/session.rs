//! Persisted "current user" identity.
//!
//! A Staff snapshot stored as JSON in the config directory: written on
//! login, read at startup by the views that need a current user, removed
//! on logout. This is identity persistence, not authentication — no
//! credential is checked anywhere.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::staff::Staff;
use std::fs;

/// The logged-in staff member, if any. A missing or unreadable session
/// file simply means nobody is logged in.
pub fn current_user() -> Option<Staff> {
    let path = Config::session_file();
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

/// Persist the given staff member as the current user.
pub fn login(staff: &Staff) -> AppResult<()> {
    let dir = Config::config_dir();
    fs::create_dir_all(&dir)?;

    let json = serde_json::to_string_pretty(staff)
        .map_err(|e| AppError::Session(format!("failed to serialize session: {}", e)))?;
    fs::write(Config::session_file(), json)?;
    Ok(())
}

/// Clear the current user. Idempotent.
pub fn logout() -> AppResult<()> {
    let path = Config::session_file();
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
