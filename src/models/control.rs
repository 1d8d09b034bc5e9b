use chrono::{DateTime, Utc};

/// Side-channel instruction written alongside a staff registration.
///
/// Consumed by the external fingerprint-capture device, never read back
/// by this application.
#[derive(Debug, Clone)]
pub struct ControlCommand {
    pub id: String, // ⇔ control.id (uuid v4)
    pub mode: CommandMode, // ⇔ control.mode
    pub staff_id: i64, // ⇔ control.staffid
    pub created_at: DateTime<Utc>, // ⇔ control.created_at
}

impl ControlCommand {
    /// Arm a fingerprint-registration cycle for the given staff member.
    pub fn register(staff_id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            mode: CommandMode::Register,
            staff_id,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandMode {
    Register,
}

impl CommandMode {
    pub fn to_db_str(self) -> &'static str {
        match self {
            CommandMode::Register => "register",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "register" => Some(CommandMode::Register),
            _ => None,
        }
    }
}
