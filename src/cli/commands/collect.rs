use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::repo;
use crate::errors::{AppError, AppResult};
use crate::models::collection::CollectionEvent;
use crate::ui::messages::success;
use crate::utils::date;
use chrono::NaiveTime;

/// Record a token collection. This is the kiosk's write path exposed on
/// the CLI: the staff tag is captured at event time, and the one-per-day
/// rule applies.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Collect { staff, date: d, time } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        let member = repo::find_staff(&pool.conn, *staff)?
            .ok_or(AppError::StaffNotFound(*staff))?;

        let now = date::now();

        let day = match d {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => now.date_naive(),
        };

        let clock = match time {
            Some(s) => NaiveTime::parse_from_str(s, "%H:%M")
                .map_err(|_| AppError::InvalidTime(s.clone()))?,
            None => now.time(),
        };

        let when = day.and_time(clock).and_utc();
        let event = CollectionEvent::new(member.staff_id, member.tag, when);

        repo::insert_collection(&pool.conn, &event)?;

        ttlog(
            &pool.conn,
            "collect",
            &member.staff_id.to_string(),
            &format!("{} collected a token at {}", member.staff_name, date::format_ts(when)),
        )?;

        success(format!(
            "Collection recorded: {} (tag {}) at {}",
            member.staff_name,
            member.tag,
            when.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    Ok(())
}
