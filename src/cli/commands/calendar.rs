use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{build_month, MonthModel};
use crate::db::pool::DbPool;
use crate::db::repo;
use crate::errors::{AppError, AppResult};
use crate::models::staff::Staff;
use crate::session;
use crate::ui::messages::{error, info};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET};
use crate::utils::date;
use chrono::{Datelike, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { staff, month, day } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        // Explicit --staff wins; otherwise fall back to the session user.
        let member: Staff = match staff {
            Some(id) => repo::find_staff(&pool.conn, *id)?.ok_or(AppError::StaffNotFound(*id))?,
            None => session::current_user().ok_or(AppError::NoSession)?,
        };

        let month_start = match month {
            Some(s) => date::parse_month(s).ok_or_else(|| AppError::InvalidMonth(s.clone()))?,
            None => date::first_day_of_month(date::today()),
        };

        let selected = match day {
            Some(n) => Some(
                NaiveDate::from_ymd_opt(month_start.year(), month_start.month(), *n)
                    .ok_or_else(|| AppError::InvalidDate(format!("{}-{:02}", month_start.format("%Y-%m"), n)))?,
            ),
            None => None,
        };

        match build_month(&pool.conn, member.staff_id, month_start) {
            Ok(model) => render(&model, &member, selected),
            Err(e) => {
                error(format!("Failed to load calendar: {}", e));
                println!("\nNo data to display for {}.", month_start.format("%B %Y"));
            }
        }
    }
    Ok(())
}

fn render(model: &MonthModel, member: &Staff, selected: Option<NaiveDate>) {
    println!(
        "\n{}=== Collection calendar — {} — {} (tag {}) ==={}",
        CYAN,
        model.month.format("%B %Y"),
        member.staff_name,
        member.tag,
        RESET
    );

    println!(" Su  Mo  Tu  We  Th  Fr  Sa");

    let leading = model.month.weekday().num_days_from_sunday() as usize;
    let mut col = leading;
    print!("{}", "    ".repeat(leading));

    for cell in &model.days {
        if cell.collected {
            print!("{}[{:2}]{}", GREEN, cell.date.day(), RESET);
        } else {
            print!("{} {:2} {}", GREY, cell.date.day(), RESET);
        }
        col += 1;
        if col % 7 == 0 {
            println!();
        }
    }
    if col % 7 != 0 {
        println!();
    }

    println!(
        "\n{}[n]{} collected   {} n {} no collection",
        GREEN, RESET, GREY, RESET
    );

    if let Some(day) = selected {
        // Selecting a day without events is a no-op: keep the plain
        // calendar, do not open an empty detail panel.
        match model.select_day(day) {
            Some(events) => {
                println!("\n{}{}:{}", CYAN, day.format("%B %d, %Y"), RESET);
                for ev in events {
                    println!("  Check-in  {}", ev.time_str());
                }
            }
            None => info(format!("No collection on {} — nothing to show.", day)),
        }
    }
}
