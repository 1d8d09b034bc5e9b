use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::{build_dashboard, DashboardModel};
use crate::db::pool::DbPool;
use crate::db::watch::CollectionWatcher;
use crate::errors::{AppError, AppResult};
use crate::models::filter::{CheckStatus, StaffFilter};
use crate::ui::messages::{error, info};
use crate::utils::colors::{color_for_pending, colorize_status, CYAN, RESET};
use crate::utils::date;
use crate::utils::table::Table;
use std::sync::mpsc;
use std::time::Duration;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        date: d,
        search,
        lab,
        tag,
        status,
        checkins,
        watch,
    } = cmd
    {
        let day = match d {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let status = match status {
            Some(s) => Some(
                CheckStatus::from_code(s)
                    .ok_or_else(|| AppError::Validation(format!("unknown status '{}'", s)))?,
            ),
            None => None,
        };

        let filter = StaffFilter {
            search: search.clone(),
            lab: lab.clone(),
            tag: tag.clone(),
            status,
        };

        let pool = DbPool::new(&cfg.database)?;
        fetch_and_render(&pool, day, &filter, *checkins);

        if *watch {
            info("Watching for new collections (Ctrl+C to stop)...");

            let (tx, rx) = mpsc::channel();
            let _watcher = CollectionWatcher::spawn(
                &cfg.database,
                Duration::from_secs(cfg.poll_interval_secs.max(1)),
                move || {
                    let _ = tx.send(());
                },
            )?;

            // Each signal triggers a full refetch of the day, never an
            // incremental merge.
            while rx.recv().is_ok() {
                fetch_and_render(&pool, day, &filter, *checkins);
            }
        }
    }
    Ok(())
}

/// Fetch the day's model and render it. Repository failures are logged and
/// degrade to an empty view; they never abort the command.
fn fetch_and_render(pool: &DbPool, day: chrono::NaiveDate, filter: &StaffFilter, checkins: bool) {
    match build_dashboard(&pool.conn, day, filter) {
        Ok(model) => render(&model, checkins),
        Err(e) => {
            error(format!("Failed to load dashboard: {}", e));
            println!("\nNo data to display for {}.", day);
        }
    }
}

fn render(model: &DashboardModel, checkins: bool) {
    let s = &model.summary;

    println!("\n{}=== Food tokens — {} ==={}", CYAN, model.date, RESET);
    println!(
        "Total staff: {}  |  Collected: {}  |  Not collected: {}{}{}",
        s.total_staff,
        s.collected,
        color_for_pending(s.not_collected),
        s.not_collected,
        RESET
    );
    println!();

    if checkins {
        render_checkins(model);
    } else {
        render_staff(model);
    }
}

fn render_staff(model: &DashboardModel) {
    if model.staff.is_empty() {
        println!("No staff members match.");
        return;
    }

    let mut table = Table::new(vec!["Name", "Tag", "Email", "Lab", "Status"]);
    for member in &model.staff {
        let collected = model.checked_in.contains(&member.staff_id);
        let label = if collected { "Collected" } else { "Pending" };
        table.add_row(vec![
            member.staff_name.clone(),
            member.tag.to_string(),
            member.email.clone(),
            member.lab.clone(),
            colorize_status(label, collected),
        ]);
    }
    print!("{}", table.render());
}

fn render_checkins(model: &DashboardModel) {
    if model.checkins.is_empty() {
        println!("No check-ins on {}.", model.date);
        return;
    }

    let mut table = Table::new(vec!["Name", "Tag", "Time", "Date", "Status"]);
    for row in &model.checkins {
        // A dangling staff id still renders: the event carries its own tag.
        let (name, tag) = match &row.staff {
            Some(staff) => (staff.staff_name.clone(), staff.tag.to_string()),
            None => ("(unknown)".to_string(), row.event.tag.to_string()),
        };
        table.add_row(vec![
            name,
            tag,
            row.event.time_str(),
            row.event.date_str(),
            colorize_status("Collected", true),
        ]);
    }
    print!("{}", table.render());
}
