use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::parse_ts;
use rusqlite::OptionalExtension;
use std::fs;

/// Output for `db --info`: file size, row counts, collection date range,
/// average collections per day.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    let staff_count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM staff", [], |row| row.get(0))?;
    println!(
        "{}• Staff members:{} {}{}{}",
        CYAN, RESET, GREEN, staff_count, RESET
    );

    let collection_count: i64 =
        pool.conn
            .query_row("SELECT COUNT(*) FROM food_collections", [], |row| {
                row.get(0)
            })?;
    println!(
        "{}• Collection events:{} {}{}{}",
        CYAN, RESET, GREEN, collection_count, RESET
    );

    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT time_collected FROM food_collections
             ORDER BY time_collected ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT time_collected FROM food_collections
             ORDER BY time_collected DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.clone().unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.clone().unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Collection range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    if let (Some(f), Some(l)) = (first.and_then(|s| parse_ts(&s)), last.and_then(|s| parse_ts(&s))) {
        let days = (l.date_naive() - f.date_naive()).num_days().max(0) + 1;
        let avg = collection_count as f64 / days as f64;
        println!("{}• Average collections/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
