use clap::{Parser, Subcommand};

/// Command-line interface definition for tokentally
/// CLI application to track staff food-token collections with SQLite
#[derive(Parser)]
#[command(
    name = "tokentally",
    version = env!("CARGO_PKG_VERSION"),
    about = "Register staff, record daily food-token collections, and view attendance dashboards",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print rows from the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register a new staff member (and arm fingerprint enrollment)
    Register {
        /// Staff id (number, assigned by you, stable)
        #[arg(long = "id")]
        id: String,

        /// Full name
        #[arg(long = "name")]
        name: String,

        /// Tag (number, short secondary code)
        #[arg(long = "tag")]
        tag: String,

        /// Email address
        #[arg(long = "email")]
        email: String,

        /// Lab / department label
        #[arg(long = "lab")]
        lab: String,
    },

    /// Record a food-token collection for a staff member
    Collect {
        /// Staff id collecting the token
        #[arg(long = "staff")]
        staff: i64,

        /// Collection date (YYYY-MM-DD, UTC; defaults to today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Collection time (HH:MM, UTC; defaults to now)
        #[arg(long = "time")]
        time: Option<String>,
    },

    /// Show the per-day collection dashboard
    Dashboard {
        /// Day to show (YYYY-MM-DD, defaults to today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Case-insensitive search against name and email
        #[arg(long = "search", short = 's')]
        search: Option<String>,

        /// Filter by lab label (exact, case-insensitive)
        #[arg(long = "lab")]
        lab: Option<String>,

        /// Filter by tag (substring of the tag number)
        #[arg(long = "tag")]
        tag: Option<String>,

        /// Filter by status: collected | pending
        #[arg(long = "status")]
        status: Option<String>,

        /// Show the day's check-in rows instead of the staff roster
        #[arg(long = "checkins", help = "Show today's check-ins table")]
        checkins: bool,

        /// Stay running and refresh when new collections are inserted
        #[arg(long = "watch")]
        watch: bool,
    },

    /// Show a staff member's monthly collection calendar
    Calendar {
        /// Staff id (defaults to the logged-in user)
        #[arg(long = "staff")]
        staff: Option<i64>,

        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(long = "month")]
        month: Option<String>,

        /// Day of month to inspect (shows that day's collection times)
        #[arg(long = "day")]
        day: Option<u32>,
    },

    /// Set the current user (identity only, no credential check)
    Login {
        /// Staff id to log in as
        #[arg(long = "staff")]
        staff: i64,
    },

    /// Clear the current user
    Logout,
}
