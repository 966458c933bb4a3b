use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timecard
/// CLI application to track worked hours and extra-hours balance with SQLite
#[derive(Parser)]
#[command(
    name = "timecard",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track worked hours, extra-hours balance and day compliance from clock events",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Skip the balance footer printed after mutations
    #[arg(global = true, long = "no-balance")]
    pub no_balance: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or update the tracked profile and its schedule
    Profile {
        #[arg(long = "first-name")]
        first_name: Option<String>,

        #[arg(long = "last-name")]
        last_name: Option<String>,

        #[arg(long)]
        company: Option<String>,

        /// Location used to match holidays
        #[arg(long)]
        location: Option<String>,

        /// First tracked day (YYYY-MM-DD); default range starts here
        #[arg(long = "start-date")]
        start_date: Option<String>,

        #[arg(long = "office-hours", help = "Scheduled hours per workday")]
        office_hours: Option<i64>,

        #[arg(long = "max-extra-hours", help = "Tolerated extra hours per day")]
        max_extra_hours: Option<i64>,

        #[arg(long = "lunch-hours", help = "Required lunch break, in hours")]
        lunch_hours: Option<i64>,

        #[arg(long = "min-rest-hours", help = "Required rest between workdays")]
        min_rest_hours: Option<i64>,

        #[arg(
            long = "auto-lunch-minutes",
            help = "Lunch estimate deducted while a day has fewer than three cards"
        )]
        auto_lunch_minutes: Option<i64>,
    },

    /// Record a clock card right now
    Clock {
        /// Skip the today report printed after clocking
        #[arg(long = "no-report")]
        no_report: bool,
    },

    /// Insert a card at an explicit date and time
    Add {
        /// Date of the card (YYYY-MM-DD)
        date: String,

        /// Local time of the card (HH:MM or HH:MM:SS)
        time: String,
    },

    /// Remove one card by its uuid
    Rm { uuid: String },

    /// List the cards of a day
    Cards {
        /// Date to list (YYYY-MM-DD); defaults to today
        date: Option<String>,
    },

    /// Where the current day stands: worked time and clock-out targets
    Today,

    /// Extra-hours balance over a range
    Balance {
        #[arg(
            long,
            value_name = "RANGE",
            help = "Year, month, day or start:end range; defaults to start-date through yesterday"
        )]
        range: Option<String>,

        /// Also print the per-day breakdown
        #[arg(long)]
        detail: bool,
    },

    /// Per-day compliance report over a range
    Status {
        #[arg(
            long,
            value_name = "RANGE",
            help = "Year, month, day or start:end range; defaults to start-date through yesterday"
        )]
        range: Option<String>,

        /// Lowest severity to show: all, ok, info, warn, error or none
        #[arg(long, default_value = "all")]
        severity: String,
    },

    /// Record or list holidays for the profile's location
    Holiday {
        /// Date of the holiday (YYYY-MM-DD)
        date: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(
            long = "hours",
            default_value_t = 0,
            help = "Hours still to be worked on that day (0 = fully off)"
        )]
        hours: i64,

        /// Repeat every year on the same day and month
        #[arg(long)]
        recurring: bool,

        #[arg(long)]
        list: bool,
    },

    /// Record or list absences
    Absence {
        /// Date of the absence (YYYY-MM-DD)
        date: Option<String>,

        #[arg(long)]
        description: Option<String>,

        /// Authorized absences cancel the scheduled hours of the day
        #[arg(long)]
        authorized: bool,

        #[arg(long)]
        list: bool,
    },

    /// Export time cards
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
