//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Show a month calendar with period dates highlighted (default)
    Show {
        /// Month to display (YYYY-MM, default: current month)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// List recorded and forecast dates
    List {
        /// Only dates on or after this day (YYYYMMDD or YYYY-MM-DD)
        #[arg(short, long)]
        since: Option<String>,
        /// Only dates on or before this day (YYYYMMDD or YYYY-MM-DD)
        #[arg(short, long)]
        until: Option<String>,
    },
    /// Print the last known date
    Last,
    /// Confirm a period start and regenerate the forecast after it
    Add {
        /// Period start date (YYYYMMDD or YYYY-MM-DD)
        date: String,
    },
    /// Remove a date
    Remove {
        /// Date to remove (YYYYMMDD or YYYY-MM-DD)
        date: String,
        /// Also remove every later date
        #[arg(short, long)]
        later: bool,
    },
    /// Remove every date after the given one
    Clear {
        /// Boundary date (YYYYMMDD or YYYY-MM-DD)
        date: String,
        /// Also remove the boundary date itself
        #[arg(short, long)]
        inclusive: bool,
    },
    /// Generate more forecast dates
    Forecast {
        /// Rebuild the forecast from this date instead of extending after the last one
        #[arg(short, long)]
        from: Option<String>,
    },
    /// Show or set the number of days between periods
    Span {
        /// New span in days
        days: Option<String>,
    },
    /// Delete every recorded date
    Reset,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Show { month: None }
    }
}
