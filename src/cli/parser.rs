use crate::core::calculator::heatmap::HeatmapGrouping;
use crate::export::{ExportFormat, ReportKind};
use clap::{Parser, Subcommand};

/// Command-line interface definition for rCareLog
/// CLI application to analyze caregiving activity logs exported as CSV
#[derive(Parser)]
#[command(
    name = "rcarelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Analyze caregiving activity logs: events per day, feed averages and hour-of-day heatmaps",
    long_about = None
)]
pub struct Cli {
    /// Activity log to analyze (CSV with header
    /// Type,Start,End,Duration,Start Condition,Start Location,End Condition,Notes)
    #[arg(global = true, long = "file", value_name = "CSV")]
    pub file: Option<String>,

    /// Print diagnostic logs to stderr (filter with RUST_LOG)
    #[arg(global = true, long = "debug")]
    pub debug: bool,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Show the configuration in effect
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Load and validate the file: status, event types and default date range
    Load,

    /// Number of events per day for one type
    Counts {
        /// Event type (exact match, e.g. Feed)
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        kind: String,
    },

    /// Average duration and average number of events per day over a date range
    Averages {
        /// Event type (default: `averages_type` from the configuration, "Feed")
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        kind: Option<String>,

        /// Date range (inclusive).
        ///
        /// Supported formats:
        /// - YYYY, YYYY-MM, YYYY-MM-DD
        /// - YYYY:YYYY, YYYY-MM:YYYY-MM, YYYY-MM-DD:YYYY-MM-DD
        /// - all → first to last Start date in the file
        ///
        /// If omitted, the whole file is used.
        #[arg(long, short, value_name = "RANGE")]
        range: Option<String>,
    },

    /// Event density by hour of day, per day (default) or collapsed
    Heatmap {
        /// Event type (exact match, e.g. Feed)
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        kind: String,

        /// Group by hour only (drops the date dimension)
        #[arg(long = "by-hour")]
        by_hour: bool,

        /// Restrict to a date range (same formats as `averages --range`)
        #[arg(long, short, value_name = "RANGE")]
        range: Option<String>,
    },

    /// Events of one type starting close to the end of another at the same location
    Pairs {
        /// First event type (default: `pairing_first_type`, "Feed")
        #[arg(long)]
        first: Option<String>,

        /// Second event type (default: `pairing_second_type`, "Diaper")
        #[arg(long)]
        second: Option<String>,

        /// Maximum distance in minutes (default: `pairing_window_minutes`, 15)
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
        window: Option<i64>,
    },

    /// Export a result table in various formats
    Export {
        /// Result table to export
        #[arg(long, value_enum)]
        report: ReportKind,

        /// Export format: csv, json, xlsx
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        out: String,

        /// Event type (required for counts, heatmap and hours)
        #[arg(long = "type", short = 't', value_name = "TYPE")]
        kind: Option<String>,

        /// Date range (same formats as `averages --range`)
        #[arg(long, short, value_name = "RANGE")]
        range: Option<String>,

        /// First event type for the pairs report
        #[arg(long)]
        first: Option<String>,

        /// Second event type for the pairs report
        #[arg(long)]
        second: Option<String>,

        /// Window in minutes for the pairs report
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
        window: Option<i64>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

impl Commands {
    /// Heatmap grouping selected by `--by-hour`.
    pub fn grouping(by_hour: bool) -> HeatmapGrouping {
        if by_hour {
            HeatmapGrouping::Hour
        } else {
            HeatmapGrouping::HourAndDay
        }
    }
}
