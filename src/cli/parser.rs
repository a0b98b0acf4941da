use crate::core::sort::SortField;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for triplogger
/// CLI application to log shopping trips and exercise sessions on a map
#[derive(Parser)]
#[command(
    name = "triplogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple event logging CLI: pin shopping trips and exercise sessions to map coordinates",
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
    },

    /// Log a new event at a map coordinate
    Add {
        /// Event kind: shopping or exercise (defaults to the configured kind)
        kind: Option<String>,

        /// Latitude of the clicked map position
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        /// Longitude of the clicked map position
        #[arg(long, allow_hyphen_values = true)]
        lng: f64,

        /// Distance in kilometers
        #[arg(long, allow_hyphen_values = true)]
        distance: f64,

        /// Duration in minutes
        #[arg(long, allow_hyphen_values = true)]
        duration: f64,

        /// Money spent (shopping events only)
        #[arg(long, allow_hyphen_values = true)]
        cost: Option<f64>,

        /// Calories burned (exercise events only)
        #[arg(long, allow_hyphen_values = true)]
        calories: Option<f64>,
    },

    /// List logged events in store order
    List {
        #[arg(long = "map", help = "Also render the map marker view")]
        map: bool,
    },

    /// Re-order events by a field, toggling the direction
    Sort {
        /// Field to sort by
        #[arg(value_enum)]
        field: SortField,
    },

    /// Delete every event and the persisted snapshot
    Clear {
        #[arg(long, help = "Confirm deletion of all events")]
        yes: bool,
    },

    /// Export logged events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
