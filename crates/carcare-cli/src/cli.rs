//! CLI definition using clap

use carcare_types::{OutputFormat, ServiceKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "carcare")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Vehicle maintenance tracker: service history, due dates and yearly costs")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Data directory override
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage cars
    Car {
        #[command(subcommand)]
        action: CarAction,
    },

    /// Manage service records
    Service {
        #[command(subcommand)]
        action: ServiceAction,
    },

    /// Show upcoming maintenance of a car and raise overdue alerts
    Due {
        /// Car ID
        car: String,

        /// Evaluate as of this date (YYYY-MM-DD) instead of now
        #[arg(long)]
        today: Option<String>,
    },

    /// Show yearly service costs per car
    Stats {
        /// Calendar year. Defaults to the current year.
        #[arg(long, short = 'y')]
        year: Option<i32>,

        /// Also write the report to an Excel file
        #[arg(long, short = 'o')]
        export: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Enable/disable overdue alerts
        #[arg(long)]
        set_notifications: Option<bool>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Subcommand)]
pub enum CarAction {
    /// Register a car
    Add {
        #[arg(long)]
        brand: String,

        #[arg(long)]
        model: String,

        /// Year of manufacture
        #[arg(long)]
        year: i32,

        /// Current odometer reading in km
        #[arg(long, short = 'm')]
        mileage: u32,

        /// Path or URL of a picture
        #[arg(long)]
        image: Option<String>,
    },

    /// List cars
    List {
        /// Filter by brand/model (case-insensitive)
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show one car with its service history
    Show {
        /// Car ID
        id: String,
    },

    /// Delete a car together with its service history
    Remove {
        /// Car ID
        id: String,
    },

    /// Record a new odometer reading (ignored if lower than the current one)
    Mileage {
        /// Car ID
        id: String,

        /// Odometer reading in km
        km: u32,
    },
}

#[derive(Subcommand)]
pub enum ServiceAction {
    /// Log a service
    Add {
        /// Car ID
        car: String,

        #[arg(long, short = 'k', value_enum)]
        kind: ServiceKind,

        /// Date of service (YYYY-MM-DD). Defaults to today.
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Odometer reading at the service in km. Defaults to the car's current reading.
        #[arg(long)]
        odometer: Option<u32>,

        #[arg(long, short = 'c', default_value = "0")]
        cost: f64,

        #[arg(long, short = 'n', default_value = "")]
        note: String,
    },

    /// List the service history of a car, newest first
    List {
        /// Car ID
        car: String,
    },

    /// Delete a service record
    Remove {
        /// Service record ID
        id: String,
    },
}
