pub mod categories;
pub mod dashboard;
pub mod demo;
pub mod init;
pub mod transactions;
pub mod trends;
pub mod years;

use std::path::Path;

use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::error::Result;
use crate::settings::{load_settings, Settings};
use crate::store::TransactionStore;

#[derive(Parser)]
#[command(
    name = "tally",
    about = "Personal spending dashboard: totals, categories and trends from a purchases CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Yearly overview: totals, monthly average, top category, monthly spending.
    Dashboard {
        /// Year to show (default: current year)
        #[arg(long)]
        year: Option<i32>,
        /// CSV file to load (default: from settings)
        #[arg(long)]
        file: Option<String>,
    },
    /// Category breakdown for a year.
    Categories {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        file: Option<String>,
    },
    /// Per-category monthly spending matrix for a year.
    Trends {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        file: Option<String>,
    },
    /// List transactions, newest first, with optional filters.
    Transactions {
        #[arg(long)]
        file: Option<String>,
        /// Exact category match
        #[arg(long)]
        category: Option<String>,
        /// Exact payment type match
        #[arg(long = "payment-type")]
        payment_type: Option<String>,
        /// Minimum amount (inclusive)
        #[arg(long)]
        min: Option<f64>,
        /// Maximum amount (inclusive)
        #[arg(long)]
        max: Option<f64>,
        /// Case-insensitive search over item and additional info
        #[arg(long)]
        search: Option<String>,
    },
    /// List the years present in the data, most recent first.
    Years {
        #[arg(long)]
        file: Option<String>,
    },
    /// Write the settings file (CSV path, currency code).
    Init {
        /// Default CSV file path
        #[arg(long = "csv-file")]
        csv_file: Option<String>,
        /// Currency code used in formatted amounts, e.g. AED or USD
        #[arg(long)]
        currency: Option<String>,
    },
    /// Generate a sample transactions CSV to explore tally.
    Demo {
        /// Output path (default: transactions.csv)
        #[arg(long)]
        output: Option<String>,
    },
}

/// A loaded store plus everything the commands share.
pub(crate) struct Session {
    pub store: TransactionStore,
    pub settings: Settings,
    pub today: NaiveDate,
}

impl Session {
    pub fn year_or_current(&self, year: Option<i32>) -> i32 {
        year.unwrap_or_else(|| self.today.year())
    }
}

/// Load the CSV (explicit `--file` wins over settings), printing any parse
/// warnings to stderr. Load failure aborts the command.
pub(crate) fn open(file: Option<&str>) -> Result<Session> {
    let settings = load_settings();
    let today = Local::now().date_naive();
    let path = file.unwrap_or(&settings.csv_file).to_string();

    let mut store = TransactionStore::new();
    let summary = store.load(Path::new(&path), today)?;

    for warning in store.warnings() {
        eprintln!("{}", format!("Warning: {warning}").yellow());
    }
    if summary.loaded == 0 {
        eprintln!("{}", format!("Loaded 0 transactions from {path}").yellow());
    }

    Ok(Session {
        store,
        settings,
        today,
    })
}
