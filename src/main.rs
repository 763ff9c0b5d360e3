mod aggregate;
mod cli;
mod error;
mod fmt;
mod models;
mod parser;
mod query;
mod settings;
mod store;
mod views;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dashboard { year, file } => cli::dashboard::run(year, file.as_deref()),
        Commands::Categories { year, file } => cli::categories::run(year, file.as_deref()),
        Commands::Trends { year, file } => cli::trends::run(year, file.as_deref()),
        Commands::Transactions {
            file,
            category,
            payment_type,
            min,
            max,
            search,
        } => cli::transactions::run(file.as_deref(), category, payment_type, min, max, search),
        Commands::Years { file } => cli::years::run(file.as_deref()),
        Commands::Init { csv_file, currency } => cli::init::run(csv_file, currency),
        Commands::Demo { output } => cli::demo::run(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
