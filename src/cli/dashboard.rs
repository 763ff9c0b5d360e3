use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::cli::open;
use crate::error::Result;
use crate::fmt::money;
use crate::views::{dashboard_stats, monthly_spending, MONTH_NAMES};

pub fn run(year: Option<i32>, file: Option<&str>) -> Result<()> {
    let session = open(file)?;
    let year = session.year_or_current(year);
    let records = session.store.transactions();
    let currency = &session.settings.currency;

    let stats = dashboard_stats(records, year, session.today);

    let mut table = Table::new();
    table.set_header(vec!["Stat", "Value"]);
    table.add_row(vec![
        Cell::new(format!("Total Spend ({})", stats.year).bold()),
        Cell::new(money(stats.year_total, currency)),
    ]);
    match stats.month_total {
        Some(month_total) => {
            table.add_row(vec![
                Cell::new("This Month's Spend"),
                Cell::new(money(month_total, currency)),
            ]);
        }
        None => {
            table.add_row(vec![
                Cell::new("Monthly Data"),
                Cell::new("N/A for past years"),
            ]);
        }
    }
    table.add_row(vec![
        Cell::new(format!("Monthly Average ({} months)", stats.months_elapsed)),
        Cell::new(money(stats.monthly_average, currency)),
    ]);
    table.add_row(vec![
        Cell::new("Top Category"),
        Cell::new(format!(
            "{} ({})",
            stats.top_category.category,
            money(stats.top_category.total, currency)
        )),
    ]);
    println!("Dashboard\n{table}");

    let series = monthly_spending(records, year, session.today);
    let mut monthly = Table::new();
    monthly.set_header(vec!["Month", "Amount"]);
    for (name, value) in MONTH_NAMES.iter().zip(series.iter()) {
        let cell = match value {
            Some(v) => Cell::new(money(*v, currency)),
            None => Cell::new("\u{2014}"),
        };
        monthly.add_row(vec![Cell::new(name), cell]);
    }
    println!("\nMonthly Spending ({year})\n{monthly}");

    Ok(())
}
