use comfy_table::{Cell, Table};

use crate::cli::open;
use crate::error::Result;
use crate::views::{trend_matrix, MONTH_NAMES};

pub fn run(year: Option<i32>, file: Option<&str>) -> Result<()> {
    let session = open(file)?;
    let year = session.year_or_current(year);

    let matrix = trend_matrix(session.store.transactions(), year, session.today);
    if matrix.series.is_empty() {
        println!("No transactions in {year}.");
        return Ok(());
    }

    let mut table = Table::new();
    let mut header = vec!["Category".to_string()];
    header.extend(MONTH_NAMES.iter().map(|m| m.to_string()));
    table.set_header(header);

    for series in &matrix.series {
        let mut row = vec![Cell::new(&series.category)];
        for value in &series.values {
            row.push(match value {
                Some(v) => Cell::new(format!("{v:.2}")),
                None => Cell::new("\u{2014}"),
            });
        }
        table.add_row(row);
    }
    println!("Spending Trends ({})\n{table}", matrix.year);

    Ok(())
}
