use comfy_table::{Cell, Table};

use crate::cli::open;
use crate::error::Result;
use crate::fmt::money;
use crate::query::by_year;
use crate::views::category_breakdown;

pub fn run(year: Option<i32>, file: Option<&str>) -> Result<()> {
    let session = open(file)?;
    let year = session.year_or_current(year);
    let records = by_year(session.store.transactions(), year);

    let tiles = category_breakdown(&records);
    if tiles.is_empty() {
        println!("No transactions in {year}.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Icon", "Category", "Amount"]);
    for tile in &tiles {
        table.add_row(vec![
            Cell::new(tile.icon),
            Cell::new(&tile.category),
            Cell::new(money(tile.total, &session.settings.currency)),
        ]);
    }
    println!("Category Breakdown ({year})\n{table}");

    Ok(())
}
