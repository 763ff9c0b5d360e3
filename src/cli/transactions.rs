use comfy_table::{Cell, Table};

use crate::cli::open;
use crate::error::Result;
use crate::fmt::money;
use crate::query::{by_filter, Filter};
use crate::views::table_rows;

pub fn run(
    file: Option<&str>,
    category: Option<String>,
    payment_type: Option<String>,
    min: Option<f64>,
    max: Option<f64>,
    search: Option<String>,
) -> Result<()> {
    let session = open(file)?;

    let filter = Filter {
        category,
        payment_type,
        amount_min: min,
        amount_max: max,
        search,
    };
    let matched = by_filter(session.store.transactions(), &filter);
    let rows = table_rows(&matched);

    if rows.is_empty() {
        println!("No transactions found.");
        return Ok(());
    }

    let currency = &session.settings.currency;
    let total: f64 = rows.iter().map(|r| r.amount).sum();

    let mut table = Table::new();
    table.set_header(vec![
        "Date",
        "Category",
        "Item",
        "Amount",
        "Payment Type",
        "Additional Information",
    ]);
    for r in &rows {
        table.add_row(vec![
            Cell::new(r.date.format("%d/%m/%Y")),
            Cell::new(&r.category),
            Cell::new(&r.item),
            Cell::new(money(r.amount, currency)),
            Cell::new(&r.payment_type),
            Cell::new(&r.additional_info),
        ]);
    }
    println!(
        "Transactions ({} of {} shown, total: {})\n{table}",
        rows.len(),
        session.store.len(),
        money(total, currency)
    );

    Ok(())
}
