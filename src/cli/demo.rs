use chrono::{Datelike, Local, Months, NaiveDate};

use crate::error::Result;

/// Fixed monthly purchases generated for every month.
struct RecurringRow {
    day: u32,
    category: &'static str,
    item: &'static str,
    amount: &'static str,
    payment: &'static str,
}

const RECURRING: &[RecurringRow] = &[
    RecurringRow { day: 1, category: "Phone", item: "Mobile plan", amount: "99.00", payment: "Card" },
    RecurringRow { day: 2, category: "Investment", item: "Index fund deposit", amount: "1,000.00", payment: "Bank transfer" },
    RecurringRow { day: 5, category: "Entertainment", item: "Streaming subscription", amount: "39.00", payment: "Card" },
    RecurringRow { day: 28, category: "Charity", item: "Monthly donation", amount: "50.00", payment: "Bank transfer" },
];

/// Meal spots cycled across months: (category, item, amount).
const MEALS: &[(&str, &str, &str)] = &[
    ("Food", "Shawarma lunch", "27.50"),
    ("Food", "Biryani takeaway", "42.00"),
    ("Snacks", "Karak and snacks", "12.25"),
    ("Food", "Friday brunch", "185.00"),
    ("Food", "Grocery top-up", "96.40"),
    ("Snacks", "Coffee beans", "58.00"),
];

/// One-off extras; each month picks three from the pool.
struct RotatingRow {
    day: u32,
    category: &'static str,
    item: &'static str,
    amount: &'static str,
    payment: &'static str,
    info: &'static str,
}

const ROTATING: &[RotatingRow] = &[
    RotatingRow { day: 7, category: "Travel fare", item: "Metro card top-up", amount: "100.00", payment: "Card", info: "" },
    RotatingRow { day: 9, category: "Shopping", item: "Running shoes", amount: "349.00", payment: "Card", info: "sale" },
    RotatingRow { day: 11, category: "Entertainment", item: "Cinema tickets", amount: "70.00", payment: "Card", info: "" },
    RotatingRow { day: 13, category: "Travel fare", item: "Taxi", amount: "32.50", payment: "Cash", info: "airport run" },
    RotatingRow { day: 16, category: "Shopping", item: "Headphones", amount: "1,299.00", payment: "Card", info: "" },
    RotatingRow { day: 18, category: "Snacks", item: "Office vending", amount: "8.75", payment: "Cash", info: "" },
    RotatingRow { day: 21, category: "Other", item: "Dry cleaning", amount: "45.00", payment: "Cash", info: "" },
    RotatingRow { day: 24, category: "Shopping", item: "Books", amount: "120.00", payment: "Card", info: "" },
    RotatingRow { day: 26, category: "Travel fare", item: "Bus pass", amount: "55.00", payment: "Card", info: "monthly" },
    RotatingRow { day: 27, category: "Entertainment", item: "Arcade night", amount: "64.00", payment: "Card", info: "" },
];

/// Clamp a day to the last valid day of the given year/month.
fn clamp_day(year: i32, month: u32, day: u32) -> u32 {
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    day.min(first_of_next.pred_opt().unwrap().day())
}

fn make_date(year: i32, month: u32, day: u32) -> String {
    let d = clamp_day(year, month, day);
    format!("{d:02}/{month:02}/{year:04}")
}

/// Build 18 months of sample purchases ending at the current month.
/// Deterministic for a given `today`.
fn generate_rows(today: NaiveDate) -> Vec<[String; 6]> {
    let mut rows = Vec::new();

    for i in 0..18u32 {
        // i=0 is 17 months ago, i=17 is the current month
        let months_ago = 17 - i;
        let target = today - Months::new(months_ago);
        let year = target.year();
        let month = target.month();
        let idx = i as usize;

        for r in RECURRING {
            rows.push([
                make_date(year, month, r.day),
                r.category.to_string(),
                r.item.to_string(),
                r.amount.to_string(),
                r.payment.to_string(),
                String::new(),
            ]);
        }

        // Two meals per month, cycling through the pool
        for (j, day) in [(0usize, 10u32), (1, 20)] {
            let (category, item, amount) = MEALS[(idx * 2 + j) % MEALS.len()];
            rows.push([
                make_date(year, month, day),
                category.to_string(),
                item.to_string(),
                amount.to_string(),
                "Card".to_string(),
                String::new(),
            ]);
        }

        // Three extras per month from the rotating pool
        for j in 0..3usize {
            let r = &ROTATING[(idx * 3 + j) % ROTATING.len()];
            rows.push([
                make_date(year, month, r.day),
                r.category.to_string(),
                r.item.to_string(),
                r.amount.to_string(),
                r.payment.to_string(),
                r.info.to_string(),
            ]);
        }
    }

    rows
}

pub fn run(output: Option<&str>) -> Result<()> {
    let path = output.unwrap_or("transactions.csv");
    let today = Local::now().date_naive();
    let rows = generate_rows(today);

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        "Purchase Date",
        "Category",
        "Item",
        "Amount",
        "Payment Type",
        "Additional Information",
    ])?;
    for row in &rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    println!("Wrote {} sample transactions to {path}", rows.len());
    println!();
    println!("Try these next:");
    println!("  tally years --file {path}");
    println!("  tally dashboard --file {path}");
    println!("  tally categories --file {path}");
    println!("  tally trends --file {path}");

    Ok(())
}
