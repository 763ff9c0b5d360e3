use chrono::{Datelike, NaiveDate};

use crate::aggregate::{
    category_totals, monthly_average, monthly_totals, monthly_totals_by_category, top_category,
    total,
};
use crate::fmt::category_icon;
use crate::models::{CategoryTotal, Transaction};
use crate::query::{by_year, by_year_and_month};

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// ---------------------------------------------------------------------------
// Dashboard stats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub year: i32,
    pub year_total: f64,
    /// Spend of the month containing `today`; None for any other year
    /// (the original dashboard shows "N/A for past years").
    pub month_total: Option<f64>,
    pub monthly_average: f64,
    /// Months used for the average: 12 for a past year, current month
    /// index + 1 for the year containing today.
    pub months_elapsed: u32,
    pub top_category: CategoryTotal,
}

pub fn dashboard_stats(records: &[Transaction], year: i32, today: NaiveDate) -> DashboardStats {
    let year_records = by_year(records, year);
    let year_total = total(&year_records);

    let is_current_year = year == today.year();
    let month_total = is_current_year
        .then(|| total(&by_year_and_month(records, year, today.month0())));
    let months_elapsed = if is_current_year { today.month0() + 1 } else { 12 };

    DashboardStats {
        year,
        year_total,
        month_total,
        monthly_average: monthly_average(year_total, months_elapsed),
        months_elapsed,
        top_category: top_category(&year_records),
    }
}

// ---------------------------------------------------------------------------
// Month-indexed chart series (with future-month masking)
// ---------------------------------------------------------------------------

/// Mask months that have not happened yet: for the year containing `today`,
/// slots after the current month become None so a chart doesn't draw a fake
/// zero-spend tail. Other years pass through untouched.
fn mask_future_months(values: [f64; 12], year: i32, today: NaiveDate) -> [Option<f64>; 12] {
    let cutoff = if year == today.year() {
        today.month0() as usize
    } else {
        11
    };
    let mut out = [None; 12];
    for (i, v) in values.into_iter().enumerate() {
        if i <= cutoff {
            out[i] = Some(v);
        }
    }
    out
}

/// Aggregate monthly spending for one year, masked for charting. The
/// unmasked totals behind averages are unaffected by this view.
pub fn monthly_spending(
    records: &[Transaction],
    year: i32,
    today: NaiveDate,
) -> [Option<f64>; 12] {
    mask_future_months(monthly_totals(&by_year(records, year)), year, today)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub category: String,
    pub values: [Option<f64>; 12],
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendMatrix {
    pub year: i32,
    pub series: Vec<TrendSeries>,
}

/// Per-category monthly series for one year, categories in first-encountered
/// order, each masked like `monthly_spending`.
pub fn trend_matrix(records: &[Transaction], year: i32, today: NaiveDate) -> TrendMatrix {
    let year_records = by_year(records, year);
    let series = monthly_totals_by_category(&year_records)
        .into_iter()
        .map(|(category, values)| TrendSeries {
            category,
            values: mask_future_months(values, year, today),
        })
        .collect();
    TrendMatrix { year, series }
}

// ---------------------------------------------------------------------------
// Category breakdown tiles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTile {
    pub category: String,
    pub total: f64,
    pub icon: &'static str,
}

/// Category totals sorted by amount descending, each with its icon key.
pub fn category_breakdown(records: &[Transaction]) -> Vec<CategoryTile> {
    let mut tiles: Vec<CategoryTile> = category_totals(records)
        .into_iter()
        .map(|c| CategoryTile {
            icon: category_icon(&c.category),
            category: c.category,
            total: c.total,
        })
        .collect();
    tiles.sort_by(|a, b| b.total.total_cmp(&a.total));
    tiles
}

// ---------------------------------------------------------------------------
// Transactions table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub date: NaiveDate,
    pub category: String,
    pub item: String,
    pub amount: f64,
    pub payment_type: String,
    pub additional_info: String,
}

/// All rows, most recent first; equal dates keep their CSV order.
pub fn table_rows(records: &[Transaction]) -> Vec<TableRow> {
    let mut rows: Vec<TableRow> = records
        .iter()
        .map(|t| TableRow {
            date: t.date,
            category: t.category.clone(),
            item: t.item.clone(),
            amount: t.amount,
            payment_type: t.payment_type.clone().unwrap_or_default(),
            additional_info: t.additional_info.clone().unwrap_or_default(),
        })
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}
